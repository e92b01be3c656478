pub mod dictionary;
pub mod forms;
pub mod kana;
pub mod loader;

pub use dictionary::{JMdict, JMdictEntry, ReadingElement, ReadingMarker, SenseElement};
pub use forms::{ReadingClassifier, UK_CUTOFF, UK_TEXT};
pub use kana::{hiragana_to_katakana, katakana_to_hiragana};
pub use loader::JMdictLoader;
