use indexmap::IndexMap;
use jmforms_core::{FormInfo, ReadingGroup};

use crate::dictionary::{JMdict, JMdictEntry, ReadingMarker};
use crate::kana::katakana_to_hiragana;

/// Sense annotation marking a word as usually written in kana
pub const UK_TEXT: &str = "word usually written using kana alone";

/// Share of senses that must carry [`UK_TEXT`] for the entry to count as usually kana
pub const UK_CUTOFF: f64 = 0.6;

/// Groups each entry's written forms under the readings they are searched by
#[derive(Debug, Clone, Copy, Default)]
pub struct ReadingClassifier {
    keep_singletons: bool,
}

impl ReadingClassifier {
    /// Drops groups with a single form
    pub fn new() -> Self {
        Self::default()
    }

    /// Keeps every group, including those with a single form
    pub fn keeping_singletons() -> Self {
        Self {
            keep_singletons: true,
        }
    }

    /// Reading groups of one entry, in first-seen reading order
    pub fn reading_groups(&self, entry: &JMdictEntry) -> Vec<ReadingGroup> {
        let mut readings_to_forms: IndexMap<String, Vec<FormInfo>> = IndexMap::new();

        for reading in &entry.readings {
            match &reading.marker {
                ReadingMarker::Restricted(forms) => {
                    for form in forms {
                        readings_to_forms
                            .entry(reading.text.clone())
                            .or_default()
                            .push(FormInfo::new(form.as_str()));
                    }
                }
                ReadingMarker::NoKanji => {
                    // Searched as &term=ウオジラミ&reading=ウオジラミ, so keyed by its hiragana form
                    readings_to_forms
                        .entry(katakana_to_hiragana(&reading.text))
                        .or_default()
                        .push(FormInfo::with_override(reading.text.as_str(), reading.text.as_str()));
                }
                ReadingMarker::Unrestricted => {
                    for kanji in &entry.kanji {
                        readings_to_forms
                            .entry(reading.text.clone())
                            .or_default()
                            .push(FormInfo::new(kanji.as_str()));
                    }
                }
            }
        }

        if is_usually_kana(entry) {
            tracing::debug!(
                "Entry {} is usually kana, indexing {} readings as forms",
                entry.ent_seq.as_deref().unwrap_or("<no ent_seq>"),
                readings_to_forms.len()
            );
            for (reading, forms) in readings_to_forms.iter_mut() {
                forms.push(FormInfo::new(reading.as_str()));
            }
        }

        readings_to_forms
            .into_iter()
            .filter(|(_, forms)| self.keep_singletons || forms.len() > 1)
            .map(|(reading, expressions)| ReadingGroup {
                reading,
                expressions,
            })
            .collect()
    }

    /// Reading groups of every entry, concatenated in document order
    pub fn classify_document(&self, dict: &JMdict) -> Vec<ReadingGroup> {
        dict.entries()
            .iter()
            .flat_map(|entry| self.reading_groups(entry))
            .collect()
    }
}

fn is_usually_kana(entry: &JMdictEntry) -> bool {
    entry
        .marked_sense_ratio(UK_TEXT)
        .is_some_and(|ratio| ratio > UK_CUTOFF)
}
