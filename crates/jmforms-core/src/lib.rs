pub mod error;
pub mod types;

pub use error::ConvertError;
pub use types::{FormInfo, ReadingGroup};
