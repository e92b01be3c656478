use serde::{Deserialize, Serialize};

/// One written form associated with a reading
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormInfo {
    pub kanji: String,
    /// Literal reading to search with instead of the group's key
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub override_reading: Option<String>,
}

impl FormInfo {
    pub fn new(kanji: impl Into<String>) -> Self {
        Self {
            kanji: kanji.into(),
            override_reading: None,
        }
    }

    pub fn with_override(kanji: impl Into<String>, reading: impl Into<String>) -> Self {
        Self {
            kanji: kanji.into(),
            override_reading: Some(reading.into()),
        }
    }
}

/// A reading and every form indexed under it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadingGroup {
    pub reading: String,
    pub expressions: Vec<FormInfo>,
}
