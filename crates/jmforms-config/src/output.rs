use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

pub const DEFAULT_OPUS_PATH: &str = "output/opus/user_files/jmdict_forms.json";
pub const DEFAULT_MP3_PATH: &str = "output/mp3/user_files/jmdict_forms.json";

/// Destinations for the generated forms index. Both receive identical bytes.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct OutputConfig {
    pub opus_path: PathBuf,
    pub mp3_path: PathBuf,
}

impl OutputConfig {
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let opus_path = lookup("OUTPUT_OPUS_PATH").unwrap_or_else(|| DEFAULT_OPUS_PATH.to_string());
        let mp3_path = lookup("OUTPUT_MP3_PATH").unwrap_or_else(|| DEFAULT_MP3_PATH.to_string());

        Self {
            opus_path: opus_path.into(),
            mp3_path: mp3_path.into(),
        }
    }

    pub fn paths(&self) -> [&Path; 2] {
        [&self.opus_path, &self.mp3_path]
    }
}
