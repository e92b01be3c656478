use std::env;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use self::output::OutputConfig;

pub mod output;

pub const DEFAULT_JMDICT_PATH: &str = "temp/JMdict_e";

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Config {
    /// JMdict XML source
    pub jmdict_path: PathBuf,
    pub output: OutputConfig,
    /// Emit logs as JSON lines instead of human-readable text
    pub log_json: bool,
}

impl Config {
    pub fn new() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let jmdict_path = lookup("JMDICT_PATH").unwrap_or_else(|| DEFAULT_JMDICT_PATH.to_string());

        let log_json = lookup("LOG_JSON")
            .map(|v| matches!(v.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
            .unwrap_or(false);

        Config {
            jmdict_path: jmdict_path.into(),
            output: OutputConfig::from_lookup(&lookup),
            log_json,
        }
    }
}
