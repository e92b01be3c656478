use anyhow::Context;
use jmforms_config::Config;
use jmforms_lang_japanese::{JMdictLoader, ReadingClassifier};

use crate::io::{render_json, write_outputs};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConversionSummary {
    pub entries: usize,
    pub groups: usize,
}

/// Load the configured JMdict, classify every entry and write the forms index
pub fn run_conversion(config: &Config) -> anyhow::Result<ConversionSummary> {
    let dict = JMdictLoader::load_from_file(&config.jmdict_path)
        .with_context(|| format!("failed to load {}", config.jmdict_path.display()))?;

    let groups = ReadingClassifier::new().classify_document(&dict);
    tracing::info!(
        "Collected {} reading groups from {} entries",
        groups.len(),
        dict.entry_count()
    );

    // Rendered once so both copies are byte-identical
    let json = render_json(&groups)?;
    write_outputs(&config.output.paths(), &json)?;

    Ok(ConversionSummary {
        entries: dict.entry_count(),
        groups: groups.len(),
    })
}
