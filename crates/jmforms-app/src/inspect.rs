use anyhow::Context;
use jmforms_config::Config;
use jmforms_core::ReadingGroup;
use jmforms_lang_japanese::{JMdict, JMdictEntry, JMdictLoader, ReadingClassifier};

use crate::io::render_json;

/// Which entries to show
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntrySelector {
    Seq(String),
    Kanji(String),
    Reading(String),
}

impl EntrySelector {
    pub fn matches(&self, entry: &JMdictEntry) -> bool {
        match self {
            EntrySelector::Seq(seq) => entry.ent_seq.as_deref() == Some(seq.as_str()),
            EntrySelector::Kanji(keb) => entry.kanji.iter().any(|k| k == keb),
            EntrySelector::Reading(reb) => entry.readings.iter().any(|r| &r.text == reb),
        }
    }
}

/// Reading groups of every selected entry
pub fn inspect_entries(
    dict: &JMdict,
    selector: &EntrySelector,
    classifier: ReadingClassifier,
) -> Vec<ReadingGroup> {
    dict.entries()
        .iter()
        .filter(|entry| selector.matches(entry))
        .flat_map(|entry| {
            tracing::debug!("Matched entry {:?}", entry.ent_seq);
            classifier.reading_groups(entry)
        })
        .collect()
}

/// Print the selected entries' groups to stdout without writing any files
pub fn run_inspect(config: &Config, selector: &EntrySelector, keep_singletons: bool) -> anyhow::Result<()> {
    let dict = JMdictLoader::load_from_file(&config.jmdict_path)
        .with_context(|| format!("failed to load {}", config.jmdict_path.display()))?;

    let classifier = if keep_singletons {
        ReadingClassifier::keeping_singletons()
    } else {
        ReadingClassifier::new()
    };

    let groups = inspect_entries(&dict, selector, classifier);
    if groups.is_empty() {
        tracing::warn!("No reading groups for {:?}", selector);
    }

    println!("{}", render_json(&groups)?);
    Ok(())
}
