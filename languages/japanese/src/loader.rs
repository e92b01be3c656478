use std::path::Path;

use jmforms_core::ConvertError;

use crate::dictionary::JMdict;

pub struct JMdictLoader;

impl JMdictLoader {
    /// Load dictionary from an XML file path
    pub fn load_from_file(path: &Path) -> Result<JMdict, ConvertError> {
        tracing::info!("Loading JMdict from file: {}", path.display());
        let xml = std::fs::read_to_string(path).map_err(|e| ConvertError::from_read(path, e))?;
        let dict = JMdict::from_xml(&xml)?;
        tracing::info!("Loaded {} dictionary entries from file", dict.entry_count());
        Ok(dict)
    }

    /// Load dictionary from in-memory XML
    pub fn load_from_str(xml: &str) -> Result<JMdict, ConvertError> {
        JMdict::from_xml(xml)
    }
}
