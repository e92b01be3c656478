use std::collections::HashMap;

use jmforms_core::ConvertError;
use quick_xml::Reader;
use quick_xml::events::Event;

/// How a reading relates to the entry's written forms
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReadingMarker {
    /// Applies to every written form
    Unrestricted,
    /// Applies only to the listed written forms (`re_restr`)
    Restricted(Vec<String>),
    /// Reading is a standalone search term (`re_nokanji`)
    NoKanji,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadingElement {
    pub text: String,
    pub marker: ReadingMarker,
}

impl ReadingElement {
    pub fn new(text: impl Into<String>, marker: ReadingMarker) -> Self {
        Self {
            text: text.into(),
            marker,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SenseElement {
    /// Text of the sense's first `misc` element
    pub misc: Option<String>,
}

/// JMdict dictionary entry
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JMdictEntry {
    pub ent_seq: Option<String>,
    pub kanji: Vec<String>,
    pub readings: Vec<ReadingElement>,
    pub senses: Vec<SenseElement>,
}

impl JMdictEntry {
    /// Share of senses whose misc text contains `marker`, `None` without senses
    pub fn marked_sense_ratio(&self, marker: &str) -> Option<f64> {
        if self.senses.is_empty() {
            return None;
        }

        let marked = self
            .senses
            .iter()
            .filter(|sense| sense.misc.as_deref().is_some_and(|misc| misc.contains(marker)))
            .count();

        Some(marked as f64 / self.senses.len() as f64)
    }
}

/// Parsed JMdict document, entries in document order
#[derive(Debug, Clone, Default)]
pub struct JMdict {
    entries: Vec<JMdictEntry>,
}

impl JMdict {
    pub fn new(entries: Vec<JMdictEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[JMdictEntry] {
        &self.entries
    }

    /// Get the number of entries in the dictionary
    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }

    /// Parse a complete JMdict XML document
    pub fn from_xml(xml: &str) -> Result<Self, ConvertError> {
        // Untrimmed so leaf text keeps surrounding whitespace; whitespace between tags is never read
        let mut reader = Reader::from_str(xml);
        reader.trim_text(false);

        let mut entities = DtdEntities::default();
        let mut builder = DocumentBuilder::default();
        // Element names from the root down to the current element
        let mut path: Vec<String> = Vec::new();
        let mut text = String::new();
        let mut root_closed = false;

        loop {
            let position = reader.buffer_position();
            let event = reader
                .read_event()
                .map_err(|e| ConvertError::parse(position, e))?;

            match event {
                Event::DocType(e) => {
                    let raw = e.into_inner();
                    entities.extend_from_doctype(&String::from_utf8_lossy(&raw));
                }
                Event::Start(e) => {
                    if root_closed {
                        return Err(ConvertError::parse(position, "junk after document element"));
                    }
                    let name = String::from_utf8_lossy(e.name().as_ref()).into_owned();
                    builder.open(&path, &name);
                    path.push(name);
                    text.clear();
                }
                Event::Empty(e) => {
                    if root_closed {
                        return Err(ConvertError::parse(position, "junk after document element"));
                    }
                    let name = String::from_utf8_lossy(e.name().as_ref()).into_owned();
                    builder.open(&path, &name);
                    builder.close(&path, &name, String::new())?;
                    text.clear();
                    root_closed = path.is_empty();
                }
                Event::Text(e) => {
                    let unescaped = e
                        .unescape_with(|name| entities.resolve(name))
                        .map_err(|err| ConvertError::parse(reader.buffer_position(), err))?;
                    if path.is_empty() {
                        if !unescaped.trim().is_empty() {
                            return Err(ConvertError::parse(position, "text outside document element"));
                        }
                        continue;
                    }
                    text.push_str(&unescaped);
                }
                Event::CData(e) => {
                    if path.is_empty() {
                        return Err(ConvertError::parse(position, "CDATA outside document element"));
                    }
                    let raw = e.into_inner();
                    let cdata = std::str::from_utf8(&raw)
                        .map_err(|err| ConvertError::parse(reader.buffer_position(), err))?;
                    text.push_str(cdata);
                }
                Event::End(_) => {
                    // End names are checked against the open element by the reader
                    let Some(name) = path.pop() else {
                        return Err(ConvertError::parse(position, "unexpected closing tag"));
                    };
                    builder.close(&path, &name, std::mem::take(&mut text))?;
                    root_closed = path.is_empty();
                }
                Event::Eof => break,
                _ => {}
            }
        }

        if let Some(open) = path.last() {
            return Err(ConvertError::parse(
                reader.buffer_position(),
                format!("unexpected end of document inside <{open}>"),
            ));
        }

        let dict = Self::new(builder.entries);
        tracing::debug!("Parsed {} JMdict entries", dict.entry_count());
        Ok(dict)
    }
}

/// Internal general entities declared in the DOCTYPE (`<!ENTITY uk "...">`)
#[derive(Debug, Default)]
struct DtdEntities {
    values: HashMap<String, String>,
}

impl DtdEntities {
    fn extend_from_doctype(&mut self, doctype: &str) {
        let mut rest = doctype;

        while let Some(start) = rest.find("<!ENTITY") {
            rest = &rest[start + "<!ENTITY".len()..];
            if let Some((name, value, remaining)) = parse_entity_decl(rest) {
                self.values.entry(name.to_string()).or_insert_with(|| value.to_string());
                rest = remaining;
            }
        }

        tracing::debug!("Collected {} DTD entities", self.values.len());
    }

    fn resolve(&self, name: &str) -> Option<&str> {
        self.values
            .get(name)
            .map(String::as_str)
            .or_else(|| predefined_entity(name))
    }
}

/// Splits `  name "value">...` into name, value and the remaining input.
/// Parameter and external entities yield `None`.
fn parse_entity_decl(decl: &str) -> Option<(&str, &str, &str)> {
    let decl = decl.trim_start();
    if decl.starts_with('%') {
        return None;
    }

    let name_end = decl.find(char::is_whitespace)?;
    let (name, rest) = decl.split_at(name_end);
    let rest = rest.trim_start();

    let quote = rest.chars().next().filter(|c| *c == '"' || *c == '\'')?;
    let body = &rest[quote.len_utf8()..];
    let value_end = body.find(quote)?;

    Some((name, &body[..value_end], &body[value_end + quote.len_utf8()..]))
}

fn predefined_entity(name: &str) -> Option<&'static str> {
    match name {
        "lt" => Some("<"),
        "gt" => Some(">"),
        "amp" => Some("&"),
        "apos" => Some("'"),
        "quot" => Some("\""),
        _ => None,
    }
}

#[derive(Debug, Default)]
struct ReadingBuilder {
    reb: Option<String>,
    restrictions: Vec<String>,
    no_kanji: bool,
}

impl ReadingBuilder {
    fn build(self, ent_seq: Option<&String>) -> Result<ReadingElement, ConvertError> {
        let Some(text) = self.reb else {
            return Err(ConvertError::InvalidEntry {
                ent_seq: ent_seq.cloned(),
                message: "r_ele without reb".to_string(),
            });
        };

        let marker = if !self.restrictions.is_empty() {
            ReadingMarker::Restricted(self.restrictions)
        } else if self.no_kanji {
            ReadingMarker::NoKanji
        } else {
            ReadingMarker::Unrestricted
        };

        Ok(ReadingElement::new(text, marker))
    }
}

/// Collects entries while the reader walks the tree.
/// Depth 0 is the root element, depth 1 an entry.
#[derive(Debug, Default)]
struct DocumentBuilder {
    entries: Vec<JMdictEntry>,
    entry: Option<JMdictEntry>,
    reading: Option<ReadingBuilder>,
}

impl DocumentBuilder {
    /// `path` holds the ancestors of the element being opened
    fn open(&mut self, path: &[String], name: &str) {
        match (path.len(), name) {
            (1, _) => self.entry = Some(JMdictEntry::default()),
            (2, "r_ele") => self.reading = Some(ReadingBuilder::default()),
            (2, "sense") => {
                if let Some(entry) = self.entry.as_mut() {
                    entry.senses.push(SenseElement::default());
                }
            }
            _ => {}
        }
    }

    /// `path` holds the ancestors of the element being closed
    fn close(&mut self, path: &[String], name: &str, text: String) -> Result<(), ConvertError> {
        match path.len() {
            1 => {
                if let Some(entry) = self.entry.take() {
                    if entry.readings.is_empty() {
                        tracing::warn!(
                            "Entry {} has no readings",
                            entry.ent_seq.as_deref().unwrap_or("<no ent_seq>")
                        );
                    }
                    self.entries.push(entry);
                }
            }
            2 => {
                let Some(entry) = self.entry.as_mut() else {
                    return Ok(());
                };
                match name {
                    "ent_seq" => entry.ent_seq = Some(text),
                    "r_ele" => {
                        if let Some(reading) = self.reading.take() {
                            let reading = reading.build(entry.ent_seq.as_ref())?;
                            entry.readings.push(reading);
                        }
                    }
                    _ => {}
                }
            }
            3 => {
                let parent = path[2].as_str();
                match (parent, name) {
                    ("k_ele", "keb") => {
                        if let Some(entry) = self.entry.as_mut() {
                            entry.kanji.push(text);
                        }
                    }
                    ("r_ele", "reb") => {
                        if let Some(reading) = self.reading.as_mut() {
                            reading.reb.get_or_insert(text);
                        }
                    }
                    ("r_ele", "re_restr") => {
                        if let Some(reading) = self.reading.as_mut() {
                            reading.restrictions.push(text);
                        }
                    }
                    ("r_ele", "re_nokanji") => {
                        if let Some(reading) = self.reading.as_mut() {
                            reading.no_kanji = true;
                        }
                    }
                    ("sense", "misc") => {
                        if let Some(sense) = self.entry.as_mut().and_then(|e| e.senses.last_mut()) {
                            sense.misc.get_or_insert(text);
                        }
                    }
                    _ => {}
                }
            }
            _ => {}
        }
        Ok(())
    }
}
