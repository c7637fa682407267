use anyhow::{bail, Context, Result};
use serde_json::{Map, Value};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Word to definition mapping, kept in input order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dictionary {
    entries: Vec<(String, String)>,
}

impl Dictionary {
    /// Parse a JSON object of `"word": "definition"` pairs.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let object: Map<String, Value> =
            serde_json::from_str(json).context("Dictionary must be a JSON object")?;
        Self::from_object(object)
    }

    fn from_object(object: Map<String, Value>) -> Result<Self> {
        let mut entries = Vec::with_capacity(object.len());
        for (word, value) in object {
            match value {
                Value::String(definition) => entries.push((word, definition)),
                other => bail!(
                    "Definition of '{}' is not a string (found {})",
                    word,
                    json_kind(&other)
                ),
            }
        }
        Ok(Self { entries })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, word: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(w, _)| w == word)
            .map(|(_, definition)| definition.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(word, definition)| (word.as_str(), definition.as_str()))
    }

    /// Add `word`, or replace its definition in place if already present.
    pub fn insert(&mut self, word: impl Into<String>, definition: impl Into<String>) {
        let word = word.into();
        let definition = definition.into();
        match self.entries.iter_mut().find(|(w, _)| *w == word) {
            Some((_, existing)) => *existing = definition,
            None => self.entries.push((word, definition)),
        }
    }
}

impl<W: Into<String>, D: Into<String>> FromIterator<(W, D)> for Dictionary {
    fn from_iter<I: IntoIterator<Item = (W, D)>>(iter: I) -> Self {
        let mut dictionary = Self::default();
        for (word, definition) in iter {
            dictionary.insert(word, definition);
        }
        dictionary
    }
}

/// Load the whole dictionary file into memory.
///
/// Fails if the file is missing, is not JSON, is not a top-level object,
/// or holds a non-string definition.
pub fn load_dictionary(path: &Path) -> Result<Dictionary> {
    log::info!("Loading dictionary from {:?}", path);

    let file = File::open(path).with_context(|| format!("Failed to open {:?}", path))?;
    let object: Map<String, Value> = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("Failed to parse {:?} as a JSON object", path))?;
    let dictionary =
        Dictionary::from_object(object).with_context(|| format!("Invalid dictionary {:?}", path))?;

    log::info!("Loaded {} words", dictionary.len());
    Ok(dictionary)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
