use serde::Deserialize;
use std::collections::HashMap;

/// Identity normalization for a raw display name: trimmed and case-folded.
/// This is deliberately the whole of it — no punctuation stripping, no
/// distance matching. Merging spelling variants beyond case is the alias
/// table's job, because guessing risks merging distinct people.
pub fn normalize(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Explicit name-variant mapping supplied as configuration
/// (e.g. "Shinon" → "Shin'on"). Applied before normalization wherever a
/// player identity is compared.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(from = "HashMap<String, String>")]
pub struct AliasTable {
    canonical_by_variant: HashMap<String, String>
}

impl From<HashMap<String, String>> for AliasTable {
    fn from(aliases: HashMap<String, String>) -> AliasTable {
        let canonical_by_variant = aliases
            .into_iter()
            .map(|(variant, canonical)| (normalize(&variant), canonical))
            .collect();

        AliasTable { canonical_by_variant }
    }
}

impl AliasTable {
    /// The canonical display spelling for a raw name. Names without an
    /// alias entry are their own canonical form.
    pub fn canonical<'a>(&'a self, raw: &'a str) -> &'a str {
        match self.canonical_by_variant.get(&normalize(raw)) {
            Some(canonical) => canonical.as_str(),
            None => raw.trim()
        }
    }

    /// The identity key for a raw name: normalized canonical spelling.
    pub fn key(&self, raw: &str) -> String {
        normalize(self.canonical(raw))
    }
}

/// Arena of canonical player records plus a lookup index from identity key
/// to record id. The aggregator resolves every raw name through here so a
/// player spelled three ways lands in one record.
#[derive(Debug, Default)]
pub struct NameRegistry {
    names: Vec<String>,
    index: HashMap<String, usize>
}

impl NameRegistry {
    pub fn new() -> NameRegistry {
        NameRegistry::default()
    }

    /// Returns the id for this name, inserting a new canonical record on
    /// first sight. The first-seen canonical spelling becomes the display
    /// form for the record.
    pub fn resolve(&mut self, raw: &str, aliases: &AliasTable) -> usize {
        let display = aliases.canonical(raw);
        let key = normalize(display);

        match self.index.get(&key) {
            Some(&id) => id,
            None => {
                let id = self.names.len();
                self.names.push(display.to_string());
                self.index.insert(key, id);
                id
            }
        }
    }

    pub fn display(&self, id: usize) -> &str {
        &self.names[id]
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
