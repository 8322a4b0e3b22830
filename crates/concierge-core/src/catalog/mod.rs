//! The intent catalog: an ordered, immutable set of intents loaded once at
//! startup from a local JSON or TOML file.

mod intent;
mod loader;
mod record;

use std::collections::HashSet;

pub use intent::{Intent, IntentId};
pub use loader::load_catalog;
pub use record::IntentRecord;

use crate::constants::GENERATED_ID_PREFIX;
use crate::errors::CatalogError;

/// Position of one pattern in the flattened pattern list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PatternRef {
    /// Index of the owning intent in catalog order.
    pub intent: usize,
    /// Index of the pattern within its intent.
    pub pattern: usize,
}

/// Ordered, read-only collection of intents.
///
/// Holds a flat pattern table built from cumulative offsets, so any index
/// into the flattened pattern list maps back to its owning intent regardless
/// of how many patterns each intent has.
#[derive(Debug, Clone)]
pub struct Catalog {
    intents: Vec<Intent>,
    pattern_table: Vec<PatternRef>,
    fingerprint: blake3::Hash,
}

impl Catalog {
    /// Validate records and build the catalog.
    pub fn from_records(records: Vec<IntentRecord>) -> Result<Self, CatalogError> {
        if records.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut seen = HashSet::with_capacity(records.len());
        let mut intents = Vec::with_capacity(records.len());

        for (index, record) in records.into_iter().enumerate() {
            let intent = validate_record(index, record)?;
            if !seen.insert(intent.id.clone()) {
                return Err(CatalogError::malformed(
                    index,
                    format!("duplicate intent id '{}'", intent.id),
                ));
            }
            intents.push(intent);
        }

        let pattern_table = intents
            .iter()
            .enumerate()
            .flat_map(|(i, intent)| {
                (0..intent.patterns.len()).map(move |p| PatternRef {
                    intent: i,
                    pattern: p,
                })
            })
            .collect();
        let fingerprint = fingerprint(&intents);

        Ok(Self {
            intents,
            pattern_table,
            fingerprint,
        })
    }

    pub fn len(&self) -> usize {
        self.intents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.intents.is_empty()
    }

    pub fn intents(&self) -> &[Intent] {
        &self.intents
    }

    pub fn get(&self, index: usize) -> Option<&Intent> {
        self.intents.get(index)
    }

    /// Look up an intent by id.
    pub fn find(&self, id: &str) -> Option<&Intent> {
        self.intents.iter().find(|i| i.id == *id)
    }

    /// Total number of patterns across all intents.
    pub fn pattern_count(&self) -> usize {
        self.pattern_table.len()
    }

    /// Flat pattern table in catalog order, then pattern order.
    pub fn pattern_table(&self) -> &[PatternRef] {
        &self.pattern_table
    }

    /// Iterate `(intent_index, pattern)` over the flattened pattern list.
    pub fn patterns(&self) -> impl Iterator<Item = (usize, &str)> + '_ {
        self.pattern_table
            .iter()
            .map(|r| (r.intent, self.intents[r.intent].patterns[r.pattern].as_str()))
    }

    /// Every pattern in catalog order, for offering suggestions to a user.
    pub fn all_patterns(&self) -> Vec<&str> {
        self.patterns().map(|(_, p)| p).collect()
    }

    /// The intent owning the pattern at `flat_index` in the flattened list.
    pub fn owner_of(&self, flat_index: usize) -> Option<&Intent> {
        self.pattern_table
            .get(flat_index)
            .map(|r| &self.intents[r.intent])
    }

    /// Content hash. Equal catalogs have equal fingerprints.
    pub fn fingerprint(&self) -> &blake3::Hash {
        &self.fingerprint
    }
}

fn validate_record(index: usize, record: IntentRecord) -> Result<Intent, CatalogError> {
    if record.patterns.is_empty() {
        return Err(CatalogError::malformed(index, "record has no patterns"));
    }
    if record.responses.is_empty() {
        return Err(CatalogError::malformed(index, "record has no responses"));
    }
    if let Some(p) = record.patterns.iter().position(|p| p.trim().is_empty()) {
        return Err(CatalogError::malformed(
            index,
            format!("pattern {p} is blank"),
        ));
    }

    let id = match record.tag {
        Some(tag) if !tag.trim().is_empty() => IntentId::new(tag.trim()),
        Some(_) => return Err(CatalogError::malformed(index, "tag is blank")),
        None => IntentId::new(format!("{GENERATED_ID_PREFIX}{index}")),
    };

    Ok(Intent {
        id,
        patterns: record.patterns,
        responses: record.responses,
        terminal: record.terminal,
    })
}

fn fingerprint(intents: &[Intent]) -> blake3::Hash {
    // Length-prefix every field so adjacent strings cannot alias.
    fn field(hasher: &mut blake3::Hasher, s: &str) {
        hasher.update(&(s.len() as u64).to_le_bytes());
        hasher.update(s.as_bytes());
    }

    let mut hasher = blake3::Hasher::new();
    for intent in intents {
        field(&mut hasher, intent.id.as_str());
        hasher.update(&(intent.patterns.len() as u64).to_le_bytes());
        for p in &intent.patterns {
            field(&mut hasher, p);
        }
        hasher.update(&(intent.responses.len() as u64).to_le_bytes());
        for r in &intent.responses {
            field(&mut hasher, r);
        }
        hasher.update(&[intent.terminal as u8]);
    }
    hasher.finalize()
}
