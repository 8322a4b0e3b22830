//! TF-IDF vector space over a catalog's flattened pattern list.
//!
//! Fitted once per catalog and immutable afterwards. Weighting:
//! raw term counts × smoothed idf `ln((1 + n) / (1 + df)) + 1`, rows L2-normalized.
//! Queries are projected into the same space; unknown terms are ignored.

use std::collections::{BTreeSet, HashMap};

use concierge_core::errors::CatalogError;
use concierge_core::Catalog;
use tracing::info;

use super::similarity::{cosine_similarity, l2_normalize};
use crate::tokenizer;

/// Immutable TF-IDF index of every pattern in a catalog.
#[derive(Debug, Clone)]
pub struct TfIdfIndex {
    vocabulary: HashMap<String, usize>,
    idf: Vec<f64>,
    /// One unit-length row per pattern, in flat pattern order.
    rows: Vec<Vec<f64>>,
    /// Flat pattern index → owning intent index, from cumulative offsets.
    owners: Vec<usize>,
    fingerprint: blake3::Hash,
}

/// Best-scoring pattern for a query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IndexHit {
    /// Position in the flattened pattern list.
    pub pattern: usize,
    /// Owning intent's position in the catalog.
    pub intent: usize,
    pub score: f64,
}

impl TfIdfIndex {
    /// Fit the vector space. Fails when no pattern yields a single term.
    pub fn build(catalog: &Catalog) -> Result<Self, CatalogError> {
        let tokenized: Vec<Vec<String>> = catalog
            .patterns()
            .map(|(_, pattern)| tokenizer::terms(pattern))
            .collect();

        // Sorted vocabulary keeps column order independent of hash seeds.
        let vocabulary: HashMap<String, usize> = tokenized
            .iter()
            .flatten()
            .collect::<BTreeSet<_>>()
            .into_iter()
            .enumerate()
            .map(|(col, term)| (term.clone(), col))
            .collect();

        if vocabulary.is_empty() {
            return Err(CatalogError::EmptyVocabulary);
        }

        let n_docs = tokenized.len() as f64;
        let mut df = vec![0usize; vocabulary.len()];
        for tokens in &tokenized {
            let unique: BTreeSet<usize> = tokens.iter().map(|t| vocabulary[t]).collect();
            for col in unique {
                df[col] += 1;
            }
        }
        let idf: Vec<f64> = df
            .iter()
            .map(|&d| ((1.0 + n_docs) / (1.0 + d as f64)).ln() + 1.0)
            .collect();

        let mut index = Self {
            vocabulary,
            idf,
            rows: Vec::with_capacity(tokenized.len()),
            owners: catalog.pattern_table().iter().map(|r| r.intent).collect(),
            fingerprint: *catalog.fingerprint(),
        };
        let rows = tokenized.iter().map(|t| index.weigh(t)).collect();
        index.rows = rows;

        info!(
            patterns = index.rows.len(),
            vocabulary = index.vocabulary_len(),
            "tf-idf index built"
        );
        Ok(index)
    }

    /// Project text into the index's space. The result is unit length, or all
    /// zeros when the text shares no term with the vocabulary.
    pub fn vectorize(&self, text: &str) -> Vec<f64> {
        self.weigh(&tokenizer::terms(text))
    }

    /// Highest-cosine pattern for `text`. Ties keep the earliest pattern.
    /// `None` only for an index with no rows, which `build` never produces.
    pub fn best_match(&self, text: &str) -> Option<IndexHit> {
        let query = self.vectorize(text);
        let mut best: Option<IndexHit> = None;
        for (pattern, row) in self.rows.iter().enumerate() {
            let score = cosine_similarity(&query, row);
            if best.map_or(true, |b| score > b.score) {
                best = Some(IndexHit {
                    pattern,
                    intent: self.owners[pattern],
                    score,
                });
            }
        }
        best
    }

    /// Whether this index was built from `catalog`.
    pub fn is_built_from(&self, catalog: &Catalog) -> bool {
        self.fingerprint == *catalog.fingerprint()
    }

    pub fn vocabulary_len(&self) -> usize {
        self.vocabulary.len()
    }

    pub fn pattern_count(&self) -> usize {
        self.rows.len()
    }

    /// Owning intent index for a flat pattern index.
    pub fn owner_of(&self, pattern: usize) -> Option<usize> {
        self.owners.get(pattern).copied()
    }

    fn weigh(&self, tokens: &[String]) -> Vec<f64> {
        let mut v = vec![0.0; self.vocabulary.len()];
        for token in tokens {
            if let Some(&col) = self.vocabulary.get(token) {
                v[col] += self.idf[col];
            }
        }
        l2_normalize(&mut v);
        v
    }
}
