//! On-disk catalog records and the document shapes they arrive in.

use serde::{Deserialize, Serialize};

/// One intent as written in a catalog file.
///
/// `patterns` and `responses` default to empty so that a missing field is
/// reported as a malformed record rather than a parse failure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntentRecord {
    #[serde(default, alias = "id", skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
    #[serde(default)]
    pub patterns: Vec<String>,
    #[serde(default)]
    pub responses: Vec<String>,
    /// A matched terminal intent ends the conversation.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub terminal: bool,
}

impl IntentRecord {
    pub fn new<P, R>(tag: impl Into<String>, patterns: P, responses: R) -> Self
    where
        P: IntoIterator,
        P::Item: Into<String>,
        R: IntoIterator,
        R::Item: Into<String>,
    {
        Self {
            tag: Some(tag.into()),
            patterns: patterns.into_iter().map(Into::into).collect(),
            responses: responses.into_iter().map(Into::into).collect(),
            terminal: false,
        }
    }

    /// Mark the record as ending the conversation.
    pub fn terminal(mut self) -> Self {
        self.terminal = true;
        self
    }
}

/// The `{"intents": [...]}` JSON shape. A bare array parses straight into
/// `Vec<IntentRecord>`.
#[derive(Debug, Deserialize)]
pub(crate) struct WrappedDocument {
    pub(crate) intents: Vec<IntentRecord>,
}

/// TOML catalogs use an `[[intents]]` array of tables.
#[derive(Debug, Deserialize)]
pub(crate) struct TomlDocument {
    #[serde(default)]
    pub(crate) intents: Vec<IntentRecord>,
}
