use std::fmt;

use serde::{Deserialize, Serialize};

/// Stable identifier of an intent within a catalog.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IntentId(String);

impl IntentId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for IntentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for IntentId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl PartialEq<str> for IntentId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for IntentId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// A validated intent: at least one non-blank pattern and at least one response.
///
/// Only constructible through [`Catalog`](super::Catalog), which enforces
/// those invariants. Fields are read-only.
#[derive(Debug, Clone, PartialEq)]
pub struct Intent {
    pub(crate) id: IntentId,
    pub(crate) patterns: Vec<String>,
    pub(crate) responses: Vec<String>,
    pub(crate) terminal: bool,
}

impl Intent {
    pub fn id(&self) -> &IntentId {
        &self.id
    }

    /// Canonical patterns in catalog order.
    pub fn patterns(&self) -> &[String] {
        &self.patterns
    }

    /// Candidate responses. Never empty.
    pub fn responses(&self) -> &[String] {
        &self.responses
    }

    /// Whether matching this intent ends the conversation.
    pub fn is_terminal(&self) -> bool {
        self.terminal
    }
}
