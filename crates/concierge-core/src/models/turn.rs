use serde::{Deserialize, Serialize};

use crate::catalog::{Intent, IntentId};

/// Whether the session layer should keep the conversation open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TerminationSignal {
    #[default]
    Continue,
    Terminate,
}

impl TerminationSignal {
    /// Derived from the intent's `terminal` flag, never from response text.
    pub fn for_intent(intent: Option<&Intent>) -> Self {
        match intent {
            Some(i) if i.is_terminal() => Self::Terminate,
            _ => Self::Continue,
        }
    }

    pub fn is_terminate(&self) -> bool {
        matches!(self, Self::Terminate)
    }
}

/// Reply for one user turn.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TurnReply {
    pub text: String,
    pub intent: Option<IntentId>,
    pub score: f64,
    pub signal: TerminationSignal,
}
