//! Per-turn values: match results and replies.

pub mod match_result;
pub mod turn;

pub use match_result::MatchResult;
pub use turn::{TerminationSignal, TurnReply};
