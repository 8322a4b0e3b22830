mod match_strategy;
mod similarity;

pub use match_strategy::IMatchStrategy;
pub use similarity::ISimilarity;
