//! Matching algorithms: edit-similarity ratio, TF-IDF index, cosine similarity.

pub mod sequence_ratio;
pub mod similarity;
pub mod tfidf;
