/// Pairwise string similarity.
pub trait ISimilarity: Send + Sync {
    /// Similarity in `[0, 1]`; 1.0 means identical under this measure.
    fn similarity(&self, a: &str, b: &str) -> f64;
}
