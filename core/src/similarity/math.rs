/// Cosine similarity of two vectors.
///
/// The accumulation runs over the shared prefix `[0, min(len_a, len_b))`;
/// trailing elements of the longer vector do not participate. Callers are
/// expected to pass vectors from the same embedding model, which always have
/// equal length.
///
/// Returns 0.0 when either vector has a zero squared norm over the shared
/// prefix (an empty or zero vector has no defined direction). The result is
/// the raw cosine and is not clamped: opposed vectors score close to -1.0.
#[must_use]
pub fn cosine_similarity(vec_a: &[f64], vec_b: &[f64]) -> f64 {
    let mut dot = 0.0;
    let mut norm_a = 0.0;
    let mut norm_b = 0.0;

    for (a, b) in vec_a.iter().zip(vec_b.iter()) {
        dot += a * b;
        norm_a += a * a;
        norm_b += b * b;
    }

    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }

    dot / (norm_a.sqrt() * norm_b.sqrt())
}
