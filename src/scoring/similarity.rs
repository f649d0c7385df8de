// Cosine similarity between two feature vectors.
//
//   dot(a, b) / (|a| * |b|)
//
// Ranges from -1.0 (opposite) to 1.0 (same direction). A zero-norm vector
// has no direction, so instead of producing NaN we report it as an error
// and let the caller decide whether that means "skip" or "fail".
//
// Each vector is divided by its largest absolute component first. Cosine
// similarity is scale invariant, and the scaled components sit in [-1, 1],
// so squaring them can neither overflow nor underflow to a zero norm.

use crate::error::{EngineError, EngineResult};

/// Compute the cosine similarity of two equal-length vectors.
pub fn cosine_similarity(a: &[f64], b: &[f64]) -> EngineResult<f64> {
    if a.len() != b.len() {
        return Err(EngineError::DimensionMismatch {
            expected: a.len(),
            found: b.len(),
        });
    }

    let scale_a = max_abs(a);
    let scale_b = max_abs(b);
    if scale_a == 0.0 || scale_b == 0.0 {
        return Err(EngineError::ZeroNorm);
    }

    let mut dot = 0.0;
    let mut norm_a = 0.0;
    let mut norm_b = 0.0;

    for (x, y) in a.iter().zip(b) {
        let x = x / scale_a;
        let y = y / scale_b;
        dot += x * y;
        norm_a += x * x;
        norm_b += y * y;
    }

    let sim = dot / (norm_a.sqrt() * norm_b.sqrt());
    if !sim.is_finite() {
        return Err(EngineError::NonFiniteSimilarity);
    }
    Ok(sim)
}

/// Largest absolute component, 0.0 for an empty or all-zero vector.
fn max_abs(v: &[f64]) -> f64 {
    v.iter().fold(0.0_f64, |max, x| max.max(x.abs()))
}
