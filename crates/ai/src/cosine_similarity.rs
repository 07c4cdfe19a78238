use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SimilarityError {
  #[error("embedding dimensions differ: {left} vs {right}")]
  DimensionMismatch { left: usize, right: usize },
  #[error("cosine similarity is undefined for a zero-magnitude vector")]
  UndefinedSimilarity,
  #[error("embedding contains a NaN or infinite component")]
  NonFinite,
}

/// Sum of elementwise products, accumulated in `f64`.
pub fn dot_product(a: &[f32], b: &[f32]) -> Result<f64, SimilarityError> {
  ensure_same_len(a, b)?;
  let mut dot = 0.0_f64;
  for (&x, &y) in a.iter().zip(b) {
    dot = f64::from(x).mul_add(f64::from(y), dot);
  }
  Ok(dot)
}

/// Euclidean (L2) norm.
pub fn magnitude(v: &[f32]) -> f64 {
  let mut sum = 0.0_f64;
  for &x in v {
    sum = f64::from(x).mul_add(f64::from(x), sum);
  }
  sum.sqrt()
}

/// Compute cosine similarity between two embedding vectors.
///
/// Returns a value in [-1.0, 1.0] where 1.0 means identical direction,
/// 0.0 orthogonal and -1.0 opposite. Fails on a length mismatch, when
/// either side has zero magnitude (which includes empty input), or when
/// any component is NaN or infinite.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> Result<f32, SimilarityError> {
  let dot = dot_product(a, b)?;
  let norm_a = magnitude(a);
  let norm_b = magnitude(b);

  // Any finite f32 squared stays finite in f64, so a non-finite sum means
  // a NaN or infinite input.
  if !(dot.is_finite() && norm_a.is_finite() && norm_b.is_finite()) {
    return Err(SimilarityError::NonFinite);
  }

  // Likewise a non-zero f32 squared never underflows to zero in f64.
  if norm_a == 0.0 || norm_b == 0.0 {
    return Err(SimilarityError::UndefinedSimilarity);
  }

  let cos = dot / (norm_a * norm_b);
  Ok(cos.clamp(-1.0, 1.0) as f32)
}

fn ensure_same_len(a: &[f32], b: &[f32]) -> Result<(), SimilarityError> {
  if a.len() == b.len() {
    Ok(())
  } else {
    Err(SimilarityError::DimensionMismatch {
      left: a.len(),
      right: b.len(),
    })
  }
}
