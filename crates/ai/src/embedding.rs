use std::ops::Deref;

use crate::{SimilarityError, cosine_similarity};

/// A provider-produced embedding. Read-only once constructed.
#[derive(Debug, Clone, PartialEq)]
pub struct EmbeddingVector(Box<[f32]>);

impl EmbeddingVector {
  pub fn dimensions(&self) -> usize {
    self.0.len()
  }

  pub fn as_slice(&self) -> &[f32] {
    &self.0
  }

  pub fn similarity(&self, other: &Self) -> Result<f32, SimilarityError> {
    cosine_similarity(&self.0, &other.0)
  }
}

impl From<Vec<f32>> for EmbeddingVector {
  fn from(values: Vec<f32>) -> Self {
    Self(values.into_boxed_slice())
  }
}

impl From<&[f32]> for EmbeddingVector {
  fn from(values: &[f32]) -> Self {
    Self(values.into())
  }
}

impl Deref for EmbeddingVector {
  type Target = [f32];

  fn deref(&self) -> &[f32] {
    &self.0
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn exposes_values() {
    let v = EmbeddingVector::from(vec![1.0, 2.0, 3.0]);
    assert_eq!(v.dimensions(), 3);
    assert_eq!(v.as_slice(), &[1.0, 2.0, 3.0]);
    assert_eq!(v[1], 2.0);
  }

  #[test]
  fn similarity_delegates_to_cosine() {
    let a = EmbeddingVector::from(&[1.0_f32, 0.0][..]);
    let b = EmbeddingVector::from(vec![0.0, 1.0]);
    assert_eq!(a.similarity(&b), Ok(0.0));
    assert_eq!(
      a.similarity(&EmbeddingVector::from(vec![1.0])),
      Err(SimilarityError::DimensionMismatch { left: 2, right: 1 })
    );
  }
}
