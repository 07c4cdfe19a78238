use embedcheck_shared::AppError;

use crate::Embedder;

/// Embed both texts and return their cosine similarity.
pub async fn score_texts<E: Embedder>(embedder: &E, a: &str, b: &str) -> Result<f32, AppError> {
  let (left, right) = embedder.embed_pair(a, b).await?;

  tracing::debug!(
    left_dimensions = left.dimensions(),
    right_dimensions = right.dimensions(),
    "Scoring embeddings"
  );

  Ok(left.similarity(&right)?)
}
