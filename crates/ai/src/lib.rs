mod cosine_similarity;
pub use cosine_similarity::{SimilarityError, cosine_similarity, dot_product, magnitude};

mod embed;
pub use embed::{AnyEmbedder, Embedder, EmbeddingClient};

mod embedding;
pub use embedding::EmbeddingVector;

mod score;
pub use score::score_texts;
