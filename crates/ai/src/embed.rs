use anyhow::anyhow;
use async_openai::{
  Client,
  config::{AzureConfig, Config, OpenAIConfig},
  types::embeddings::CreateEmbeddingRequestArgs,
};
use embedcheck_shared::{AppEnv, AppError, Provider};

use crate::EmbeddingVector;

/// Turns text into an embedding. Network, auth and quota failures are the
/// implementor's business and come back unchanged inside `AppError`.
pub trait Embedder: Send + Sync {
  fn embed(&self, text: &str) -> impl Future<Output = Result<EmbeddingVector, AppError>> + Send;

  /// Embed two texts with two separate requests, `a` first.
  fn embed_pair(
    &self,
    a: &str,
    b: &str,
  ) -> impl Future<Output = Result<(EmbeddingVector, EmbeddingVector), AppError>> + Send {
    async move {
      let first = self.embed(a).await?;
      let second = self.embed(b).await?;
      Ok((first, second))
    }
  }
}

/// Embedding endpoint of an OpenAI-compatible API.
pub struct EmbeddingClient<C: Config> {
  client: Client<C>,
  model: String,
  dimensions: Option<u32>,
}

impl<C: Config> EmbeddingClient<C> {
  pub fn with_config(config: C, model: impl Into<String>, dimensions: Option<u32>) -> Self {
    Self {
      client: Client::with_config(config),
      model: model.into(),
      dimensions,
    }
  }

  pub fn model(&self) -> &str {
    &self.model
  }

  #[tracing::instrument(skip(self, input), fields(model = %self.model, bytes = input.len()))]
  async fn request(&self, input: &str) -> Result<EmbeddingVector, AppError> {
    let mut args = CreateEmbeddingRequestArgs::default();
    args.model(&self.model).input(input);
    if let Some(dimensions) = self.dimensions {
      args.dimensions(dimensions);
    }
    let request = args.build()?;

    let embedding = self
      .client
      .embeddings()
      .create(request)
      .await
      .map(|r| r.data.into_iter())?
      .map(|e| e.embedding)
      .next_back()
      .ok_or_else(|| anyhow!("empty embedding"))?;

    tracing::debug!(dimensions = embedding.len(), "Received embedding");

    Ok(EmbeddingVector::from(embedding))
  }
}

impl<C: Config> Embedder for EmbeddingClient<C> {
  fn embed(&self, text: &str) -> impl Future<Output = Result<EmbeddingVector, AppError>> + Send {
    self.request(text)
  }
}

/// Either backend, picked at runtime from `OPENAI_OR_AZURE`.
pub enum AnyEmbedder {
  OpenAi(EmbeddingClient<OpenAIConfig>),
  Azure(EmbeddingClient<AzureConfig>),
}

impl AnyEmbedder {
  pub fn from_env(env: &AppEnv) -> Result<Self, AppError> {
    match env.provider {
      Provider::OpenAi => {
        let mut config = OpenAIConfig::new().with_api_key(&env.openai_api_key);
        if let Some(base_url) = &env.openai_base_url {
          config = config.with_api_base(base_url);
        }
        Ok(Self::OpenAi(EmbeddingClient::with_config(
          config,
          &env.openai_embedding_model,
          env.openai_embedding_dimensions,
        )))
      }
      Provider::Azure => {
        let endpoint = env
          .azure_endpoint
          .as_deref()
          .ok_or_else(|| AppError::msg("AZURE_ENDPOINT must be set when OPENAI_OR_AZURE=AZURE"))?;
        // Azure routes by deployment; the embedding model name doubles as the deployment id.
        let config = AzureConfig::new()
          .with_api_base(endpoint)
          .with_api_key(&env.openai_api_key)
          .with_deployment_id(&env.openai_embedding_model)
          .with_api_version(&env.azure_api_version);
        Ok(Self::Azure(EmbeddingClient::with_config(
          config,
          &env.openai_embedding_model,
          env.openai_embedding_dimensions,
        )))
      }
    }
  }

  pub const fn provider(&self) -> Provider {
    match self {
      Self::OpenAi(_) => Provider::OpenAi,
      Self::Azure(_) => Provider::Azure,
    }
  }

  pub fn model(&self) -> &str {
    match self {
      Self::OpenAi(c) => c.model(),
      Self::Azure(c) => c.model(),
    }
  }
}

impl Embedder for AnyEmbedder {
  async fn embed(&self, text: &str) -> Result<EmbeddingVector, AppError> {
    match self {
      Self::OpenAi(c) => c.embed(text).await,
      Self::Azure(c) => c.embed(text).await,
    }
  }
}
