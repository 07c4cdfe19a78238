use std::env;

use crate::AppError;

const DEFAULT_EMBEDDING_MODEL: &str = "text-embedding-ada-002";
const DEFAULT_AZURE_API_VERSION: &str = "2024-02-01";

/// Which embedding backend to talk to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, strum::EnumString, strum::Display)]
#[strum(ascii_case_insensitive)]
pub enum Provider {
  #[default]
  #[strum(serialize = "OPENAI")]
  OpenAi,
  #[strum(serialize = "AZURE")]
  Azure,
}

/// Provider settings, read once at startup and handed to whatever needs them.
#[derive(Debug, Clone)]
pub struct AppEnv {
  pub provider: Provider,
  pub openai_api_key: String,
  pub openai_base_url: Option<String>,
  pub openai_embedding_model: String,
  pub openai_embedding_dimensions: Option<u32>,
  pub azure_endpoint: Option<String>,
  pub azure_api_version: String,
}

impl AppEnv {
  pub fn from_env() -> Result<Self, AppError> {
    Self::from_lookup(|key| env::var(key).ok())
  }

  /// Build from an arbitrary key lookup. Empty values count as unset.
  pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
  where
    F: Fn(&str) -> Option<String>,
  {
    let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

    let provider = match get("OPENAI_OR_AZURE") {
      Some(raw) => parse_provider(&raw)?,
      None => Provider::default(),
    };

    let openai_api_key =
      get("OPENAI_API_KEY").ok_or_else(|| AppError::msg("OPENAI_API_KEY must be set"))?;

    let openai_embedding_dimensions = get("OPENAI_EMBEDDING_DIMENSIONS")
      .map(|raw| {
        raw.trim().parse::<u32>().map_err(|_| {
          AppError::msg(format!(
            "OPENAI_EMBEDDING_DIMENSIONS must be a positive integer, got {raw:?}"
          ))
        })
      })
      .transpose()?;

    let azure_endpoint = get("AZURE_ENDPOINT");
    if provider == Provider::Azure && azure_endpoint.is_none() {
      return Err(AppError::msg("AZURE_ENDPOINT must be set when OPENAI_OR_AZURE=AZURE"));
    }

    Ok(Self {
      provider,
      openai_api_key,
      openai_base_url: get("OPENAI_BASE_URL"),
      openai_embedding_model: get("OPENAI_EMBEDDING_MODEL")
        .unwrap_or_else(|| DEFAULT_EMBEDDING_MODEL.to_owned()),
      openai_embedding_dimensions,
      azure_endpoint,
      azure_api_version: get("AZURE_API_VERSION")
        .unwrap_or_else(|| DEFAULT_AZURE_API_VERSION.to_owned()),
    })
  }
}

fn parse_provider(raw: &str) -> Result<Provider, AppError> {
  raw
    .trim()
    .parse()
    .map_err(|_| AppError::msg(format!("OPENAI_OR_AZURE must be OPENAI or AZURE, got {raw:?}")))
}
