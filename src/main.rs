use std::process::ExitCode;

use clap::Parser;
use embedcheck_ai::{AnyEmbedder, score_texts};
use embedcheck_shared::{AppEnv, AppError};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod check;

use check::Check;

/// Embed two texts and print their cosine similarity.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
  /// First text
  #[arg(default_value = "dog")]
  text_a: String,

  /// Second text
  #[arg(default_value = "astronaut")]
  text_b: String,

  /// Expected similarity; exit non-zero when the result is further off than `--tolerance`
  #[arg(long)]
  expect: Option<f32>,

  #[arg(long, default_value_t = 1e-2)]
  tolerance: f32,
}

#[tokio::main]
async fn main() -> ExitCode {
  let default_filter = format!("{}=debug,embedcheck_ai=debug", env!("CARGO_CRATE_NAME"));
  tracing_subscriber::registry()
    .with(
      tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| default_filter.into()),
    )
    .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
    .with(tracing_error::ErrorLayer::default())
    .init();
  dotenvy::dotenv().ok();

  match run(Args::parse()).await {
    Ok(code) => code,
    Err(err) => {
      eprintln!("error: {}", err.report());
      ExitCode::FAILURE
    }
  }
}

async fn run(args: Args) -> Result<ExitCode, AppError> {
  let env = AppEnv::from_env()?;
  let embedder = AnyEmbedder::from_env(&env)?;

  tracing::info!(
    provider = %embedder.provider(),
    model = embedder.model(),
    "Embedding {:?} and {:?}",
    args.text_a,
    args.text_b
  );

  let similarity = score_texts(&embedder, &args.text_a, &args.text_b).await?;
  println!("{similarity}");

  let Some(expected) = args.expect else {
    return Ok(ExitCode::SUCCESS);
  };

  let check = Check::new(similarity, expected, args.tolerance);
  println!("{check}");

  Ok(if check.passed() {
    ExitCode::SUCCESS
  } else {
    ExitCode::FAILURE
  })
}
