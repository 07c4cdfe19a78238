use std::{
  backtrace::{Backtrace, BacktraceStatus},
  fmt::{Debug, Display},
};

#[derive(Debug)]
pub struct AppError {
  err: anyhow::Error,
}

impl AppError {
  pub fn new<E: Into<anyhow::Error>>(err: E) -> Self {
    Self { err: err.into() }
  }

  /// Build from a plain message, e.g. for configuration problems.
  pub fn msg<M: Display + Debug + Send + Sync + 'static>(message: M) -> Self {
    Self {
      err: anyhow::Error::msg(message),
    }
  }

  /// Get backtrace from anyhow (requires `RUST_BACKTRACE=1` to capture)
  pub fn backtrace(&self) -> &Backtrace {
    self.err.backtrace()
  }

  /// Look through to the error this was built from.
  pub fn downcast_ref<E>(&self) -> Option<&E>
  where
    E: Display + Debug + Send + Sync + 'static,
  {
    self.err.downcast_ref::<E>()
  }

  /// Render for a terminal, with the backtrace in debug builds.
  pub fn report(&self) -> String {
    if cfg!(debug_assertions) {
      let bt = self.backtrace();
      if bt.status() == BacktraceStatus::Captured {
        format!("{:#}\nBacktrace:\n{}", self.err, bt)
      } else {
        format!(
          "{:#}\n(hint: set RUST_BACKTRACE=1 to enable backtrace)",
          self.err
        )
      }
    } else {
      format!("{:#}", self.err)
    }
  }
}

impl Display for AppError {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    Display::fmt(&self.err, f)
  }
}

impl<E> From<E> for AppError
where
  E: Into<anyhow::Error>,
{
  fn from(err: E) -> Self {
    Self::new(err)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[derive(Debug, PartialEq)]
  struct Marker;

  impl Display for Marker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
      f.write_str("marker")
    }
  }

  impl std::error::Error for Marker {}

  #[test]
  fn keeps_source_error_reachable() {
    let err = AppError::from(Marker);
    assert_eq!(err.downcast_ref::<Marker>(), Some(&Marker));
    assert_eq!(err.to_string(), "marker");
  }

  #[test]
  fn report_includes_backtrace_only_when_captured() {
    let err = AppError::msg("boom");
    let captured = err.backtrace().status() == BacktraceStatus::Captured;
    let report = err.report();
    assert_eq!(
      report.contains("Backtrace:"),
      captured && cfg!(debug_assertions)
    );
    assert_eq!(report.contains("hint:"), !captured && cfg!(debug_assertions));
  }

  #[test]
  fn report_contains_message() {
    let err = AppError::msg("OPENAI_API_KEY must be set");
    assert!(err.report().starts_with("OPENAI_API_KEY must be set"));
  }
}
