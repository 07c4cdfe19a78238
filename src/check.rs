use std::fmt::Display;

/// Comparison of a computed similarity against a reference value.
#[derive(Debug, Clone, Copy)]
pub struct Check {
  actual: f32,
  expected: f32,
  tolerance: f32,
}

impl Check {
  pub const fn new(actual: f32, expected: f32, tolerance: f32) -> Self {
    Self {
      actual,
      expected,
      tolerance,
    }
  }

  pub fn diff(&self) -> f32 {
    (self.actual - self.expected).abs()
  }

  pub fn passed(&self) -> bool {
    self.diff() < self.tolerance
  }
}

impl Display for Check {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(
      f,
      "similarity {} expected {} absolute diff {} within tolerance {}: {}",
      self.actual,
      self.expected,
      self.diff(),
      self.tolerance,
      self.passed()
    )
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn within_tolerance() {
    let check = Check::new(0.8037, 0.803_733_2, 1e-3);
    assert!(check.passed());
  }

  #[test]
  fn outside_tolerance() {
    let check = Check::new(0.75, 0.803_733_2, 1e-2);
    assert!(!check.passed());
    assert!(check.to_string().ends_with(": false"));
  }

  #[test]
  fn tolerance_is_exclusive() {
    assert!(!Check::new(1.0, 0.5, 0.5).passed());
  }
}
