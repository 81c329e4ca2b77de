use thiserror::Error;

/// Configuration for the bisection solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    pub max_iters: usize,
    pub x_abs_tol: f64,
    pub x_rel_tol: f64,
    pub residual_tol: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_iters: 100,
            x_abs_tol: 1e-12,
            x_rel_tol: 1e-12,
            residual_tol: 1e-12,
        }
    }
}

/// Errors returned by [`Config::validate`].
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("x_abs_tol must be finite and non-negative")]
    XAbsTol,
    #[error("x_rel_tol must be finite and non-negative")]
    XRelTol,
    #[error("residual_tol must be finite and non-negative")]
    ResidualTol,
}

impl Config {
    /// Validates that all tolerances are finite and non-negative.
    ///
    /// # Errors
    ///
    /// Returns an error naming the first invalid tolerance.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !is_valid_tol(self.x_abs_tol) {
            return Err(ConfigError::XAbsTol);
        }
        if !is_valid_tol(self.x_rel_tol) {
            return Err(ConfigError::XRelTol);
        }
        if !is_valid_tol(self.residual_tol) {
            return Err(ConfigError::ResidualTol);
        }
        Ok(())
    }
}

fn is_valid_tol(tol: f64) -> bool {
    tol.is_finite() && tol >= 0.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn rejects_negative_or_non_finite_tolerances() {
        let config = Config {
            x_abs_tol: -1.0,
            ..Config::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::XAbsTol));

        let config = Config {
            x_rel_tol: f64::NAN,
            ..Config::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::XRelTol));

        let config = Config {
            residual_tol: f64::INFINITY,
            ..Config::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::ResidualTol));
    }
}
