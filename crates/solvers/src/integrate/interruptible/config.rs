use thiserror::Error;

/// Configuration for the interruptible integrator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    max_attempts: usize,
}

/// Errors that can occur when validating an interruptible integrator config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("max_attempts must be at least 1")]
    ZeroAttempts,
}

impl Config {
    /// Attempts allowed per loop iteration unless configured otherwise.
    pub const DEFAULT_MAX_ATTEMPTS: usize = 1000;

    /// Creates a new config.
    ///
    /// `max_attempts` bounds the total number of step attempts, accepted or
    /// rejected, within one loop iteration.
    ///
    /// # Errors
    ///
    /// Returns an error if `max_attempts` is zero.
    pub fn new(max_attempts: usize) -> Result<Self, ConfigError> {
        if max_attempts == 0 {
            return Err(ConfigError::ZeroAttempts);
        }

        Ok(Self { max_attempts })
    }

    /// Returns the maximum number of step attempts per loop iteration.
    #[must_use]
    pub fn max_attempts(&self) -> usize {
        self.max_attempts
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_attempts: Self::DEFAULT_MAX_ATTEMPTS,
        }
    }
}
