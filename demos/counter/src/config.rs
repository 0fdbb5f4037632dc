//! Configuration for the counter binary
//!
//! Read from environment variables (a `.env` file is loaded first by the
//! binary):
//!
//! | Variable | Default | Meaning |
//! |---|---|---|
//! | `COUNTER_ADD_AMOUNT` | `5` | amount added by the "Add" button |
//! | `RUST_LOG` | `counter=info,slicekit_runtime=info` | tracing filter |

use thiserror::Error;

/// Configuration error
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A variable is set but its value is unusable
    #[error("invalid value for {key}: `{value}` ({reason})")]
    InvalidValue {
        /// Variable name
        key: &'static str,
        /// Raw value found
        value: String,
        /// Why it was rejected
        reason: String,
    },
}

/// Counter binary configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CounterConfig {
    /// Amount added by the "Add" button
    pub add_amount: i64,
    /// `tracing_subscriber::EnvFilter` directive
    pub log_filter: String,
}

impl CounterConfig {
    /// Variable holding the "Add" button amount
    pub const ADD_AMOUNT_VAR: &'static str = "COUNTER_ADD_AMOUNT";
    /// Variable holding the log filter
    pub const LOG_FILTER_VAR: &'static str = "RUST_LOG";
    /// Default "Add" button amount
    pub const DEFAULT_ADD_AMOUNT: i64 = 5;
    /// Default log filter
    pub const DEFAULT_LOG_FILTER: &'static str = "counter=info,slicekit_runtime=info";

    /// Load configuration from the process environment
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] if a variable is set to an unusable value.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] if a variable is set to an unusable value.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let add_amount = match lookup(Self::ADD_AMOUNT_VAR) {
            Some(raw) => raw.trim().parse::<i64>().map_err(|error| {
                ConfigError::InvalidValue {
                    key: Self::ADD_AMOUNT_VAR,
                    value: raw.clone(),
                    reason: error.to_string(),
                }
            })?,
            None => Self::DEFAULT_ADD_AMOUNT,
        };

        let log_filter = lookup(Self::LOG_FILTER_VAR)
            .filter(|filter| !filter.trim().is_empty())
            .unwrap_or_else(|| Self::DEFAULT_LOG_FILTER.to_string());

        Ok(Self {
            add_amount,
            log_filter,
        })
    }
}

impl Default for CounterConfig {
    fn default() -> Self {
        Self {
            add_amount: Self::DEFAULT_ADD_AMOUNT,
            log_filter: Self::DEFAULT_LOG_FILTER.to_string(),
        }
    }
}
