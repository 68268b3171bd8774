use std::time::Duration;
use thiserror::Error;
use url::Url;

/// Validation errors for the CLI inputs. All of these are detected before
/// any request is dispatched.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("provide a valid url (absolute, with scheme and host)")]
    InvalidUrl,

    #[error("number of concurrent requests must be greater than 0")]
    NonPositiveConcurrency,

    #[error("timeout must be equal or greater than 0")]
    NegativeTimeout,
}

/// Immutable configuration for a single run.
#[derive(Clone, Debug)]
pub struct RunConfig {
    pub url: Url,
    pub concurrency: usize,
    /// Per-request timeout. `None` leaves the HTTP client at its default.
    pub request_timeout: Option<Duration>,
}

impl RunConfig {
    /// Validates the raw CLI integers and builds a config.
    ///
    /// The integers arrive signed so that negative inputs surface as a
    /// [`ConfigError`] instead of dying in the argument parser. A timeout of
    /// `0` means "no explicit timeout".
    pub fn new(url: &str, concurrency: i64, timeout_secs: i64) -> Result<Self, ConfigError> {
        let url = Url::parse(url).map_err(|_| ConfigError::InvalidUrl)?;
        if url.scheme().is_empty() || !url.has_host() {
            return Err(ConfigError::InvalidUrl);
        }

        if concurrency <= 0 {
            return Err(ConfigError::NonPositiveConcurrency);
        }

        if timeout_secs < 0 {
            return Err(ConfigError::NegativeTimeout);
        }
        let request_timeout = if timeout_secs > 0 {
            Some(Duration::from_secs(timeout_secs as u64))
        } else {
            None
        };

        Ok(Self {
            url,
            concurrency: concurrency as usize,
            request_timeout,
        })
    }
}
