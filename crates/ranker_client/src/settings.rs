use std::time::Duration;

use thiserror::Error;
use url::Url;

/// Connection parameters for the ranking service, fixed at startup.
#[derive(Debug, Clone)]
pub struct TransferSettings {
    pub upload_url: Url,
    pub rank_url: Url,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
}

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("invalid base url {url}: {message}")]
    InvalidBaseUrl { url: String, message: String },
}

impl TransferSettings {
    /// Resolves both endpoints from the configured base URL.
    pub fn new(base: &str) -> Result<Self, SettingsError> {
        let mut base_url = Url::parse(base).map_err(|err| SettingsError::InvalidBaseUrl {
            url: base.to_string(),
            message: err.to_string(),
        })?;
        if base_url.cannot_be_a_base() {
            return Err(SettingsError::InvalidBaseUrl {
                url: base.to_string(),
                message: "not an http(s) base".to_string(),
            });
        }
        // `Url::join` replaces the last path segment unless the base ends in a slash.
        if !base_url.path().ends_with('/') {
            base_url.set_path(&format!("{}/", base_url.path()));
        }

        let join = |segment: &str| {
            base_url
                .join(segment)
                .map_err(|err| SettingsError::InvalidBaseUrl {
                    url: base.to_string(),
                    message: err.to_string(),
                })
        };

        Ok(Self {
            upload_url: join("upload")?,
            rank_url: join("rank")?,
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
        })
    }
}
