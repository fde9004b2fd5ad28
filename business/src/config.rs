use thiserror::Error;

/// Default remote source of user records.
pub const DEFAULT_API_BASE_URL: &str = "https://jsonplaceholder.typicode.com";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read configuration from environment: {0}")]
    Env(#[from] serde_env::Error),
    #[error("API_BASE_URL must be an http(s) URL, got {0:?}")]
    InvalidBaseUrl(String),
}

#[cfg(any(test, not(target_arch = "wasm32")))]
#[derive(Debug, Default, serde::Deserialize)]
struct RawConfig {
    api_base_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BusinessConfig {
    pub api_base_url: String,
}

impl BusinessConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            api_base_url: base_url.trim_end_matches('/').to_owned(),
        }
    }

    /// Reads overrides from the process environment (native only).
    ///
    /// `API_BASE_URL` replaces the default endpoint base.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_env() -> Result<Self, ConfigError> {
        let raw: RawConfig = serde_env::from_iter(std::env::vars())?;
        Self::from_raw(raw)
    }

    #[cfg(any(test, not(target_arch = "wasm32")))]
    fn from_raw(raw: RawConfig) -> Result<Self, ConfigError> {
        match raw.api_base_url {
            Some(url) if url.starts_with("http://") || url.starts_with("https://") => {
                log::info!("Using API_BASE_URL override: {url}");
                Ok(Self::new(url))
            }
            Some(url) => Err(ConfigError::InvalidBaseUrl(url)),
            None => Ok(Self::default()),
        }
    }

    /// Endpoint returning the full user collection.
    pub fn users_url(&self) -> String {
        format!("{}/users", self.api_base_url)
    }
}

impl Default for BusinessConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE_URL)
    }
}
