use std::env;

use thiserror::Error;

const DEFAULT_BASE_URL: &str = "https://graphhopper.com/api/1";
const DEFAULT_PORT: u16 = 5000;

#[derive(Debug, Error)]
pub(crate) enum ConfigError {
    #[error("GRAPHHOPPER_API_KEY is missing")]
    MissingApiKey,
    #[error("PORT is not a valid port number: {0}")]
    InvalidPort(String),
}

/// Where candidate routes come from.
#[derive(Debug, Clone)]
pub(crate) enum Mode {
    Live { api_key: String, base_url: String },
    Demo,
}

#[derive(Debug, Clone)]
pub(crate) struct AppConfig {
    pub(crate) mode: Mode,
    pub(crate) port: u16,
}

impl AppConfig {
    /// Reads configuration from the environment once at startup.
    ///
    /// `GRAPHHOPPER_API_KEY` is required unless `DEMO_MODE` opts into the
    /// built-in demo routes.
    pub(crate) fn from_env() -> Result<Self, ConfigError> {
        let demo = matches!(
            env::var("DEMO_MODE").ok().as_deref(),
            Some("1") | Some("true")
        );

        let mode = if demo {
            Mode::Demo
        } else {
            let api_key = env::var("GRAPHHOPPER_API_KEY")
                .ok()
                .filter(|key| !key.trim().is_empty())
                .ok_or(ConfigError::MissingApiKey)?;
            let base_url =
                env::var("GH_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
            Mode::Live { api_key, base_url }
        };

        let port = match env::var("PORT") {
            Ok(raw) => raw
                .parse()
                .map_err(|_| ConfigError::InvalidPort(raw))?,
            Err(_) => DEFAULT_PORT,
        };

        Ok(Self { mode, port })
    }
}
