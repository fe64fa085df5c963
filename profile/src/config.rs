use std::env;

/// Backend user API configuration.
#[derive(Debug)]
pub struct Config {
    /// Base URL of the backend REST API.
    pub endpoint: String,
}

impl Config {
    /// Loads the configuration from environment variables.
    ///
    /// # Errors
    /// - `PROFILE_API_ENDPOINT` is not set
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();
        let endpoint =
            env::var("PROFILE_API_ENDPOINT").map_err(|_| ConfigError::MissingEndpoint)?;
        Ok(Self { endpoint })
    }
}

#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("missing PROFILE_API_ENDPOINT")]
    MissingEndpoint,
}
