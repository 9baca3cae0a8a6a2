use std::env;

pub const API_URL_VAR: &str = "LINEFORM_API_URL";
pub const TOKEN_VAR: &str = "LINEFORM_TOKEN";

/// Runtime configuration, built from CLI arguments with environment
/// fallbacks. The base URL is mandatory; the login token is not: without it
/// the form renders but nothing is fetched or submitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub api_url: String,
    pub token: Option<String>,
}

impl Config {
    pub fn new(api_url: Option<String>, token: Option<String>) -> Result<Self, ConfigError> {
        let api_url = api_url
            .or_else(|| env::var(API_URL_VAR).ok())
            .ok_or(ConfigError::MissingApiUrl)?;
        let token = token.or_else(|| env::var(TOKEN_VAR).ok());
        Ok(Self {
            // A trailing slash would double up in endpoint paths.
            api_url: api_url.trim_end_matches('/').to_string(),
            token,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    MissingApiUrl,
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::MissingApiUrl => {
                write!(
                    f,
                    "No API base URL. Pass --api <URL> or set {}",
                    API_URL_VAR
                )
            }
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_url_is_mandatory() {
        // No CLI value and the env var is not set by the test harness.
        std::env::remove_var(API_URL_VAR);
        assert_eq!(Config::new(None, None), Err(ConfigError::MissingApiUrl));
    }

    #[test]
    fn trailing_slash_is_stripped() {
        let config = Config::new(Some("https://example.com/".to_string()), None).unwrap();
        assert_eq!(config.api_url, "https://example.com");
    }

    #[test]
    fn token_stays_optional() {
        let config = Config::new(Some("https://example.com".to_string()), None).unwrap();
        assert!(config.token.is_none());
    }
}
