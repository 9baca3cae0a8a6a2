use async_trait::async_trait;
use reqwest::Response;

/// Failure of an API call: transport error or non-2xx response. The form
/// surfaces these as a generic Thai alert, the details only reach the logs.
#[derive(Debug, Clone)]
pub struct HttpError {
    pub http_status: Option<u16>,
    pub error: String,
}

impl std::fmt::Display for HttpError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self.http_status {
            Some(status) => write!(f, "HTTP {}: {}", status, self.error),
            None => write!(f, "{}", self.error),
        }
    }
}

impl std::error::Error for HttpError {}

impl From<reqwest::Error> for HttpError {
    fn from(error: reqwest::Error) -> Self {
        Self {
            http_status: error.status().map(|s| s.as_u16()),
            error: error.to_string(),
        }
    }
}

#[async_trait]
pub trait ResponseExt {
    /// Turns a non-2xx response into an [`HttpError`] carrying the body text.
    async fn check_success(self) -> Result<Self, HttpError>
    where
        Self: Sized;
}

#[async_trait]
impl ResponseExt for Response {
    async fn check_success(self) -> Result<Self, HttpError> {
        let status = self.status();
        if !status.is_success() {
            return Err(HttpError {
                http_status: Some(status.as_u16()),
                error: self
                    .text()
                    .await
                    .unwrap_or_else(|_| "Failed to read response text".to_string()),
            });
        }
        Ok(self)
    }
}
