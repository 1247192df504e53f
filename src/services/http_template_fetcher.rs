//! Remote template download using reqwest.

use std::time::Duration;

use reqwest::blocking::Client;
use tracing::debug;
use url::Url;

use crate::domain::AppError;
use crate::ports::TemplateFetcher;

const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Blocking HTTP fetcher for `http` and `https` template URLs.
#[derive(Debug, Clone)]
pub struct HttpTemplateFetcher {
    client: Client,
}

impl HttpTemplateFetcher {
    pub fn new() -> Result<Self, AppError> {
        Self::with_timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }

    pub fn with_timeout(timeout: Duration) -> Result<Self, AppError> {
        let client = Client::builder().timeout(timeout).build().map_err(|e| {
            AppError::UrlUnreachable {
                url: String::new(),
                reason: format!("Failed to create HTTP client: {}", e),
            }
        })?;
        Ok(Self { client })
    }
}

impl TemplateFetcher for HttpTemplateFetcher {
    fn fetch(&self, url: &Url) -> Result<String, AppError> {
        debug!(%url, "fetching template");
        let unreachable =
            |reason: String| AppError::UrlUnreachable { url: url.to_string(), reason };

        let response =
            self.client.get(url.clone()).send().map_err(|e| unreachable(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(unreachable(format!("HTTP {}", status)));
        }

        response.text().map_err(|e| unreachable(e.to_string()))
    }
}
