//! One-shot HTTP probes against the API.

use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use thiserror::Error;

/// Why a probe did not produce a usable body.
#[derive(Debug, Error)]
pub enum ProbeError {
    #[error("request to {url} failed")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{url} returned status {status}")]
    Status { url: String, status: StatusCode },

    #[error("{url} returned a body that is not the expected JSON")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Body of `GET /` as far as the status client cares.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RootResponse {
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

/// HTTP client bound to one API base URL.
#[derive(Debug, Clone)]
pub struct StatusProbe {
    client: Client,
    base_url: String,
}

impl StatusProbe {
    pub fn new(base_url: &str) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(client: Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for `path` (which starts with `/`).
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// `GET {base}/`.
    pub async fn fetch_root(&self) -> Result<RootResponse, ProbeError> {
        self.get_json("/").await
    }

    /// `GET {base}/health`.
    pub async fn fetch_health(&self) -> Result<HealthResponse, ProbeError> {
        self.get_json("/health").await
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ProbeError> {
        let url = self.url(path);
        let network = |source| ProbeError::Network { url: url.clone(), source };

        let res = self.client.get(&url).send().await.map_err(network)?;
        let status = res.status();
        if !status.is_success() {
            return Err(ProbeError::Status { url, status });
        }

        let body = res.text().await.map_err(network)?;
        serde_json::from_str(&body).map_err(|source| ProbeError::Decode { url, source })
    }
}
