//! API endpoint handlers.

use axum::Json;
use serde::{Deserialize, Serialize};

pub const API_MESSAGE: &str = "Barkibu Claims Automation API";

/// Body of `GET /`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RootInfo {
    pub message: String,
    pub version: String,
    pub docs: String,
}

/// Body of `GET /health`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
}

pub async fn root() -> Json<RootInfo> {
    tracing::info!(component = "main", reason = "API call", "Root endpoint accessed");
    Json(RootInfo {
        message: API_MESSAGE.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        docs: "/docs".to_string(),
    })
}

pub async fn health() -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "healthy".to_string(),
    })
}
