//! Data Transfer Objects for the HTTP API.
//!
//! The citation envelopes live in [`crate::models`] and are re-exported here
//! next to the response types that only the HTTP layer uses.

use serde::{Deserialize, Serialize};

pub use crate::models::{CitationData, CitationRequest, CitationResponse, StyleInfo};

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status of the service
    pub status: String,
}

/// Declared citation styles.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StyleListResponse {
    pub styles: Vec<StyleInfo>,
}
