//! Public API surface for the backend.
//!
//! This file consolidates the DTO types exchanged over the HTTP API.
//! All types derive Serialize/Deserialize for JSON serialization.

pub use crate::formatter::{generate_citation, style_catalog, PLACEHOLDER};
pub use crate::models::CitationData;
pub use crate::models::CitationRequest;
pub use crate::models::CitationResponse;
pub use crate::models::CitationStyle;
pub use crate::models::StyleInfo;
