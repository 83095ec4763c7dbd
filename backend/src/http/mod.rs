//! HTTP server module for the Cytewise backend.
//!
//! This module provides an axum-based HTTP server that exposes the citation
//! formatter as a small JSON API.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │  HTTP Layer (axum handlers)                               │
//! │  - Request decoding                                       │
//! │  - JSON serialization                                     │
//! │  - CORS headers, tracing, error mapping                   │
//! └───────────────────┬──────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼──────────────────────────────────────┐
//! │  Formatter (crate::formatter)                             │
//! │  - Style dispatch                                         │
//! │  - Per-style clause assembly                              │
//! └──────────────────────────────────────────────────────────┘
//! ```

pub mod dto;
pub mod error;
pub mod handlers;
pub mod router;

pub use error::AppError;
pub use router::create_router;
