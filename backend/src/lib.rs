//! # Cytewise
//!
//! Citation generator backend.
//!
//! The crate takes a flat record of bibliographic fields and renders it as a
//! citation string in a requested style. MLA and APA have real rules; the
//! other declared styles render a placeholder.
//!
//! ## Architecture
//!
//! - [`models`]: the field-set, style tags and request/response envelopes
//! - [`formatter`]: style dispatch and the per-style rules
//! - [`config`]: listen address resolution
//! - [`http`]: axum router and handlers (feature `http-server`)
//! - [`api`]: public DTO surface

pub mod api;
pub mod config;
pub mod formatter;
pub mod models;

#[cfg(feature = "http-server")]
pub mod http;
