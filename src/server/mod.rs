//! HTTP server adapters
//!
//! This module provides adapters that translate between HTTP frameworks
//! and the HTTP-agnostic API layer.
//!
//! Currently supported:
//! - `tiny_http` - Lightweight single-threaded HTTP server

#[cfg(feature = "tiny_http")]
pub mod tiny_http;
