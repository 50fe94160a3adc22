//! HTTP gateway for the roster service.
//!
//! Serves the in-memory record collection over JSON with permissive CORS
//! headers so browser clients on any origin can use it.

#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]

pub mod config;
pub mod error;
pub mod routes;
