//! Core types for the roster service.
//!
//! Defines the loosely-typed [`Record`], its server-assigned [`RecordId`],
//! and the [`RecordStore`] that owns the in-memory collection for the
//! lifetime of the process.

#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]

pub mod error;
pub mod id;
pub mod record;
pub mod seed;
pub mod store;

pub use error::{InvalidBody, RecordNotFound};
pub use id::RecordId;
pub use record::Record;
pub use seed::seed_records;
pub use store::{Mutation, RecordStore};
