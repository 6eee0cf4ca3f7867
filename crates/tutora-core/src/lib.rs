//! tutora-core
//!
//! Pure domain types: lesson requests, generated lesson documents, and the
//! subject/language vocabulary. No AWS SDK dependency — this is the shared
//! vocabulary of the tutora system.

pub mod error;
pub mod models;
