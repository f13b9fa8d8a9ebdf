//! Synthetic client-support record generator.
//!
//! [`core::generator::RecordGenerator`] builds randomized purchase records,
//! [`stream::records`] serializes them as newline-delimited JSON, and
//! [`keys`] backs the private key preview tool.

pub mod core;
pub mod domain;
pub mod keys;
pub mod stream;
