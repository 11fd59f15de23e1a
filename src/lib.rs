//! d20 - random token generator
//!
//! Produces passwords, PINs, keys and other random strings. Tokens are drawn
//! from the operating system CSPRNG over a named or custom alphabet (or as
//! raw bytes), then optionally base64-encoded, case-mangled, wrapped into
//! fixed-width lines and deduplicated.

#![allow(missing_docs)]

pub mod boot;
pub mod charset;
pub mod cli;
pub mod config;
pub mod generator;
pub mod random;
pub mod sampler;
pub mod separator;
pub mod setup_tracing;
pub mod token;
pub mod transform;
pub mod unique;
