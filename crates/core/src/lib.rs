//! Domain types and pure logic for catalog batch operations.
//!
//! Nothing in this crate talks to the asset store. Callers pass in listings
//! and lookup outcomes; the functions here classify, name, scan and
//! serialize.

pub mod envelope;
pub mod error;
pub mod locator;
pub mod manifest;
pub mod scanner;
pub mod types;
