//! API access
//!
//! Thin HTTP client over the Mortgage Desk REST API.

pub mod client;

pub use client::*;
