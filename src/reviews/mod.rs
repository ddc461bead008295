//! Review Gateway
//!
//! Client and wire types for the external review API. One outbound GET
//! per request, no retries, no caching.

mod client;
mod types;

pub use client::*;
pub use types::*;
