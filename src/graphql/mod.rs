//! GraphQL transport: the HTTP client and the wire types it decodes into.

mod client;
mod types;

pub use client::*;
pub use types::*;
