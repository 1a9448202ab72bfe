//! Capability handlers behind the sibling-function routes.
//!
//! The generative handlers (multi-sport, reasoning, code generation,
//! translation, NFT metadata) run the provider fallback chain and wrap
//! the result in the capability's response envelope. The Crossmint
//! handlers issue exactly one outbound API call each.

pub mod codegen;
pub mod crossmint;
pub mod multi_sport;
pub mod nft;
pub mod reasoning;
pub mod translate;

pub use crossmint::CrossmintClient;
