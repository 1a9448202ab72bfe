//! Generative intelligence layer.
//!
//! Each generative operation is an [`IntelTask`]; the [`FallbackChain`]
//! tries providers in priority order and falls back to the deterministic
//! mock synthesizer, so callers always get a provenance-tagged payload.

pub mod chain;
pub mod prompts;
pub mod providers;
pub mod synth;
pub mod task;

pub use chain::{FallbackChain, Generated};
pub use task::IntelTask;
