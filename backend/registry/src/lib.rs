//! Agent catalog, id resolution, and manifest generation.
//!
//! The catalog is the single source of truth for which agents exist: the
//! public manifest and the invocation resolver are both derived from it,
//! so every advertised id is invocable and vice versa.

pub mod catalog;
pub mod manifest;
pub mod registry;
pub mod runtime;

pub use manifest::{base_url_from_headers, build_manifest, Manifest, FUNCTIONS_PREFIX};
pub use registry::AgentRegistry;
pub use runtime::{build_runtime_manifest, UserProfile};
