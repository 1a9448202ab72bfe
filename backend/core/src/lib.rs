pub mod error;
pub mod traits;
pub mod types;

pub use error::BoxscoreError;
pub use traits::{LlmProvider, LlmRequest, LlmResponse};
pub use types::{AgentDescriptor, InvocationRequest, ProvenanceTag, Transport};
