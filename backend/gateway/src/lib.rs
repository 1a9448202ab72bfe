//! Boxscore Gateway HTTP API Server
//!
//! Serves the agent manifest, the `invoke` dispatcher, the per-user
//! runtime manifest, and the sibling function routes.

pub mod cors;
pub mod functions_api;
pub mod health_api;
pub mod invoke_api;
pub mod manifest_api;
pub mod runtime_api;
pub mod server;

pub use server::{build_router, start_server, GatewayState};
