//! # commerce-ui MCP server
//!
//! Exposes the commerce-ui component registry over the Model Context
//! Protocol: one tool per category plus two catch-all listing tools.
//!
//! ## Modules
//!
//! - `tools` - tool table construction and dispatch
//! - `handler` - rmcp `ServerHandler` serving the table over stdio

pub mod handler;
pub mod tools;

pub use handler::CommerceUiHandler;
pub use tools::{ToolAction, ToolSet, ToolSpec};
