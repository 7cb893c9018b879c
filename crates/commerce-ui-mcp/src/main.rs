//! Process entry point: tracing setup, tool registration, stdio transport

use std::sync::Arc;

use rmcp::{transport::stdio, ServiceExt};
use tracing::{error, info, warn};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use commerce_ui_core::RegistryClient;
use commerce_ui_mcp::{CommerceUiHandler, ToolSet};

/// Initialize tracing with console output on stderr.
///
/// stdout belongs to the MCP transport, so every diagnostic goes to
/// stderr. `RUST_LOG` takes precedence over the defaults.
fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new("info")
            .add_directive("commerce_ui_core=debug".parse().unwrap())
            .add_directive("commerce_ui_mcp=debug".parse().unwrap())
    });

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .compact()
        .with_target(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer)
        .init();
}

#[tokio::main]
async fn main() {
    init_tracing();

    let tool_set = match ToolSet::build(RegistryClient::new()).await {
        Ok(tool_set) => tool_set,
        Err(e) => {
            // Serve whatever registered; a reachable transport with no
            // category tools beats refusing to start.
            warn!("Tool registration failed, starting with limited functionality: {:#}", e);
            ToolSet::empty(RegistryClient::new())
        }
    };

    let handler = CommerceUiHandler::new(Arc::new(tool_set));
    let service = match handler.serve(stdio()).await {
        Ok(service) => service,
        Err(e) => {
            error!("Failed to connect to stdio transport: {:#}", e);
            std::process::exit(1);
        }
    };

    info!("commerce-ui MCP server running on stdio");

    if let Err(e) = service.waiting().await {
        error!("Server task terminated abnormally: {:#}", e);
    }
}
