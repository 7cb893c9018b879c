//! Centralized branding constants
//!
//! All project naming and registry endpoints come from this module.
//! The values are fixed at build time; nothing here is read from the
//! environment.

/// Upstream design-system package this server fronts
pub const PROJECT_NAME: &str = "@stackzero-labs/ui";

/// Server name advertised to MCP clients
pub const SERVER_NAME: &str = "commerce-ui MCP";

/// Registry web root
pub const BASE_URL: &str = "https://ui.stackzero.co";

/// Base URL for per-item resource documents
pub const REGISTRY_URL: &str = "https://ui.stackzero.co/r";

/// Full registry manifest listing every catalog item
pub const REGISTRY_FILE_URL: &str = "https://ui.stackzero.co/registry.json";

/// Host substring that marks a dependency URL as registry-owned
pub const REGISTRY_HOST: &str = "stackzero.co";

/// Resource document URL for a named component or block.
///
/// # Example
/// ```
/// use commerce_ui_core::branding;
///
/// let url = branding::item_url(branding::REGISTRY_URL, "star-rating-basic");
/// assert_eq!(url, "https://ui.stackzero.co/r/star-rating-basic.json");
/// ```
pub fn item_url(registry_url: &str, name: &str) -> String {
    format!("{}/{}.json", registry_url, name)
}

/// Resource document URL for a named example.
///
/// Example names already carry their full resource identifier, so the name
/// is used verbatim with no `.json` suffix.
pub fn example_url(registry_url: &str, name: &str) -> String {
    format!("{}/{}", registry_url, name)
}
