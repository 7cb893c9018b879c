//! Core types for the commerce-ui component registry

use serde::{Deserialize, Serialize};

/// Manifest kind tag for components
pub const KIND_COMPONENT: &str = "registry:component";

/// Manifest kind tag for blocks
pub const KIND_BLOCK: &str = "registry:block";

/// Manifest kind tag for usage examples
pub const KIND_EXAMPLE: &str = "registry:example";

/// One catalog component as listed in the registry manifest
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentSummary {
    /// Unique key within the component kind
    pub name: String,

    /// Kind tag, always `registry:component`
    #[serde(rename = "type")]
    pub kind: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// One catalog block as listed in the registry manifest
///
/// Structurally identical to [`ComponentSummary`] today; kept as its own
/// type because the two kinds validate against distinct named schemas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlockSummary {
    pub name: String,

    /// Kind tag, always `registry:block`
    #[serde(rename = "type")]
    pub kind: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// One source file inside a detail document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegistryFile {
    pub content: String,
}

/// Per-component detail document, fetched fresh per request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentDetail {
    pub name: String,

    #[serde(rename = "type")]
    pub kind: String,

    /// Implementation sources; the first file carries the component body
    pub files: Vec<RegistryFile>,
}

/// Per-block detail document; blocks additionally declare their registry
/// dependencies
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlockDetail {
    pub name: String,

    #[serde(rename = "type")]
    pub kind: String,

    /// Dependency URLs into the registry
    #[serde(rename = "registryDependencies")]
    pub registry_dependencies: Vec<String>,

    pub files: Vec<RegistryFile>,
}

/// Example entry from the registry manifest
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExampleSummary {
    pub name: String,

    /// Kind tag, always `registry:example`
    #[serde(rename = "type")]
    pub kind: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Dependency URLs naming the components this example demonstrates
    #[serde(rename = "registryDependencies")]
    pub registry_dependencies: Vec<String>,
}

/// Per-example detail document, fetched lazily for cross-referenced
/// examples only
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExampleDetail {
    pub name: String,

    #[serde(rename = "type")]
    pub kind: String,

    pub description: String,

    pub files: Vec<RegistryFile>,
}

/// Usage example attached to an assembled record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExampleEntry {
    pub name: String,

    #[serde(rename = "type")]
    pub kind: String,

    pub description: String,

    /// First file's content; must be present for the record to validate
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

/// Fully resolved component record returned by a category tool
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndividualComponent {
    pub name: String,

    #[serde(rename = "type")]
    pub kind: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Installation instructions: CLI command plus import statement
    pub install: String,

    /// Disclaimer-prefixed implementation source; absent when the detail
    /// document carried no files (such a record fails validation)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,

    pub examples: Vec<ExampleEntry>,
}

/// Fully resolved block record returned by a category tool
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndividualBlock {
    pub name: String,

    #[serde(rename = "type")]
    pub kind: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    pub install: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,

    /// Blocks don't carry usage examples today
    pub examples: Vec<ExampleEntry>,
}
