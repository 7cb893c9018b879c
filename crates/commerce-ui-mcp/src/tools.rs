//! Tool table construction and dispatch
//!
//! The registration pass runs once at startup, before the transport is
//! opened: it fetches the summary lists, builds the example index, and
//! registers one tool per category plus the two catch-all listing tools.
//! The resulting table is immutable while the server runs.

use anyhow::Result;
use tracing::info;

use commerce_ui_core::{
    assemble_blocks, assemble_components, BlockSummary, ComponentSummary, ExampleIndex,
    RegistryClient, BLOCK_CATEGORIES, COMPONENT_CATEGORIES,
};

/// What a registered tool does when called
#[derive(Debug, Clone)]
pub enum ToolAction {
    /// List every component summary, fetched fresh per call
    ListComponents,
    /// List every block summary, fetched fresh per call
    ListBlocks,
    /// Assemble detailed records for one component category
    ComponentCategory {
        label: &'static str,
        items: &'static [&'static str],
    },
    /// Assemble detailed records for one block category
    BlockCategory {
        label: &'static str,
        items: &'static [&'static str],
    },
}

/// A registered tool: callable name, description, dispatch target
#[derive(Debug, Clone)]
pub struct ToolSpec {
    pub name: String,
    pub description: String,
    pub action: ToolAction,
}

/// The registered tool table plus the startup data the category tools
/// close over
pub struct ToolSet {
    client: RegistryClient,
    components: Vec<ComponentSummary>,
    blocks: Vec<BlockSummary>,
    example_index: ExampleIndex,
    tools: Vec<ToolSpec>,
}

impl ToolSet {
    /// Registration pass.
    ///
    /// Components and example entries are independent fetches and run
    /// concurrently. List failures degrade to empty summaries: the tools
    /// still register, they just resolve fewer items.
    pub async fn build(client: RegistryClient) -> Result<Self> {
        let (components, example_summaries) = tokio::join!(
            client.fetch_ui_components(),
            client.fetch_example_summaries()
        );
        let blocks = client.fetch_ui_blocks().await;

        let example_index = ExampleIndex::build(&example_summaries);

        let mut tools = vec![
            ToolSpec {
                name: "getUIComponents".to_string(),
                description: "Provides a comprehensive list of all commerce-ui components."
                    .to_string(),
                action: ToolAction::ListComponents,
            },
            ToolSpec {
                name: "getUIBlocks".to_string(),
                description: "Provides a comprehensive list of all commerce-ui blocks.".to_string(),
                action: ToolAction::ListBlocks,
            },
        ];

        for category in COMPONENT_CATEGORIES {
            tools.push(ToolSpec {
                name: format!("get{}", category.label),
                description: format!(
                    "Provides implementation details for {} components.",
                    category.items.join(", ")
                ),
                action: ToolAction::ComponentCategory {
                    label: category.label,
                    items: category.items,
                },
            });
        }

        for category in BLOCK_CATEGORIES {
            tools.push(ToolSpec {
                name: format!("get{}", category.label),
                description: format!(
                    "Provides implementation details for {} blocks.",
                    category.items.join(", ")
                ),
                action: ToolAction::BlockCategory {
                    label: category.label,
                    items: category.items,
                },
            });
        }

        info!(
            components = components.len(),
            blocks = blocks.len(),
            cross_referenced = example_index.len(),
            tools = tools.len(),
            "Registered registry tools"
        );

        Ok(Self {
            client,
            components,
            blocks,
            example_index,
            tools,
        })
    }

    /// Empty table for degraded startup; the transport still opens
    pub fn empty(client: RegistryClient) -> Self {
        Self {
            client,
            components: Vec::new(),
            blocks: Vec::new(),
            example_index: ExampleIndex::default(),
            tools: Vec::new(),
        }
    }

    /// The registered tools, in registration order
    pub fn tools(&self) -> &[ToolSpec] {
        &self.tools
    }

    /// Look up a registered tool by its callable name
    pub fn find(&self, name: &str) -> Option<&ToolSpec> {
        self.tools.iter().find(|tool| tool.name == name)
    }

    /// Run a tool to completion.
    ///
    /// `Ok` carries the JSON text payload; `Err` carries the user-facing
    /// error text for an error-flagged response.
    pub async fn execute(&self, spec: &ToolSpec) -> Result<String, String> {
        match &spec.action {
            ToolAction::ListComponents => {
                let components = self.client.fetch_ui_components().await;
                serde_json::to_string_pretty(&components)
                    .map_err(|_| "Failed to fetch commerce-UI components".to_string())
            }
            ToolAction::ListBlocks => {
                let blocks = self.client.fetch_ui_blocks().await;
                serde_json::to_string_pretty(&blocks)
                    .map_err(|_| "Failed to fetch commerce-UI blocks".to_string())
            }
            ToolAction::ComponentCategory { label, items } => {
                let records =
                    assemble_components(items, &self.components, &self.example_index, &self.client)
                        .await;
                serde_json::to_string_pretty(&records)
                    .map_err(|e| format!("Error processing {} components: {}", label, e))
            }
            ToolAction::BlockCategory { label, items } => {
                let records = assemble_blocks(items, &self.blocks, &self.client).await;
                serde_json::to_string_pretty(&records)
                    .map_err(|e| format!("Error processing {} blocks: {}", label, e))
            }
        }
    }
}
