//! Category assembly: resolves an ordered list of item names into fully
//! detailed records.
//!
//! Items are processed one at a time in category order; the unit of
//! isolation is one item (or one example) per category request, so a
//! broken item is logged and skipped without aborting the rest.

use futures::future::join_all;
use tracing::warn;

use crate::branding;
use crate::format::format_component_name;
use crate::registry::validation;
use crate::registry::{
    BlockSummary, ComponentSummary, ExampleEntry, IndividualBlock, IndividualComponent,
};

use super::{ExampleIndex, RegistryClient};

/// Installation instructions: shadcn CLI command plus import statement
fn install_instructions(name: &str, install_noun: &str, import_noun: &str) -> String {
    format!(
        "You can install the {install_noun} using shadcn/ui CLI. For example, with npx: \
         npx shadcn@latest add \"{registry}/{name}.json\" (Rules: make sure the URL is wrapped in \
         double quotes. Once installed, you can import the {import_noun} like this: \
         import {{ {pascal} }} from \"@/components/ui/{name}\";",
        registry = branding::REGISTRY_URL,
        pascal = format_component_name(name),
    )
}

/// Context paragraph prepended to the raw implementation source
fn context_disclaimer(name: &str, import_noun: &str) -> String {
    format!(
        "The code below is for context only. It helps you understand the {import_noun}'s props, \
         types, and behavior. After installing, the {import_noun} will be available for import \
         via: import {{ {pascal} }} from \"@/components/ui/{name}\";",
        pascal = format_component_name(name),
    )
}

/// Resolve a component category into detailed records.
///
/// Names absent from `summaries` are skipped silently (the registry may no
/// longer contain an item); the result preserves the category's relative
/// order and never contains names outside it.
pub async fn assemble_components(
    category_items: &[&str],
    summaries: &[ComponentSummary],
    index: &ExampleIndex,
    client: &RegistryClient,
) -> Vec<IndividualComponent> {
    let mut records = Vec::new();

    for &component_name in category_items {
        let summary = match summaries.iter().find(|c| c.name == component_name) {
            Some(summary) => summary,
            None => continue,
        };

        let detail = match client.fetch_component_detail(component_name).await {
            Ok(detail) => detail,
            Err(e) => {
                warn!("Skipping component {}: {:#}", component_name, e);
                continue;
            }
        };
        let raw_content = detail.files.first().map(|file| file.content.clone());

        // Example details for one component fetch concurrently; a failed
        // example is omitted, the rest survive.
        let example_names = index.examples_for(component_name);
        let details = join_all(
            example_names
                .iter()
                .map(|name| client.fetch_example_detail(name)),
        )
        .await;

        let mut examples = Vec::new();
        for (name, result) in example_names.iter().zip(details) {
            match result {
                Ok(detail) => examples.push(ExampleEntry {
                    name: detail.name,
                    kind: detail.kind,
                    description: detail.description,
                    content: detail.files.first().map(|file| file.content.clone()),
                }),
                Err(e) => warn!("Omitting example {} for {}: {:#}", name, component_name, e),
            }
        }

        let record = IndividualComponent {
            name: summary.name.clone(),
            kind: summary.kind.clone(),
            description: summary.description.clone(),
            install: install_instructions(&summary.name, "component/blocks", "component"),
            content: raw_content.map(|content| {
                format!("{}{}", context_disclaimer(&summary.name, "component"), content)
            }),
            examples,
        };

        match validation::individual_component(&record) {
            Ok(()) => records.push(record),
            Err(e) => warn!("Skipping component {}: {}", component_name, e),
        }
    }

    records
}

/// Resolve a block category into detailed records; same contract as
/// [`assemble_components`] without example cross-referencing
pub async fn assemble_blocks(
    category_items: &[&str],
    summaries: &[BlockSummary],
    client: &RegistryClient,
) -> Vec<IndividualBlock> {
    let mut records = Vec::new();

    for &block_name in category_items {
        let summary = match summaries.iter().find(|b| b.name == block_name) {
            Some(summary) => summary,
            None => continue,
        };

        let detail = match client.fetch_block_detail(block_name).await {
            Ok(detail) => detail,
            Err(e) => {
                warn!("Skipping block {}: {:#}", block_name, e);
                continue;
            }
        };
        let raw_content = detail.files.first().map(|file| file.content.clone());

        let record = IndividualBlock {
            name: summary.name.clone(),
            kind: summary.kind.clone(),
            description: summary.description.clone(),
            install: install_instructions(&summary.name, "blocks", "block"),
            content: raw_content
                .map(|content| format!("{}{}", context_disclaimer(&summary.name, "block"), content)),
            // Blocks don't carry usage examples today
            examples: Vec::new(),
        };

        match validation::individual_block(&record) {
            Ok(()) => records.push(record),
            Err(e) => warn!("Skipping block {}: {}", block_name, e),
        }
    }

    records
}
