//! Cross-reference from component names to the examples that use them

use std::collections::HashMap;

use lazy_static::lazy_static;
use regex::Regex;

use crate::branding;
use crate::registry::ExampleSummary;

lazy_static! {
    static ref RESOURCE_NAME_REGEX: Regex = Regex::new(r"/r/([^/]+)$").unwrap();
}

/// Mapping from a component name to the example names that depend on it.
///
/// Built once from the manifest's example entries during the registration
/// pass; immutable afterward. Insertion order within each list follows the
/// scan order of the example entries, and duplicate example names are
/// suppressed. A component appears only if at least one example names it
/// through a registry-owned dependency URL ending in `/r/<name>`.
#[derive(Debug, Default)]
pub struct ExampleIndex {
    examples_by_component: HashMap<String, Vec<String>>,
}

impl ExampleIndex {
    /// Build the index by scanning every example's dependency URLs.
    ///
    /// URLs outside the registry host, or without a trailing `/r/<name>`
    /// segment, are ignored; that is not an error condition.
    pub fn build(examples: &[ExampleSummary]) -> Self {
        let mut examples_by_component: HashMap<String, Vec<String>> = HashMap::new();

        for example in examples {
            for dependency_url in &example.registry_dependencies {
                if !dependency_url.contains(branding::REGISTRY_HOST) {
                    continue;
                }
                if let Some(capture) = RESOURCE_NAME_REGEX.captures(dependency_url) {
                    let component_name = capture[1].to_string();
                    let entry = examples_by_component.entry(component_name).or_default();
                    if !entry.contains(&example.name) {
                        entry.push(example.name.clone());
                    }
                }
            }
        }

        Self {
            examples_by_component,
        }
    }

    /// Example names referencing `component_name`, in scan order; empty
    /// when the component is not cross-referenced
    pub fn examples_for(&self, component_name: &str) -> &[String] {
        self.examples_by_component
            .get(component_name)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Number of cross-referenced components
    pub fn len(&self) -> usize {
        self.examples_by_component.len()
    }

    pub fn is_empty(&self) -> bool {
        self.examples_by_component.is_empty()
    }
}
