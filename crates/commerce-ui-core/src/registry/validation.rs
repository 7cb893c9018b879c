//! Payload validation against the registry schemas
//!
//! Upstream payloads arrive as untyped JSON; each named schema here checks
//! a candidate value field by field so that failures carry the offending
//! field path. All shapes are known at build time, so validation is a set
//! of explicit functions returning the typed value or a [`ValidationError`].
//!
//! Empty strings are accepted everywhere; only missing required fields and
//! wrong JSON types are rejected.

use serde_json::Value;
use thiserror::Error;

use super::types::{
    BlockDetail, BlockSummary, ComponentDetail, ComponentSummary, ExampleDetail, ExampleSummary,
    IndividualBlock, IndividualComponent, RegistryFile,
};

/// Validation failure for a named schema, pointing at the offending field
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{schema}: invalid value at `{path}`: {message}")]
pub struct ValidationError {
    /// Schema the candidate value was checked against
    pub schema: &'static str,
    /// Path of the offending field (e.g. `files[0].content`)
    pub path: String,
    /// What was wrong with the value
    pub message: String,
}

impl ValidationError {
    fn new(schema: &'static str, path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            schema,
            path: path.into(),
            message: message.into(),
        }
    }
}

fn required_str(schema: &'static str, value: &Value, field: &str) -> Result<String, ValidationError> {
    match value.get(field) {
        Some(Value::String(s)) => Ok(s.clone()),
        Some(_) => Err(ValidationError::new(schema, field, "expected a string")),
        None => Err(ValidationError::new(schema, field, "missing required field")),
    }
}

fn optional_str(
    schema: &'static str,
    value: &Value,
    field: &str,
) -> Result<Option<String>, ValidationError> {
    match value.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(_) => Err(ValidationError::new(schema, field, "expected a string")),
    }
}

fn string_array(
    schema: &'static str,
    value: &Value,
    field: &str,
) -> Result<Vec<String>, ValidationError> {
    let items = match value.get(field) {
        Some(Value::Array(items)) => items,
        Some(_) => return Err(ValidationError::new(schema, field, "expected an array")),
        None => return Err(ValidationError::new(schema, field, "missing required field")),
    };
    items
        .iter()
        .enumerate()
        .map(|(i, item)| match item {
            Value::String(s) => Ok(s.clone()),
            _ => Err(ValidationError::new(
                schema,
                format!("{}[{}]", field, i),
                "expected a string",
            )),
        })
        .collect()
}

fn files_array(schema: &'static str, value: &Value) -> Result<Vec<RegistryFile>, ValidationError> {
    let files = match value.get("files") {
        Some(Value::Array(files)) => files,
        Some(_) => return Err(ValidationError::new(schema, "files", "expected an array")),
        None => return Err(ValidationError::new(schema, "files", "missing required field")),
    };
    files
        .iter()
        .enumerate()
        .map(|(i, file)| match file.get("content") {
            Some(Value::String(content)) => Ok(RegistryFile {
                content: content.clone(),
            }),
            Some(_) => Err(ValidationError::new(
                schema,
                format!("files[{}].content", i),
                "expected a string",
            )),
            None => Err(ValidationError::new(
                schema,
                format!("files[{}].content", i),
                "missing required field",
            )),
        })
        .collect()
}

/// Validate a manifest entry as a component summary
pub fn component_summary(value: &Value) -> Result<ComponentSummary, ValidationError> {
    const SCHEMA: &str = "ComponentSummary";
    Ok(ComponentSummary {
        name: required_str(SCHEMA, value, "name")?,
        kind: required_str(SCHEMA, value, "type")?,
        description: optional_str(SCHEMA, value, "description")?,
    })
}

/// Validate a manifest entry as a block summary
pub fn block_summary(value: &Value) -> Result<BlockSummary, ValidationError> {
    const SCHEMA: &str = "BlockSummary";
    Ok(BlockSummary {
        name: required_str(SCHEMA, value, "name")?,
        kind: required_str(SCHEMA, value, "type")?,
        description: optional_str(SCHEMA, value, "description")?,
    })
}

/// Validate a component detail document
pub fn component_detail(value: &Value) -> Result<ComponentDetail, ValidationError> {
    const SCHEMA: &str = "ComponentDetail";
    Ok(ComponentDetail {
        name: required_str(SCHEMA, value, "name")?,
        kind: required_str(SCHEMA, value, "type")?,
        files: files_array(SCHEMA, value)?,
    })
}

/// Validate a block detail document; blocks must declare their registry
/// dependencies
pub fn block_detail(value: &Value) -> Result<BlockDetail, ValidationError> {
    const SCHEMA: &str = "BlockDetail";
    Ok(BlockDetail {
        name: required_str(SCHEMA, value, "name")?,
        kind: required_str(SCHEMA, value, "type")?,
        registry_dependencies: string_array(SCHEMA, value, "registryDependencies")?,
        files: files_array(SCHEMA, value)?,
    })
}

/// Validate a manifest entry as an example summary
pub fn example_summary(value: &Value) -> Result<ExampleSummary, ValidationError> {
    const SCHEMA: &str = "ExampleSummary";
    Ok(ExampleSummary {
        name: required_str(SCHEMA, value, "name")?,
        kind: required_str(SCHEMA, value, "type")?,
        description: optional_str(SCHEMA, value, "description")?,
        registry_dependencies: string_array(SCHEMA, value, "registryDependencies")?,
    })
}

/// Validate an example detail document; examples require a description
pub fn example_detail(value: &Value) -> Result<ExampleDetail, ValidationError> {
    const SCHEMA: &str = "ExampleDetail";
    Ok(ExampleDetail {
        name: required_str(SCHEMA, value, "name")?,
        kind: required_str(SCHEMA, value, "type")?,
        description: required_str(SCHEMA, value, "description")?,
        files: files_array(SCHEMA, value)?,
    })
}

/// Validate an assembled component record before it is returned.
///
/// The record schema requires implementation content, so an item whose
/// detail document carried no files fails here and is skipped by the
/// assembler.
pub fn individual_component(record: &IndividualComponent) -> Result<(), ValidationError> {
    const SCHEMA: &str = "IndividualComponent";
    if record.content.is_none() {
        return Err(ValidationError::new(
            SCHEMA,
            "content",
            "missing required field",
        ));
    }
    for (i, example) in record.examples.iter().enumerate() {
        if example.content.is_none() {
            return Err(ValidationError::new(
                SCHEMA,
                format!("examples[{}].content", i),
                "missing required field",
            ));
        }
    }
    Ok(())
}

/// Validate an assembled block record before it is returned
pub fn individual_block(record: &IndividualBlock) -> Result<(), ValidationError> {
    const SCHEMA: &str = "IndividualBlock";
    if record.content.is_none() {
        return Err(ValidationError::new(
            SCHEMA,
            "content",
            "missing required field",
        ));
    }
    for (i, example) in record.examples.iter().enumerate() {
        if example.content.is_none() {
            return Err(ValidationError::new(
                SCHEMA,
                format!("examples[{}].content", i),
                "missing required field",
            ));
        }
    }
    Ok(())
}
