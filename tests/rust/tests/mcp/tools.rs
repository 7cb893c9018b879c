//! ToolSet registration pass and dispatch

use pretty_assertions::assert_eq;
use serde_json::Value;
use wiremock::MockServer;

use commerce_ui_mcp::{ToolAction, ToolSet};

use tests::{
    client_for, component_detail_body, manifest_example, manifest_item, mount_detail,
    mount_manifest, unreachable_client,
};

#[tokio::test]
async fn test_registration_registers_every_category_tool() {
    let server = MockServer::start().await;
    mount_manifest(&server, vec![]).await;

    let tool_set = ToolSet::build(client_for(&server)).await.unwrap();
    let names: Vec<&str> = tool_set.tools().iter().map(|t| t.name.as_str()).collect();

    assert_eq!(
        names,
        [
            "getUIComponents",
            "getUIBlocks",
            "getRatings",
            "getImages",
            "getProducts",
            "getBanners",
        ]
    );
}

#[tokio::test]
async fn test_category_descriptions_enumerate_items() {
    let server = MockServer::start().await;
    mount_manifest(&server, vec![]).await;

    let tool_set = ToolSet::build(client_for(&server)).await.unwrap();

    let ratings = tool_set.find("getRatings").unwrap();
    assert!(ratings.description.starts_with("Provides implementation details for"));
    assert!(ratings.description.contains("star-rating-basic"));
    assert!(ratings.description.contains("face-rating-gradient"));
    assert!(ratings.description.ends_with("components."));

    let banners = tool_set.find("getBanners").unwrap();
    assert!(banners.description.contains("banner-01-block"));
    assert!(banners.description.contains("banner-12-block"));
    assert!(banners.description.ends_with("blocks."));

    assert!(tool_set.find("getNonexistent").is_none());
}

#[tokio::test]
async fn test_registration_survives_unreachable_registry() {
    let tool_set = ToolSet::build(unreachable_client()).await.unwrap();

    // Every tool registers; the category tools just resolve no items.
    assert_eq!(tool_set.tools().len(), 6);
    let ratings = tool_set.find("getRatings").unwrap().clone();
    let payload = tool_set.execute(&ratings).await.unwrap();
    let records: Vec<Value> = serde_json::from_str(&payload).unwrap();
    assert!(records.is_empty());
}

#[tokio::test]
async fn test_list_components_returns_fresh_summaries() {
    let server = MockServer::start().await;
    mount_manifest(
        &server,
        vec![manifest_item("star-rating-basic", "registry:component", "Stars")],
    )
    .await;

    let tool_set = ToolSet::build(client_for(&server)).await.unwrap();
    let spec = tool_set.find("getUIComponents").unwrap().clone();
    assert!(matches!(spec.action, ToolAction::ListComponents));

    let payload = tool_set.execute(&spec).await.unwrap();
    let summaries: Vec<Value> = serde_json::from_str(&payload).unwrap();
    assert_eq!(summaries.len(), 1);
    assert_eq!(summaries[0]["name"], "star-rating-basic");
    assert_eq!(summaries[0]["type"], "registry:component");
}

#[tokio::test]
async fn test_category_tool_returns_assembled_records() {
    let server = MockServer::start().await;
    mount_manifest(
        &server,
        vec![
            manifest_item("star-rating-basic", "registry:component", "Stars"),
            manifest_example(
                "star-rating-basic-demo",
                &["https://ui.stackzero.co/r/star-rating-basic"],
            ),
        ],
    )
    .await;
    mount_detail(
        &server,
        "star-rating-basic.json",
        component_detail_body("star-rating-basic", "star code"),
    )
    .await;
    mount_detail(
        &server,
        "star-rating-basic-demo",
        serde_json::json!({
            "name": "star-rating-basic-demo",
            "type": "registry:example",
            "description": "Star rating demo",
            "files": [{"content": "demo code"}],
        }),
    )
    .await;

    let tool_set = ToolSet::build(client_for(&server)).await.unwrap();
    let spec = tool_set.find("getRatings").unwrap().clone();

    let payload = tool_set.execute(&spec).await.unwrap();
    let records: Vec<Value> = serde_json::from_str(&payload).unwrap();

    // Only the one category item present in the registry resolves.
    assert_eq!(records.len(), 1);
    assert_eq!(records[0]["name"], "star-rating-basic");
    assert!(records[0]["install"]
        .as_str()
        .unwrap()
        .contains("StarRatingBasic"));
    assert_eq!(
        records[0]["examples"][0]["name"],
        "star-rating-basic-demo"
    );
}

#[tokio::test]
async fn test_empty_tool_set_has_no_tools() {
    let tool_set = ToolSet::empty(unreachable_client());
    assert!(tool_set.tools().is_empty());
    assert!(tool_set.find("getUIComponents").is_none());
}
