use serde_json::Value;

use crate::okm::OkmClient;
use crate::tools::{ToolError, error_result, require_str, text_result};

pub async fn add(client: &OkmClient, args: &Value) -> Value {
    match run_add(client, args).await {
        Ok(result) => result,
        Err(err) => error_result(err.kind, err.message, None),
    }
}

pub async fn remove(client: &OkmClient, args: &Value) -> Value {
    match run_remove(client, args).await {
        Ok(result) => result,
        Err(err) => error_result(err.kind, err.message, None),
    }
}

async fn run_add(client: &OkmClient, args: &Value) -> Result<Value, ToolError> {
    let node_id = require_str(args, "nodeId")?;
    let keyword = require_str(args, "keyword")?;

    client
        .post(
            "/services/rest/property/addKeyword",
            &[("nodeId", node_id), ("keyword", keyword)],
            None,
            &[],
        )
        .await?;

    Ok(text_result(format!(
        "Successfully added keyword \"{keyword}\" to {node_id}"
    )))
}

async fn run_remove(client: &OkmClient, args: &Value) -> Result<Value, ToolError> {
    let node_id = require_str(args, "nodeId")?;
    let keyword = require_str(args, "keyword")?;

    client
        .delete(
            "/services/rest/property/removeKeyword",
            &[("nodeId", node_id), ("keyword", keyword)],
            &[],
        )
        .await?;

    Ok(text_result(format!(
        "Successfully removed keyword \"{keyword}\" from {node_id}"
    )))
}
