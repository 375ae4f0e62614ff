use serde_json::Value;

use crate::mcp::errors;
use crate::okm::OkmClient;
use crate::tools::{ToolError, error_result, json_result, require_str};

pub async fn call(client: &OkmClient, args: &Value) -> Value {
    match run(client, args).await {
        Ok(result) => result,
        Err(err) => error_result(err.kind, err.message, None),
    }
}

async fn run(client: &OkmClient, args: &Value) -> Result<Value, ToolError> {
    let node_id = require_str(args, "nodeId")?;

    // Lookup strategy, not a retry: try the reference as a UUID first, then
    // as a repository path. Matches upstream behavior, which falls back on
    // any failure of the first call.
    let response = match client
        .get(
            "/services/rest/document/getProperties",
            &[("docId", node_id)],
            &[],
        )
        .await
    {
        Ok(response) => response,
        Err(first) => {
            tracing::debug!(node_id, %first, "docId lookup failed, retrying as path");
            client
                .get(
                    "/services/rest/document/getProperties",
                    &[("docPath", node_id)],
                    &[],
                )
                .await
                .map_err(|second| ToolError {
                    kind: errors::LOOKUP_FALLBACK_EXHAUSTED,
                    message: format!(
                        "metadata lookup failed for {node_id} (docId: {first}; docPath: {second})"
                    ),
                })?
        }
    };

    let meta: Value = response.json().await?;
    Ok(json_result(meta))
}
