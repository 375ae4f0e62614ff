use serde::Deserialize;
use serde_json::Value;

use crate::mcp::contracts::{DEFAULT_SEARCH_LIMIT, MAX_SEARCH_LIMIT};
use crate::okm::OkmClient;
use crate::tools::{ToolError, error_result, limit_or_default, require_str, text_result};

#[derive(Deserialize)]
struct SearchPayload {
    #[serde(default, rename = "queryResult")]
    query_result: Vec<Hit>,
}

#[derive(Deserialize)]
struct Hit {
    node: Node,
    #[serde(default)]
    excerpt: String,
}

#[derive(Deserialize)]
struct Node {
    #[serde(default)]
    path: String,
    #[serde(default)]
    uuid: String,
}

pub async fn call(client: &OkmClient, args: &Value) -> Value {
    match run(client, args).await {
        Ok(result) => result,
        Err(err) => error_result(err.kind, err.message, None),
    }
}

async fn run(client: &OkmClient, args: &Value) -> Result<Value, ToolError> {
    let query = require_str(args, "query")?;
    let limit = limit_or_default(args, "limit", DEFAULT_SEARCH_LIMIT, MAX_SEARCH_LIMIT)?;

    let response = client
        .get(
            "/services/rest/search/findByContent",
            &[("content", query)],
            &[],
        )
        .await?;
    let payload: SearchPayload = response.json().await?;

    // The backend ignores limits, so truncation happens here on the full
    // result set, preserving backend order.
    let out = payload
        .query_result
        .iter()
        .take(limit)
        .map(|hit| {
            format!(
                "path: {}\ndocId: {}\nexcerpt: {}\n",
                hit.node.path, hit.node.uuid, hit.excerpt
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    Ok(text_result(out))
}
