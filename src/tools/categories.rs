use serde_json::Value;

use crate::okm::OkmClient;
use crate::tools::{ToolError, error_result, require_str, text_result};

pub async fn add(client: &OkmClient, args: &Value) -> Value {
    match run(client, args).await {
        Ok(result) => result,
        Err(err) => error_result(err.kind, err.message, None),
    }
}

async fn run(client: &OkmClient, args: &Value) -> Result<Value, ToolError> {
    let node_id = require_str(args, "nodeId")?;
    let cat_id = require_str(args, "catId")?;

    client
        .post(
            "/services/rest/property/addCategory",
            &[("nodeId", node_id), ("catId", cat_id)],
            None,
            &[],
        )
        .await?;

    Ok(text_result(format!(
        "Successfully added category \"{cat_id}\" to {node_id}"
    )))
}
