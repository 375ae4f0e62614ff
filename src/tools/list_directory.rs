use serde::Deserialize;
use serde_json::{Value, json};

use crate::okm::OkmClient;
use crate::tools::{ToolError, error_result, json_result, require_str};

#[derive(Deserialize)]
struct Child {
    #[serde(default)]
    title: String,
    #[serde(default)]
    path: String,
    #[serde(default)]
    folder: bool,
}

pub async fn call(client: &OkmClient, args: &Value) -> Value {
    match run(client, args).await {
        Ok(result) => result,
        Err(err) => error_result(err.kind, err.message, None),
    }
}

async fn run(client: &OkmClient, args: &Value) -> Result<Value, ToolError> {
    let path = require_str(args, "path")?;

    let response = client
        .get(
            "/services/rest/document/getChildren",
            &[("fldId", path)],
            &[],
        )
        .await?;
    let children: Vec<Child> = response.json().await?;

    let listing: Vec<Value> = children
        .iter()
        .map(|child| {
            json!({
                "name": child.title,
                "path": child.path,
                "isFolder": child.folder,
            })
        })
        .collect();

    Ok(json_result(json!(listing)))
}
