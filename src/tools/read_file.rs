use reqwest::header::CONTENT_TYPE;
use serde_json::{Value, json};

use crate::mcp::contracts::DEFAULT_PAGE_RANGE;
use crate::okm::OkmClient;
use crate::pdf;
use crate::tools::{ToolError, error_result, require_str, str_or_default, text_result};

pub async fn call(client: &OkmClient, args: &Value) -> Value {
    match run(client, args).await {
        Ok(result) => result,
        Err(err) => error_result(err.kind, err.message, None),
    }
}

async fn run(client: &OkmClient, args: &Value) -> Result<Value, ToolError> {
    let doc_id = require_str(args, "docId")?;
    if doc_id.contains('\\') {
        return Err(ToolError::validation(
            "docId must use forward slashes, backslashes are not permitted",
        ));
    }
    let page_range = str_or_default(args, "page_range", DEFAULT_PAGE_RANGE)?;

    let response = client
        .get(
            "/services/rest/document/getContent",
            &[("docId", doc_id)],
            &[("Accept", "application/octet-stream")],
        )
        .await?;

    // Only the media type matters, parameters after ';' do not.
    let mime = response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(|value| value.split(';').next().unwrap_or("").trim().to_string())
        .unwrap_or_else(|| "application/octet-stream".to_string());

    let bytes = response.bytes().await?;

    if mime.starts_with("text/") {
        return Ok(text_result(String::from_utf8_lossy(&bytes).into_owned()));
    }

    match pdf::extract_text(&bytes, page_range) {
        Ok(text) => Ok(json!({
            "content": [{"type": "text", "text": text, "mimeType": mime}],
            "isError": false
        })),
        Err(err) => Err(ToolError::extraction(format!(
            "failed to extract text from PDF (docId: {doc_id}): {err}"
        ))),
    }
}
