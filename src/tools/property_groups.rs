use serde_json::{Map, Value};

use crate::okm::OkmClient;
use crate::tools::{ToolError, error_result, require_str, text_result};

pub async fn add_group(client: &OkmClient, args: &Value) -> Value {
    match run_add_group(client, args).await {
        Ok(result) => result,
        Err(err) => error_result(err.kind, err.message, None),
    }
}

pub async fn set_properties(client: &OkmClient, args: &Value) -> Value {
    match run_set_properties(client, args).await {
        Ok(result) => result,
        Err(err) => error_result(err.kind, err.message, None),
    }
}

async fn run_add_group(client: &OkmClient, args: &Value) -> Result<Value, ToolError> {
    let node_id = require_str(args, "nodeId")?;
    let grp_name = require_str(args, "grpName")?;

    client
        .put(
            "/services/rest/propertyGroup/addGroup",
            &[("nodeId", node_id), ("grpName", grp_name)],
            None,
            &[],
        )
        .await?;

    Ok(text_result(format!(
        "Successfully added property group \"{grp_name}\" to {node_id}"
    )))
}

async fn run_set_properties(client: &OkmClient, args: &Value) -> Result<Value, ToolError> {
    let node_id = require_str(args, "nodeId")?;
    let grp_name = require_str(args, "grpName")?;
    let properties = args
        .get("properties")
        .and_then(|value| value.as_object())
        .ok_or_else(|| ToolError::validation("properties must be an object"))?;

    let body = build_properties_xml(properties)?;

    client
        .put(
            "/services/rest/propertyGroup/setPropertiesSimple",
            &[("nodeId", node_id), ("grpName", grp_name)],
            Some(body),
            &[],
        )
        .await?;

    Ok(text_result(format!(
        "Successfully set properties for group \"{grp_name}\" on {node_id}"
    )))
}

/// Render the `<simplePropertiesGroup>` payload OpenKM expects, one element
/// per property. Keys become element tag names, so they must satisfy the XML
/// Name grammar; values are escaped rather than embedded raw.
fn build_properties_xml(properties: &Map<String, Value>) -> Result<String, ToolError> {
    let mut elements = Vec::with_capacity(properties.len());

    for (key, value) in properties {
        if !is_xml_name(key) {
            return Err(ToolError::validation(format!(
                "property key is not a valid XML element name: {key:?}"
            )));
        }
        let text = match value {
            Value::String(text) => text.clone(),
            other => other.to_string(),
        };
        elements.push(format!("<{key}>{}</{key}>", escape_xml(&text)));
    }

    Ok(format!(
        "<simplePropertiesGroup>\n{}\n</simplePropertiesGroup>",
        elements.join("\n")
    ))
}

fn is_xml_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_alphabetic() || first == '_' || first == ':' => {}
        _ => return false,
    }
    chars.all(|c| c.is_alphanumeric() || matches!(c, '_' | ':' | '-' | '.'))
}

fn escape_xml(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            other => escaped.push(other),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn props(value: Value) -> Map<String, Value> {
        value.as_object().expect("object").clone()
    }

    #[test]
    fn builds_one_element_per_property() {
        let xml = build_properties_xml(&props(json!({
            "okp:technology.language": "rust",
            "okp:technology.year": 2024,
        })))
        .expect("xml");
        assert!(xml.starts_with("<simplePropertiesGroup>"));
        assert!(xml.ends_with("</simplePropertiesGroup>"));
        assert!(xml.contains("<okp:technology.language>rust</okp:technology.language>"));
        assert!(xml.contains("<okp:technology.year>2024</okp:technology.year>"));
    }

    #[test]
    fn escapes_reserved_characters_in_values() {
        let xml = build_properties_xml(&props(json!({
            "owner": "Tom & Jerry <partners>",
        })))
        .expect("xml");
        assert!(xml.contains("<owner>Tom &amp; Jerry &lt;partners&gt;</owner>"));
    }

    #[test]
    fn rejects_keys_that_are_not_xml_names() {
        assert!(build_properties_xml(&props(json!({"bad key": "v"}))).is_err());
        assert!(build_properties_xml(&props(json!({"<inject>": "v"}))).is_err());
        assert!(build_properties_xml(&props(json!({"1starts-with-digit": "v"}))).is_err());
        assert!(build_properties_xml(&props(json!({"": "v"}))).is_err());
    }
}
