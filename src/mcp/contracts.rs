use serde_json::json;

pub const TOOL_LIST_DIRECTORY: &str = "list_directory";
pub const TOOL_READ_FILE: &str = "read_file";
pub const TOOL_SEARCH_DOCUMENTS: &str = "search_documents";
pub const TOOL_GET_METADATA: &str = "get_metadata";
pub const TOOL_ADD_KEYWORD: &str = "add_keyword";
pub const TOOL_REMOVE_KEYWORD: &str = "remove_keyword";
pub const TOOL_ADD_CATEGORY: &str = "add_category";
pub const TOOL_ADD_PROPERTY_GROUP: &str = "add_property_group";
pub const TOOL_SET_PROPERTY_GROUP: &str = "set_property_group";

pub const DEFAULT_PAGE_RANGE: &str = "1-10";
pub const DEFAULT_SEARCH_LIMIT: u64 = 10;
pub const MAX_SEARCH_LIMIT: u64 = 100;

pub fn list_directory_schema() -> serde_json::Value {
    json!({
        "type": "object",
        "properties": {
            "path": {
                "type": "string",
                "description": "Repository folder path, e.g. /okm:root"
            }
        },
        "required": ["path"],
        "additionalProperties": false
    })
}

pub fn read_file_schema() -> serde_json::Value {
    json!({
        "type": "object",
        "properties": {
            "docId": {
                "type": "string",
                "description": "Document UUID or path; only forward slashes are allowed"
            },
            "page_range": {
                "type": "string",
                "default": DEFAULT_PAGE_RANGE,
                "description": "OpenKM page syntax e.g. 1,3-5,-1 (page range to extract from PDF)"
            }
        },
        "required": ["docId"],
        "additionalProperties": false
    })
}

pub fn search_documents_schema() -> serde_json::Value {
    json!({
        "type": "object",
        "properties": {
            "query": { "type": "string" },
            "limit": {
                "type": "integer",
                "minimum": 1,
                "maximum": MAX_SEARCH_LIMIT,
                "default": DEFAULT_SEARCH_LIMIT
            }
        },
        "required": ["query"],
        "additionalProperties": false
    })
}

pub fn get_metadata_schema() -> serde_json::Value {
    json!({
        "type": "object",
        "properties": {
            "nodeId": {
                "type": "string",
                "description": "Document UUID or path to get metadata for"
            }
        },
        "required": ["nodeId"],
        "additionalProperties": false
    })
}

pub fn add_keyword_schema() -> serde_json::Value {
    json!({
        "type": "object",
        "properties": {
            "nodeId": { "type": "string", "description": "Document UUID or path" },
            "keyword": { "type": "string", "description": "Keyword to add" }
        },
        "required": ["nodeId", "keyword"],
        "additionalProperties": false
    })
}

pub fn remove_keyword_schema() -> serde_json::Value {
    json!({
        "type": "object",
        "properties": {
            "nodeId": { "type": "string", "description": "Document UUID or path" },
            "keyword": { "type": "string", "description": "Keyword to remove" }
        },
        "required": ["nodeId", "keyword"],
        "additionalProperties": false
    })
}

pub fn add_category_schema() -> serde_json::Value {
    json!({
        "type": "object",
        "properties": {
            "nodeId": { "type": "string", "description": "Document UUID or path" },
            "catId": {
                "type": "string",
                "description": "Category UUID or path (e.g., /okm:categories/contracts)"
            }
        },
        "required": ["nodeId", "catId"],
        "additionalProperties": false
    })
}

pub fn add_property_group_schema() -> serde_json::Value {
    json!({
        "type": "object",
        "properties": {
            "nodeId": { "type": "string", "description": "Document UUID or path" },
            "grpName": {
                "type": "string",
                "description": "Property group name (e.g., okg:technology)"
            }
        },
        "required": ["nodeId", "grpName"],
        "additionalProperties": false
    })
}

pub fn set_property_group_schema() -> serde_json::Value {
    json!({
        "type": "object",
        "properties": {
            "nodeId": { "type": "string", "description": "Document UUID or path" },
            "grpName": { "type": "string", "description": "Property group name" },
            "properties": {
                "type": "object",
                "description": "Properties as key-value pairs"
            }
        },
        "required": ["nodeId", "grpName", "properties"],
        "additionalProperties": false
    })
}
