use serde_json::json;

pub mod contracts;
pub mod errors;

pub fn tool_definitions() -> Vec<serde_json::Value> {
    vec![
        json!({
            "name": contracts::TOOL_LIST_DIRECTORY,
            "description": "List immediate children (files & folders) under an OpenKM repository path. Each item includes `name`, full `path`, and `isFolder`.",
            "inputSchema": contracts::list_directory_schema()
        }),
        json!({
            "name": contracts::TOOL_READ_FILE,
            "description": "Return the document contents of `docId`. If it's a PDF, this server extracts and returns its UTF-8 text content for the selected page range. If it's other text, returns that text.",
            "inputSchema": contracts::read_file_schema()
        }),
        json!({
            "name": contracts::TOOL_SEARCH_DOCUMENTS,
            "description": "Full-text search across OpenKM. Returns up to `limit` hits with `path`, `docId`, and a short `excerpt` highlighting the match.",
            "inputSchema": contracts::search_documents_schema()
        }),
        json!({
            "name": contracts::TOOL_GET_METADATA,
            "description": "Retrieve metadata (size, author, created, modified, keywords, categories, etc.) for a document using its UUID or path.",
            "inputSchema": contracts::get_metadata_schema()
        }),
        json!({
            "name": contracts::TOOL_ADD_KEYWORD,
            "description": "Add a keyword to a document. Keywords help categorize and search for documents.",
            "inputSchema": contracts::add_keyword_schema()
        }),
        json!({
            "name": contracts::TOOL_REMOVE_KEYWORD,
            "description": "Remove a keyword from a document.",
            "inputSchema": contracts::remove_keyword_schema()
        }),
        json!({
            "name": contracts::TOOL_ADD_CATEGORY,
            "description": "Add a category to a document. Categories provide hierarchical organization.",
            "inputSchema": contracts::add_category_schema()
        }),
        json!({
            "name": contracts::TOOL_ADD_PROPERTY_GROUP,
            "description": "Add a property group to a document. Property groups contain custom metadata fields.",
            "inputSchema": contracts::add_property_group_schema()
        }),
        json!({
            "name": contracts::TOOL_SET_PROPERTY_GROUP,
            "description": "Set values for properties in an existing property group on a document.",
            "inputSchema": contracts::set_property_group_schema()
        }),
    ]
}
