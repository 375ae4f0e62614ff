use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde_json::{Value, json};
use std::io::{self, Write};
use std::process;
use tokio::io::AsyncBufReadExt;
use tracing_subscriber::EnvFilter;

mod config;
mod mcp;
mod okm;
mod pages;
mod pdf;
mod tools;

use config::Config;
use okm::OkmClient;

#[derive(Parser)]
#[command(name = "mcp-openkm")]
#[command(
    version,
    about = "MCP stdio server exposing an OpenKM repository as tools"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start MCP stdio server
    Serve {
        /// Serve MCP over stdio (NDJSON)
        #[arg(long)]
        stdio: bool,
    },
    /// List children of a repository folder
    ListDirectory {
        /// Repository folder path, e.g. /okm:root
        #[arg(long)]
        path: String,
    },
    /// Print a document's contents
    ReadFile {
        /// Document UUID or path
        #[arg(long)]
        doc_id: String,
        /// Page range to extract from PDFs, e.g. 1,3-5,-1
        #[arg(long)]
        page_range: Option<String>,
    },
    /// Full-text search across the repository
    SearchDocuments {
        #[arg(long)]
        query: String,
        /// Maximum hits to return (1-100)
        #[arg(long)]
        limit: Option<u64>,
    },
    /// Fetch metadata for a document or folder
    GetMetadata {
        /// Document UUID or path
        #[arg(long)]
        node_id: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let config = Config::from_env();
    let client = OkmClient::new(&config).context("invalid OKM_BASE_URL")?;

    match cli.command {
        Commands::Serve { stdio } => {
            if stdio {
                run_stdio_server(&client).await
            } else {
                anyhow::bail!("only --stdio transport is supported")
            }
        }
        Commands::ListDirectory { path } => {
            let result = tools::list_directory::call(&client, &json!({"path": path})).await;
            print_tool_result(result)
        }
        Commands::ReadFile { doc_id, page_range } => {
            let mut args = json!({"docId": doc_id});
            if let Some(page_range) = page_range
                && let Some(obj) = args.as_object_mut()
            {
                obj.insert("page_range".to_string(), json!(page_range));
            }
            let result = tools::read_file::call(&client, &args).await;
            print_tool_result(result)
        }
        Commands::SearchDocuments { query, limit } => {
            let mut args = json!({"query": query});
            if let Some(limit) = limit
                && let Some(obj) = args.as_object_mut()
            {
                obj.insert("limit".to_string(), json!(limit));
            }
            let result = tools::search_documents::call(&client, &args).await;
            print_tool_result(result)
        }
        Commands::GetMetadata { node_id } => {
            let result = tools::get_metadata::call(&client, &json!({"nodeId": node_id})).await;
            print_tool_result(result)
        }
    }
}

fn print_tool_result(result: Value) -> Result<()> {
    let is_error = result
        .get("isError")
        .and_then(|value| value.as_bool())
        .unwrap_or(false);

    if is_error {
        let message = result
            .get("content")
            .and_then(|value| value.as_array())
            .and_then(|arr| arr.first())
            .and_then(|value| value.get("text"))
            .and_then(|value| value.as_str())
            .unwrap_or("tool error");
        eprintln!("{message}");
        process::exit(1);
    }

    let Some(block) = result
        .get("content")
        .and_then(|value| value.as_array())
        .and_then(|arr| arr.first())
    else {
        return Ok(());
    };

    if let Some(structured) = block.get("json") {
        let output = serde_json::to_string_pretty(structured)?;
        println!("{output}");
    } else if let Some(text) = block.get("text").and_then(|value| value.as_str()) {
        println!("{text}");
    }
    Ok(())
}

async fn run_stdio_server(client: &OkmClient) -> Result<()> {
    let stdin = tokio::io::BufReader::new(tokio::io::stdin());
    let mut lines = stdin.lines();
    let stdout = io::stdout();
    let mut writer = io::BufWriter::new(stdout.lock());

    tracing::info!("OpenKM MCP ready (stdio transport)");

    while let Some(line) = lines.next_line().await.context("failed to read stdin")? {
        if line.trim().is_empty() {
            continue;
        }

        let request: serde_json::Value = match serde_json::from_str(&line) {
            Ok(value) => value,
            Err(_) => continue,
        };

        let method = request.get("method").and_then(|value| value.as_str());
        let id = request.get("id").cloned();
        let response = match (method, id) {
            (Some("initialize"), Some(id)) => Some(json!({
                "jsonrpc": "2.0",
                "id": id,
                "result": {
                    "protocolVersion": "2025-11-25",
                    "capabilities": {
                        "tools": {}
                    },
                    "serverInfo": {
                        "name": env!("CARGO_PKG_NAME"),
                        "version": env!("CARGO_PKG_VERSION")
                    }
                }
            })),
            (Some("tools/list"), Some(id)) => Some(json!({
                "jsonrpc": "2.0",
                "id": id,
                "result": {
                    "tools": mcp::tool_definitions()
                }
            })),
            (Some("tools/call"), Some(id)) => Some(handle_tool_call(client, &request, id).await),
            _ => None,
        };

        if let Some(response) = response {
            let serialized =
                serde_json::to_string(&response).context("failed to serialize response")?;
            writeln!(writer, "{serialized}").context("failed to write response")?;
            writer.flush().context("failed to flush response")?;
        }
    }

    Ok(())
}

async fn handle_tool_call(client: &OkmClient, request: &serde_json::Value, id: Value) -> Value {
    let Some(params) = request.get("params").and_then(|value| value.as_object()) else {
        return rpc_error(id, -32602, "params must be an object");
    };

    let Some(name) = params.get("name").and_then(|value| value.as_str()) else {
        return rpc_error(id, -32602, "params.name must be a string");
    };

    let args = params
        .get("arguments")
        .cloned()
        .unwrap_or_else(|| json!({}));

    let result = match name {
        mcp::contracts::TOOL_LIST_DIRECTORY => tools::list_directory::call(client, &args).await,
        mcp::contracts::TOOL_READ_FILE => tools::read_file::call(client, &args).await,
        mcp::contracts::TOOL_SEARCH_DOCUMENTS => tools::search_documents::call(client, &args).await,
        mcp::contracts::TOOL_GET_METADATA => tools::get_metadata::call(client, &args).await,
        mcp::contracts::TOOL_ADD_KEYWORD => tools::keywords::add(client, &args).await,
        mcp::contracts::TOOL_REMOVE_KEYWORD => tools::keywords::remove(client, &args).await,
        mcp::contracts::TOOL_ADD_CATEGORY => tools::categories::add(client, &args).await,
        mcp::contracts::TOOL_ADD_PROPERTY_GROUP => {
            tools::property_groups::add_group(client, &args).await
        }
        mcp::contracts::TOOL_SET_PROPERTY_GROUP => {
            tools::property_groups::set_properties(client, &args).await
        }
        // A name outside the registry is a protocol fault, not a tool result.
        _ => {
            tracing::error!(tool = name, "unknown tool");
            return rpc_error(id, -32601, format!("Unknown tool: {name}"));
        }
    };

    if result
        .get("isError")
        .and_then(|value| value.as_bool())
        .unwrap_or(false)
    {
        let message = result
            .get("content")
            .and_then(|value| value.as_array())
            .and_then(|arr| arr.first())
            .and_then(|value| value.get("text"))
            .and_then(|value| value.as_str())
            .unwrap_or("tool error");
        tracing::error!(tool = name, "{message}");
    }

    json!({
        "jsonrpc": "2.0",
        "id": id,
        "result": result
    })
}

fn rpc_error(id: Value, code: i64, message: impl Into<String>) -> Value {
    json!({
        "jsonrpc": "2.0",
        "id": id,
        "error": {
            "code": code,
            "message": message.into()
        }
    })
}
