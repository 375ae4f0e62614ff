use std::io::{BufRead, BufReader, Write};
use std::process::{Command, Stdio};

use lopdf::content::{Content, Operation};
use lopdf::{Document, Object, Stream, dictionary};
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn call_tool(base_url: &str, name: &str, args: serde_json::Value) -> serde_json::Value {
    let mut child = Command::new(env!("CARGO_BIN_EXE_mcp-openkm"))
        .args(["serve", "--stdio"])
        .env("OKM_BASE_URL", base_url)
        .env("OKM_USER", "okmAdmin")
        .env("OKM_PASS", "admin")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .expect("spawn server");

    let mut stdin = child.stdin.take().expect("stdin available");
    let mut stdout = BufReader::new(child.stdout.take().expect("stdout available"));

    let request = serde_json::json!({
        "jsonrpc": "2.0",
        "id": 1,
        "method": "tools/call",
        "params": { "name": name, "arguments": args }
    });
    let serialized = serde_json::to_string(&request).expect("serialize request");
    writeln!(stdin, "{serialized}").expect("write request");
    stdin.flush().expect("flush request");

    let mut line = String::new();
    stdout.read_line(&mut line).expect("read response");
    let _ = child.kill();

    serde_json::from_str(line.trim()).expect("parse response")
}

fn sample_pdf(page_texts: &[&str]) -> Vec<u8> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();
    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Courier",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! { "F1" => font_id },
    });

    let mut kids: Vec<Object> = Vec::new();
    for text in page_texts {
        let content = Content {
            operations: vec![
                Operation::new("BT", vec![]),
                Operation::new("Tf", vec!["F1".into(), 24.into()]),
                Operation::new("Td", vec![100.into(), 700.into()]),
                Operation::new("Tj", vec![Object::string_literal(*text)]),
                Operation::new("ET", vec![]),
            ],
        };
        let content_id = doc.add_object(Stream::new(
            dictionary! {},
            content.encode().expect("encode content"),
        ));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
        });
        kids.push(page_id.into());
    }

    let count = kids.len() as i64;
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => count,
            "Resources" => resources_id,
            "MediaBox" => vec![0.into(), 0.into(), 595.into(), 842.into()],
        }),
    );
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let mut bytes = Vec::new();
    doc.save_to(&mut bytes).expect("serialize pdf");
    bytes
}

fn first_block(response: &serde_json::Value) -> &serde_json::Value {
    response
        .get("result")
        .and_then(|value| value.get("content"))
        .and_then(|value| value.as_array())
        .and_then(|arr| arr.first())
        .expect("content block present")
}

#[tokio::test(flavor = "multi_thread")]
async fn text_content_is_returned_verbatim() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/services/rest/document/getContent"))
        .and(query_param("docId", "/okm:root/notes.txt"))
        .and(header("Accept", "application/octet-stream"))
        .respond_with(
            ResponseTemplate::new(200).set_body_raw("plain notes", "text/plain; charset=utf-8"),
        )
        .expect(1)
        .mount(&server)
        .await;

    let response = call_tool(
        &server.uri(),
        "read_file",
        serde_json::json!({"docId": "/okm:root/notes.txt"}),
    );

    let result = response.get("result").expect("result present");
    assert_eq!(result.get("isError").and_then(|value| value.as_bool()), Some(false));
    let block = first_block(&response);
    assert_eq!(block.get("text").and_then(|value| value.as_str()), Some("plain notes"));
}

#[tokio::test(flavor = "multi_thread")]
async fn pdf_content_routes_through_extraction() {
    let server = MockServer::start().await;
    let pdf = sample_pdf(&["first page words", "second page words", "third page words"]);
    Mock::given(method("GET"))
        .and(path("/services/rest/document/getContent"))
        .and(query_param("docId", "doc-uuid"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(pdf, "application/pdf"))
        .mount(&server)
        .await;

    let response = call_tool(
        &server.uri(),
        "read_file",
        serde_json::json!({"docId": "doc-uuid", "page_range": "2,-1"}),
    );

    let result = response.get("result").expect("result present");
    assert_eq!(result.get("isError").and_then(|value| value.as_bool()), Some(false));
    let block = first_block(&response);
    assert_eq!(
        block.get("mimeType").and_then(|value| value.as_str()),
        Some("application/pdf")
    );
    let text = block.get("text").and_then(|value| value.as_str()).expect("text");
    assert!(text.contains("second page words"));
    assert!(text.contains("third page words"));
    assert!(!text.contains("first page words"));
}

#[tokio::test(flavor = "multi_thread")]
async fn empty_page_selection_is_a_diagnostic_not_an_error() {
    let server = MockServer::start().await;
    let pdf = sample_pdf(&["only page"]);
    Mock::given(method("GET"))
        .and(path("/services/rest/document/getContent"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(pdf, "application/pdf"))
        .mount(&server)
        .await;

    let response = call_tool(
        &server.uri(),
        "read_file",
        serde_json::json!({"docId": "doc-uuid", "page_range": "7-9"}),
    );

    let result = response.get("result").expect("result present");
    assert_eq!(result.get("isError").and_then(|value| value.as_bool()), Some(false));
    let text = first_block(&response)
        .get("text")
        .and_then(|value| value.as_str())
        .expect("text");
    assert_eq!(
        text,
        "No valid pages selected (range: \"7-9\", total pages: 1)"
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn corrupt_binary_yields_tool_error_naming_the_document() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/services/rest/document/getContent"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_raw(b"\x00\x01definitely-not-a-pdf".to_vec(), "application/pdf"),
        )
        .mount(&server)
        .await;

    let response = call_tool(
        &server.uri(),
        "read_file",
        serde_json::json!({"docId": "broken-doc"}),
    );

    let result = response.get("result").expect("result present");
    assert_eq!(result.get("isError").and_then(|value| value.as_bool()), Some(true));
    let text = first_block(&response)
        .get("text")
        .and_then(|value| value.as_str())
        .expect("error text");
    assert!(text.contains("broken-doc"));
}

#[test]
fn backslash_references_fail_validation() {
    // Fails closed before any network call.
    let mut child = Command::new(env!("CARGO_BIN_EXE_mcp-openkm"))
        .args(["serve", "--stdio"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .expect("spawn server");

    let mut stdin = child.stdin.take().expect("stdin available");
    let mut stdout = BufReader::new(child.stdout.take().expect("stdout available"));

    let request = serde_json::json!({
        "jsonrpc": "2.0",
        "id": 1,
        "method": "tools/call",
        "params": {
            "name": "read_file",
            "arguments": {"docId": "okm:root\\file.pdf"}
        }
    });
    writeln!(stdin, "{}", serde_json::to_string(&request).expect("serialize")).expect("write");
    stdin.flush().expect("flush");

    let mut line = String::new();
    stdout.read_line(&mut line).expect("read");
    let _ = child.kill();

    let response: serde_json::Value = serde_json::from_str(line.trim()).expect("parse");
    let result = response.get("result").expect("result present");
    assert_eq!(result.get("isError").and_then(|value| value.as_bool()), Some(true));
}
