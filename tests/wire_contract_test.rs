//! Wire Contract Integration Tests
//! Run with: cargo test --test wire_contract_test

use std::sync::Once;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::sync::oneshot;

static INIT: Once = Once::new();

fn ensure_init() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt::init();
    });
}

// Reads one HTTP request, headers plus declared body
async fn read_request(socket: &mut TcpStream) -> String {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 1024];
    loop {
        let n = socket.read(&mut chunk).await.unwrap_or(0);
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);
        let text = String::from_utf8_lossy(&buf);
        if let Some(header_end) = text.find("\r\n\r\n") {
            let content_length = text
                .lines()
                .find_map(|line| {
                    line.to_ascii_lowercase()
                        .strip_prefix("content-length:")
                        .and_then(|v| v.trim().parse::<usize>().ok())
                })
                .unwrap_or(0);
            if buf.len() >= header_end + 4 + content_length {
                break;
            }
        }
    }
    String::from_utf8_lossy(&buf).to_string()
}

/// Backend stub answering one request with a canned response
async fn spawn_backend(
    status_line: &'static str,
    body: &'static str,
) -> (String, oneshot::Receiver<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("Should bind");
    let addr = listener.local_addr().expect("Should have a local address");
    let (tx, rx) = oneshot::channel();

    tokio::spawn(async move {
        if let Ok((mut socket, _)) = listener.accept().await {
            let request = read_request(&mut socket).await;
            let _ = tx.send(request);
            let response = format!(
                "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status_line,
                body.len(),
                body
            );
            let _ = socket.write_all(response.as_bytes()).await;
        }
    });

    (format!("http://{}/", addr), rx)
}

/// Test the happy path: a query posted as JSON comes back with an answer
#[tokio::test]
async fn test_query_post_returns_answer() {
    ensure_init();

    let (endpoint, _) = spawn_backend("200 OK", r#"{"answer": "It depends."}"#).await;

    let client = reqwest::Client::new();
    let request = serde_json::json!({
        "query": "Is a verbal agreement binding?"
    });

    let response = client
        .post(&endpoint)
        .header("Content-Type", "application/json")
        .json(&request)
        .send()
        .await
        .expect("Should reach the backend");

    assert!(response.status().is_success(), "Backend should answer 2xx");

    let body: serde_json::Value = response.json().await.expect("Should parse JSON");
    assert_eq!(body["answer"].as_str(), Some("It depends."));
}

/// Test that the request on the wire is a JSON POST with a query field
#[tokio::test]
async fn test_request_reaches_backend_as_json() {
    ensure_init();

    let (endpoint, seen) = spawn_backend("200 OK", r#"{"answer": "ok"}"#).await;

    let client = reqwest::Client::new();
    let request = serde_json::json!({
        "query": "what is consideration?"
    });

    client
        .post(&endpoint)
        .header("Content-Type", "application/json")
        .json(&request)
        .send()
        .await
        .expect("Should reach the backend");

    let seen = seen.await.expect("Backend should see the request");
    assert!(seen.starts_with("POST / HTTP/1.1"), "Request line: {}", seen);
    assert!(
        seen.to_ascii_lowercase().contains("content-type: application/json"),
        "Request should declare a JSON body"
    );
    assert!(
        seen.contains(r#""query":"what is consideration?""#),
        "Body should carry the query: {}",
        seen
    );
}

/// Test that a body without the answer field still parses cleanly;
/// the client treats the missing field as a soft fallback, not an error
#[tokio::test]
async fn test_missing_answer_field_tolerated() {
    ensure_init();

    let (endpoint, _) = spawn_backend("200 OK", "{}").await;

    let client = reqwest::Client::new();
    let request = serde_json::json!({ "query": "anyone home?" });

    let response = client
        .post(&endpoint)
        .header("Content-Type", "application/json")
        .json(&request)
        .send()
        .await
        .expect("Should reach the backend");

    assert!(response.status().is_success());

    let body: serde_json::Value = response.json().await.expect("Should parse JSON");
    assert!(body["answer"].is_null(), "No answer field expected");
}

/// Test that backend failures surface as plain non-2xx statuses
#[tokio::test]
async fn test_error_status_passthrough() {
    ensure_init();

    let (endpoint, _) = spawn_backend("500 Internal Server Error", "boom").await;

    let client = reqwest::Client::new();
    let request = serde_json::json!({ "query": "hello" });

    let response = client
        .post(&endpoint)
        .header("Content-Type", "application/json")
        .json(&request)
        .send()
        .await
        .expect("Should reach the backend");

    assert_eq!(response.status().as_u16(), 500);
}
