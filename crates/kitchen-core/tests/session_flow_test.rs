//! Integration test for the login -> authorized request -> logout flow
//!
//! Runs the real reqwest transport against a loopback HTTP server and keeps
//! the session in a file, so headers on the wire and persistence are checked
//! end to end.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use kitchen_core::{
    ApiConfig, AuthController, FileStorage, Gateway, RecipeService, SessionStore,
};
use serde_json::{json, Value};
use tempfile::TempDir;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

/// A request as the server received it
#[derive(Debug, Clone)]
struct Captured {
    request_line: String,
    headers: Vec<(String, String)>,
    body: String,
}

impl Captured {
    fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// Scripted response: status, content type, body
type Scripted = (u16, &'static str, String);

/// Serve one scripted response per connection and record every request
async fn spawn_server(responses: Vec<Scripted>) -> (String, Arc<Mutex<Vec<Captured>>>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let captured = Arc::new(Mutex::new(Vec::new()));
    let sink = captured.clone();

    tokio::spawn(async move {
        for (status, content_type, body) in responses {
            let (mut socket, _) = match listener.accept().await {
                Ok(conn) => conn,
                Err(_) => return,
            };

            let request = read_request(&mut socket).await;
            sink.lock().unwrap().push(request);

            let head = format!(
                "HTTP/1.1 {} Scripted\r\nContent-Type: {}\r\nContent-Length: {}\r\n",
                status,
                content_type,
                body.len()
            );
            let response = format!("{}Connection: close\r\n\r\n{}", head, body);
            let _ = socket.write_all(response.as_bytes()).await;
            let _ = socket.shutdown().await;
        }
    });

    (format!("http://{}/api", addr), captured)
}

async fn read_request(socket: &mut tokio::net::TcpStream) -> Captured {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 1024];

    let header_end = loop {
        let n = socket.read(&mut chunk).await.unwrap();
        assert!(n > 0, "client closed before sending headers");
        buf.extend_from_slice(&chunk[..n]);
        if let Some(pos) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
            break pos + 4;
        }
    };

    let head = String::from_utf8_lossy(&buf[..header_end]).to_string();
    let mut lines = head.split("\r\n").filter(|l| !l.is_empty());
    let request_line = lines.next().unwrap_or_default().to_string();
    let headers: Vec<(String, String)> = lines
        .filter_map(|l| l.split_once(':'))
        .map(|(k, v)| (k.trim().to_string(), v.trim().to_string()))
        .collect();

    let content_length = headers
        .iter()
        .find(|(k, _)| k.eq_ignore_ascii_case("content-length"))
        .and_then(|(_, v)| v.parse::<usize>().ok())
        .unwrap_or(0);

    while buf.len() < header_end + content_length {
        let n = socket.read(&mut chunk).await.unwrap();
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);
    }

    Captured {
        request_line,
        headers,
        body: String::from_utf8_lossy(&buf[header_end..]).to_string(),
    }
}

fn file_session(dir: &TempDir) -> SessionStore {
    let storage = FileStorage::open(dir.path().join("session.json")).unwrap();
    SessionStore::new(Arc::new(storage))
}

fn json_ok(body: Value) -> Scripted {
    (200, "application/json", body.to_string())
}

#[tokio::test]
async fn test_login_request_logout_roundtrip() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let (base_url, captured) = spawn_server(vec![
        json_ok(json!({"token": "abc", "user": {"username": "bob"}})),
        json_ok(json!([{"id": 1, "title": "Pancakes"}])),
    ])
    .await;

    let config = ApiConfig::default().with_base_url(base_url);
    let gateway = Gateway::new(config, file_session(&temp_dir)).unwrap();
    let auth = AuthController::new(gateway.clone());

    auth.login("bob", "hunter2").await.unwrap();
    assert!(auth.is_authenticated());

    // A fresh store over the same file sees the committed session
    let reopened = file_session(&temp_dir);
    assert_eq!(reopened.get_token().as_deref(), Some("abc"));
    assert_eq!(reopened.get_user().unwrap().username(), Some("bob"));

    let recipes = RecipeService::new(gateway).all().await.unwrap();
    assert_eq!(recipes[0]["title"], "Pancakes");

    let requests = captured.lock().unwrap().clone();
    assert_eq!(requests.len(), 2);

    let login = &requests[0];
    assert!(login.request_line.starts_with("POST /api/auth/login"));
    assert_eq!(login.header("content-type"), Some("application/json"));
    assert!(login.header("authorization").is_none());
    let body: Value = serde_json::from_str(&login.body).unwrap();
    assert_eq!(body, json!({"username": "bob", "password": "hunter2"}));

    let list = &requests[1];
    assert!(list.request_line.starts_with("GET /api/recipes "));
    assert_eq!(list.header("authorization"), Some("Bearer abc"));
    assert_eq!(list.header("content-type"), Some("application/json"));

    auth.logout();
    assert!(!auth.is_authenticated());
    let reopened = file_session(&temp_dir);
    assert!(reopened.get_token().is_none());
    assert!(reopened.get_user().is_none());
}

#[tokio::test]
async fn test_search_query_is_encoded_on_the_wire() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let (base_url, captured) = spawn_server(vec![json_ok(json!([]))]).await;

    let gateway = Gateway::new(
        ApiConfig::default().with_base_url(base_url),
        file_session(&temp_dir),
    )
    .unwrap();

    let result = RecipeService::new(gateway).search("mac & cheese").await.unwrap();
    assert_eq!(result, json!([]));

    let requests = captured.lock().unwrap().clone();
    assert!(
        requests[0]
            .request_line
            .starts_with("GET /api/recipes/search?q=mac+%26+cheese "),
        "request line was {}",
        requests[0].request_line
    );
}

#[tokio::test]
async fn test_error_status_without_json_uses_status_message() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let (base_url, _captured) =
        spawn_server(vec![(404, "text/html", "<h1>Not Found</h1>".to_string())]).await;

    let gateway = Gateway::new(
        ApiConfig::default().with_base_url(base_url),
        file_session(&temp_dir),
    )
    .unwrap();

    let err = RecipeService::new(gateway).by_id("42").await.unwrap_err();
    assert_eq!(err.status(), Some(404));
    assert_eq!(err.to_string(), "HTTP error! status: 404");
}

#[tokio::test]
async fn test_failed_login_over_the_wire_keeps_anonymous() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let (base_url, _captured) = spawn_server(vec![(
        401,
        "application/json",
        json!({"message": "Invalid credentials"}).to_string(),
    )])
    .await;

    let gateway = Gateway::new(
        ApiConfig::default().with_base_url(base_url),
        file_session(&temp_dir),
    )
    .unwrap();
    let auth = AuthController::new(gateway);

    let err = auth.login("bob", "wrong").await.unwrap_err();
    assert_eq!(err.to_string(), "Invalid credentials");
    assert!(!file_session(&temp_dir).is_authenticated());
}

#[tokio::test]
async fn test_timeout_surfaces_as_transport_error() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    // Accept and hold the connection without answering
    tokio::spawn(async move {
        if let Ok((socket, _)) = listener.accept().await {
            tokio::time::sleep(Duration::from_secs(5)).await;
            drop(socket);
        }
    });

    let config = ApiConfig::default()
        .with_base_url(format!("http://{}/api", addr))
        .with_timeout(Duration::from_millis(200));
    let gateway = Gateway::new(config, file_session(&temp_dir)).unwrap();

    let err = RecipeService::new(gateway).all().await.unwrap_err();
    assert!(err.is_transport_error(), "expected transport error, got {:?}", err);
}
