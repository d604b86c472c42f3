//! One-shot HTTP server for client tests
//!
//! Accepts a single connection, records the raw request and answers with a
//! canned response.

use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::sync::oneshot;

/// Builds a complete HTTP/1.1 response with a JSON body
pub fn http_response(status_line: &str, body: &str) -> String {
    format!(
        "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        status_line,
        body.len(),
        body
    )
}

/// Serves `response` once; returns the base URL and the captured request
pub async fn serve_once(response: String) -> (String, oneshot::Receiver<String>) {
    serve(Some(response)).await
}

/// Accepts one connection and never answers
pub async fn serve_silent() -> String {
    serve(None).await.0
}

async fn serve(response: Option<String>) -> (String, oneshot::Receiver<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let (tx, rx) = oneshot::channel();

    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let request = read_request(&mut socket).await;
        let _ = tx.send(request);

        match response {
            Some(response) => {
                socket.write_all(response.as_bytes()).await.unwrap();
                let _ = socket.shutdown().await;
            }
            None => tokio::time::sleep(Duration::from_secs(10)).await,
        }
    });

    (format!("http://{}", addr), rx)
}

/// Reads headers and, if announced, the full body
async fn read_request(socket: &mut tokio::net::TcpStream) -> String {
    let mut raw = Vec::new();
    let mut buf = [0u8; 4096];

    loop {
        let n = socket.read(&mut buf).await.unwrap();
        if n == 0 {
            break;
        }
        raw.extend_from_slice(&buf[..n]);

        let Some(header_end) = raw.windows(4).position(|w| w == b"\r\n\r\n") else {
            continue;
        };
        let head = String::from_utf8_lossy(&raw[..header_end]).to_lowercase();
        let content_length = head
            .lines()
            .find_map(|line| line.strip_prefix("content-length:"))
            .and_then(|v| v.trim().parse::<usize>().ok())
            .unwrap_or(0);

        if raw.len() >= header_end + 4 + content_length {
            break;
        }
    }

    String::from_utf8_lossy(&raw).to_string()
}
