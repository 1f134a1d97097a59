//! 共享测试工具：本地 HTTP 桩服务

#![allow(dead_code)]

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

pub const TEST_TOKEN: &str = "test-pdd-token";

/// A one-shot HTTP server bound to localhost.
///
/// Serves exactly one canned response and hands back the raw request it saw.
pub struct StubServer {
    /// API root to pass to `YandexPddProvider::with_base_url`
    pub base_url: String,
    request: JoinHandle<String>,
}

impl StubServer {
    /// Answer the first request with `status` (e.g. `"200 OK"`) and a JSON `body`.
    pub async fn respond(status: &'static str, body: impl Into<String>) -> Self {
        let body = body.into();
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let request = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let raw = read_request_head(&mut socket).await;

            let response = format!(
                "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.unwrap();
            raw
        });

        Self {
            base_url: format!("http://{addr}/api2/admin"),
            request,
        }
    }

    /// Accept the connection, read the request and never answer.
    pub async fn hang() -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let request = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let raw = read_request_head(&mut socket).await;
            // Returns once the client gives up and closes the connection
            let mut rest = Vec::new();
            let _ = socket.read_to_end(&mut rest).await;
            raw
        });

        Self {
            base_url: format!("http://{addr}/api2/admin"),
            request,
        }
    }

    /// The raw request head (request line + headers) received by the stub.
    pub async fn received_request(self) -> String {
        self.request.await.unwrap()
    }
}

/// An API root where nothing is listening.
pub async fn closed_port_base_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}/api2/admin")
}

async fn read_request_head(socket: &mut tokio::net::TcpStream) -> String {
    let mut buf = Vec::new();
    let mut chunk = [0_u8; 1024];
    while !buf.windows(4).any(|w| w == b"\r\n\r\n") {
        let n = socket.read(&mut chunk).await.unwrap();
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);
    }
    String::from_utf8_lossy(&buf).into_owned()
}
