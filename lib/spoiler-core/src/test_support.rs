//! One-shot HTTP responder used by unit tests.
#![allow(clippy::expect_used)]

use std::net::{Ipv4Addr, SocketAddr};

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::task::JoinHandle;

pub(crate) struct Responder {
    local_addr: SocketAddr,
    handle: JoinHandle<String>,
}

impl Responder {
    pub(crate) fn base_url(&self) -> String {
        format!("http://{}", self.local_addr)
    }

    /// The raw request received by the responder.
    pub(crate) async fn request(self) -> String {
        self.handle.await.expect("responder task")
    }
}

/// Accepts a single connection, records the request and answers with a JSON body.
pub(crate) async fn spawn_responder(status: &'static str, body: &'static str) -> Responder {
    let listener = TcpListener::bind(SocketAddr::from((Ipv4Addr::LOCALHOST, 0)))
        .await
        .expect("bind responder");
    let local_addr = listener.local_addr().expect("local address");

    let handle = tokio::spawn(async move {
        let (mut stream, _) = listener.accept().await.expect("accept connection");
        let request = read_request(&mut stream).await;

        let response = format!(
            "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        stream
            .write_all(response.as_bytes())
            .await
            .expect("write response");
        stream.shutdown().await.ok();

        request
    });

    Responder { local_addr, handle }
}

async fn read_request(stream: &mut TcpStream) -> String {
    let mut buffer = Vec::new();
    let mut chunk = [0_u8; 1024];
    loop {
        let read = stream.read(&mut chunk).await.expect("read request");
        if read == 0 {
            break;
        }
        buffer.extend_from_slice(chunk.get(..read).unwrap_or_default());

        let text = String::from_utf8_lossy(&buffer);
        if let Some(end) = text.find("\r\n\r\n") {
            let head = text.get(..end).unwrap_or_default();
            let length = content_length(head);
            if buffer.len() >= end + 4 + length {
                break;
            }
        }
    }
    String::from_utf8_lossy(&buffer).into_owned()
}

fn content_length(head: &str) -> usize {
    head.lines()
        .filter_map(|line| line.split_once(':'))
        .find(|(name, _)| name.trim().eq_ignore_ascii_case("content-length"))
        .and_then(|(_, value)| value.trim().parse().ok())
        .unwrap_or(0)
}
