//! Minimal HTTP/1.1 server for integration tests.
//!
//! Serves a fixed table of paths. Unknown paths get 404. Every response closes
//! the connection.

#![allow(dead_code)]

use std::collections::HashMap;
use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Page {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
    /// Sleep before answering (simulates a slow site).
    pub delay: Option<Duration>,
}

impl Page {
    pub fn html(status: u16, body: &str) -> Self {
        Self {
            status,
            headers: vec![(
                "Content-Type".to_string(),
                "text/html; charset=utf-8".to_string(),
            )],
            body: body.to_string(),
            delay: None,
        }
    }

    pub fn redirect(location: &str) -> Self {
        Self {
            status: 301,
            headers: vec![("Location".to_string(), location.to_string())],
            body: String::new(),
            delay: None,
        }
    }

    pub fn delayed(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }
}

/// Starts a server in a background thread. Returns the base URL without a
/// trailing slash (e.g. "http://127.0.0.1:12345"). Runs until the process exits.
pub fn start(routes: Vec<(&str, Page)>) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    serve(listener, routes)
}

/// Like `start` but on a fixed port. Returns None if the port cannot be bound
/// (privileged port without permission, or already in use).
pub fn try_start_on(port: u16, routes: Vec<(&str, Page)>) -> Option<String> {
    let listener = TcpListener::bind(("127.0.0.1", port)).ok()?;
    Some(serve(listener, routes))
}

fn serve(listener: TcpListener, routes: Vec<(&str, Page)>) -> String {
    let port = listener.local_addr().unwrap().port();
    let routes: Arc<HashMap<String, Page>> = Arc::new(
        routes
            .into_iter()
            .map(|(path, page)| (path.to_string(), page))
            .collect(),
    );
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            let routes = Arc::clone(&routes);
            thread::spawn(move || handle(stream, &routes));
        }
    });
    format!("http://127.0.0.1:{}", port)
}

/// Serves `page` at `/`.
pub fn start_single(page: Page) -> String {
    start(vec![("/", page)])
}

fn handle(mut stream: TcpStream, routes: &HashMap<String, Page>) {
    let _ = stream.set_read_timeout(Some(Duration::from_secs(2)));
    let _ = stream.set_write_timeout(Some(Duration::from_secs(2)));

    let mut buf = Vec::new();
    let mut chunk = [0u8; 4096];
    while !buf.windows(4).any(|w| w == b"\r\n\r\n") {
        match stream.read(&mut chunk) {
            Ok(0) | Err(_) => return,
            Ok(n) => buf.extend_from_slice(&chunk[..n]),
        }
    }
    let request = String::from_utf8_lossy(&buf);
    let path = request
        .lines()
        .next()
        .and_then(|line| line.split_whitespace().nth(1))
        .unwrap_or("/")
        .to_string();

    let page = routes
        .get(&path)
        .cloned()
        .unwrap_or_else(|| Page::html(404, "<html><head><title>Not Found</title></head></html>"));

    if let Some(d) = page.delay {
        thread::sleep(d);
    }

    let mut response = format!("HTTP/1.1 {} {}\r\n", page.status, reason(page.status));
    for (k, v) in &page.headers {
        response.push_str(&format!("{k}: {v}\r\n"));
    }
    response.push_str(&format!(
        "Content-Length: {}\r\nConnection: close\r\n\r\n",
        page.body.len()
    ));
    response.push_str(&page.body);
    let _ = stream.write_all(response.as_bytes());
    let _ = stream.flush();
}

fn reason(status: u16) -> &'static str {
    match status {
        200 => "OK",
        301 => "Moved Permanently",
        404 => "Not Found",
        500 => "Internal Server Error",
        503 => "Service Unavailable",
        _ => "Status",
    }
}
