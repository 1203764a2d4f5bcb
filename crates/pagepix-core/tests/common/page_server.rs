//! Minimal HTTP/1.1 server for integration tests: serves a fixed route table.
//!
//! Routes are keyed by the raw request target (path plus any query), so a
//! client that fails to strip query strings misses the route and gets 404.
//! Binding and serving are split so a test can learn the base URL before
//! building page bodies that reference it. The server runs until the process
//! exits.

use std::collections::HashMap;
use std::io::{Read, Write};
use std::net::TcpListener;
use std::sync::Arc;
use std::thread;

/// One served resource: optional Content-Type plus body bytes.
#[derive(Debug, Clone)]
pub struct Route {
    pub content_type: Option<String>,
    pub body: Vec<u8>,
}

impl Route {
    pub fn new(content_type: Option<&str>, body: Vec<u8>) -> Self {
        Self {
            content_type: content_type.map(str::to_string),
            body,
        }
    }
}

/// A bound but not yet serving test server.
pub struct PageServer {
    listener: TcpListener,
    base: String,
}

impl PageServer {
    /// Binds an ephemeral localhost port.
    pub fn bind() -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
        let port = listener.local_addr().unwrap().port();
        Self {
            listener,
            base: format!("http://127.0.0.1:{}/", port),
        }
    }

    /// Base URL including the trailing slash (e.g. "http://127.0.0.1:12345/").
    pub fn base_url(&self) -> &str {
        &self.base
    }

    /// Starts serving `routes` in a background thread. Unknown targets get 404.
    pub fn serve(self, routes: HashMap<String, Route>) {
        let routes = Arc::new(routes);
        thread::spawn(move || {
            for stream in self.listener.incoming().flatten() {
                let routes = Arc::clone(&routes);
                thread::spawn(move || handle(stream, &routes));
            }
        });
    }
}

/// Bind-and-serve convenience: returns the base URL.
pub fn start(routes: HashMap<String, Route>) -> String {
    let server = PageServer::bind();
    let base = server.base_url().to_string();
    server.serve(routes);
    base
}

fn handle(mut stream: std::net::TcpStream, routes: &HashMap<String, Route>) {
    let _ = stream.set_read_timeout(Some(std::time::Duration::from_secs(2)));
    let _ = stream.set_write_timeout(Some(std::time::Duration::from_secs(2)));
    let mut buf = [0u8; 8192];
    let n = match stream.read(&mut buf) {
        Ok(0) => return,
        Ok(n) => n,
        Err(_) => return,
    };
    let request = match std::str::from_utf8(&buf[..n]) {
        Ok(s) => s,
        Err(_) => return,
    };
    let target = match parse_request_target(request) {
        Some(t) => t,
        None => return,
    };

    match routes.get(&target) {
        Some(route) => {
            let content_type = route
                .content_type
                .as_deref()
                .map(|ct| format!("Content-Type: {}\r\n", ct))
                .unwrap_or_default();
            let header = format!(
                "HTTP/1.1 200 OK\r\nContent-Length: {}\r\n{}Connection: close\r\n\r\n",
                route.body.len(),
                content_type
            );
            let _ = stream.write_all(header.as_bytes());
            let _ = stream.write_all(&route.body);
        }
        None => {
            let _ = stream.write_all(
                b"HTTP/1.1 404 Not Found\r\nContent-Length: 0\r\nConnection: close\r\n\r\n",
            );
        }
    }
}

/// Extracts the raw request target from the request line ("GET /a/b?q=1 HTTP/1.1").
fn parse_request_target(request: &str) -> Option<String> {
    let line = request.lines().next()?;
    let mut parts = line.split_whitespace();
    let _method = parts.next()?;
    parts.next().map(str::to_string)
}
