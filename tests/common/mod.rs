//! Shared utilities for integration tests.

#![allow(dead_code)]

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

use view_router::config::{RouteConfig, RouterConfig};

/// Start a programmable view server on an ephemeral port.
///
/// `f` receives the request path and returns a status code and body.
pub async fn start_view_server<F>(f: F) -> SocketAddr
where
    F: Fn(&str) -> (u16, String) + Send + Sync + 'static,
{
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let f = Arc::new(f);

    tokio::spawn(async move {
        loop {
            match listener.accept().await {
                Ok((mut socket, _)) => {
                    let f = f.clone();
                    tokio::spawn(async move {
                        let mut buf = vec![0u8; 4096];
                        let n = socket.read(&mut buf).await.unwrap_or(0);
                        let request = String::from_utf8_lossy(&buf[..n]);
                        let path = request
                            .lines()
                            .next()
                            .and_then(|line| line.split_whitespace().nth(1))
                            .unwrap_or("/")
                            .to_string();

                        let (status, body) = f(&path);
                        let status_text = match status {
                            200 => "200 OK",
                            404 => "404 Not Found",
                            500 => "500 Internal Server Error",
                            503 => "503 Service Unavailable",
                            _ => "200 OK",
                        };

                        let response_str = format!(
                            "HTTP/1.1 {}\r\nContent-Type: text/html\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                            status_text,
                            body.len(),
                            body
                        );
                        let _ = socket.write_all(response_str.as_bytes()).await;
                        let _ = socket.shutdown().await;
                        tokio::time::sleep(Duration::from_millis(10)).await;
                    });
                }
                Err(_) => break,
            }
        }
    });

    addr
}

/// Create a scratch directory holding the three sample views.
pub fn views_dir() -> PathBuf {
    let dir = std::env::temp_dir().join(format!("view-router-it-{}", uuid::Uuid::new_v4()));
    std::fs::create_dir_all(&dir).unwrap();
    for name in ["Login", "Home", "Register"] {
        std::fs::write(dir.join(format!("{}View.html", name)), format!("<h1>{}</h1>", name)).unwrap();
    }
    dir
}

/// The three-route table used throughout the tests.
pub fn three_routes() -> Vec<RouteConfig> {
    vec![
        RouteConfig::new("Login", "/", "LoginView.html"),
        RouteConfig::new("Home", "/home", "HomeView.html"),
        RouteConfig::new("Register", "/register", "RegisterView.html"),
    ]
}

/// Configuration serving `dir` through the fs loader.
pub fn fs_config(dir: &std::path::Path) -> RouterConfig {
    let mut config = RouterConfig {
        routes: three_routes(),
        ..RouterConfig::default()
    };
    config.loader.root = dir.display().to_string();
    config
}
