//! End-to-end tests for the dev server.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use axum::http::StatusCode;
use serde_json::Value;
use view_router::config::RouterConfig;
use view_router::lifecycle::{build_navigator, Shutdown};
use view_router::HttpServer;

mod common;

async fn start(config: RouterConfig) -> (SocketAddr, Shutdown) {
    let navigator = Arc::new(build_navigator(&config).unwrap());
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    let server = HttpServer::new(config, navigator);
    tokio::spawn(async move {
        let _ = server.run(listener, server_shutdown).await;
    });

    tokio::time::sleep(Duration::from_millis(100)).await;
    (addr, shutdown)
}

fn client() -> reqwest::Client {
    reqwest::Client::builder().no_proxy().build().unwrap()
}

#[tokio::test]
async fn test_serves_declared_routes() {
    let dir = common::views_dir();
    let (addr, shutdown) = start(common::fs_config(&dir)).await;
    let client = client();

    for (path, body) in [("/", "<h1>Login</h1>"), ("/home", "<h1>Home</h1>"), ("/register", "<h1>Register</h1>")] {
        let res = client.get(format!("http://{}{}", addr, path)).send().await.unwrap();
        assert_eq!(res.status(), StatusCode::OK, "{path} should be served");
        assert_eq!(
            res.headers().get("content-type").unwrap(),
            "text/html; charset=utf-8"
        );
        assert!(res.headers().contains_key("x-request-id"));
        assert_eq!(res.text().await.unwrap(), body);
    }

    shutdown.trigger();
    std::fs::remove_dir_all(dir).unwrap();
}

#[tokio::test]
async fn test_unmatched_path_is_404() {
    let dir = common::views_dir();
    let (addr, shutdown) = start(common::fs_config(&dir)).await;

    let res = client()
        .get(format!("http://{}/does-not-exist", addr))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    shutdown.trigger();
    std::fs::remove_dir_all(dir).unwrap();
}

#[tokio::test]
async fn test_missing_view_is_502() {
    let dir = common::views_dir();
    std::fs::remove_file(dir.join("RegisterView.html")).unwrap();
    let (addr, shutdown) = start(common::fs_config(&dir)).await;

    let res = client()
        .get(format!("http://{}/register", addr))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_GATEWAY);

    shutdown.trigger();
    std::fs::remove_dir_all(dir).unwrap();
}

#[tokio::test]
async fn test_base_path() {
    let dir = common::views_dir();
    let mut config = common::fs_config(&dir);
    config.base_path = "/app/".into();
    let (addr, shutdown) = start(config).await;
    let client = client();

    let res = client.get(format!("http://{}/app/home", addr)).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let res = client.get(format!("http://{}/app", addr)).send().await.unwrap();
    assert_eq!(res.text().await.unwrap(), "<h1>Login</h1>");

    let res = client.get(format!("http://{}/home", addr)).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    shutdown.trigger();
    std::fs::remove_dir_all(dir).unwrap();
}

#[tokio::test]
async fn test_non_get_rejected() {
    let dir = common::views_dir();
    let (addr, shutdown) = start(common::fs_config(&dir)).await;

    let res = client()
        .post(format!("http://{}/home", addr))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::METHOD_NOT_ALLOWED);

    shutdown.trigger();
    std::fs::remove_dir_all(dir).unwrap();
}

#[tokio::test]
async fn test_route_listing_tracks_lazy_state() {
    let dir = common::views_dir();
    let (addr, shutdown) = start(common::fs_config(&dir)).await;
    let client = client();
    let listing = format!("http://{}/__routes", addr);

    let routes: Vec<Value> = client.get(&listing).send().await.unwrap().json().await.unwrap();
    assert_eq!(routes.len(), 3);
    assert!(routes.iter().all(|r| r["state"] == "not_loaded"));

    client.get(format!("http://{}/home", addr)).send().await.unwrap();

    let routes: Vec<Value> = client.get(&listing).send().await.unwrap().json().await.unwrap();
    let home = routes.iter().find(|r| r["name"] == "Home").unwrap();
    assert_eq!(home["state"], "loaded");
    assert_eq!(home["path"], "/home");
    let login = routes.iter().find(|r| r["name"] == "Login").unwrap();
    assert_eq!(login["state"], "not_loaded");

    shutdown.trigger();
    std::fs::remove_dir_all(dir).unwrap();
}
