//! Navigation tests against views served over HTTP.

use std::net::SocketAddr;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use view_router::error::RouterError;
use view_router::history::MemoryHistory;
use view_router::view::{HttpViewLoader, LoadError, ViewState};
use view_router::{Navigator, Params, RouteTable};

mod common;

fn navigator(addr: SocketAddr, base: &str) -> Navigator {
    let table = RouteTable::new(&common::three_routes()).unwrap();
    let client = reqwest::Client::builder().no_proxy().build().unwrap();
    let loader = HttpViewLoader::new(&format!("http://{}/views", addr))
        .unwrap()
        .with_client(client);
    Navigator::new(Arc::new(table), Box::new(MemoryHistory::new(base)), Arc::new(loader))
        .with_load_timeout(Duration::from_secs(2))
}

fn serve_views(path: &str) -> (u16, String) {
    match path {
        "/views/LoginView.html" => (200, "<h1>Login</h1>".into()),
        "/views/HomeView.html" => (200, "<h1>Home</h1>".into()),
        "/views/RegisterView.html" => (200, "<h1>Register</h1>".into()),
        _ => (404, "not found".into()),
    }
}

#[tokio::test]
async fn test_navigate_loads_over_http() {
    let addr = common::start_view_server(serve_views).await;
    let nav = navigator(addr, "/");

    let login = nav.push("/").await.unwrap();
    assert_eq!(login.route, "Login");
    assert_eq!(login.view.body, b"<h1>Login</h1>");

    let home = nav.navigate("Home", Params::new()).await.unwrap();
    assert_eq!(home.location, "/home");
    assert_eq!(home.view.body, b"<h1>Home</h1>");
    assert_eq!(home.view.content_type, "text/html");

    let (entries, url) = nav.history().await;
    assert_eq!(entries, vec!["/", "/home"]);
    assert_eq!(url.as_deref(), Some("/home"));
}

#[tokio::test]
async fn test_views_fetched_once() {
    let hits = Arc::new(AtomicUsize::new(0));
    let counter = hits.clone();
    let addr = common::start_view_server(move |path| {
        counter.fetch_add(1, Ordering::SeqCst);
        serve_views(path)
    })
    .await;
    let nav = navigator(addr, "/");

    nav.push("/home").await.unwrap();
    nav.push("/register").await.unwrap();
    nav.back().await.unwrap();
    nav.forward().await.unwrap();
    nav.push("/home").await.unwrap();

    assert_eq!(hits.load(Ordering::SeqCst), 2);
    assert!(matches!(nav.view_state("Login"), Some(ViewState::NotLoaded)));
}

#[tokio::test]
async fn test_server_error_leaves_history_untouched() {
    let healthy = Arc::new(AtomicBool::new(false));
    let flag = healthy.clone();
    let addr = common::start_view_server(move |path| {
        if path.ends_with("RegisterView.html") && !flag.load(Ordering::SeqCst) {
            (500, "boom".into())
        } else {
            serve_views(path)
        }
    })
    .await;
    let nav = navigator(addr, "/");

    nav.push("/home").await.unwrap();
    let err = nav.push("/register").await.unwrap_err();
    match err {
        RouterError::Load { route, source } => {
            assert_eq!(route, "Register");
            assert!(matches!(source, LoadError::Http(_)));
        }
        other => panic!("expected load error, got {other:?}"),
    }
    assert_eq!(nav.current().unwrap().route, "Home");
    assert_eq!(nav.history().await.0, vec!["/home"]);

    // The failure is not cached.
    healthy.store(true, Ordering::SeqCst);
    let register = nav.push("/register").await.unwrap();
    assert_eq!(register.view.body, b"<h1>Register</h1>");
    assert_eq!(nav.history().await.0, vec!["/home", "/register"]);
}

#[tokio::test]
async fn test_missing_module_reported() {
    let addr = common::start_view_server(|path| {
        if path.ends_with("HomeView.html") {
            (404, "gone".into())
        } else {
            serve_views(path)
        }
    })
    .await;
    let nav = navigator(addr, "/");

    let err = nav.navigate("Home", Params::new()).await.unwrap_err();
    assert!(matches!(
        err,
        RouterError::Load { source: LoadError::Missing(_), .. }
    ));
    assert!(nav.current().is_none());
    assert!(matches!(nav.view_state("Home"), Some(ViewState::Failed(_))));
}

#[tokio::test]
async fn test_unknown_targets_do_not_fetch() {
    let hits = Arc::new(AtomicUsize::new(0));
    let counter = hits.clone();
    let addr = common::start_view_server(move |path| {
        counter.fetch_add(1, Ordering::SeqCst);
        serve_views(path)
    })
    .await;
    let nav = navigator(addr, "/");

    assert!(matches!(nav.push("/nowhere").await, Err(RouterError::NotFound(_))));
    assert!(matches!(
        nav.navigate("Profile", Params::new()).await,
        Err(RouterError::NotFound(_))
    ));
    assert_eq!(hits.load(Ordering::SeqCst), 0);
    assert!(nav.history().await.0.is_empty());
}

#[tokio::test]
async fn test_base_path_prefixes_urls() {
    let addr = common::start_view_server(serve_views).await;
    let nav = navigator(addr, "/app/");

    nav.push("/").await.unwrap();
    let (_, url) = nav.history().await;
    assert_eq!(url.as_deref(), Some("/app/"));

    nav.navigate("Register", Params::new()).await.unwrap();
    let (entries, url) = nav.history().await;
    assert_eq!(entries, vec!["/", "/register"]);
    assert_eq!(url.as_deref(), Some("/app/register"));
}

#[tokio::test]
async fn test_subscribers_see_each_navigation() {
    let addr = common::start_view_server(serve_views).await;
    let nav = navigator(addr, "/");
    let mut events = nav.subscribe();

    nav.push("/").await.unwrap();
    nav.push("/home").await.unwrap();
    nav.back().await.unwrap();

    let routes: Vec<String> = [
        events.recv().await.unwrap(),
        events.recv().await.unwrap(),
        events.recv().await.unwrap(),
    ]
    .into_iter()
    .map(|n| n.route)
    .collect();
    assert_eq!(routes, vec!["Login", "Home", "Login"]);
}
