//! End-to-end tests over a real socket.

mod common;

use common::{send, site_file, TestServer};
use hyper::{Method, Response, StatusCode};

fn assert_dev_headers(resp: &Response<()>) {
    assert_eq!(resp.headers()["access-control-allow-origin"], "*");
    assert_eq!(resp.headers()["access-control-allow-methods"], "GET, OPTIONS");
    assert_eq!(resp.headers()["cache-control"], "no-cache");
}

#[tokio::test]
async fn client_route_without_file_serves_spa_index() {
    let mut server = TestServer::start().await;

    let (resp, body) = send(server.addr, Method::GET, "/database/story-42").await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(resp.headers()["content-type"]
        .to_str()
        .unwrap()
        .starts_with("text/html"));
    assert_dev_headers(&resp);
    assert_eq!(body.as_ref(), site_file("database/index.html").as_slice());

    server.stop().await.unwrap();
}

#[tokio::test]
async fn client_route_below_existing_file_serves_spa_index() {
    let mut server = TestServer::start().await;

    let (resp, body) = send(server.addr, Method::GET, "/database/data.json/details").await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_dev_headers(&resp);
    assert_eq!(body.as_ref(), site_file("database/index.html").as_slice());

    server.stop().await.unwrap();
}

#[tokio::test]
async fn mount_prefix_inside_path_serves_spa_index() {
    let mut server = TestServer::start().await;

    let (resp, body) = send(server.addr, Method::GET, "/static/database/foo").await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_dev_headers(&resp);
    assert_eq!(body.as_ref(), site_file("database/index.html").as_slice());

    server.stop().await.unwrap();
}

#[tokio::test]
async fn existing_json_is_served_with_json_type() {
    let mut server = TestServer::start().await;

    for path in ["database/chapter1.json", "database/data.json"] {
        let (resp, body) = send(server.addr, Method::GET, &format!("/{path}")).await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(resp.headers()["content-type"], "application/json");
        assert_dev_headers(&resp);
        assert_eq!(body.as_ref(), site_file(path).as_slice());
    }

    server.stop().await.unwrap();
}

#[tokio::test]
async fn missing_file_with_extension_is_not_rewritten() {
    let mut server = TestServer::start().await;

    let (resp, body) = send(server.addr, Method::GET, "/database/missing.json").await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_dev_headers(&resp);
    assert_ne!(body.as_ref(), site_file("database/index.html").as_slice());

    server.stop().await.unwrap();
}

#[tokio::test]
async fn page_outside_mount_uses_standard_type() {
    let mut server = TestServer::start().await;

    let (resp, body) = send(server.addr, Method::GET, "/about.html").await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(resp.headers()["content-type"]
        .to_str()
        .unwrap()
        .starts_with("text/html"));
    assert_dev_headers(&resp);
    assert_eq!(body.as_ref(), site_file("about.html").as_slice());

    server.stop().await.unwrap();
}

#[tokio::test]
async fn asset_under_mount_is_served_as_is() {
    let mut server = TestServer::start().await;

    let (resp, body) = send(server.addr, Method::GET, "/database/assets/logo.png").await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(resp.headers()["content-type"], "image/png");
    assert_dev_headers(&resp);
    assert_eq!(body.as_ref(), site_file("database/assets/logo.png").as_slice());

    server.stop().await.unwrap();
}

#[tokio::test]
async fn error_responses_carry_dev_headers() {
    let mut server = TestServer::start().await;

    let (not_found, _) = send(server.addr, Method::GET, "/nothing-here").await;
    assert_eq!(not_found.status(), StatusCode::NOT_FOUND);
    assert_dev_headers(&not_found);

    let (not_allowed, _) = send(server.addr, Method::POST, "/about.html").await;
    assert_eq!(not_allowed.status(), StatusCode::METHOD_NOT_ALLOWED);
    assert_dev_headers(&not_allowed);

    let (preflight, body) = send(server.addr, Method::OPTIONS, "/database/chapter1.json").await;
    assert_eq!(preflight.status(), StatusCode::NO_CONTENT);
    assert_dev_headers(&preflight);
    assert!(body.is_empty());

    server.stop().await.unwrap();
}

#[tokio::test]
async fn repeated_requests_are_identical() {
    let mut server = TestServer::start().await;

    let (first, first_body) = send(server.addr, Method::GET, "/database/story-42").await;
    let (second, second_body) = send(server.addr, Method::GET, "/database/story-42").await;
    assert_eq!(first.status(), second.status());
    assert_eq!(first_body, second_body);

    // Date may tick between the two responses
    let mut first_headers = first.headers().clone();
    let mut second_headers = second.headers().clone();
    first_headers.remove("date");
    second_headers.remove("date");
    assert_eq!(first_headers, second_headers);

    server.stop().await.unwrap();
}

#[tokio::test]
async fn shutdown_stops_accepting() {
    let mut server = TestServer::start().await;
    let addr = server.addr;

    let (resp, _) = send(addr, Method::GET, "/about.html").await;
    assert_eq!(resp.status(), StatusCode::OK);

    server.stop().await.unwrap();
    assert!(tokio::net::TcpStream::connect(addr).await.is_err());
}
