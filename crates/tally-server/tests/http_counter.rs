//! End-to-end tests against the real router, templates loaded from
//! `tests/fixtures/`.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use futures_util::future::join_all;
use http_body_util::BodyExt;
use tower::ServiceExt;

use tally_core::TallyError;
use tally_server::app_state::AppState;
use tally_server::config::AppConfig;
use tally_server::router::build_router;

fn fixture_config() -> AppConfig {
    let mut cfg = AppConfig::default();
    cfg.server.templates_dir = "tests/fixtures".into();
    cfg
}

fn test_app() -> Router {
    let state = AppState::new(fixture_config()).expect("state");
    build_router(state)
}

async fn body_string(res: Response) -> String {
    let bytes = res.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn post_form(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn index_renders_zero_on_fresh_server() {
    let res = test_app().oneshot(get("/")).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body = body_string(res).await;
    assert!(body.contains(">0<"), "body was: {body}");
}

#[tokio::test]
async fn increase_with_amount_renders_updated_fragment() {
    let res = test_app()
        .oneshot(post_form("/increase", "amount=3"))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body = body_string(res).await;
    assert!(body.contains(">3<"), "body was: {body}");
    assert!(!body.contains("<html"), "fragment must not be a full page");
}

#[tokio::test]
async fn decrease_without_body_goes_negative() {
    let res = test_app()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/decrease")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body = body_string(res).await;
    assert!(body.contains(">-1<"), "body was: {body}");
}

#[tokio::test]
async fn unparsable_amount_behaves_as_one() {
    let res = test_app()
        .oneshot(post_form("/increase", "amount=banana"))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body = body_string(res).await;
    assert!(body.contains(">1<"), "body was: {body}");
}

#[tokio::test]
async fn mutations_accumulate_across_requests() {
    let app = test_app();

    let res = app.clone().oneshot(post_form("/increase", "amount=5")).await.unwrap();
    assert!(body_string(res).await.contains(">5<"));

    let res = app.clone().oneshot(post_form("/decrease", "amount=2")).await.unwrap();
    assert!(body_string(res).await.contains(">3<"));

    let res = app.oneshot(get("/")).await.unwrap();
    assert!(body_string(res).await.contains(">3<"));
}

#[tokio::test(flavor = "multi_thread")]
async fn hundred_concurrent_increments_lose_no_updates() {
    let app = test_app();

    let posts = (0..100).map(|_| {
        let app = app.clone();
        tokio::spawn(async move {
            let res = app
                .oneshot(post_form("/increase", "amount=1"))
                .await
                .unwrap();
            assert_eq!(res.status(), StatusCode::OK);
        })
    });
    join_all(posts).await.into_iter().for_each(|r| r.unwrap());

    let res = app.oneshot(get("/")).await.unwrap();
    let body = body_string(res).await;
    assert!(body.contains(">100<"), "body was: {body}");
}

#[tokio::test]
async fn reload_mode_swallows_missing_templates() {
    let mut cfg = fixture_config();
    cfg.server.templates_dir = "does-not-exist".into();
    cfg.server.reload_templates = true;

    let state = AppState::new(cfg).expect("reload mode defers loading");
    let res = build_router(state).oneshot(get("/")).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    assert!(body_string(res).await.is_empty());
}

#[tokio::test]
async fn preloaded_mode_fails_fast_on_missing_templates() {
    let mut cfg = fixture_config();
    cfg.server.templates_dir = "does-not-exist".into();

    let err = AppState::new(cfg).err().expect("must fail");
    assert!(matches!(err, TallyError::Template(_)));
}

#[tokio::test]
async fn ops_endpoints_respond() {
    let app = test_app();

    let res = app.clone().oneshot(get("/healthz")).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let res = app.clone().oneshot(get("/readyz")).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let res = app.clone().oneshot(post_form("/increase", "amount=4")).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let res = app.oneshot(get("/metrics")).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body = body_string(res).await;
    assert!(body.contains("tally_counter_value 4"), "body was: {body}");
    assert!(body.contains("tally_counter_ops_total{op=\"increase\"} 1"));
    assert!(body.contains("tally_http_requests_total"));
    assert!(body.contains("tally_draining 0"));
}
