use axum::{
    body::{to_bytes, Body},
    http::Request,
};
use incentive_planner_server::{api::app_router, build_state, config::Config};
use tower::ServiceExt;

#[tokio::test]
async fn healthz_works() {
    let config = Config::from_env();
    let state = build_state(&config).unwrap();
    let app = app_router(state, &config);

    let response = app
        .oneshot(Request::builder().uri("/api/v1/healthz").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), 200);
}

#[tokio::test]
async fn openapi_document_is_served() {
    let config = Config::from_env();
    let state = build_state(&config).unwrap();
    let app = app_router(state, &config);

    let response = app
        .oneshot(Request::builder().uri("/openapi.json").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), 200);

    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let doc: serde_json::Value = serde_json::from_slice(&body).unwrap();
    for path in [
        "/api/v1/incentives/minimum-start-date",
        "/api/v1/incentives/plan",
        "/api/v1/incentives/status",
    ] {
        assert!(doc["paths"].get(path).is_some(), "missing {}", path);
    }
    assert!(doc["components"]["schemas"].get("IncentivePeriodPayload").is_some());
}
