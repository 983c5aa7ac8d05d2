use axum::body::Body;
use axum::http::{header::CONTENT_TYPE, Method, Request, Response};
use axum::Router;
use chrono::{TimeZone, Utc};
use dashboard::ProjectService;
use http_body_util::BodyExt;
use serde_json::Value;
use shared_lib::SimulatedLatency;
use std::sync::Arc;
use store::seed::builtin_projects;
use store::{InMemoryProjectRepository, ManualClock, StoreOptions};
use tower::ServiceExt;
use web_service::routes::create_app_router;
use web_service::AppState;

/// 使用内置种子数据构建完整的路由，时钟固定在 2025-06-15，没有模拟延迟
pub fn build_test_app() -> Router {
    let clock = Arc::new(ManualClock::new(Utc.with_ymd_and_hms(2025, 6, 15, 9, 30, 0).unwrap()));
    let repo = InMemoryProjectRepository::new(
        builtin_projects().unwrap(),
        StoreOptions {
            latency: SimulatedLatency::none(),
            clock: clock.clone(),
            ..Default::default()
        },
    );

    create_app_router(AppState::new(ProjectService::new(repo, clock)))
}

pub async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> Response<Body> {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    app.clone().oneshot(request).await.unwrap()
}

pub async fn get(app: &Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, None).await
}

pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
