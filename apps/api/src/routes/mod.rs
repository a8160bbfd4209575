pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::card::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Vibe API
        .route("/api/v1/vibe/infer", post(handlers::handle_infer))
        .route("/api/v1/vibe/card", get(handlers::handle_get_card))
        .route(
            "/api/v1/vibe/card/refresh",
            post(handlers::handle_refresh),
        )
        .route("/api/v1/vibe/card/retake", post(handlers::handle_retake))
        // Assessment API
        .route(
            "/api/v1/assessment/status",
            get(handlers::handle_assessment_status),
        )
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::card::store::InMemoryAssessmentStore;

    fn app(assessment: Option<Value>) -> Router {
        let store = Arc::new(InMemoryAssessmentStore::new(assessment));
        build_router(AppState::new(store))
    }

    async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let request = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(body) => request
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => request.body(Body::empty()).unwrap(),
        };

        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, json)
    }

    #[tokio::test]
    async fn test_health() {
        let (status, body) = send(&app(None), "GET", "/health", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn test_infer_empty_object() {
        let (status, body) = send(&app(None), "POST", "/api/v1/vibe/infer", Some(json!({}))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["tagline"], "Authentic style + natural flow");
        assert_eq!(body["traits"][0]["icon"], "comments");
        assert_eq!(body["traits"][1]["text"], "Living life fully");
        assert_eq!(body["traits"][2]["icon"], "heart-pulse");
    }

    #[tokio::test]
    async fn test_infer_rejects_non_object() {
        let (status, body) =
            send(&app(None), "POST", "/api/v1/vibe/infer", Some(json!(["x"]))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_card_not_rendered_is_404() {
        let (status, body) = send(&app(None), "GET", "/api/v1/vibe/card", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["code"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn test_refresh_without_assessment_shows_placeholder() {
        let app = app(None);
        let (status, body) = send(&app, "POST", "/api/v1/vibe/card/refresh", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["outcome"], "empty");
        assert_eq!(body["state"]["state"], "empty");

        let (_, card) = send(&app, "GET", "/api/v1/vibe/card", None).await;
        assert_eq!(card["view"]["kind"], "empty");
        assert_eq!(
            card["view"]["placeholder"]["tagline"],
            "Complete your assessment"
        );

        let (_, retake) = send(&app, "POST", "/api/v1/vibe/card/retake", None).await;
        assert_eq!(retake["launched"], false);
        assert_eq!(retake["requests"]["count"], 0);
    }

    #[tokio::test]
    async fn test_refresh_then_retake() {
        let app = app(Some(json!({
            "communication_style": { "humor_type": ["Sarcasm & dry humor"] },
            "interests": { "hobbies": ["Traveling / Exploring"] }
        })));
        let (_, body) = send(&app, "POST", "/api/v1/vibe/card/refresh", None).await;
        assert_eq!(body["outcome"], "populated");
        assert_eq!(
            body["state"]["descriptor"]["tagline"],
            "Dry humor + natural flow"
        );

        let (status, card) = send(&app, "GET", "/api/v1/vibe/card", None).await;
        assert_eq!(status, StatusCode::OK);
        assert!(card["html"].as_str().unwrap().contains("fa-mountain"));

        send(&app, "POST", "/api/v1/vibe/card/refresh", None).await;
        let (_, retake) = send(&app, "POST", "/api/v1/vibe/card/retake", None).await;
        assert_eq!(retake["launched"], true);
        assert_eq!(retake["requests"]["count"], 1);
    }

    #[tokio::test]
    async fn test_assessment_status() {
        let (_, body) = send(&app(None), "GET", "/api/v1/assessment/status", None).await;
        assert_eq!(body["status"], "not_started");

        let (_, body) = send(
            &app(Some(json!({ "values": { "relationship_goal": "Casual" } }))),
            "GET",
            "/api/v1/assessment/status",
            None,
        )
        .await;
        assert_eq!(body["status"], "completed");
    }
}
