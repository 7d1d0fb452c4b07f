//! Key generation routes.

use axum::{
    extract::{Query, State},
    routing::{get, post},
    Json, Router,
};
use lexorder_engine::KeyRequest;

use crate::error::Result;
use crate::handlers::{
    handle_between, handle_end, handle_generate, handle_initial, handle_start, BetweenQuery,
    EndQuery, KeyResponse, KeysResponse, StartQuery,
};
use crate::AppState;

/// Create key routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/keys", post(generate_handler))
        .route("/keys/initial", get(initial_handler))
        .route("/keys/start", get(start_handler))
        .route("/keys/end", get(end_handler))
        .route("/keys/between", get(between_handler))
}

/// GET /keys/initial - Key for an empty list.
async fn initial_handler() -> Result<Json<KeyResponse>> {
    Ok(Json(handle_initial()?))
}

/// GET /keys/start?next= - Key before `next`.
async fn start_handler(Query(query): Query<StartQuery>) -> Result<Json<KeyResponse>> {
    Ok(Json(handle_start(query)?))
}

/// GET /keys/end?previous= - Key after `previous`.
async fn end_handler(Query(query): Query<EndQuery>) -> Result<Json<KeyResponse>> {
    Ok(Json(handle_end(query)?))
}

/// GET /keys/between?previous=&next= - Key between two neighbours.
async fn between_handler(Query(query): Query<BetweenQuery>) -> Result<Json<KeyResponse>> {
    Ok(Json(handle_between(query)?))
}

/// POST /keys - Keys for a general request.
async fn generate_handler(
    State(state): State<AppState>,
    Json(request): Json<KeyRequest>,
) -> Result<Json<KeysResponse>> {
    Ok(Json(handle_generate(&state.config, request)?))
}

#[cfg(test)]
mod tests {
    use crate::config::Config;
    use crate::{app, AppState};
    use axum::body::{to_bytes, Body};
    use axum::http::{header::CONTENT_TYPE, Request, StatusCode};
    use lexorder_engine::SymbolTable;
    use serde_json::{json, Value};
    use std::sync::Arc;
    use tower::ServiceExt;

    fn test_state() -> AppState {
        AppState {
            config: Arc::new(Config {
                host: "127.0.0.1".to_string(),
                port: 0,
                max_count: 100,
                alphabet: SymbolTable::base62(),
            }),
        }
    }

    async fn send(request: Request<Body>) -> (StatusCode, Value) {
        let response = app(test_state()).oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn post(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn health() {
        let (status, body) = send(get("/health")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn initial_key() {
        let (status, body) = send(get("/keys/initial")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["key"], "00Npd");
    }

    #[tokio::test]
    async fn start_and_end_keys() {
        let (status, body) = send(get("/keys/start?next=00Npd")).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body["key"].as_str().unwrap() < "00Npd");

        let (status, body) = send(get("/keys/end?previous=00Npd")).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body["key"].as_str().unwrap() > "00Npd");
    }

    #[tokio::test]
    async fn between_key() {
        let (status, body) = send(get("/keys/between?previous=a&next=b")).await;
        assert_eq!(status, StatusCode::OK);
        let key = body["key"].as_str().unwrap();
        assert!("a" < key && key < "b");
    }

    #[tokio::test]
    async fn swapped_neighbours_are_rejected() {
        let (status, body) = send(get("/keys/between?previous=b&next=a")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].as_str().unwrap().contains("sorts before"));
    }

    #[tokio::test]
    async fn missing_query_parameter() {
        let (status, _) = send(get("/keys/between?previous=a")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn generate_keys() {
        let request = json!({"alphabet": "0123456789", "start": "2", "end": "3", "count": 3});
        let (status, body) = send(post("/keys", request)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["keys"], json!(["23", "25", "28"]));
    }

    #[tokio::test]
    async fn generate_too_many_keys() {
        let (status, body) = send(post("/keys", json!({"count": 101}))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].as_str().unwrap().contains("Too many keys"));
    }
}
