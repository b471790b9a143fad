//! HTTP server for the hiscore leaderboard.
//!
//! Exposes one route, `{prefix}/score`, over a shared [`ScoreStore`]:
//! `GET` returns the top entries as a JSON array of `{name, score}` and
//! `POST` validates a submission and appends it. Invalid submissions get a
//! 400 and never reach the store; store failures are logged and surface as
//! a generic 500.
//!
//! [`ScoreStore`]: hiscore_store::ScoreStore

pub mod config;
pub mod error;
pub mod handler;
pub mod router;
pub mod server;
pub mod state;
pub mod submission;

pub use config::ServerConfig;
pub use error::{ServerError, ServerResult};
pub use handler::HealthResponse;
pub use server::HiscoreServer;
pub use state::AppState;
pub use submission::{ScoreSubmission, ValidationError};

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use axum::Router;
    use hiscore_store::{InMemoryScoreStore, JsonFileScoreStore, ScoreRecord, ScoreStore};
    use tower::util::ServiceExt;

    fn app_with(store: Arc<dyn ScoreStore>) -> Router {
        router::build_router(&ServerConfig::default(), store)
    }

    async fn body_text(response: axum::response::Response) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    fn get_scores() -> Request<Body> {
        Request::builder().uri("/api/score").body(Body::empty()).unwrap()
    }

    fn post_json(body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/api/score")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_owned()))
            .unwrap()
    }

    fn post_form(body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/api/score")
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body.to_owned()))
            .unwrap()
    }

    #[tokio::test]
    async fn health_endpoint() {
        let app = app_with(Arc::new(InMemoryScoreStore::new()));
        let response = app
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let health: HealthResponse = serde_json::from_str(&body_text(response).await).unwrap();
        assert_eq!(health.status, "ok");
    }

    #[tokio::test]
    async fn empty_leaderboard_is_empty_array() {
        let app = app_with(Arc::new(InMemoryScoreStore::new()));
        let response = app.oneshot(get_scores()).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_text(response).await, "[]");
    }

    #[tokio::test]
    async fn get_returns_top_five_ranked() {
        let store = Arc::new(InMemoryScoreStore::with_records(vec![
            ScoreRecord::new("Alice", 50),
            ScoreRecord::new("Bob", 80),
            ScoreRecord::new("Cara", 80),
            ScoreRecord::new("Dan", 10),
            ScoreRecord::new("Eve", 5),
            ScoreRecord::new("Finn", 70),
        ]));
        let response = app_with(store).oneshot(get_scores()).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body: serde_json::Value = serde_json::from_str(&body_text(response).await).unwrap();
        assert_eq!(
            body,
            serde_json::json!([
                { "name": "Bob", "score": 80 },
                { "name": "Cara", "score": 80 },
                { "name": "Finn", "score": 70 },
                { "name": "Alice", "score": 50 },
                { "name": "Dan", "score": 10 },
            ])
        );
    }

    #[tokio::test]
    async fn post_json_appends() {
        let store = Arc::new(InMemoryScoreStore::new());
        let app = app_with(store.clone());
        let response = app.oneshot(post_json(r#"{"name":"Alice","score":42}"#)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_text(response).await, handler::SAVED_MESSAGE);
        assert_eq!(store.read_all().unwrap(), vec![ScoreRecord::new("Alice", 42)]);
    }

    #[tokio::test]
    async fn post_pascal_case_json_appends() {
        let store = Arc::new(InMemoryScoreStore::new());
        let response = app_with(store.clone())
            .oneshot(post_json(r#"{"Name":"Bob","Score":7}"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(store.read_all().unwrap(), vec![ScoreRecord::new("Bob", 7)]);
    }

    #[tokio::test]
    async fn post_form_appends() {
        let store = Arc::new(InMemoryScoreStore::new());
        let response = app_with(store.clone())
            .oneshot(post_form("name=Cara&score=0"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(store.read_all().unwrap(), vec![ScoreRecord::new("Cara", 0)]);
    }

    #[tokio::test]
    async fn empty_name_is_bad_request() {
        let store = Arc::new(InMemoryScoreStore::new());
        let response = app_with(store.clone())
            .oneshot(post_json(r#"{"name":"","score":10}"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_text(response).await, "Name cannot be empty.");
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn negative_score_is_bad_request() {
        let store = Arc::new(InMemoryScoreStore::new());
        let response = app_with(store.clone())
            .oneshot(post_form("name=Alice&score=-1"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_text(response).await, "Score must be a non-negative number.");
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn unparseable_body_is_bad_request() {
        let store = Arc::new(InMemoryScoreStore::new());
        let response = app_with(store.clone()).oneshot(post_json("{ nope")).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn malformed_file_is_internal_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scores.json");
        std::fs::write(&path, "[{\"name\":").unwrap();
        let app = app_with(Arc::new(JsonFileScoreStore::new(&path)));

        let response = app.clone().oneshot(get_scores()).await.unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_text(response).await, error::INTERNAL_ERROR_BODY);

        let response = app.oneshot(post_json(r#"{"name":"Alice","score":1}"#)).await.unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "[{\"name\":");
    }

    #[tokio::test]
    async fn file_backed_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = Arc::new(JsonFileScoreStore::new(dir.path().join("scores.json")));
        let app = app_with(store);

        for (name, score) in [("Alice", 50), ("Bob", 80), ("Cara", 80), ("Dan", 10)] {
            let body = serde_json::json!({ "name": name, "score": score }).to_string();
            let response = app.clone().oneshot(post_json(&body)).await.unwrap();
            assert_eq!(response.status(), StatusCode::OK);
        }

        let response = app.oneshot(get_scores()).await.unwrap();
        let top: Vec<ScoreRecord> = serde_json::from_str(&body_text(response).await).unwrap();
        let names: Vec<&str> = top.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["Bob", "Cara", "Alice", "Dan"]);
    }

    #[tokio::test]
    async fn custom_prefix_and_limit() {
        let config = ServerConfig {
            api_prefix: String::new(),
            top_n: 1,
            ..ServerConfig::default()
        };
        let store = Arc::new(InMemoryScoreStore::with_records(vec![
            ScoreRecord::new("Alice", 1),
            ScoreRecord::new("Bob", 2),
        ]));
        let app = router::build_router(&config, store);
        let response = app
            .clone()
            .oneshot(Request::builder().uri("/score").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let top: Vec<ScoreRecord> = serde_json::from_str(&body_text(response).await).unwrap();
        assert_eq!(top, vec![ScoreRecord::new("Bob", 2)]);

        let response = app.oneshot(get_scores()).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn concurrent_posts_all_land() {
        let dir = tempfile::tempdir().unwrap();
        let store = Arc::new(JsonFileScoreStore::new(dir.path().join("scores.json")));
        let app = app_with(store.clone());

        let mut tasks = Vec::new();
        for i in 0..20 {
            let app = app.clone();
            tasks.push(tokio::spawn(async move {
                let body = format!(r#"{{"name":"p{i}","score":{i}}}"#);
                app.oneshot(post_json(&body)).await.unwrap().status()
            }));
        }
        for task in tasks {
            assert_eq!(task.await.unwrap(), StatusCode::OK);
        }
        assert_eq!(store.read_all().unwrap().len(), 20);
    }
}
