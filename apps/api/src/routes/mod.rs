pub mod health;

use axum::{
    routing::{delete, get, post},
    Router,
};

use crate::hosting::handlers as hosting;
use crate::optimization::handlers as optimization;
use crate::resumes::handlers as resumes;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Optimization API
        .route("/api/v1/optimize", post(optimization::handle_optimize))
        // Resume API
        .route(
            "/api/v1/users/:user_id/resume",
            get(resumes::handle_get_resume).put(resumes::handle_put_resume),
        )
        .route(
            "/api/v1/users/:user_id/resume/optimization",
            get(optimization::handle_stored_optimization),
        )
        // Hosting API
        .route(
            "/api/v1/users/:user_id/hosted",
            get(hosting::handle_list_hosted).post(hosting::handle_publish),
        )
        .route(
            "/api/v1/users/:user_id/hosted/:id",
            delete(hosting::handle_delete_hosted),
        )
        .route("/api/v1/hosted/:slug", get(hosting::handle_view_hosted))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::{to_bytes, Body},
        http::{Method, Request, StatusCode},
    };
    use serde_json::{json, Value};
    use std::time::Duration;
    use tower::ServiceExt;

    use crate::config::Config;

    fn app() -> Router {
        build_router(AppState::in_memory(Config::default()))
    }

    fn delayed_app(analysis_delay_ms: u64) -> Router {
        build_router(AppState::in_memory(Config {
            analysis_delay_ms,
            ..Config::default()
        }))
    }

    async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        let body = match body {
            Some(json) => {
                builder = builder.header("content-type", "application/json");
                Body::from(json.to_string())
            }
            None => Body::empty(),
        };
        let response = app
            .clone()
            .oneshot(builder.body(body).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, value)
    }

    fn named_resume() -> Value {
        json!({
            "personalInfo": {
                "fullName": "Ada Lovelace",
                "email": "ada@example.com",
                "phone": "555-0100",
                "location": "London",
                "summary": ""
            },
            "experience": [],
            "skills": []
        })
    }

    #[tokio::test]
    async fn test_health() {
        let (status, body) = send(&app(), Method::GET, "/health", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn test_optimize_detailed_by_default() {
        let (status, body) =
            send(&app(), Method::POST, "/api/v1/optimize", Some(named_resume())).await;
        assert_eq!(status, StatusCode::OK);
        // summary 7, linkedin 5, certifications 4
        assert_eq!(body["score"], 85 - 7 - 5 - 4);
        assert_eq!(body["policy"], "detailed");
        assert_eq!(body["suggestions"][0]["priority"], "high");
    }

    #[tokio::test]
    async fn test_optimize_basic_mode() {
        let (status, body) = send(
            &app(),
            Method::POST,
            "/api/v1/optimize?mode=basic",
            Some(named_resume()),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["policy"], "basic");
    }

    #[tokio::test]
    async fn test_optimize_mode_is_case_insensitive() {
        let (status, body) = send(
            &app(),
            Method::POST,
            "/api/v1/optimize?mode=Basic",
            Some(named_resume()),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["policy"], "basic");
    }

    #[tokio::test]
    async fn test_optimize_unknown_mode_is_json_error() {
        let (status, body) = send(
            &app(),
            Method::POST,
            "/api/v1/optimize?mode=llm",
            Some(named_resume()),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test(start_paused = true)]
    async fn test_optimize_waits_for_analysis_delay() {
        let app = delayed_app(2500);
        let started = tokio::time::Instant::now();
        let (status, _) =
            send(&app, Method::POST, "/api/v1/optimize", Some(named_resume())).await;
        assert_eq!(status, StatusCode::OK);
        assert!(started.elapsed() >= Duration::from_millis(2500));
    }

    #[tokio::test(start_paused = true)]
    async fn test_save_is_not_held_by_analysis_delay() {
        let app = delayed_app(2500);
        let saved = tokio::time::timeout(
            Duration::from_millis(500),
            send(
                &app,
                Method::PUT,
                "/api/v1/users/u1/resume",
                Some(named_resume()),
            ),
        )
        .await;
        let (status, body) = saved.expect("save returned before the analysis delay");
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["optimization"]["score"], 69);

        let (status, body) = send(&app, Method::GET, "/api/v1/users/u1/resume", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["personalInfo"]["fullName"], "Ada Lovelace");
    }

    #[tokio::test]
    async fn test_optimize_requires_full_name() {
        let (status, body) = send(
            &app(),
            Method::POST,
            "/api/v1/optimize",
            Some(json!({"personalInfo": {"fullName": ""}})),
        )
        .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["error"]["code"], "UNPROCESSABLE_ENTITY");
    }

    #[tokio::test]
    async fn test_resume_roundtrip_and_stored_optimization() {
        let app = app();
        let (status, _) = send(&app, Method::GET, "/api/v1/users/u1/resume", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, body) = send(
            &app,
            Method::PUT,
            "/api/v1/users/u1/resume",
            Some(named_resume()),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert!(body["savedAt"].is_string());
        assert_eq!(body["optimization"]["score"], 69);

        let (status, body) = send(&app, Method::GET, "/api/v1/users/u1/resume", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["personalInfo"]["fullName"], "Ada Lovelace");

        let (status, body) = send(
            &app,
            Method::GET,
            "/api/v1/users/u1/resume/optimization?mode=basic",
            None,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["policy"], "basic");
    }

    #[tokio::test]
    async fn test_save_without_name_skips_optimization() {
        let (status, body) = send(
            &app(),
            Method::PUT,
            "/api/v1/users/u2/resume",
            Some(json!({"personalInfo": {"fullName": ""}})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.get("optimization").is_none());
    }

    #[tokio::test]
    async fn test_invalid_user_id_rejected() {
        let (status, body) =
            send(&app(), Method::GET, "/api/v1/users/bad%20id/resume", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_hosting_flow() {
        let app = app();
        send(
            &app,
            Method::PUT,
            "/api/v1/users/u1/resume",
            Some(named_resume()),
        )
        .await;

        let (status, hosted) = send(
            &app,
            Method::POST,
            "/api/v1/users/u1/hosted",
            Some(json!({"template": "classic", "customSlug": "ada"})),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(hosted["template"], "classic");
        assert_eq!(hosted["isPublic"], true);
        let slug = hosted["url"].as_str().unwrap().to_string();
        assert!(slug.starts_with("ada-"));
        let id = hosted["id"].as_str().unwrap().to_string();

        let (status, viewed) =
            send(&app, Method::GET, &format!("/api/v1/hosted/{slug}"), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(viewed["views"], 1);

        let (_, list) = send(&app, Method::GET, "/api/v1/users/u1/hosted", None).await;
        assert_eq!(list.as_array().unwrap().len(), 1);

        let uri = format!("/api/v1/users/u1/hosted/{id}");
        let (status, _) = send(&app, Method::DELETE, &uri, None).await;
        assert_eq!(status, StatusCode::NO_CONTENT);
        let (status, _) = send(&app, Method::DELETE, &uri, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_publish_rejects_slug_with_path_characters() {
        let app = app();
        send(
            &app,
            Method::PUT,
            "/api/v1/users/u1/resume",
            Some(named_resume()),
        )
        .await;

        let (status, body) = send(
            &app,
            Method::POST,
            "/api/v1/users/u1/hosted",
            Some(json!({"customSlug": "ada/cv"})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");

        let (_, list) = send(&app, Method::GET, "/api/v1/users/u1/hosted", None).await;
        assert!(list.as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_publish_without_saved_resume() {
        let (status, _) = send(
            &app(),
            Method::POST,
            "/api/v1/users/nobody/hosted",
            Some(json!({})),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
