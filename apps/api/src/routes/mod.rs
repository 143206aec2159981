pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::editing;
use crate::layout::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Layout API
        .route("/api/v1/templates", get(handlers::handle_list_templates))
        .route("/api/v1/layout", post(handlers::handle_layout))
        // Edit API
        .route("/api/v1/layout/edit", post(editing::handlers::handle_edit))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::config::Config;

    fn make_router() -> Router {
        build_router(AppState {
            config: Config::default(),
        })
    }

    fn make_resume(entries: usize) -> Value {
        let experience: Vec<Value> = (0..entries)
            .map(|i| {
                json!({
                    "role": format!("Engineer {i}"),
                    "company": "Acme",
                    "period": "2018 - 2022",
                    "location": "Remote",
                    "description": ["x".repeat(100), "y".repeat(100), "z".repeat(100), "w".repeat(100)]
                })
            })
            .collect();
        json!({
            "name": "Ada Lovelace",
            "summary": "Engineer who ships.",
            "skills": ["Rust", "SQL"],
            "education": [{"institution": "ETH", "degree": "MSc", "period": "2014"}],
            "experience": experience
        })
    }

    async fn send(
        router: Router,
        method: &str,
        uri: &str,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(body.map_or_else(Body::empty, |b| Body::from(b.to_string())))
            .unwrap();
        let response = router.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };
        (status, json)
    }

    #[tokio::test]
    async fn test_health() {
        let (status, body) = send(make_router(), "GET", "/health", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn test_list_templates() {
        let (status, body) = send(make_router(), "GET", "/api/v1/templates", None).await;
        assert_eq!(status, StatusCode::OK);
        let templates = body.as_array().unwrap();
        assert_eq!(templates.len(), 8);
        assert_eq!(templates[0]["id"], "classic");
        assert!(templates[0]["capacity"]["page_capacity"].is_number());
    }

    #[tokio::test]
    async fn test_layout_paginates_with_back_references() {
        let request = json!({ "resume": make_resume(12), "template": "modern" });
        let (status, body) = send(make_router(), "POST", "/api/v1/layout", Some(request)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["template"], "modern");

        let pages = body["pages"].as_array().unwrap();
        assert!(pages.len() >= 2);
        let indices: Vec<u64> = pages
            .iter()
            .flat_map(|p| p["items"].as_array().unwrap())
            .filter(|item| item["kind"] == "experience")
            .map(|item| item["index"].as_u64().unwrap())
            .collect();
        assert_eq!(indices, (0..12).collect::<Vec<u64>>());
        assert_eq!(pages[0]["number"], 1);
        assert_eq!(pages[1]["continuation"], true);
    }

    #[tokio::test]
    async fn test_layout_uses_default_template() {
        let request = json!({ "resume": make_resume(1) });
        let (status, body) = send(make_router(), "POST", "/api/v1/layout", Some(request)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["template"], "classic");
        assert_eq!(body["pages"].as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_layout_rejects_bad_design() {
        let request = json!({
            "resume": make_resume(1),
            "design": { "font_size_pt": 2.0 }
        });
        let (status, body) = send(make_router(), "POST", "/api/v1/layout", Some(request)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_layout_rejects_unknown_template() {
        let request = json!({ "resume": make_resume(1), "template": "fancy" });
        let (status, _) = send(make_router(), "POST", "/api/v1/layout", Some(request)).await;
        assert!(status.is_client_error());
    }

    #[tokio::test]
    async fn test_edit_applies_and_repaginates() {
        let request = json!({
            "resume": make_resume(3),
            "template": "classic",
            "edit": {
                "section": "experience",
                "index": 2,
                "field": "role",
                "value": "Staff Engineer"
            }
        });
        let (status, body) =
            send(make_router(), "POST", "/api/v1/layout/edit", Some(request)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["resume"]["experience"][2]["role"], "Staff Engineer");

        let items = body["layout"]["pages"][0]["items"].as_array().unwrap();
        let edited = items.iter().find(|item| item["index"] == 2).unwrap();
        assert_eq!(edited["entry"]["role"], "Staff Engineer");
    }

    #[tokio::test]
    async fn test_edit_out_of_range_is_422() {
        let request = json!({
            "resume": make_resume(1),
            "edit": {
                "section": "experience",
                "index": 5,
                "field": { "description": 0 },
                "value": "x"
            }
        });
        let (status, body) =
            send(make_router(), "POST", "/api/v1/layout/edit", Some(request)).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["error"]["code"], "UNPROCESSABLE_ENTITY");
    }
}
