//! Router configuration and server setup.

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tracing::info;

use crate::config::ApiConfig;
use crate::handlers;
use crate::state::AppState;

/// Creates the API router with all routes configured.
pub fn create_router(state: AppState) -> Router {
    // Build CORS layer
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Health
        .route("/api/health", get(handlers::health))
        // Auth
        .route("/api/auth/register", post(handlers::register))
        .route("/api/auth/login", post(handlers::login))
        // Events
        .route(
            "/api/events",
            get(handlers::list_events).post(handlers::create_event),
        )
        .route(
            "/api/events/:id",
            get(handlers::get_event)
                .put(handlers::update_event)
                .delete(handlers::delete_event),
        )
        .route("/api/events/:id/attendees", post(handlers::add_attendee))
        .route("/api/events/:id/rsvp", post(handlers::rsvp))
        // Apply middleware
        .layer(cors)
        .with_state(state)
}

/// Starts the API server.
pub async fn serve(config: ApiConfig, state: AppState) -> Result<(), std::io::Error> {
    let addr = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("API server listening on {}", addr);
    axum::serve(listener, create_router(state)).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum_test::TestServer;
    use serde_json::json;
    use tempfile::tempdir;

    fn make_test_server() -> TestServer {
        let dir = tempdir().unwrap();
        let path = dir.path().to_path_buf();
        std::mem::forget(dir);

        let state = AppState::open(ApiConfig::default(), path).unwrap();
        TestServer::new(create_router(state)).unwrap()
    }

    fn event_body(title: &str, date: &str) -> serde_json::Value {
        json!({
            "title": title,
            "date": date,
            "start_time": "18:00:00",
            "end_time": "21:00:00",
            "location": "Rooftop",
            "category": "Party"
        })
    }

    async fn create_event(server: &TestServer, title: &str, date: &str) -> String {
        let response = server.post("/api/events").json(&event_body(title, date)).await;
        response.assert_status(axum::http::StatusCode::CREATED);
        let body: serde_json::Value = response.json();
        body["id"].as_str().unwrap().to_string()
    }

    #[tokio::test]
    async fn test_health_endpoint() {
        let server = make_test_server();

        let response = server.get("/api/health").await;
        response.assert_status_ok();

        let body: serde_json::Value = response.json();
        assert_eq!(body["status"], "ok");
        assert!(!body["version"].as_str().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_register_and_login_flow() {
        let server = make_test_server();

        let response = server
            .post("/api/auth/register")
            .json(&json!({
                "name": "Ada",
                "email": "ada@example.com",
                "password": "s3cret"
            }))
            .await;
        response.assert_status(axum::http::StatusCode::CREATED);

        let response = server
            .post("/api/auth/login")
            .json(&json!({
                "email": "ada@example.com",
                "password": "s3cret"
            }))
            .await;
        response.assert_status_ok();

        let body: serde_json::Value = response.json();
        assert!(!body["token"].as_str().unwrap().is_empty());
        assert_eq!(body["user"]["email"], "ada@example.com");
        assert_eq!(body["user"]["role"], "user");
    }

    #[tokio::test]
    async fn test_register_duplicate_email_conflicts() {
        let server = make_test_server();
        let body = json!({
            "name": "Ada",
            "email": "ada@example.com",
            "password": "s3cret"
        });

        server.post("/api/auth/register").json(&body).await;
        let response = server.post("/api/auth/register").json(&body).await;
        response.assert_status(axum::http::StatusCode::CONFLICT);
    }

    #[tokio::test]
    async fn test_register_missing_fields_rejected() {
        let server = make_test_server();

        let response = server
            .post("/api/auth/register")
            .json(&json!({ "email": "ada@example.com" }))
            .await;
        response.assert_status(axum::http::StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_login_wrong_password_unauthorized() {
        let server = make_test_server();

        server
            .post("/api/auth/register")
            .json(&json!({
                "name": "Ada",
                "email": "ada@example.com",
                "password": "s3cret"
            }))
            .await;

        let response = server
            .post("/api/auth/login")
            .json(&json!({
                "email": "ada@example.com",
                "password": "wrong"
            }))
            .await;
        response.assert_status(axum::http::StatusCode::UNAUTHORIZED);

        // Unknown email gets the same response as a wrong password
        let response = server
            .post("/api/auth/login")
            .json(&json!({
                "email": "nobody@example.com",
                "password": "s3cret"
            }))
            .await;
        response.assert_status(axum::http::StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_event_crud() {
        let server = make_test_server();

        let id = create_event(&server, "Launch Party", "2027-03-01").await;

        let response = server.get(&format!("/api/events/{}", id)).await;
        response.assert_status_ok();
        let body: serde_json::Value = response.json();
        assert_eq!(body["title"], "Launch Party");

        let mut update = event_body("Launch Party v2", "2027-03-01");
        update["location"] = json!("Warehouse");
        let response = server
            .put(&format!("/api/events/{}", id))
            .json(&update)
            .await;
        response.assert_status_ok();

        let body: serde_json::Value = server.get(&format!("/api/events/{}", id)).await.json();
        assert_eq!(body["title"], "Launch Party v2");
        assert_eq!(body["location"], "Warehouse");
        // Update keeps the original id
        assert_eq!(body["id"], id);

        let response = server.delete(&format!("/api/events/{}", id)).await;
        response.assert_status_ok();

        let response = server.get(&format!("/api/events/{}", id)).await;
        response.assert_status_not_found();
    }

    #[tokio::test]
    async fn test_create_event_invalid_times_rejected() {
        let server = make_test_server();

        let mut body = event_body("Backwards", "2027-03-01");
        body["start_time"] = json!("21:00:00");
        body["end_time"] = json!("18:00:00");

        let response = server.post("/api/events").json(&body).await;
        response.assert_status(axum::http::StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_list_events_filters_and_paginates() {
        let server = make_test_server();

        for i in 0..5 {
            create_event(&server, &format!("Meetup {}", i), "2027-04-10").await;
        }
        create_event(&server, "Unrelated gala", "2027-04-11").await;

        let response = server
            .get("/api/events")
            .add_query_param("search", "meetup")
            .add_query_param("page_size", "6")
            .await;
        response.assert_status_ok();

        let body: serde_json::Value = response.json();
        assert_eq!(body["total"], 5);
        assert_eq!(body["events"].as_array().unwrap().len(), 5);

        // Unknown page size falls back to the default
        let response = server
            .get("/api/events")
            .add_query_param("page_size", "7")
            .await;
        let body: serde_json::Value = response.json();
        assert_eq!(body["total"], 6);
    }

    #[tokio::test]
    async fn test_list_events_hides_past_by_default() {
        let server = make_test_server();

        create_event(&server, "Long gone", "2001-01-01").await;
        create_event(&server, "Upcoming", "2099-01-01").await;

        let body: serde_json::Value = server.get("/api/events").await.json();
        assert_eq!(body["total"], 1);
        assert_eq!(body["events"][0]["title"], "Upcoming");

        let body: serde_json::Value = server
            .get("/api/events")
            .add_query_param("include_past", "true")
            .await
            .json();
        assert_eq!(body["total"], 2);
    }

    #[tokio::test]
    async fn test_list_events_sorting() {
        let server = make_test_server();

        create_event(&server, "Beta", "2027-05-02").await;
        create_event(&server, "Alpha", "2027-05-01").await;

        let body: serde_json::Value = server
            .get("/api/events")
            .add_query_param("sort", "title")
            .add_query_param("order", "asc")
            .await
            .json();
        assert_eq!(body["events"][0]["title"], "Alpha");

        let body: serde_json::Value = server
            .get("/api/events")
            .add_query_param("sort", "date")
            .add_query_param("order", "desc")
            .await
            .json();
        assert_eq!(body["events"][0]["title"], "Beta");
    }

    #[tokio::test]
    async fn test_attendees_and_rsvp() {
        let server = make_test_server();
        let id = create_event(&server, "Dinner", "2027-06-01").await;

        let response = server
            .post(&format!("/api/events/{}/attendees", id))
            .json(&json!({ "email": "guest@example.com" }))
            .await;
        response.assert_status(axum::http::StatusCode::CREATED);

        // Duplicate invite conflicts
        let response = server
            .post(&format!("/api/events/{}/attendees", id))
            .json(&json!({ "email": "guest@example.com" }))
            .await;
        response.assert_status(axum::http::StatusCode::CONFLICT);

        let response = server
            .post(&format!("/api/events/{}/rsvp", id))
            .json(&json!({ "email": "guest@example.com", "status": "Yes" }))
            .await;
        response.assert_status_ok();

        let body: serde_json::Value = server.get(&format!("/api/events/{}", id)).await.json();
        assert_eq!(body["attendees"][0]["status"], "Yes");
    }

    #[tokio::test]
    async fn test_rsvp_unknown_attendee_not_found() {
        let server = make_test_server();
        let id = create_event(&server, "Dinner", "2027-06-01").await;

        let response = server
            .post(&format!("/api/events/{}/rsvp", id))
            .json(&json!({ "email": "nobody@example.com", "status": "Yes" }))
            .await;
        response.assert_status_not_found();
    }

    #[tokio::test]
    async fn test_unknown_event_not_found() {
        let server = make_test_server();

        let response = server.get("/api/events/evt-missing").await;
        response.assert_status_not_found();

        let response = server.delete("/api/events/evt-missing").await;
        response.assert_status_not_found();
    }
}
