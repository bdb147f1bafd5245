//! Registration and login handlers.

use axum::{extract::State, http::StatusCode, Json};
use tracing::info;

use planner_models::Role;

use crate::error::{ApiError, Result};
use crate::state::AppState;
use crate::types::{AuthResponse, LoginRequest, RegisterRequest, SuccessResponse};

/// POST /api/auth/register - Register a new user.
///
/// Returns 201 with a success message; no token is issued here. Clients
/// follow up with a login call.
pub async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<SuccessResponse>)> {
    let role = parse_role(req.role.as_deref())?;
    let user = state
        .users
        .register(&req.name, &req.email, &req.password, role)?;

    info!("registered user {}", user.email);

    Ok((
        StatusCode::CREATED,
        Json(SuccessResponse {
            message: "user registered".to_string(),
        }),
    ))
}

/// POST /api/auth/login - Verify credentials and issue a session token.
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<AuthResponse>> {
    let user = state.users.login(&req.email, &req.password)?;
    let token = state
        .signer
        .issue(&user)
        .map_err(|e| ApiError::Internal(e.to_string()))?;

    Ok(Json(AuthResponse {
        token,
        user: user.summary(),
    }))
}

fn parse_role(s: Option<&str>) -> Result<Option<Role>> {
    match s {
        None => Ok(None),
        Some("user") => Ok(Some(Role::User)),
        Some("admin") => Ok(Some(Role::Admin)),
        Some(other) => Err(ApiError::BadRequest(format!("unknown role: {}", other))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ApiConfig;
    use tempfile::tempdir;

    fn make_test_state() -> AppState {
        let dir = tempdir().unwrap();
        let path = dir.path().to_path_buf();
        std::mem::forget(dir);
        AppState::open(ApiConfig::default(), path).unwrap()
    }

    fn register_request() -> RegisterRequest {
        RegisterRequest {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            password: "s3cret".to_string(),
            role: None,
        }
    }

    #[tokio::test]
    async fn test_register_then_login() {
        let state = make_test_state();

        let (status, _) = register(State(state.clone()), Json(register_request()))
            .await
            .unwrap();
        assert_eq!(status, StatusCode::CREATED);

        let response = login(
            State(state),
            Json(LoginRequest {
                email: "ada@example.com".to_string(),
                password: "s3cret".to_string(),
            }),
        )
        .await
        .unwrap();

        assert!(!response.token.is_empty());
        assert_eq!(response.user.email, "ada@example.com");
    }

    #[tokio::test]
    async fn test_register_missing_field() {
        let state = make_test_state();
        let mut req = register_request();
        req.password = String::new();

        let result = register(State(state), Json(req)).await;
        assert!(matches!(result, Err(ApiError::BadRequest(_))));
    }

    #[tokio::test]
    async fn test_register_duplicate_email() {
        let state = make_test_state();

        register(State(state.clone()), Json(register_request()))
            .await
            .unwrap();
        let result = register(State(state), Json(register_request())).await;

        assert!(matches!(result, Err(ApiError::Conflict(_))));
    }

    #[tokio::test]
    async fn test_login_wrong_password() {
        let state = make_test_state();
        register(State(state.clone()), Json(register_request()))
            .await
            .unwrap();

        let result = login(
            State(state),
            Json(LoginRequest {
                email: "ada@example.com".to_string(),
                password: "wrong".to_string(),
            }),
        )
        .await;

        assert!(matches!(result, Err(ApiError::Unauthorized(_))));
    }

    #[tokio::test]
    async fn test_register_bad_role() {
        let state = make_test_state();
        let mut req = register_request();
        req.role = Some("root".to_string());

        let result = register(State(state), Json(req)).await;
        assert!(matches!(result, Err(ApiError::BadRequest(_))));
    }

    #[test]
    fn test_parse_role() {
        assert_eq!(parse_role(None).unwrap(), None);
        assert_eq!(parse_role(Some("user")).unwrap(), Some(Role::User));
        assert_eq!(parse_role(Some("admin")).unwrap(), Some(Role::Admin));
        assert!(parse_role(Some("other")).is_err());
    }
}
