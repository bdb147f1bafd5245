//! Auth client: register, login, logout, and the stored session.

use serde::{Deserialize, Serialize};
use tracing::debug;

use planner_models::{Session, UserSummary};
use planner_persistence::SessionStore;

use crate::error::{ClientError, Result};

#[derive(Debug, Serialize)]
struct RegisterBody<'a> {
    name: &'a str,
    email: &'a str,
    password: &'a str,
}

#[derive(Debug, Serialize)]
struct LoginBody<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Debug, Deserialize)]
struct LoginReply {
    token: String,
    user: UserSummary,
}

#[derive(Debug, Deserialize)]
struct ErrorReply {
    #[serde(default)]
    error: String,
}

/// Client for the auth endpoints of a running Planner API server.
///
/// A successful login is persisted through the session store; nothing is
/// written for a failed one.
pub struct AuthClient {
    http: reqwest::Client,
    base_url: String,
    sessions: SessionStore,
}

impl AuthClient {
    /// Creates a client against the given base URL, e.g.
    /// `http://127.0.0.1:5000`.
    pub fn new(base_url: impl Into<String>, sessions: SessionStore) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            sessions,
        }
    }

    /// Registers a new account and logs in with the same credentials.
    ///
    /// The two calls are sequential; the session is only stored once the
    /// follow-up login succeeds.
    pub async fn register(&self, name: &str, email: &str, password: &str) -> Result<Session> {
        let url = format!("{}/api/auth/register", self.base_url);
        let response = self
            .http
            .post(&url)
            .json(&RegisterBody {
                name,
                email,
                password,
            })
            .send()
            .await?;
        Self::check(response).await?;

        debug!("registered {}, logging in", email);
        self.login(email, password).await
    }

    /// Verifies credentials against the server and stores the session.
    pub async fn login(&self, email: &str, password: &str) -> Result<Session> {
        let url = format!("{}/api/auth/login", self.base_url);
        let response = self
            .http
            .post(&url)
            .json(&LoginBody { email, password })
            .send()
            .await?;
        let response = Self::check(response).await?;

        let reply: LoginReply = response.json().await?;
        let session = Session {
            token: reply.token,
            user: reply.user,
        };
        self.sessions.save(&session)?;
        Ok(session)
    }

    /// Returns the stored session, if logged in.
    pub fn current(&self) -> Result<Option<Session>> {
        Ok(self.sessions.load()?)
    }

    /// Clears the stored session. Idempotent.
    pub fn logout(&self) -> Result<()> {
        Ok(self.sessions.clear()?)
    }

    /// Turns a non-success status into [`ClientError::Api`] carrying the
    /// server's error message.
    async fn check(response: reqwest::Response) -> Result<reqwest::Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let message = match response.json::<ErrorReply>().await {
            Ok(reply) if !reply.error.is_empty() => reply.error,
            _ => status
                .canonical_reason()
                .unwrap_or("request failed")
                .to_string(),
        };
        Err(ClientError::Api {
            status: status.as_u16(),
            message,
        })
    }
}
