//! Client-side session controller for a token-auth user API.
//!
//! The controller owns the transient session state (entered credentials,
//! bearer token, fetched user listing, last status message) and turns each
//! user action into exactly one HTTP round trip. Every round trip resolves
//! into a [`SessionEvent`] that the pure reducer in [`state`] folds into
//! the state, so concurrent actions race visibly: whichever resolution is
//! applied last wins, with no ordering correction.

use reqwest::Client;
use serde_json::Value;
use tracing::{debug, warn};

pub mod error;
pub mod protocol;
pub mod state;

use protocol::{CredentialsRequest, TokenResponse, UserRecord};

pub use error::SessionError;
pub use protocol::UserRecord as User;
pub use state::{ActionId, SessionEvent, SessionState};

/// Default base address of the auth API.
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Session controller: one instance per logical session.
///
/// The high-level methods ([`register`](Self::register),
/// [`login`](Self::login), [`list_users`](Self::list_users),
/// [`call_protected`](Self::call_protected)) dispatch the round trip and
/// immediately apply its resolution. The `resolve_*` variants only produce
/// the event, leaving the caller in charge of application order; that is
/// the hook the race semantics hang off.
pub struct SessionClient {
    http: Client,
    server_url: String,
    next_action: u64,
    pub state: SessionState,
}

impl SessionClient {
    pub fn new(server_url: impl Into<String>) -> Self {
        let server_url: String = server_url.into();
        let server_url = server_url.trim_end_matches('/').to_string();
        Self {
            http: Client::new(),
            server_url,
            next_action: 0,
            state: SessionState::default(),
        }
    }

    pub fn server_url(&self) -> &str {
        &self.server_url
    }

    fn begin_action(&mut self) -> ActionId {
        self.next_action += 1;
        ActionId(self.next_action)
    }

    fn apply(&mut self, event: SessionEvent) {
        self.state = std::mem::take(&mut self.state).apply(event);
    }

    /// Register with the credentials currently held in state.
    pub async fn register(&mut self) -> Result<(), SessionError> {
        let action = self.begin_action();
        let event = self.resolve_register(action).await?;
        self.apply(event);
        Ok(())
    }

    /// Log in with the credentials currently held in state.
    pub async fn login(&mut self) -> Result<(), SessionError> {
        let action = self.begin_action();
        let event = self.resolve_login(action).await?;
        self.apply(event);
        Ok(())
    }

    /// Fetch the user listing with the bearer token currently held in
    /// state (possibly empty, producing an unauthenticated request).
    pub async fn list_users(&mut self) -> Result<(), SessionError> {
        let action = self.begin_action();
        let event = self.resolve_list_users(action).await?;
        self.apply(event);
        Ok(())
    }

    /// Call the token-protected endpoint with the current bearer token.
    pub async fn call_protected(&mut self) -> Result<(), SessionError> {
        let action = self.begin_action();
        let event = self.resolve_protected(action).await?;
        self.apply(event);
        Ok(())
    }

    /// Hand out an action id without dispatching anything, for callers
    /// driving `resolve_*` themselves.
    pub fn dispatch(&mut self) -> ActionId {
        self.begin_action()
    }

    /// POST the credentials to the registration endpoint. Only the HTTP
    /// status is inspected; the response body is ignored.
    pub async fn resolve_register(&self, action: ActionId) -> Result<SessionEvent, SessionError> {
        debug!(action = action.0, "dispatching register");
        let resp = self
            .http
            .post(format!("{}/users/", self.server_url))
            .json(&CredentialsRequest::from_state(&self.state))
            .send()
            .await?;
        let ok = resp.status().is_success();
        if !ok {
            warn!(status = %resp.status(), "registration rejected");
        }
        Ok(SessionEvent::RegisterResolved { action, ok })
    }

    /// POST the credentials to the token endpoint. The body is parsed
    /// regardless of status; a success status without a non-empty
    /// `access_token` collapses into the same failure as a rejected one.
    pub async fn resolve_login(&self, action: ActionId) -> Result<SessionEvent, SessionError> {
        debug!(action = action.0, "dispatching login");
        let resp = self
            .http
            .post(format!("{}/token", self.server_url))
            .json(&CredentialsRequest::from_state(&self.state))
            .send()
            .await?;
        let ok = resp.status().is_success();
        let body: TokenResponse = resp.json().await.map_err(SessionError::decode)?;
        let token = if ok && !body.access_token.is_empty() {
            Some(body.access_token)
        } else {
            warn!(action = action.0, "login rejected");
            None
        };
        Ok(SessionEvent::LoginResolved { action, token })
    }

    /// GET the users endpoint with the current bearer token. The status
    /// code is deliberately not checked: any body that decodes as a user
    /// listing replaces the previous one wholesale.
    pub async fn resolve_list_users(&self, action: ActionId) -> Result<SessionEvent, SessionError> {
        debug!(action = action.0, "dispatching user listing fetch");
        let resp = self
            .http
            .get(format!("{}/users/", self.server_url))
            .bearer_auth(&self.state.token)
            .send()
            .await?;
        let users: Vec<UserRecord> = resp.json().await.map_err(SessionError::decode)?;
        debug!(count = users.len(), "user listing fetched");
        Ok(SessionEvent::UsersResolved { action, users })
    }

    /// GET the protected endpoint with the current bearer token. No status
    /// branching: a `msg` field becomes the status message, anything else
    /// is surfaced as its raw JSON serialization.
    pub async fn resolve_protected(&self, action: ActionId) -> Result<SessionEvent, SessionError> {
        debug!(action = action.0, "dispatching protected call");
        let resp = self
            .http
            .get(format!("{}/protected", self.server_url))
            .bearer_auth(&self.state.token)
            .send()
            .await?;
        let body: Value = resp.json().await.map_err(SessionError::decode)?;
        let message = match body.get("msg").and_then(Value::as_str) {
            Some(msg) => msg.to_string(),
            None => body.to_string(),
        };
        Ok(SessionEvent::ProtectedResolved { action, message })
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
