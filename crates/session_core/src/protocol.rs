//! Wire types for the auth API.

use serde::{Deserialize, Serialize};

use crate::state::SessionState;

/// Credentials payload shared by the registration and token endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CredentialsRequest {
    pub username: String,
    pub password: String,
}

impl CredentialsRequest {
    pub(crate) fn from_state(state: &SessionState) -> Self {
        Self {
            username: state.username.clone(),
            password: state.password.clone(),
        }
    }
}

/// Token endpoint response. A missing `access_token` field decodes as
/// empty, which the login path treats the same as a rejected status.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    #[serde(default)]
    pub access_token: String,
}

/// One row of the user listing. Extra server-side fields are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: i64,
    pub username: String,
}
