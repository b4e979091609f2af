//! Session state container and its pure reducer.

use serde::{Deserialize, Serialize};

use crate::protocol::UserRecord;

/// Monotonic identifier handed out when an action is dispatched, carried
/// on its resolution event. No cancellation or reordering keys off it; it
/// exists so the arrival order of racing actions is observable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ActionId(pub u64);

/// Transient client-side session state. Nothing here is persisted, and
/// the token is opaque: it is never inspected or refreshed locally.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionState {
    pub username: String,
    pub password: String,
    /// Bearer token; empty until a login succeeds.
    pub token: String,
    pub users: Vec<UserRecord>,
    /// Outcome of the most recently applied action; no history is kept.
    pub message: String,
    /// Action whose resolution was applied last.
    pub last_applied: Option<ActionId>,
}

/// Resolution of one round trip, folded into state by
/// [`SessionState::apply`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SessionEvent {
    RegisterResolved {
        action: ActionId,
        ok: bool,
    },
    /// `token` is `Some` only for a success status carrying a non-empty
    /// `access_token`; every other outcome is the same failure.
    LoginResolved {
        action: ActionId,
        token: Option<String>,
    },
    UsersResolved {
        action: ActionId,
        users: Vec<UserRecord>,
    },
    ProtectedResolved {
        action: ActionId,
        message: String,
    },
}

impl SessionState {
    /// Fold one resolution event into the state. Events are applied in
    /// arrival order: whichever resolves last wins, regardless of the
    /// order the actions were triggered in.
    #[must_use]
    pub fn apply(mut self, event: SessionEvent) -> Self {
        match event {
            SessionEvent::RegisterResolved { action, ok } => {
                self.message = if ok {
                    "User registered!"
                } else {
                    "Registration failed."
                }
                .to_string();
                self.last_applied = Some(action);
            }
            SessionEvent::LoginResolved { action, token } => {
                match token {
                    Some(token) => {
                        self.token = token;
                        self.message = "Logged in!".to_string();
                    }
                    // A failed login leaves any previously stored token alone.
                    None => self.message = "Login failed.".to_string(),
                }
                self.last_applied = Some(action);
            }
            SessionEvent::UsersResolved { action, users } => {
                self.users = users;
                self.last_applied = Some(action);
            }
            SessionEvent::ProtectedResolved { action, message } => {
                self.message = message;
                self.last_applied = Some(action);
            }
        }
        self
    }
}

#[cfg(test)]
#[path = "tests/state_tests.rs"]
mod tests;
