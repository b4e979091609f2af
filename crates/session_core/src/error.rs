use thiserror::Error;

/// Faults that escape an action instead of being folded into the status
/// message. HTTP-status failures on register/login are part of the normal
/// resolution path and never show up here.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("transport failure talking to the auth API: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("unexpected response body from the auth API: {0}")]
    Decode(#[source] reqwest::Error),
}

impl SessionError {
    pub(crate) fn decode(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::Decode(err)
        } else {
            Self::Transport(err)
        }
    }
}
