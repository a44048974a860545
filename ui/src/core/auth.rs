//! The auth collaborator seam: who is signed in, and how to sign them out.

use async_trait::async_trait;
use thiserror::Error;

use super::user::CurrentUser;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    /// The service refused the request. The message is shown to the user as is.
    #[error("{0}")]
    Rejected(String),
    /// The request never completed (network, serialization, registration).
    #[error("auth service unreachable: {0}")]
    Transport(String),
}

impl AuthError {
    /// Message suitable for a user-facing notification.
    pub fn user_message(&self) -> &str {
        match self {
            Self::Rejected(message) | Self::Transport(message) => message,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthStatus {
    pub logging_out: bool,
    pub error: Option<AuthError>,
}

impl AuthStatus {
    pub fn is_faulted(&self) -> bool {
        self.error.is_some()
    }
}

/// Session owner consumed by the navbar. Implementations run on the UI thread.
#[async_trait(?Send)]
pub trait AuthService {
    async fn current_user(&self) -> Result<Option<CurrentUser>, AuthError>;

    async fn logout(&self) -> Result<(), AuthError>;
}
