//! Server functions for the publication desk session.
//!
//! The navbar treats these as its auth collaborator: `current_user` reports who is
//! signed in and `logout` ends the session. Session storage only exists on the
//! server build (`server` feature).

use dioxus::prelude::*;
use serde::{Deserialize, Serialize};

pub use dioxus::prelude::ServerFnError;

// Session tests run under `--features server` only.
#[cfg(feature = "server")]
mod session;

/// User record as the session service reports it. Every field may be missing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_photo: Option<String>,
}

/// Returns the signed-in user, or `None` when no session is active.
#[server(GetCurrentUser)]
pub async fn current_user() -> Result<Option<SessionUser>, ServerFnError> {
    session::current().map_err(ServerFnError::new)
}

/// Ends the active session. Ending an already-ended session is not an error.
#[server(EndSession)]
pub async fn logout() -> Result<(), ServerFnError> {
    session::end().map_err(ServerFnError::new)
}
