//! In-process session slot used by the server build.

use std::sync::RwLock;

use once_cell::sync::Lazy;

use crate::SessionUser;

static SESSION: Lazy<RwLock<Option<SessionUser>>> = Lazy::new(|| RwLock::new(seed_user()));

/// Seed the slot from `PUBLIKASI_USER_*` so a fresh server has someone signed in.
fn seed_user() -> Option<SessionUser> {
    let name = std::env::var("PUBLIKASI_USER_NAME").ok();
    let email = std::env::var("PUBLIKASI_USER_EMAIL").ok();
    let profile_photo = std::env::var("PUBLIKASI_USER_PHOTO").ok();

    if name.is_none() && email.is_none() {
        return None;
    }

    Some(SessionUser {
        name,
        email,
        profile_photo,
    })
}

pub(crate) fn current() -> Result<Option<SessionUser>, String> {
    SESSION
        .read()
        .map(|slot| slot.clone())
        .map_err(|_| "session store unavailable".to_string())
}

pub(crate) fn end() -> Result<(), String> {
    let mut slot = SESSION
        .write()
        .map_err(|_| "session store unavailable".to_string())?;

    match slot.take() {
        Some(user) => {
            tracing::info!(email = user.email.as_deref().unwrap_or(""), "session ended");
        }
        None => tracing::debug!("logout requested without an active session"),
    }
    Ok(())
}
