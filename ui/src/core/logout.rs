//! Logout flow: one request at a time, replace-navigate on success, tell the
//! user on failure.

use std::cell::Cell;
use std::rc::Rc;

use super::auth::AuthService;

/// Prefix of the notification shown when logout fails.
pub const FAILURE_PREFIX: &str = "Gagal logout: ";

/// Router capability used after a successful logout.
pub trait RouteNavigator {
    /// Navigate to `path`, replacing the current history entry.
    fn navigate_replace(&self, path: &str);
}

/// Blocking user notification.
pub trait Notify {
    fn notify(&self, message: &str);
}

/// Shared in-flight marker. The UI binds it to a signal so the button can react.
pub trait BusyFlag {
    fn is_busy(&self) -> bool;

    fn set_busy(&self, busy: bool);
}

impl BusyFlag for Rc<Cell<bool>> {
    fn is_busy(&self) -> bool {
        self.get()
    }

    fn set_busy(&self, busy: bool) {
        self.set(busy);
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogoutOutcome {
    LoggedOut,
    Failed(String),
    /// Another logout was already running.
    Suppressed,
}

/// Clears the busy flag however the flow ends, including when the future is dropped.
struct BusyGuard<'a, B: BusyFlag>(&'a B);

impl<'a, B: BusyFlag> BusyGuard<'a, B> {
    fn acquire(flag: &'a B) -> Option<Self> {
        if flag.is_busy() {
            return None;
        }
        flag.set_busy(true);
        Some(Self(flag))
    }
}

impl<B: BusyFlag> Drop for BusyGuard<'_, B> {
    fn drop(&mut self) {
        self.0.set_busy(false);
    }
}

pub async fn run_logout<B, N, M>(
    service: &dyn AuthService,
    busy: &B,
    navigator: &N,
    notifier: &M,
    login_path: &str,
) -> LogoutOutcome
where
    B: BusyFlag,
    N: RouteNavigator + ?Sized,
    M: Notify + ?Sized,
{
    let Some(_guard) = BusyGuard::acquire(busy) else {
        tracing::debug!("logout already in flight; ignoring");
        return LogoutOutcome::Suppressed;
    };

    match service.logout().await {
        Ok(()) => {
            tracing::info!(redirect = login_path, "logged out");
            navigator.navigate_replace(login_path);
            LogoutOutcome::LoggedOut
        }
        Err(err) => {
            tracing::error!(%err, "logout failed");
            let message = err.user_message().to_string();
            notifier.notify(&format!("{FAILURE_PREFIX}{message}"));
            LogoutOutcome::Failed(message)
        }
    }
}
