//! Auth context shared with the navbar.
//!
//! Platforms call [`use_auth_provider`] once near the root; components read it
//! back with [`use_auth`]. The context loads the current user on mount and keeps
//! the logout in-flight flag in a signal so buttons re-render when it flips.

use std::rc::Rc;

use async_trait::async_trait;
use dioxus::prelude::*;

use crate::core::auth::{AuthError, AuthService, AuthStatus};
use crate::core::logout::{run_logout, BusyFlag, LogoutOutcome, Notify, RouteNavigator};
use crate::core::user::CurrentUser;

#[derive(Clone)]
pub struct AuthContext {
    service: Rc<dyn AuthService>,
    user: Signal<Option<CurrentUser>>,
    error: Signal<Option<AuthError>>,
    logging_out: Signal<bool>,
}

impl AuthContext {
    pub fn current_user(&self) -> Option<CurrentUser> {
        self.user.cloned()
    }

    pub fn status(&self) -> AuthStatus {
        AuthStatus {
            logging_out: (self.logging_out)(),
            error: self.error.cloned(),
        }
    }

    /// Reload the current user. A failure marks the context as faulted; a
    /// success clears an earlier fault.
    pub async fn refresh(&self) {
        let mut user = self.user;
        let mut error = self.error;
        match self.service.current_user().await {
            Ok(current) => {
                user.set(current);
                if error.peek().is_some() {
                    error.set(None);
                }
            }
            Err(err) => {
                tracing::error!(%err, "could not load current user");
                error.set(Some(err));
            }
        }
    }

    /// Sign out through the service. The signed-in user is forgotten once the
    /// service confirms.
    pub async fn logout<N, M>(
        &self,
        navigator: &N,
        notifier: &M,
        login_path: &str,
    ) -> LogoutOutcome
    where
        N: RouteNavigator + ?Sized,
        M: Notify + ?Sized,
    {
        let outcome = run_logout(
            self.service.as_ref(),
            &self.logging_out,
            navigator,
            notifier,
            login_path,
        )
        .await;
        if outcome == LogoutOutcome::LoggedOut {
            let mut user = self.user;
            user.set(None);
        }
        outcome
    }
}

/// Provide an [`AuthContext`] built around `service` to all descendants.
pub fn use_auth_provider(service: impl FnOnce() -> Rc<dyn AuthService>) -> AuthContext {
    let context = use_context_provider(|| AuthContext {
        service: service(),
        user: Signal::new(None),
        error: Signal::new(None),
        logging_out: Signal::new(false),
    });

    let loader = context.clone();
    use_future(move || {
        let loader = loader.clone();
        async move { loader.refresh().await }
    });

    context
}

pub fn use_auth() -> Option<AuthContext> {
    try_use_context::<AuthContext>()
}

impl BusyFlag for Signal<bool> {
    fn is_busy(&self) -> bool {
        *self.peek()
    }

    fn set_busy(&self, busy: bool) {
        let mut flag = *self;
        flag.set(busy);
    }
}

impl RouteNavigator for Navigator {
    fn navigate_replace(&self, path: &str) {
        if let Some(failure) = self.replace(path.to_string()) {
            tracing::warn!(path, ?failure, "navigation rejected");
        }
    }
}

/// [`AuthService`] backed by the `api` server functions.
#[derive(Debug, Clone, Copy, Default)]
pub struct ServerAuth;

impl ServerAuth {
    pub fn shared() -> Rc<dyn AuthService> {
        Rc::new(Self)
    }
}

fn from_server(err: api::ServerFnError) -> AuthError {
    match err {
        api::ServerFnError::ServerError(message) => AuthError::Rejected(message),
        other => AuthError::Transport(other.to_string()),
    }
}

#[async_trait(?Send)]
impl AuthService for ServerAuth {
    async fn current_user(&self) -> Result<Option<CurrentUser>, AuthError> {
        api::current_user()
            .await
            .map(|user| user.map(CurrentUser::from))
            .map_err(from_server)
    }

    async fn logout(&self) -> Result<(), AuthError> {
        api::logout().await.map_err(from_server)
    }
}
