//! Session State
//!
//! The logged-in user, as an explicit context object. A [`SessionContext`]
//! exists only between a successful login and the next logout; it is never
//! written to disk.

use std::sync::Arc;

use gpui::{Context, EventEmitter};
use tracing::{info, warn};

use crate::api::StoreApi;
use crate::error::{Error, Result};
use crate::services::run_in_tokio;
use crate::states::{BestieGlobalStore, Route, UIEvent};

/// Identity of the logged-in user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionContext {
    user_id: Arc<str>,
    user_name: Option<Arc<str>>,
}

impl SessionContext {
    pub fn new(user_id: impl Into<Arc<str>>, user_name: Option<String>) -> Self {
        let user_name = user_name
            .map(|name| name.trim().to_string())
            .filter(|name| !name.is_empty())
            .map(Into::into);
        Self {
            user_id: user_id.into(),
            user_name,
        }
    }

    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    pub fn user_name(&self) -> Option<&str> {
        self.user_name.as_deref()
    }
}

/// Credentials collected by the login form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    pub email_or_mobile: String,
    pub password: String,
}

impl Credentials {
    /// Reject blank fields before any network call
    pub fn validate(&self) -> Result<()> {
        if self.email_or_mobile.trim().is_empty() {
            return Err(Error::Invalid {
                message: "email or mobile is required".to_string(),
            });
        }
        if self.password.is_empty() {
            return Err(Error::Invalid {
                message: "password is required".to_string(),
            });
        }
        Ok(())
    }
}

/// Log in, then look up the display name. A failed name lookup still
/// yields a session.
pub async fn establish_session(store: StoreApi, credentials: Credentials) -> Result<SessionContext> {
    credentials.validate()?;
    let user_id = store
        .login(&credentials.email_or_mobile, &credentials.password)
        .await?;
    let user_name = match store.fetch_user_name(&user_id).await {
        Ok(name) => Some(name),
        Err(e) => {
            warn!(user_id = %user_id, error = %e, "Failed to fetch user name");
            None
        }
    };
    Ok(SessionContext::new(user_id, user_name))
}

/// Session holder
#[derive(Debug, Default)]
pub struct SessionState {
    context: Option<SessionContext>,
    submitting: bool,
}

impl EventEmitter<UIEvent> for SessionState {}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    // ==================== Getters ====================

    pub fn context(&self) -> Option<&SessionContext> {
        self.context.as_ref()
    }

    pub fn is_logged_in(&self) -> bool {
        self.context.is_some()
    }

    /// Whether a login request is in flight
    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    // ==================== Lifecycle ====================

    /// Submit credentials. On success the session opens and the app routes
    /// Home; on failure an error toast is emitted and nothing changes.
    pub fn login(&mut self, credentials: Credentials, cx: &mut Context<Self>) {
        if self.submitting {
            return;
        }
        self.submitting = true;
        cx.notify();

        let store = cx.global::<BestieGlobalStore>().services().store().clone();
        cx.spawn(async move |this, cx| {
            let result = run_in_tokio(establish_session(store, credentials)).await;
            let _ = this.update(cx, |state, cx| state.finish_login(result, cx));
        })
        .detach();
    }

    fn finish_login(&mut self, result: Result<SessionContext>, cx: &mut Context<Self>) {
        self.submitting = false;
        match result {
            Ok(context) => {
                info!(user_id = context.user_id(), "Session opened");
                self.context = Some(context);
                let store = cx.global::<BestieGlobalStore>().clone();
                store.go_to(Route::Home, cx);
            }
            Err(e) => {
                warn!(error = %e, "Login failed");
                cx.emit(UIEvent::error(e.to_string()));
            }
        }
        cx.notify();
    }

    /// Destroy the session. Session-scoped views observe this and drop
    /// their controllers.
    pub fn logout(&mut self, cx: &mut Context<Self>) {
        if let Some(context) = self.context.take() {
            info!(user_id = context.user_id(), "Session closed");
        }
        let store = cx.global::<BestieGlobalStore>().clone();
        store.go_to(Route::Home, cx);
        cx.notify();
    }
}

#[cfg(test)]
mod tests {
    use gpui::TestAppContext;

    use super::*;
    use crate::states::fixtures::install_store;

    #[test]
    fn test_blank_name_is_absent() {
        let context = SessionContext::new("7", Some("  ".to_string()));
        assert_eq!(context.user_id(), "7");
        assert_eq!(context.user_name(), None);

        let context = SessionContext::new("7", Some(" Asha ".to_string()));
        assert_eq!(context.user_name(), Some("Asha"));
    }

    #[test]
    fn test_credentials_validation() {
        let mut credentials = Credentials::default();
        assert!(credentials.validate().is_err());
        credentials.email_or_mobile = "a@b.com".to_string();
        assert!(credentials.validate().is_err());
        credentials.password = "pw".to_string();
        assert!(credentials.validate().is_ok());
    }

    #[tokio::test]
    async fn test_blank_credentials_skip_network() {
        let store = StoreApi::new("http://127.0.0.1:9");
        let err = establish_session(store, Credentials::default())
            .await
            .expect_err("invalid");
        assert!(matches!(err, Error::Invalid { .. }));
    }

    #[gpui::test]
    fn test_logout_clears_session_and_routes_home(cx: &mut TestAppContext) {
        let store = cx.update(install_store);
        let session = store.session_state();

        cx.update(|cx| {
            session.update(cx, |state, cx| {
                state.finish_login(Ok(SessionContext::new("7", Some("Asha".to_string()))), cx)
            });
            store.go_to(Route::Products, cx);
        });
        cx.read(|cx| {
            assert!(session.read(cx).is_logged_in());
            assert_eq!(store.read(cx).route(), Route::Products);
        });

        cx.update(|cx| session.update(cx, |state, cx| state.logout(cx)));
        cx.read(|cx| {
            assert!(session.read(cx).context().is_none());
            assert_eq!(store.read(cx).route(), Route::Home);
        });
    }

    #[gpui::test]
    fn test_failed_login_keeps_session_closed(cx: &mut TestAppContext) {
        let store = cx.update(install_store);
        let session = store.session_state();

        cx.update(|cx| {
            session.update(cx, |state, cx| {
                state.finish_login(
                    Err(Error::LoginFailed {
                        message: "Invalid credentials".to_string(),
                    }),
                    cx,
                )
            })
        });
        cx.read(|cx| {
            let state = session.read(cx);
            assert!(!state.is_logged_in());
            assert!(!state.is_submitting());
        });
    }
}
