//! Session context for the UI.
//!
//! The token lives in the platform store ([`api::session`]); this module
//! wraps it in an explicit context object so components never reach into
//! storage directly.

use api::session::{make_store, TokenStore};
use dioxus::prelude::*;

/// Authentication state for the application.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SessionState {
    pub token: Option<String>,
}

impl SessionState {
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }
}

/// Get the current session state.
/// Returns a signal that updates when the admin logs in or out.
pub fn use_session() -> Signal<SessionState> {
    use_context::<Signal<SessionState>>()
}

/// Persist a freshly issued token and update the context.
pub fn store_token(session: &mut Signal<SessionState>, token: &str) {
    make_store().set(token);
    session.set(SessionState {
        token: Some(token.to_string()),
    });
}

/// Drop the persisted token and update the context.
pub fn clear_token(session: &mut Signal<SessionState>) {
    make_store().clear();
    session.set(SessionState::default());
}

/// Provider component that loads the persisted token on mount.
/// Wrap your app with this component to enable authenticated calls.
#[component]
pub fn SessionProvider(children: Element) -> Element {
    let session = use_signal(|| SessionState {
        token: make_store().get(),
    });
    use_context_provider(|| session);

    rsx! {
        {children}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // The admin route guard keys off this check before issuing any fetch.
    #[test]
    fn a_session_without_a_token_is_unauthenticated() {
        assert!(!SessionState::default().is_authenticated());
        assert!(!SessionState { token: None }.is_authenticated());
    }

    #[test]
    fn a_stored_token_authenticates_the_session() {
        let state = SessionState {
            token: Some("tok-1".to_string()),
        };
        assert!(state.is_authenticated());
    }
}
