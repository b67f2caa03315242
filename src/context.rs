//! Application Context
//!
//! Session state shared with every page via the Leptos context API.

use leptos::prelude::*;

use crate::session::{Session, SessionWriter};

/// Reactive view of the session token.
///
/// The signal mirrors what is persisted in the [`Session`]; both are only
/// written through [`SessionWriter`], so readers never touch storage directly.
#[derive(Clone, Copy)]
pub struct SessionContext {
    /// Current token - read
    token: ReadSignal<Option<String>>,
    /// Current token - write
    write_token: WriteSignal<Option<String>>,
    session: StoredValue<Session>,
}

impl SessionContext {
    pub fn new(session: Session) -> Self {
        let (token, write_token) = signal(session.get());
        Self {
            token,
            write_token,
            session: StoredValue::new(session),
        }
    }

    /// Tracked: re-runs the caller whenever login/logout happens
    pub fn is_authenticated(&self) -> bool {
        self.token.with(Option::is_some)
    }

    /// Untracked token read, for attaching to outgoing requests
    pub fn token_untracked(&self) -> Option<String> {
        self.token.get_untracked()
    }

    pub fn logout(&self) {
        self.clear_token();
    }
}

impl SessionWriter for SessionContext {
    fn set_token(&self, token: String) {
        self.session.with_value(|s| s.set(&token));
        log::info!("[SESSION] logged in");
        self.write_token.set(self.session.with_value(Session::get));
    }

    fn clear_token(&self) {
        self.session.with_value(Session::clear);
        log::info!("[SESSION] logged out");
        self.write_token.set(None);
    }
}

/// Get the session context provided by `App`
pub fn use_session() -> SessionContext {
    expect_context::<SessionContext>()
}
