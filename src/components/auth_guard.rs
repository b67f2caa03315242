//! Auth Guard Component
//!
//! Renders protected views only while a session token is present.

use leptos::prelude::*;
use leptos_router::components::Redirect;
use leptos_router::hooks::use_location;

use crate::context::{use_session, SessionContext};

pub const LOGIN_PATH: &str = "/login";

/// Outcome of a guard check. The token read is synchronous, so there is no
/// visible in-between state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardState {
    Authorized,
    Redirecting,
}

impl GuardState {
    pub fn decide(authenticated: bool) -> Self {
        if authenticated {
            GuardState::Authorized
        } else {
            GuardState::Redirecting
        }
    }
}

/// Guard decision for the current token; tracked, so a `Memo` over it
/// follows login and logout
pub fn check(session: &SessionContext) -> GuardState {
    GuardState::decide(session.is_authenticated())
}

/// Build the protected view only when authorized
pub fn guarded<T>(state: GuardState, protected: impl FnOnce() -> T) -> Option<T> {
    match state {
        GuardState::Authorized => Some(protected()),
        GuardState::Redirecting => None,
    }
}

/// Wraps a protected view.
///
/// Re-checked on every navigation and on every login/logout, so a logout
/// from any view leaves the protected page immediately.
#[component]
pub fn AuthGuard(children: ChildrenFn) -> impl IntoView {
    let session = use_session();
    let location = use_location();

    let state = Memo::new(move |_| {
        location.pathname.track();
        check(&session)
    });

    move || match guarded(state.get(), || children().into_any()) {
        Some(view) => view,
        None => {
            log::info!("[GUARD] no session, redirecting to {}", LOGIN_PATH);
            view! { <Redirect path=LOGIN_PATH/> }.into_any()
        }
    }
}
