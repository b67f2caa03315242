//! Navbar Component
//!
//! Top navigation with session-aware login/logout.

use leptos::prelude::*;
use leptos_router::hooks::{use_location, use_navigate};

use crate::components::auth_guard::LOGIN_PATH;
use crate::context::use_session;

const LINKS: &[(&str, &str)] = &[
    ("/dashboard", "Dashboard"),
    ("/new-task", "Add Task"),
];

#[component]
pub fn Navbar() -> impl IntoView {
    let session = use_session();
    let location = use_location();
    let navigate = use_navigate();

    let logout = move |_: web_sys::MouseEvent| {
        session.logout();
        navigate(LOGIN_PATH, Default::default());
    };

    view! {
        <nav class="navbar">
            <a href="/" class="navbar-brand">"Task Manager"</a>
            <div class="navbar-links">
                {LINKS.iter().map(|(path, label)| {
                    let path = *path;
                    let is_active = move || location.pathname.get() == path;
                    view! {
                        <a href=path class=move || if is_active() { "nav-link active" } else { "nav-link" }>
                            {*label}
                        </a>
                    }
                }).collect_view()}

                <Show
                    when=move || session.is_authenticated()
                    fallback=|| view! { <a href=LOGIN_PATH class="btn btn-primary">"Login"</a> }
                >
                    <button type="button" class="btn btn-primary" on:click=logout.clone()>"Logout"</button>
                </Show>
            </div>
        </nav>
    }
}
