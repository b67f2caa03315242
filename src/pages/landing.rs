//! Landing Page

use leptos::prelude::*;

use crate::context::use_session;
use crate::dialog::alert;

#[component]
pub fn LandingPage() -> impl IntoView {
    let session = use_session();

    let logout = move |_: web_sys::MouseEvent| {
        session.logout();
        alert("You've been logged out!");
    };

    view! {
        <section class="landing">
            <h1>"Welcome to Task Manager"</h1>
            <p class="landing-lead">
                "We help you stay organized and never miss a task. Plan, prioritize, and get things done with ease!"
            </p>
            <div class="landing-actions">
                <Show
                    when=move || session.is_authenticated()
                    fallback=|| view! {
                        <a href="/login" class="btn btn-primary">"Login"</a>
                        <a href="/register" class="btn btn-outline">"Register"</a>
                    }
                >
                    <a href="/dashboard" class="btn btn-outline">"Go to dashboard"</a>
                    <button type="button" class="btn btn-primary" on:click=logout>"Logout"</button>
                </Show>
            </div>
        </section>
    }
}
