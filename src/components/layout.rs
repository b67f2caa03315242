//! Page Layout
//!
//! Shared shell around every route.

use leptos::prelude::*;

use crate::components::Navbar;

#[component]
pub fn Layout(children: Children) -> impl IntoView {
    view! {
        <div class="app-shell">
            <Navbar/>
            <main class="page">{children()}</main>
        </div>
    }
}
