use leptos::prelude::*;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <section class="not-found">
            <h2>"Page not found"</h2>
            <a href="/">"Back to start"</a>
        </section>
    }
}
