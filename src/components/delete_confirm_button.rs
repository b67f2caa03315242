//! Delete Confirm Button Component
//!
//! Two-step delete: the first click asks, the second one commits.

use leptos::prelude::*;

/// Inline delete confirmation.
///
/// Shows a "Delete" button; clicking it swaps in a "Delete this task?" prompt
/// with Yes/No. Only "Yes" runs `on_confirm`.
#[component]
pub fn DeleteConfirmButton(#[prop(into)] on_confirm: Callback<()>) -> impl IntoView {
    let (asking, set_asking) = signal(false);

    view! {
        <Show
            when=move || asking.get()
            fallback=move || view! {
                <button
                    type="button"
                    class="btn btn-danger"
                    on:click=move |_| set_asking.set(true)
                >
                    "Delete"
                </button>
            }
        >
            <span class="delete-confirm" role="alertdialog">
                <span class="delete-confirm-text">"Delete this task?"</span>
                <button
                    type="button"
                    class="btn btn-danger"
                    on:click=move |_| {
                        set_asking.set(false);
                        on_confirm.run(());
                    }
                >
                    "Yes"
                </button>
                <button type="button" class="btn" on:click=move |_| set_asking.set(false)>
                    "No"
                </button>
            </span>
        </Show>
    }
}
