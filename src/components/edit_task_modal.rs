//! Edit Task Modal
//!
//! Dialog holding a local draft of one task's title and description.

use leptos::prelude::*;

use crate::models::{Task, TaskDraft};

/// Modal editor for a single task.
///
/// The draft is reseeded whenever `task` changes, so switching targets never
/// shows stale text. The parent owns visibility and persistence.
#[component]
pub fn EditTaskModal(
    #[prop(into)] task: Signal<Option<Task>>,
    #[prop(into)] is_open: Signal<bool>,
    #[prop(into)] on_close: Callback<()>,
    #[prop(into)] on_save: Callback<TaskDraft>,
) -> impl IntoView {
    let (title, set_title) = signal(String::new());
    let (description, set_description) = signal(String::new());

    Effect::new(move |_| {
        let draft = task.with(|t| t.as_ref().map(TaskDraft::from).unwrap_or_default());
        set_title.set(draft.title);
        set_description.set(draft.description);
    });

    let save = move |_: web_sys::MouseEvent| {
        on_save.run(TaskDraft {
            title: title.get_untracked(),
            description: description.get_untracked(),
        });
    };

    view! {
        <Show when=move || is_open.get() && task.with(Option::is_some)>
            <div class="modal-backdrop" role="dialog" aria-modal="true" aria-labelledby="edit-task-title">
                <div class="modal">
                    <h2 id="edit-task-title">"Edit Task"</h2>
                    <input
                        type="text"
                        placeholder="Title"
                        prop:value=move || title.get()
                        on:input=move |ev| set_title.set(event_target_value(&ev))
                    />
                    <textarea
                        placeholder="Description"
                        prop:value=move || description.get()
                        on:input=move |ev| set_description.set(event_target_value(&ev))
                    />
                    <div class="modal-actions">
                        <button type="button" class="btn" on:click=move |_| on_close.run(())>"Cancel"</button>
                        <button type="button" class="btn btn-primary" on:click=save>"Save"</button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
