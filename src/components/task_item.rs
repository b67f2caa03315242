//! Task Item Component
//!
//! One row of the task list.

use leptos::prelude::*;
use web_sys::HtmlInputElement;

use crate::components::DeleteConfirmButton;
use crate::models::{Task, TaskId};

/// Completion change a click on `task`'s checkbox asks for
pub fn toggle_request(task: &Task) -> (TaskId, bool) {
    (task.id, !task.is_completed)
}

/// A single task row with completion checkbox, edit and delete.
///
/// The checkbox is controlled: a click is reverted in the DOM and only the
/// refetched snapshot moves it, so a failed toggle leaves it as it was.
#[component]
pub fn TaskItem(
    task: Task,
    #[prop(into)] on_toggle: Callback<(TaskId, bool)>,
    #[prop(into)] on_edit: Callback<Task>,
    #[prop(into)] on_delete: Callback<TaskId>,
) -> impl IntoView {
    let id = task.id;
    let completed = task.is_completed;
    let request = toggle_request(&task);
    let title = task.title.clone();
    let description = task.description.clone();
    let task = StoredValue::new(task);

    view! {
        <li class=if completed { "task-item completed" } else { "task-item" }>
            <input
                type="checkbox"
                aria-label="Completed"
                prop:checked=completed
                on:change=move |ev| {
                    event_target::<HtmlInputElement>(&ev).set_checked(completed);
                    on_toggle.run(request);
                }
            />
            <div class="task-body">
                <h3 class="task-title">{title}</h3>
                <p class="task-description">{description}</p>
            </div>
            <div class="task-actions">
                <button type="button" class="btn" on:click=move |_| on_edit.run(task.get_value())>
                    "Edit"
                </button>
                <DeleteConfirmButton on_confirm=Callback::new(move |()| on_delete.run(id))/>
            </div>
        </li>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_task(is_completed: bool) -> Task {
        Task {
            id: 1,
            title: "Buy milk".to_string(),
            description: "2 litres".to_string(),
            is_completed,
        }
    }

    #[test]
    fn test_toggle_request_flips_snapshot_flag() {
        assert_eq!(toggle_request(&make_task(false)), (1, true));
        assert_eq!(toggle_request(&make_task(true)), (1, false));
    }
}
