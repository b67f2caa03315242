//! Task Dashboard Page
//!
//! Lists the user's tasks with search, completion toggle, edit and delete.
//! Every change is written to the backend and followed by a full refetch.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::api::use_api;
use crate::components::{EditTaskModal, TaskItem};
use crate::dialog::alert;
use crate::filter::filter_tasks;
use crate::models::{Task, TaskDraft, TaskId};
use crate::store::{
    store_close_editor, store_open_editor, store_settle, TaskListState, TaskListStateStoreFields,
    TaskListStore,
};
use crate::task_list::{self, TaskListError};

/// Settle a result into the store, alerting on failure
fn settle(store: &TaskListStore, result: Result<Vec<Task>, TaskListError>) {
    if let Err(e) = store_settle(store, result) {
        log::warn!("[DASHBOARD] {}", e);
        alert(&e.user_message());
    }
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let api = use_api();
    let store: TaskListStore = Store::new(TaskListState::new());

    // Load tasks on mount
    Effect::new({
        let api = api.clone();
        move |_| {
            let api = api.clone();
            spawn_local(async move {
                settle(&store, task_list::fetch_all(&api).await);
            });
        }
    });

    let on_toggle = {
        let api = api.clone();
        Callback::new(move |(id, is_completed): (TaskId, bool)| {
            let api = api.clone();
            spawn_local(async move {
                settle(&store, task_list::toggle_completion(&api, id, is_completed).await);
            });
        })
    };

    let on_delete = {
        let api = api.clone();
        Callback::new(move |id: TaskId| {
            let api = api.clone();
            spawn_local(async move {
                settle(&store, task_list::delete(&api, id).await);
            });
        })
    };

    let on_edit = Callback::new(move |task: Task| store_open_editor(&store, task));
    let on_close = Callback::new(move |()| store_close_editor(&store));

    let on_save = {
        let api = api.clone();
        Callback::new(move |draft: TaskDraft| {
            let Some(id) = store.editing().with_untracked(|t| t.as_ref().map(|t| t.id)) else {
                return;
            };
            let api = api.clone();
            spawn_local(async move {
                let result = task_list::edit(&api, id, &draft).await;
                // A rejected update keeps the dialog open with the draft intact
                let saved = match &result {
                    Ok(_) => true,
                    Err(e) => e.mutation_applied(),
                };
                if saved {
                    store_close_editor(&store);
                }
                settle(&store, result);
            });
        })
    };

    let visible = Memo::new(move |_| {
        store.tasks().with(|tasks| filter_tasks(tasks, &store.search().get()))
    });

    view! {
        <div class="dashboard">
            <h2>"Your Tasks"</h2>

            <input
                type="search"
                class="task-search"
                placeholder="Search tasks..."
                prop:value=move || store.search().get()
                on:input=move |ev| store.search().set(event_target_value(&ev))
            />

            <Show
                when=move || !store.loading().get()
                fallback=|| view! { <p class="loading">"Loading tasks..."</p> }
            >
                <Show
                    when=move || !visible.with(Vec::is_empty)
                    fallback=move || {
                        if store.tasks().with(Vec::is_empty) {
                            view! { <p class="empty">"No tasks yet."</p> }.into_any()
                        } else {
                            view! { <p class="empty">"No tasks match your search."</p> }.into_any()
                        }
                    }
                >
                    <ul class="task-list">
                        <For
                            each=move || visible.get()
                            key=|task| (task.id, task.is_completed, task.title.clone(), task.description.clone())
                            children=move |task| view! {
                                <TaskItem
                                    task=task
                                    on_toggle=on_toggle
                                    on_edit=on_edit
                                    on_delete=on_delete
                                />
                            }
                        />
                    </ul>
                </Show>
            </Show>

            <a href="/new-task" class="btn btn-primary">"+ Add Task"</a>

            <EditTaskModal
                task=Signal::derive(move || store.editing().get())
                is_open=Signal::derive(move || store.edit_open().get())
                on_close=on_close
                on_save=on_save
            />
        </div>
    }
}
