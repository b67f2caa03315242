//! Task List State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity on the dashboard.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::Task;
use crate::task_list::TaskListError;

/// Dashboard state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct TaskListState {
    /// Snapshot from the most recent successful fetch
    pub tasks: Vec<Task>,
    /// True until the first fetch settles
    pub loading: bool,
    /// Current search box contents
    pub search: String,
    /// Task the edit dialog is seeded from
    pub editing: Option<Task>,
    /// Edit dialog visibility
    pub edit_open: bool,
}

impl TaskListState {
    pub fn new() -> Self {
        Self {
            loading: true,
            ..Default::default()
        }
    }
}

/// Type alias for the store
pub type TaskListStore = Store<TaskListState>;

// ========================
// Store Helper Functions
// ========================

/// Replace the list with a fresh snapshot; the only way `tasks` changes
pub fn store_replace_tasks(store: &TaskListStore, tasks: Vec<Task>) {
    store.tasks().set(tasks);
}

/// Apply the outcome of a fetch or mutate-then-fetch. Errors keep the old
/// snapshot and are returned for the caller to report.
pub fn store_settle(
    store: &TaskListStore,
    result: Result<Vec<Task>, TaskListError>,
) -> Result<(), TaskListError> {
    store.loading().set(false);
    let tasks = result?;
    store_replace_tasks(store, tasks);
    Ok(())
}

pub fn store_open_editor(store: &TaskListStore, task: Task) {
    store.editing().set(Some(task));
    store.edit_open().set(true);
}

pub fn store_close_editor(store: &TaskListStore) {
    store.edit_open().set(false);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::task_item::toggle_request;
    use crate::error::ApiError;
    use crate::models::TaskId;
    use crate::task_list::Mutation;

    fn make_task(id: TaskId, is_completed: bool) -> Task {
        Task {
            id,
            title: format!("task {}", id),
            description: String::new(),
            is_completed,
        }
    }

    #[test]
    fn test_failed_toggle_keeps_last_snapshot() {
        let owner = Owner::new();
        owner.with(|| {
            let store: TaskListStore = Store::new(TaskListState::new());
            store_settle(&store, Ok(vec![make_task(1, false)])).unwrap();

            let failed = Err(TaskListError::Mutation {
                action: Mutation::Update,
                source: ApiError::Network("offline".to_string()),
            });
            assert!(store_settle(&store, failed).is_err());

            let tasks = store.tasks().get_untracked();
            assert_eq!(tasks, vec![make_task(1, false)]);
            // The next click asks for the same change again
            assert_eq!(toggle_request(&tasks[0]), (1, true));
        });
    }

    #[test]
    fn test_failed_refetch_keeps_last_snapshot() {
        let owner = Owner::new();
        owner.with(|| {
            let store: TaskListStore = Store::new(TaskListState::new());
            store_settle(&store, Ok(vec![make_task(1, true), make_task(2, false)])).unwrap();

            let failed = Err(TaskListError::Fetch(ApiError::Network("offline".to_string())));
            assert!(store_settle(&store, failed).is_err());
            assert!(!store.loading().get_untracked());
            assert_eq!(store.tasks().get_untracked().len(), 2);
        });
    }
}
