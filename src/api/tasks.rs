//! Task Endpoints
//!
//! Frontend bindings for `/tasks` CRUD.

use async_trait::async_trait;
use gloo_net::http::Request;

use super::{decode, ApiClient, TaskApi};
use crate::error::ApiError;
use crate::models::{NewTask, Task, TaskId, TaskPatch};

const TASKS_PATH: &str = "/tasks";

fn task_path(id: TaskId) -> String {
    format!("{}/{}", TASKS_PATH, id)
}

#[async_trait(?Send)]
impl TaskApi for ApiClient {
    async fn list_tasks(&self) -> Result<Vec<Task>, ApiError> {
        let response = self
            .send("GET", TASKS_PATH, Request::get(&self.url(TASKS_PATH)))
            .await?;
        let tasks: Vec<Task> = decode(response).await?;
        log::debug!("[API] loaded {} tasks", tasks.len());
        Ok(tasks)
    }

    async fn create_task(&self, task: &NewTask) -> Result<Task, ApiError> {
        let response = self
            .send_with("POST", TASKS_PATH, Request::post(&self.url(TASKS_PATH)), Some(task))
            .await?;
        decode(response).await
    }

    async fn update_task(&self, id: TaskId, patch: &TaskPatch) -> Result<Task, ApiError> {
        let path = task_path(id);
        let response = self
            .send_with("PATCH", &path, Request::patch(&self.url(&path)), Some(patch))
            .await?;
        decode(response).await
    }

    async fn delete_task(&self, id: TaskId) -> Result<(), ApiError> {
        let path = task_path(id);
        self.send("DELETE", &path, Request::delete(&self.url(&path)))
            .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_path() {
        assert_eq!(task_path(42), "/tasks/42");
    }
}
