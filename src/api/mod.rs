//! REST Backend Bindings
//!
//! One configured HTTP client for the whole app, plus the trait seams the
//! pages call through, organized by domain.

mod auth;
mod tasks;

use async_trait::async_trait;
use gloo_net::http::{RequestBuilder, Response};
use leptos::prelude::*;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::AppConfig;
use crate::context::SessionContext;
use crate::error::ApiError;
use crate::models::{Credentials, NewTask, Task, TaskId, TaskPatch};

// ========================
// Traits
// ========================

/// `/auth` endpoints
#[async_trait(?Send)]
pub trait AuthApi {
    /// Exchange credentials for a bearer token
    async fn login(&self, credentials: &Credentials) -> Result<String, ApiError>;
    async fn signup(&self, credentials: &Credentials) -> Result<(), ApiError>;
}

/// `/tasks` endpoints
#[async_trait(?Send)]
pub trait TaskApi {
    async fn list_tasks(&self) -> Result<Vec<Task>, ApiError>;
    async fn create_task(&self, task: &NewTask) -> Result<Task, ApiError>;
    async fn update_task(&self, id: TaskId, patch: &TaskPatch) -> Result<Task, ApiError>;
    async fn delete_task(&self, id: TaskId) -> Result<(), ApiError>;
}

// ========================
// Client
// ========================

/// HTTP client that attaches the session's bearer token to every request
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    session: SessionContext,
}

impl ApiClient {
    pub fn new(config: &AppConfig, session: SessionContext) -> Self {
        Self {
            base_url: config.api_base_url.clone(),
            session,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Token is read per request, so a logout applies to the next call
    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match self.session.token_untracked() {
            Some(token) => request.header("Authorization", &bearer(&token)),
            None => request,
        }
    }

    async fn send(&self, method: &str, path: &str, request: RequestBuilder) -> Result<Response, ApiError> {
        self.send_with(method, path, request, None::<&()>).await
    }

    async fn send_with<B: Serialize + ?Sized>(
        &self,
        method: &str,
        path: &str,
        request: RequestBuilder,
        body: Option<&B>,
    ) -> Result<Response, ApiError> {
        log::debug!("[API] {} {}", method, path);
        let request = self.authorize(request);
        let request = match body {
            Some(body) => request.json(body),
            None => request.build(),
        }
        .map_err(|e| ApiError::Decode(e.to_string()))?;

        let response = request.send().await.map_err(|e| {
            log::warn!("[API] {} {} failed: {}", method, path, e);
            ApiError::Network(e.to_string())
        })?;

        if response.ok() {
            return Ok(response);
        }
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        log::warn!("[API] {} {} -> {}", method, path, status);
        Err(ApiError::from_status(status, &body))
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    response.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
}

fn bearer(token: &str) -> String {
    format!("Bearer {}", token)
}

/// Get the API client provided by `App`
pub fn use_api() -> ApiClient {
    expect_context::<ApiClient>()
}
