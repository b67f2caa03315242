//! Auth Endpoints

use async_trait::async_trait;
use gloo_net::http::Request;

use super::{decode, ApiClient, AuthApi};
use crate::error::ApiError;
use crate::models::{Credentials, LoginResponse};

#[async_trait(?Send)]
impl AuthApi for ApiClient {
    async fn login(&self, credentials: &Credentials) -> Result<String, ApiError> {
        let path = "/auth/login";
        let response = self
            .send_with("POST", path, Request::post(&self.url(path)), Some(credentials))
            .await?;
        let body: LoginResponse = decode(response).await?;
        Ok(body.access_token)
    }

    async fn signup(&self, credentials: &Credentials) -> Result<(), ApiError> {
        let path = "/auth/signup";
        self.send_with("POST", path, Request::post(&self.url(path)), Some(credentials))
            .await?;
        Ok(())
    }
}
