//! Login / Registration Flows

use crate::api::AuthApi;
use crate::error::ApiError;
use crate::models::Credentials;
use crate::session::SessionWriter;

pub const LOGIN_FAILED: &str = "Login failed";
pub const REGISTRATION_FAILED: &str = "Registration failed";

/// Log in and hand the token to `session`. Nothing is stored on failure.
pub async fn sign_in<A, S>(api: &A, session: &S, credentials: &Credentials) -> Result<(), ApiError>
where
    A: AuthApi + ?Sized,
    S: SessionWriter + ?Sized,
{
    let token = api.login(credentials).await?;
    if token.trim().is_empty() {
        return Err(ApiError::Decode("empty access_token".to_string()));
    }
    session.set_token(token);
    Ok(())
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;

    use super::*;
    use crate::session::{MemoryStorage, Session};

    /// Accepts exactly one account
    struct FakeAuthApi {
        token: &'static str,
    }

    #[async_trait(?Send)]
    impl AuthApi for FakeAuthApi {
        async fn login(&self, credentials: &Credentials) -> Result<String, ApiError> {
            if credentials.email == "ann@example.com" && credentials.password == "secret1" {
                Ok(self.token.to_string())
            } else {
                Err(ApiError::from_status(401, r#"{"message":"Invalid credentials"}"#))
            }
        }

        async fn signup(&self, _credentials: &Credentials) -> Result<(), ApiError> {
            Ok(())
        }
    }

    fn creds(password: &str) -> Credentials {
        Credentials {
            email: "ann@example.com".to_string(),
            password: password.to_string(),
        }
    }

    #[tokio::test]
    async fn test_valid_login_stores_token() {
        let api = FakeAuthApi { token: "jwt.token.value" };
        let session = Session::new(MemoryStorage::default());
        sign_in(&api, &session, &creds("secret1")).await.unwrap();
        assert_eq!(session.get().as_deref(), Some("jwt.token.value"));
    }

    #[tokio::test]
    async fn test_invalid_login_leaves_session_empty() {
        let api = FakeAuthApi { token: "jwt.token.value" };
        let session = Session::new(MemoryStorage::default());
        let err = sign_in(&api, &session, &creds("wrong-password")).await.unwrap_err();
        assert!(!session.is_authenticated());
        assert_eq!(err.user_message(LOGIN_FAILED), "Invalid credentials");
    }

    #[tokio::test]
    async fn test_empty_token_is_rejected() {
        let api = FakeAuthApi { token: "" };
        let session = Session::new(MemoryStorage::default());
        let err = sign_in(&api, &session, &creds("secret1")).await.unwrap_err();
        assert!(!session.is_authenticated());
        assert_eq!(err.user_message(LOGIN_FAILED), LOGIN_FAILED);
    }
}
