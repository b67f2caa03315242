//! Form Validation
//!
//! Per-field rules checked before anything is sent to the backend.

use std::collections::BTreeMap;
use std::sync::OnceLock;

use regex::Regex;

use crate::models::{Credentials, NewTask};

pub const MIN_PASSWORD_LEN: usize = 6;

pub const INVALID_EMAIL: &str = "Invalid email";
pub const PASSWORD_TOO_SHORT: &str = "Password must be at least 6 characters";
pub const TITLE_REQUIRED: &str = "Title is required";
pub const DESCRIPTION_REQUIRED: &str = "Description is required";

static EMAIL_RE: OnceLock<Regex> = OnceLock::new();

fn email_regex() -> &'static Regex {
    EMAIL_RE.get_or_init(|| {
        Regex::new(r"^[A-Za-z0-9_'+\-.]*[A-Za-z0-9_+\-]@([A-Za-z0-9][A-Za-z0-9\-]*\.)+[A-Za-z]{2,}$")
            .expect("email pattern is valid")
    })
}

/// Validation messages keyed by field name
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<&'static str, String>);

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    fn check(&mut self, field: &'static str, ok: bool, message: &str) {
        if !ok {
            self.0.insert(field, message.to_string());
        }
    }
}

pub fn is_valid_email(email: &str) -> bool {
    !email.starts_with('.') && !email.contains("..") && email_regex().is_match(email)
}

/// Rules shared by the login and register forms
pub fn validate_credentials(credentials: &Credentials) -> FieldErrors {
    let mut errors = FieldErrors::default();
    errors.check("email", is_valid_email(&credentials.email), INVALID_EMAIL);
    errors.check(
        "password",
        credentials.password.chars().count() >= MIN_PASSWORD_LEN,
        PASSWORD_TOO_SHORT,
    );
    errors
}

pub fn validate_new_task(task: &NewTask) -> FieldErrors {
    let mut errors = FieldErrors::default();
    errors.check("title", !task.title.trim().is_empty(), TITLE_REQUIRED);
    errors.check("description", !task.description.trim().is_empty(), DESCRIPTION_REQUIRED);
    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    fn creds(email: &str, password: &str) -> Credentials {
        Credentials {
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    #[test]
    fn test_valid_credentials() {
        assert!(validate_credentials(&creds("ann@example.com", "secret1")).is_empty());
    }

    #[test]
    fn test_bad_email_and_short_password() {
        let errors = validate_credentials(&creds("not-an-email", "12345"));
        assert_eq!(errors.get("email"), Some(INVALID_EMAIL));
        assert_eq!(errors.get("password"), Some(PASSWORD_TOO_SHORT));
    }

    #[test]
    fn test_email_shapes() {
        assert!(is_valid_email("first.last+tag@sub.example.org"));
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email(".a@example.com"));
        assert!(!is_valid_email("a..b@example.com"));
        assert!(!is_valid_email("a b@example.com"));
    }

    #[test]
    fn test_password_counts_characters() {
        assert!(validate_credentials(&creds("a@example.com", "ééééé")).get("password").is_some());
        assert!(validate_credentials(&creds("a@example.com", "éééééé")).is_empty());
    }

    #[test]
    fn test_task_fields_required() {
        let errors = validate_new_task(&NewTask {
            title: "  ".to_string(),
            description: String::new(),
        });
        assert_eq!(errors.get("title"), Some(TITLE_REQUIRED));
        assert_eq!(errors.get("description"), Some(DESCRIPTION_REQUIRED));

        let ok = validate_new_task(&NewTask {
            title: "Buy milk".to_string(),
            description: "Semi-skimmed".to_string(),
        });
        assert!(ok.is_empty());
    }
}
