use lazy_static::lazy_static;
use regex::Regex;

use crate::{error::ApiError, users::dto::RegisterRequest};

pub(crate) fn is_valid_email(email: &str) -> bool {
    lazy_static! {
        static ref EMAIL_RE: Regex = Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap();
    }
    EMAIL_RE.is_match(email)
}

/// Format checks only. Duplicate emails are not looked up.
pub(crate) fn validate_registration(req: &RegisterRequest) -> Result<(), ApiError> {
    if req.email.is_empty() {
        return Err(ApiError::Validation("email is required".into()));
    }
    if !is_valid_email(&req.email) {
        return Err(ApiError::Validation(
            "email must be a valid email address".into(),
        ));
    }
    if req.password.is_empty() {
        return Err(ApiError::Validation("password is required".into()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn req(email: &str, password: &str) -> RegisterRequest {
        RegisterRequest {
            email: email.into(),
            password: password.into(),
        }
    }

    #[test]
    fn email_format() {
        assert!(is_valid_email("a@b.com"));
        assert!(is_valid_email("first.last+tag@sub.example.org"));
        assert!(!is_valid_email("not-an-email"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("a b@c.com"));
        assert!(!is_valid_email("@b.com"));
        assert!(!is_valid_email(""));
    }

    #[test]
    fn accepts_valid_registration() {
        assert!(validate_registration(&req("a@b.com", "secret")).is_ok());
    }

    #[test]
    fn rejects_missing_email() {
        let err = validate_registration(&req("", "secret")).unwrap_err();
        assert_eq!(err.to_string(), "email is required");
    }

    #[test]
    fn rejects_malformed_email() {
        let err = validate_registration(&req("not-an-email", "secret")).unwrap_err();
        assert_eq!(err.to_string(), "email must be a valid email address");
    }

    #[test]
    fn rejects_empty_password() {
        let err = validate_registration(&req("a@b.com", "")).unwrap_err();
        assert_eq!(err.to_string(), "password is required");
    }
}
