//! Form Validation
//!
//! Rules the request payloads derive via `validator`, plus the checks the
//! attribute set cannot express. Lets a form reject input before a round
//! trip.

use std::borrow::Cow;

use validator::{Validate, ValidationError, ValidationErrors};

use crate::error::{Result, StoreError};
use crate::models::TaskUpdate;

const PASSWORD_SPECIALS: &str = "!@#$%^&*()_+-=[]{}";

fn rule(code: &'static str, message: &'static str) -> ValidationError {
    let mut err = ValidationError::new(code);
    err.message = Some(Cow::Borrowed(message));
    err
}

/// Run the derived rules of a payload
pub fn validate_input<T: Validate>(input: &T) -> Result<()> {
    input.validate().map_err(StoreError::from)
}

/// Dot-atom local part and a dotted domain, on top of `#[validate(email)]`
pub(crate) fn deliverable_address(email: &str) -> std::result::Result<(), ValidationError> {
    let invalid = || rule("email", "Enter a valid email address");
    let (local, domain) = email.rsplit_once('@').ok_or_else(invalid)?;
    if local.starts_with('.') || local.ends_with('.') || local.contains("..") {
        return Err(invalid());
    }
    if !domain.contains('.') {
        return Err(invalid());
    }
    Ok(())
}

/// Letter, digit and special-character requirements for a new password
pub(crate) fn password_strength(password: &str) -> std::result::Result<(), ValidationError> {
    if !password.chars().any(|c| c.is_ascii_alphabetic()) {
        return Err(rule("password_letter", "Password must contain at least one letter"));
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        return Err(rule("password_digit", "Password must contain at least one digit"));
    }
    if !password.chars().any(|c| PASSWORD_SPECIALS.contains(c)) {
        return Err(rule("password_special", "Password must contain at least one special character"));
    }
    Ok(())
}

pub(crate) fn non_empty_patch(patch: &TaskUpdate) -> std::result::Result<(), ValidationError> {
    if patch.is_empty() {
        return Err(rule("empty_patch", "Nothing to update"));
    }
    Ok(())
}

impl From<ValidationErrors> for StoreError {
    /// First message in field order, so the same input always reports the
    /// same problem
    fn from(errors: ValidationErrors) -> Self {
        let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
        fields.sort_by(|a, b| a.0.cmp(&b.0));
        let message = fields
            .iter()
            .flat_map(|(_, errs)| errs.iter())
            .find_map(|e| e.message.as_ref().map(|m| m.to_string()))
            .unwrap_or_else(|| "Invalid input".to_string());
        StoreError::Validation(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{LoginRequest, SignupRequest, TaskCreate};

    fn login(email: &str, password: &str) -> LoginRequest {
        LoginRequest { email: email.into(), password: password.into() }
    }

    fn signup(password: &str) -> SignupRequest {
        SignupRequest { email: "ann@example.com".into(), password: password.into() }
    }

    #[test]
    fn test_email() {
        let check = |email: &str| validate_input(&login(email, "long enough"));

        assert!(check("ann@example.com").is_ok());
        assert!(check("ann.lee+tasks@mail.example.co").is_ok());
        assert!(check("ann.example.com").is_err());
        assert!(check("@example.com").is_err());
        assert!(check("ann@localhost").is_err());
        assert!(check("ann@example.").is_err());
        assert!(check("a b@example.com").is_err());
    }

    #[test]
    fn test_email_rejects_malformed_dots_and_labels() {
        for email in ["ann@example..com", "ann@-x-.com", "ann..b@example.com", ".ann@example.com"] {
            let err = validate_input(&login(email, "long enough")).unwrap_err();
            assert_eq!(err, StoreError::Validation("Enter a valid email address".into()), "{}", email);
        }
    }

    #[test]
    fn test_signup_password_rules() {
        assert!(validate_input(&signup("abc123!x")).is_ok());
        assert!(validate_input(&signup("ab1!")).is_err());
        assert!(validate_input(&signup("abcdefg12")).is_err());
        assert!(validate_input(&signup(&format!("a1!{}", "x".repeat(128)))).is_err());

        assert_eq!(
            validate_input(&signup("12345678!")).unwrap_err().to_string(),
            "Password must contain at least one letter"
        );
        assert_eq!(
            validate_input(&signup("abcdefgh!")).unwrap_err().to_string(),
            "Password must contain at least one digit"
        );
    }

    #[test]
    fn test_login_only_checks_length() {
        assert!(validate_input(&login("ann@example.com", "plainpassword")).is_ok());
        assert_eq!(
            validate_input(&login("ann@example.com", "short")).unwrap_err().to_string(),
            "Password must be between 8 and 128 characters"
        );
    }

    #[test]
    fn test_first_field_reported() {
        let err = validate_input(&login("nope", "short")).unwrap_err();
        assert_eq!(err.to_string(), "Enter a valid email address");
    }

    #[test]
    fn test_task_create_bounds() {
        assert!(validate_input(&TaskCreate::new("ok")).is_ok());
        assert!(validate_input(&TaskCreate::new("x")).is_err());
        assert!(validate_input(&TaskCreate::new("t".repeat(255))).is_ok());
        assert!(validate_input(&TaskCreate::new("t".repeat(256))).is_err());
        assert!(validate_input(&TaskCreate::new("ok").with_description("d".repeat(5000))).is_ok());
        assert!(validate_input(&TaskCreate::new("ok").with_description("d".repeat(5001))).is_err());
    }

    #[test]
    fn test_task_update_needs_a_field() {
        assert_eq!(
            validate_input(&TaskUpdate::default()).unwrap_err().to_string(),
            "Nothing to update"
        );
        assert!(validate_input(&TaskUpdate::completion(true)).is_ok());
        let bad_title = TaskUpdate { title: Some("x".into()), ..Default::default() };
        assert!(validate_input(&bad_title).is_err());
    }
}
