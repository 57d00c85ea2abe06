use crate::models::LoginRequest;
use validator::{Validate, ValidateEmail};

pub const NAME_MESSAGE: &str = "Please enter a valid name (at least 2 characters).";
pub const EMAIL_MESSAGE: &str = "Please enter a valid email address.";

#[inline]
pub fn is_valid_email(email: &str) -> bool {
    email.validate_email()
}

/// Trimmed length of at least `min_length` characters
#[inline]
pub fn is_valid_name(name: &str, min_length: usize) -> bool {
    name.trim().chars().count() >= min_length
}

/// Trim and drop angle brackets
pub fn sanitize_input(input: &str) -> String {
    input.trim().replace(['<', '>'], "")
}

/// Sanitize and check login input, returning the request to send
///
/// The error is the message to show next to the offending field.
pub fn validate_login(name: &str, email: &str) -> Result<LoginRequest, &'static str> {
    let request = LoginRequest {
        name: sanitize_input(name),
        email: sanitize_input(email),
    };

    if let Err(errors) = request.validate() {
        tracing::debug!("Login input rejected: {}", errors);
        if errors.field_errors().contains_key("name") {
            return Err(NAME_MESSAGE);
        }
        return Err(EMAIL_MESSAGE);
    }

    Ok(request)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_validation() {
        assert!(is_valid_email("test@example.com"));
        assert!(is_valid_email("first.last@sub.example.org"));
        assert!(!is_valid_email("plainaddress"));
        assert!(!is_valid_email("@missing-local.com"));
        assert!(!is_valid_email(""));
    }

    #[test]
    fn test_name_validation() {
        assert!(is_valid_name("Jo", 2));
        assert!(!is_valid_name(" J ", 2));
        assert!(!is_valid_name("", 2));
        assert!(is_valid_name("Jane", 4));
    }

    #[test]
    fn test_sanitize_input() {
        assert_eq!(sanitize_input("  <b>Rex</b> "), "bRex/b");
        assert_eq!(sanitize_input(""), "");
    }

    #[test]
    fn test_validate_login() {
        let request = validate_login("  Jo ", " jo@example.com").unwrap();
        assert_eq!(request.name, "Jo");
        assert_eq!(request.email, "jo@example.com");

        assert_eq!(validate_login("J", "jo@example.com").unwrap_err(), NAME_MESSAGE);
        assert_eq!(validate_login("Jo", "jo@").unwrap_err(), EMAIL_MESSAGE);
    }
}
