//! Pure field-level validation functions
//!
//! Each function checks a single field and returns a human-readable
//! message on violation. The backend's validation pipeline composes these
//! into per-route checks; the functions themselves know nothing about
//! HTTP.

use validator::ValidateEmail;

/// Validate a username (3-50 characters)
pub fn validate_username(username: &str) -> Result<(), String> {
    if username.len() < 3 || username.len() > 50 {
        return Err("Username must be between 3 and 50 characters".to_string());
    }
    Ok(())
}

/// Validate email syntax
pub fn validate_email(email: &str) -> Result<(), String> {
    if email.is_empty() {
        return Err("Email cannot be empty".to_string());
    }
    if email.len() > 255 {
        return Err("Email must be at most 255 characters".to_string());
    }
    if !email.validate_email() {
        return Err("Email must be a valid email address".to_string());
    }
    Ok(())
}

/// Validate password strength
pub fn validate_password(password: &str) -> Result<(), String> {
    if password.len() < 6 {
        return Err("Password must be at least 6 characters".to_string());
    }
    if password.len() > 128 {
        return Err("Password must be at most 128 characters".to_string());
    }
    Ok(())
}

/// Validate the textual shape of a resource id (decimal digits only)
pub fn validate_id_shape(raw: &str) -> Result<(), String> {
    let id_regex = regex_lite::Regex::new(r"^\d+$").expect("static regex");
    if !id_regex.is_match(raw) {
        return Err("Id must be a positive integer".to_string());
    }
    Ok(())
}

/// Validate an article or post title
pub fn validate_title(title: &str) -> Result<(), String> {
    if title.trim().is_empty() {
        return Err("Title cannot be empty".to_string());
    }
    if title.len() > 200 {
        return Err("Title must be at most 200 characters".to_string());
    }
    Ok(())
}

/// Validate an article body
pub fn validate_body(body: &str) -> Result<(), String> {
    if body.trim().is_empty() {
        return Err("Body cannot be empty".to_string());
    }
    Ok(())
}

/// Validate a post's content
pub fn validate_content(content: &str) -> Result<(), String> {
    if content.trim().is_empty() {
        return Err("Content cannot be empty".to_string());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rstest::rstest;

    #[test]
    fn test_validate_username() {
        assert!(validate_username("bob").is_ok());
        assert!(validate_username(&"a".repeat(50)).is_ok());
        assert!(validate_username("ab").is_err());
        assert!(validate_username("").is_err());
        assert!(validate_username(&"a".repeat(51)).is_err());
    }

    #[test]
    fn test_validate_email() {
        assert!(validate_email("test@example.com").is_ok());
        assert!(validate_email("user.name@domain.co.uk").is_ok());
        assert!(validate_email("").is_err());
        assert!(validate_email("invalid").is_err());
        assert!(validate_email("spaces in@email.com").is_err());
    }

    #[test]
    fn test_validate_password() {
        assert!(validate_password("123456").is_ok());
        assert!(validate_password("password123").is_ok());
        assert!(validate_password("12345").is_err());
        assert!(validate_password("").is_err());
        assert!(validate_password(&"a".repeat(129)).is_err());
    }

    #[rstest]
    #[case("1", true)]
    #[case("42", true)]
    #[case("007", true)]
    #[case("", false)]
    #[case("-1", false)]
    #[case("1.5", false)]
    #[case("abc", false)]
    #[case("12abc", false)]
    #[case(" 12", false)]
    fn test_validate_id_shape(#[case] raw: &str, #[case] ok: bool) {
        assert_eq!(validate_id_shape(raw).is_ok(), ok);
    }

    #[test]
    fn test_validate_title() {
        assert!(validate_title("Hello world").is_ok());
        assert!(validate_title("").is_err());
        assert!(validate_title("   ").is_err());
        assert!(validate_title(&"t".repeat(201)).is_err());
    }

    #[test]
    fn test_validate_body_and_content() {
        assert!(validate_body("some text").is_ok());
        assert!(validate_body("").is_err());
        assert!(validate_content("some text").is_ok());
        assert!(validate_content("  ").is_err());
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn prop_username_length_valid(len in 3usize..=50) {
            let username: String = (0..len).map(|_| 'a').collect();
            prop_assert!(validate_username(&username).is_ok());
        }

        #[test]
        fn prop_password_length_valid(len in 6usize..=128) {
            let password: String = (0..len).map(|_| 'a').collect();
            prop_assert!(validate_password(&password).is_ok());
        }

        #[test]
        fn prop_numeric_ids_valid(id in 0u64..=u64::MAX) {
            prop_assert!(validate_id_shape(&id.to_string()).is_ok());
        }

        #[test]
        fn prop_non_numeric_ids_invalid(raw in "[a-zA-Z!#%_. -]{1,20}") {
            prop_assert!(validate_id_shape(&raw).is_err());
        }
    }
}
