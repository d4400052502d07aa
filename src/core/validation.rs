//! Client-side credential validation.
//!
//! All checks run once, at submission time, in a fixed order: password
//! confirmation (signup only), then email shape, then password strength.
//! The first failure wins and later checks are not run.

use std::fmt;

use crate::core::auth::AuthMode;
use crate::core::notice::Notice;

/// Minimum password length accepted by [`is_valid_password`].
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Special characters a password must include one of. These are also the
/// only non-alphanumeric characters a password may contain at all.
pub const PASSWORD_SPECIALS: &str = "!@#$%^&*";

/// Validation failure classes, in the order the checks run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// Signup only: password and confirmation differ
    PasswordMismatch,
    /// Email does not have the required shape
    InvalidEmail,
    /// Password fails the strength rule
    WeakPassword,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::PasswordMismatch => write!(f, "Passwords do not match"),
            ValidationError::InvalidEmail => write!(f, "Please enter a valid email address"),
            ValidationError::WeakPassword => {
                write!(f, "Password does not meet the strength requirements")
            }
        }
    }
}

impl std::error::Error for ValidationError {}

impl ValidationError {
    /// User-facing notice for this failure. `WeakPassword` expands into the
    /// full list of criteria; the other classes are single-line.
    pub fn notice(&self) -> Notice {
        match self {
            ValidationError::WeakPassword => Notice::danger_lines([
                "Your password must meet the following criteria:",
                "- At least 8 characters long",
                "- At least one alphabetic character",
                "- At least one digit",
                "- At least one special character (!@#$%^&*)",
                "Example: MyP@ssw0rd!",
            ]),
            other => Notice::danger(other.to_string()),
        }
    }
}

/// Characters allowed in email local-part segments and domain labels:
/// ASCII letters, digits, underscore, hyphen.
fn is_label_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '-'
}

/// One or more label-character segments separated by single dots, with no
/// leading or trailing dot.
fn is_dotted_labels(part: &str) -> bool {
    !part.is_empty()
        && part
            .split('.')
            .all(|segment| !segment.is_empty() && segment.chars().all(is_label_char))
}

/// Email shape check: dot-separated word/hyphen segments, `@`, at least one
/// domain label, and an alphabetic top-level label of two or more letters.
pub fn is_valid_email(input: &str) -> bool {
    let Some((local, domain)) = input.split_once('@') else {
        return false;
    };
    let Some((labels, tld)) = domain.rsplit_once('.') else {
        return false;
    };
    is_dotted_labels(local)
        && is_dotted_labels(labels)
        && tld.len() >= 2
        && tld.chars().all(|c| c.is_ascii_alphabetic())
}

/// Password strength check: at least [`MIN_PASSWORD_LENGTH`] characters,
/// drawn only from ASCII letters, digits and [`PASSWORD_SPECIALS`], with at
/// least one letter, one digit and one special character. Uppercase is not
/// required.
pub fn is_valid_password(input: &str) -> bool {
    let mut length = 0usize;
    let mut has_letter = false;
    let mut has_digit = false;
    let mut has_special = false;

    for c in input.chars() {
        if c.is_ascii_alphabetic() {
            has_letter = true;
        } else if c.is_ascii_digit() {
            has_digit = true;
        } else if PASSWORD_SPECIALS.contains(c) {
            has_special = true;
        } else {
            // Any character outside the allowed set rejects the whole value
            return false;
        }
        length += 1;
    }

    length >= MIN_PASSWORD_LENGTH && has_letter && has_digit && has_special
}

/// Run the submission checks for the given mode, first failure wins.
///
/// The confirmation check only applies to signup; login ignores the
/// confirmation field entirely. The password rule applies to both modes.
pub fn validate_submission(
    mode: AuthMode,
    email: &str,
    password: &str,
    confirm_password: &str,
) -> Result<(), ValidationError> {
    if mode == AuthMode::Signup && password != confirm_password {
        return Err(ValidationError::PasswordMismatch);
    }

    if !is_valid_email(email) {
        return Err(ValidationError::InvalidEmail);
    }

    if !is_valid_password(password) {
        return Err(ValidationError::WeakPassword);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::notice::Severity;

    #[test]
    fn test_valid_emails() {
        assert!(is_valid_email("user@example.com"));
        assert!(is_valid_email("first.last@example.com"));
        assert!(is_valid_email("user_name-1@mail.example.co"));
        assert!(is_valid_email("a@b-c.io"));
        assert!(is_valid_email("a.b.c@x.y.zz"));
    }

    #[test]
    fn test_email_requires_at_sign_and_dot() {
        assert!(!is_valid_email("no-at-sign.com"));
        assert!(!is_valid_email("foo@bar"));
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("user@"));
    }

    #[test]
    fn test_email_rejects_bad_segments() {
        assert!(!is_valid_email(".user@example.com"));
        assert!(!is_valid_email("user.@example.com"));
        assert!(!is_valid_email("us..er@example.com"));
        assert!(!is_valid_email("user@.com"));
        assert!(!is_valid_email("user@example..com"));
        assert!(!is_valid_email("us er@example.com"));
        assert!(!is_valid_email("a@b@c.com"));
    }

    #[test]
    fn test_email_top_level_label() {
        // At least two characters, letters only
        assert!(!is_valid_email("user@example.c"));
        assert!(!is_valid_email("user@example.com1"));
        assert!(!is_valid_email("user@example.c-m"));
        assert!(is_valid_email("user@example.museum"));
    }

    #[test]
    fn test_password_minimum_length() {
        assert!(!is_valid_password("short1!"));
        assert!(is_valid_password("short12!"));
    }

    #[test]
    fn test_password_requires_each_class() {
        assert!(!is_valid_password("alllower"));
        assert!(!is_valid_password("NoSpecial1"));
        assert!(!is_valid_password("NoDigits!!"));
        assert!(!is_valid_password("12345678!"));
    }

    #[test]
    fn test_password_uppercase_not_required() {
        assert!(is_valid_password("alllower1!"));
        assert!(is_valid_password("Passw0rd!"));
        assert!(is_valid_password("MyP@ssw0rd!"));
    }

    #[test]
    fn test_password_charset_is_exclusive() {
        // Characters outside letters/digits/specials reject the value even
        // when every other criterion is met
        assert!(!is_valid_password("Passw0rd! "));
        assert!(!is_valid_password("Pass-w0rd!"));
        assert!(!is_valid_password("Pässw0rd!1"));
        assert!(is_valid_password("A1!A1!A1"));
    }

    #[test]
    fn test_signup_checks_confirmation_first() {
        // Mismatch wins even when the email is also invalid
        assert_eq!(
            validate_submission(AuthMode::Signup, "foo@bar", "Passw0rd!", "different"),
            Err(ValidationError::PasswordMismatch)
        );
    }

    #[test]
    fn test_login_ignores_confirmation() {
        assert_eq!(
            validate_submission(AuthMode::Login, "user@example.com", "Passw0rd!", "different"),
            Ok(())
        );
    }

    #[test]
    fn test_email_checked_before_password() {
        assert_eq!(
            validate_submission(AuthMode::Login, "foo@bar", "weak", ""),
            Err(ValidationError::InvalidEmail)
        );
    }

    #[test]
    fn test_password_rule_applies_to_both_modes() {
        assert_eq!(
            validate_submission(AuthMode::Login, "user@example.com", "alllower", ""),
            Err(ValidationError::WeakPassword)
        );
        assert_eq!(
            validate_submission(AuthMode::Signup, "user@example.com", "alllower", "alllower"),
            Err(ValidationError::WeakPassword)
        );
    }

    #[test]
    fn test_valid_submissions() {
        assert_eq!(
            validate_submission(AuthMode::Login, "user@example.com", "Passw0rd!", ""),
            Ok(())
        );
        assert_eq!(
            validate_submission(AuthMode::Signup, "user@example.com", "Passw0rd!", "Passw0rd!"),
            Ok(())
        );
    }

    #[test]
    fn test_mismatch_notice_is_single_line() {
        let notice = ValidationError::PasswordMismatch.notice();
        assert_eq!(notice.severity, Severity::Danger);
        assert_eq!(notice.lines, vec!["Passwords do not match".to_string()]);
    }

    #[test]
    fn test_weak_password_notice_lists_criteria() {
        let notice = ValidationError::WeakPassword.notice();
        assert_eq!(notice.severity, Severity::Danger);
        assert_eq!(notice.lines.len(), 6);
        assert_eq!(notice.lines[0], "Your password must meet the following criteria:");
        assert_eq!(notice.lines[5], "Example: MyP@ssw0rd!");
    }
}
