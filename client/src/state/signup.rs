//! Email capture form state and validation.
//!
//! DESIGN
//! ======
//! Validity is recomputed on every edit so the submit button and inline hint
//! can read a plain flag. The format check mirrors the common HTML email
//! grammar: dot-atom local part, dot-separated hostname labels, no TLD
//! requirement.

#[cfg(test)]
#[path = "signup_test.rs"]
mod signup_test;

use std::sync::LazyLock;

use regex::Regex;

const MAX_EMAIL_LEN: usize = 254;
const MAX_LOCAL_PART_LEN: usize = 64;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9!#$%&'*+/=?^_`{|}~-]+(?:\.[a-zA-Z0-9!#$%&'*+/=?^_`{|}~-]+)*@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$",
    )
    .expect("email pattern is a valid regex")
});

/// Why an email was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum EmailError {
    #[error("Email is required.")]
    Required,
    #[error("Enter a valid email address.")]
    Malformed,
}

/// Check `raw` (surrounding whitespace ignored) and return the trimmed email.
///
/// # Errors
///
/// `Required` for blank input, `Malformed` for anything that is not a
/// well-formed address within the length limits.
pub fn validate_email(raw: &str) -> Result<&str, EmailError> {
    let email = raw.trim();
    if email.is_empty() {
        return Err(EmailError::Required);
    }
    if email.len() > MAX_EMAIL_LEN {
        return Err(EmailError::Malformed);
    }
    let local_len = email.find('@').ok_or(EmailError::Malformed)?;
    if local_len > MAX_LOCAL_PART_LEN || !EMAIL_RE.is_match(email) {
        return Err(EmailError::Malformed);
    }
    Ok(email)
}

/// The single-field signup form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SignupForm {
    pub email: String,
    pub valid: bool,
    /// Set on the first submit attempt; gates the inline error hint.
    pub submitted: bool,
}

impl SignupForm {
    pub fn set_email(&mut self, value: impl Into<String>) {
        self.email = value.into();
        self.valid = validate_email(&self.email).is_ok();
    }

    /// Current validation error, `None` when valid.
    pub fn error(&self) -> Option<EmailError> {
        validate_email(&self.email).err()
    }

    /// Whether the view should show the invalid state.
    pub fn show_error(&self) -> bool {
        self.submitted && !self.valid
    }
}
