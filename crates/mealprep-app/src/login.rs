//! Login form state and local validation

use std::fmt;
use std::sync::LazyLock;

use mealprep_core::{Error, Result};
use regex::Regex;

pub const PASSWORD_MIN_LEN: usize = 8;
pub const PASSWORD_MAX_LEN: usize = 128;

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("Email regex is valid")
});

/// Input field of the login form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoginField {
    #[default]
    Email,
    Password,
}

impl LoginField {
    pub fn next(self) -> Self {
        match self {
            LoginField::Email => LoginField::Password,
            LoginField::Password => LoginField::Email,
        }
    }
}

/// Validated email/password pair. `Debug` hides the password.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Validate raw form input
pub fn validate(email: &str, password: &str) -> Result<Credentials> {
    let email = email.trim();
    if email.is_empty() {
        return Err(Error::validation("Email is required"));
    }
    if !EMAIL_PATTERN.is_match(email) {
        return Err(Error::validation("Invalid email address"));
    }

    let len = password.chars().count();
    if len < PASSWORD_MIN_LEN {
        return Err(Error::validation(format!(
            "Password must be at least {} characters",
            PASSWORD_MIN_LEN
        )));
    }
    if len > PASSWORD_MAX_LEN {
        return Err(Error::validation(format!(
            "Password must be at most {} characters",
            PASSWORD_MAX_LEN
        )));
    }

    Ok(Credentials {
        email: email.to_string(),
        password: password.to_string(),
    })
}

/// Login form state
#[derive(Debug, Clone, Default)]
pub struct LoginFormState {
    pub email: String,
    pub password: String,
    pub focused: LoginField,
    pub error: Option<String>,
    /// A login request is in flight
    pub submitting: bool,
}

impl LoginFormState {
    pub fn field_mut(&mut self, field: LoginField) -> &mut String {
        match field {
            LoginField::Email => &mut self.email,
            LoginField::Password => &mut self.password,
        }
    }

    pub fn push_char(&mut self, c: char) {
        let field = self.focused;
        self.field_mut(field).push(c);
    }

    pub fn backspace(&mut self) {
        let field = self.focused;
        self.field_mut(field).pop();
    }

    /// Password rendered as bullets
    pub fn masked_password(&self) -> String {
        "•".repeat(self.password.chars().count())
    }

    /// Reset everything except the email
    pub fn reset_after_logout(&mut self) {
        self.password.clear();
        self.error = None;
        self.submitting = false;
        self.focused = LoginField::Email;
    }
}
