//! Login and registration forms.
//!
//! Validation only checks that every field is non-empty. Nothing is sent
//! anywhere and no session is created.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("All fields are required!")]
    MissingFields,
}

impl FormError {
    pub fn title(&self) -> &'static str {
        "Error"
    }
}

/// Result of a successful submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthOutcome {
    LoggedIn { email: String },
    Registered { username: String },
}

impl AuthOutcome {
    pub fn title(&self) -> &'static str {
        match self {
            AuthOutcome::LoggedIn { .. } => "Welcome",
            AuthOutcome::Registered { .. } => "Success",
        }
    }

    pub fn message(&self) -> String {
        match self {
            AuthOutcome::LoggedIn { email } => format!("Logged in as {email}"),
            AuthOutcome::Registered { username } => format!("Account created for {username}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    pub fn submit(&self) -> Result<AuthOutcome, FormError> {
        if self.email.is_empty() || self.password.is_empty() {
            return Err(FormError::MissingFields);
        }
        tracing::info!(email = %self.email, "Login submitted");
        Ok(AuthOutcome::LoggedIn {
            email: self.email.clone(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RegisterForm {
    pub username: String,
    pub email: String,
    pub password: String,
}

impl RegisterForm {
    pub fn submit(&self) -> Result<AuthOutcome, FormError> {
        if self.username.is_empty() || self.email.is_empty() || self.password.is_empty() {
            return Err(FormError::MissingFields);
        }
        tracing::info!(username = %self.username, "Registration submitted");
        Ok(AuthOutcome::Registered {
            username: self.username.clone(),
        })
    }
}
