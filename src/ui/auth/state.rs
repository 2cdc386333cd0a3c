use crate::auth::{LoginForm, RegisterForm};
use crate::ui::mvi::UiState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormKind {
    #[default]
    Login,
    Register,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthField {
    Username,
    Email,
    Password,
}

impl AuthField {
    pub fn label(self) -> &'static str {
        match self {
            AuthField::Username => "Username",
            AuthField::Email => "Email",
            AuthField::Password => "Password",
        }
    }

    pub fn is_secret(self) -> bool {
        matches!(self, AuthField::Password)
    }
}

impl FormKind {
    pub fn title(self) -> &'static str {
        match self {
            FormKind::Login => "Login",
            FormKind::Register => "Sign Up",
        }
    }

    /// Fields in tab order.
    pub fn fields(self) -> &'static [AuthField] {
        match self {
            FormKind::Login => &[AuthField::Email, AuthField::Password],
            FormKind::Register => &[AuthField::Username, AuthField::Email, AuthField::Password],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AuthFormState {
    pub kind: FormKind,
    pub username: String,
    pub email: String,
    pub password: String,
    /// Index into `kind.fields()`.
    pub focused: usize,
}

impl UiState for AuthFormState {}

impl AuthFormState {
    pub fn login() -> Self {
        Self::default()
    }

    pub fn register() -> Self {
        Self {
            kind: FormKind::Register,
            ..Self::default()
        }
    }

    pub fn focused_field(&self) -> AuthField {
        let fields = self.kind.fields();
        fields
            .get(self.focused)
            .copied()
            .unwrap_or(AuthField::Email)
    }

    pub fn value(&self, field: AuthField) -> &str {
        match field {
            AuthField::Username => &self.username,
            AuthField::Email => &self.email,
            AuthField::Password => &self.password,
        }
    }

    pub(super) fn value_mut(&mut self, field: AuthField) -> &mut String {
        match field {
            AuthField::Username => &mut self.username,
            AuthField::Email => &mut self.email,
            AuthField::Password => &mut self.password,
        }
    }

    pub fn login_form(&self) -> LoginForm {
        LoginForm {
            email: self.email.clone(),
            password: self.password.clone(),
        }
    }

    pub fn register_form(&self) -> RegisterForm {
        RegisterForm {
            username: self.username.clone(),
            email: self.email.clone(),
            password: self.password.clone(),
        }
    }
}
