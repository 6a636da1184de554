//! Validation of the sign-in / sign-up form.

use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\S+@\S+\.\S+").expect("email pattern should compile"));

pub const MIN_PASSWORD_CHARS: usize = 6;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuthMode {
    #[default]
    SignIn,
    SignUp,
}

impl AuthMode {
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::SignIn => Self::SignUp,
            Self::SignUp => Self::SignIn,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FormField {
    Name,
    Email,
    Password,
    ConfirmPassword,
}

/// Raw form input, exactly as typed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CredentialsDraft {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

/// Field-level messages; an empty value means the form may be submitted.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormErrors {
    pub name: Option<&'static str>,
    pub email: Option<&'static str>,
    pub password: Option<&'static str>,
    pub confirm_password: Option<&'static str>,
}

impl FormErrors {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.email.is_none()
            && self.password.is_none()
            && self.confirm_password.is_none()
    }

    #[must_use]
    pub fn get(&self, field: FormField) -> Option<&'static str> {
        match field {
            FormField::Name => self.name,
            FormField::Email => self.email,
            FormField::Password => self.password,
            FormField::ConfirmPassword => self.confirm_password,
        }
    }

    pub fn clear(&mut self, field: FormField) {
        match field {
            FormField::Name => self.name = None,
            FormField::Email => self.email = None,
            FormField::Password => self.password = None,
            FormField::ConfirmPassword => self.confirm_password = None,
        }
    }
}

/// Credentials that passed validation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValidCredentials {
    name: Option<String>,
    email: String,
}

impl ValidCredentials {
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    /// The typed name, or the local part of the email when none was given.
    #[must_use]
    pub fn display_name(&self) -> &str {
        match self.name.as_deref() {
            Some(name) => name,
            None => self.email.split('@').next().unwrap_or(&self.email),
        }
    }

    /// Seed for the generated avatar: the typed name, else the full email.
    #[must_use]
    pub fn avatar_seed(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.email)
    }
}

impl CredentialsDraft {
    /// Check the draft for the given mode.
    ///
    /// # Errors
    ///
    /// Returns the per-field messages when any rule fails.
    pub fn validate(&self, mode: AuthMode) -> Result<ValidCredentials, FormErrors> {
        let mut errors = FormErrors::default();
        let sign_up = mode == AuthMode::SignUp;

        if sign_up && self.name.trim().is_empty() {
            errors.name = Some("Name is required");
        }

        if self.email.trim().is_empty() {
            errors.email = Some("Email is required");
        } else if !EMAIL.is_match(&self.email) {
            errors.email = Some("Please enter a valid email");
        }

        if self.password.is_empty() {
            errors.password = Some("Password is required");
        } else if self.password.chars().count() < MIN_PASSWORD_CHARS {
            errors.password = Some("Password must be at least 6 characters");
        }

        if sign_up && self.password != self.confirm_password {
            errors.confirm_password = Some("Passwords do not match");
        }

        if !errors.is_empty() {
            return Err(errors);
        }

        let name = Some(self.name.trim())
            .filter(|name| !name.is_empty())
            .map(str::to_string);
        Ok(ValidCredentials {
            name,
            email: self.email.trim().to_string(),
        })
    }
}
