use codepulse_core::auth::{AuthMode, CredentialsDraft, FormErrors, FormField};
use services::AuthError;

/// State of the sign-in / sign-up form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthFormVm {
    pub mode: AuthMode,
    pub draft: CredentialsDraft,
    pub errors: FormErrors,
    pub submitting: bool,
    pub banner: Option<String>,
}

impl AuthFormVm {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Switch between sign-in and sign-up, starting from a blank form.
    pub fn toggle_mode(&mut self) {
        *self = Self {
            mode: self.mode.toggled(),
            ..Self::default()
        };
    }

    /// Store a keystroke and clear that field's error.
    pub fn edit(&mut self, field: FormField, value: String) {
        match field {
            FormField::Name => self.draft.name = value,
            FormField::Email => self.draft.email = value,
            FormField::Password => self.draft.password = value,
            FormField::ConfirmPassword => self.draft.confirm_password = value,
        }
        self.errors.clear(field);
    }

    pub fn begin_submit(&mut self) {
        self.submitting = true;
        self.banner = None;
    }

    pub fn reject(&mut self, errors: FormErrors) {
        self.submitting = false;
        self.errors = errors;
    }

    pub fn fail(&mut self, message: impl Into<String>) {
        self.submitting = false;
        self.banner = Some(message.into());
    }

    /// The desktop build has no identity provider wired in.
    pub fn identity_unavailable(&mut self) {
        self.fail(AuthError::IdentityProvider.to_string());
    }

    #[must_use]
    pub fn is_sign_up(&self) -> bool {
        self.mode == AuthMode::SignUp
    }

    #[must_use]
    pub fn heading(&self) -> &'static str {
        match self.mode {
            AuthMode::SignIn => "Welcome back",
            AuthMode::SignUp => "Create your account",
        }
    }

    #[must_use]
    pub fn submit_label(&self) -> &'static str {
        match (self.mode, self.submitting) {
            (AuthMode::SignIn, false) => "Sign In",
            (AuthMode::SignUp, false) => "Create Account",
            (AuthMode::SignIn, true) => "Signing In...",
            (AuthMode::SignUp, true) => "Creating Account...",
        }
    }

    #[must_use]
    pub fn toggle_prompt(&self) -> (&'static str, &'static str) {
        match self.mode {
            AuthMode::SignIn => ("Don't have an account?", "Sign up"),
            AuthMode::SignUp => ("Already have an account?", "Sign in"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn editing_a_field_clears_only_its_error() {
        let mut form = AuthFormVm::new();
        form.reject(FormErrors {
            email: Some("Email is required"),
            password: Some("Password is required"),
            ..FormErrors::default()
        });

        form.edit(FormField::Email, "a@b.co".into());

        assert_eq!(form.draft.email, "a@b.co");
        assert_eq!(form.errors.email, None);
        assert_eq!(form.errors.password, Some("Password is required"));
    }

    #[test]
    fn identity_sign_in_shows_provider_banner() {
        let mut form = AuthFormVm::new();
        form.begin_submit();
        form.identity_unavailable();
        assert!(!form.submitting);
        assert_eq!(
            form.banner.as_deref(),
            Some("Google sign-in failed. Please try again.")
        );
    }

    #[test]
    fn toggling_mode_resets_form() {
        let mut form = AuthFormVm::new();
        form.edit(FormField::Email, "a@b.co".into());
        form.fail("Google sign-in failed. Please try again.");

        form.toggle_mode();

        assert!(form.is_sign_up());
        assert_eq!(form.draft, CredentialsDraft::default());
        assert!(form.banner.is_none());
        assert_eq!(form.submit_label(), "Create Account");
    }

    #[test]
    fn submitting_changes_label_and_clears_banner() {
        let mut form = AuthFormVm::new();
        form.fail("nope");
        form.begin_submit();
        assert_eq!(form.submit_label(), "Signing In...");
        assert!(form.banner.is_none());
    }
}
