//! Sign-in forms and the parent gate
//!
//! Login and signup are stubs: they only check that fields are present
//! (and that signup passwords agree). Nothing is sent anywhere.

pub mod pin;

pub use pin::{ParentGate, PinPad, PIN_LENGTH};

/// Form and gate failures shown inline to the user
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Please fill in your {0}")]
    MissingField(&'static str),
    #[error("Passwords don't match!")]
    PasswordMismatch,
    #[error("Please agree to the terms and conditions")]
    TermsNotAccepted,
    #[error("Incorrect PIN. Please try again.")]
    IncorrectPin,
    /// Wrong guess while the gate still uses the demo PIN
    #[error("Incorrect PIN. Try 1234 for demo.")]
    IncorrectDemoPin,
}

/// A login form that passed presence checks
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// A signup form that passed presence checks
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignupRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Strength hint shown under the signup password field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasswordStrength {
    Weak,
    Medium,
    Strong,
}

impl PasswordStrength {
    pub fn hint(&self) -> &'static str {
        match self {
            PasswordStrength::Weak => "Weak password - use at least 6 characters",
            PasswordStrength::Medium => "Medium strength - add more characters",
            PasswordStrength::Strong => "Strong password!",
        }
    }
}

fn require(value: &str, field: &'static str) -> Result<(), ValidationError> {
    if value.is_empty() {
        Err(ValidationError::MissingField(field))
    } else {
        Ok(())
    }
}

pub fn validate_login(email: &str, password: &str) -> Result<LoginRequest, ValidationError> {
    require(email, "email")?;
    require(password, "password")?;
    Ok(LoginRequest {
        email: email.to_string(),
        password: password.to_string(),
    })
}

/// Check a signup form. Mismatched passwords and unaccepted terms are
/// reported before missing fields.
pub fn validate_signup(
    name: &str,
    email: &str,
    password: &str,
    confirm: &str,
    agreed_terms: bool,
) -> Result<SignupRequest, ValidationError> {
    if password != confirm {
        return Err(ValidationError::PasswordMismatch);
    }
    if !agreed_terms {
        return Err(ValidationError::TermsNotAccepted);
    }
    require(name, "name")?;
    require(email, "email")?;
    require(password, "password")?;
    Ok(SignupRequest {
        name: name.to_string(),
        email: email.to_string(),
        password: password.to_string(),
    })
}

pub fn password_strength(password: &str) -> PasswordStrength {
    match password.chars().count() {
        n if n >= 8 => PasswordStrength::Strong,
        n if n >= 6 => PasswordStrength::Medium,
        _ => PasswordStrength::Weak,
    }
}

/// Greeting name taken from the part of the email before `@`
pub fn display_name(email: &str) -> String {
    email.split('@').next().unwrap_or_default().to_string()
}
