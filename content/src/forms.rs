//! Local validation of login and signup forms.
//!
//! Validation runs before any request is built; a form that fails here is
//! never sent to the backend.

#[cfg(test)]
#[path = "forms_test.rs"]
mod forms_test;

use serde::Serialize;

use crate::session::Role;

/// Synchronous form error, shown inline next to the form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Le champ « {0} » est obligatoire.")]
    MissingField(&'static str),
    #[error("Adresse e-mail invalide.")]
    InvalidEmail,
    #[error("Les mots de passe ne correspondent pas.")]
    PasswordMismatch,
}

fn required(value: &str, field: &'static str) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::MissingField(field));
    }
    Ok(trimmed.to_owned())
}

fn email(value: &str) -> Result<String, ValidationError> {
    let email = required(value, "email")?;
    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() && !domain.is_empty() => Ok(email),
        _ => Err(ValidationError::InvalidEmail),
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    /// # Errors
    ///
    /// Returns the first missing or malformed field.
    pub fn validate(&self) -> Result<LoginRequest, ValidationError> {
        let email = email(&self.email)?;
        if self.password.trim().is_empty() {
            return Err(ValidationError::MissingField("mot de passe"));
        }
        Ok(LoginRequest { email, password: self.password.clone() })
    }
}

/// Raw signup input for any of the three account types.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SignupForm {
    pub role: Role,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
    pub password_confirmation: String,
    /// Required for doctors.
    pub specialty: String,
    /// Required for clinics.
    pub address: String,
}

impl SignupForm {
    #[must_use]
    pub fn new(role: Role) -> Self {
        Self {
            role,
            name: String::new(),
            email: String::new(),
            phone: String::new(),
            password: String::new(),
            password_confirmation: String::new(),
            specialty: String::new(),
            address: String::new(),
        }
    }

    /// Check required fields in display order, then the password confirmation.
    ///
    /// # Errors
    ///
    /// Returns the first [`ValidationError`] encountered.
    pub fn validate(&self) -> Result<SignupRequest, ValidationError> {
        let name = required(&self.name, "nom")?;
        let email = email(&self.email)?;
        let phone = required(&self.phone, "téléphone")?;
        let specialty = match self.role {
            Role::Medecin => Some(required(&self.specialty, "spécialité")?),
            Role::Patient | Role::Clinique => None,
        };
        let address = match self.role {
            Role::Clinique => Some(required(&self.address, "adresse")?),
            Role::Patient | Role::Medecin => None,
        };
        if self.password.trim().is_empty() {
            return Err(ValidationError::MissingField("mot de passe"));
        }
        if self.password_confirmation.trim().is_empty() {
            return Err(ValidationError::MissingField("confirmation du mot de passe"));
        }
        if self.password != self.password_confirmation {
            return Err(ValidationError::PasswordMismatch);
        }

        Ok(SignupRequest {
            role: self.role,
            name,
            email,
            phone,
            password: self.password.clone(),
            password_confirmation: self.password_confirmation.clone(),
            specialty,
            address,
        })
    }
}

/// Validated signup payload, serialized as the register request body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SignupRequest {
    #[serde(skip)]
    pub role: Role,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
    pub password_confirmation: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub specialty: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}
