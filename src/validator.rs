// SPDX-FileCopyrightText: 2026 Arturo Morgadanes Fontanería
// SPDX-License-Identifier: Apache-2.0

//! Contact form validation.
//!
//! Rules are applied in order, first failure wins:
//!
//! 1. `nombre` and `telefono` must be present and non-empty
//! 2. `telefono` must look like a phone number (optional leading `+`, then
//!    at least 9 digits/spaces/hyphens/parentheses)
//! 3. `email`, when provided, must look like `local@domain.tld`
//!
//! `servicio`, `mensaje` and `urgente` are accepted as-is. Error display
//! strings are the Spanish messages the site has always returned; they are
//! part of the HTTP contract.

use regex::Regex;
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

const PHONE_PATTERN: &str = r"^[+]?[0-9\s\-()]{9,}$";
const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";

/// Contact form as received from the website (Spanish wire field names).
#[derive(Debug, Clone, Deserialize)]
pub struct ContactForm {
    #[serde(rename = "nombre", default)]
    pub name: String,

    #[serde(rename = "telefono", default)]
    pub phone: String,

    #[serde(default)]
    pub email: Option<String>,

    #[serde(rename = "servicio", default)]
    pub service: Option<String>,

    #[serde(rename = "mensaje", default)]
    pub message: Option<String>,

    #[serde(rename = "urgente", default)]
    pub urgent: Option<bool>,
}

impl ContactForm {
    /// Optional field, with the empty string treated as absent the way the
    /// site's form submits it.
    pub fn email(&self) -> Option<&str> {
        self.email.as_deref().filter(|s| !s.is_empty())
    }

    pub fn service(&self) -> Option<&str> {
        self.service.as_deref().filter(|s| !s.is_empty())
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref().filter(|s| !s.is_empty())
    }

    pub fn is_urgent(&self) -> bool {
        self.urgent.unwrap_or(false)
    }
}

/// Validation error types. Display strings are the localized messages
/// surfaced verbatim to the caller.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Nombre y teléfono son obligatorios")]
    MissingRequired,

    #[error("Número de teléfono no válido")]
    BadPhone,

    #[error("Email no válido")]
    BadEmail,
}

impl ValidationError {
    /// Stable machine-readable reason code.
    pub fn code(&self) -> &'static str {
        match self {
            Self::MissingRequired => "missing_required",
            Self::BadPhone => "bad_phone",
            Self::BadEmail => "bad_email",
        }
    }
}

/// Result of validation.
#[derive(Debug, Clone)]
pub enum ValidationResult {
    /// Request is valid
    Valid,
    /// Request is invalid
    Invalid(ValidationError),
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationResult::Valid)
    }

    pub fn error(&self) -> Option<&ValidationError> {
        match self {
            ValidationResult::Valid => None,
            ValidationResult::Invalid(e) => Some(e),
        }
    }
}

/// Contact form validator.
pub struct ContactValidator {
    phone: Regex,
    email: Regex,
}

impl ContactValidator {
    /// Create a validator with the phone/email shape patterns compiled.
    pub fn new() -> Self {
        Self {
            phone: Regex::new(PHONE_PATTERN).expect("phone pattern is valid"),
            email: Regex::new(EMAIL_PATTERN).expect("email pattern is valid"),
        }
    }

    /// Validate a contact form.
    pub fn validate(&self, form: &ContactForm) -> ValidationResult {
        if form.name.is_empty() || form.phone.is_empty() {
            debug!("missing required contact fields");
            return ValidationResult::Invalid(ValidationError::MissingRequired);
        }

        if !self.phone.is_match(&form.phone) {
            debug!(phone = %form.phone, "phone failed shape check");
            return ValidationResult::Invalid(ValidationError::BadPhone);
        }

        if let Some(email) = form.email() {
            if !self.email.is_match(email) {
                debug!(email = %email, "email failed shape check");
                return ValidationResult::Invalid(ValidationError::BadEmail);
            }
        }

        ValidationResult::Valid
    }
}

impl Default for ContactValidator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(name: &str, phone: &str) -> ContactForm {
        ContactForm {
            name: name.to_string(),
            phone: phone.to_string(),
            email: None,
            service: None,
            message: None,
            urgent: None,
        }
    }

    #[test]
    fn missing_name_or_phone_is_rejected_first() {
        let validator = ContactValidator::new();

        let result = validator.validate(&form("", "123456789"));
        assert_eq!(result.error(), Some(&ValidationError::MissingRequired));

        let result = validator.validate(&form("Ana", ""));
        assert_eq!(result.error(), Some(&ValidationError::MissingRequired));
    }

    #[test]
    fn phone_shape() {
        let validator = ContactValidator::new();

        for good in ["+34 629 464 508", "34629464508", "986-123-456-7", "(986) 123 456"] {
            assert!(
                validator.validate(&form("Ana", good)).is_valid(),
                "{good:?} should pass the shape check"
            );
        }

        for bad in ["abc", "12", "+34", "629464508x", "629 46 4"] {
            assert_eq!(
                validator.validate(&form("Ana", bad)).error(),
                Some(&ValidationError::BadPhone),
                "{bad:?} should fail the shape check"
            );
        }
    }

    #[test]
    fn email_only_checked_when_present() {
        let validator = ContactValidator::new();

        let mut f = form("Ana", "629464508");
        assert!(validator.validate(&f).is_valid());

        // Empty string behaves like an absent field.
        f.email = Some(String::new());
        assert!(validator.validate(&f).is_valid());

        f.email = Some("ana@example.com".to_string());
        assert!(validator.validate(&f).is_valid());

        for bad in ["foo", "foo@bar", "foo bar@baz.com", "@baz.com"] {
            f.email = Some(bad.to_string());
            assert_eq!(
                validator.validate(&f).error(),
                Some(&ValidationError::BadEmail),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn phone_is_checked_before_email() {
        let validator = ContactValidator::new();

        let mut f = form("Ana", "abc");
        f.email = Some("not-an-email".to_string());
        assert_eq!(
            validator.validate(&f).error(),
            Some(&ValidationError::BadPhone)
        );
    }

    #[test]
    fn error_codes_are_stable() {
        assert_eq!(ValidationError::MissingRequired.code(), "missing_required");
        assert_eq!(ValidationError::BadPhone.code(), "bad_phone");
        assert_eq!(ValidationError::BadEmail.code(), "bad_email");
    }

    #[test]
    fn wire_field_names_are_spanish() {
        let form: ContactForm = serde_json::from_str(
            r#"{"nombre":"Ana","telefono":"629464508","servicio":"Desatascos","urgente":true}"#,
        )
        .unwrap();
        assert_eq!(form.name, "Ana");
        assert_eq!(form.phone, "629464508");
        assert_eq!(form.service(), Some("Desatascos"));
        assert!(form.is_urgent());
    }
}
