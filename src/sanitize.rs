// SPDX-FileCopyrightText: 2026 Arturo Morgadanes Fontanería
// SPDX-License-Identifier: Apache-2.0

//! Escaping of free-text form fields before they are interpolated into the
//! notification HTML.
//!
//! This is a narrow defense against markup injection in the generated
//! email, not a general HTML sanitizer: exactly the four characters `<`,
//! `>`, `"` and `'` are replaced, nothing else is stripped or rewritten.

use crate::validator::ContactForm;

/// Replace HTML-significant characters with their entity equivalents in a
/// single left-to-right pass.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}

/// A contact form with every free-text field escaped, ready for the
/// notification composer.
#[derive(Debug, Clone)]
pub struct SanitizedContact {
    pub name: String,
    pub phone: String,
    pub email: Option<String>,
    pub service: Option<String>,
    pub message: Option<String>,
    pub urgent: bool,
}

impl SanitizedContact {
    /// Escape each free-text field of a validated form. Optional fields
    /// that were absent or empty stay absent.
    pub fn from_form(form: &ContactForm) -> Self {
        Self {
            name: escape_html(&form.name),
            phone: escape_html(&form.phone),
            email: form.email().map(escape_html),
            service: form.service().map(escape_html),
            message: form.message().map(escape_html),
            urgent: form.is_urgent(),
        }
    }
}
