// SPDX-FileCopyrightText: 2026 Arturo Morgadanes Fontanería
// SPDX-License-Identifier: Apache-2.0

//! Error taxonomy for the contact pipeline and its HTTP mapping.
//!
//! Every variant is recoverable per request. Client-caused errors
//! (rate limiting, validation) surface their localized message verbatim;
//! server-caused errors (configuration, dispatch) are logged with detail
//! and surface only a generic message.

use crate::mailer::DispatchError;
use crate::validator::ValidationError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;
use tracing::{error, info};

/// Failure modes of one contact request.
#[derive(Debug, Error)]
pub enum ContactError {
    #[error("Demasiadas solicitudes. Intente de nuevo más tarde.")]
    RateLimited,

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Error de configuración del servidor")]
    Configuration,

    #[error("Error al enviar el mensaje")]
    Dispatch(#[source] DispatchError),
}

impl From<DispatchError> for ContactError {
    fn from(err: DispatchError) -> Self {
        match err {
            DispatchError::NotConfigured => ContactError::Configuration,
            other => ContactError::Dispatch(other),
        }
    }
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: &'static str,
}

impl ContactError {
    fn status(&self) -> StatusCode {
        match self {
            ContactError::RateLimited => StatusCode::TOO_MANY_REQUESTS,
            ContactError::Validation(_) => StatusCode::BAD_REQUEST,
            ContactError::Configuration | ContactError::Dispatch(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn code(&self) -> &'static str {
        match self {
            ContactError::RateLimited => "rate_limited",
            ContactError::Validation(e) => e.code(),
            ContactError::Configuration => "configuration_error",
            ContactError::Dispatch(_) => "provider_error",
        }
    }
}

impl IntoResponse for ContactError {
    fn into_response(self) -> Response {
        // The Display string is the whole client-visible payload; provider
        // detail and credentials stay in the server log.
        match &self {
            ContactError::RateLimited => info!("contact request rate limited"),
            ContactError::Validation(e) => info!(code = e.code(), "contact request rejected"),
            ContactError::Configuration => error!("mail provider API key is not configured"),
            ContactError::Dispatch(source) => error!(%source, "notification dispatch failed"),
        }

        let body = ErrorResponse {
            error: self.to_string(),
            code: self.code(),
        };
        (self.status(), Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn localized_messages_are_the_http_contract() {
        assert_eq!(
            ContactError::RateLimited.to_string(),
            "Demasiadas solicitudes. Intente de nuevo más tarde."
        );
        assert_eq!(
            ContactError::Validation(ValidationError::MissingRequired).to_string(),
            "Nombre y teléfono son obligatorios"
        );
        assert_eq!(
            ContactError::Configuration.to_string(),
            "Error de configuración del servidor"
        );
    }

    #[test]
    fn provider_detail_never_reaches_the_message() {
        let err: ContactError = DispatchError::Provider {
            status: 422,
            detail: "secret provider trace".to_string(),
        }
        .into();
        assert_eq!(err.to_string(), "Error al enviar el mensaje");
        assert_eq!(err.code(), "provider_error");
    }

    #[test]
    fn missing_credential_maps_to_configuration() {
        let err: ContactError = DispatchError::NotConfigured.into();
        assert!(matches!(err, ContactError::Configuration));
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn statuses_match_the_taxonomy() {
        assert_eq!(ContactError::RateLimited.status(), StatusCode::TOO_MANY_REQUESTS);
        assert_eq!(
            ContactError::Validation(ValidationError::BadPhone).status(),
            StatusCode::BAD_REQUEST
        );
    }
}
