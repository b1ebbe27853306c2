// SPDX-FileCopyrightText: 2026 Arturo Morgadanes Fontanería
// SPDX-License-Identifier: Apache-2.0

//! HTTP handlers: the contact pipeline, the public content API and the
//! admin CRUD API.
//!
//! The contact handler is a linear sequence of hard gates (rate limit,
//! validate, sanitize, compose, dispatch); no step runs once a prior one
//! has failed. The rate limit is checked first: attempts that later fail
//! validation still count against the client's window, so the endpoint
//! cannot be probed for free.

use crate::config::Config;
use crate::content::{Business, City, Service, SiteContent, Testimonial};
use crate::error::{ContactError, ErrorResponse};
use crate::limiter::RateLimiter;
use crate::mailer::Mailer;
use crate::markdown;
use crate::notify::compose;
use crate::sanitize::SanitizedContact;
use crate::validator::{ContactForm, ContactValidator, ValidationResult};
use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post, put};
use axum::{Json, Router};
use chrono::Utc;
use serde::Serialize;
use std::sync::Arc;
use tokio::sync::RwLock;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{debug, info};

/// Shared application state.
pub struct AppState {
    pub limiter: RateLimiter,
    pub validator: ContactValidator,
    pub mailer: Arc<dyn Mailer>,
    pub content: RwLock<SiteContent>,
    pub config: Config,
}

/// Build the service router.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/contact", post(contact))
        .route("/api/business", get(get_business))
        .route("/api/services", get(list_services))
        .route("/api/services/:slug", get(get_service))
        .route("/api/cities", get(list_cities))
        .route("/api/cities/:slug", get(get_city))
        .route("/api/testimonials", get(list_testimonials))
        .route("/api/admin/business", put(update_business))
        .route("/api/admin/testimonials", post(create_testimonial))
        .route(
            "/api/admin/testimonials/:index",
            put(update_testimonial).delete(delete_testimonial),
        )
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
    pub version: &'static str,
}

/// Contact success response.
#[derive(Debug, Serialize)]
pub struct ContactResponse {
    pub success: bool,
}

/// Service detail with the markdown description rendered to HTML.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceDetail {
    #[serde(flatten)]
    pub service: Service,
    pub description_html: String,
}

/// City detail with the markdown local content rendered to HTML.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CityDetail {
    #[serde(flatten)]
    pub city: City,
    pub content_html: String,
}

/// Health check endpoint.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        service: "morgadanes-api",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Derive the rate-limit key from proxy headers.
///
/// First entry of `x-forwarded-for`, else `x-real-ip`, else the literal
/// `"unknown"`, which means every client without proxy headers shares one
/// bucket. Known limitation, kept as documented behavior.
fn client_key(headers: &HeaderMap) -> String {
    header_value(headers, "x-forwarded-for")
        .and_then(|v| v.split(',').next().map(|s| s.trim().to_string()))
        .filter(|s| !s.is_empty())
        .or_else(|| header_value(headers, "x-real-ip").map(str::to_string))
        .unwrap_or_else(|| "unknown".to_string())
}

fn header_value<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .filter(|s| !s.is_empty())
}

/// Handle a contact form submission.
pub async fn contact(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Json(form): Json<ContactForm>,
) -> Result<Json<ContactResponse>, ContactError> {
    let key = client_key(&headers);
    debug!(key = %key, urgent = form.is_urgent(), "processing contact request");

    if !state.limiter.check(&key).await.is_allowed() {
        return Err(ContactError::RateLimited);
    }

    if let ValidationResult::Invalid(err) = state.validator.validate(&form) {
        return Err(err.into());
    }

    let safe = SanitizedContact::from_form(&form);
    let recipient = state.content.read().await.business.email.clone();
    let message = compose(&safe, &recipient, &state.config.mail.domain, Utc::now());

    state.mailer.send(&message).await?;

    info!(urgent = safe.urgent, "contact notification dispatched");
    Ok(Json(ContactResponse { success: true }))
}

pub async fn get_business(State(state): State<Arc<AppState>>) -> Json<Business> {
    Json(state.content.read().await.business.clone())
}

pub async fn list_services(State(state): State<Arc<AppState>>) -> Json<Vec<Service>> {
    Json(state.content.read().await.services.clone())
}

pub async fn get_service(
    State(state): State<Arc<AppState>>,
    Path(slug): Path<String>,
) -> impl IntoResponse {
    let content = state.content.read().await;
    match content.service_by_slug(&slug) {
        Some(service) => Json(ServiceDetail {
            description_html: markdown::render(&service.description),
            service: service.clone(),
        })
        .into_response(),
        None => not_found(),
    }
}

pub async fn list_cities(State(state): State<Arc<AppState>>) -> Json<Vec<City>> {
    Json(state.content.read().await.cities.clone())
}

pub async fn get_city(
    State(state): State<Arc<AppState>>,
    Path(slug): Path<String>,
) -> impl IntoResponse {
    let content = state.content.read().await;
    match content.city_by_slug(&slug) {
        Some(city) => Json(CityDetail {
            content_html: markdown::render(&city.local_content),
            city: city.clone(),
        })
        .into_response(),
        None => not_found(),
    }
}

pub async fn list_testimonials(State(state): State<Arc<AppState>>) -> Json<Vec<Testimonial>> {
    Json(state.content.read().await.testimonials.clone())
}

/// Replace the business metadata.
pub async fn update_business(
    State(state): State<Arc<AppState>>,
    Json(business): Json<Business>,
) -> Json<Business> {
    let mut content = state.content.write().await;
    info!(email = %business.email, "business metadata updated");
    content.business = business;
    Json(content.business.clone())
}

/// Insert a testimonial at the front of the list (newest first).
pub async fn create_testimonial(
    State(state): State<Arc<AppState>>,
    Json(testimonial): Json<Testimonial>,
) -> impl IntoResponse {
    let mut content = state.content.write().await;
    content.testimonials.insert(0, testimonial.clone());
    info!(total = content.testimonials.len(), "testimonial added");
    (StatusCode::CREATED, Json(testimonial))
}

/// Replace the testimonial at `index`.
pub async fn update_testimonial(
    State(state): State<Arc<AppState>>,
    Path(index): Path<usize>,
    Json(testimonial): Json<Testimonial>,
) -> impl IntoResponse {
    let mut content = state.content.write().await;
    match content.testimonials.get_mut(index) {
        Some(slot) => {
            *slot = testimonial.clone();
            Json(testimonial).into_response()
        }
        None => not_found(),
    }
}

/// Remove the testimonial at `index`.
pub async fn delete_testimonial(
    State(state): State<Arc<AppState>>,
    Path(index): Path<usize>,
) -> impl IntoResponse {
    let mut content = state.content.write().await;
    if index < content.testimonials.len() {
        content.testimonials.remove(index);
        info!(total = content.testimonials.len(), "testimonial removed");
        StatusCode::NO_CONTENT.into_response()
    } else {
        not_found()
    }
}

fn not_found() -> axum::response::Response {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse {
            error: "No encontrado".to_string(),
            code: "not_found",
        }),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers(pairs: &[(&str, &str)]) -> HeaderMap {
        let mut map = HeaderMap::new();
        for (name, value) in pairs {
            map.append(
                axum::http::HeaderName::try_from(*name).unwrap(),
                HeaderValue::from_str(value).unwrap(),
            );
        }
        map
    }

    #[test]
    fn forwarded_for_takes_the_first_entry() {
        let map = headers(&[("x-forwarded-for", "203.0.113.7, 10.0.0.1, 10.0.0.2")]);
        assert_eq!(client_key(&map), "203.0.113.7");
    }

    #[test]
    fn real_ip_is_the_fallback() {
        let map = headers(&[("x-real-ip", "198.51.100.4")]);
        assert_eq!(client_key(&map), "198.51.100.4");

        // An empty forwarded-for header falls through too.
        let map = headers(&[("x-forwarded-for", ""), ("x-real-ip", "198.51.100.4")]);
        assert_eq!(client_key(&map), "198.51.100.4");
    }

    #[test]
    fn unproxied_clients_share_one_bucket() {
        assert_eq!(client_key(&HeaderMap::new()), "unknown");
    }
}
