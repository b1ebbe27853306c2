// SPDX-FileCopyrightText: 2026 Arturo Morgadanes Fontanería
// SPDX-License-Identifier: Apache-2.0

//! Backend for the Arturo Morgadanes plumbing website.
//!
//! The heart of the service is the contact notification pipeline behind
//! `POST /api/contact`:
//!
//! - Fixed-window rate limiting per client (5 requests/hour default)
//! - Required-field and phone/email shape validation
//! - HTML escaping of free-text fields
//! - Notification composition (subject + HTML body, urgent variant)
//! - Dispatch through a transactional email provider
//!
//! Around it sit the read-only JSON content API (business metadata,
//! services, cities, testimonials) and the flat-data admin API the site's
//! admin pages use. No database: content lives in memory for the lifetime
//! of the process.

pub mod config;
pub mod content;
pub mod error;
pub mod handlers;
pub mod limiter;
pub mod mailer;
pub mod markdown;
pub mod notify;
pub mod sanitize;
pub mod validator;

pub use config::Config;
pub use error::ContactError;
pub use limiter::{RateLimitResult, RateLimiter};
pub use mailer::{DispatchError, Mailer, ResendMailer};
pub use notify::NotificationMessage;
pub use validator::{ContactForm, ContactValidator, ValidationResult};
