// SPDX-FileCopyrightText: 2026 Arturo Morgadanes Fontanería
// SPDX-License-Identifier: Apache-2.0

//! Contact intake and content API for the Arturo Morgadanes plumbing
//! website.
//!
//! ## Configuration
//!
//! Configuration is loaded from environment variables:
//!
//! - `BIND_ADDR`: Server bind address (default: 0.0.0.0:8080)
//! - `RATE_LIMIT_MAX`: Max contact requests per window per client (default: 5)
//! - `RATE_LIMIT_WINDOW_SECS`: Rate limit window in seconds (default: 3600)
//! - `RESEND_API_KEY`: Transactional email provider key (unset: contact
//!   requests fail with a configuration error, everything else serves)
//! - `RESEND_DOMAIN`: Sender domain (default: arturomorgadanes.com)

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::sync::RwLock;
use tracing::{info, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use morgadanes_api::{
    config::Config,
    content::SiteContent,
    handlers::{router, AppState},
    limiter::RateLimiter,
    mailer::ResendMailer,
    validator::ContactValidator,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(fmt::layer().json())
        .with(
            EnvFilter::builder()
                .with_default_directive(Level::INFO.into())
                .from_env_lossy(),
        )
        .init();

    // Load configuration
    let config = load_config();
    info!(
        bind_addr = %config.bind_addr,
        max_requests = config.rate_limit.max_requests,
        window_secs = config.rate_limit.window_secs,
        mail_configured = config.mail.api_key.is_some(),
        "Starting contact intake service"
    );

    // Create application state
    let limiter = RateLimiter::new(config.rate_limit.clone());
    let validator = ContactValidator::new();
    let mailer = Arc::new(ResendMailer::new(&config.mail)?);

    let state = Arc::new(AppState {
        limiter,
        validator,
        mailer,
        content: RwLock::new(SiteContent::seed()),
        config: config.clone(),
    });

    // Spawn cleanup task for lapsed rate limit records
    let cleanup_state = state.clone();
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(Duration::from_secs(600));
        loop {
            interval.tick().await;
            cleanup_state.limiter.cleanup().await;
        }
    });

    // Build router and start server
    let app = router(state);
    let addr: SocketAddr = config.bind_addr.parse()?;
    let listener = TcpListener::bind(addr).await?;
    info!(addr = %addr, "Server listening");

    axum::serve(listener, app).await?;

    Ok(())
}

/// Load configuration from environment variables.
fn load_config() -> Config {
    Config {
        bind_addr: std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string()),
        rate_limit: morgadanes_api::config::RateLimitConfig {
            max_requests: std::env::var("RATE_LIMIT_MAX")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(5),
            window_secs: std::env::var("RATE_LIMIT_WINDOW_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3600),
        },
        mail: morgadanes_api::config::MailConfig {
            api_key: std::env::var("RESEND_API_KEY").ok().filter(|k| !k.is_empty()),
            domain: std::env::var("RESEND_DOMAIN")
                .unwrap_or_else(|_| "arturomorgadanes.com".to_string()),
        },
    }
}
