//! Toolify Web
//!
//! Server-rendered Toolify front end: a chat layout with a navigation rail,
//! and a landing page with a static footer.
//!
//! # Architecture
//!
//! - **Server**: Axum router serving rendered pages and static assets
//! - **UI**: Leptos SSR components + HTMX + Alpine.js
//!
//! # Modules
//!
//! - [`config`]: Layered configuration (defaults, file, env, CLI)
//! - [`error`]: Error types
//! - [`server`]: Router and server startup
//! - [`ui`]: Components, layouts and pages

// Allow pedantic clippy warnings that don't add value for this codebase
#![allow(clippy::needless_pass_by_value)]
#![allow(clippy::cargo_common_metadata)]
#![allow(clippy::multiple_crate_versions)]

pub mod config;
pub mod error;
pub mod server;
pub mod ui;

use crate::config::AppConfig;

use std::sync::Arc;

/// Application state shared across all handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Global Configuration
    pub config: Arc<AppConfig>,
}

impl AppState {
    pub fn new(config: Arc<AppConfig>) -> Self {
        Self { config }
    }
}
