//! UI components and layouts.
//!
//! This module provides Leptos SSR components for rendering the Toolify
//! front end, following ShadCN-UI design principles.
//!
//! # Structure
//!
//! - [`app`]: Document shell and full pages
//! - [`components`]: Reusable ShadCN-style UI components
//! - [`chat`]: Chat layout and navigation rail
//! - [`footer`]: Static site footer
//! - [`theme`]: Theme context and its provider

pub mod app;
pub mod chat;
pub mod components;
pub mod footer;
pub mod theme;

use leptos::prelude::*;

pub use chat::{ChatLayout, Sidebar};
pub use footer::Footer;
pub use theme::{Providers, Theme, ThemeContext, use_theme};

/// Render a view to an HTML string.
///
/// The view is built under a fresh reactive owner, so any context it provides
/// is dropped once rendering finishes.
pub fn render_to_html<F, V>(view: F) -> String
where
    F: FnOnce() -> V,
    V: IntoView,
{
    let owner = Owner::new();
    owner.with(|| view().to_html())
}
