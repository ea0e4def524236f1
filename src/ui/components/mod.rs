//! ShadCN-style reusable UI components.
//!
//! This module provides a set of composable UI components
//! inspired by shadcn/ui, rendered via Leptos SSR.
//!
//! # Components
//!
//! - [`Button`]: Styled button with variants and an action hook
//! - [`Avatar`]: User avatar with placeholder
//! - [`ThemeToggle`]: Light/dark switch bound to the theme context
//! - [`Icon`]: SVG icons keyed by [`IconName`]

mod avatar;
mod button;
mod icons;
mod theme_toggle;

pub use avatar::Avatar;
pub use button::{Button, ButtonSize, ButtonVariant};
pub use icons::{Icon, IconName};
pub use theme_toggle::ThemeToggle;
