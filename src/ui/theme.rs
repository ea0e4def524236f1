//! Theme state shared through the context-provider boundary.

use std::fmt;
use std::str::FromStr;

use leptos::prelude::*;
use leptos::tachys::reactive_graph::OwnedView;
use serde::Deserialize;

use crate::error::ThemeParseError;

/// Color scheme applied to the document root.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub enum Theme {
    /// Light background, dark text.
    Light,
    /// Dark background, light text.
    #[default]
    Dark,
}

impl Theme {
    /// Lowercase name, also used as the root CSS class and cookie value.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    #[must_use]
    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }

    /// The other theme.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = ThemeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            _ => Err(ThemeParseError(s.to_string())),
        }
    }
}

impl TryFrom<String> for Theme {
    type Error = ThemeParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Reactive theme handle provided by [`Providers`].
#[derive(Debug, Clone, Copy)]
pub struct ThemeContext {
    theme: RwSignal<Theme>,
}

impl ThemeContext {
    /// Create a context holding `theme`.
    pub fn new(theme: Theme) -> Self {
        Self {
            theme: RwSignal::new(theme),
        }
    }

    /// Current theme, without subscribing.
    pub fn get(&self) -> Theme {
        self.theme.get_untracked()
    }

    pub fn set(&self, theme: Theme) {
        self.theme.set(theme);
    }

    /// Flip between light and dark.
    pub fn toggle(&self) {
        self.theme.update(|theme| *theme = theme.toggled());
    }
}

/// Read the nearest [`ThemeContext`].
///
/// Falls back to a context holding the default theme when no provider is
/// mounted above the caller.
pub fn use_theme() -> ThemeContext {
    use_context::<ThemeContext>().unwrap_or_else(|| ThemeContext::new(Theme::default()))
}

/// Application context provider.
///
/// Provides a [`ThemeContext`] to every descendant. The context lives in a
/// child owner that travels with the rendered subtree, so siblings rendered
/// after the provider do not see it, and it is dropped with the subtree.
///
/// # Example
///
/// ```rust,ignore
/// view! {
///     <Providers theme=Theme::Light>
///         <ThemeToggle />
///     </Providers>
/// }
/// ```
#[component]
pub fn Providers(
    /// Initial theme; defaults to [`Theme::default`].
    #[prop(optional)]
    theme: Option<Theme>,
    /// Subtree that can read the provided context.
    children: Children,
) -> impl IntoView {
    let owner = Owner::current().map_or_else(Owner::new, |parent| parent.child());
    let children = owner.with(|| {
        provide_context(ThemeContext::new(theme.unwrap_or_default()));
        children()
    });

    OwnedView::new_with_owner(children, owner)
}
