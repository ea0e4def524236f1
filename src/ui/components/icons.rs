//! SVG icon components.
//!
//! Icons are rendered inline as SVG elements for optimal performance
//! and styling flexibility. Each glyph is keyed by [`IconName`].

use leptos::prelude::*;

/// Common icon size class.
const ICON_SIZE: &str = "h-4 w-4";

/// Names of the available glyphs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconName {
    Search,
    LayoutGrid,
    MessageSquare,
    FolderOpen,
    Plus,
    Settings,
    LogOut,
    Wrench,
    Sun,
    Moon,
}

impl IconName {
    /// Kebab-case name, rendered as `data-icon`.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Search => "search",
            Self::LayoutGrid => "layout-grid",
            Self::MessageSquare => "message-square",
            Self::FolderOpen => "folder-open",
            Self::Plus => "plus",
            Self::Settings => "settings",
            Self::LogOut => "log-out",
            Self::Wrench => "wrench",
            Self::Sun => "sun",
            Self::Moon => "moon",
        }
    }
}

/// Inline stroked icon.
///
/// # Example
///
/// ```rust,ignore
/// view! {
///     <Icon name=IconName::Search class="w-6 h-6" />
/// }
/// ```
#[component]
pub fn Icon(
    /// Which glyph to draw.
    name: IconName,
    /// Size and color classes; replaces the default size when set.
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    let classes = if class.is_empty() {
        ICON_SIZE.to_string()
    } else {
        class.to_string()
    };

    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
            data-icon=name.as_str()
            class=classes
        >
            {glyph(name)}
        </svg>
    }
}

fn glyph(name: IconName) -> AnyView {
    match name {
        IconName::Search => view! {
            <circle cx="11" cy="11" r="8" />
            <path d="m21 21-4.3-4.3" />
        }
        .into_any(),
        IconName::LayoutGrid => view! {
            <rect width="7" height="7" x="3" y="3" rx="1" />
            <rect width="7" height="7" x="14" y="3" rx="1" />
            <rect width="7" height="7" x="14" y="14" rx="1" />
            <rect width="7" height="7" x="3" y="14" rx="1" />
        }
        .into_any(),
        IconName::MessageSquare => view! {
            <path d="M21 15a2 2 0 0 1-2 2H7l-4 4V5a2 2 0 0 1 2-2h14a2 2 0 0 1 2 2z" />
        }
        .into_any(),
        IconName::FolderOpen => view! {
            <path d="m6 14 1.5-2.9A2 2 0 0 1 9.24 10H20a2 2 0 0 1 1.94 2.5l-1.54 6a2 2 0 0 1-1.95 1.5H4a2 2 0 0 1-2-2V5a2 2 0 0 1 2-2h3.9a2 2 0 0 1 1.69.9l.81 1.2a2 2 0 0 0 1.67.9H18a2 2 0 0 1 2 2v2" />
        }
        .into_any(),
        IconName::Plus => view! {
            <path d="M5 12h14" />
            <path d="M12 5v14" />
        }
        .into_any(),
        IconName::Settings => view! {
            <path d="M12.22 2h-.44a2 2 0 0 0-2 2v.18a2 2 0 0 1-1 1.73l-.43.25a2 2 0 0 1-2 0l-.15-.08a2 2 0 0 0-2.73.73l-.22.38a2 2 0 0 0 .73 2.73l.15.1a2 2 0 0 1 1 1.72v.51a2 2 0 0 1-1 1.74l-.15.09a2 2 0 0 0-.73 2.73l.22.38a2 2 0 0 0 2.73.73l.15-.08a2 2 0 0 1 2 0l.43.25a2 2 0 0 1 1 1.73V20a2 2 0 0 0 2 2h.44a2 2 0 0 0 2-2v-.18a2 2 0 0 1 1-1.73l.43-.25a2 2 0 0 1 2 0l.15.08a2 2 0 0 0 2.73-.73l.22-.39a2 2 0 0 0-.73-2.73l-.15-.08a2 2 0 0 1-1-1.74v-.5a2 2 0 0 1 1-1.74l.15-.09a2 2 0 0 0 .73-2.73l-.22-.38a2 2 0 0 0-2.73-.73l-.15.08a2 2 0 0 1-2 0l-.43-.25a2 2 0 0 1-1-1.73V4a2 2 0 0 0-2-2z" />
            <circle cx="12" cy="12" r="3" />
        }
        .into_any(),
        IconName::LogOut => view! {
            <path d="M9 21H5a2 2 0 0 1-2-2V5a2 2 0 0 1 2-2h4" />
            <polyline points="16 17 21 12 16 7" />
            <line x1="21" x2="9" y1="12" y2="12" />
        }
        .into_any(),
        IconName::Wrench => view! {
            <path d="M14.7 6.3a1 1 0 0 0 0 1.4l1.6 1.6a1 1 0 0 0 1.4 0l3.77-3.77a6 6 0 0 1-7.94 7.94l-6.91 6.91a2.12 2.12 0 0 1-3-3l6.91-6.91a6 6 0 0 1 7.94-7.94l-3.76 3.76z" />
        }
        .into_any(),
        IconName::Sun => view! {
            <circle cx="12" cy="12" r="4" />
            <path d="M12 2v2" />
            <path d="M12 20v2" />
            <path d="m4.93 4.93 1.41 1.41" />
            <path d="m17.66 17.66 1.41 1.41" />
            <path d="M2 12h2" />
            <path d="M20 12h2" />
            <path d="m6.34 17.66-1.41 1.41" />
            <path d="m19.07 4.93-1.41 1.41" />
        }
        .into_any(),
        IconName::Moon => view! {
            <path d="M12 3a6 6 0 0 0 9 9 9 9 0 1 1-9-9Z" />
        }
        .into_any(),
    }
}
