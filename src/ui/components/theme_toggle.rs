//! Theme toggle button.

use leptos::prelude::*;

use super::{Icon, IconName};
use crate::ui::theme::use_theme;

/// Alpine handler: flip the root class and remember the choice for the
/// next server render.
const TOGGLE_SCRIPT: &str = "dark = !dark; \
     document.documentElement.classList.toggle('dark', dark); \
     document.documentElement.classList.toggle('light', !dark); \
     document.cookie = 'theme=' + (dark ? 'dark' : 'light') + '; path=/; max-age=31536000; samesite=lax'";

/// Light/dark switch.
///
/// Reads the initial theme from the surrounding [`ThemeContext`]
/// (see [`crate::ui::Providers`]); the switch itself runs client-side.
///
/// [`ThemeContext`]: crate::ui::ThemeContext
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let theme = use_theme().get();
    let state = format!("{{ dark: {} }}", theme.is_dark());
    // Hide the inactive icon until Alpine boots.
    let sun_cloak = (!theme.is_dark()).then_some("");
    let moon_cloak = theme.is_dark().then_some("");

    view! {
        <button
            type="button"
            class="p-3 rounded-xl text-muted-foreground hover:text-foreground hover:bg-muted transition-colors"
            aria-label="Toggle theme"
            title="Toggle theme"
            data-theme-toggle=""
            data-theme=theme.as_str()
            x-data=state
            x-on:click=TOGGLE_SCRIPT
        >
            <span x-show="dark" x-cloak=sun_cloak>
                <Icon name=IconName::Sun class="w-6 h-6" />
            </span>
            <span x-show="!dark" x-cloak=moon_cloak>
                <Icon name=IconName::Moon class="w-6 h-6" />
            </span>
        </button>
    }
}
