//! Chat navigation rail.

use leptos::prelude::*;

use super::nav::{NAV_ITEMS, NavItem};
use crate::ui::components::{
    Avatar, Button, ButtonSize, ButtonVariant, Icon, IconName, ThemeToggle,
};

/// Fixed vertical navigation rail.
///
/// Renders, top to bottom: the brand glyph, the new-chat action, the
/// [`NAV_ITEMS`] links, then the theme toggle, settings, logout and the
/// avatar placeholder. Button behavior is attached client-side through the
/// `data-action` hooks.
#[component]
pub fn Sidebar() -> impl IntoView {
    view! {
        <aside
            class="w-16 md:w-20 lg:w-20 border-r border-border bg-card flex flex-col items-center py-6 h-screen select-none z-20 transition-colors duration-300"
            data-rail=""
        >
            // Logo
            <div class="mb-8" data-rail-section="brand">
                <div class="w-10 h-10 rounded-xl bg-gradient-to-br from-orange-400 to-orange-600 flex items-center justify-center text-white font-bold text-xl shadow-lg ring-2 ring-orange-500/20">
                    "T"
                </div>
            </div>

            <Button
                variant=ButtonVariant::Muted
                size=ButtonSize::Rail
                action="new-chat"
                label="New chat"
                class="mb-8"
            >
                <Icon
                    name=IconName::Plus
                    class="w-6 h-6 text-foreground group-hover:scale-110 transition-transform"
                />
            </Button>

            <nav class="flex-1 flex flex-col gap-4 w-full items-center" aria-label="Main" hx-boost="true">
                {NAV_ITEMS
                    .iter()
                    .enumerate()
                    .map(|(index, item)| view! { <NavLink index=index item=*item /> })
                    .collect_view()}
            </nav>

            <div class="flex flex-col gap-4 items-center" data-rail-section="actions">
                <ThemeToggle />
                <Button variant=ButtonVariant::Ghost size=ButtonSize::Rail action="settings" label="Settings">
                    <Icon name=IconName::Settings class="w-6 h-6" />
                </Button>
                <Button variant=ButtonVariant::Danger size=ButtonSize::Rail action="logout" label="Log out">
                    <Icon name=IconName::LogOut class="w-6 h-6" />
                </Button>

                <Avatar class="mt-2" />
            </div>
        </aside>
    }
}

/// Rail link with a hover tooltip.
#[component]
fn NavLink(index: usize, item: NavItem) -> impl IntoView {
    let active = if item.active { "true" } else { "false" };
    let current = item.active.then_some("page");

    view! {
        <a
            href=item.href
            class=item.classes()
            data-nav-item=index.to_string()
            data-nav-label=item.label
            data-active=active
            aria-current=current
            aria-label=item.label
        >
            <Icon name=item.icon class="w-6 h-6" />

            <span
                role="tooltip"
                class="absolute left-14 bg-popover text-popover-foreground px-2 py-1 rounded text-sm opacity-0 group-hover:opacity-100 transition-opacity whitespace-nowrap pointer-events-none shadow-md border border-border bg-card"
            >
                {item.label}
            </span>
        </a>
    }
}
