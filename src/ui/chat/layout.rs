//! Chat page layout.

use leptos::prelude::*;

use super::Sidebar;
use crate::ui::theme::{Providers, Theme};

/// Two-pane chat layout.
///
/// Places the [`Sidebar`] rail beside the page body, both inside
/// [`Providers`], so the theme context lives exactly as long as the layout.
///
/// # Example
///
/// ```rust,ignore
/// view! {
///     <ChatLayout theme=Theme::Dark>
///         <ChatWelcome />
///     </ChatLayout>
/// }
/// ```
#[component]
pub fn ChatLayout(
    /// Initial theme handed to the provider.
    #[prop(optional)]
    theme: Option<Theme>,
    /// Page body, rendered unmodified in the main region.
    children: Children,
) -> impl IntoView {
    view! {
        <Providers theme=theme.unwrap_or_default()>
            <div class="flex h-screen w-full bg-background overflow-hidden relative" data-layout="chat">
                <Sidebar />
                <main class="flex-1 h-full min-w-0 bg-background transition-colors duration-300">
                    {children()}
                </main>
            </div>
        </Providers>
    }
}
