//! Empty-state body for the chat page.

use leptos::prelude::*;

use crate::ui::components::{Icon, IconName};

/// Greeting shown in the main region before a conversation starts.
#[component]
pub fn ChatWelcome(
    /// Headline text.
    #[prop(default = "What can I help you build today?")]
    headline: &'static str,
) -> impl IntoView {
    view! {
        <section class="flex h-full flex-col items-center justify-center gap-4 px-6 text-center" data-chat-welcome="">
            <div class="w-12 h-12 rounded-xl bg-primary/10 flex items-center justify-center">
                <Icon name=IconName::MessageSquare class="w-6 h-6 text-primary" />
            </div>
            <h1 class="font-display text-2xl font-bold text-foreground">{headline}</h1>
            <p class="max-w-md text-sm text-muted-foreground">
                "Start a new chat from the rail, or pick up where you left off."
            </p>
        </section>
    }
}
