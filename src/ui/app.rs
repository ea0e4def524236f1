//! Document shell and full pages.

use leptos::prelude::*;

use crate::ui::chat::{ChatLayout, ChatWelcome};
use crate::ui::components::{Button, ButtonSize, ButtonVariant, Icon, IconName, ThemeToggle};
use crate::ui::footer::{BRAND, Footer};
use crate::ui::render_to_html;
use crate::ui::theme::{Providers, Theme};

const DOCTYPE: &str = "<!DOCTYPE html>";

/// Hides Alpine `x-cloak` elements until Alpine initializes.
const CLOAK_CSS: &str = "[x-cloak] { display: none !important; }";

/// Render the landing page as a complete HTML document.
pub fn landing_page(theme: Theme) -> String {
    let body = render_to_html(move || {
        view! {
            <Document title="Toolify" theme=theme>
                <Providers theme=theme>
                    <LandingPage />
                </Providers>
            </Document>
        }
    });
    format!("{DOCTYPE}{body}")
}

/// Render the chat page as a complete HTML document.
pub fn chat_page(theme: Theme) -> String {
    let body = render_to_html(move || {
        view! {
            <Document title="Chat - Toolify" theme=theme>
                <ChatLayout theme=theme>
                    <ChatWelcome />
                </ChatLayout>
            </Document>
        }
    });
    format!("{DOCTYPE}{body}")
}

/// HTML document shell.
///
/// Tauri-friendly: scripts and styles are served locally, never from a CDN.
#[component]
pub fn Document(
    /// Contents of `<title>`.
    title: &'static str,
    /// Theme class applied to the root element.
    theme: Theme,
    children: Children,
) -> impl IntoView {
    view! {
        <html lang="en" class=theme.as_str()>
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <meta name="description" content="Toolify - AI tools in one place" />

                <title>{title}</title>

                <script src="/static/vendor/htmx-2.0.8.min.js"></script>
                <script defer src="/static/vendor/alpine.min.js"></script>
                <link rel="stylesheet" href="/static/app.css" />
                // Inline so cloaked elements stay hidden even before app.css loads.
                <style>{CLOAK_CSS}</style>
            </head>

            <body class="min-h-screen bg-background text-foreground antialiased">
                {children()}
            </body>
        </html>
    }
}

/// Marketing page; its sections are the footer anchors' targets.
#[component]
fn LandingPage() -> impl IntoView {
    view! {
        <div class="flex min-h-screen flex-col">
            <header class="sticky top-0 z-50 w-full border-b border-border bg-background/95 backdrop-blur">
                <div class="container mx-auto flex h-16 items-center justify-between px-6">
                    <a href="/" class="flex items-center gap-2">
                        <div class="w-8 h-8 rounded-lg bg-primary flex items-center justify-center">
                            <Icon name=IconName::Wrench class="w-5 h-5 text-primary-foreground" />
                        </div>
                        <span class="font-display font-bold text-xl">{BRAND}</span>
                    </a>
                    <div class="flex items-center gap-2">
                        <ThemeToggle />
                        <a href="/chat">
                            <Button variant=ButtonVariant::Primary size=ButtonSize::Md>"Open chat"</Button>
                        </a>
                    </div>
                </div>
            </header>

            <main class="flex-1">
                <section class="container mx-auto px-6 py-24 text-center">
                    <h1 class="font-display text-4xl md:text-5xl font-bold">"Every AI tool, one conversation."</h1>
                    <p class="mx-auto mt-4 max-w-2xl text-muted-foreground">
                        "Toolify brings search, apps and your files into a single chat workspace."
                    </p>
                </section>

                <section id="features" class="container mx-auto px-6 py-16">
                    <h2 class="font-display text-2xl font-bold mb-8">"Features"</h2>
                    <div class="grid gap-6 md:grid-cols-3">
                        <FeatureCard icon=IconName::Search title="Search" description="Ask anything and get sourced answers." />
                        <FeatureCard icon=IconName::LayoutGrid title="Apps" description="Run purpose-built tools without leaving the chat." />
                        <FeatureCard icon=IconName::FolderOpen title="Files" description="Bring documents into the conversation." />
                    </div>
                </section>

                <section id="how-it-works" class="container mx-auto px-6 py-16">
                    <h2 class="font-display text-2xl font-bold mb-8">"How It Works"</h2>
                    <ol class="grid gap-6 md:grid-cols-3 list-decimal list-inside text-muted-foreground">
                        <li>"Open a new chat."</li>
                        <li>"Describe what you need."</li>
                        <li>"Toolify picks the right tool and answers."</li>
                    </ol>
                </section>
            </main>

            <Footer />
        </div>
    }
}

#[component]
fn FeatureCard(
    icon: IconName,
    title: &'static str,
    description: &'static str,
) -> impl IntoView {
    view! {
        <div class="p-6 rounded-xl border border-border bg-card">
            <Icon name=icon class="w-6 h-6 text-primary mb-3" />
            <h3 class="font-semibold mb-2">{title}</h3>
            <p class="text-sm text-muted-foreground">{description}</p>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chat_page_is_a_full_document() {
        let html = chat_page(Theme::Dark);
        assert!(html.starts_with(DOCTYPE));
        assert!(html.contains(r#"<html lang="en" class="dark">"#));
        assert!(html.contains("data-chat-welcome"));
        assert!(html.contains(r#"data-layout="chat""#));
    }

    #[test]
    fn document_head_hides_cloaked_elements() {
        let html = chat_page(Theme::Dark);
        let head_end = html.find("</head>").unwrap();
        let rule = html.find(CLOAK_CSS).unwrap();
        assert!(rule < head_end);
        assert!(html.contains("x-cloak"));
    }

    #[test]
    fn landing_page_has_anchor_targets_and_footer() {
        let html = landing_page(Theme::Light);
        assert!(html.contains(r#"class="light""#));
        assert!(html.contains(r#"id="features""#));
        assert!(html.contains(r#"id="how-it-works""#));
        assert!(html.contains("<footer"));
        assert!(html.contains(r#"data-theme="light""#));
    }
}
