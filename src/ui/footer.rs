//! Site footer.

use leptos::prelude::*;

use crate::ui::components::{Icon, IconName};

/// Product name shown in the brand mark and copyright line.
pub const BRAND: &str = "Toolify";

/// Copyright notice.
pub const COPYRIGHT: &str = "© 2025 Toolify. All rights reserved.";

/// In-page anchors: (target, label).
const LINKS: [(&str, &str); 2] = [("#features", "Features"), ("#how-it-works", "How It Works")];

/// Static footer with brand, section anchors and copyright.
///
/// The three groups always render; narrow viewports stack them vertically.
#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="bg-card border-t border-border py-12">
            <div class="container mx-auto px-6">
                <div class="flex flex-col md:flex-row justify-between items-center gap-6">
                    <a href="/" class="flex items-center gap-2" data-footer-group="brand">
                        <div class="w-8 h-8 rounded-lg bg-primary flex items-center justify-center">
                            <Icon name=IconName::Wrench class="w-5 h-5 text-primary-foreground" />
                        </div>
                        <span class="font-display font-bold text-xl text-foreground">{BRAND}</span>
                    </a>

                    <div class="flex items-center gap-8" data-footer-group="links">
                        {LINKS
                            .iter()
                            .map(|&(href, label)| {
                                view! {
                                    <a
                                        href=href
                                        class="text-sm text-muted-foreground hover:text-foreground transition-colors"
                                    >
                                        {label}
                                    </a>
                                }
                            })
                            .collect_view()}
                    </div>

                    <p class="text-sm text-muted-foreground" data-footer-group="copyright">
                        {COPYRIGHT}
                    </p>
                </div>
            </div>
        </footer>
    }
}
