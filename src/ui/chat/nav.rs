//! Navigation rail entries.

use crate::ui::components::IconName;

/// One entry in the sidebar rail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub icon: IconName,
    pub label: &'static str,
    /// Link target handed to the anchor unchanged.
    pub href: &'static str,
    /// Marks the entry for the current section.
    pub active: bool,
}

impl NavItem {
    const fn new(icon: IconName, label: &'static str, href: &'static str) -> Self {
        Self {
            icon,
            label,
            href,
            active: false,
        }
    }

    const fn mark_active(self) -> Self {
        Self {
            active: true,
            ..self
        }
    }

    /// CSS classes for the link, depending on the active flag.
    #[must_use]
    pub fn classes(&self) -> &'static str {
        if self.active {
            "p-3 rounded-xl transition-all relative group text-primary bg-primary/10"
        } else {
            "p-3 rounded-xl transition-all relative group text-muted-foreground \
             hover:text-foreground hover:bg-muted"
        }
    }
}

/// Rail entries, in display order. Exactly one is active.
pub const NAV_ITEMS: [NavItem; 4] = [
    NavItem::new(IconName::Search, "Search", "#"),
    NavItem::new(IconName::LayoutGrid, "Apps", "#"),
    NavItem::new(IconName::MessageSquare, "Chats", "#").mark_active(),
    NavItem::new(IconName::FolderOpen, "Files", "#"),
];
