//! Button component with variants and sizes.

use leptos::prelude::*;

/// Button visual variant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    /// Filled call-to-action.
    #[default]
    Primary,
    /// Muted fill, used for the rail's new-chat action.
    Muted,
    /// Transparent until hovered.
    Ghost,
    /// Ghost that turns red on hover.
    Danger,
}

impl ButtonVariant {
    /// Get CSS classes for this variant.
    #[must_use]
    pub fn classes(self) -> &'static str {
        match self {
            Self::Primary => "bg-primary text-primary-foreground hover:bg-primary/90",
            Self::Muted => "bg-muted text-foreground hover:bg-muted/80 group",
            Self::Ghost => "text-muted-foreground hover:text-foreground hover:bg-muted",
            Self::Danger => "text-muted-foreground hover:text-red-500 hover:bg-red-500/10",
        }
    }
}

/// Button size.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonSize {
    /// Square icon button sized for the navigation rail.
    Rail,
    /// Medium button (default).
    #[default]
    Md,
}

impl ButtonSize {
    /// Get CSS classes for this size.
    #[must_use]
    pub fn classes(self) -> &'static str {
        match self {
            Self::Rail => "p-3 rounded-xl",
            Self::Md => "h-10 px-4 rounded-lg text-sm",
        }
    }
}

/// Styled button.
///
/// The button carries no behavior of its own. `action` is rendered as a
/// `data-action` hook for whatever script owns the click.
///
/// # Example
///
/// ```rust,ignore
/// view! {
///     <Button variant=ButtonVariant::Ghost size=ButtonSize::Rail action="settings" label="Settings">
///         <Icon name=IconName::Settings class="w-6 h-6" />
///     </Button>
/// }
/// ```
#[component]
pub fn Button(
    /// Button variant.
    #[prop(default = ButtonVariant::Primary)]
    variant: ButtonVariant,
    /// Button size.
    #[prop(default = ButtonSize::Md)]
    size: ButtonSize,
    /// Value of the `data-action` hook.
    #[prop(optional)]
    action: Option<&'static str>,
    /// Accessible label, for icon-only buttons.
    #[prop(optional)]
    label: Option<&'static str>,
    /// Additional CSS classes.
    #[prop(default = "")]
    class: &'static str,
    /// Button content.
    children: Children,
) -> impl IntoView {
    let base_classes = "inline-flex items-center justify-center font-medium transition-colors \
                        focus-visible:outline-none focus-visible:ring-2 focus-visible:ring-primary";

    let classes = format!(
        "{} {} {} {}",
        base_classes,
        variant.classes(),
        size.classes(),
        class
    );

    view! {
        <button type="button" class=classes data-action=action aria-label=label title=label>
            {children()}
        </button>
    }
}
