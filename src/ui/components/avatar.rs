//! Avatar component with image and placeholder support.

use leptos::prelude::*;

/// Round user avatar.
///
/// Without `src` a gradient placeholder is drawn in its place.
///
/// # Example
///
/// ```rust,ignore
/// view! {
///     <Avatar />
///     <Avatar src="/static/me.png" alt="Me" />
/// }
/// ```
#[component]
pub fn Avatar(
    /// Image source URL.
    #[prop(default = "")]
    src: &'static str,
    /// Alt text for the image.
    #[prop(default = "User avatar")]
    alt: &'static str,
    /// Size class (e.g., "w-10 h-10").
    #[prop(default = "w-10 h-10")]
    size: &'static str,
    /// Additional CSS classes.
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    let ring = "rounded-full border-2 border-background ring-2 ring-border";

    if src.is_empty() {
        let classes = format!(
            "{size} {ring} bg-gradient-to-tr from-blue-500 to-purple-500 {class}"
        );
        view! { <div class=classes data-avatar="placeholder" role="img" aria-label=alt /> }
            .into_any()
    } else {
        let classes = format!("{size} {ring} overflow-hidden object-cover {class}");
        view! { <img class=classes data-avatar="image" src=src alt=alt /> }.into_any()
    }
}
