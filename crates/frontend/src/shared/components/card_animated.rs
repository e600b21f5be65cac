//! CardAnimated — wrapper over a Thaw Card with an entrance animation.
//!
//! Drop-in replacement for `<Card attr:style="...">` → `<CardAnimated style="..." delay_ms=N>`.
//! The animations are defined in `layout.css` (`@keyframes card-appear`,
//! `@keyframes card-appear-left`).
//!
//! # Example
//! ```rust,ignore
//! // No delay
//! <CardAnimated>
//!     <p>"Content"</p>
//! </CardAnimated>
//!
//! // Cascading delays for a stagger effect
//! <CardAnimated delay_ms=0>    // card 1
//! <CardAnimated delay_ms=100>  // card 2
//! <CardAnimated delay_ms=200>  // card 3
//!
//! // Slide in from the left instead of from below
//! <CardAnimated delay_ms=0 from_left=true>
//! ```

use leptos::prelude::*;
use thaw::Card;

/// Wrapper over a Thaw [`Card`] with the entrance animation from `layout.css`.
///
/// # Props
/// - `delay_ms`  — animation delay in ms (default `0`). Use for stagger effects.
/// - `from_left` — slide in from the left (`card-appear-left`) instead of from below.
/// - `style`     — extra inline styles, appended after the animation.
/// - `children`  — card content (same as a plain `Card`).
#[component]
pub fn CardAnimated(
    /// Animation delay in milliseconds (for stagger effects).
    #[prop(optional)]
    delay_ms: u32,
    /// Slide in from the left instead of from below.
    #[prop(optional)]
    from_left: bool,
    /// Extra inline styles (appended after the animation styles).
    #[prop(optional, into)]
    style: String,
    children: Children,
) -> impl IntoView {
    let keyframes = if from_left {
        "card-appear-left"
    } else {
        "card-appear"
    };
    let full_style = if style.is_empty() {
        format!("animation: {} 0.5s ease-out {}ms both;", keyframes, delay_ms)
    } else {
        format!(
            "animation: {} 0.5s ease-out {}ms both; {}",
            keyframes, delay_ms, style
        )
    };

    view! {
        <Card attr:style=full_style>
            {children()}
        </Card>
    }
}
