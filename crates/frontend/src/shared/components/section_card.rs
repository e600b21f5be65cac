use leptos::prelude::*;
use thaw::Card;

/// Outer card framing a content section: title, subtitle, then the
/// section's own card list.
#[component]
pub fn SectionCard(
    /// Section title, e.g. "Popular Dog Breeds".
    #[prop(into)]
    title: String,
    /// One-line subtitle under the title.
    #[prop(into)]
    description: String,
    children: Children,
) -> impl IntoView {
    view! {
        <Card attr:class="section-card">
            <div class="section-card__header">
                <h2 class="section-card__title">{title}</h2>
                <p class="section-card__description">{description}</p>
            </div>
            <div class="section-card__body">
                {children()}
            </div>
        </Card>
    }
}
