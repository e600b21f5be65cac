use contracts::catalog::CARE_TIPS;
use leptos::prelude::*;

use super::STAGGER_MS;
use crate::shared::components::CardAnimated;

/// Care advice: stacked title/description cards under a section heading.
#[component]
pub fn CareSection() -> impl IntoView {
    view! {
        <div class="care-list">
            <h3 class="care-list__heading">"Essential Dog Care Tips"</h3>
            {CARE_TIPS
                .iter()
                .enumerate()
                .map(|(index, tip)| {
                    let delay = index as u32 * STAGGER_MS;
                    view! {
                        <CardAnimated delay_ms=delay>
                            <div class="care-tip">
                                <div class="care-tip__title">{tip.title}</div>
                                <p class="care-tip__description">{tip.description}</p>
                            </div>
                        </CardAnimated>
                    }
                })
                .collect_view()}
        </div>
    }
}
