use contracts::catalog::FACTS;
use leptos::prelude::*;
use thaw::{Badge, BadgeAppearance, BadgeColor};

use super::STAGGER_MS;
use crate::shared::components::CardAnimated;

/// Trivia list: numbered rows sliding in from the left.
#[component]
pub fn FactsSection() -> impl IntoView {
    view! {
        <div class="facts-list">
            {FACTS
                .iter()
                .enumerate()
                .map(|(index, fact)| {
                    let delay = index as u32 * STAGGER_MS;
                    view! {
                        <CardAnimated delay_ms=delay from_left=true>
                            <div class="fact-row">
                                <Badge
                                    appearance=BadgeAppearance::Tint
                                    color=BadgeColor::Informative
                                >
                                    {(index + 1).to_string()}
                                </Badge>
                                <p class="fact-row__text">{*fact}</p>
                            </div>
                        </CardAnimated>
                    }
                })
                .collect_view()}
        </div>
    }
}
