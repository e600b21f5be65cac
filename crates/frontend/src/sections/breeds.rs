use contracts::catalog::{BreedEntry, BREEDS};
use leptos::prelude::*;
use thaw::{Button, ButtonAppearance};

use super::STAGGER_MS;
use crate::shared::components::CardAnimated;
use crate::shared::icons::icon;

/// Unsplash source URL for a breed photo, derived from the display name.
pub fn breed_image_url(name: &str) -> String {
    format!(
        "https://source.unsplash.com/400x300/?{}",
        name.to_lowercase().replace(' ', "-")
    )
}

/// Breed gallery: responsive card grid with a staggered entrance.
#[component]
pub fn BreedsSection() -> impl IntoView {
    view! {
        <div class="breeds-grid">
            {BREEDS
                .iter()
                .enumerate()
                .map(|(index, breed)| {
                    let delay = index as u32 * STAGGER_MS;
                    view! { <BreedCard breed=*breed delay_ms=delay /> }
                })
                .collect_view()}
        </div>
    }
}

#[component]
fn BreedCard(breed: BreedEntry, delay_ms: u32) -> impl IntoView {
    view! {
        <CardAnimated delay_ms=delay_ms>
            <div class="breed-card">
                <div class="breed-card__name">{breed.name}</div>
                <div class="breed-card__trait">{breed.trait_line}</div>
                <img
                    class="breed-card__photo"
                    src=breed_image_url(breed.name)
                    alt=breed.name
                />
                <Button appearance=ButtonAppearance::Secondary attr:class="breed-card__more">
                    "Learn More"
                    {icon("arrow-right")}
                </Button>
            </div>
        </CardAnimated>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn image_url_from_breed_name() {
        assert_eq!(
            breed_image_url("Labrador Retriever"),
            "https://source.unsplash.com/400x300/?labrador-retriever"
        );
        assert_eq!(
            breed_image_url("Poodle"),
            "https://source.unsplash.com/400x300/?poodle"
        );
    }
}
