//! Static content catalogs for the page.
//!
//! All three lists are fixed at compile time. Nothing loads, nothing
//! mutates, entries live for the lifetime of the process.

use serde::Serialize;

/// One breed card: display name plus a one-line personality trait.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BreedEntry {
    pub name: &'static str,
    /// `trait` is reserved in Rust.
    pub trait_line: &'static str,
}

/// One care tip: short title plus a sentence of advice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CareTipEntry {
    pub title: &'static str,
    pub description: &'static str,
}

/// A trivia fact is just a line of text.
pub type FactEntry = &'static str;

pub const BREEDS: &[BreedEntry] = &[
    BreedEntry {
        name: "Labrador Retriever",
        trait_line: "Friendly and Outgoing",
    },
    BreedEntry {
        name: "German Shepherd",
        trait_line: "Loyal and Courageous",
    },
    BreedEntry {
        name: "Golden Retriever",
        trait_line: "Intelligent and Devoted",
    },
    BreedEntry {
        name: "French Bulldog",
        trait_line: "Playful and Adaptable",
    },
    BreedEntry {
        name: "Bulldog",
        trait_line: "Calm and Dignified",
    },
    BreedEntry {
        name: "Poodle",
        trait_line: "Proud and Elegant",
    },
];

pub const FACTS: &[FactEntry] = &[
    "Dogs have a sense of time and can tell how long you've been gone.",
    "A dog's nose print is unique, much like a human's fingerprint.",
    "Dalmatians are born completely white and develop their spots as they grow older.",
    "The Basenji is the only breed of dog that can't bark, but they can yodel!",
    "The Greyhound is the fastest dog breed and can run up to 45 miles per hour.",
];

pub const CARE_TIPS: &[CareTipEntry] = &[
    CareTipEntry {
        title: "Balanced Diet",
        description: "Provide a balanced diet appropriate for your dog's age, size, and activity level.",
    },
    CareTipEntry {
        title: "Regular Exercise",
        description: "Ensure your dog gets regular exercise through walks, playtime, and activities.",
    },
    CareTipEntry {
        title: "Veterinary Check-ups",
        description: "Schedule regular check-ups with a veterinarian for vaccinations and health screenings.",
    },
    CareTipEntry {
        title: "Grooming",
        description: "Groom your dog regularly, including brushing their coat and teeth.",
    },
    CareTipEntry {
        title: "Mental Stimulation",
        description: "Offer mental stimulation through training, puzzle toys, and interactive games.",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn breeds_fixed_order() {
        assert_eq!(BREEDS.len(), 6);
        assert_eq!(BREEDS[0].name, "Labrador Retriever");
        assert_eq!(BREEDS[5].name, "Poodle");
    }

    #[test]
    fn facts_fixed_order() {
        assert_eq!(FACTS.len(), 5);
        assert_eq!(
            FACTS[0],
            "Dogs have a sense of time and can tell how long you've been gone."
        );
    }

    #[test]
    fn care_tips_fixed_order() {
        assert_eq!(CARE_TIPS.len(), 5);
        assert_eq!(CARE_TIPS[0].title, "Balanced Diet");
        assert_eq!(CARE_TIPS[4].title, "Mental Stimulation");
    }

    #[test]
    fn every_entry_is_nonempty() {
        assert!(BREEDS.iter().all(|b| !b.name.is_empty() && !b.trait_line.is_empty()));
        assert!(FACTS.iter().all(|f| !f.is_empty()));
        assert!(CARE_TIPS
            .iter()
            .all(|t| !t.title.is_empty() && !t.description.is_empty()));
    }
}
