//! The three content sections, one per tab. Each is a pure view over its
//! static catalog: card count always equals catalog length.

pub mod breeds;
pub mod care;
pub mod facts;

pub use breeds::BreedsSection;
pub use care::CareSection;
pub use facts::FactsSection;

/// Per-card delay step for the staggered entrance animation.
pub(crate) const STAGGER_MS: u32 = 100;
