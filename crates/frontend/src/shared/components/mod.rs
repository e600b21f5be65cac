pub mod card_animated;
pub mod section_card;

pub use card_animated::CardAnimated;
pub use section_card::SectionCard;
