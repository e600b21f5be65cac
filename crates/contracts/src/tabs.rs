use serde::{Deserialize, Serialize};

/// Which of the three content sections is currently displayed.
///
/// Always exactly one of the three values; there is no "none selected" state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TabSelection {
    #[default]
    Breeds,
    Facts,
    Care,
}

impl TabSelection {
    /// Stable string key, used as the tab value in the UI binding.
    pub fn key(&self) -> &'static str {
        match self {
            TabSelection::Breeds => "breeds",
            TabSelection::Facts => "facts",
            TabSelection::Care => "care",
        }
    }

    /// Human-readable tab label.
    pub fn label(&self) -> &'static str {
        match self {
            TabSelection::Breeds => "Dog Breeds",
            TabSelection::Facts => "Fun Facts",
            TabSelection::Care => "Care Tips",
        }
    }

    /// Icon name for the `icon()` helper.
    pub fn icon_name(&self) -> &'static str {
        match self {
            TabSelection::Breeds => "paw",
            TabSelection::Facts => "info",
            TabSelection::Care => "heart",
        }
    }

    /// All tabs in display order.
    pub fn all() -> [TabSelection; 3] {
        [TabSelection::Breeds, TabSelection::Facts, TabSelection::Care]
    }

    /// Parse from a string key. Unknown keys yield `None`.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "breeds" => Some(TabSelection::Breeds),
            "facts" => Some(TabSelection::Facts),
            "care" => Some(TabSelection::Care),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_breeds() {
        assert_eq!(TabSelection::default(), TabSelection::Breeds);
    }

    #[test]
    fn key_round_trip() {
        for tab in TabSelection::all() {
            assert_eq!(TabSelection::from_key(tab.key()), Some(tab));
        }
    }

    #[test]
    fn unknown_key_is_rejected() {
        assert_eq!(TabSelection::from_key("toys"), None);
        assert_eq!(TabSelection::from_key(""), None);
        assert_eq!(TabSelection::from_key("Breeds"), None);
    }

    #[test]
    fn display_order_is_stable() {
        let keys: Vec<_> = TabSelection::all().iter().map(|t| t.key()).collect();
        assert_eq!(keys, ["breeds", "facts", "care"]);
    }
}
