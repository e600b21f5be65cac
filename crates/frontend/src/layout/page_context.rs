use contracts::tabs::TabSelection;
use leptos::prelude::*;

/// Reactive store for the page: the active content section and the
/// one-shot ready flag that gates the initial entrance animation.
///
/// Shared through Leptos context; signals are `Copy`, so the struct is too.
#[derive(Clone, Copy)]
pub struct PageContext {
    active: RwSignal<TabSelection>,
    ready: RwSignal<bool>,
}

impl PageContext {
    pub fn new() -> Self {
        Self {
            active: RwSignal::new(TabSelection::default()),
            ready: RwSignal::new(false),
        }
    }

    /// Current selection, tracked reactively.
    pub fn active_tab(&self) -> TabSelection {
        self.active.get()
    }

    /// Switch the visible section. Selecting the already-active tab is a
    /// no-op: the signal is only written when the value changes, so no
    /// re-render is triggered.
    pub fn select_tab(&self, tab: TabSelection) {
        if self.active.with_untracked(|current| *current == tab) {
            return;
        }
        leptos::logging::log!("select_tab: {}", tab.key());
        self.active.set(tab);
    }

    /// Whether the initial mount has completed, tracked reactively.
    pub fn is_ready(&self) -> bool {
        self.ready.get()
    }

    /// One-shot transition not-ready -> ready, fired after the first mount.
    /// Repeat calls are no-ops; the flag never reverts.
    pub fn mark_ready(&self) {
        if self.ready.with_untracked(|ready| *ready) {
            return;
        }
        self.ready.set(true);
    }
}

impl Default for PageContext {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::tabs::TabSelection::{Breeds, Care, Facts};

    #[test]
    fn initial_state() {
        let ctx = PageContext::new();
        assert_eq!(ctx.active.get_untracked(), Breeds);
        assert!(!ctx.ready.get_untracked());
    }

    #[test]
    fn last_selection_wins() {
        let ctx = PageContext::new();
        for tab in [Facts, Care, Breeds, Care] {
            ctx.select_tab(tab);
            assert_eq!(ctx.active.get_untracked(), tab);
        }
    }

    #[test]
    fn reselecting_active_tab_changes_nothing() {
        let ctx = PageContext::new();
        ctx.select_tab(Facts);
        ctx.select_tab(Facts);
        assert_eq!(ctx.active.get_untracked(), Facts);
    }

    #[test]
    fn ready_flag_is_one_shot() {
        let ctx = PageContext::new();
        ctx.mark_ready();
        assert!(ctx.ready.get_untracked());
        ctx.mark_ready();
        ctx.mark_ready();
        assert!(ctx.ready.get_untracked());
    }

    #[test]
    fn selection_does_not_touch_ready_flag() {
        let ctx = PageContext::new();
        ctx.select_tab(Care);
        assert!(!ctx.ready.get_untracked());
        ctx.mark_ready();
        ctx.select_tab(Facts);
        assert!(ctx.ready.get_untracked());
    }
}
