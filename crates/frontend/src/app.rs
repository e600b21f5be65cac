use crate::layout::page_context::PageContext;
use crate::layout::Shell;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Provide the PageContext store to the whole app via context.
    provide_context(PageContext::new());

    view! {
        <Shell />
    }
}
