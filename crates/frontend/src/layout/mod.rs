pub mod page_context;

use contracts::tabs::TabSelection;
use leptos::prelude::*;
use thaw::{Tab, TabList};

use crate::sections::{BreedsSection, CareSection, FactsSection};
use crate::shared::components::SectionCard;
use crate::shared::icons::icon;
use page_context::PageContext;

/// Single-column page shell.
///
/// ```text
/// +------------------------------------------+
/// |           Header ("All About Dogs")      |
/// +------------------------------------------+
/// |   [Dog Breeds] [Fun Facts] [Care Tips]   |
/// +------------------------------------------+
/// |        Active section, card list         |
/// +------------------------------------------+
/// ```
///
/// The header entrance animation is gated on the ready flag so it plays
/// exactly once, after the first mount. The content area is keyed on the
/// active selection, so switching tabs replays the section entrance.
#[component]
pub fn Shell() -> impl IntoView {
    let ctx = leptos::context::use_context::<PageContext>()
        .expect("PageContext context not found");

    // Thaw's TabList binds a string value; keep it synced to the store.
    let selected_tab_value = RwSignal::new(TabSelection::default().key().to_string());

    // Sync selected_tab_value -> active tab. Unknown keys are ignored.
    Effect::new(move |prev: Option<String>| {
        let current = selected_tab_value.get();
        if prev.is_some() {
            if let Some(tab) = TabSelection::from_key(&current) {
                ctx.select_tab(tab);
            }
        }
        current
    });

    // Runs once after the first mount.
    Effect::new(move |_| {
        ctx.mark_ready();
    });

    let header_class = move || {
        if ctx.is_ready() {
            "page-header page-header--ready"
        } else {
            "page-header"
        }
    };

    view! {
        <div class="page">
            <div class=header_class>
                <h1 class="page-header__title">"All About Dogs"</h1>
            </div>

            <TabList selected_value=selected_tab_value>
                {TabSelection::all()
                    .into_iter()
                    .map(|tab| {
                        view! {
                            <Tab value=tab.key().to_string()>
                                {icon(tab.icon_name())}
                                <span class="tab__label">{tab.label()}</span>
                            </Tab>
                        }
                    })
                    .collect_view()}
            </TabList>

            <div class="tab-content">
                {move || match ctx.active_tab() {
                    TabSelection::Breeds => {
                        view! {
                            <SectionCard
                                title="Popular Dog Breeds"
                                description="Explore some of the most beloved dog breeds"
                            >
                                <BreedsSection />
                            </SectionCard>
                        }
                            .into_any()
                    }
                    TabSelection::Facts => {
                        view! {
                            <SectionCard
                                title="Fun Dog Facts"
                                description="Interesting tidbits about our canine companions"
                            >
                                <FactsSection />
                            </SectionCard>
                        }
                            .into_any()
                    }
                    TabSelection::Care => {
                        view! {
                            <SectionCard
                                title="Dog Care Tips"
                                description="Essential advice for keeping your dog happy and healthy"
                            >
                                <CareSection />
                            </SectionCard>
                        }
                            .into_any()
                    }
                }}
            </div>
        </div>
    }
}
