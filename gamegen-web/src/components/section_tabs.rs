//! Landing page tab selector. One section visible at a time.

use leptos::prelude::*;
use shared::sections::{SectionKey, SectionTabs};

use super::cards::{HoverText, TextVariant};
use super::icons::Icon;

#[component]
pub fn SectionTabsPanel() -> impl IntoView {
    let tabs = RwSignal::new(SectionTabs::default());

    view! {
        <div class="tabs">
            <div class="tab-row">
                {SectionKey::ALL
                    .into_iter()
                    .map(|key| {
                        view! {
                            <button
                                class=move || {
                                    if tabs.with(|t| t.is_active(key)) { "tab tab-active" } else { "tab" }
                                }
                                on:click=move |_| tabs.update(|t| t.select(key))
                            >
                                <span class="tab-label">{key.section().title}</span>
                            </button>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>

            <div class="tab-panel">
                <div class="tab-frame"></div>
                {move || {
                    let section = tabs.with(|t| t.active_section());
                    view! {
                        <div class="tab-body" data-section=section.key.as_str()>
                            <div class="tab-heading">
                                <Icon kind=section.key class="icon-lg"/>
                                <div class="tab-title">
                                    <HoverText variant=TextVariant::H2>{section.title}</HoverText>
                                </div>
                            </div>
                            <div class="tab-content">
                                <HoverText>{section.content}</HoverText>
                            </div>
                        </div>
                    }
                }}
            </div>
        </div>
    }
}
