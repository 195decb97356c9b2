//! Status Tabs Component
//!
//! Tab bar selecting which status subset the list view shows.

use leptos::prelude::*;

use crate::models::StatusFilter;

/// All / Pending / Completed tab bar
#[component]
pub fn StatusTabs(
    filter: ReadSignal<StatusFilter>,
    set_filter: WriteSignal<StatusFilter>,
) -> impl IntoView {
    view! {
        <div class="status-tabs" role="tablist">
            {StatusFilter::TABS.iter().map(|&tab| {
                let is_active = move || filter.get() == tab;
                let tab_class = move || {
                    if is_active() { "status-tab active" } else { "status-tab" }
                };

                view! {
                    <button
                        class=tab_class
                        role="tab"
                        on:click=move |_| set_filter.set(tab)
                    >
                        {tab.label()}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}
