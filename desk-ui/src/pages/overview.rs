//! Overview Page
//!
//! General statistics: price and churn distributions over every deal.

use leptos::*;

use crate::api;
use crate::components::{ChartSkeleton, HistogramChart, SummaryCard};
use crate::state::global::GlobalState;

/// Overview tab
#[component]
pub fn OverviewPage() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    // The table never changes, so fetch once per session
    let state_for_effect = state.clone();
    create_effect(move |_| {
        if state_for_effect.overview.get_untracked().is_some() {
            return;
        }

        let state = state_for_effect.clone();
        spawn_local(async move {
            state.loading.set(true);
            match api::fetch_overview().await {
                Ok(overview) => state.overview.set(Some(overview)),
                Err(e) => {
                    web_sys::console::error_1(&format!("Failed to fetch overview: {}", e).into());
                    state.show_error(&e);
                }
            }
            state.loading.set(false);
        });
    });

    view! {
        <div class="space-y-8">
            <h2 class="text-2xl font-bold">"General statistics"</h2>

            {move || match state.overview.get() {
                Some(overview) => view! {
                    <div class="space-y-8">
                        <div class="text-gray-400">{format!("{} deals", overview.rows)}</div>

                        <div class="grid md:grid-cols-2 gap-4">
                            <SummaryCard
                                label="Property price"
                                summary=overview.price.summary.clone()
                                unit="M"
                            />
                            <SummaryCard
                                label="Churn probability"
                                summary=overview.churn.summary.clone()
                            />
                        </div>

                        <HistogramChart distribution=overview.price />
                        <HistogramChart distribution=overview.churn />
                    </div>
                }.into_view(),
                None => view! {
                    <div class="space-y-8">
                        <ChartSkeleton />
                        <ChartSkeleton />
                    </div>
                }.into_view(),
            }}
        </div>
    }
}
