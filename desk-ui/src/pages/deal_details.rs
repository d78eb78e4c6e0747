//! Deal Details Page
//!
//! Look up a deal by id. The view re-evaluates whenever the id changes once
//! the button has been pressed at least once.

use leptos::*;

use crate::api;
use crate::components::result_block::Tone;
use crate::components::{InlineLoading, ResultBlock};
use crate::pages::{format_value, parse_number, LatestRequest};
use crate::state::global::{GlobalState, LookupResult};

/// Deal lookup tab
#[component]
pub fn DealDetailsPage() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (deal_id, set_deal_id) = create_signal(String::new());
    let (clicks, set_clicks) = create_signal(0u32);
    let (pending, set_pending) = create_signal(false);
    let result = create_rw_signal(LookupResult::Idle);
    let latest = LatestRequest::default();

    create_effect(move |_| {
        let n_clicks = clicks.get();
        let id = parse_number::<i64>(&deal_id.get());

        if n_clicks == 0 {
            return;
        }

        let state = state.clone();
        let latest = latest.clone();
        let tag = latest.begin();
        spawn_local(async move {
            set_pending.set(true);
            let response = api::lookup_deal(id, n_clicks).await;
            if !latest.is_current(tag) {
                return;
            }
            match response {
                Ok(outcome) => result.set(outcome),
                Err(e) => state.show_error(&e),
            }
            set_pending.set(false);
        });
    });

    view! {
        <div class="space-y-6">
            <h2 class="text-2xl font-bold">"Find a deal by ID"</h2>

            <div class="flex items-center space-x-3">
                <input
                    type="number"
                    placeholder="Enter deal ID"
                    class="bg-gray-800 border border-gray-600 rounded-lg px-4 py-2 w-64"
                    on:input=move |ev| set_deal_id.set(event_target_value(&ev))
                    prop:value=deal_id
                />
                <button
                    class="px-6 py-2 bg-pink-600 hover:bg-pink-700 rounded-lg font-medium transition-colors"
                    on:click=move |_| set_clicks.update(|n| *n += 1)
                >
                    "Show"
                </button>
                {move || pending.get().then(|| view! { <InlineLoading /> })}
            </div>

            {move || render_result(result.get())}
        </div>
    }
}

fn render_result(result: LookupResult) -> View {
    match result {
        LookupResult::Idle => view! { <ResultBlock /> }.into_view(),
        LookupResult::NotFound { id, message } => {
            let text = message.unwrap_or_else(|| format!("Deal with ID {} not found.", id));
            view! {
                <ResultBlock tone=Tone::Negative>
                    <p>{text}</p>
                </ResultBlock>
            }
            .into_view()
        }
        LookupResult::Found { details } => view! {
            <ResultBlock>
                <h3 class="text-xl font-semibold mb-3">{format!("Deal {} details", details.id)}</h3>
                <p>{format!("Property price: {} M", format_value(details.price))}</p>
                <p>{format!("Probability of default (churn): {}", format_value(details.churn))}</p>
                <p>{format!("Deal priority rank: {} of {}", details.rank, details.total)}</p>
            </ResultBlock>
        }
        .into_view(),
    }
}
