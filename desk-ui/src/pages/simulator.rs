//! Simulator Page
//!
//! Toy eligibility check. Like the lookup tab, it re-evaluates on any input
//! change after the first button press.

use leptos::*;

use crate::api;
use crate::components::result_block::Tone;
use crate::components::{InlineLoading, ResultBlock};
use crate::pages::{parse_number, LatestRequest};
use crate::state::global::{GlobalState, SimulationResult};

/// Simulator tab
#[component]
pub fn SimulatorPage() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (price, set_price) = create_signal(String::new());
    let (income, set_income) = create_signal(String::new());
    let (priority, set_priority) = create_signal(String::new());
    let (clicks, set_clicks) = create_signal(0u32);
    let (pending, set_pending) = create_signal(false);
    let result = create_rw_signal(None::<SimulationResult>);
    let latest = LatestRequest::default();

    create_effect(move |_| {
        let n_clicks = clicks.get();
        let price = parse_number::<f64>(&price.get());
        let income = parse_number::<f64>(&income.get());
        let priority = parse_number::<f64>(&priority.get());

        if n_clicks == 0 {
            return;
        }

        let state = state.clone();
        let latest = latest.clone();
        let tag = latest.begin();
        spawn_local(async move {
            set_pending.set(true);
            let response = api::simulate(price, income, priority, n_clicks).await;
            if !latest.is_current(tag) {
                return;
            }
            match response {
                Ok(outcome) => result.set(Some(outcome)),
                Err(e) => state.show_error(&e),
            }
            set_pending.set(false);
        });
    });

    view! {
        <div class="space-y-6">
            <h2 class="text-2xl font-bold">"Mortgage approval simulator"</h2>

            <div class="flex flex-wrap items-center gap-3">
                <NumberInput placeholder="Property price (M)" set_value=set_price />
                <NumberInput placeholder="Monthly income (K)" set_value=set_income />
                <NumberInput placeholder="Deal priority" set_value=set_priority />
                <button
                    class="px-6 py-2 bg-pink-600 hover:bg-pink-700 rounded-lg font-medium transition-colors"
                    on:click=move |_| set_clicks.update(|n| *n += 1)
                >
                    "Check"
                </button>
                {move || pending.get().then(|| view! { <InlineLoading /> })}
            </div>

            {move || match result.get() {
                None => view! { <ResultBlock /> }.into_view(),
                Some(outcome) => {
                    let tone = if outcome.is_approved() {
                        Tone::Positive
                    } else if outcome.outcome == "rejected" {
                        Tone::Negative
                    } else {
                        Tone::Neutral
                    };
                    let text = outcome.message.unwrap_or_default();
                    view! {
                        <ResultBlock tone=tone>
                            <p>{text}</p>
                        </ResultBlock>
                    }
                    .into_view()
                }
            }}
        </div>
    }
}

#[component]
fn NumberInput(
    placeholder: &'static str,
    set_value: WriteSignal<String>,
) -> impl IntoView {
    view! {
        <input
            type="number"
            placeholder=placeholder
            class="bg-gray-800 border border-gray-600 rounded-lg px-4 py-2 w-56"
            on:input=move |ev| set_value.set(event_target_value(&ev))
        />
    }
}
