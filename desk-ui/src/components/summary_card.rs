//! Summary Card Component
//!
//! Headline statistics for one distribution.

use leptos::*;

use crate::state::global::Summary;

/// Count / mean / median / range card
#[component]
pub fn SummaryCard(
    #[prop(into)]
    label: String,
    summary: Summary,
    /// Unit suffix for the values
    #[prop(optional)]
    unit: Option<&'static str>,
) -> impl IntoView {
    let fmt = move |v: Option<f64>| {
        v.map(|v| match unit {
            Some(u) => format!("{:.4} {}", v, u),
            None => format!("{:.4}", v),
        })
        .unwrap_or_else(|| "—".to_string())
    };

    view! {
        <div class="bg-gray-800 rounded-lg p-4 border border-gray-700">
            <div class="flex items-center justify-between">
                <span class="text-gray-400 text-sm">{label}</span>
                <span class="text-gray-500 text-xs">{format!("n = {}", summary.count)}</span>
            </div>
            <div class="text-3xl font-bold mt-2">{fmt(summary.mean)}</div>
            <div class="text-sm text-gray-500">"mean"</div>

            <dl class="grid grid-cols-3 gap-2 mt-3 text-sm">
                <div>
                    <dt class="text-gray-500">"median"</dt>
                    <dd>{fmt(summary.median)}</dd>
                </div>
                <div>
                    <dt class="text-gray-500">"min"</dt>
                    <dd>{fmt(summary.min)}</dd>
                </div>
                <div>
                    <dt class="text-gray-500">"max"</dt>
                    <dd>{fmt(summary.max)}</dd>
                </div>
            </dl>
        </div>
    }
}
