//! Result Block
//!
//! The panel under each form where a view's outcome is rendered. An empty
//! block keeps its height so the layout does not jump.

use leptos::*;

#[derive(Clone, Copy, PartialEq)]
pub enum Tone {
    Neutral,
    Positive,
    Negative,
}

impl Tone {
    fn class(self) -> &'static str {
        match self {
            Tone::Neutral => "text-gray-200",
            Tone::Positive => "text-green-400",
            Tone::Negative => "text-red-400",
        }
    }
}

/// Result panel; renders nothing but its frame when `children` is empty
#[component]
pub fn ResultBlock(
    #[prop(default = Tone::Neutral)]
    tone: Tone,
    #[prop(optional)]
    children: Option<Children>,
) -> impl IntoView {
    view! {
        <div class=format!("result-block mt-6 bg-gray-800 rounded-lg p-4 {}", tone.class())>
            {children.map(|c| c())}
        </div>
    }
}
