//! Navigation Component
//!
//! Dashboard header with title and the three tabs.

use leptos::*;
use leptos_router::*;

/// Header and tab bar
#[component]
pub fn Nav() -> impl IntoView {
    view! {
        <header class="border-b border-gray-700" style="background-color: #1e1e2f">
            <div class="container mx-auto px-4 pt-6">
                <h1 class="text-3xl font-bold text-white">"Mortgage Approval Automation"</h1>
                <div class="text-gray-400 mt-1">"ML Pandas present"</div>

                <nav class="flex items-center space-x-1 mt-6">
                    <TabLink href="/" label="Overview" />
                    <TabLink href="/deal" label="Deal details" />
                    <TabLink href="/simulator" label="Simulator" />
                </nav>
            </div>
        </header>
    }
}

/// Individual tab link
#[component]
fn TabLink(
    href: &'static str,
    label: &'static str,
) -> impl IntoView {
    view! {
        <A
            href=href
            exact=true
            class="px-4 py-2 rounded-t-lg text-gray-300 hover:text-white hover:bg-gray-700 transition-colors"
            active_class="bg-gray-700 text-white border-b-2 border-pink-500"
        >
            {label}
        </A>
    }
}
