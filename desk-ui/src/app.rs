//! App Root Component
//!
//! Main application component with tab routing and global providers.

use leptos::*;
use leptos_router::*;

use crate::api;
use crate::components::{Nav, Toast};
use crate::pages::{DealDetailsPage, OverviewPage, SimulatorPage};
use crate::state::global::{provide_global_state, GlobalState};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    provide_global_state();

    view! {
        <Router>
            <div class="min-h-screen text-white flex flex-col" style="background-color: #1e1e2f">
                <Nav />

                <main class="flex-1 container mx-auto px-4 py-8 pb-24">
                    <Routes>
                        <Route path="/" view=OverviewPage />
                        <Route path="/deal" view=DealDetailsPage />
                        <Route path="/simulator" view=SimulatorPage />
                        <Route path="/*any" view=NotFound />
                    </Routes>
                </main>

                <Footer />

                <Toast />
            </div>
        </Router>
    }
}

/// Footer component showing server status
#[component]
fn Footer() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let state_for_effect = state.clone();
    create_effect(move |_| {
        let state = state_for_effect.clone();
        spawn_local(async move {
            match api::fetch_health().await {
                Ok(health) => state.health.set(Some(health)),
                Err(e) => {
                    web_sys::console::warn_1(&format!("Health check failed: {}", e).into());
                    state.health.set(None);
                }
            }
        });
    });

    view! {
        <footer class="fixed bottom-0 left-0 right-0 bg-gray-800 border-t border-gray-700 py-3 px-4">
            <div class="container mx-auto flex items-center justify-between text-sm">
                <div class="flex items-center space-x-2">
                    {move || match state.health.get() {
                        Some(health) if health.status == "healthy" => view! {
                            <span class="flex items-center space-x-1 text-green-400">
                                <span class="w-2 h-2 bg-green-400 rounded-full" />
                                <span>{format!("{} deals loaded", health.rows)}</span>
                            </span>
                        }.into_view(),
                        Some(health) => view! {
                            <span class="flex items-center space-x-1 text-yellow-400">
                                <span class="w-2 h-2 bg-yellow-400 rounded-full" />
                                <span>{format!("Server {}", health.status)}</span>
                            </span>
                        }.into_view(),
                        None => view! {
                            <span class="flex items-center space-x-1 text-red-400">
                                <span class="w-2 h-2 bg-red-400 rounded-full" />
                                <span>"Disconnected"</span>
                            </span>
                        }.into_view(),
                    }}
                </div>

                <div class="text-gray-400">
                    {move || {
                        state.health.get()
                            .and_then(|h| chrono::DateTime::parse_from_rfc3339(&h.loaded_at).ok())
                            .map(|dt| format!("Data loaded {}", dt.format("%Y-%m-%d %H:%M:%S")))
                            .unwrap_or_default()
                    }}
                </div>

                {move || {
                    if state.loading.get() {
                        view! {
                            <div class="flex items-center space-x-2 text-pink-400">
                                <div class="loading-spinner w-4 h-4" />
                                <span>"Loading..."</span>
                            </div>
                        }.into_view()
                    } else {
                        view! {}.into_view()
                    }
                }}
            </div>
        </footer>
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center min-h-[60vh] text-center">
            <h1 class="text-3xl font-bold mb-2">"Page Not Found"</h1>
            <p class="text-gray-400 mb-6">"There is no such tab."</p>
            <A
                href="/"
                class="px-6 py-3 bg-pink-600 hover:bg-pink-700 rounded-lg font-medium transition-colors"
            >
                "Go to Overview"
            </A>
        </div>
    }
}
