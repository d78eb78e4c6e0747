//! Mortgage Desk Dashboard
//!
//! Mortgage approval analytics dashboard built with Leptos (WASM).
//!
//! # Tabs
//!
//! - Overview: price and churn distributions
//! - Deal details: lookup by deal id
//! - Simulator: eligibility check
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. It communicates with the Mortgage Desk API over HTTP.

use leptos::*;

mod api;
mod app;
mod components;
mod pages;
mod state;

fn main() {
    // Better panic messages in the browser console
    console_error_panic_hook::set_once();

    mount_to_body(|| view! { <app::App /> });
}
