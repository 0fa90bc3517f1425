// NeuroRastreio Landing Page — Leptos 0.8 CSR entry point
// Build with: trunk build --release (see index.html)

use leptos::prelude::*;
use neurorastreio_landing::styles::LANDING_CSS;
use neurorastreio_landing::telemetry::init_browser_logging;
use neurorastreio_landing::{LandingPage, PageNav};

fn main() {
    console_error_panic_hook::set_once();
    init_browser_logging(if cfg!(debug_assertions) {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    });

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "mounting landing page");
    leptos::mount::mount_to_body(|| view! { <App /> });
}

#[component]
fn App() -> impl IntoView {
    let nav = PageNav::default();

    view! {
        <style>{LANDING_CSS}</style>
        <LandingPage nav=nav />
    }
}
