// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Servicedeck — service catalogue page
//
// Entry point. Initialises logging and backend services, then launches the
// Dioxus UI.

mod pages;
mod services;
mod state;

use dioxus::prelude::*;

use pages::services::Services;
use services::app_services::AppServices;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    tracing::info!("Servicedeck starting");

    dioxus::launch(app);
}

#[derive(Debug, Clone, Routable, PartialEq)]
enum Route {
    #[layout(PageLayout)]
    #[route("/")]
    Services {},
}

/// Root component.
fn app() -> Element {
    let svc = use_hook(|| match AppServices::init() {
        Ok(s) => {
            tracing::info!(
                api = %s.config().api_base_url,
                data_dir = %s.data_dir().display(),
                "app services initialised"
            );
            s
        }
        Err(e) => {
            tracing::error!(error = %e, "service init failed — using default settings");
            AppServices::fallback().expect("fallback services with default settings")
        }
    });

    use_context_provider(|| svc);

    rsx! {
        Router::<Route> {}
    }
}

#[component]
fn PageLayout() -> Element {
    rsx! {
        main { class: "app-container",
            style: "margin: 0; font-family: system-ui, -apple-system, sans-serif;",
            Outlet::<Route> {}
        }
    }
}
