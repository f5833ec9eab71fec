// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Services page — fetches the category list once on mount and renders one
// section per category with a grid of service cards.

use dioxus::prelude::*;

use servicedeck_core::types::{Service, ServiceCategory};

use crate::services::app_services::AppServices;
use crate::state::{CatalogState, accept_load};

const PAGE_CSS: &str = r#"
.services-page { min-height: 100vh; background: linear-gradient(to bottom, #000, #93b858e0); }
.catalogue { max-width: 1100px; margin: 0 auto; padding: 32px 16px; }
.category { margin: 32px 0; animation: fade-in 1s ease-out both; }
.category-header { display: flex; flex-wrap: wrap; justify-content: space-between; gap: 16px; margin-bottom: 30px; }
.category-title { color: #fff; font-size: 30px; font-weight: 700; animation: slide-in 0.8s ease-out both; }
.category-description { color: #9ca3af; font-size: 14px; max-width: 550px; }
.service-grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(300px, 1fr)); gap: 24px; }
.service-card { background: #fff; margin-top: 40px; padding: 24px; border-radius: 8px; box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1); animation: fade-in 0.6s ease-out 0.2s both; }
.service-image { width: 100%; height: auto; border-radius: 8px; }
.service-name { display: flex; align-items: center; gap: 8px; font-size: 20px; font-weight: 700; }
.service-dot { width: 16px; height: 16px; border-radius: 50%; background: #3b82f6; }
.service-description { color: #4b5563; margin-bottom: 16px; }
.view-more { display: flex; align-items: center; gap: 8px; border: 1px solid #000; border-radius: 6px; padding: 8px 16px; background: #fff; font-weight: 600; }
.view-more:hover { background: #000; color: #fff; }
@keyframes fade-in { from { opacity: 0; } to { opacity: 1; } }
@keyframes slide-in { from { transform: translateX(-100px); } to { transform: translateX(0); } }
"#;

#[component]
pub fn Services() -> Element {
    let mut state = use_signal(CatalogState::default);
    let svc = use_context::<AppServices>();

    // One load per mount. The task is owned by this scope, so it is dropped
    // rather than resolved if the page unmounts first.
    use_hook(move || {
        spawn(async move {
            tracing::debug!("loading service categories");
            let result = svc.load_categories().await;
            if let Some(categories) = accept_load(result) {
                state.write().replace(categories);
            }
            let catalog = state.peek();
            tracing::debug!(phase = ?catalog.phase(), empty = catalog.is_empty(), "catalog load finished");
        })
    });

    let categories = state.read().categories().to_vec();

    rsx! {
        style { "{PAGE_CSS}" }
        div { class: "services-page",
            CategoryList { categories }
        }
    }
}

/// Pure rendering of a category list; no fetching, no state.
#[component]
pub fn CategoryList(categories: Vec<ServiceCategory>) -> Element {
    rsx! {
        div { class: "catalogue",
            for category in categories.iter() {
                CategorySection { key: "{category.title}", category: category.clone() }
            }
        }
    }
}

#[component]
fn CategorySection(category: ServiceCategory) -> Element {
    rsx! {
        section { class: "category",
            div { class: "category-header",
                h2 { class: "category-title", "{category.title}" }
                p { class: "category-description", "{category.description}" }
            }
            div { class: "service-grid",
                for service in category.services.iter() {
                    ServiceCard { key: "{service.id}", service: service.clone() }
                }
            }
        }
    }
}

#[component]
fn ServiceCard(service: Service) -> Element {
    rsx! {
        article { class: "service-card",
            img { class: "service-image", src: "{service.image}", alt: "{service.name}" }
            h3 { class: "service-name",
                span { class: "service-dot" }
                "{service.name}"
            }
            p { class: "service-description", "{service.description}" }
            // Decorative only: no handler, no navigation.
            button { class: "view-more", r#type: "button",
                "View More"
                span { class: "view-more-arrow", "\u{2192}" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;
    use std::time::Duration;

    use axum::{Router, http::StatusCode, routing::get};
    use servicedeck_client::CatalogClient;
    use servicedeck_core::AppConfig;
    use servicedeck_core::types::ServiceId;
    use tokio::net::TcpListener;

    use super::*;

    const CLEANING: &str = r#"[{"title":"Cleaning","description":"Home cleaning","services":[{"id":1,"name":"Deep Clean","description":"Full house","image":"/img/a.jpg"}]}]"#;

    fn service(id: i64, name: &str) -> Service {
        Service {
            id: ServiceId(id),
            name: name.into(),
            description: format!("{name} description"),
            image: format!("/img/{id}.jpg"),
        }
    }

    fn category(title: &str, services: Vec<Service>) -> ServiceCategory {
        ServiceCategory {
            title: title.into(),
            description: format!("{title} description"),
            services,
        }
    }

    fn render_list(categories: Vec<ServiceCategory>) -> String {
        let mut dom = VirtualDom::new_with_props(CategoryList, CategoryListProps { categories });
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    fn position(html: &str, needle: &str) -> usize {
        html.find(needle)
            .unwrap_or_else(|| panic!("{needle} not rendered in {html}"))
    }

    #[test]
    fn one_section_per_category_with_one_card_per_service() {
        let html = render_list(vec![
            category("Cleaning", vec![service(1, "Deep Clean"), service(2, "Windows")]),
            category("Garden", vec![]),
            category("Plumbing", vec![service(7, "Leaks"), service(8, "Boilers"), service(9, "Drains")]),
        ]);

        assert_eq!(html.matches("<section").count(), 3);
        assert_eq!(html.matches("<article").count(), 5);
        assert_eq!(html.matches("<button").count(), 5);
    }

    #[test]
    fn sections_and_cards_keep_payload_order() {
        let html = render_list(vec![
            category("Zebra care", vec![service(3, "Stripes"), service(1, "Hooves")]),
            category("Aardvark care", vec![service(2, "Snouts")]),
        ]);

        assert!(position(&html, "Zebra care") < position(&html, "Aardvark care"));
        assert!(position(&html, "Stripes") < position(&html, "Hooves"));
        assert!(position(&html, "Hooves") < position(&html, "Snouts"));
    }

    #[test]
    fn card_shows_image_name_description_and_button() {
        let html = render_list(vec![category("Cleaning", vec![service(1, "Deep Clean")])]);

        assert!(html.contains(r#"src="/img/1.jpg""#));
        assert!(html.contains(r#"alt="Deep Clean""#));
        assert!(html.contains("Deep Clean description"));
        assert!(html.contains("View More"));
    }

    #[test]
    fn empty_list_renders_no_sections() {
        let html = render_list(Vec::new());
        assert_eq!(html.matches("<section").count(), 0);
    }

    // -- Mount behaviour ----------------------------------------------------

    async fn spawn_catalog_server(status: StatusCode, body: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
        let addr = listener.local_addr().expect("local addr");
        let app = Router::new().route("/api/services", get(move || async move { (status, body) }));
        tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });
        format!("http://{addr}")
    }

    fn services_for(base_url: &str) -> AppServices {
        let http = reqwest::Client::builder().no_proxy().build().expect("http client");
        let client = CatalogClient::with_http(base_url, http).expect("client");
        let config = AppConfig {
            api_base_url: base_url.into(),
            ..AppConfig::default()
        };
        AppServices::with_client(config, client, PathBuf::from("/tmp"))
    }

    fn harness(svc: AppServices) -> Element {
        use_context_provider(|| svc);
        rsx! { Services {} }
    }

    /// Mount the page, let the load task settle, and render the result.
    async fn mount(svc: AppServices) -> String {
        let mut dom = VirtualDom::new_with_props(harness, svc);
        dom.rebuild_in_place();
        tokio::time::timeout(Duration::from_secs(5), dom.wait_for_work())
            .await
            .expect("load task settled");
        dom.render_immediate_to_vec();
        dioxus_ssr::render(&dom)
    }

    #[tokio::test]
    async fn mount_renders_fetched_categories() {
        let base = spawn_catalog_server(StatusCode::OK, CLEANING).await;
        let html = mount(services_for(&base)).await;

        assert_eq!(html.matches("<section").count(), 1);
        assert_eq!(html.matches("<article").count(), 1);
        assert!(html.contains("Cleaning"));
        assert!(html.contains("Deep Clean"));
    }

    /// Mount the page and check that the load schedules no re-render.
    async fn mount_without_update(svc: AppServices) -> String {
        let mut dom = VirtualDom::new_with_props(harness, svc);
        dom.rebuild_in_place();
        let settled = tokio::time::timeout(Duration::from_secs(1), dom.wait_for_work()).await;
        assert!(settled.is_err(), "failed load re-rendered the page");
        dioxus_ssr::render(&dom)
    }

    #[tokio::test]
    async fn mount_with_failing_endpoint_stays_empty() {
        let base = spawn_catalog_server(StatusCode::SERVICE_UNAVAILABLE, CLEANING).await;
        let html = mount_without_update(services_for(&base)).await;

        assert_eq!(html.matches("<section").count(), 0);
    }

    #[tokio::test]
    async fn mount_with_malformed_body_stays_empty() {
        let base = spawn_catalog_server(StatusCode::OK, r#"{"title":"Cleaning"}"#).await;
        let html = mount_without_update(services_for(&base)).await;

        assert_eq!(html.matches("<section").count(), 0);
    }

    #[tokio::test]
    async fn remount_renders_identically() {
        let base = spawn_catalog_server(StatusCode::OK, CLEANING).await;
        let first = mount(services_for(&base)).await;
        let second = mount(services_for(&base)).await;

        assert_eq!(first, second);
    }
}
