//! Rendered-page behaviour: menu visibility, catalog, pricing, document shell.

use std::cell::RefCell;

use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;
use pretty_assertions::assert_eq;

use neurorastreio_landing::content::{NAV_ITEMS, TESTS};
use neurorastreio_landing::{
    render_page, LandingPage, MenuState, NavController, PageDocument, PageNav, ScrollBehavior,
    SectionId, SiteConfig,
};

const MOBILE_MENU: &str = r#"id="mobile-menu""#;

fn render(nav: PageNav) -> String {
    view! { <LandingPage nav=nav /> }.to_html()
}

#[test]
fn mobile_menu_starts_closed() {
    let html = render(PageNav::default());

    assert!(!html.contains(MOBILE_MENU));
    assert!(html.contains(r#"aria-expanded="false""#));
}

#[test]
fn toggling_shows_then_hides_mobile_menu() {
    let nav = PageNav::default();

    nav.toggle_menu();
    let open = render(nav);
    assert!(open.contains(MOBILE_MENU));
    assert!(open.contains(r#"aria-expanded="true""#));

    nav.toggle_menu();
    let closed = render(nav);
    assert!(!closed.contains(MOBILE_MENU));
}

#[test]
fn catalog_lists_six_tests_in_order() {
    let html = render(PageNav::default());

    assert_eq!(html.matches(r#"class="card test-card""#).count(), 6);

    let positions: Vec<usize> = TESTS
        .iter()
        .map(|test| html.find(test.name).unwrap_or_else(|| panic!("missing {}", test.name)))
        .collect();
    let mut sorted = positions.clone();
    sorted.sort_unstable();
    assert_eq!(positions, sorted);

    let names: Vec<&str> = TESTS.iter().map(|test| test.name).collect();
    assert_eq!(
        names,
        [
            "Stroop (Infantil)",
            "Flanker Task",
            "Go / No-Go",
            "Corsi Blocks",
            "N-Back",
            "Reaction Time",
        ]
    );
}

#[test]
fn pricing_shows_price_and_eight_features() {
    let html = render(PageNav::default());

    assert!(html.contains(r#"aria-label="R$ 97 / ano""#));
    assert_eq!(html.matches(r#"<li class="pricing-feature">"#).count(), 8);
}

#[test]
fn every_scroll_target_is_rendered() {
    let html = render(PageNav::default());

    for section in SectionId::ALL {
        let id_attr = format!(r#"id="{}""#, section);
        assert!(html.contains(&id_attr), "missing section {}", section);
    }
}

#[test]
fn hero_buttons_use_primary_and_outline_styles() {
    let html = render(PageNav::default());

    assert!(html.contains(r#"class="btn btn-primary btn-lg btn-shadow""#));
    assert!(html.contains(r#"class="btn btn-outline btn-lg""#));
}

#[test]
fn document_has_doctype_head_and_styles() {
    let html = render_page(&SiteConfig::default());

    assert!(html.starts_with("<!DOCTYPE html>\n<html"));
    assert!(html.contains(r#"lang="pt-BR""#));
    assert!(html.contains("<title>NeuroRastreio | Rastreio neurocognitivo funcional</title>"));
    assert!(html.contains("<style>"));
    assert!(html.contains(".btn-outline"));
    assert!(!html.contains(r#"rel="canonical""#));
}

#[test]
fn document_applies_site_config() {
    let config = SiteConfig {
        title: "Demo".into(),
        lang: "en".into(),
        canonical_url: Some("https://example.test/".into()),
        stylesheets: vec!["/fonts.css".into()],
        ..Default::default()
    };
    let html = render_page(&config);

    assert!(html.contains("<title>Demo</title>"));
    assert!(html.contains(r#"lang="en""#));
    assert!(html.contains(r#"href="https://example.test/""#));
    assert!(html.contains(r#"href="/fonts.css""#));
}

/// Document fake that only knows the ids it was given
struct FakeDocument {
    ids: Vec<&'static str>,
    scrolled: RefCell<Vec<String>>,
}

impl PageDocument for &FakeDocument {
    type Element = &'static str;

    fn element_by_id(&self, id: &str) -> Option<&'static str> {
        self.ids.iter().copied().find(|known| *known == id)
    }

    fn scroll_into_view(&self, element: &&'static str, behavior: ScrollBehavior) {
        assert_eq!(behavior, ScrollBehavior::Smooth);
        self.scrolled.borrow_mut().push(element.to_string());
    }

    fn scroll_to_top(&self) {}
}

#[test]
fn nav_items_scroll_to_matching_ids_and_close_menu() {
    let doc = FakeDocument {
        ids: SectionId::ALL.iter().map(|s| s.as_str()).collect(),
        scrolled: RefCell::new(Vec::new()),
    };
    let nav = NavController::new(&doc);

    for item in NAV_ITEMS {
        nav.toggle_menu();
        assert!(nav.scroll_to_section(item.target.as_str()));
        assert_eq!(nav.menu_state(), MenuState::Closed);
    }

    assert_eq!(*doc.scrolled.borrow(), ["solucao", "testes", "ciencia"]);
}

#[test]
fn unknown_id_does_not_scroll() {
    let doc = FakeDocument {
        ids: vec!["testes"],
        scrolled: RefCell::new(Vec::new()),
    };
    let nav = NavController::new(&doc);

    assert!(!nav.scroll_to_section("nao-existe"));
    assert!(doc.scrolled.borrow().is_empty());
}
