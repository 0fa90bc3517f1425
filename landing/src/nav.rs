//! Navigation controller: mobile menu state + smooth scrolling to sections.
//!
//! The controller only needs two things from the rendered document, element
//! lookup by id and scroll-into-view, so those sit behind [`PageDocument`].
//! [`WebDocument`] implements it over `web-sys` for the browser build.

use leptos::prelude::*;

/// Scroll targets rendered on the page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionId {
    Solution,
    Tests,
    Science,
    Contact,
}

impl SectionId {
    pub const ALL: [SectionId; 4] = [
        SectionId::Solution,
        SectionId::Tests,
        SectionId::Science,
        SectionId::Contact,
    ];

    /// The element id used in markup
    pub const fn as_str(self) -> &'static str {
        match self {
            SectionId::Solution => "solucao",
            SectionId::Tests => "testes",
            SectionId::Science => "ciencia",
            SectionId::Contact => "contato",
        }
    }
}

impl std::fmt::Display for SectionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Mobile menu visibility. Starts closed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

impl MenuState {
    pub fn toggled(self) -> Self {
        match self {
            MenuState::Closed => MenuState::Open,
            MenuState::Open => MenuState::Closed,
        }
    }

    pub fn is_open(self) -> bool {
        self == MenuState::Open
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ScrollBehavior {
    Auto,
    Instant,
    #[default]
    Smooth,
}

/// The slice of the DOM the controller talks to.
pub trait PageDocument {
    type Element;

    /// Find a rendered element by its `id` attribute.
    fn element_by_id(&self, id: &str) -> Option<Self::Element>;

    fn scroll_into_view(&self, element: &Self::Element, behavior: ScrollBehavior);

    /// Scroll the viewport back to the origin.
    fn scroll_to_top(&self);
}

/// Browser document reached through `web_sys::window()`.
///
/// Only usable on `wasm32`; on native targets the calls are never reached
/// because event handlers do not run during static rendering.
#[derive(Debug, Clone, Copy, Default)]
pub struct WebDocument;

impl PageDocument for WebDocument {
    type Element = web_sys::Element;

    fn element_by_id(&self, id: &str) -> Option<web_sys::Element> {
        web_sys::window()?.document()?.get_element_by_id(id)
    }

    fn scroll_into_view(&self, element: &web_sys::Element, behavior: ScrollBehavior) {
        let options = web_sys::ScrollIntoViewOptions::new();
        options.set_behavior(match behavior {
            ScrollBehavior::Auto => web_sys::ScrollBehavior::Auto,
            ScrollBehavior::Instant => web_sys::ScrollBehavior::Instant,
            ScrollBehavior::Smooth => web_sys::ScrollBehavior::Smooth,
        });
        element.scroll_into_view_with_scroll_into_view_options(&options);
    }

    fn scroll_to_top(&self) {
        if let Some(window) = web_sys::window() {
            window.scroll_to_with_x_and_y(0.0, 0.0);
        }
    }
}

/// Owns the menu signal and drives scrolling.
///
/// `Copy` when the document handle is, so it can be moved into any number
/// of click handlers.
#[derive(Debug, Clone, Copy)]
pub struct NavController<D> {
    menu: RwSignal<MenuState>,
    document: D,
}

/// Controller wired to the real browser document
pub type PageNav = NavController<WebDocument>;

impl<D: PageDocument> NavController<D> {
    pub fn new(document: D) -> Self {
        Self {
            menu: RwSignal::new(MenuState::default()),
            document,
        }
    }

    /// Current menu state. Tracked, so views re-render on change.
    pub fn menu_state(&self) -> MenuState {
        self.menu.get()
    }

    pub fn is_menu_open(&self) -> bool {
        self.menu_state().is_open()
    }

    pub fn toggle_menu(&self) {
        self.menu.update(|state| *state = state.toggled());
        tracing::trace!(state = ?self.menu.get_untracked(), "menu toggled");
    }

    /// Smooth-scroll to the element with `id` and close the menu.
    ///
    /// Unknown ids are skipped silently and leave the menu as is. Returns
    /// whether a scroll was requested.
    pub fn scroll_to_section(&self, id: &str) -> bool {
        match self.document.element_by_id(id) {
            Some(element) => {
                self.document.scroll_into_view(&element, ScrollBehavior::Smooth);
                self.menu.set(MenuState::Closed);
                tracing::debug!(section = id, "scrolled to section");
                true
            }
            None => {
                tracing::debug!(section = id, "no element for section id, skipping scroll");
                false
            }
        }
    }

    pub fn scroll_to(&self, section: SectionId) -> bool {
        self.scroll_to_section(section.as_str())
    }

    pub fn scroll_to_top(&self) {
        self.document.scroll_to_top();
    }

    pub fn document(&self) -> &D {
        &self.document
    }
}

impl Default for PageNav {
    fn default() -> Self {
        Self::new(WebDocument)
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use std::cell::RefCell;

    /// Fake document: knows a fixed set of ids and records every scroll.
    #[derive(Debug, Default)]
    pub struct RecordingDocument {
        pub ids: Vec<&'static str>,
        pub scrolls: RefCell<Vec<(String, ScrollBehavior)>>,
        pub top_scrolls: RefCell<usize>,
    }

    impl RecordingDocument {
        pub fn with_ids(ids: &[&'static str]) -> Self {
            Self {
                ids: ids.to_vec(),
                ..Default::default()
            }
        }
    }

    impl PageDocument for &RecordingDocument {
        type Element = String;

        fn element_by_id(&self, id: &str) -> Option<String> {
            self.ids.iter().find(|known| **known == id).map(|id| id.to_string())
        }

        fn scroll_into_view(&self, element: &String, behavior: ScrollBehavior) {
            self.scrolls.borrow_mut().push((element.clone(), behavior));
        }

        fn scroll_to_top(&self) {
            *self.top_scrolls.borrow_mut() += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::RecordingDocument;
    use super::*;
    use crate::content::NAV_ITEMS;

    fn all_sections() -> RecordingDocument {
        RecordingDocument::with_ids(&SectionId::ALL.map(SectionId::as_str))
    }

    #[test]
    fn menu_starts_closed() {
        let doc = all_sections();
        let nav = NavController::new(&doc);
        assert_eq!(nav.menu_state(), MenuState::Closed);
    }

    #[test]
    fn toggle_flips_state() {
        let doc = all_sections();
        let nav = NavController::new(&doc);

        nav.toggle_menu();
        assert!(nav.is_menu_open());
        nav.toggle_menu();
        assert!(!nav.is_menu_open());
    }

    #[test]
    fn nav_targets_scroll_smoothly_and_close_menu() {
        let doc = all_sections();
        let nav = NavController::new(&doc);

        for item in NAV_ITEMS {
            nav.toggle_menu();
            assert!(nav.is_menu_open());

            assert!(nav.scroll_to(item.target));
            assert_eq!(nav.menu_state(), MenuState::Closed);
        }

        let scrolls = doc.scrolls.borrow();
        let targets: Vec<&str> = scrolls.iter().map(|(id, _)| id.as_str()).collect();
        assert_eq!(targets, ["solucao", "testes", "ciencia"]);
        assert!(scrolls.iter().all(|(_, behavior)| *behavior == ScrollBehavior::Smooth));
    }

    #[test]
    fn scroll_closes_menu_even_when_already_closed() {
        let doc = all_sections();
        let nav = NavController::new(&doc);

        assert!(nav.scroll_to(SectionId::Contact));
        assert_eq!(nav.menu_state(), MenuState::Closed);
    }

    #[test]
    fn unknown_section_is_a_no_op() {
        let doc = all_sections();
        let nav = NavController::new(&doc);
        nav.toggle_menu();

        assert!(!nav.scroll_to_section("precos"));
        assert!(doc.scrolls.borrow().is_empty());
        // menu only closes on a successful scroll
        assert!(nav.is_menu_open());
    }

    #[test]
    fn missing_element_for_known_id_is_skipped() {
        let doc = RecordingDocument::with_ids(&["testes"]);
        let nav = NavController::new(&doc);

        assert!(!nav.scroll_to(SectionId::Science));
        assert!(nav.scroll_to(SectionId::Tests));
        assert_eq!(doc.scrolls.borrow().len(), 1);
    }

    #[test]
    fn scroll_to_top_delegates_to_document() {
        let doc = all_sections();
        let nav = NavController::new(&doc);

        nav.scroll_to_top();
        assert_eq!(*doc.top_scrolls.borrow(), 1);
        assert_eq!(nav.menu_state(), MenuState::Closed);
    }

    #[test]
    fn section_ids_render_as_markup_ids() {
        assert_eq!(SectionId::Contact.to_string(), "contato");
    }
}
