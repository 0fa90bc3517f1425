//! # neurorastreio-landing
//!
//! Landing page for NeuroRastreio, a functional neurocognitive screening
//! product for clinics and educational psychologists.
//!
//! The page is a fixed sequence of Leptos components fed by literal copy
//! tables. It ships two ways:
//!
//! - **Browser** (`csr` feature) - mounted into `<body>`, with smooth-scroll
//!   navigation and a mobile menu toggle
//! - **Static export** (`ssr` feature) - rendered to a complete HTML document
//!   via Leptos' `RenderHtml`
//!
//! ## Quick Start
//!
//! ```rust
//! use neurorastreio_landing::{render_page, SiteConfig};
//!
//! let config = SiteConfig {
//!     title: "NeuroRastreio".into(),
//!     ..Default::default()
//! };
//! let html = render_page(&config);
//! assert!(html.contains("<title>NeuroRastreio</title>"));
//! ```
//!
//! ## Architecture
//!
//! - [`content`] - copy tables (tests, comparisons, pricing, testimonials)
//! - [`nav`] - menu state and scroll-to-section controller
//! - [`components`] - layout primitives, cards, button
//! - [`sections`] - one component per page band
//! - [`page`] - page assembly and the exported document
//! - [`styles`] - CSS constant

pub mod components;
pub mod config;
pub mod content;
pub mod error;
pub mod export;
pub mod nav;
pub mod page;
pub mod sections;
pub mod styles;
pub mod telemetry;

pub use config::SiteConfig;
pub use error::{LandingError, Result};
pub use export::{export_page, render_page};
pub use nav::{MenuState, NavController, PageDocument, PageNav, ScrollBehavior, SectionId, WebDocument};
pub use page::{LandingDocument, LandingPage};
