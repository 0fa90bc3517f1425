//! Inline SVG icons (Lucide-style outline glyphs, 24x24 grid).

use leptos::prelude::*;

/// Renders an outline icon from SVG path data.
///
/// # Props
///
/// * `path` - SVG path data (d attribute); may hold several subpaths
/// * `class` - Additional CSS classes (default: "icon")
///
/// # Example
///
/// ```rust,ignore
/// view! { <Icon path=ICON_BRAIN class="icon icon-brand" /> }
/// ```
#[component]
pub fn Icon(
    /// SVG path data (the `d` attribute value)
    path: &'static str,
    /// CSS class names
    #[prop(default = "icon")]
    class: &'static str,
) -> impl IntoView {
    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            class=class
            aria-hidden="true"
        >
            <path d=path></path>
        </svg>
    }
}

pub const ICON_BRAIN: &str = "M12 5a3 3 0 1 0-5.997.125 4 4 0 0 0-2.526 5.77 4 4 0 0 0 .556 6.588A4 4 0 1 0 12 18ZM12 5a3 3 0 1 1 5.997.125 4 4 0 0 1 2.526 5.77 4 4 0 0 1-.556 6.588A4 4 0 1 1 12 18ZM12 5v13";

pub const ICON_ACTIVITY: &str = "M22 12h-4l-3 9L9 3l-3 9H2";

pub const ICON_CLOCK: &str = "M12 2a10 10 0 1 0 0 20 10 10 0 1 0 0-20ZM12 6v6l4 2";

pub const ICON_SHIELD_CHECK: &str = "M20 13c0 5-3.5 7.5-7.66 8.95a1 1 0 0 1-.67-.01C7.5 20.5 4 18 4 13V6a1 1 0 0 1 1-1c2 0 4.5-1.2 6.24-2.72a1.17 1.17 0 0 1 1.52 0C14.51 3.81 17 5 19 5a1 1 0 0 1 1 1ZM9 12l2 2 4-4";

pub const ICON_SMARTPHONE: &str = "M7 2h10a2 2 0 0 1 2 2v16a2 2 0 0 1-2 2H7a2 2 0 0 1-2-2V4a2 2 0 0 1 2-2ZM12 18h.01";

pub const ICON_FILE_TEXT: &str = "M15 2H6a2 2 0 0 0-2 2v16a2 2 0 0 0 2 2h12a2 2 0 0 0 2-2V7ZM14 2v4a2 2 0 0 0 2 2h4M10 9H8M16 13H8M16 17H8";

pub const ICON_MICROSCOPE: &str = "M6 18h8M3 22h18M14 22a7 7 0 1 0 0-14h-1M9 14h2M9 12a2 2 0 0 1-2-2V6h6v4a2 2 0 0 1-2 2ZM12 6V3a1 1 0 0 0-1-1H9a1 1 0 0 0-1 1v3";

pub const ICON_CHECK_CIRCLE: &str = "M12 2a10 10 0 1 0 0 20 10 10 0 1 0 0-20ZM9 12l2 2 4-4";

pub const ICON_MENU: &str = "M4 6h16M4 12h16M4 18h16";

pub const ICON_X: &str = "M18 6 6 18M6 6l12 12";

pub const ICON_ZAP: &str = "M4 14a1 1 0 0 1-.78-1.63l9.9-10.2a.5.5 0 0 1 .86.46l-1.92 6.02A1 1 0 0 0 13 10h7a1 1 0 0 1 .78 1.63l-9.9 10.2a.5.5 0 0 1-.86-.46l1.92-6.02A1 1 0 0 0 11 14Z";

pub const ICON_POINTER_CLICK: &str = "m9 9 5 12 1.8-5.2L21 14ZM7.2 2.2 8 5.1M5.1 8l-2.9-.8M14 4.1 12 6M6 12l-1.9 2";

pub const ICON_BAR_CHART: &str = "M3 3v18h18M18 17V9M13 17V5M8 17v-3";

pub const ICON_QUOTE: &str = "M3 21c3 0 7-1 7-8V5c0-1.25-.76-2.02-2-2H4c-1.25 0-2 .75-2 1.97V11c0 1.25.75 2 2 2 1 0 1 0 1 1v1c0 1-1 2-2 2s-1 .01-1 1.03V20c0 1 0 1 1 1ZM15 21c3 0 7-1 7-8V5c0-1.25-.76-2.02-2-2h-4c-1.25 0-2 .75-2 1.97V11c0 1.25.75 2 2 2h.75c0 2.25.25 4-2.75 4v3c0 1 0 1 1 1Z";
