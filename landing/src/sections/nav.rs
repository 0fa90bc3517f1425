use leptos::prelude::*;

use crate::components::{Button, Icon, ICON_BRAIN, ICON_MENU, ICON_X};
use crate::content::{BRAND_ACCENT, BRAND_PRIMARY, DEMO_CTA_LABEL, NAV_ITEMS};
use crate::nav::{PageNav, SectionId};

#[component]
pub fn Nav(nav: PageNav) -> impl IntoView {
    let demo = Callback::new(move |()| {
        nav.scroll_to(SectionId::Contact);
    });

    view! {
        <nav class="nav">
            <div class="container">
                <div class="nav-inner">
                    <button class="nav-brand" on:click=move |_| nav.scroll_to_top()>
                        <Icon path=ICON_BRAIN class="icon icon-brand" />
                        <span class="nav-title">
                            {BRAND_PRIMARY}
                            <span class="brand-accent">{BRAND_ACCENT}</span>
                        </span>
                    </button>

                    // Desktop links
                    <div class="nav-links">
                        {NAV_ITEMS
                            .into_iter()
                            .map(|item| {
                                let target = item.target;
                                view! {
                                    <button class="nav-link" on:click=move |_| { nav.scroll_to(target); }>
                                        {item.label}
                                    </button>
                                }
                            })
                            .collect::<Vec<_>>()}
                        <Button on_click=demo class="btn-sm">
                            {DEMO_CTA_LABEL}
                        </Button>
                    </div>

                    <button
                        class="nav-toggle"
                        aria-label="Menu"
                        aria-controls="mobile-menu"
                        aria-expanded=move || if nav.is_menu_open() { "true" } else { "false" }
                        on:click=move |_| nav.toggle_menu()
                    >
                        {move || {
                            let path = if nav.is_menu_open() { ICON_X } else { ICON_MENU };
                            view! { <Icon path=path /> }
                        }}
                    </button>
                </div>
            </div>

            // Mobile menu
            <Show when=move || nav.is_menu_open()>
                <div id="mobile-menu" class="mobile-menu">
                    {NAV_ITEMS
                        .into_iter()
                        .map(|item| {
                            let target = item.target;
                            view! {
                                <button class="mobile-link" on:click=move |_| { nav.scroll_to(target); }>
                                    {item.label}
                                </button>
                            }
                        })
                        .collect::<Vec<_>>()}
                    <div class="mobile-cta">
                        <Button on_click=demo class="btn-block">
                            {DEMO_CTA_LABEL}
                        </Button>
                    </div>
                </div>
            </Show>
        </nav>
    }
}
