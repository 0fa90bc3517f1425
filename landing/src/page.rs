//! Page assembly: every section in fixed order, plus the full HTML document
//! used for static export.

use leptos::prelude::*;

use crate::config::SiteConfig;
use crate::nav::PageNav;
use crate::sections::*;
use crate::styles::LANDING_CSS;

/// The landing page body.
///
/// `nav` owns the menu state; when omitted a controller bound to the
/// browser document is created.
#[component]
pub fn LandingPage(#[prop(optional)] nav: PageNav) -> impl IntoView {
    view! {
        <div class="page">
            <Nav nav=nav />
            <main>
                <Hero nav=nav />
                <ProblemSolution />
                <TestCatalog />
                <Comparison />
                <RemoteWorkflow />
                <ReportPreview />
                <RoutineUse />
                <Anamnesis />
                <Pricing />
                <Testimonials />
                <CallToAction />
            </main>
            <Footer />
        </div>
    }
}

/// Complete `<html>` document around [`LandingPage`]
#[component]
pub fn LandingDocument(config: SiteConfig) -> impl IntoView {
    let SiteConfig {
        title,
        description,
        lang,
        canonical_url,
        stylesheets,
    } = config;

    view! {
        <html lang=lang>
            <head>
                <meta charset="UTF-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <meta name="description" content=description />
                <title>{title}</title>
                {canonical_url.map(|href| view! { <link rel="canonical" href=href /> })}
                <style>{LANDING_CSS}</style>
                {stylesheets
                    .into_iter()
                    .map(|href| view! { <link rel="stylesheet" href=href /> })
                    .collect::<Vec<_>>()}
            </head>
            <body>
                <LandingPage />
            </body>
        </html>
    }
}
