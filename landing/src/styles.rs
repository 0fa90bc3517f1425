//! CSS for the landing page.
//!
//! Inlined into the exported document `<head>` and injected at browser
//! mount, so both delivery paths share one stylesheet. Keep it free of
//! `<`, `>` and `&`: it is rendered as escaped text.
//!
//! # Customization
//!
//! Extra stylesheets can be linked after this one through
//! [`crate::config::SiteConfig::stylesheets`].

/// Complete CSS for the page - clinical light theme.
///
/// This CSS provides:
/// - Base typography and the slate/blue/teal palette
/// - Layout primitives (section bands, container, grids)
/// - Cards, pricing panel, testimonials
/// - Sticky navigation with a mobile menu below 768px
pub const LANDING_CSS: &str = r#"
:root {
    --blue-900: #1e3a8a;
    --blue-800: #1e40af;
    --blue-700: #1d4ed8;
    --blue-600: #2563eb;
    --blue-200: #bfdbfe;
    --blue-100: #dbeafe;
    --blue-50: #eff6ff;
    --teal-500: #14b8a6;
    --teal-600: #0d9488;
    --teal-100: #ccfbf1;
    --teal-50: #f0fdfa;
    --green-600: #16a34a;
    --red-600: #dc2626;
    --red-100: #fee2e2;
    --yellow-500: #eab308;
    --slate-900: #0f172a;
    --slate-700: #334155;
    --slate-600: #475569;
    --slate-500: #64748b;
    --slate-400: #94a3b8;
    --slate-300: #cbd5e1;
    --slate-200: #e2e8f0;
    --slate-100: #f1f5f9;
    --slate-50: #f8fafc;
    --radius: 0.75rem;
    --radius-lg: 1rem;
    --radius-xl: 1.5rem;
    --shadow-sm: 0 1px 2px rgba(15, 23, 42, 0.06);
    --shadow-md: 0 4px 12px rgba(15, 23, 42, 0.08);
    --shadow-xl: 0 20px 40px rgba(15, 23, 42, 0.15);
    --font-sans: 'Inter', system-ui, -apple-system, 'Segoe UI', sans-serif;
}

*, *::before, *::after { box-sizing: border-box; }

html { scroll-behavior: smooth; }

body {
    margin: 0;
    font-family: var(--font-sans);
    color: var(--slate-900);
    background: #fff;
    line-height: 1.5;
}

h1, h2, h3, h4, p { margin: 0; }
ul { list-style: none; margin: 0; padding: 0; }
button { font: inherit; cursor: pointer; background: none; border: none; color: inherit; }

.icon { width: 1.25rem; height: 1.25rem; flex-shrink: 0; }
.icon-sm { width: 1rem; height: 1rem; }
.icon-lg { width: 2rem; height: 2rem; }
.icon-xl { width: 3rem; height: 3rem; }
.icon-brand { width: 2rem; height: 2rem; color: var(--blue-900); }
.icon-check { color: var(--teal-500); }
.icon-alert { color: var(--red-600); }
.icon-blue { color: var(--blue-600); }
.icon-green { color: var(--green-600); }
.icon-muted { color: var(--slate-400); }
.icon-zap { width: 1.5rem; height: 1.5rem; color: var(--yellow-500); }

/* Layout */

.container { max-width: 80rem; margin: 0 auto; padding: 0 1rem; }
.section { padding: 4rem 0; }
.section-muted { background: var(--slate-50); }
.section-bordered { border-top: 1px solid var(--slate-200); }
.section-brand { background: var(--blue-900); color: #fff; }

.badge {
    display: inline-flex;
    align-items: center;
    padding: 0.25rem 0.75rem;
    margin-bottom: 1rem;
    border-radius: 9999px;
    font-size: 0.75rem;
    font-weight: 500;
    background: var(--blue-100);
    color: var(--blue-800);
}

.section-heading { margin-bottom: 3rem; }
.align-center { text-align: center; }
.align-left { text-align: left; }
.section-title { font-size: 2rem; font-weight: 700; letter-spacing: -0.02em; margin-bottom: 1rem; }
.section-subtitle { font-size: 1.125rem; color: var(--slate-600); max-width: 42rem; margin: 0 auto; }

.grid { display: grid; gap: 1.5rem; }
.split { display: grid; gap: 3rem; align-items: center; }
.stack { display: flex; flex-direction: column; gap: 1rem; }
.split-title { font-size: 1.875rem; font-weight: 700; margin-bottom: 1.5rem; }
.lead { font-size: 1.125rem; color: var(--slate-600); margin-bottom: 1.5rem; }
.lead strong { color: var(--slate-900); }
.lead-inverse { color: var(--blue-100); margin-bottom: 2rem; }
.fine-print { margin-top: 2.5rem; text-align: center; font-size: 0.75rem; color: var(--slate-400); max-width: 42rem; margin-left: auto; margin-right: auto; }
.disclaimer { text-align: center; font-size: 0.875rem; font-style: italic; color: var(--slate-500); max-width: 42rem; margin: 3rem auto 0; }

/* Buttons */

.btn {
    display: inline-flex;
    align-items: center;
    justify-content: center;
    padding: 0.75rem 1.5rem;
    border: 1px solid transparent;
    border-radius: 0.375rem;
    font-size: 1rem;
    font-weight: 500;
    transition: background-color 0.2s, color 0.2s;
}
.btn:focus-visible { outline: 2px solid var(--blue-600); outline-offset: 2px; }
.btn-primary { color: #fff; background: var(--blue-900); }
.btn-primary:hover { background: var(--blue-800); }
.btn-secondary { color: var(--blue-900); background: var(--blue-100); }
.btn-secondary:hover { background: var(--blue-200); }
.btn-outline { color: var(--slate-700); background: #fff; border-color: var(--slate-300); }
.btn-outline:hover { background: var(--slate-50); }
.btn-sm { padding: 0.5rem 1rem; font-size: 0.875rem; }
.btn-lg { padding: 0.875rem 2rem; font-size: 1.125rem; }
.btn-block { width: 100%; }
.btn-shadow { box-shadow: 0 10px 20px rgba(30, 58, 138, 0.1); }
.btn-teal { color: #fff; background: var(--teal-500); border: none; }
.btn-teal:hover { background: var(--teal-600); }

/* Navigation */

.nav {
    position: sticky;
    top: 0;
    z-index: 50;
    background: rgba(255, 255, 255, 0.9);
    backdrop-filter: blur(12px);
    border-bottom: 1px solid var(--slate-200);
}
.nav-inner { display: flex; justify-content: space-between; align-items: center; height: 4rem; }
.nav-brand { display: flex; align-items: center; gap: 0.5rem; }
.nav-title { font-size: 1.25rem; font-weight: 700; letter-spacing: -0.02em; }
.brand-accent { color: var(--blue-900); }
.nav-links { display: none; align-items: center; gap: 2rem; }
.nav-link { color: var(--slate-600); font-weight: 500; }
.nav-link:hover { color: var(--blue-900); }
.nav-toggle { color: var(--slate-600); }
.mobile-menu { padding: 0.5rem 1rem 1.5rem; border-top: 1px solid var(--slate-100); background: #fff; }
.mobile-link { display: block; width: 100%; text-align: left; padding: 0.5rem 0; color: var(--slate-600); font-weight: 500; }
.mobile-cta { padding-top: 0.5rem; }

/* Hero */

.hero { position: relative; overflow: hidden; padding: 5rem 0 6rem; }
.hero-glow { position: absolute; width: 24rem; height: 24rem; border-radius: 9999px; filter: blur(64px); opacity: 0.5; }
.hero-glow-blue { top: -5rem; right: -5rem; background: var(--blue-50); }
.hero-glow-teal { bottom: -5rem; left: -5rem; background: var(--teal-50); }
.hero-inner { position: relative; max-width: 48rem; text-align: center; }
.hero-title { font-size: 2.25rem; font-weight: 800; line-height: 1.15; letter-spacing: -0.02em; margin-bottom: 1.5rem; }
.hero-title-accent { color: var(--blue-900); }
.hero-description { font-size: 1.25rem; color: var(--slate-600); line-height: 1.6; max-width: 42rem; margin: 0 auto 2rem; }
.hero-actions { display: flex; flex-direction: column; justify-content: center; gap: 1rem; }
.hero-note { margin-top: 1.5rem; display: flex; align-items: center; justify-content: center; gap: 0.5rem; font-size: 0.875rem; color: var(--slate-500); }

/* Cards */

.card {
    background: #fff;
    padding: 1.5rem;
    border-radius: var(--radius);
    border: 1px solid var(--slate-200);
    box-shadow: var(--shadow-sm);
    transition: box-shadow 0.2s;
}
.card:hover { box-shadow: var(--shadow-md); }
.card-accent { height: 0.5rem; width: 3rem; border-radius: 9999px; background: var(--blue-900); margin-bottom: 1rem; }
.card-title { font-size: 1.25rem; font-weight: 700; margin-bottom: 0.5rem; }
.card-text { color: var(--slate-600); }
.card-eyebrow { font-size: 0.75rem; font-weight: 700; text-transform: uppercase; letter-spacing: 0.05em; color: var(--blue-600); margin-bottom: 0.75rem; }
.comparison-card { display: flex; flex-direction: column; height: 100%; }
.comparison-card .card-text { font-size: 0.875rem; margin-bottom: 1.5rem; }
.card-grow { flex-grow: 1; }
.antecedes { background: var(--slate-50); padding: 0.75rem; border-radius: 0.5rem; border: 1px solid var(--slate-100); }
.antecedes-label { font-size: 0.75rem; font-weight: 700; text-transform: uppercase; color: var(--slate-400); margin-bottom: 0.25rem; }
.antecedes-value { font-size: 0.875rem; font-weight: 500; color: var(--slate-900); }
.pillar-card { padding: 2rem; border-radius: var(--radius-lg); }
.pillar-card .card-text { font-size: 0.875rem; line-height: 1.7; }

.icon-point { display: flex; align-items: flex-start; gap: 0.75rem; }
.icon-point-badge { margin-top: 0.25rem; padding: 0.25rem; border-radius: 0.25rem; background: var(--red-100); }
.icon-point-title { font-weight: 500; }
.icon-point-text { font-size: 0.875rem; color: var(--slate-600); }

.panel { background: #fff; padding: 2rem; border-radius: var(--radius-lg); border: 1px solid var(--slate-200); box-shadow: var(--shadow-sm); }
.panel-title { font-size: 1.5rem; font-weight: 700; color: var(--blue-900); margin-bottom: 1rem; }
.panel-text { color: var(--slate-600); margin-bottom: 1.5rem; }
.panel-footnote { margin-top: 2rem; padding-top: 1.5rem; border-top: 1px solid var(--slate-100); font-size: 0.875rem; font-style: italic; color: var(--slate-500); }
.check-list { display: flex; flex-direction: column; gap: 0.75rem; }
.check-item, .pricing-feature { display: flex; align-items: flex-start; gap: 0.75rem; color: var(--slate-700); }

.callout-wrap { margin-top: 3rem; text-align: center; }
.callout { display: inline-flex; align-items: center; gap: 0.75rem; padding: 1rem; text-align: left; background: var(--slate-50); border: 1px solid var(--slate-200); border-radius: 0.5rem; }
.callout-title { font-weight: 700; }
.callout-text { font-size: 0.875rem; color: var(--slate-600); }

/* Remote workflow */

.remote { display: flex; flex-direction: column; gap: 3rem; }
.steps { display: flex; flex-direction: column; gap: 1.5rem; }
.step { display: flex; gap: 1rem; }
.step-number { width: 2rem; height: 2rem; border-radius: 9999px; background: var(--blue-700); display: flex; align-items: center; justify-content: center; font-weight: 700; font-size: 0.875rem; flex-shrink: 0; }
.step-title { font-weight: 700; }
.step-text { font-size: 0.875rem; color: var(--blue-200); }
.remote-card { background: #fff; color: var(--slate-900); padding: 2rem; border-radius: var(--radius-lg); box-shadow: var(--shadow-xl); }
.remote-card-header { display: flex; align-items: center; gap: 0.75rem; margin-bottom: 1.5rem; font-size: 1.25rem; font-weight: 700; }
.value-list { display: flex; flex-direction: column; gap: 1rem; }
.value-item { display: flex; align-items: center; gap: 0.75rem; padding: 0.75rem; border-radius: 0.5rem; background: var(--slate-50); font-weight: 500; }

/* Report preview */

.report-mockup-wrap { display: flex; justify-content: center; }
.mockup { position: relative; width: 100%; max-width: 28rem; aspect-ratio: 3 / 4; padding: 1.5rem; display: flex; flex-direction: column; gap: 1.5rem; background: var(--slate-100); border: 2px solid var(--slate-200); border-radius: 0.5rem; box-shadow: var(--shadow-xl); }
.mockup-lines { display: flex; flex-direction: column; gap: 0.5rem; }
.mockup-bar { height: 0.5rem; width: 100%; border-radius: 0.25rem; background: var(--slate-200); }
.mockup-heading { height: 1rem; width: 33%; background: var(--slate-300); }
.mockup-bar-3-4 { width: 75%; }
.mockup-bar-5-6 { width: 83%; }
.mockup-charts { display: grid; grid-template-columns: 1fr 1fr; gap: 1rem; }
.mockup-chart { height: 6rem; border-radius: 0.5rem; display: flex; align-items: center; justify-content: center; }
.mockup-chart-blue { background: var(--blue-100); color: var(--blue-200); }
.mockup-chart-teal { background: var(--teal-100); color: var(--teal-500); }
.mockup-result { padding: 1rem; font-size: 0.75rem; color: #166534; background: #f0fdf4; border: 1px solid #dcfce7; border-radius: 0.25rem; }
.mockup-check { position: absolute; bottom: 1.5rem; right: 1.5rem; background: #fff; padding: 0.5rem; border-radius: 9999px; box-shadow: var(--shadow-md); }
.report-kind { display: flex; align-items: flex-start; gap: 0.75rem; color: var(--slate-700); font-weight: 500; }
.report-closing { margin-top: 1.5rem; font-weight: 500; }

/* Routine use */

.use-case-card { background: #fff; padding: 1.5rem; border-radius: 0.5rem; text-align: center; box-shadow: var(--shadow-sm); }
.use-case-title { font-weight: 700; color: var(--blue-900); margin-bottom: 0.5rem; }
.use-case-text { font-size: 0.875rem; color: var(--slate-600); }

/* Pricing */

.pricing-wrap { display: flex; justify-content: center; }
.pricing-card { width: 100%; max-width: 32rem; padding: 2rem; text-align: center; background: #fff; border: 1px solid var(--slate-200); border-radius: var(--radius-xl); box-shadow: var(--shadow-md); }
.pricing-plan { font-size: 1.5rem; font-weight: 700; margin-bottom: 0.25rem; }
.pricing-tagline { font-size: 0.875rem; font-weight: 500; color: var(--slate-500); margin-bottom: 1.5rem; }
.price { margin-bottom: 2rem; }
.price-amount { font-size: 2.25rem; font-weight: 800; color: var(--blue-900); }
.price-period { margin-left: 0.5rem; font-size: 1.125rem; font-weight: 500; color: var(--slate-500); }
.pricing-features { display: flex; flex-direction: column; gap: 1rem; margin-bottom: 2.5rem; text-align: left; }
.pricing-note { margin-top: 1.5rem; font-size: 0.75rem; color: var(--slate-400); line-height: 1.6; }

/* Testimonials */

.testimonial { position: relative; margin: 0; padding: 2rem; border-radius: var(--radius-lg); background: var(--slate-50); }
.testimonial-mark { position: absolute; top: 1.5rem; right: 1.5rem; width: 2rem; height: 2rem; color: var(--blue-100); }
.testimonial-quote { position: relative; margin: 0 0 1.5rem; font-style: italic; color: var(--slate-600); }
.testimonial-author { display: flex; align-items: center; gap: 1rem; }
.avatar { width: 3rem; height: 3rem; border-radius: 9999px; object-fit: cover; border: 2px solid #fff; box-shadow: var(--shadow-sm); }
.testimonial-name { font-size: 0.875rem; font-weight: 700; }
.testimonial-role { font-size: 0.75rem; font-weight: 500; color: var(--blue-600); }
.testimonial-clinic { font-size: 0.75rem; color: var(--slate-500); }

/* Call to action */

.cta { position: relative; overflow: hidden; padding: 2rem; text-align: center; color: #fff; background: var(--blue-900); border-radius: var(--radius-xl); }
.cta-orb { position: absolute; width: 16rem; height: 16rem; border-radius: 9999px; }
.cta-orb-light { top: 0; left: 0; background: #fff; opacity: 0.05; transform: translate(-50%, -50%); }
.cta-orb-teal { bottom: 0; right: 0; background: var(--teal-500); opacity: 0.1; transform: translate(33%, 33%); }
.cta-title { position: relative; font-size: 1.875rem; font-weight: 700; margin-bottom: 1.5rem; }
.cta-text { position: relative; font-size: 1.25rem; color: var(--blue-100); max-width: 42rem; margin: 0 auto 2.5rem; }
.cta-actions { position: relative; display: flex; justify-content: center; }

/* Footer */

.footer { padding: 4rem 0 2rem; font-size: 0.875rem; background: var(--slate-50); border-top: 1px solid var(--slate-200); }
.footer-grid { display: grid; gap: 2rem; margin-bottom: 3rem; }
.footer-brand { display: flex; align-items: center; gap: 0.5rem; margin-bottom: 1rem; }
.footer-title { font-weight: 700; color: var(--slate-700); }
.footer-text, .footer-list, .footer-ethics { color: var(--slate-500); }
.footer-heading { font-weight: 700; margin-bottom: 1rem; }
.footer-list { display: flex; flex-direction: column; gap: 0.5rem; }
.footer-ethics { display: flex; align-items: flex-start; gap: 0.75rem; }
.footer-bottom { padding-top: 2rem; border-top: 1px solid var(--slate-200); display: flex; flex-direction: column; align-items: center; gap: 0.5rem; color: var(--slate-400); }

@media (min-width: 768px) {
    .section { padding: 6rem 0; }
    .container { padding: 0 2rem; }
    .section-title { font-size: 2.25rem; }
    .nav-links { display: flex; }
    .nav-toggle, .mobile-menu { display: none; }
    .hero { padding: 8rem 0; }
    .hero-title { font-size: 3.75rem; }
    .hero-actions { flex-direction: row; }
    .split { grid-template-columns: 1fr 1fr; }
    .grid-3 { grid-template-columns: repeat(2, 1fr); }
    .grid-4 { grid-template-columns: repeat(4, 1fr); }
    .remote { flex-direction: row; align-items: center; justify-content: space-between; }
    .remote-copy { width: 50%; }
    .remote-card { width: 41%; }
    .pricing-card { padding: 2.5rem; }
    .cta { padding: 4rem; }
    .cta-title { font-size: 3rem; }
    .footer-grid { grid-template-columns: repeat(4, 1fr); }
    .footer-wide { grid-column: span 2; }
    .footer-bottom { flex-direction: row; justify-content: space-between; }
}

@media (min-width: 1024px) {
    .grid-3 { grid-template-columns: repeat(3, 1fr); }
}
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn css_survives_text_escaping() {
        assert!(!LANDING_CSS.contains(['<', '>', '&']));
    }

    #[test]
    fn css_styles_every_button_variant() {
        for class in [".btn-primary", ".btn-secondary", ".btn-outline"] {
            assert!(LANDING_CSS.contains(class), "missing {}", class);
        }
    }
}
