//! Content cards bound to the copy tables in [`crate::content`]

use leptos::prelude::*;

use super::icons::{Icon, ICON_CHECK_CIRCLE, ICON_QUOTE};
use crate::content::{ComparisonDescriptor, Highlight, TestDescriptor, Testimonial};

#[component]
pub fn TestCard(test: TestDescriptor) -> impl IntoView {
    view! {
        <article class="card test-card">
            <div class="card-accent"></div>
            <h3 class="card-title">{test.name}</h3>
            <p class="card-text">{test.description}</p>
        </article>
    }
}

#[component]
pub fn ComparisonCard(comparison: ComparisonDescriptor) -> impl IntoView {
    view! {
        <article class="card comparison-card">
            <div class="card-accent"></div>
            <h3 class="card-title">{comparison.title}</h3>
            <p class="card-eyebrow">"Rastreio Funcional"</p>
            <p class="card-text card-grow">{comparison.description}</p>
            <div class="antecedes">
                <p class="antecedes-label">"Antecede / Orienta"</p>
                <p class="antecedes-value">{comparison.antecedes}</p>
            </div>
        </article>
    }
}

/// Checkmark list item
#[component]
pub fn FeatureBullet(
    text: &'static str,
    /// Class on the `<li>`, lets lists be counted/styled separately
    #[prop(default = "check-item")]
    class: &'static str,
) -> impl IntoView {
    view! {
        <li class=class>
            <Icon path=ICON_CHECK_CIRCLE class="icon icon-check" />
            <span>{text}</span>
        </li>
    }
}

/// Icon + title + text row (problem list)
#[component]
pub fn IconPoint(icon: &'static str, point: Highlight) -> impl IntoView {
    view! {
        <div class="icon-point">
            <div class="icon-point-badge">
                <Icon path=icon class="icon icon-alert" />
            </div>
            <div>
                <h4 class="icon-point-title">{point.title}</h4>
                <p class="icon-point-text">{point.text}</p>
            </div>
        </div>
    }
}

/// Numbered workflow step
#[component]
pub fn StepItem(number: usize, step: Highlight) -> impl IntoView {
    view! {
        <div class="step">
            <div class="step-number">{number}</div>
            <div>
                <h4 class="step-title">{step.title}</h4>
                <p class="step-text">{step.text}</p>
            </div>
        </div>
    }
}

#[component]
pub fn UseCaseCard(use_case: Highlight) -> impl IntoView {
    view! {
        <div class="use-case-card">
            <h4 class="use-case-title">{use_case.title}</h4>
            <p class="use-case-text">{use_case.text}</p>
        </div>
    }
}

/// Larger text card (anamnesis pillars)
#[component]
pub fn PillarCard(pillar: Highlight) -> impl IntoView {
    view! {
        <article class="card pillar-card">
            <div class="card-accent"></div>
            <h3 class="card-title">{pillar.title}</h3>
            <p class="card-text">{pillar.text}</p>
        </article>
    }
}

#[component]
pub fn TestimonialCard(testimonial: Testimonial) -> impl IntoView {
    view! {
        <figure class="testimonial">
            <Icon path=ICON_QUOTE class="icon testimonial-mark" />
            <blockquote class="testimonial-quote">{format!("\u{201c}{}\u{201d}", testimonial.quote)}</blockquote>
            <figcaption class="testimonial-author">
                <img class="avatar" src=testimonial.avatar_url alt=testimonial.name loading="lazy" />
                <div>
                    <h4 class="testimonial-name">{testimonial.name}</h4>
                    <p class="testimonial-role">{testimonial.role}</p>
                    <p class="testimonial-clinic">{testimonial.clinic}</p>
                </div>
            </figcaption>
        </figure>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{COMPARISONS, TESTIMONIALS, TESTS};
    use leptos::tachys::view::RenderHtml;

    #[test]
    fn comparison_card_shows_instruments() {
        let html = view! { <ComparisonCard comparison=COMPARISONS[2] /> }.to_html();
        assert!(html.contains("Controle Inibitório"));
        assert!(html.contains("WISC, Conners, SNAP-IV"));
        assert!(html.contains("Antecede / Orienta"));
    }

    #[test]
    fn test_card_renders_name_and_description() {
        let html = view! { <TestCard test=TESTS[3] /> }.to_html();
        assert!(html.contains("Corsi Blocks"));
        assert!(html.contains("memória de curto prazo visuoespacial"));
    }

    #[test]
    fn testimonial_card_links_avatar() {
        let t = TESTIMONIALS[0];
        let html = view! { <TestimonialCard testimonial=t /> }.to_html();
        assert!(html.contains(t.avatar_url));
        assert!(html.contains(r#"alt="Ana Paula Souza""#));
        assert!(html.contains("Clínica Integrar"));
    }

    #[test]
    fn bullet_uses_given_class() {
        let html = view! { <FeatureBullet text="Suporte" class="pricing-feature" /> }.to_html();
        assert!(html.contains(r#"<li class="pricing-feature">"#));
    }
}
