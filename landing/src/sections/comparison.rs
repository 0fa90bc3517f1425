use leptos::prelude::*;

use crate::components::{ComparisonCard, Container, Section, SectionHeading};
use crate::content::COMPARISONS;
use crate::nav::SectionId;

/// Which formal instruments each screened function precedes.
///
/// Carries the "Ciência" anchor.
#[component]
pub fn Comparison() -> impl IntoView {
    view! {
        <Section id=SectionId::Science.as_str() class="section-muted section-bordered">
            <Container>
                <SectionHeading
                    title="Rastreio Funcional que Antecede a Avaliação Clínica"
                    subtitle="O NeuroRastreio não substitui testes clínicos. Ele antecede, orienta e complementa."
                />
                <div class="grid grid-3 comparison-grid">
                    {COMPARISONS
                        .into_iter()
                        .map(|comparison| view! { <ComparisonCard comparison=comparison /> })
                        .collect::<Vec<_>>()}
                </div>
                <p class="disclaimer">
                    "\u{201c}O NeuroRastreio não substitui avaliações clínicas formais. "
                    "Atua como rastreio funcional inicial para orientar decisões clínicas.\u{201d}"
                </p>
            </Container>
        </Section>
    }
}
