use leptos::prelude::*;

use crate::components::{Container, PillarCard, Section, SectionHeading};
use crate::content::ANAMNESIS_PILLARS;

#[component]
pub fn Anamnesis() -> impl IntoView {
    view! {
        <Section class="section-bordered">
            <Container>
                <SectionHeading
                    title="Anamnese Estruturada que Precede o Rastreio"
                    subtitle="Antes de qualquer teste cognitivo, o NeuroRastreio organiza o contexto clínico com uma anamnese objetiva, padronizada e funcional."
                />
                <div class="grid grid-3">
                    {ANAMNESIS_PILLARS
                        .into_iter()
                        .map(|pillar| view! { <PillarCard pillar=pillar /> })
                        .collect::<Vec<_>>()}
                </div>
                <p class="fine-print">
                    "A anamnese não substitui avaliação clínica aprofundada. "
                    "Ela organiza o ponto de partida técnico para o rastreio funcional."
                </p>
            </Container>
        </Section>
    }
}
