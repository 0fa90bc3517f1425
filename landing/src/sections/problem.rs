use leptos::prelude::*;

use crate::components::{Container, FeatureBullet, IconPoint, Section, ICON_ACTIVITY, ICON_CLOCK};
use crate::content::{PAIN_POINTS, SOLUTION_BENEFITS};

/// Clinical context on the left, the product answer on the right
#[component]
pub fn ProblemSolution() -> impl IntoView {
    let icons = [ICON_CLOCK, ICON_ACTIVITY];

    view! {
        <Section class="section-muted">
            <Container>
                <div class="split">
                    <div>
                        <h2 class="split-title">"O Contexto Clínico"</h2>
                        <p class="lead">
                            "Na prática psicopedagógica, o maior risco não é errar o diagnóstico. É "
                            <strong>"demorar para identificar o problema funcional"</strong>
                            " e conduzir intervenções sem dados objetivos."
                        </p>
                        <div class="stack">
                            {PAIN_POINTS
                                .into_iter()
                                .zip(icons)
                                .map(|(point, icon)| view! { <IconPoint icon=icon point=point /> })
                                .collect::<Vec<_>>()}
                        </div>
                    </div>
                    <div class="panel">
                        <h3 class="panel-title">"A Solução NeuroRastreio"</h3>
                        <p class="panel-text">
                            "Transforme percepção clínica em dado funcional objetivo em menos de 15 minutos."
                        </p>
                        <ul class="check-list">
                            {SOLUTION_BENEFITS
                                .into_iter()
                                .map(|benefit| view! { <FeatureBullet text=benefit /> })
                                .collect::<Vec<_>>()}
                        </ul>
                        <p class="panel-footnote">
                            "\u{201c}Não é diagnóstico. É base técnica para decisão clínica qualificada.\u{201d}"
                        </p>
                    </div>
                </div>
            </Container>
        </Section>
    }
}
