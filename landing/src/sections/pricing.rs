use leptos::prelude::*;

use crate::components::{Button, Container, FeatureBullet, Section, SectionHeading};
use crate::content::{PRICE, PRICING_FEATURES};

/// Single professional plan
#[component]
pub fn Pricing() -> impl IntoView {
    view! {
        <Section>
            <Container>
                <SectionHeading
                    title="Plano profissional — versão atual"
                    subtitle="Acesso completo aos 6 testes cognitivos funcionais atualmente disponíveis no NeuroRastreio."
                />
                <div class="pricing-wrap">
                    <div class="pricing-card">
                        <h3 class="pricing-plan">"Plano Profissional — uso clínico individual"</h3>
                        <p class="pricing-tagline">"Aprendentes ilimitados • aplicação clínica contínua"</p>

                        <div class="price" aria-label=PRICE.label()>
                            <span class="price-amount">{PRICE.amount}</span>
                            <span class="price-period">{PRICE.period}</span>
                        </div>

                        <ul class="pricing-features">
                            {PRICING_FEATURES
                                .into_iter()
                                .map(|feature| view! { <FeatureBullet text=feature class="pricing-feature" /> })
                                .collect::<Vec<_>>()}
                        </ul>

                        <Button class="btn-block btn-lg">"Adquirir assinatura por dispositivo"</Button>

                        <p class="pricing-note">
                            "Aprendentes ilimitados por assinatura. Cada assinatura corresponde a 1 dispositivo ativo."
                        </p>
                    </div>
                </div>
                <p class="fine-print">
                    "Licença individual vinculada a dispositivo para garantir uso ético, estabilidade técnica e qualidade dos dados."
                </p>
            </Container>
        </Section>
    }
}
