use leptos::prelude::*;

use crate::components::{Button, ButtonVariant, Container, Section};
use crate::nav::SectionId;

/// Closing call-to-action. Target of every "Solicitar Demo" button.
#[component]
pub fn CallToAction() -> impl IntoView {
    view! {
        <Section id=SectionId::Contact.as_str() class="section-bordered">
            <Container>
                <div class="cta">
                    <div class="cta-orb cta-orb-light"></div>
                    <div class="cta-orb cta-orb-teal"></div>
                    <h2 class="cta-title">"Decisão clínica começa com dados objetivos."</h2>
                    <p class="cta-text">
                        "Rastreio neurocognitivo funcional para orientar a próxima sessão com base técnica real."
                    </p>
                    <div class="cta-actions">
                        <Button variant=ButtonVariant::Secondary class="btn-teal btn-lg">
                            "Veja a plataforma por dentro"
                        </Button>
                    </div>
                </div>
            </Container>
        </Section>
    }
}
