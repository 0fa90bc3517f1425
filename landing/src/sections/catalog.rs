use leptos::prelude::*;

use crate::components::{Container, Icon, Section, SectionHeading, TestCard, ICON_ZAP};
use crate::content::TESTS;
use crate::nav::SectionId;

/// The six cognitive paradigms
#[component]
pub fn TestCatalog() -> impl IntoView {
    view! {
        <Section id=SectionId::Tests.as_str()>
            <Container>
                <SectionHeading
                    title="Padrão-Ouro Operacional"
                    subtitle="Utilizamos exclusivamente paradigmas cognitivos clássicos, amplamente consolidados na literatura científica internacional."
                />
                <div class="grid grid-3 test-grid">
                    {TESTS.into_iter().map(|test| view! { <TestCard test=test /> }).collect::<Vec<_>>()}
                </div>
                <div class="callout-wrap">
                    <div class="callout">
                        <Icon path=ICON_ZAP class="icon icon-zap" />
                        <div>
                            <h4 class="callout-title">"Precisão Digital de Milissegundos"</h4>
                            <p class="callout-text">"Tempo de reação real, sem erro humano de cronometragem."</p>
                        </div>
                    </div>
                </div>
            </Container>
        </Section>
    }
}
