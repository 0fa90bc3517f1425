use leptos::prelude::*;

use crate::components::{
    Container, Icon, Section, StepItem, ICON_CLOCK, ICON_FILE_TEXT, ICON_POINTER_CLICK,
    ICON_SMARTPHONE,
};
use crate::content::{ONLINE_VALUE, WORKFLOW_STEPS};
use crate::nav::SectionId;

/// Remote application flow. Carries the "Solução" anchor.
#[component]
pub fn RemoteWorkflow() -> impl IntoView {
    let value_icons = [ICON_POINTER_CLICK, ICON_CLOCK, ICON_FILE_TEXT];

    view! {
        <Section id=SectionId::Solution.as_str() class="section-brand">
            <Container>
                <div class="remote">
                    <div class="remote-copy">
                        <h2 class="split-title">"Aplicação Remota via WhatsApp"</h2>
                        <p class="lead lead-inverse">
                            "O consultório se estende para além do espaço físico. O WhatsApp é apenas o meio de envio; "
                            "a execução ocorre em um ambiente seguro e controlado."
                        </p>
                        <div class="steps">
                            {WORKFLOW_STEPS
                                .into_iter()
                                .enumerate()
                                .map(|(idx, step)| view! { <StepItem number={idx + 1} step=step /> })
                                .collect::<Vec<_>>()}
                        </div>
                    </div>

                    <div class="remote-card">
                        <div class="remote-card-header">
                            <Icon path=ICON_SMARTPHONE class="icon icon-lg icon-green" />
                            <h3>"Valor para o Online"</h3>
                        </div>
                        <ul class="value-list">
                            {ONLINE_VALUE
                                .into_iter()
                                .zip(value_icons)
                                .map(|(text, icon)| {
                                    view! {
                                        <li class="value-item">
                                            <Icon path=icon class="icon icon-blue" />
                                            <span>{text}</span>
                                        </li>
                                    }
                                })
                                .collect::<Vec<_>>()}
                        </ul>
                    </div>
                </div>
            </Container>
        </Section>
    }
}
