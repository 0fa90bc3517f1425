use leptos::prelude::*;

use crate::components::{Container, Section, SectionHeading, UseCaseCard};
use crate::content::ROUTINE_USES;

#[component]
pub fn RoutineUse() -> impl IntoView {
    view! {
        <Section class="section-muted">
            <Container>
                <SectionHeading
                    title="Uso na Rotina Clínica"
                    subtitle="Versátil para diferentes momentos do acompanhamento."
                />
                <div class="grid grid-4">
                    {ROUTINE_USES
                        .into_iter()
                        .map(|use_case| view! { <UseCaseCard use_case=use_case /> })
                        .collect::<Vec<_>>()}
                </div>
            </Container>
        </Section>
    }
}
