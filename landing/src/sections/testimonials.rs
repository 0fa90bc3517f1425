use leptos::prelude::*;

use crate::components::{Container, Section, SectionHeading, TestimonialCard};
use crate::content::TESTIMONIALS;

#[component]
pub fn Testimonials() -> impl IntoView {
    view! {
        <Section>
            <Container>
                <SectionHeading
                    title="Quem usa, recomenda"
                    subtitle="Profissionais que elevaram o padrão técnico de suas clínicas com o NeuroRastreio."
                />
                <div class="grid grid-3">
                    {TESTIMONIALS
                        .into_iter()
                        .map(|testimonial| view! { <TestimonialCard testimonial=testimonial /> })
                        .collect::<Vec<_>>()}
                </div>
            </Container>
        </Section>
    }
}
