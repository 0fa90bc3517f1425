use leptos::prelude::*;

use crate::components::{Badge, Button, ButtonVariant, Container, Icon, ICON_MICROSCOPE};
use crate::nav::{PageNav, SectionId};

#[component]
pub fn Hero(nav: PageNav) -> impl IntoView {
    let request_demo = Callback::new(move |()| {
        nav.scroll_to(SectionId::Contact);
    });
    let browse_tests = Callback::new(move |()| {
        nav.scroll_to(SectionId::Tests);
    });

    view! {
        <section class="hero">
            <div class="hero-glow hero-glow-blue"></div>
            <div class="hero-glow hero-glow-teal"></div>
            <Container class="hero-inner">
                <Badge>"Para Clínicas e Psicopedagogos"</Badge>
                <h1 class="hero-title">
                    "Leve a precisão de laboratório para dentro da sua "
                    <span class="hero-title-accent">"clínica"</span>
                    "."
                </h1>
                <p class="hero-description">
                    "Rastreio neurocognitivo funcional para crianças de 6 a 14 anos, com dados objetivos. "
                    "Identifique riscos, monitore a evolução e fundamente decisões clínicas em evidências, "
                    "não apenas na observação."
                </p>
                <div class="hero-actions">
                    <Button on_click=request_demo class="btn-lg btn-shadow">
                        "Solicitar Demonstração"
                    </Button>
                    <Button on_click=browse_tests variant=ButtonVariant::Outline class="btn-lg">
                        "Conhecer os Testes"
                    </Button>
                </div>
                <p class="hero-note">
                    <Icon path=ICON_MICROSCOPE class="icon icon-sm" />
                    "Baseado em paradigmas cognitivos clássicos amplamente consolidados na literatura científica internacional."
                </p>
            </Container>
        </section>
    }
}
