use leptos::prelude::*;

use crate::components::{Container, Icon, ICON_BRAIN, ICON_SHIELD_CHECK};
use crate::content::{BRAND_ACCENT, BRAND_PRIMARY, FOOTER_PRODUCT_FACTS};

#[component]
pub fn Footer() -> impl IntoView {
    let brand = format!("{}{}", BRAND_PRIMARY, BRAND_ACCENT);

    view! {
        <footer class="footer">
            <Container>
                <div class="footer-grid">
                    <div>
                        <div class="footer-brand">
                            <Icon path=ICON_BRAIN class="icon icon-muted" />
                            <span class="footer-title">{brand}</span>
                        </div>
                        <p class="footer-text">"Ciência cognitiva. Precisão operacional. Prática clínica."</p>
                    </div>

                    <div>
                        <h4 class="footer-heading">"Produto"</h4>
                        <ul class="footer-list">
                            {FOOTER_PRODUCT_FACTS
                                .into_iter()
                                .map(|fact| view! { <li>{fact}</li> })
                                .collect::<Vec<_>>()}
                        </ul>
                    </div>

                    <div class="footer-wide">
                        <h4 class="footer-heading">"Segurança e Ética"</h4>
                        <div class="footer-ethics">
                            <Icon path=ICON_SHIELD_CHECK class="icon" />
                            <p>
                                "Ferramenta de rastreio cognitivo funcional para apoio à decisão profissional. "
                                "Não substitui avaliação clínica completa. Não realiza diagnóstico automático."
                            </p>
                        </div>
                    </div>
                </div>

                <div class="footer-bottom">
                    <p>"© NeuroRastreio — Todos os direitos reservados."</p>
                    <p>"Desenvolvido com rigor científico."</p>
                </div>
            </Container>
        </footer>
    }
}
