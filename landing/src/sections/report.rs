use leptos::prelude::*;

use crate::components::{
    Badge, Container, Icon, Section, ICON_ACTIVITY, ICON_BAR_CHART, ICON_CHECK_CIRCLE,
    ICON_FILE_TEXT,
};
use crate::content::REPORT_KINDS;

/// Two-report pitch next to a static report mockup
#[component]
pub fn ReportPreview() -> impl IntoView {
    let kind_icons = [ICON_FILE_TEXT, ICON_CHECK_CIRCLE];

    view! {
        <Section>
            <Container>
                <div class="split">
                    <div class="report-mockup-wrap">
                        <ReportMockup />
                    </div>
                    <div class="report-copy">
                        <Badge>"Automação Inteligente"</Badge>
                        <h2 class="split-title">
                            "Dois relatórios. Um para o profissional. Outro para os pais."
                        </h2>
                        <p class="lead">
                            "A partir de uma única aplicação, o NeuroRastreio gera automaticamente duas versões de relatório, "
                            "cada uma no nível correto de leitura."
                        </p>
                        <div class="stack">
                            {REPORT_KINDS
                                .into_iter()
                                .zip(kind_icons)
                                .map(|(kind, icon)| {
                                    view! {
                                        <div class="report-kind">
                                            <Icon path=icon class="icon icon-blue" />
                                            <span>
                                                <strong>{kind.title}</strong>
                                                " "
                                                {kind.text}
                                            </span>
                                        </div>
                                    }
                                })
                                .collect::<Vec<_>>()}
                        </div>
                        <p class="report-closing">
                            "O profissional mantém a profundidade técnica. Os pais recebem clareza."
                        </p>
                    </div>
                </div>
            </Container>
        </Section>
    }
}

#[component]
fn ReportMockup() -> impl IntoView {
    view! {
        <div class="mockup" aria-hidden="true">
            <div class="mockup-bar mockup-heading"></div>
            <div class="mockup-lines">
                <div class="mockup-bar"></div>
                <div class="mockup-bar"></div>
            </div>
            <div class="mockup-charts">
                <div class="mockup-chart mockup-chart-blue">
                    <Icon path=ICON_BAR_CHART class="icon icon-xl" />
                </div>
                <div class="mockup-chart mockup-chart-teal">
                    <Icon path=ICON_ACTIVITY class="icon icon-xl" />
                </div>
            </div>
            <div class="mockup-lines">
                <div class="mockup-bar"></div>
                <div class="mockup-bar mockup-bar-3-4"></div>
                <div class="mockup-bar mockup-bar-5-6"></div>
            </div>
            <div class="mockup-result">"Indicadores Funcionais Preservados"</div>
            <div class="mockup-check">
                <Icon path=ICON_CHECK_CIRCLE class="icon icon-lg icon-green" />
            </div>
        </div>
    }
}
