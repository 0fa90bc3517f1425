//! Page copy as immutable tables.
//!
//! Nothing here is created or mutated at runtime; sections iterate these
//! tables to render their cards.

use crate::nav::SectionId;

/// Product name as rendered in brand marks
pub const BRAND_PRIMARY: &str = "NEURO";
pub const BRAND_ACCENT: &str = "RASTREIO";

/// Navigation entry pointing at a page section
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub target: SectionId,
}

/// One cognitive paradigm in the test catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TestDescriptor {
    pub name: &'static str,
    pub description: &'static str,
}

/// Screened function and the formal instruments it precedes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComparisonDescriptor {
    pub title: &'static str,
    pub description: &'static str,
    pub antecedes: &'static str,
}

/// Title + short text pair used by several grids
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Highlight {
    pub title: &'static str,
    pub text: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Testimonial {
    pub name: &'static str,
    pub role: &'static str,
    pub clinic: &'static str,
    pub avatar_url: &'static str,
    pub quote: &'static str,
}

/// Price shown on the pricing panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Price {
    pub amount: &'static str,
    pub period: &'static str,
}

impl Price {
    /// Full label, e.g. `R$ 97 / ano`
    pub fn label(&self) -> String {
        format!("{} {}", self.amount, self.period)
    }
}

pub const NAV_ITEMS: [NavItem; 3] = [
    NavItem { label: "Solução", target: SectionId::Solution },
    NavItem { label: "Testes", target: SectionId::Tests },
    NavItem { label: "Ciência", target: SectionId::Science },
];

pub const DEMO_CTA_LABEL: &str = "Solicitar Demo";

pub const TESTS: [TestDescriptor; 6] = [
    TestDescriptor {
        name: "Stroop (Infantil)",
        description: "Avalia atenção inibitória e a capacidade de resistência à interferência cognitiva.",
    },
    TestDescriptor {
        name: "Flanker Task",
        description: "Mede a atenção seletiva e o processamento eficiente de estímulos conflitantes.",
    },
    TestDescriptor {
        name: "Go / No-Go",
        description: "Fundamental para avaliação do controle inibitório motor e sinais de impulsividade.",
    },
    TestDescriptor {
        name: "Corsi Blocks",
        description: "Clássico para avaliação da memória de curto prazo visuoespacial.",
    },
    TestDescriptor {
        name: "N-Back",
        description: "Standard para memória operacional e capacidade de atualização de informação.",
    },
    TestDescriptor {
        name: "Reaction Time",
        description: "Mensuração precisa da velocidade de processamento e vigilância atencional.",
    },
];

pub const COMPARISONS: [ComparisonDescriptor; 6] = [
    ComparisonDescriptor {
        title: "Atenção Inibitória",
        description: "Avalia a capacidade de filtrar distrações e manter o foco no objetivo.",
        antecedes: "WISC, BPA-2, Conners",
    },
    ComparisonDescriptor {
        title: "Atenção Seletiva",
        description: "Identifica a capacidade de selecionar estímulos relevantes em meio a distratores.",
        antecedes: "WISC, BPA-2, Conners",
    },
    ComparisonDescriptor {
        title: "Controle Inibitório",
        description: "Mede a capacidade de frear impulsos e respostas automáticas.",
        antecedes: "WISC, Conners, SNAP-IV",
    },
    ComparisonDescriptor {
        title: "Memória Visuoespacial",
        description: "Analisa a retenção e manipulação de informações visuais e espaciais.",
        antecedes: "WISC, RAVLT",
    },
    ComparisonDescriptor {
        title: "Memória Operacional",
        description: "Avalia o gerenciamento ativo e a atualização de informações na mente.",
        antecedes: "WISC, WAIS, RAVLT",
    },
    ComparisonDescriptor {
        title: "Velocidade de Processamento",
        description: "Mensura a rapidez na identificação e reação eficiente a estímulos.",
        antecedes: "WISC, WAIS, BPA-2",
    },
];

// Problem / solution

pub const PAIN_POINTS: [Highlight; 2] = [
    Highlight {
        title: "Perda de tempo precioso",
        text: "Intervenções iniciadas sem clareza do foco funcional.",
    },
    Highlight {
        title: "Falta de baseline objetivo",
        text: "Dificuldade em demonstrar evolução técnica para a família.",
    },
];

pub const SOLUTION_BENEFITS: [&str; 4] = [
    "Identifique sinais precoces de risco funcional",
    "Organize hipóteses clínicas com base em dados objetivos",
    "Estabeleça baseline funcional cognitivo",
    "Acompanhe a evolução ao longo do acompanhamento clínico",
];

// Remote workflow

pub const WORKFLOW_STEPS: [Highlight; 3] = [
    Highlight {
        title: "Profissional gera o link",
        text: "Criação de link único e seguro no sistema.",
    },
    Highlight {
        title: "Envio aos pais",
        text: "Família recebe via WhatsApp para aplicação em casa.",
    },
    Highlight {
        title: "Execução & Relatório",
        text: "Dados retornam automaticamente processados.",
    },
];

pub const ONLINE_VALUE: [&str; 3] = [
    "Triagem pré-sessão",
    "Redução de tempo presencial",
    "Relatório pronto antes da devolutiva",
];

// Report preview

pub const REPORT_KINDS: [Highlight; 2] = [
    Highlight {
        title: "Relatório Clínico:",
        text: "visão técnica completa, com indicadores funcionais e apoio à decisão profissional",
    },
    Highlight {
        title: "Relatório para Pais:",
        text: "versão simplificada, clara e sem termos técnicos desnecessários",
    },
];

pub const ROUTINE_USES: [Highlight; 4] = [
    Highlight { title: "Primeira Consulta", text: "Baseline funcional imediato" },
    Highlight { title: "Início da Intervenção", text: "Direcionamento técnico preciso" },
    Highlight { title: "Reavaliações", text: "Monitoramento evolutivo" },
    Highlight { title: "Atendimento Online", text: "Aplicação remota integrada" },
];

pub const ANAMNESIS_PILLARS: [Highlight; 3] = [
    Highlight {
        title: "Anamnese Funcional Estruturada",
        text: "Coleta sistematizada de informações clínicas, comportamentais e contextuais, organizada para orientar o rastreio cognitivo e evitar aplicações desnecessárias ou mal direcionadas.",
    },
    Highlight {
        title: "Base Técnica Antes dos Testes",
        text: "A anamnese antecede o rastreio, ajudando o profissional a definir foco, interpretar resultados com mais precisão e reduzir ruído clínico desde o início do acompanhamento.",
    },
    Highlight {
        title: "Anamnese → Rastreio → Relatórios",
        text: "O profissional inicia pelo contexto clínico, aplica os testes cognitivos funcionais e recebe relatórios coerentes com a história do paciente, fortalecendo a tomada de decisão.",
    },
];

// Pricing

pub const PRICE: Price = Price { amount: "R$ 97", period: "/ ano" };

pub const PRICING_FEATURES: [&str; 8] = [
    "Aprendentes ilimitados",
    "6 testes cognitivos funcionais",
    "Rastreio neurocognitivo para crianças de 6 a 14 anos",
    "Relatório técnico para o profissional",
    "Relatório simplificado para os pais",
    "Aplicação remota via link seguro",
    "Precisão temporal em milissegundos",
    "Licença vinculada a 1 dispositivo ativo",
];

pub const TESTIMONIALS: [Testimonial; 3] = [
    Testimonial {
        name: "Ana Paula Souza",
        role: "Psicopedagoga Clínica",
        clinic: "Clínica Integrar",
        avatar_url: "https://i.pravatar.cc/150?u=a042581f4e29026024d",
        quote: "O NeuroRastreio mudou a forma como apresento os resultados para os pais. Os dados objetivos tornam a evolução da criança tangível e indiscutível.",
    },
    Testimonial {
        name: "Dr. Marcos Oliveira",
        role: "Neuropsicólogo",
        clinic: "Instituto Cognitivo",
        avatar_url: "https://i.pravatar.cc/150?u=a042581f4e29026704d",
        quote: "A precisão dos milissegundos nos testes de reação é algo que eu não conseguia com testes manuais. Trouxe uma segurança técnica fundamental para minha prática.",
    },
    Testimonial {
        name: "Fernanda Lima",
        role: "Fonoaudióloga",
        clinic: "Espaço Aprender",
        avatar_url: "https://i.pravatar.cc/150?u=a04258114e29026302d",
        quote: "A possibilidade de enviar o link para casa agilizou muito nossa triagem inicial. Chego na primeira sessão já com dados estruturados para discutir.",
    },
];

pub const FOOTER_PRODUCT_FACTS: [&str; 3] = [
    "Status: Pronto para execução",
    "Público: Crianças de 6 a 14 anos",
    "Suporte Remoto",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nav_targets_are_distinct() {
        let ids: Vec<_> = NAV_ITEMS.iter().map(|item| item.target.as_str()).collect();
        assert_eq!(ids, ["solucao", "testes", "ciencia"]);
    }

    #[test]
    fn price_label_joins_amount_and_period() {
        assert_eq!(PRICE.label(), "R$ 97 / ano");
    }

    #[test]
    fn pricing_mentions_catalog_size() {
        let catalog = format!("{} testes cognitivos funcionais", TESTS.len());
        assert!(PRICING_FEATURES.contains(&catalog.as_str()));
    }
}
