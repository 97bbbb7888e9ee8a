// Default copy for the page, in the firm's own words. Everything here can be
// overridden through the landing page props.

use crate::components::icons::IconKind;

#[derive(Clone, Debug, PartialEq)]
pub struct Benefit {
    pub text: String,
    pub icon: IconKind,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Service {
    pub icon: IconKind,
    pub title: String,
    pub description: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Stat {
    pub icon: IconKind,
    pub value: String,
    pub label: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct FaqEntry {
    pub question: String,
    pub answer: String,
}

pub fn default_hero_title() -> String {
    "Escritório de advocacia para Assessoria e Consultoria Jurídica Empresarial".into()
}

pub fn default_hero_subtitle() -> String {
    "Advogados Especialistas em Direito Empresarial com atuação em Belo Horizonte e nos \
     principais centros de todo o Brasil. Defenda sua empresa, evite riscos e tome decisões \
     com respaldo jurídico."
        .into()
}

pub fn default_cta_text() -> String {
    "Falar com um advogado agora".into()
}

pub fn default_about_title() -> String {
    "Quem somos".into()
}

pub fn default_about_description() -> String {
    "O Borges & Musa é um escritório especializado em Direito Empresarial, com foco em \
     empresas que buscam segurança jurídica nas áreas trabalhista e tributária. Nossa equipe \
     atua de forma consultiva e contenciosa, sempre com agilidade, ética e visão estratégica. \
     Temos especial atenção às micro e pequenas empresas, que estão entre as mais impactadas \
     pelas mudanças tributárias em curso no Brasil."
        .into()
}

pub fn default_benefits() -> Vec<Benefit> {
    vec![
        Benefit {
            text: "Defesa trabalhista empresarial".into(),
            icon: IconKind::Scale,
        },
        Benefit {
            text: "Planejamento tributário e defesa fiscal".into(),
            icon: IconKind::Calculator,
        },
        Benefit {
            text: "Consultoria jurídica preventiva".into(),
            icon: IconKind::Shield,
        },
        Benefit {
            text: "Atuação estratégica e personalizada para sua empresa".into(),
            icon: IconKind::Target,
        },
        Benefit {
            text: "Apoio jurídico especializado para micro e pequenas empresas".into(),
            icon: IconKind::Heart,
        },
    ]
}

pub fn default_services() -> Vec<Service> {
    vec![
        Service {
            icon: IconKind::Scale,
            title: "Defesa Trabalhista Empresarial".into(),
            description: "Análise e prevenção de passivos trabalhistas, assessoria em \
                          contratações, demissões e gestão de riscos, implementação de \
                          políticas internas e compliance trabalhista"
                .into(),
        },
        Service {
            icon: IconKind::Calculator,
            title: "Tributário Empresarial".into(),
            description: "Planejamento tributário de acordo com a nova legislação, \
                          reestruturação fiscal e recuperação de créditos, suporte \
                          estratégico para micro e pequenas empresas"
                .into(),
        },
        Service {
            icon: IconKind::Building,
            title: "Societário e Governança".into(),
            description: "Regularização societária, entrada e saída de sócios, mediação de \
                          conflitos e estruturação jurídica da empresa, acompanhamento para \
                          fusões, aquisições e vendas"
                .into(),
        },
        Service {
            icon: IconKind::FileText,
            title: "Consultoria Jurídica Contínua".into(),
            description: "Aconselhamento jurídico recorrente, suporte para decisões \
                          operacionais e estratégicas, atendimento presencial em BH e remoto \
                          para todo o Brasil"
                .into(),
        },
    ]
}

pub fn default_stats() -> Vec<Stat> {
    vec![
        Stat {
            icon: IconKind::Award,
            value: "300+".into(),
            label: "Empresas Atendidas".into(),
        },
        Stat {
            icon: IconKind::Users,
            value: "15+".into(),
            label: "Anos de Experiência".into(),
        },
        Stat {
            icon: IconKind::TrendingUp,
            value: "98%".into(),
            label: "Taxa de Sucesso".into(),
        },
        Stat {
            icon: IconKind::Calendar,
            value: "24h".into(),
            label: "Tempo de Resposta".into(),
        },
    ]
}

pub fn default_faq_items() -> Vec<FaqEntry> {
    vec![
        FaqEntry {
            question: "Vocês atendem empresas de fora de Belo Horizonte?".into(),
            answer: "Sim. Nosso atendimento é voltado a empresas de qualquer região do Brasil."
                .into(),
        },
        FaqEntry {
            question: "É possível contratar apenas a consultoria jurídica preventiva?".into(),
            answer: "Sim. Atuamos tanto com defesas judiciais quanto com acompanhamento \
                     estratégico recorrente."
                .into(),
        },
        FaqEntry {
            question: "O escritório atende empresas de todos os portes?".into(),
            answer: "Sim. Temos experiência com negócios de diferentes tamanhos, com foco \
                     especial nas micro, pequenas e médias empresas."
                .into(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_hero_copy() {
        assert_eq!(
            default_hero_title(),
            "Escritório de advocacia para Assessoria e Consultoria Jurídica Empresarial"
        );
        assert_eq!(default_cta_text(), "Falar com um advogado agora");
        assert!(default_hero_subtitle().starts_with("Advogados Especialistas"));
    }

    #[test]
    fn test_default_about_copy() {
        assert_eq!(default_about_title(), "Quem somos");
        assert!(default_about_description().starts_with("O Borges & Musa"));
        assert!(default_about_description().ends_with("em curso no Brasil."));
    }

    #[test]
    fn test_default_benefits_order() {
        let benefits = default_benefits();
        assert_eq!(benefits.len(), 5);
        assert_eq!(benefits[0].text, "Defesa trabalhista empresarial");
        assert_eq!(benefits[0].icon, IconKind::Scale);
        assert_eq!(benefits[4].icon, IconKind::Heart);
    }

    #[test]
    fn test_default_services_order() {
        let services = default_services();
        assert_eq!(services.len(), 4);
        assert_eq!(services[0].title, "Defesa Trabalhista Empresarial");
        assert_eq!(services[1].title, "Tributário Empresarial");
        assert_eq!(services[2].title, "Societário e Governança");
        assert_eq!(services[3].title, "Consultoria Jurídica Contínua");
        assert_eq!(services[2].icon, IconKind::Building);
    }

    #[test]
    fn test_default_stats() {
        let stats = default_stats();
        assert_eq!(stats.len(), 4);
        let values: Vec<_> = stats.iter().map(|s| s.value.as_str()).collect();
        assert_eq!(values, ["300+", "15+", "98%", "24h"]);
        assert_eq!(stats[3].label, "Tempo de Resposta");
    }

    #[test]
    fn test_default_faq_items() {
        let items = default_faq_items();
        assert_eq!(items.len(), 3);
        assert!(items.iter().all(|item| item.answer.starts_with("Sim.")));
        assert_eq!(
            items[0].question,
            "Vocês atendem empresas de fora de Belo Horizonte?"
        );
    }
}
