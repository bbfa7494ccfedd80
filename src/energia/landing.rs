//! # Landing Page
//!
//! Static content of the EnergiaTech marketing page and the scroll visibility tracker.
//!
//! The page is a fixed sequence of [`Section`]s. Four of them carry an anchor
//! (`home`, `services`, `about`, `contact`) that the navigation links point to; only
//! anchored sections are observed for visibility.
//!
//! [`Visibility`] receives intersection events, one `(anchor, ratio)` pair at a time. A
//! section is marked visible the first time its visible ratio reaches
//! [`VISIBILITY_THRESHOLD`] and is never unmarked. Flags are independent, so the order
//! events arrive in does not matter.

use crate::error::{EnergiaError, Result};
use log::debug;
use serde::Serialize;
use std::collections::BTreeSet;
use std::str::FromStr;

pub const VISIBILITY_THRESHOLD: f64 = 0.1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Section {
    Home,
    Stats,
    Services,
    Benefits,
    About,
    Contact,
    Footer,
}

impl Section {
    pub fn all() -> &'static [Section] {
        &[
            Section::Home,
            Section::Stats,
            Section::Services,
            Section::Benefits,
            Section::About,
            Section::Contact,
            Section::Footer,
        ]
    }

    /// Anchor id, for the sections the navigation can jump to.
    pub fn anchor(&self) -> Option<&'static str> {
        match self {
            Section::Home => Some("home"),
            Section::Services => Some("services"),
            Section::About => Some("about"),
            Section::Contact => Some("contact"),
            Section::Stats | Section::Benefits | Section::Footer => None,
        }
    }
}

impl FromStr for Section {
    type Err = EnergiaError;

    fn from_str(s: &str) -> Result<Self> {
        let anchor = s.trim().trim_start_matches('#').to_lowercase();
        Section::all()
            .iter()
            .copied()
            .find(|section| section.anchor() == Some(anchor.as_str()))
            .ok_or_else(|| {
                EnergiaError::InvalidInput(format!(
                    "Unknown section '{}' (expected home, services, about or contact)",
                    s
                ))
            })
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct NavLink {
    pub anchor: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct Hero {
    pub headline: &'static str,
    pub highlight: &'static str,
    pub tagline: &'static str,
    pub pitch: &'static str,
    pub primary_action: &'static str,
    pub secondary_action: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct Feature {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct Heading {
    pub lead: &'static str,
    pub highlight: &'static str,
    pub intro: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct Contact {
    pub heading: Heading,
    pub channels: Vec<Feature>,
    pub form_fields: Vec<&'static str>,
    pub submit: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct Footer {
    pub copyright: &'static str,
    pub links: Vec<&'static str>,
}

#[derive(Debug, Clone, Serialize)]
pub struct LandingPage {
    pub brand: &'static str,
    pub nav: Vec<NavLink>,
    pub hero: Hero,
    pub stats: Vec<Stat>,
    pub services_heading: Heading,
    pub services: Vec<Feature>,
    pub benefits_heading: Heading,
    pub benefits: Vec<&'static str>,
    pub highlights: Vec<Stat>,
    pub about_heading: Heading,
    pub pillars: Vec<Feature>,
    pub contact: Contact,
    pub footer: Footer,
}

impl LandingPage {
    pub fn energiatech() -> Self {
        Self {
            brand: "EnergiaTech",
            nav: vec![
                NavLink { anchor: "home", label: "Início" },
                NavLink { anchor: "services", label: "Serviços" },
                NavLink { anchor: "about", label: "Sobre" },
                NavLink { anchor: "contact", label: "Contato" },
            ],
            hero: Hero {
                headline: "O Futuro da",
                highlight: "Energia",
                tagline: "Está Aqui",
                pitch: "Transformamos a luz do sol em economia real para sua casa ou empresa. \
                        Tecnologia avançada, instalação profissional e suporte completo.",
                primary_action: "Solicite seu Orçamento",
                secondary_action: "Saiba Mais",
            },
            stats: vec![
                Stat { value: "500+", label: "Projetos Concluídos" },
                Stat { value: "50MW", label: "Capacidade Instalada" },
                Stat { value: "15+", label: "Anos de Experiência" },
                Stat { value: "98%", label: "Satisfação dos Clientes" },
            ],
            services_heading: Heading {
                lead: "Nossos",
                highlight: "Serviços",
                intro: "Soluções completas em energia renovável com tecnologia de ponta e suporte especializado",
            },
            services: vec![
                Feature {
                    icon: "☀",
                    title: "Energia Solar",
                    description: "Soluções fotovoltaicas completas para residências e empresas com tecnologia de ponta.",
                },
                Feature {
                    icon: "≋",
                    title: "Energia Eólica",
                    description: "Aproveitamento da força dos ventos para geração de energia limpa e sustentável.",
                },
                Feature {
                    icon: "▮",
                    title: "Armazenamento",
                    description: "Sistemas de baterias inteligentes para otimizar o uso e armazenamento de energia.",
                },
            ],
            benefits_heading: Heading {
                lead: "Por que escolher a",
                highlight: "EnergiaTech?",
                intro: "Mais de 15 anos de experiência no mercado de energia renovável, \
                        oferecendo soluções personalizadas e de alta qualidade.",
            },
            benefits: vec![
                "Redução de até 95% na conta de energia",
                "Tecnologia de última geração",
                "Suporte técnico especializado 24/7",
                "Garantia estendida de equipamentos",
                "Financiamento facilitado",
                "Instalação rápida e segura",
            ],
            highlights: vec![
                Stat { value: "500+", label: "Clientes Satisfeitos" },
                Stat { value: "15+", label: "Prêmios Recebidos" },
                Stat { value: "95%", label: "Economia Média" },
                Stat { value: "50MW", label: "Energia Limpa" },
            ],
            about_heading: Heading {
                lead: "Sobre a",
                highlight: "EnergiaTech",
                intro: "Somos pioneiros no desenvolvimento de soluções em energia renovável no Brasil. \
                        Nossa missão é democratizar o acesso à energia limpa, oferecendo tecnologia de ponta \
                        e serviços de excelência para residências e empresas.",
            },
            pillars: vec![
                Feature {
                    icon: "❦",
                    title: "Sustentabilidade",
                    description: "Compromisso com o meio ambiente e desenvolvimento sustentável através de energia limpa.",
                },
                Feature {
                    icon: "◈",
                    title: "Confiabilidade",
                    description: "Equipamentos de alta qualidade com garantias estendidas e suporte técnico especializado.",
                },
                Feature {
                    icon: "⚡",
                    title: "Inovação",
                    description: "Sempre na vanguarda da tecnologia, oferecendo as soluções mais avançadas do mercado.",
                },
            ],
            contact: Contact {
                heading: Heading {
                    lead: "Entre em",
                    highlight: "Contato",
                    intro: "Pronto para começar sua jornada rumo à independência energética?",
                },
                channels: vec![
                    Feature { icon: "☎", title: "Telefone", description: "(11) 9999-9999" },
                    Feature { icon: "✉", title: "Email", description: "contato@energiatech.com.br" },
                    Feature { icon: "⌖", title: "Endereço", description: "São Paulo, SP - Brasil" },
                ],
                form_fields: vec!["Seu nome", "Seu email", "Sua mensagem"],
                submit: "Enviar Mensagem",
            },
            footer: Footer {
                copyright: "© 2025 EnergiaTech. Todos os direitos reservados.",
                links: vec!["Privacidade", "Termos"],
            },
        }
    }
}

/// What the landing command hands to a renderer.
#[derive(Debug, Clone)]
pub struct LandingView {
    pub page: LandingPage,
    pub sections: Vec<Section>,
    pub menu_open: bool,
}

/// Sticky per-section visibility flags.
#[derive(Debug, Clone, Default)]
pub struct Visibility {
    visible: BTreeSet<Section>,
}

impl Visibility {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records an intersection event. Returns true when the section just became visible.
    /// Sections without an anchor are not observed.
    pub fn observe(&mut self, section: Section, ratio: f64) -> bool {
        if section.anchor().is_none() || ratio < VISIBILITY_THRESHOLD {
            return false;
        }
        let newly = self.visible.insert(section);
        if newly {
            debug!("section {:?} became visible (ratio {:.2})", section, ratio);
        }
        newly
    }

    pub fn is_visible(&self, section: Section) -> bool {
        self.visible.contains(&section)
    }

    pub fn visible(&self) -> Vec<Section> {
        self.visible.iter().copied().collect()
    }
}

/// Where a rendered section sits in the page, in lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionSpan {
    pub section: Section,
    pub start: usize,
    pub len: usize,
}

/// Fraction of a span inside the viewport `[scroll, scroll + height)`.
pub fn intersection_ratio(span: &SectionSpan, scroll: usize, height: usize) -> f64 {
    if span.len == 0 {
        return 0.0;
    }
    let top = span.start.max(scroll);
    let bottom = span
        .start
        .saturating_add(span.len)
        .min(scroll.saturating_add(height));
    if bottom <= top {
        return 0.0;
    }
    (bottom - top) as f64 / span.len as f64
}

/// Feeds one intersection event per span to the tracker for the given viewport.
pub fn observe_viewport(
    spans: &[SectionSpan],
    scroll: usize,
    height: usize,
    visibility: &mut Visibility,
) {
    for span in spans {
        visibility.observe(span.section, intersection_ratio(span, scroll, height));
    }
}
