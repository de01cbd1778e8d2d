//! Static site content: the portfolio projects, service cards and
//! testimonial quotes rendered by the page. Everything here is read-only
//! and defined at startup.

/// Fixed spec sheet shown in the project modal.
#[derive(Clone, PartialEq, Debug)]
pub struct ProjectSpecs {
    pub area: String,
    pub year: String,
    pub location: String,
    pub scope: String,
}

/// A portfolio entry. `images` is ordered and must stay non-empty: the
/// lightbox wraps its index over `images.len()`.
#[derive(Clone, PartialEq, Debug)]
pub struct Project {
    pub id: u32,
    pub title: String,
    pub tag: String,
    pub cover: String,
    pub images: Vec<String>,
    pub specs: ProjectSpecs,
}

#[derive(Clone, PartialEq)]
pub struct Service {
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Clone, PartialEq)]
pub struct Testimonial {
    pub author: &'static str,
    pub quote: &'static str,
}

fn project(
    id: u32,
    title: &str,
    tag: &str,
    images: &[&str],
    (area, year, location, scope): (&str, &str, &str, &str),
) -> Project {
    Project {
        id,
        title: title.to_string(),
        tag: tag.to_string(),
        cover: images[0].to_string(),
        images: images.iter().map(|s| s.to_string()).collect(),
        specs: ProjectSpecs {
            area: area.to_string(),
            year: year.to_string(),
            location: location.to_string(),
            scope: scope.to_string(),
        },
    }
}

pub fn projects() -> Vec<Project> {
    vec![
        project(
            1,
            "Apartamento Jardim",
            "Residencial",
            &[
                "https://images.unsplash.com/photo-1493809842364-78817add7ffb?q=80&w=1600&auto=format&fit=crop",
                "https://images.unsplash.com/photo-1505693416388-ac5ce068fe85?q=80&w=1600&auto=format&fit=crop",
                "https://images.unsplash.com/photo-1524758631624-e2822e304c36?q=80&w=1600&auto=format&fit=crop",
            ],
            ("120 m²", "2024", "São Paulo, SP", "Interiores completos e marcenaria"),
        ),
        project(
            2,
            "Café Aurora",
            "Comercial",
            &[
                "https://images.unsplash.com/photo-1504754524776-8f4f37790ca0?q=80&w=1600&auto=format&fit=crop",
                "https://images.unsplash.com/photo-1513579924656-c837cd86a8f1?q=80&w=1600&auto=format&fit=crop",
                "https://images.unsplash.com/photo-1517248135467-4c7edcad34c4?q=80&w=1600&auto=format&fit=crop",
            ],
            ("85 m²", "2023", "Campinas, SP", "Conceito, layout, iluminação e fachada"),
        ),
        project(
            3,
            "Casa da Serra",
            "Residencial",
            &[
                "https://images.unsplash.com/photo-1475855581690-80accde3ae2b?q=80&w=1600&auto=format&fit=crop",
                "https://images.unsplash.com/photo-1484154218962-a197022b5858?q=80&w=1600&auto=format&fit=crop",
                "https://images.unsplash.com/photo-1497366216548-37526070297c?q=80&w=1600&auto=format&fit=crop",
            ],
            ("260 m²", "2022", "Campos do Jordão, SP", "Arquitetônico + interiores"),
        ),
        project(
            4,
            "Clínica Solaris",
            "Institucional",
            &[
                "https://images.unsplash.com/photo-1583911860205-72f8c3c48fb1?q=80&w=1600&auto=format&fit=crop",
                "https://images.unsplash.com/photo-1524758631624-e2822e304c36?q=80&w=1600&auto=format&fit=crop",
                "https://images.unsplash.com/photo-1494526585095-c41746248156?q=80&w=1600&auto=format&fit=crop",
            ],
            ("140 m²", "2024", "São Paulo, SP", "Reforma, acessibilidade e ambientação"),
        ),
        project(
            5,
            "Studio Minimal",
            "Interiores",
            &[
                "https://images.unsplash.com/photo-1524758631624-e2822e304c36?q=80&w=1600&auto=format&fit=crop",
                "https://images.unsplash.com/photo-1493809842364-78817add7ffb?q=80&w=1600&auto=format&fit=crop",
                "https://images.unsplash.com/photo-1475855581690-80accde3ae2b?q=80&w=1600&auto=format&fit=crop",
            ],
            ("48 m²", "2021", "São Paulo, SP", "Conceito, layout e mobiliário solto"),
        ),
        project(
            6,
            "Loja Concept",
            "Comercial",
            &[
                "https://images.unsplash.com/photo-1524758631624-e2822e304c36?q=80&w=1600&auto=format&fit=crop",
                "https://images.unsplash.com/photo-1513579924656-c837cd86a8f1?q=80&w=1600&auto=format&fit=crop",
                "https://images.unsplash.com/photo-1497366216548-37526070297c?q=80&w=1600&auto=format&fit=crop",
            ],
            ("110 m²", "2022", "Santos, SP", "Branding espacial e vitrine"),
        ),
    ]
}

pub const SERVICES: &[Service] = &[
    Service {
        title: "Projeto Arquitetônico",
        description: "Do conceito ao executivo, compatibilização e memorial.",
    },
    Service {
        title: "Interiores & Marcenaria",
        description: "Detalhamento, materiais, mobiliário e luminotécnica.",
    },
    Service {
        title: "Gerenciamento de Obra",
        description: "Cronograma, orçamentos, fornecedores e visitas técnicas.",
    },
    Service {
        title: "Consultoria Express",
        description: "Sessão estratégica para dúvidas e direcionamentos.",
    },
];

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        author: "Marina S.",
        quote: "Profissional impecável! Transformou nosso apartamento com soluções inteligentes.",
    },
    Testimonial {
        author: "Eduardo R.",
        quote: "Prazo e orçamento respeitados. O resultado ficou além das expectativas.",
    },
    Testimonial {
        author: "Clínica Solaris",
        quote: "Ambiente acolhedor e funcional. Pacientes elogiam diariamente.",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_project_has_images() {
        for p in projects() {
            assert!(
                !p.images.is_empty(),
                "project {} has no gallery images",
                p.title
            );
        }
    }

    #[test]
    fn project_ids_are_unique() {
        let all = projects();
        for (i, a) in all.iter().enumerate() {
            for b in &all[i + 1..] {
                assert_ne!(a.id, b.id, "duplicate project id {}", a.id);
            }
        }
    }

    #[test]
    fn covers_come_from_the_gallery() {
        for p in projects() {
            assert_eq!(p.cover, p.images[0]);
        }
    }

    #[test]
    fn spec_sheets_are_filled_in() {
        for p in projects() {
            assert!(!p.specs.area.is_empty());
            assert!(!p.specs.year.is_empty());
            assert!(!p.specs.location.is_empty());
            assert!(!p.specs.scope.is_empty());
        }
    }
}
