// src/templates/mod.rs
//! Fixed registry of renderer variants
//!
//! Every variant is a pure function from [`CvData`] to markup. Variants
//! differ in palette, typography, layout, section order and decoration,
//! never in data semantics: section omission, tag splitting, the ongoing
//! label and proficiency mapping come from `types::cv_data` and behave
//! identically everywhere.

pub mod academic;
pub mod ats_focused;
pub mod classic;
pub mod compact;
pub mod creative;
pub mod executive;
pub mod executive_premium;
pub mod minimal;
pub mod modern;
pub mod professional;
pub mod tech;
pub mod timeline;

use maud::Markup;

use crate::types::CvData;

/// One entry per implemented renderer. `Modern` is the selector's fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TemplateKind {
    #[default]
    Modern,
    Classic,
    Creative,
    Professional,
    Executive,
    ExecutivePremium,
    Minimal,
    Academic,
    Tech,
    AtsFocused,
    Timeline,
    Compact,
}

impl TemplateKind {
    pub const ALL: &'static [TemplateKind] = &[
        TemplateKind::Modern,
        TemplateKind::Classic,
        TemplateKind::Creative,
        TemplateKind::Professional,
        TemplateKind::Executive,
        TemplateKind::ExecutivePremium,
        TemplateKind::Minimal,
        TemplateKind::Academic,
        TemplateKind::Tech,
        TemplateKind::AtsFocused,
        TemplateKind::Timeline,
        TemplateKind::Compact,
    ];

    /// Stable identifier, also the canonical slug the selector resolves.
    pub fn id(self) -> &'static str {
        match self {
            TemplateKind::Modern => "modern",
            TemplateKind::Classic => "classic",
            TemplateKind::Creative => "creative",
            TemplateKind::Professional => "professional",
            TemplateKind::Executive => "executive",
            TemplateKind::ExecutivePremium => "executive-premium",
            TemplateKind::Minimal => "minimal",
            TemplateKind::Academic => "academic",
            TemplateKind::Tech => "tech",
            TemplateKind::AtsFocused => "ats-focused",
            TemplateKind::Timeline => "timeline",
            TemplateKind::Compact => "compact",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            TemplateKind::Modern => "Modern",
            TemplateKind::Classic => "Classic",
            TemplateKind::Creative => "Creative",
            TemplateKind::Professional => "Professional",
            TemplateKind::Executive => "Executive",
            TemplateKind::ExecutivePremium => "Executive Premium",
            TemplateKind::Minimal => "Minimal",
            TemplateKind::Academic => "Academic",
            TemplateKind::Tech => "Tech",
            TemplateKind::AtsFocused => "ATS Focused",
            TemplateKind::Timeline => "Timeline",
            TemplateKind::Compact => "Compact",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            TemplateKind::Modern => "Blue header band, two-column layout with skill pills",
            TemplateKind::Classic => "Traditional serif layout in navy, single column",
            TemplateKind::Creative => "Purple gradient header with rounded tags",
            TemplateKind::Professional => "Dark sidebar with language proficiency bars",
            TemplateKind::Executive => "Charcoal and gold, uppercase section banners",
            TemplateKind::ExecutivePremium => "Lightweight serif, centered headings",
            TemplateKind::Minimal => "Hairline separators, generous whitespace",
            TemplateKind::Academic => "Serif layout that leads with education",
            TemplateKind::Tech => "Terminal theme, monospace on dark green",
            TemplateKind::AtsFocused => "Plain single column for automated parsers",
            TemplateKind::Timeline => "Experience drawn along a dotted timeline",
            TemplateKind::Compact => "Dense two-column layout, small type",
        }
    }

    /// Invoke the variant's renderer. Pure and synchronous; the result is
    /// the inner document, not yet wrapped in the page container.
    pub fn render(self, data: &CvData) -> Markup {
        match self {
            TemplateKind::Modern => modern::render(data),
            TemplateKind::Classic => classic::render(data),
            TemplateKind::Creative => creative::render(data),
            TemplateKind::Professional => professional::render(data),
            TemplateKind::Executive => executive::render(data),
            TemplateKind::ExecutivePremium => executive_premium::render(data),
            TemplateKind::Minimal => minimal::render(data),
            TemplateKind::Academic => academic::render(data),
            TemplateKind::Tech => tech::render(data),
            TemplateKind::AtsFocused => ats_focused::render(data),
            TemplateKind::Timeline => timeline::render(data),
            TemplateKind::Compact => compact::render(data),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::cv_data::{NAME_PLACEHOLDER, ONGOING_LABEL};
    use crate::types::{
        Achievement, Certification, Education, Experience, Language, PersonalInfo, Project,
        Reference,
    };

    fn full_cv() -> CvData {
        CvData {
            personal_info: PersonalInfo {
                name: "John Doe".to_string(),
                email: "john.doe@example.com".to_string(),
                phone: "+90 555 123 4567".to_string(),
                address: "Istanbul".to_string(),
                linkedin: "linkedin.com/in/johndoe".to_string(),
                website: "johndoe.com".to_string(),
                profile_photo: None,
            },
            summary: "Experienced software developer.".to_string(),
            experience: vec![Experience {
                company: "Tech Corp".to_string(),
                position: "Senior Developer".to_string(),
                start_date: "2020-01".to_string(),
                end_date: String::new(),
                description: "Led development\nof multiple products".to_string(),
                current: true,
            }],
            education: vec![Education {
                school: "University of Technology".to_string(),
                degree: "BSc".to_string(),
                field: "Computer Science".to_string(),
                start_date: "2015".to_string(),
                end_date: "2019".to_string(),
                gpa: Some("3.8".to_string()),
            }],
            skills: vec!["Rust".to_string(), "SQL".to_string()],
            languages: vec![Language {
                name: "English".to_string(),
                level: "İleri".to_string(),
            }],
            projects: vec![Project {
                name: "E-commerce Platform".to_string(),
                description: "Full-stack shop".to_string(),
                technologies: "React, Node.js ,  Postgres".to_string(),
                url: Some("https://example.com".to_string()),
                start_date: "2022-01".to_string(),
                end_date: "2022-06".to_string(),
            }],
            achievements: vec![Achievement {
                title: "Best Developer Award".to_string(),
                description: "For open source work".to_string(),
                date: "2023-05".to_string(),
            }],
            certifications: vec![Certification {
                name: "AWS Solutions Architect".to_string(),
                issuer: "Amazon Web Services".to_string(),
                date: "2023-03".to_string(),
                expiry_date: Some("2026-03".to_string()),
            }],
            references: vec![Reference {
                name: "Jane Smith".to_string(),
                position: "Engineering Manager".to_string(),
                company: "Tech Corp".to_string(),
                email: "jane@techcorp.com".to_string(),
                phone: "+90 555 987 6543".to_string(),
            }],
            hobbies: vec!["Reading".to_string(), "Chess".to_string()],
        }
    }

    #[test]
    fn test_every_variant_renders_all_populated_sections() {
        let data = full_cv();
        for kind in TemplateKind::ALL {
            let html = kind.render(&data).into_string();
            for needle in [
                "John Doe",
                "Tech Corp",
                "Senior Developer",
                "University of Technology",
                "Rust",
                "English",
                "E-commerce Platform",
                "Best Developer Award",
                "AWS Solutions Architect",
                "Jane Smith",
                "Reading",
            ] {
                assert!(
                    html.contains(needle),
                    "{:?} dropped {needle:?}",
                    kind.id()
                );
            }
        }
    }

    #[test]
    fn test_every_variant_renders_ongoing_label() {
        let data = full_cv();
        for kind in TemplateKind::ALL {
            let html = kind.render(&data).into_string();
            assert!(
                html.contains(ONGOING_LABEL),
                "{:?} missing ongoing label",
                kind.id()
            );
        }
    }

    #[test]
    fn test_every_variant_splits_technology_tags() {
        let data = full_cv();
        for kind in TemplateKind::ALL {
            let html = kind.render(&data).into_string();
            assert!(
                !html.contains("Node.js ,"),
                "{:?} left the technologies string unsplit",
                kind.id()
            );
            assert!(html.contains("Node.js"), "{:?} lost a tag", kind.id());
            assert!(html.contains("Postgres"), "{:?} lost a tag", kind.id());
        }
    }

    #[test]
    fn test_every_variant_omits_empty_sections() {
        let mut data = full_cv();
        data.summary = String::new();
        data.experience.clear();
        data.hobbies.clear();
        for kind in TemplateKind::ALL {
            let html = kind.render(&data).into_string();
            assert!(
                !html.contains("Deneyim") && !html.contains("Experience"),
                "{:?} rendered an experience heading for an empty section",
                kind.id()
            );
            assert!(
                !html.contains("Özet") && !html.contains("Summary"),
                "{:?} rendered a summary heading for an empty summary",
                kind.id()
            );
            assert!(
                !html.contains("Hobi") && !html.contains("Interests"),
                "{:?} rendered a hobbies heading for an empty list",
                kind.id()
            );
        }
    }

    #[test]
    fn test_every_variant_renders_name_placeholder() {
        let mut data = full_cv();
        data.personal_info.name = String::new();
        for kind in TemplateKind::ALL {
            let html = kind.render(&data).into_string();
            assert!(
                html.contains(NAME_PLACEHOLDER),
                "{:?} missing name placeholder",
                kind.id()
            );
        }
    }

    #[test]
    fn test_every_variant_preserves_embedded_line_breaks() {
        let data = full_cv();
        for kind in TemplateKind::ALL {
            let html = kind.render(&data).into_string();
            assert!(
                html.contains("Led development\nof multiple products"),
                "{:?} collapsed an embedded line break",
                kind.id()
            );
            assert!(
                html.contains("pre-line"),
                "{:?} does not declare pre-line whitespace",
                kind.id()
            );
        }
    }

    #[test]
    fn test_catalogue_ids_are_unique() {
        let mut ids: Vec<_> = TemplateKind::ALL.iter().map(|k| k.id()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), TemplateKind::ALL.len());
    }

    #[test]
    fn test_default_is_modern() {
        assert_eq!(TemplateKind::default(), TemplateKind::Modern);
    }
}
