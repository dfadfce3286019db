// src/types/cv_data.rs
//! Canonical CV document shape shared by every template renderer

use serde::{Deserialize, Serialize};

// ===== Canonical CV JSON Structure =====

/// The one document shape every renderer consumes. Constructed upstream
/// (editor UI / API), read-only here. Missing fields in the incoming JSON
/// land as empty strings / empty vecs at deserialization, so renderers
/// only ever see a fully populated struct.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CvData {
    pub personal_info: PersonalInfo,
    pub summary: String,
    pub experience: Vec<Experience>,
    pub education: Vec<Education>,
    pub skills: Vec<String>,
    pub languages: Vec<Language>,
    pub projects: Vec<Project>,
    pub achievements: Vec<Achievement>,
    pub certifications: Vec<Certification>,
    pub references: Vec<Reference>,
    pub hobbies: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PersonalInfo {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub linkedin: String,
    pub website: String,
    pub profile_photo: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Experience {
    pub company: String,
    pub position: String,
    pub start_date: String,
    pub end_date: String,
    pub description: String,
    /// When true the entry is ongoing and `end_date` is superseded by the
    /// ongoing label.
    pub current: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Education {
    pub school: String,
    pub degree: String,
    pub field: String,
    pub start_date: String,
    pub end_date: String,
    pub gpa: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Language {
    pub name: String,
    /// Free-text proficiency label, not an enum. See [`proficiency_percent`].
    pub level: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Project {
    pub name: String,
    pub description: String,
    /// Comma-separated free text, split into tags via [`split_technologies`].
    pub technologies: String,
    pub url: Option<String>,
    pub start_date: String,
    pub end_date: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Achievement {
    pub title: String,
    pub description: String,
    pub date: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Certification {
    pub name: String,
    pub issuer: String,
    pub date: String,
    pub expiry_date: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Reference {
    pub name: String,
    pub position: String,
    pub company: String,
    pub email: String,
    pub phone: String,
}

// ===== Contract-level display rules =====
//
// These are part of the data contract, not per-template choices: every
// variant renders them identically.

/// Placeholder shown when the name is empty. The name slot always renders.
pub const NAME_PLACEHOLDER: &str = "Ad Soyad";

/// Label shown in place of `end_date` for entries with `current == true`.
pub const ONGOING_LABEL: &str = "Devam ediyor";

/// Split a comma-separated technologies string into trimmed, non-empty tags.
pub fn split_technologies(raw: &str) -> Vec<&str> {
    raw.split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .collect()
}

/// Map a free-text proficiency label to a bar fill percentage. Known labels
/// are the product's literal strings; anything else (including translations
/// or typos) falls to the lowest tier rather than failing.
pub fn proficiency_percent(level: &str) -> u8 {
    match level {
        "Anadil" => 100,
        "İleri" => 85,
        "Orta" => 65,
        _ => 45,
    }
}

/// Date span for an experience entry: `current` wins over `end_date`, an
/// empty start drops the leading "start - " part.
pub fn experience_dates(exp: &Experience) -> String {
    let end = if exp.current {
        ONGOING_LABEL
    } else {
        exp.end_date.as_str()
    };
    if exp.start_date.is_empty() {
        end.to_string()
    } else {
        format!("{} - {}", exp.start_date, end)
    }
}

/// Displayed name: the literal placeholder when empty, never a blank slot.
pub fn display_name(info: &PersonalInfo) -> &str {
    if info.name.is_empty() {
        NAME_PLACEHOLDER
    } else {
        &info.name
    }
}

/// Up to two initials for the avatar slot of photo-bearing layouts.
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .take(2)
        .filter_map(|word| word.chars().next())
        .flat_map(|c| c.to_uppercase())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_technologies_trims_and_drops_empty() {
        assert_eq!(
            split_technologies("React, Node.js ,  Postgres"),
            vec!["React", "Node.js", "Postgres"]
        );
        assert_eq!(split_technologies("solo"), vec!["solo"]);
        assert_eq!(split_technologies("a,,b,"), vec!["a", "b"]);
        assert!(split_technologies("").is_empty());
        assert!(split_technologies(" , ,").is_empty());
    }

    #[test]
    fn test_proficiency_percent_known_labels() {
        assert_eq!(proficiency_percent("Anadil"), 100);
        assert_eq!(proficiency_percent("İleri"), 85);
        assert_eq!(proficiency_percent("Orta"), 65);
    }

    #[test]
    fn test_proficiency_percent_unknown_falls_to_lowest_tier() {
        assert_eq!(proficiency_percent("Native"), 45);
        assert_eq!(proficiency_percent("anadil"), 45);
        assert_eq!(proficiency_percent(""), 45);
    }

    #[test]
    fn test_experience_dates_ongoing_wins_over_end_date() {
        let exp = Experience {
            start_date: "2020".to_string(),
            end_date: "2022".to_string(),
            current: true,
            ..Default::default()
        };
        assert_eq!(experience_dates(&exp), "2020 - Devam ediyor");
    }

    #[test]
    fn test_experience_dates_without_start() {
        let exp = Experience {
            end_date: "2022".to_string(),
            ..Default::default()
        };
        assert_eq!(experience_dates(&exp), "2022");
    }

    #[test]
    fn test_display_name_placeholder() {
        let mut info = PersonalInfo::default();
        assert_eq!(display_name(&info), NAME_PLACEHOLDER);
        info.name = "Ada Lovelace".to_string();
        assert_eq!(display_name(&info), "Ada Lovelace");
    }

    #[test]
    fn test_initials() {
        assert_eq!(initials("Ada Lovelace"), "AL");
        assert_eq!(initials("Ada"), "A");
        assert_eq!(initials(""), "");
    }

    #[test]
    fn test_camel_case_json_with_missing_sections() {
        let json = r#"{
            "personalInfo": { "name": "Test User", "profilePhoto": "p.png" },
            "experience": [
                { "company": "Acme", "position": "Dev", "startDate": "2020", "current": true }
            ]
        }"#;
        let data: CvData = serde_json::from_str(json).unwrap();
        assert_eq!(data.personal_info.name, "Test User");
        assert_eq!(data.personal_info.profile_photo.as_deref(), Some("p.png"));
        assert_eq!(data.experience.len(), 1);
        assert!(data.experience[0].current);
        assert!(data.experience[0].end_date.is_empty());
        assert!(data.summary.is_empty());
        assert!(data.education.is_empty());
        assert!(data.hobbies.is_empty());
    }
}
