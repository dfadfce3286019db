// src/templates/modern.rs
//! Default variant: blue header band, two-column body, pill-shaped tags

use maud::{html, Markup};

use crate::types::cv_data::{display_name, experience_dates, split_technologies};
use crate::types::CvData;

const ACCENT: &str = "#2563eb";
const HEADING: &str = "margin:0 0 6px;padding-bottom:3px;font-size:15px;font-weight:700;\
                       color:#2563eb;border-bottom:2px solid #2563eb;";
const SIDE_HEADING: &str = "margin:0 0 4px;padding-bottom:3px;font-size:13px;font-weight:700;\
                            color:#2563eb;border-bottom:2px solid #2563eb;";
const ENTRY: &str = "border-left:4px solid #2563eb;padding-left:8px;margin-bottom:8px;";
const PILL: &str = "display:inline-block;margin:0 3px 3px 0;padding:2px 8px;border-radius:999px;\
                    background:#dbeafe;color:#1e40af;font-size:11px;font-weight:500;";

pub fn render(data: &CvData) -> Markup {
    html! {
        div style="height:100%;display:flex;flex-direction:column;background:#ffffff;color:#111827;font-family:system-ui,-apple-system,sans-serif;" {
            header style=(format!("background:{ACCENT};color:#ffffff;padding:16px;display:flex;align-items:center;gap:16px;")) {
                @if let Some(photo) = &data.personal_info.profile_photo {
                    img src=(photo) alt="Profile"
                        style="width:80px;height:80px;border-radius:50%;object-fit:cover;border:2px solid #ffffff;";
                }
                div {
                    h1 style="margin:0 0 4px;font-size:24px;font-weight:700;" { (display_name(&data.personal_info)) }
                    div style="display:flex;flex-wrap:wrap;gap:8px;font-size:11px;color:#bfdbfe;" {
                        @if !data.personal_info.email.is_empty() { span { (data.personal_info.email) } }
                        @if !data.personal_info.phone.is_empty() { span { (data.personal_info.phone) } }
                        @if !data.personal_info.address.is_empty() { span { (data.personal_info.address) } }
                        @if !data.personal_info.linkedin.is_empty() { span { (data.personal_info.linkedin) } }
                        @if !data.personal_info.website.is_empty() { span { (data.personal_info.website) } }
                    }
                }
            }
            div style="flex:1;padding:16px;overflow:hidden;" {
                @if !data.summary.is_empty() {
                    section style="margin-bottom:10px;" {
                        h2 style=(HEADING) { "Profesyonel Özet" }
                        p style="margin:0;font-size:12px;color:#374151;white-space:pre-line;" { (data.summary) }
                    }
                }
                div style="display:grid;grid-template-columns:2fr 1fr;gap:16px;" {
                    div {
                        @if !data.experience.is_empty() {
                            section style="margin-bottom:10px;" {
                                h2 style=(HEADING) { "İş Deneyimi" }
                                @for exp in &data.experience {
                                    div style=(ENTRY) {
                                        h3 style="margin:0;font-size:14px;font-weight:600;" { (exp.position) }
                                        p style=(format!("margin:0;font-size:12px;font-weight:500;color:{ACCENT};")) { (exp.company) }
                                        p style="margin:0 0 2px;font-size:11px;color:#4b5563;" { (experience_dates(exp)) }
                                        @if !exp.description.is_empty() {
                                            p style="margin:2px 0 0;font-size:11px;color:#374151;white-space:pre-line;" { (exp.description) }
                                        }
                                    }
                                }
                            }
                        }
                        @if !data.education.is_empty() {
                            section style="margin-bottom:10px;" {
                                h2 style=(HEADING) { "Eğitim" }
                                @for edu in &data.education {
                                    div style=(ENTRY) {
                                        h3 style="margin:0;font-size:14px;font-weight:600;" { (edu.degree) }
                                        p style=(format!("margin:0;font-size:12px;font-weight:500;color:{ACCENT};")) { (edu.school) }
                                        @if !edu.field.is_empty() {
                                            p style="margin:0;font-size:11px;color:#4b5563;" { (edu.field) }
                                        }
                                        p style="margin:0;font-size:11px;color:#4b5563;" {
                                            @if !edu.start_date.is_empty() { (edu.start_date) " - " }
                                            (edu.end_date)
                                            @if let Some(gpa) = &edu.gpa { " • GPA: " (gpa) }
                                        }
                                    }
                                }
                            }
                        }
                        @if !data.projects.is_empty() {
                            section style="margin-bottom:10px;" {
                                h2 style=(HEADING) { "Projeler" }
                                @for project in &data.projects {
                                    div style=(ENTRY) {
                                        h3 style="margin:0;font-size:14px;font-weight:600;" { (project.name) }
                                        @if !project.technologies.is_empty() {
                                            div style="margin:2px 0;" {
                                                @for tech in split_technologies(&project.technologies) {
                                                    span style=(PILL) { (tech) }
                                                }
                                            }
                                        }
                                        @if !project.description.is_empty() {
                                            p style="margin:2px 0 0;font-size:11px;color:#374151;white-space:pre-line;" { (project.description) }
                                        }
                                        @if let Some(url) = &project.url {
                                            a href=(url) style=(format!("font-size:11px;color:{ACCENT};")) { (url) }
                                        }
                                    }
                                }
                            }
                        }
                        @if !data.achievements.is_empty() {
                            section style="margin-bottom:10px;" {
                                h2 style=(HEADING) { "Başarılar" }
                                @for achievement in &data.achievements {
                                    div style="margin-bottom:5px;" {
                                        h3 style="margin:0;font-size:12px;font-weight:600;" { (achievement.title) }
                                        @if !achievement.description.is_empty() {
                                            p style="margin:1px 0 0;font-size:11px;color:#374151;" { (achievement.description) }
                                        }
                                        @if !achievement.date.is_empty() {
                                            p style="margin:1px 0 0;font-size:11px;color:#4b5563;" { (achievement.date) }
                                        }
                                    }
                                }
                            }
                        }
                    }
                    div {
                        @if !data.skills.is_empty() {
                            section style="margin-bottom:10px;" {
                                h2 style=(SIDE_HEADING) { "Beceriler" }
                                div {
                                    @for skill in &data.skills {
                                        span style=(PILL) { (skill) }
                                    }
                                }
                            }
                        }
                        @if !data.languages.is_empty() {
                            section style="margin-bottom:10px;" {
                                h2 style=(SIDE_HEADING) { "Diller" }
                                @for lang in &data.languages {
                                    div style="margin-bottom:3px;" {
                                        p style="margin:0;font-size:11px;font-weight:600;" { (lang.name) }
                                        p style="margin:0;font-size:11px;color:#4b5563;" { (lang.level) }
                                    }
                                }
                            }
                        }
                        @if !data.certifications.is_empty() {
                            section style="margin-bottom:10px;" {
                                h2 style=(SIDE_HEADING) { "Sertifikalar" }
                                @for cert in &data.certifications {
                                    div style="margin-bottom:3px;" {
                                        p style="margin:0;font-size:11px;font-weight:600;" { (cert.name) }
                                        p style="margin:0;font-size:11px;color:#4b5563;" { (cert.issuer) }
                                        @if !cert.date.is_empty() {
                                            p style="margin:0;font-size:10px;color:#6b7280;" { (cert.date) }
                                        }
                                    }
                                }
                            }
                        }
                        @if !data.hobbies.is_empty() {
                            section style="margin-bottom:10px;" {
                                h2 style=(SIDE_HEADING) { "Hobiler" }
                                div {
                                    @for hobby in &data.hobbies {
                                        span style="display:inline-block;margin:0 3px 3px 0;padding:2px 8px;border-radius:999px;background:#f3f4f6;color:#1f2937;font-size:11px;" { (hobby) }
                                    }
                                }
                            }
                        }
                        @if !data.references.is_empty() {
                            section style="margin-bottom:10px;" {
                                h2 style=(SIDE_HEADING) { "Referanslar" }
                                @for reference in &data.references {
                                    div style="margin-bottom:4px;" {
                                        p style="margin:0;font-size:11px;font-weight:600;" { (reference.name) }
                                        p style="margin:0;font-size:11px;color:#4b5563;" { (reference.position) }
                                        p style="margin:0;font-size:11px;color:#4b5563;" { (reference.company) }
                                        @if !reference.email.is_empty() {
                                            p style="margin:0;font-size:10px;color:#6b7280;" { (reference.email) }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
