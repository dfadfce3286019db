// src/templates/academic.rs
//! Serif CV that leads with education, centered stacked header

use maud::{html, Markup};

use crate::types::cv_data::{display_name, experience_dates, split_technologies};
use crate::types::CvData;

const HEADING: &str = "margin:0 0 6px;padding-bottom:3px;font-size:14px;font-weight:700;\
                       color:#111827;text-transform:uppercase;letter-spacing:2px;\
                       border-bottom:1px solid #d1d5db;";

pub fn render(data: &CvData) -> Markup {
    html! {
        div style="height:100%;display:flex;flex-direction:column;background:#ffffff;color:#111827;font-family:Georgia,'Times New Roman',serif;padding:20px;" {
            header style="text-align:center;border-bottom:4px solid #1f2937;padding-bottom:10px;margin-bottom:12px;" {
                h1 style="margin:0 0 4px;font-size:24px;font-weight:700;" { (display_name(&data.personal_info)) }
                div style="font-size:10px;color:#4b5563;" {
                    @if !data.personal_info.email.is_empty() { div { (data.personal_info.email) } }
                    @if !data.personal_info.phone.is_empty() { div { (data.personal_info.phone) } }
                    @if !data.personal_info.address.is_empty() { div { (data.personal_info.address) } }
                    @if !data.personal_info.linkedin.is_empty() || !data.personal_info.website.is_empty() {
                        div style="margin-top:2px;" {
                            @if !data.personal_info.linkedin.is_empty() {
                                span style="margin-right:8px;" { (data.personal_info.linkedin) }
                            }
                            @if !data.personal_info.website.is_empty() {
                                span { (data.personal_info.website) }
                            }
                        }
                    }
                }
            }
            div style="flex:1;overflow:hidden;" {
                @if !data.summary.is_empty() {
                    section style="margin-bottom:10px;" {
                        h2 style=(HEADING) { "Özet" }
                        p style="margin:0;font-size:12px;line-height:1.5;white-space:pre-line;" { (data.summary) }
                    }
                }
                // education sits above experience in this layout
                @if !data.education.is_empty() {
                    section style="margin-bottom:10px;" {
                        h2 style=(HEADING) { "Eğitim" }
                        @for edu in &data.education {
                            div style="margin-bottom:5px;" {
                                div style="display:flex;justify-content:space-between;align-items:baseline;" {
                                    h3 style="margin:0;font-size:13px;font-weight:700;" { (edu.degree) }
                                    span style="font-size:10px;color:#4b5563;" {
                                        @if !edu.start_date.is_empty() { (edu.start_date) " - " }
                                        (edu.end_date)
                                    }
                                }
                                p style="margin:0;font-size:12px;font-style:italic;" { (edu.school) }
                                @if !edu.field.is_empty() {
                                    p style="margin:0;font-size:11px;color:#4b5563;" { (edu.field) }
                                }
                                @if let Some(gpa) = &edu.gpa {
                                    p style="margin:0;font-size:11px;color:#4b5563;" { "GPA: " (gpa) }
                                }
                            }
                        }
                    }
                }
                @if !data.experience.is_empty() {
                    section style="margin-bottom:10px;" {
                        h2 style=(HEADING) { "İş Deneyimi" }
                        @for exp in &data.experience {
                            div style="margin-bottom:6px;" {
                                div style="display:flex;justify-content:space-between;align-items:baseline;" {
                                    h3 style="margin:0;font-size:13px;font-weight:700;" { (exp.position) }
                                    span style="font-size:10px;color:#4b5563;" { (experience_dates(exp)) }
                                }
                                p style="margin:0;font-size:12px;font-style:italic;" { (exp.company) }
                                @if !exp.description.is_empty() {
                                    p style="margin:2px 0 0;font-size:11px;line-height:1.5;white-space:pre-line;" { (exp.description) }
                                }
                            }
                        }
                    }
                }
                @if !data.projects.is_empty() {
                    section style="margin-bottom:10px;" {
                        h2 style=(HEADING) { "Projeler" }
                        @for project in &data.projects {
                            div style="margin-bottom:5px;" {
                                h3 style="margin:0;font-size:12px;font-weight:700;" { (project.name) }
                                @if !project.technologies.is_empty() {
                                    p style="margin:0;font-size:10px;font-style:italic;color:#4b5563;" {
                                        @for (i, tech) in split_technologies(&project.technologies).into_iter().enumerate() {
                                            @if i > 0 { ", " }
                                            (tech)
                                        }
                                    }
                                }
                                @if !project.description.is_empty() {
                                    p style="margin:1px 0 0;font-size:11px;white-space:pre-line;" { (project.description) }
                                }
                            }
                        }
                    }
                }
                @if !data.achievements.is_empty() {
                    section style="margin-bottom:10px;" {
                        h2 style=(HEADING) { "Başarılar ve Ödüller" }
                        @for achievement in &data.achievements {
                            div style="margin-bottom:4px;" {
                                h3 style="margin:0;font-size:12px;font-weight:700;" {
                                    (achievement.title)
                                    @if !achievement.date.is_empty() {
                                        span style="font-weight:400;color:#4b5563;" { " (" (achievement.date) ")" }
                                    }
                                }
                                @if !achievement.description.is_empty() {
                                    p style="margin:1px 0 0;font-size:11px;" { (achievement.description) }
                                }
                            }
                        }
                    }
                }
                @if !data.certifications.is_empty() {
                    section style="margin-bottom:10px;" {
                        h2 style=(HEADING) { "Sertifikalar" }
                        @for cert in &data.certifications {
                            p style="margin:0 0 3px;font-size:11px;" {
                                strong { (cert.name) }
                                @if !cert.issuer.is_empty() { ", " (cert.issuer) }
                                @if !cert.date.is_empty() { " (" (cert.date) ")" }
                            }
                        }
                    }
                }
                div style="display:grid;grid-template-columns:1fr 1fr;gap:16px;" {
                    div {
                        @if !data.skills.is_empty() {
                            section style="margin-bottom:10px;" {
                                h2 style=(HEADING) { "Beceriler" }
                                p style="margin:0;font-size:11px;" {
                                    @for (i, skill) in data.skills.iter().enumerate() {
                                        @if i > 0 { ", " }
                                        (skill)
                                    }
                                }
                            }
                        }
                        @if !data.languages.is_empty() {
                            section {
                                h2 style=(HEADING) { "Diller" }
                                @for lang in &data.languages {
                                    p style="margin:0 0 2px;font-size:11px;" {
                                        (lang.name)
                                        @if !lang.level.is_empty() { " (" (lang.level) ")" }
                                    }
                                }
                            }
                        }
                    }
                    div {
                        @if !data.hobbies.is_empty() {
                            section style="margin-bottom:10px;" {
                                h2 style=(HEADING) { "Hobiler" }
                                p style="margin:0;font-size:11px;" {
                                    @for (i, hobby) in data.hobbies.iter().enumerate() {
                                        @if i > 0 { ", " }
                                        (hobby)
                                    }
                                }
                            }
                        }
                        @if !data.references.is_empty() {
                            section {
                                h2 style=(HEADING) { "Referanslar" }
                                @for reference in &data.references {
                                    div style="margin-bottom:3px;" {
                                        p style="margin:0;font-size:11px;font-weight:700;" { (reference.name) }
                                        p style="margin:0;font-size:10px;color:#4b5563;" {
                                            (reference.position) ", " (reference.company)
                                        }
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
