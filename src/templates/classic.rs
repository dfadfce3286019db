// src/templates/classic.rs
//! Traditional single-column serif layout, navy rulers, no photo slot

use maud::{html, Markup};

use crate::types::cv_data::{display_name, experience_dates, split_technologies};
use crate::types::CvData;

const NAVY: &str = "#1e3a8a";
const HEADING: &str = "margin:0 0 6px;padding-bottom:4px;font-size:15px;font-weight:700;\
                       color:#1e3a8a;border-bottom:2px solid #1e3a8a;";

pub fn render(data: &CvData) -> Markup {
    html! {
        div style="height:100%;display:flex;flex-direction:column;background:#ffffff;color:#1f2937;font-family:Georgia,'Times New Roman',serif;padding:20px;" {
            header style="text-align:center;margin-bottom:12px;" {
                h1 style=(format!("margin:0 0 4px;font-size:26px;font-weight:700;color:{NAVY};")) { (display_name(&data.personal_info)) }
                p style="margin:0;font-size:11px;color:#4b5563;" {
                    @let contact = [
                        &data.personal_info.email,
                        &data.personal_info.phone,
                        &data.personal_info.address,
                        &data.personal_info.linkedin,
                        &data.personal_info.website,
                    ];
                    @for (i, item) in contact.iter().filter(|c| !c.is_empty()).enumerate() {
                        @if i > 0 { " | " }
                        (item)
                    }
                }
            }
            div style="flex:1;overflow:hidden;" {
                @if !data.summary.is_empty() {
                    section style="margin-bottom:10px;" {
                        h2 style=(HEADING) { "Özet" }
                        p style="margin:0;font-size:12px;white-space:pre-line;" { (data.summary) }
                    }
                }
                @if !data.experience.is_empty() {
                    section style="margin-bottom:10px;" {
                        h2 style=(HEADING) { "İş Deneyimi" }
                        @for exp in &data.experience {
                            div style="margin-bottom:7px;" {
                                div style="display:flex;justify-content:space-between;align-items:baseline;" {
                                    h3 style="margin:0;font-size:13px;font-weight:700;" { (exp.position) }
                                    span style="font-size:11px;color:#4b5563;font-style:italic;" { (experience_dates(exp)) }
                                }
                                p style=(format!("margin:0;font-size:12px;color:{NAVY};")) { (exp.company) }
                                @if !exp.description.is_empty() {
                                    p style="margin:2px 0 0;font-size:11px;white-space:pre-line;" { (exp.description) }
                                }
                            }
                        }
                    }
                }
                @if !data.education.is_empty() {
                    section style="margin-bottom:10px;" {
                        h2 style=(HEADING) { "Eğitim" }
                        @for edu in &data.education {
                            div style="margin-bottom:5px;" {
                                div style="display:flex;justify-content:space-between;align-items:baseline;" {
                                    h3 style="margin:0;font-size:13px;font-weight:700;" { (edu.degree) }
                                    span style="font-size:11px;color:#4b5563;font-style:italic;" {
                                        @if !edu.start_date.is_empty() { (edu.start_date) " - " }
                                        (edu.end_date)
                                    }
                                }
                                p style=(format!("margin:0;font-size:12px;color:{NAVY};")) { (edu.school) }
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
                @if !data.skills.is_empty() {
                    section style="margin-bottom:10px;" {
                        h2 style=(HEADING) { "Beceriler" }
                        p style="margin:0;font-size:12px;" {
                            @for (i, skill) in data.skills.iter().enumerate() {
                                @if i > 0 { ", " }
                                (skill)
                            }
                        }
                    }
                }
                @if !data.projects.is_empty() {
                    section style="margin-bottom:10px;" {
                        h2 style=(HEADING) { "Projeler" }
                        @for project in &data.projects {
                            div style="margin-bottom:6px;" {
                                h3 style="margin:0;font-size:13px;font-weight:700;" { (project.name) }
                                @if !project.technologies.is_empty() {
                                    p style="margin:1px 0;font-size:11px;font-style:italic;color:#4b5563;" {
                                        @for (i, tech) in split_technologies(&project.technologies).into_iter().enumerate() {
                                            @if i > 0 { " · " }
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
                @if !data.certifications.is_empty() {
                    section style="margin-bottom:10px;" {
                        h2 style=(HEADING) { "Sertifikalar" }
                        @for cert in &data.certifications {
                            p style="margin:0 0 3px;font-size:12px;" {
                                strong { (cert.name) }
                                @if !cert.issuer.is_empty() { ", " (cert.issuer) }
                                @if !cert.date.is_empty() { " (" (cert.date) ")" }
                            }
                        }
                    }
                }
                @if !data.languages.is_empty() {
                    section style="margin-bottom:10px;" {
                        h2 style=(HEADING) { "Diller" }
                        p style="margin:0;font-size:12px;" {
                            @for (i, lang) in data.languages.iter().enumerate() {
                                @if i > 0 { ", " }
                                (lang.name)
                                @if !lang.level.is_empty() { " (" (lang.level) ")" }
                            }
                        }
                    }
                }
                @if !data.achievements.is_empty() {
                    section style="margin-bottom:10px;" {
                        h2 style=(HEADING) { "Başarılar" }
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
                @if !data.hobbies.is_empty() {
                    section style="margin-bottom:10px;" {
                        h2 style=(HEADING) { "Hobiler" }
                        p style="margin:0;font-size:12px;" {
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
                        div style="display:grid;grid-template-columns:1fr 1fr;gap:8px;" {
                            @for reference in &data.references {
                                div {
                                    p style="margin:0;font-size:12px;font-weight:700;" { (reference.name) }
                                    p style="margin:0;font-size:11px;color:#4b5563;" { (reference.position) ", " (reference.company) }
                                    @if !reference.email.is_empty() {
                                        p style="margin:0;font-size:11px;color:#4b5563;" { (reference.email) }
                                    }
                                    @if !reference.phone.is_empty() {
                                        p style="margin:0;font-size:11px;color:#4b5563;" { (reference.phone) }
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
