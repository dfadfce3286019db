// src/templates/compact.rs
//! Dense two-column layout, small type, everything on one sheet

use maud::{html, Markup};

use crate::types::cv_data::{display_name, experience_dates, split_technologies};
use crate::types::CvData;

const HEADING: &str = "margin:0 0 3px;padding-bottom:2px;font-size:10px;font-weight:700;\
                       color:#111827;text-transform:uppercase;border-bottom:1px solid #9ca3af;";

pub fn render(data: &CvData) -> Markup {
    html! {
        div style="height:100%;display:flex;flex-direction:column;background:#ffffff;color:#111827;font-family:Arial,Helvetica,sans-serif;padding:12px;font-size:9px;" {
            header style="display:flex;justify-content:space-between;align-items:baseline;border-bottom:2px solid #111827;padding-bottom:4px;margin-bottom:6px;" {
                h1 style="margin:0;font-size:17px;font-weight:700;" { (display_name(&data.personal_info)) }
                p style="margin:0;font-size:8px;color:#374151;text-align:right;" {
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
            @if !data.summary.is_empty() {
                section style="margin-bottom:5px;" {
                    h2 style=(HEADING) { "Özet" }
                    p style="margin:0;font-size:9px;white-space:pre-line;" { (data.summary) }
                }
            }
            div style="flex:1;display:grid;grid-template-columns:3fr 2fr;gap:10px;overflow:hidden;" {
                div {
                    @if !data.experience.is_empty() {
                        section style="margin-bottom:5px;" {
                            h2 style=(HEADING) { "İş Deneyimi" }
                            @for exp in &data.experience {
                                div style="margin-bottom:3px;" {
                                    p style="margin:0;font-size:9px;" {
                                        strong { (exp.position) }
                                        @if !exp.company.is_empty() { ", " (exp.company) }
                                        span style="color:#6b7280;" { " | " (experience_dates(exp)) }
                                    }
                                    @if !exp.description.is_empty() {
                                        p style="margin:0;font-size:8px;color:#374151;white-space:pre-line;" { (exp.description) }
                                    }
                                }
                            }
                        }
                    }
                    @if !data.education.is_empty() {
                        section style="margin-bottom:5px;" {
                            h2 style=(HEADING) { "Eğitim" }
                            @for edu in &data.education {
                                div style="margin-bottom:2px;" {
                                    p style="margin:0;font-size:9px;" {
                                        strong { (edu.degree) }
                                        @if !edu.field.is_empty() { ", " (edu.field) }
                                        @if !edu.school.is_empty() { ", " (edu.school) }
                                        span style="color:#6b7280;" {
                                            " | "
                                            @if !edu.start_date.is_empty() { (edu.start_date) " - " }
                                            (edu.end_date)
                                            @if let Some(gpa) = &edu.gpa { " | " (gpa) }
                                        }
                                    }
                                }
                            }
                        }
                    }
                    @if !data.projects.is_empty() {
                        section style="margin-bottom:5px;" {
                            h2 style=(HEADING) { "Projeler" }
                            @for project in &data.projects {
                                div style="margin-bottom:2px;" {
                                    p style="margin:0;font-size:9px;" {
                                        strong { (project.name) }
                                        @if !project.technologies.is_empty() {
                                            span style="color:#6b7280;" {
                                                " | "
                                                @for (i, tech) in split_technologies(&project.technologies).into_iter().enumerate() {
                                                    @if i > 0 { ", " }
                                                    (tech)
                                                }
                                            }
                                        }
                                    }
                                    @if !project.description.is_empty() {
                                        p style="margin:0;font-size:8px;color:#374151;white-space:pre-line;" { (project.description) }
                                    }
                                }
                            }
                        }
                    }
                    @if !data.achievements.is_empty() {
                        section {
                            h2 style=(HEADING) { "Başarılar" }
                            @for achievement in &data.achievements {
                                p style="margin:0 0 1px;font-size:9px;" {
                                    strong { (achievement.title) }
                                    @if !achievement.date.is_empty() { " (" (achievement.date) ")" }
                                    @if !achievement.description.is_empty() {
                                        span style="color:#374151;" { " " (achievement.description) }
                                    }
                                }
                            }
                        }
                    }
                }
                div {
                    @if !data.skills.is_empty() {
                        section style="margin-bottom:5px;" {
                            h2 style=(HEADING) { "Beceriler" }
                            p style="margin:0;font-size:9px;" {
                                @for (i, skill) in data.skills.iter().enumerate() {
                                    @if i > 0 { ", " }
                                    (skill)
                                }
                            }
                        }
                    }
                    @if !data.certifications.is_empty() {
                        section style="margin-bottom:5px;" {
                            h2 style=(HEADING) { "Sertifikalar" }
                            @for cert in &data.certifications {
                                p style="margin:0 0 1px;font-size:9px;" {
                                    strong { (cert.name) }
                                    @if !cert.issuer.is_empty() { ", " (cert.issuer) }
                                    @if !cert.date.is_empty() {
                                        span style="color:#6b7280;" { " (" (cert.date) ")" }
                                    }
                                }
                            }
                        }
                    }
                    @if !data.languages.is_empty() {
                        section style="margin-bottom:5px;" {
                            h2 style=(HEADING) { "Diller" }
                            p style="margin:0;font-size:9px;" {
                                @for (i, lang) in data.languages.iter().enumerate() {
                                    @if i > 0 { ", " }
                                    (lang.name)
                                    @if !lang.level.is_empty() { " (" (lang.level) ")" }
                                }
                            }
                        }
                    }
                    @if !data.hobbies.is_empty() {
                        section style="margin-bottom:5px;" {
                            h2 style=(HEADING) { "Hobiler" }
                            p style="margin:0;font-size:9px;" {
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
                                div style="margin-bottom:2px;" {
                                    p style="margin:0;font-size:9px;font-weight:700;" { (reference.name) }
                                    p style="margin:0;font-size:8px;color:#374151;" {
                                        (reference.position) ", " (reference.company)
                                    }
                                    @if !reference.email.is_empty() {
                                        p style="margin:0;font-size:8px;color:#6b7280;" { (reference.email) }
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
