// src/templates/ats_focused.rs
//! Plain single column tuned for automated resume parsers: no colors, no
//! photo, inline comma-joined lists

use maud::{html, Markup};

use crate::types::cv_data::{display_name, experience_dates, split_technologies};
use crate::types::CvData;

const HEADING: &str = "margin:0 0 4px;font-size:14px;font-weight:700;color:#111827;\
                       text-transform:uppercase;";

pub fn render(data: &CvData) -> Markup {
    html! {
        div style="height:100%;display:flex;flex-direction:column;background:#ffffff;color:#111827;font-family:Arial,Helvetica,sans-serif;padding:20px;" {
            header style="margin-bottom:10px;" {
                h1 style="margin:0 0 2px;font-size:22px;font-weight:700;" { (display_name(&data.personal_info)) }
                p style="margin:0;font-size:11px;color:#374151;" {
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
                    section style="margin-bottom:8px;" {
                        h2 style=(HEADING) { "Özet" }
                        p style="margin:0;font-size:11px;white-space:pre-line;" { (data.summary) }
                    }
                }
                @if !data.experience.is_empty() {
                    section style="margin-bottom:8px;" {
                        h2 style=(HEADING) { "İş Deneyimi" }
                        @for exp in &data.experience {
                            div style="margin-bottom:5px;" {
                                p style="margin:0;font-size:12px;font-weight:700;" {
                                    (exp.position)
                                    @if !exp.company.is_empty() { " | " (exp.company) }
                                }
                                p style="margin:0;font-size:11px;color:#374151;" { (experience_dates(exp)) }
                                @if !exp.description.is_empty() {
                                    p style="margin:1px 0 0;font-size:11px;white-space:pre-line;" { (exp.description) }
                                }
                            }
                        }
                    }
                }
                @if !data.education.is_empty() {
                    section style="margin-bottom:8px;" {
                        h2 style=(HEADING) { "Eğitim" }
                        @for edu in &data.education {
                            div style="margin-bottom:4px;" {
                                p style="margin:0;font-size:12px;font-weight:700;" {
                                    (edu.degree)
                                    @if !edu.field.is_empty() { ", " (edu.field) }
                                    @if !edu.school.is_empty() { " | " (edu.school) }
                                }
                                p style="margin:0;font-size:11px;color:#374151;" {
                                    @if !edu.start_date.is_empty() { (edu.start_date) " - " }
                                    (edu.end_date)
                                    @if let Some(gpa) = &edu.gpa { " | GPA: " (gpa) }
                                }
                            }
                        }
                    }
                }
                @if !data.skills.is_empty() {
                    section style="margin-bottom:8px;" {
                        h2 style=(HEADING) { "Beceriler" }
                        p style="margin:0;font-size:11px;" {
                            @for (i, skill) in data.skills.iter().enumerate() {
                                @if i > 0 { ", " }
                                (skill)
                            }
                        }
                    }
                }
                @if !data.projects.is_empty() {
                    section style="margin-bottom:8px;" {
                        h2 style=(HEADING) { "Projeler" }
                        @for project in &data.projects {
                            div style="margin-bottom:4px;" {
                                p style="margin:0;font-size:12px;font-weight:700;" { (project.name) }
                                @if !project.technologies.is_empty() {
                                    p style="margin:0;font-size:11px;color:#374151;" {
                                        "Teknolojiler: "
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
                @if !data.certifications.is_empty() {
                    section style="margin-bottom:8px;" {
                        h2 style=(HEADING) { "Sertifikalar" }
                        @for cert in &data.certifications {
                            div style="margin-bottom:2px;" {
                                p style="margin:0;font-size:11px;font-weight:700;" {
                                    (cert.name)
                                    @if !cert.issuer.is_empty() { " | " (cert.issuer) }
                                }
                                @if !cert.date.is_empty() {
                                    p style="margin:0;font-size:11px;color:#374151;" { (cert.date) }
                                }
                            }
                        }
                    }
                }
                @if !data.languages.is_empty() {
                    section style="margin-bottom:8px;" {
                        h2 style=(HEADING) { "Diller" }
                        p style="margin:0;font-size:11px;" {
                            @for (i, lang) in data.languages.iter().enumerate() {
                                @if i > 0 { ", " }
                                (lang.name)
                                @if !lang.level.is_empty() { " (" (lang.level) ")" }
                            }
                        }
                    }
                }
                @if !data.achievements.is_empty() {
                    section style="margin-bottom:8px;" {
                        h2 style=(HEADING) { "Başarılar" }
                        @for achievement in &data.achievements {
                            p style="margin:0 0 2px;font-size:11px;" {
                                strong { (achievement.title) }
                                @if !achievement.date.is_empty() { " (" (achievement.date) ")" }
                                @if !achievement.description.is_empty() { " - " (achievement.description) }
                            }
                        }
                    }
                }
                @if !data.hobbies.is_empty() {
                    section style="margin-bottom:8px;" {
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
                            p style="margin:0 0 2px;font-size:11px;" {
                                strong { (reference.name) }
                                " | " (reference.position) ", " (reference.company)
                                @if !reference.email.is_empty() { " | " (reference.email) }
                                @if !reference.phone.is_empty() { " | " (reference.phone) }
                            }
                        }
                    }
                }
            }
        }
    }
}
