// src/templates/executive_premium.rs
//! Lightweight serif with widely tracked centered headings. The one variant
//! that keeps the product's English section titles.

use maud::{html, Markup};

use crate::types::cv_data::{display_name, experience_dates, split_technologies};
use crate::types::CvData;

const HEADING: &str = "margin:0 0 6px;padding-bottom:3px;font-size:13px;font-weight:300;\
                       color:#111827;text-transform:uppercase;letter-spacing:5px;\
                       text-align:center;border-bottom:1px solid #d1d5db;";

pub fn render(data: &CvData) -> Markup {
    html! {
        div style="height:100%;display:flex;flex-direction:column;background:#fffdf8;color:#111827;font-family:Didot,'Bodoni MT','Times New Roman',serif;padding:24px;" {
            header style="text-align:center;margin-bottom:14px;" {
                @if let Some(photo) = &data.personal_info.profile_photo {
                    img src=(photo) alt="Profile"
                        style="width:76px;height:76px;border-radius:50%;object-fit:cover;border:1px solid #d1d5db;margin-bottom:8px;";
                }
                h1 style="margin:0 0 6px;font-size:28px;font-weight:300;letter-spacing:6px;text-transform:uppercase;" {
                    (display_name(&data.personal_info))
                }
                p style="margin:0;font-size:10px;color:#6b7280;letter-spacing:2px;" {
                    @let contact = [
                        &data.personal_info.email,
                        &data.personal_info.phone,
                        &data.personal_info.address,
                        &data.personal_info.linkedin,
                        &data.personal_info.website,
                    ];
                    @for (i, item) in contact.iter().filter(|c| !c.is_empty()).enumerate() {
                        @if i > 0 { "  ·  " }
                        (item)
                    }
                }
            }
            div style="flex:1;overflow:hidden;" {
                @if !data.summary.is_empty() {
                    section style="margin-bottom:12px;" {
                        h2 style=(HEADING) { "Executive Summary" }
                        p style="margin:0;font-size:12px;font-weight:300;text-align:center;font-style:italic;white-space:pre-line;" { (data.summary) }
                    }
                }
                @if !data.experience.is_empty() {
                    section style="margin-bottom:12px;" {
                        h2 style=(HEADING) { "Professional Experience" }
                        @for exp in &data.experience {
                            div style="margin-bottom:8px;text-align:center;" {
                                h3 style="margin:0;font-size:13px;font-weight:400;letter-spacing:1px;" { (exp.position) }
                                p style="margin:0;font-size:12px;font-style:italic;color:#4b5563;" { (exp.company) }
                                p style="margin:0 0 2px;font-size:10px;color:#6b7280;letter-spacing:1px;" { (experience_dates(exp)) }
                                @if !exp.description.is_empty() {
                                    p style="margin:2px 0 0;font-size:11px;font-weight:300;white-space:pre-line;" { (exp.description) }
                                }
                            }
                        }
                    }
                }
                div style="display:grid;grid-template-columns:1fr 1fr;gap:16px;margin-bottom:12px;" {
                    @if !data.education.is_empty() {
                        section {
                            h2 style=(HEADING) { "Education" }
                            @for edu in &data.education {
                                div style="text-align:center;margin-bottom:4px;" {
                                    h3 style="margin:0;font-size:12px;font-weight:400;" { (edu.degree) }
                                    p style="margin:0;font-size:11px;font-style:italic;color:#4b5563;" { (edu.school) }
                                    @if !edu.field.is_empty() {
                                        p style="margin:0;font-size:10px;color:#6b7280;" { (edu.field) }
                                    }
                                    p style="margin:0;font-size:10px;color:#6b7280;" {
                                        @if !edu.start_date.is_empty() { (edu.start_date) " - " }
                                        (edu.end_date)
                                        @if let Some(gpa) = &edu.gpa { " · GPA " (gpa) }
                                    }
                                }
                            }
                        }
                    }
                    @if !data.skills.is_empty() {
                        section {
                            h2 style=(HEADING) { "Core Competencies" }
                            div style="text-align:center;" {
                                @for skill in &data.skills {
                                    p style="margin:0 0 2px;font-size:11px;font-weight:300;" { (skill) }
                                }
                            }
                        }
                    }
                }
                @if !data.projects.is_empty() {
                    section style="margin-bottom:12px;" {
                        h2 style=(HEADING) { "Selected Projects" }
                        @for project in &data.projects {
                            div style="text-align:center;margin-bottom:5px;" {
                                h3 style="margin:0;font-size:12px;font-weight:400;" { (project.name) }
                                @if !project.technologies.is_empty() {
                                    p style="margin:0;font-size:10px;font-style:italic;color:#6b7280;" {
                                        @for (i, tech) in split_technologies(&project.technologies).into_iter().enumerate() {
                                            @if i > 0 { " · " }
                                            (tech)
                                        }
                                    }
                                }
                                @if !project.description.is_empty() {
                                    p style="margin:1px 0 0;font-size:11px;font-weight:300;white-space:pre-line;" { (project.description) }
                                }
                            }
                        }
                    }
                }
                div style="display:grid;grid-template-columns:1fr 1fr;gap:16px;" {
                    div {
                        @if !data.languages.is_empty() {
                            section style="margin-bottom:10px;" {
                                h2 style=(HEADING) { "Languages" }
                                div style="text-align:center;" {
                                    @for lang in &data.languages {
                                        p style="margin:0 0 2px;font-size:11px;font-weight:300;" {
                                            (lang.name)
                                            @if !lang.level.is_empty() { " · " (lang.level) }
                                        }
                                    }
                                }
                            }
                        }
                        @if !data.certifications.is_empty() {
                            section {
                                h2 style=(HEADING) { "Certifications" }
                                div style="text-align:center;" {
                                    @for cert in &data.certifications {
                                        p style="margin:0 0 2px;font-size:11px;font-weight:300;" {
                                            (cert.name)
                                            @if !cert.issuer.is_empty() { ", " (cert.issuer) }
                                            @if !cert.date.is_empty() { " (" (cert.date) ")" }
                                        }
                                    }
                                }
                            }
                        }
                    }
                    div {
                        @if !data.achievements.is_empty() {
                            section style="margin-bottom:10px;" {
                                h2 style=(HEADING) { "Distinctions" }
                                div style="text-align:center;" {
                                    @for achievement in &data.achievements {
                                        p style="margin:0 0 2px;font-size:11px;font-weight:300;" {
                                            (achievement.title)
                                            @if !achievement.date.is_empty() { " (" (achievement.date) ")" }
                                        }
                                    }
                                }
                            }
                        }
                        @if !data.hobbies.is_empty() {
                            section {
                                h2 style=(HEADING) { "Interests" }
                                p style="margin:0;font-size:11px;font-weight:300;text-align:center;" {
                                    @for (i, hobby) in data.hobbies.iter().enumerate() {
                                        @if i > 0 { " · " }
                                        (hobby)
                                    }
                                }
                            }
                        }
                    }
                }
                @if !data.references.is_empty() {
                    section style="margin-top:12px;" {
                        h2 style=(HEADING) { "References" }
                        div style="display:grid;grid-template-columns:1fr 1fr;gap:8px;text-align:center;" {
                            @for reference in &data.references {
                                div {
                                    p style="margin:0;font-size:11px;font-weight:400;" { (reference.name) }
                                    p style="margin:0;font-size:10px;font-style:italic;color:#4b5563;" { (reference.position) ", " (reference.company) }
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
