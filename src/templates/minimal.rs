// src/templates/minimal.rs
//! Black on white, light weights, hairline separators, no photo slot

use maud::{html, Markup};

use crate::types::cv_data::{display_name, experience_dates, split_technologies};
use crate::types::CvData;

const HEADING: &str = "margin:0 0 6px;font-size:12px;font-weight:400;color:#000000;\
                       text-transform:uppercase;letter-spacing:3px;";
const RULE: &str = "border:none;border-top:1px solid #d1d5db;margin:10px 0;";

pub fn render(data: &CvData) -> Markup {
    html! {
        div style="height:100%;display:flex;flex-direction:column;background:#ffffff;color:#000000;font-family:Helvetica,Arial,sans-serif;padding:24px;" {
            header style="margin-bottom:4px;" {
                h1 style="margin:0 0 4px;font-size:26px;font-weight:300;letter-spacing:-0.5px;" { (display_name(&data.personal_info)) }
                div style="font-size:10px;color:#4b5563;font-weight:300;" {
                    @if !data.personal_info.email.is_empty() { p style="margin:0;" { (data.personal_info.email) } }
                    @if !data.personal_info.phone.is_empty() { p style="margin:0;" { (data.personal_info.phone) } }
                    @if !data.personal_info.address.is_empty() { p style="margin:0;" { (data.personal_info.address) } }
                    @if !data.personal_info.linkedin.is_empty() { p style="margin:0;" { (data.personal_info.linkedin) } }
                    @if !data.personal_info.website.is_empty() { p style="margin:0;" { (data.personal_info.website) } }
                }
            }
            hr style=(RULE);
            div style="flex:1;overflow:hidden;" {
                @if !data.summary.is_empty() {
                    section style="margin-bottom:12px;" {
                        h2 style=(HEADING) { "Özet" }
                        p style="margin:0;font-size:11px;font-weight:300;line-height:1.5;white-space:pre-line;" { (data.summary) }
                    }
                }
                @if !data.experience.is_empty() {
                    section style="margin-bottom:12px;" {
                        h2 style=(HEADING) { "Deneyim" }
                        @for exp in &data.experience {
                            div style="margin-bottom:7px;" {
                                p style="margin:0;font-size:12px;" {
                                    strong style="font-weight:500;" { (exp.position) }
                                    "  "
                                    span style="color:#4b5563;" { (exp.company) }
                                }
                                p style="margin:0;font-size:10px;color:#9ca3af;" { (experience_dates(exp)) }
                                @if !exp.description.is_empty() {
                                    p style="margin:2px 0 0;font-size:11px;font-weight:300;line-height:1.5;white-space:pre-line;" { (exp.description) }
                                }
                            }
                        }
                    }
                }
                @if !data.education.is_empty() {
                    section style="margin-bottom:12px;" {
                        h2 style=(HEADING) { "Eğitim" }
                        @for edu in &data.education {
                            div style="margin-bottom:5px;" {
                                p style="margin:0;font-size:12px;" {
                                    strong style="font-weight:500;" { (edu.degree) }
                                    "  "
                                    span style="color:#4b5563;" { (edu.school) }
                                }
                                p style="margin:0;font-size:10px;color:#9ca3af;" {
                                    @if !edu.field.is_empty() { (edu.field) " · " }
                                    @if !edu.start_date.is_empty() { (edu.start_date) " - " }
                                    (edu.end_date)
                                    @if let Some(gpa) = &edu.gpa { " · " (gpa) }
                                }
                            }
                        }
                    }
                }
                @if !data.projects.is_empty() {
                    section style="margin-bottom:12px;" {
                        h2 style=(HEADING) { "Projeler" }
                        @for project in &data.projects {
                            div style="margin-bottom:5px;" {
                                p style="margin:0;font-size:12px;font-weight:500;" { (project.name) }
                                @if !project.technologies.is_empty() {
                                    p style="margin:0;font-size:10px;color:#9ca3af;" {
                                        @for (i, tech) in split_technologies(&project.technologies).into_iter().enumerate() {
                                            @if i > 0 { " / " }
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
                        @if !data.skills.is_empty() {
                            section style="margin-bottom:12px;" {
                                h2 style=(HEADING) { "Beceriler" }
                                p style="margin:0;font-size:11px;font-weight:300;" {
                                    @for (i, skill) in data.skills.iter().enumerate() {
                                        @if i > 0 { ", " }
                                        (skill)
                                    }
                                }
                            }
                        }
                        @if !data.languages.is_empty() {
                            section style="margin-bottom:12px;" {
                                h2 style=(HEADING) { "Diller" }
                                @for lang in &data.languages {
                                    p style="margin:0 0 2px;font-size:11px;font-weight:300;" {
                                        (lang.name)
                                        @if !lang.level.is_empty() {
                                            span style="color:#9ca3af;" { "  " (lang.level) }
                                        }
                                    }
                                }
                            }
                        }
                        @if !data.hobbies.is_empty() {
                            section {
                                h2 style=(HEADING) { "Hobiler" }
                                p style="margin:0;font-size:11px;font-weight:300;" {
                                    @for (i, hobby) in data.hobbies.iter().enumerate() {
                                        @if i > 0 { ", " }
                                        (hobby)
                                    }
                                }
                            }
                        }
                    }
                    div {
                        @if !data.certifications.is_empty() {
                            section style="margin-bottom:12px;" {
                                h2 style=(HEADING) { "Sertifikalar" }
                                @for cert in &data.certifications {
                                    p style="margin:0 0 2px;font-size:11px;font-weight:300;" {
                                        (cert.name)
                                        @if !cert.issuer.is_empty() {
                                            span style="color:#9ca3af;" { "  " (cert.issuer) }
                                        }
                                        @if !cert.date.is_empty() {
                                            span style="color:#9ca3af;" { "  " (cert.date) }
                                        }
                                    }
                                }
                            }
                        }
                        @if !data.achievements.is_empty() {
                            section style="margin-bottom:12px;" {
                                h2 style=(HEADING) { "Başarılar" }
                                @for achievement in &data.achievements {
                                    div style="margin-bottom:3px;" {
                                        p style="margin:0;font-size:11px;font-weight:500;" { (achievement.title) }
                                        @if !achievement.description.is_empty() {
                                            p style="margin:0;font-size:10px;font-weight:300;color:#4b5563;" { (achievement.description) }
                                        }
                                    }
                                }
                            }
                        }
                        @if !data.references.is_empty() {
                            section {
                                h2 style=(HEADING) { "Referanslar" }
                                @for reference in &data.references {
                                    div style="margin-bottom:3px;" {
                                        p style="margin:0;font-size:11px;font-weight:500;" { (reference.name) }
                                        p style="margin:0;font-size:10px;font-weight:300;color:#4b5563;" {
                                            (reference.position) ", " (reference.company)
                                        }
                                        @if !reference.email.is_empty() {
                                            p style="margin:0;font-size:10px;font-weight:300;color:#9ca3af;" { (reference.email) }
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
