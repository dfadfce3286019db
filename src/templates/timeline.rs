// src/templates/timeline.rs
//! Experience and education drawn along a vertical timeline with dot markers

use maud::{html, Markup};

use crate::types::cv_data::{display_name, experience_dates, split_technologies};
use crate::types::CvData;

const BLUE: &str = "#2563eb";
const GREEN: &str = "#16a34a";
const HEADING: &str = "margin:0 0 6px;font-size:15px;font-weight:700;color:#2563eb;";
const RAIL: &str = "position:relative;margin-left:10px;padding-left:16px;border-left:2px dotted #93c5fd;";
const DOT: &str = "position:absolute;left:-6px;top:3px;width:10px;height:10px;border-radius:50%;";
const BADGE: &str = "font-size:10px;color:#1e40af;background:#dbeafe;border-radius:4px;padding:1px 6px;";

pub fn render(data: &CvData) -> Markup {
    html! {
        div style="height:100%;display:flex;flex-direction:column;background:#ffffff;color:#1f2937;font-family:'Segoe UI',system-ui,sans-serif;padding:18px;" {
            header style="display:flex;align-items:center;gap:14px;margin-bottom:10px;" {
                @if let Some(photo) = &data.personal_info.profile_photo {
                    img src=(photo) alt="Profile"
                        style=(format!("width:72px;height:72px;border-radius:50%;object-fit:cover;border:3px solid {BLUE};"));
                }
                div {
                    h1 style="margin:0 0 3px;font-size:24px;font-weight:700;" { (display_name(&data.personal_info)) }
                    div style="display:flex;flex-wrap:wrap;gap:8px;font-size:11px;color:#6b7280;" {
                        @if !data.personal_info.email.is_empty() { span { (data.personal_info.email) } }
                        @if !data.personal_info.phone.is_empty() { span { (data.personal_info.phone) } }
                        @if !data.personal_info.address.is_empty() { span { (data.personal_info.address) } }
                        @if !data.personal_info.linkedin.is_empty() { span { (data.personal_info.linkedin) } }
                        @if !data.personal_info.website.is_empty() { span { (data.personal_info.website) } }
                    }
                }
            }
            div style="flex:1;overflow:hidden;" {
                @if !data.summary.is_empty() {
                    section style="margin-bottom:10px;" {
                        h2 style=(HEADING) { "Özet" }
                        p style="margin:0;font-size:12px;color:#374151;white-space:pre-line;" { (data.summary) }
                    }
                }
                @if !data.experience.is_empty() {
                    section style="margin-bottom:10px;" {
                        h2 style=(HEADING) { "Kariyer Zaman Çizelgesi" }
                        div style=(RAIL) {
                            @for exp in &data.experience {
                                div style="position:relative;margin-bottom:8px;" {
                                    span style=(format!("{DOT}background:{BLUE};")) {}
                                    div style="display:flex;justify-content:space-between;align-items:baseline;gap:8px;" {
                                        h3 style="margin:0;font-size:13px;font-weight:600;" { (exp.position) }
                                        span style=(BADGE) { (experience_dates(exp)) }
                                    }
                                    p style=(format!("margin:0;font-size:12px;font-weight:500;color:{BLUE};")) { (exp.company) }
                                    @if !exp.description.is_empty() {
                                        p style="margin:2px 0 0;font-size:11px;color:#374151;white-space:pre-line;" { (exp.description) }
                                    }
                                }
                            }
                        }
                    }
                }
                @if !data.education.is_empty() {
                    section style="margin-bottom:10px;" {
                        h2 style=(format!("margin:0 0 6px;font-size:15px;font-weight:700;color:{GREEN};")) { "Eğitim" }
                        div style="position:relative;margin-left:10px;padding-left:16px;border-left:2px dotted #86efac;" {
                            @for edu in &data.education {
                                div style="position:relative;margin-bottom:6px;" {
                                    span style=(format!("{DOT}background:{GREEN};")) {}
                                    div style="display:flex;justify-content:space-between;align-items:baseline;gap:8px;" {
                                        h3 style="margin:0;font-size:13px;font-weight:600;" { (edu.degree) }
                                        span style="font-size:10px;color:#166534;background:#dcfce7;border-radius:4px;padding:1px 6px;" {
                                            @if !edu.start_date.is_empty() { (edu.start_date) " - " }
                                            (edu.end_date)
                                        }
                                    }
                                    p style=(format!("margin:0;font-size:12px;font-weight:500;color:{GREEN};")) { (edu.school) }
                                    p style="margin:0;font-size:11px;color:#6b7280;" {
                                        @if !edu.field.is_empty() { (edu.field) }
                                        @if let Some(gpa) = &edu.gpa { " • GPA: " (gpa) }
                                    }
                                }
                            }
                        }
                    }
                }
                @if !data.skills.is_empty() {
                    section style="margin-bottom:10px;" {
                        h2 style=(HEADING) { "Beceriler" }
                        div {
                            @for skill in &data.skills {
                                span style="display:inline-block;margin:0 3px 3px 0;padding:2px 8px;border-radius:4px;background:#dbeafe;color:#1e40af;font-size:11px;" { (skill) }
                            }
                        }
                    }
                }
                div style="display:grid;grid-template-columns:1fr 1fr;gap:16px;" {
                    div {
                        @if !data.projects.is_empty() {
                            section style="margin-bottom:10px;" {
                                h2 style=(HEADING) { "Projeler" }
                                @for project in &data.projects {
                                    div style="margin-bottom:5px;" {
                                        h3 style="margin:0;font-size:12px;font-weight:600;" { (project.name) }
                                        @if !project.technologies.is_empty() {
                                            div style="margin:2px 0;" {
                                                @for tech in split_technologies(&project.technologies) {
                                                    span style="display:inline-block;margin:0 2px 2px 0;padding:1px 6px;border-radius:4px;background:#eff6ff;color:#1e40af;font-size:10px;" { (tech) }
                                                }
                                            }
                                        }
                                        @if !project.description.is_empty() {
                                            p style="margin:1px 0 0;font-size:11px;color:#374151;white-space:pre-line;" { (project.description) }
                                        }
                                    }
                                }
                            }
                        }
                        @if !data.achievements.is_empty() {
                            section {
                                h2 style=(HEADING) { "Başarılar" }
                                @for achievement in &data.achievements {
                                    div style="margin-bottom:3px;" {
                                        p style="margin:0;font-size:11px;font-weight:600;" {
                                            (achievement.title)
                                            @if !achievement.date.is_empty() {
                                                span style="font-weight:400;color:#6b7280;" { " (" (achievement.date) ")" }
                                            }
                                        }
                                        @if !achievement.description.is_empty() {
                                            p style="margin:0;font-size:11px;color:#374151;" { (achievement.description) }
                                        }
                                    }
                                }
                            }
                        }
                    }
                    div {
                        @if !data.certifications.is_empty() {
                            section style="margin-bottom:10px;" {
                                h2 style=(HEADING) { "Sertifikalar" }
                                @for cert in &data.certifications {
                                    div style="margin-bottom:3px;" {
                                        p style="margin:0;font-size:11px;font-weight:600;" { (cert.name) }
                                        p style="margin:0;font-size:10px;color:#6b7280;" {
                                            (cert.issuer)
                                            @if !cert.date.is_empty() { " • " (cert.date) }
                                        }
                                    }
                                }
                            }
                        }
                        @if !data.languages.is_empty() {
                            section style="margin-bottom:10px;" {
                                h2 style=(HEADING) { "Diller" }
                                @for lang in &data.languages {
                                    p style="margin:0 0 2px;font-size:11px;" {
                                        (lang.name)
                                        @if !lang.level.is_empty() {
                                            span style="color:#6b7280;" { " · " (lang.level) }
                                        }
                                    }
                                }
                            }
                        }
                        @if !data.hobbies.is_empty() {
                            section style="margin-bottom:10px;" {
                                h2 style=(HEADING) { "Hobiler" }
                                div {
                                    @for hobby in &data.hobbies {
                                        span style="display:inline-block;margin:0 3px 3px 0;padding:2px 8px;border-radius:4px;background:#f3f4f6;color:#374151;font-size:11px;" { (hobby) }
                                    }
                                }
                            }
                        }
                        @if !data.references.is_empty() {
                            section {
                                h2 style=(HEADING) { "Referanslar" }
                                @for reference in &data.references {
                                    div style="margin-bottom:3px;" {
                                        p style="margin:0;font-size:11px;font-weight:600;" { (reference.name) }
                                        p style="margin:0;font-size:10px;color:#6b7280;" {
                                            (reference.position) ", " (reference.company)
                                        }
                                        @if !reference.email.is_empty() {
                                            p style="margin:0;font-size:10px;color:#9ca3af;" { (reference.email) }
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
