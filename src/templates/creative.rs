// src/templates/creative.rs
//! Gradient header, circular photo with initials fallback, violet accents

use maud::{html, Markup};

use crate::types::cv_data::{display_name, experience_dates, initials, split_technologies};
use crate::types::CvData;

const ACCENT: &str = "#667eea";
const GRADIENT: &str = "linear-gradient(135deg,#667eea 0%,#764ba2 100%)";
const HEADING: &str = "margin:0 0 6px;font-size:15px;font-weight:700;color:#667eea;";
const SIDE_HEADING: &str = "margin:0 0 4px;font-size:13px;font-weight:700;color:#667eea;";
const PILL: &str = "display:inline-block;margin:0 3px 3px 0;padding:2px 9px;border-radius:999px;\
                    background:#ede9fe;color:#5b21b6;font-size:11px;font-weight:500;";

pub fn render(data: &CvData) -> Markup {
    html! {
        div style="height:100%;display:flex;flex-direction:column;background:#ffffff;color:#1f2937;font-family:'Segoe UI',system-ui,sans-serif;" {
            header style=(format!("background:{GRADIENT};color:#ffffff;padding:18px;display:flex;align-items:center;gap:16px;")) {
                @if let Some(photo) = &data.personal_info.profile_photo {
                    img src=(photo) alt="Profile"
                        style="width:84px;height:84px;border-radius:50%;object-fit:cover;border:3px solid #ffffff;";
                } @else {
                    div style="width:84px;height:84px;border-radius:50%;border:3px solid #ffffff;display:flex;align-items:center;justify-content:center;font-size:28px;font-weight:700;background:rgba(255,255,255,0.2);" {
                        (initials(display_name(&data.personal_info)))
                    }
                }
                div {
                    h1 style="margin:0 0 4px;font-size:25px;font-weight:700;" { (display_name(&data.personal_info)) }
                    div style="display:flex;flex-wrap:wrap;gap:8px;font-size:11px;opacity:0.9;" {
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
                        h2 style=(HEADING) { "Hakkımda" }
                        p style="margin:0;font-size:12px;color:#374151;white-space:pre-line;" { (data.summary) }
                    }
                }
                div style="display:grid;grid-template-columns:2fr 1fr;gap:16px;" {
                    div {
                        @if !data.experience.is_empty() {
                            section style="margin-bottom:10px;" {
                                h2 style=(HEADING) { "İş Deneyimi" }
                                @for exp in &data.experience {
                                    div style=(format!("margin-bottom:8px;padding:8px;border-radius:8px;background:#faf5ff;border-left:4px solid {ACCENT};")) {
                                        h3 style="margin:0;font-size:14px;font-weight:600;" { (exp.position) }
                                        p style=(format!("margin:0;font-size:12px;font-weight:500;color:{ACCENT};")) { (exp.company) }
                                        p style="margin:0 0 2px;font-size:11px;color:#6b7280;" { (experience_dates(exp)) }
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
                                    div style=(format!("margin-bottom:6px;padding:8px;border-radius:8px;background:#faf5ff;border-left:4px solid {ACCENT};")) {
                                        h3 style="margin:0;font-size:14px;font-weight:600;" { (edu.degree) }
                                        p style=(format!("margin:0;font-size:12px;color:{ACCENT};")) { (edu.school) }
                                        @if !edu.field.is_empty() {
                                            p style="margin:0;font-size:11px;color:#6b7280;" { (edu.field) }
                                        }
                                        p style="margin:0;font-size:11px;color:#6b7280;" {
                                            @if !edu.start_date.is_empty() { (edu.start_date) " - " }
                                            (edu.end_date)
                                            @if let Some(gpa) = &edu.gpa { " • " (gpa) }
                                        }
                                    }
                                }
                            }
                        }
                        @if !data.projects.is_empty() {
                            section style="margin-bottom:10px;" {
                                h2 style=(HEADING) { "Projeler" }
                                @for project in &data.projects {
                                    div style="margin-bottom:6px;" {
                                        h3 style="margin:0;font-size:13px;font-weight:600;" { (project.name) }
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
                            section {
                                h2 style=(HEADING) { "Başarılar" }
                                @for achievement in &data.achievements {
                                    div style="margin-bottom:4px;" {
                                        h3 style="margin:0;font-size:12px;font-weight:600;" { (achievement.title) }
                                        @if !achievement.description.is_empty() {
                                            p style="margin:1px 0 0;font-size:11px;color:#374151;" { (achievement.description) }
                                        }
                                        @if !achievement.date.is_empty() {
                                            p style="margin:1px 0 0;font-size:10px;color:#6b7280;" { (achievement.date) }
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
                                        p style="margin:0;font-size:11px;color:#6b7280;" { (lang.level) }
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
                                        p style="margin:0;font-size:11px;color:#6b7280;" { (cert.issuer) }
                                        @if !cert.date.is_empty() {
                                            p style="margin:0;font-size:10px;color:#9ca3af;" { (cert.date) }
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
                                        span style=(PILL) { (hobby) }
                                    }
                                }
                            }
                        }
                        @if !data.references.is_empty() {
                            section {
                                h2 style=(SIDE_HEADING) { "Referanslar" }
                                @for reference in &data.references {
                                    div style="margin-bottom:4px;" {
                                        p style="margin:0;font-size:11px;font-weight:600;" { (reference.name) }
                                        p style="margin:0;font-size:11px;color:#6b7280;" { (reference.position) }
                                        p style="margin:0;font-size:11px;color:#6b7280;" { (reference.company) }
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
