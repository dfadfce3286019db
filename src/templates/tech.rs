// src/templates/tech.rs
//! Terminal theme: monospace green-on-dark, prompt-style section markers

use maud::{html, Markup};

use crate::types::cv_data::{
    display_name, experience_dates, proficiency_percent, split_technologies,
};
use crate::types::CvData;

const GREEN: &str = "#22c55e";
const DIM: &str = "#9ca3af";
const HEADING: &str = "margin:0 0 6px;font-size:13px;font-weight:700;color:#22c55e;";
const TAG: &str = "display:inline-block;margin:0 4px 4px 0;padding:1px 6px;border:1px solid #22c55e;\
                   border-radius:3px;color:#22c55e;font-size:10px;";

pub fn render(data: &CvData) -> Markup {
    html! {
        div style="height:100%;display:flex;flex-direction:column;background:#111827;color:#86efac;font-family:'Fira Code','Courier New',monospace;" {
            header style=(format!("background:#000000;border-bottom:4px solid {GREEN};padding:16px;display:flex;align-items:center;gap:12px;")) {
                @if let Some(photo) = &data.personal_info.profile_photo {
                    img src=(photo) alt="Profile"
                        style=(format!("width:76px;height:76px;border-radius:4px;object-fit:cover;border:2px solid {GREEN};"));
                }
                div {
                    p style=(format!("margin:0 0 2px;font-size:10px;color:{DIM};")) {
                        span style=(format!("color:{GREEN};")) { "$ " }
                        "cat profile.txt"
                    }
                    h1 style="margin:0 0 3px;font-size:22px;font-weight:700;color:#ffffff;" { (display_name(&data.personal_info)) }
                    div style=(format!("display:flex;flex-wrap:wrap;gap:8px;font-size:10px;color:{DIM};")) {
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
                        h2 style=(HEADING) { "## Özet" }
                        p style="margin:0;font-size:11px;color:#d1fae5;white-space:pre-line;" { (data.summary) }
                    }
                }
                div style="display:grid;grid-template-columns:3fr 2fr;gap:16px;" {
                    div {
                        @if !data.experience.is_empty() {
                            section style="margin-bottom:10px;" {
                                h2 style=(HEADING) { "## İş Deneyimi" }
                                @for exp in &data.experience {
                                    div style=(format!("margin-bottom:7px;padding-left:8px;border-left:2px solid {GREEN};")) {
                                        h3 style="margin:0;font-size:12px;font-weight:700;color:#ffffff;" { (exp.position) }
                                        p style=(format!("margin:0;font-size:11px;color:{GREEN};")) { (exp.company) }
                                        p style=(format!("margin:0 0 2px;font-size:10px;color:{DIM};")) { "[" (experience_dates(exp)) "]" }
                                        @if !exp.description.is_empty() {
                                            p style="margin:2px 0 0;font-size:10px;color:#d1fae5;white-space:pre-line;" { (exp.description) }
                                        }
                                    }
                                }
                            }
                        }
                        @if !data.education.is_empty() {
                            section style="margin-bottom:10px;" {
                                h2 style=(HEADING) { "## Eğitim" }
                                @for edu in &data.education {
                                    div style=(format!("margin-bottom:5px;padding-left:8px;border-left:2px solid {GREEN};")) {
                                        h3 style="margin:0;font-size:12px;font-weight:700;color:#ffffff;" { (edu.degree) }
                                        p style=(format!("margin:0;font-size:11px;color:{GREEN};")) { (edu.school) }
                                        p style=(format!("margin:0;font-size:10px;color:{DIM};")) {
                                            @if !edu.field.is_empty() { (edu.field) " " }
                                            "["
                                            @if !edu.start_date.is_empty() { (edu.start_date) " - " }
                                            (edu.end_date)
                                            "]"
                                            @if let Some(gpa) = &edu.gpa { " gpa=" (gpa) }
                                        }
                                    }
                                }
                            }
                        }
                        @if !data.projects.is_empty() {
                            section style="margin-bottom:10px;" {
                                h2 style=(HEADING) { "## Projeler" }
                                @for project in &data.projects {
                                    div style="margin-bottom:6px;" {
                                        h3 style="margin:0;font-size:12px;font-weight:700;color:#ffffff;" {
                                            (project.name)
                                        }
                                        @if !project.technologies.is_empty() {
                                            div style="margin:3px 0;" {
                                                @for tech in split_technologies(&project.technologies) {
                                                    span style=(TAG) { (tech) }
                                                }
                                            }
                                        }
                                        @if !project.description.is_empty() {
                                            p style="margin:1px 0 0;font-size:10px;color:#d1fae5;white-space:pre-line;" { (project.description) }
                                        }
                                        @if let Some(url) = &project.url {
                                            a href=(url) style=(format!("font-size:10px;color:{GREEN};")) { (url) }
                                        }
                                    }
                                }
                            }
                        }
                    }
                    div {
                        @if !data.skills.is_empty() {
                            section style="margin-bottom:10px;" {
                                h2 style=(HEADING) { "## Beceriler" }
                                div {
                                    @for skill in &data.skills {
                                        span style=(TAG) { (skill) }
                                    }
                                }
                            }
                        }
                        @if !data.languages.is_empty() {
                            section style="margin-bottom:10px;" {
                                h2 style=(HEADING) { "## Diller" }
                                @for lang in &data.languages {
                                    div style="margin-bottom:4px;" {
                                        div style="display:flex;justify-content:space-between;font-size:10px;" {
                                            span style="color:#ffffff;" { (lang.name) }
                                            span style=(format!("color:{DIM};")) { (lang.level) }
                                        }
                                        div style="height:5px;border-radius:2px;background:#1f2937;" {
                                            div style=(format!("height:5px;border-radius:2px;background:{GREEN};width:{}%;", proficiency_percent(&lang.level))) {}
                                        }
                                    }
                                }
                            }
                        }
                        @if !data.certifications.is_empty() {
                            section style="margin-bottom:10px;" {
                                h2 style=(HEADING) { "## Sertifikalar" }
                                @for cert in &data.certifications {
                                    div style="margin-bottom:3px;" {
                                        p style="margin:0;font-size:10px;font-weight:700;color:#ffffff;" { (cert.name) }
                                        p style=(format!("margin:0;font-size:10px;color:{DIM};")) {
                                            (cert.issuer)
                                            @if !cert.date.is_empty() { " [" (cert.date) "]" }
                                        }
                                    }
                                }
                            }
                        }
                        @if !data.achievements.is_empty() {
                            section style="margin-bottom:10px;" {
                                h2 style=(HEADING) { "## Başarılar" }
                                @for achievement in &data.achievements {
                                    div style="margin-bottom:3px;" {
                                        p style="margin:0;font-size:10px;font-weight:700;color:#ffffff;" { (achievement.title) }
                                        @if !achievement.description.is_empty() {
                                            p style="margin:0;font-size:10px;color:#d1fae5;" { (achievement.description) }
                                        }
                                    }
                                }
                            }
                        }
                        @if !data.hobbies.is_empty() {
                            section style="margin-bottom:10px;" {
                                h2 style=(HEADING) { "## Hobiler" }
                                div {
                                    @for hobby in &data.hobbies {
                                        span style=(TAG) { (hobby) }
                                    }
                                }
                            }
                        }
                        @if !data.references.is_empty() {
                            section {
                                h2 style=(HEADING) { "## Referanslar" }
                                @for reference in &data.references {
                                    div style="margin-bottom:3px;" {
                                        p style="margin:0;font-size:10px;font-weight:700;color:#ffffff;" { (reference.name) }
                                        p style=(format!("margin:0;font-size:10px;color:{DIM};")) {
                                            (reference.position) " @ " (reference.company)
                                        }
                                        @if !reference.email.is_empty() {
                                            p style=(format!("margin:0;font-size:10px;color:{DIM};")) { (reference.email) }
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
