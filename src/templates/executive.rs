// src/templates/executive.rs
//! Charcoal and gold, heavy uppercase banners, square photo

use maud::{html, Markup};

use crate::types::cv_data::{
    display_name, experience_dates, proficiency_percent, split_technologies,
};
use crate::types::CvData;

const GOLD: &str = "#b45309";
const HEADING: &str = "margin:0 0 6px;padding-bottom:3px;font-size:14px;font-weight:700;\
                       color:#111827;text-transform:uppercase;letter-spacing:2px;\
                       border-bottom:4px solid #111827;";

pub fn render(data: &CvData) -> Markup {
    html! {
        div style="height:100%;display:flex;flex-direction:column;background:#ffffff;color:#111827;font-family:'Garamond','Times New Roman',serif;" {
            header style="background:#111827;color:#ffffff;padding:18px;display:flex;align-items:center;gap:16px;" {
                @if let Some(photo) = &data.personal_info.profile_photo {
                    img src=(photo) alt="Profile"
                        style=(format!("width:84px;height:84px;object-fit:cover;border:2px solid {GOLD};"));
                }
                div {
                    h1 style="margin:0 0 4px;font-size:26px;font-weight:700;letter-spacing:3px;text-transform:uppercase;" {
                        (display_name(&data.personal_info))
                    }
                    div style=(format!("display:flex;flex-wrap:wrap;gap:10px;font-size:11px;color:{GOLD};")) {
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
                        h2 style=(HEADING) { "Yönetici Özeti" }
                        p style="margin:0;font-size:12px;color:#374151;white-space:pre-line;" { (data.summary) }
                    }
                }
                div style="display:grid;grid-template-columns:2fr 1fr;gap:16px;" {
                    div {
                        @if !data.experience.is_empty() {
                            section style="margin-bottom:10px;" {
                                h2 style=(HEADING) { "İş Deneyimi" }
                                @for exp in &data.experience {
                                    div style="margin-bottom:8px;" {
                                        h3 style="margin:0;font-size:14px;font-weight:700;" { (exp.position) }
                                        p style=(format!("margin:0;font-size:12px;font-weight:600;color:{GOLD};")) { (exp.company) }
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
                                    div style="margin-bottom:5px;" {
                                        h3 style="margin:0;font-size:13px;font-weight:700;" { (edu.degree) }
                                        p style=(format!("margin:0;font-size:12px;color:{GOLD};")) { (edu.school) }
                                        p style="margin:0;font-size:11px;color:#4b5563;" {
                                            @if !edu.field.is_empty() { (edu.field) " • " }
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
                                    div style="margin-bottom:6px;" {
                                        h3 style="margin:0;font-size:13px;font-weight:700;" { (project.name) }
                                        @if !project.technologies.is_empty() {
                                            p style="margin:1px 0;font-size:10px;color:#4b5563;letter-spacing:1px;" {
                                                @for (i, tech) in split_technologies(&project.technologies).into_iter().enumerate() {
                                                    @if i > 0 { " / " }
                                                    (tech)
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
                                    div style="margin-bottom:4px;" {
                                        h3 style="margin:0;font-size:12px;font-weight:700;" { (achievement.title) }
                                        @if !achievement.description.is_empty() {
                                            p style="margin:1px 0 0;font-size:11px;color:#374151;" { (achievement.description) }
                                        }
                                        @if !achievement.date.is_empty() {
                                            p style=(format!("margin:1px 0 0;font-size:10px;color:{GOLD};")) { (achievement.date) }
                                        }
                                    }
                                }
                            }
                        }
                    }
                    div {
                        @if !data.skills.is_empty() {
                            section style="margin-bottom:10px;" {
                                h2 style=(HEADING) { "Beceriler" }
                                @for skill in &data.skills {
                                    p style="margin:0 0 3px;font-size:11px;border-bottom:1px solid #e5e7eb;padding-bottom:2px;" { (skill) }
                                }
                            }
                        }
                        @if !data.languages.is_empty() {
                            section style="margin-bottom:10px;" {
                                h2 style=(HEADING) { "Diller" }
                                @for lang in &data.languages {
                                    div style="margin-bottom:5px;" {
                                        div style="display:flex;justify-content:space-between;font-size:11px;" {
                                            span style="font-weight:600;" { (lang.name) }
                                            span style="color:#4b5563;" { (lang.level) }
                                        }
                                        div style="height:4px;background:#e5e7eb;" {
                                            div style=(format!("height:4px;background:{GOLD};width:{}%;", proficiency_percent(&lang.level))) {}
                                        }
                                    }
                                }
                            }
                        }
                        @if !data.certifications.is_empty() {
                            section style="margin-bottom:10px;" {
                                h2 style=(HEADING) { "Sertifikalar" }
                                @for cert in &data.certifications {
                                    div style="margin-bottom:4px;" {
                                        p style="margin:0;font-size:11px;font-weight:700;" { (cert.name) }
                                        p style="margin:0;font-size:10px;color:#4b5563;" { (cert.issuer) }
                                        @if !cert.date.is_empty() {
                                            p style="margin:0;font-size:10px;color:#6b7280;" { (cert.date) }
                                        }
                                    }
                                }
                            }
                        }
                        @if !data.hobbies.is_empty() {
                            section style="margin-bottom:10px;" {
                                h2 style=(HEADING) { "Hobiler" }
                                @for hobby in &data.hobbies {
                                    p style="margin:0 0 2px;font-size:11px;" { (hobby) }
                                }
                            }
                        }
                        @if !data.references.is_empty() {
                            section {
                                h2 style=(HEADING) { "Referanslar" }
                                @for reference in &data.references {
                                    div style="margin-bottom:4px;" {
                                        p style="margin:0;font-size:11px;font-weight:700;" { (reference.name) }
                                        p style="margin:0;font-size:10px;color:#4b5563;" { (reference.position) ", " (reference.company) }
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
