// src/templates/professional.rs
//! Corporate layout: dark navy sidebar, proficiency bars, square photo

use maud::{html, Markup};

use crate::types::cv_data::{
    display_name, experience_dates, initials, proficiency_percent, split_technologies,
};
use crate::types::CvData;

const NAVY: &str = "#1e40af";
const SIDE_HEADING: &str = "margin:0 0 5px;font-size:12px;font-weight:700;color:#bfdbfe;\
                            text-transform:uppercase;letter-spacing:1px;";
const MAIN_HEADING: &str = "margin:0 0 6px;padding-bottom:3px;font-size:15px;font-weight:700;\
                            color:#1e40af;border-bottom:2px solid #1e40af;";

pub fn render(data: &CvData) -> Markup {
    html! {
        div style="height:100%;display:flex;background:#ffffff;color:#1f2937;font-family:'Segoe UI',system-ui,sans-serif;" {
            aside style=(format!("width:33%;background:{NAVY};color:#ffffff;padding:16px;overflow:hidden;")) {
                div style="text-align:center;margin-bottom:12px;" {
                    @if let Some(photo) = &data.personal_info.profile_photo {
                        img src=(photo) alt="Profile"
                            style="width:88px;height:88px;border-radius:8px;object-fit:cover;border:2px solid #bfdbfe;";
                    } @else {
                        div style="width:88px;height:88px;margin:0 auto;border-radius:8px;border:2px solid #bfdbfe;display:flex;align-items:center;justify-content:center;font-size:30px;font-weight:700;background:rgba(255,255,255,0.1);" {
                            (initials(display_name(&data.personal_info)))
                        }
                    }
                    h1 style="margin:8px 0 0;font-size:20px;font-weight:700;" { (display_name(&data.personal_info)) }
                }
                section style="margin-bottom:12px;" {
                    h2 style=(SIDE_HEADING) { "İletişim" }
                    div style="font-size:10px;line-height:1.6;color:#dbeafe;" {
                        @if !data.personal_info.email.is_empty() { p style="margin:0;" { (data.personal_info.email) } }
                        @if !data.personal_info.phone.is_empty() { p style="margin:0;" { (data.personal_info.phone) } }
                        @if !data.personal_info.address.is_empty() { p style="margin:0;" { (data.personal_info.address) } }
                        @if !data.personal_info.linkedin.is_empty() { p style="margin:0;" { (data.personal_info.linkedin) } }
                        @if !data.personal_info.website.is_empty() { p style="margin:0;" { (data.personal_info.website) } }
                    }
                }
                @if !data.skills.is_empty() {
                    section style="margin-bottom:12px;" {
                        h2 style=(SIDE_HEADING) { "Beceriler" }
                        @for skill in &data.skills {
                            p style="margin:0 0 3px;font-size:11px;color:#dbeafe;" { (skill) }
                        }
                    }
                }
                @if !data.languages.is_empty() {
                    section style="margin-bottom:12px;" {
                        h2 style=(SIDE_HEADING) { "Diller" }
                        @for lang in &data.languages {
                            div style="margin-bottom:5px;" {
                                div style="display:flex;justify-content:space-between;font-size:10px;color:#dbeafe;" {
                                    span { (lang.name) }
                                    span { (lang.level) }
                                }
                                div style="height:4px;border-radius:2px;background:rgba(255,255,255,0.25);" {
                                    div style=(format!("height:4px;border-radius:2px;background:#93c5fd;width:{}%;", proficiency_percent(&lang.level))) {}
                                }
                            }
                        }
                    }
                }
                @if !data.certifications.is_empty() {
                    section style="margin-bottom:12px;" {
                        h2 style=(SIDE_HEADING) { "Sertifikalar" }
                        @for cert in &data.certifications {
                            div style="margin-bottom:4px;" {
                                p style="margin:0;font-size:10px;font-weight:600;color:#ffffff;" { (cert.name) }
                                p style="margin:0;font-size:10px;color:#bfdbfe;" { (cert.issuer) }
                                @if !cert.date.is_empty() {
                                    p style="margin:0;font-size:9px;color:#93c5fd;" { (cert.date) }
                                }
                            }
                        }
                    }
                }
                @if !data.hobbies.is_empty() {
                    section {
                        h2 style=(SIDE_HEADING) { "Hobiler" }
                        @for hobby in &data.hobbies {
                            p style="margin:0 0 2px;font-size:10px;color:#dbeafe;" { (hobby) }
                        }
                    }
                }
            }
            main style="width:67%;padding:16px;overflow:hidden;" {
                @if !data.summary.is_empty() {
                    section style="margin-bottom:10px;" {
                        h2 style=(MAIN_HEADING) { "Profesyonel Özet" }
                        p style="margin:0;font-size:12px;color:#374151;white-space:pre-line;" { (data.summary) }
                    }
                }
                @if !data.experience.is_empty() {
                    section style="margin-bottom:10px;" {
                        h2 style=(MAIN_HEADING) { "İş Deneyimi" }
                        @for exp in &data.experience {
                            div style="margin-bottom:7px;" {
                                h3 style="margin:0;font-size:13px;font-weight:700;" { (exp.position) }
                                p style=(format!("margin:0;font-size:12px;font-weight:500;color:{NAVY};")) { (exp.company) }
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
                        h2 style=(MAIN_HEADING) { "Eğitim" }
                        @for edu in &data.education {
                            div style="margin-bottom:5px;" {
                                h3 style="margin:0;font-size:13px;font-weight:700;" { (edu.degree) }
                                p style=(format!("margin:0;font-size:12px;color:{NAVY};")) { (edu.school) }
                                p style="margin:0;font-size:11px;color:#6b7280;" {
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
                        h2 style=(MAIN_HEADING) { "Projeler" }
                        @for project in &data.projects {
                            div style="margin-bottom:6px;" {
                                h3 style="margin:0;font-size:13px;font-weight:700;" { (project.name) }
                                @if !project.technologies.is_empty() {
                                    div style="margin:2px 0;" {
                                        @for tech in split_technologies(&project.technologies) {
                                            span style="display:inline-block;margin:0 3px 3px 0;padding:1px 7px;border:1px solid #bfdbfe;border-radius:4px;color:#1e40af;font-size:10px;" { (tech) }
                                        }
                                    }
                                }
                                @if !project.description.is_empty() {
                                    p style="margin:2px 0 0;font-size:11px;color:#374151;white-space:pre-line;" { (project.description) }
                                }
                            }
                        }
                    }
                }
                @if !data.achievements.is_empty() {
                    section style="margin-bottom:10px;" {
                        h2 style=(MAIN_HEADING) { "Başarılar" }
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
                @if !data.references.is_empty() {
                    section {
                        h2 style=(MAIN_HEADING) { "Referanslar" }
                        div style="display:grid;grid-template-columns:1fr 1fr;gap:8px;" {
                            @for reference in &data.references {
                                div {
                                    p style="margin:0;font-size:11px;font-weight:700;" { (reference.name) }
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
