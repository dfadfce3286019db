// src/renderer.rs
//! Entry point: resolve a template identifier, render, wrap in the page
//! container

use maud::{html, Markup, DOCTYPE};
use tracing::debug;

use crate::selector::select;
use crate::types::cv_data::display_name;
use crate::types::CvData;

/// ISO A4 in CSS units. Every variant renders into this fixed box so the
/// downstream PDF capture sees one printable page regardless of layout.
pub const PAGE_WIDTH: &str = "210mm";
pub const PAGE_HEIGHT: &str = "297mm";

/// Knobs threaded through to the page container, opaque to the renderers.
/// `container_id` exists so the external PDF exporter can target the node.
#[derive(Debug, Clone, Copy, Default)]
pub struct RenderOptions<'a> {
    pub container_id: Option<&'a str>,
    pub extra_class: Option<&'a str>,
}

/// Render a CV with the variant resolved from `template_id`.
///
/// Stateless and synchronous: same `(data, template_id)` in, same markup
/// out. Unknown identifiers select the default variant, never an error.
pub fn render(data: &CvData, template_id: &str) -> Markup {
    render_with_options(data, template_id, &RenderOptions::default())
}

/// [`render`] with an explicit page container id / class.
pub fn render_with_options(data: &CvData, template_id: &str, opts: &RenderOptions) -> Markup {
    let kind = select(template_id);
    debug!(template_id, template = kind.id(), "rendering CV");
    let inner = kind.render(data);
    html! {
        div id=[opts.container_id] class=[opts.extra_class]
            style=(format!(
                "width:{PAGE_WIDTH};height:{PAGE_HEIGHT};overflow:hidden;\
                 word-break:break-word;overflow-wrap:break-word;hyphens:auto;\
                 background:#ffffff;"
            )) {
            (inner)
        }
    }
}

/// Wrap the page container in a complete standalone HTML document, ready
/// to write to disk and print.
pub fn render_document(data: &CvData, template_id: &str, opts: &RenderOptions) -> Markup {
    html! {
        (DOCTYPE)
        html lang="tr" {
            head {
                meta charset="utf-8";
                title { (display_name(&data.personal_info)) " | CV" }
                style { "@page { size: A4; margin: 0; } body { margin: 0; }" }
            }
            body {
                (render_with_options(data, template_id, opts))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::cv_data::ONGOING_LABEL;
    use crate::types::{Experience, PersonalInfo};

    fn ada_cv() -> CvData {
        CvData {
            personal_info: PersonalInfo {
                name: "Ada Lovelace".to_string(),
                email: "ada@example.com".to_string(),
                ..Default::default()
            },
            summary: String::new(),
            experience: vec![Experience {
                company: "Analytical Engines Ltd".to_string(),
                position: "Engineer".to_string(),
                start_date: "2020".to_string(),
                end_date: String::new(),
                description: "Built things".to_string(),
                current: true,
            }],
            skills: vec!["Math".to_string(), "Logic".to_string()],
            ..Default::default()
        }
    }

    #[test]
    fn test_end_to_end_modern_scenario() {
        let html = render(&ada_cv(), "modern").into_string();

        assert!(html.contains("Ada Lovelace"));
        assert!(html.contains("Analytical Engines Ltd"));
        assert!(html.contains(ONGOING_LABEL));
        // empty summary and education produce no headings
        assert!(!html.contains("Özet"));
        assert!(!html.contains("Eğitim"));
        // both skill tags, in source order
        let math = html.find("Math").expect("Math tag missing");
        let logic = html.find("Logic").expect("Logic tag missing");
        assert!(math < logic);
    }

    #[test]
    fn test_output_is_wrapped_in_a4_container() {
        let html = render(&ada_cv(), "modern").into_string();
        assert!(html.starts_with("<div"));
        assert!(html.contains("width:210mm"));
        assert!(html.contains("height:297mm"));
        assert!(html.contains("overflow:hidden"));
        assert!(html.contains("hyphens:auto"));
    }

    #[test]
    fn test_container_id_and_class_are_threaded_through() {
        let opts = RenderOptions {
            container_id: Some("cv-preview"),
            extra_class: Some("shadow"),
        };
        let html = render_with_options(&ada_cv(), "modern", &opts).into_string();
        assert!(html.contains(r#"id="cv-preview""#));
        assert!(html.contains(r#"class="shadow""#));

        let bare = render(&ada_cv(), "modern").into_string();
        assert!(!bare.contains("id="));
        assert!(!bare.contains("class="));
    }

    #[test]
    fn test_unknown_identifier_still_renders() {
        let html = render(&ada_cv(), "definitely-not-a-template").into_string();
        assert!(html.contains("Ada Lovelace"));
    }

    #[test]
    fn test_render_is_idempotent() {
        let data = ada_cv();
        let first = render(&data, "creative").into_string();
        let second = render(&data, "creative").into_string();
        assert_eq!(first, second);
    }

    #[test]
    fn test_document_wraps_page_in_full_html() {
        let html = render_document(&ada_cv(), "modern", &RenderOptions::default()).into_string();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>Ada Lovelace | CV</title>"));
        assert!(html.contains("size: A4"));
        assert!(html.contains("width:210mm"));
    }

    #[test]
    fn test_markup_escapes_untrusted_field_content() {
        let mut data = ada_cv();
        data.personal_info.name = "<script>alert(1)</script>".to_string();
        let html = render(&data, "modern").into_string();
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }
}
