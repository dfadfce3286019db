//! CV template rendering core: one canonical data shape, a fixed registry
//! of visual variants, and a selector that maps free-form template
//! identifiers onto exactly one of them.

pub mod renderer;
pub mod selector;
pub mod templates;
pub mod types;

pub use renderer::{render, render_document, render_with_options, RenderOptions};
pub use selector::select;
pub use templates::TemplateKind;
pub use types::CvData;
