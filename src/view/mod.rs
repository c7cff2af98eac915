// View module - view model plus the document it is applied to
pub mod document;
pub mod model;

pub use document::{apply, render_activity_bar, Document, Element, PageDocument, DEFAULT_ACTIVITY_SEGMENTS};
pub use model::{error_view, system_view, FieldUpdate};
