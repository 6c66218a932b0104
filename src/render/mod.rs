//! Turning a transformed table and its [`crate::model::ChartSpec`] into
//! something a person can look at.

mod figure;
mod html;
mod preview;

pub use figure::figure;
pub use html::{escape_html, html_document, preview_html};
pub use preview::{format_cell, preview, preview_text};
