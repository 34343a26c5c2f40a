//! Render diff results for humans and for JSON transport.

pub mod json;
pub mod text;

pub use json::format_json;
pub use text::{format_config_text, format_preview_text, format_summary, format_text};
