//! サーバーAPI呼び出し

pub mod contents;

pub use contents::{create_text, delete_content, fetch_contents, parse_items};
