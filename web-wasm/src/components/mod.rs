pub mod content_list;
pub mod header;
pub mod new_text;
pub mod search_bar;
pub mod upload_area;
