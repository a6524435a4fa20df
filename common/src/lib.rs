//! Share Board Common Library
//!
//! Web(WASM)とCLIで共有される型と状態

pub mod error;
pub mod paging;
pub mod query;
pub mod routes;
pub mod row;
pub mod text;
pub mod types;
pub mod upload;

pub use error::{Error, Result};
pub use paging::{near_bottom, FetchTicket, PageLoader, PageOutcome, PAGE_SIZE, SCROLL_THRESHOLD_PX};
pub use query::{ContentFilter, ContentQuery};
pub use row::{ContentRow, DELETE_CONFIRM, DELETE_DONE, DELETE_FAILED, EMPTY_STATE};
pub use text::{ApiErrorBody, CreatedContent, NewText, MAX_TEXT_BYTES, TEXT_DONE, TEXT_FAILED};
pub use types::{ContentId, ContentItem, ContentKind};
pub use upload::{file_label, DragPhase, DropZone, FILE_PLACEHOLDER};
