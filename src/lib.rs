//! Share Board CLI
//!
//! Web版と同じページング状態を使ってコンテンツAPIを操作する。

pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod listing;
pub mod output;
