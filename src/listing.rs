//! 一覧のページ送り
//!
//! Web版と同じ `PageLoader` を使い、終端に達するまで順にページを読む。

use crate::client::ApiClient;
use crate::error::Result;
use share_board_common::{ContentFilter, ContentItem, PageLoader, PageOutcome};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListingSummary {
    /// 取得したページ数
    pub pages: u32,
    /// 取得した件数
    pub items: usize,
    /// 最初のページが空だった
    pub empty: bool,
    /// 上限で打ち切った（まだ続きがある）
    pub truncated: bool,
}

/// ページを順に取得し、行が届くたびに `on_rows` を呼ぶ
pub async fn run_listing<F>(
    client: &ApiClient,
    filter: ContentFilter,
    max_pages: Option<u32>,
    mut on_rows: F,
) -> Result<ListingSummary>
where
    F: FnMut(&[ContentItem]),
{
    let mut loader = PageLoader::new();
    let mut summary = ListingSummary::default();

    loop {
        if max_pages.is_some_and(|max| summary.pages >= max) {
            summary.truncated = !loader.is_exhausted();
            break;
        }
        let Some(ticket) = loader.begin(filter.clone()) else {
            break;
        };

        let items = match client.list_page(ticket.query()).await {
            Ok(items) => items,
            Err(e) => {
                loader.fail(&ticket);
                tracing::warn!(page = ticket.page(), "コンテンツ読込失敗: {}", e);
                return Err(e);
            }
        };
        summary.pages += 1;

        match loader.complete(&ticket, items) {
            PageOutcome::Rows { items, last } => {
                summary.items += items.len();
                if !items.is_empty() {
                    on_rows(&items);
                }
                if last {
                    tracing::debug!(page = ticket.page(), "last page reached");
                }
            }
            PageOutcome::Empty => summary.empty = true,
            PageOutcome::Stale => {}
        }
    }

    Ok(summary)
}
