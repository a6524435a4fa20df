//! 無限スクロールのページング状態
//!
//! ページカーソル、読込中フラグ、終端フラグをまとめて保持する。
//! フラグそのものは公開せず、`begin` / `complete` / `fail` / `reset` の
//! 操作だけを通して変化させる。
//!
//! 各取得には `FetchTicket` が発行される。`reset` で世代が進むため、
//! 検索条件を変えた後に古いリクエストの応答が届いても `PageOutcome::Stale`
//! として捨てられる。

use crate::query::{ContentFilter, ContentQuery};
use crate::types::ContentItem;

/// サーバーの1ページあたり件数。これ未満なら最終ページ
pub const PAGE_SIZE: usize = 10;

/// ページ下端からこの距離（px）以内までスクロールしたら次を読む
pub const SCROLL_THRESHOLD_PX: f64 = 500.0;

/// 1回の取得を識別するチケット
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    generation: u64,
    query: ContentQuery,
}

impl FetchTicket {
    pub fn query(&self) -> &ContentQuery {
        &self.query
    }

    pub fn page(&self) -> u32 {
        self.query.page
    }
}

/// 取得結果の適用結果
#[derive(Debug, Clone, PartialEq)]
pub enum PageOutcome {
    /// 検索条件の変更で置き換えられた古い応答。何もしない
    Stale,
    /// 最初のページが空。一覧を空表示に置き換える
    Empty,
    /// 追記する行。`last` なら以降は読まない
    Rows { items: Vec<ContentItem>, last: bool },
}

#[derive(Debug, Clone, Default)]
pub struct PageLoader {
    page: u32,
    loading: bool,
    exhausted: bool,
    generation: u64,
}

impl PageLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// 次のページの取得を開始する
    ///
    /// 読込中、または終端に達している場合は `None`（何もしない）。
    pub fn begin(&mut self, filter: ContentFilter) -> Option<FetchTicket> {
        if self.loading || self.exhausted {
            return None;
        }
        self.loading = true;
        Some(FetchTicket {
            generation: self.generation,
            query: ContentQuery::new(self.page, filter),
        })
    }

    /// 取得した1ページを反映する
    pub fn complete(&mut self, ticket: &FetchTicket, items: Vec<ContentItem>) -> PageOutcome {
        if ticket.generation != self.generation {
            return PageOutcome::Stale;
        }
        self.loading = false;

        if items.is_empty() && ticket.query.page == 0 {
            self.exhausted = true;
            return PageOutcome::Empty;
        }

        let last = items.len() < PAGE_SIZE;
        if last {
            self.exhausted = true;
        }
        if !items.is_empty() {
            self.page += 1;
        }
        PageOutcome::Rows { items, last }
    }

    /// 通信失敗。読込中フラグだけ戻す（リトライはしない）
    ///
    /// 現行世代のチケットなら `true`。
    pub fn fail(&mut self, ticket: &FetchTicket) -> bool {
        if ticket.generation != self.generation {
            return false;
        }
        self.loading = false;
        true
    }

    /// 検索語・フィルタ変更時のリセット
    pub fn reset(&mut self) {
        self.page = 0;
        self.loading = false;
        self.exhausted = false;
        self.generation += 1;
    }

    /// 次に取得するページ番号
    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }
}

/// ビューポート下端がドキュメント下端から閾値以内か
pub fn near_bottom(scroll_top: f64, viewport_height: f64, document_height: f64) -> bool {
    scroll_top + viewport_height >= document_height - SCROLL_THRESHOLD_PX
}
