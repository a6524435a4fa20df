//! 一覧APIのクエリ組み立て

use serde::{Deserialize, Serialize};

/// 検索語と種別フィルタ
///
/// 空文字列は「指定なし」。サーバーは空の `q` / `type` を無視する。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentFilter {
    pub q: String,
    pub kind: String,
}

impl ContentFilter {
    pub fn new(q: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            q: q.into(),
            kind: kind.into(),
        }
    }
}

/// 1ページ分の取得条件
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentQuery {
    pub page: u32,
    pub filter: ContentFilter,
}

impl ContentQuery {
    pub fn new(page: u32, filter: ContentFilter) -> Self {
        Self { page, filter }
    }

    /// `page=0&q=...&type=...`
    pub fn to_query_string(&self) -> String {
        format!(
            "page={}&q={}&type={}",
            self.page,
            urlencoding::encode(&self.filter.q),
            urlencoding::encode(&self.filter.kind),
        )
    }

    /// reqwest等に渡すキー/値の組
    pub fn pairs(&self) -> [(&'static str, String); 3] {
        [
            ("page", self.page.to_string()),
            ("q", self.filter.q.clone()),
            ("type", self.filter.kind.clone()),
        ]
    }

    /// `/api/contents?...`
    pub fn to_path(&self) -> String {
        format!("{}?{}", crate::routes::LIST_PATH, self.to_query_string())
    }
}
