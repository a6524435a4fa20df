//! 一覧の1行の表示モデル

use crate::routes::content_href;
use crate::types::{ContentId, ContentItem};

/// 一覧が空のときの表示
pub const EMPTY_STATE: &str = "登録されたコンテンツがありません。";

/// 削除確認
pub const DELETE_CONFIRM: &str = "本当に削除しますか？";

/// 削除成功
pub const DELETE_DONE: &str = "削除しました。";

/// 削除失敗
pub const DELETE_FAILED: &str = "削除に失敗しました。";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentRow {
    /// 削除ボタンに持たせるID
    pub id: ContentId,
    /// 種別ラベル（"text", "png" など）
    pub kind_label: String,
    /// リンク先
    pub href: String,
    /// リンク文字列
    pub title: String,
}

impl From<&ContentItem> for ContentRow {
    fn from(item: &ContentItem) -> Self {
        Self {
            id: item.id.clone(),
            kind_label: item.kind.as_str().to_string(),
            href: content_href(&item.kind, &item.id),
            title: item.display_preview(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ContentKind;

    #[test]
    fn test_text_row_links_to_viewer() {
        let item = ContentItem {
            id: ContentId::new("1"),
            kind: ContentKind::Text,
            preview: "Q1 Report".to_string(),
            modified: None,
        };
        let row = ContentRow::from(&item);
        assert_eq!(row.href, "/content/1");
        assert_eq!(row.title, "Q1 Report");
        assert_eq!(row.kind_label, "text");
        assert_eq!(row.id.as_str(), "1");
    }

    #[test]
    fn test_file_row_links_to_download() {
        let item = ContentItem {
            id: ContentId::new("7"),
            kind: ContentKind::from("pdf"),
            preview: "a&amp;b.pdf".to_string(),
            modified: Some(0),
        };
        let row = ContentRow::from(&item);
        assert_eq!(row.href, "/download/7");
        assert_eq!(row.title, "a&b.pdf");
        assert_eq!(row.kind_label, "pdf");
    }
}
