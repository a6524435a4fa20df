//! 一覧の端末表示

use chrono::{DateTime, Local};
use share_board_common::{ContentItem, ContentRow};

/// Unix秒をローカル時刻で表示
pub fn format_modified(modified: Option<i64>) -> String {
    modified
        .and_then(|secs| DateTime::from_timestamp(secs, 0))
        .map(|dt| dt.with_timezone(&Local).format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| "-".to_string())
}

/// 1行分: `[種別] ID  プレビュー  更新日時  リンク先`
pub fn format_item(item: &ContentItem) -> String {
    let row = ContentRow::from(item);
    format!(
        "[{}] {}  {}  {}  {}",
        row.kind_label,
        row.id,
        row.title,
        format_modified(item.modified),
        row.href
    )
}
