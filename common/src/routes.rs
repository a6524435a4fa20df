//! サーバー側のルート

use std::borrow::Cow;

use crate::types::{ContentId, ContentKind};

/// 一覧API
pub const LIST_PATH: &str = "/api/contents";

/// ファイルアップロード（ネイティブフォームの送信先）
pub const UPLOAD_PATH: &str = "/api/upload";

/// テキスト投稿API
pub const NEW_TEXT_PATH: &str = "/api/new";

/// パスに埋め込むID（パーセントエンコード済み）
fn path_id(id: &ContentId) -> Cow<'_, str> {
    urlencoding::encode(id.as_str())
}

/// テキストビューア
pub fn viewer_href(id: &ContentId) -> String {
    format!("/content/{}", path_id(id))
}

/// ダウンロード
pub fn download_href(id: &ContentId) -> String {
    format!("/download/{}", path_id(id))
}

/// 種別に応じたリンク先（textはビューア、それ以外はダウンロード）
pub fn content_href(kind: &ContentKind, id: &ContentId) -> String {
    if kind.is_text() {
        viewer_href(id)
    } else {
        download_href(id)
    }
}

/// 削除API
pub fn delete_path(id: &ContentId) -> String {
    format!("/api/delete/{}", path_id(id))
}
