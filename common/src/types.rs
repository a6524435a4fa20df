//! コンテンツ一覧APIの型定義
//!
//! Web(WASM)とCLIで共有される型:
//! - ContentId: サーバー発行のID（UUID文字列、または数値）
//! - ContentKind: "text" とそれ以外（アップロードファイルのMIMEサブタイプ）
//! - ContentItem: `/api/contents` が返す1件分のメタデータ

use serde::{Deserialize, Serialize};
use std::fmt;

/// コンテンツID
///
/// サーバーはUUID文字列を返すが、数値IDを返す実装も受け付ける。
/// クライアント側では不透明な文字列として扱う。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "RawId", into = "String")]
pub struct ContentId(String);

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Text(String),
    Number(i64),
}

impl From<RawId> for ContentId {
    fn from(raw: RawId) -> Self {
        match raw {
            RawId::Text(s) => ContentId(s),
            RawId::Number(n) => ContentId(n.to_string()),
        }
    }
}

impl From<ContentId> for String {
    fn from(id: ContentId) -> Self {
        id.0
    }
}

impl ContentId {
    pub fn new(id: impl Into<String>) -> Self {
        ContentId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ContentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// コンテンツ種別
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ContentKind {
    /// テキスト投稿（ビューアで表示）
    Text,
    /// それ以外（ダウンロード対象）
    Other(String),
}

impl From<String> for ContentKind {
    fn from(s: String) -> Self {
        if s == "text" {
            ContentKind::Text
        } else {
            ContentKind::Other(s)
        }
    }
}

impl From<&str> for ContentKind {
    fn from(s: &str) -> Self {
        ContentKind::from(s.to_string())
    }
}

impl From<ContentKind> for String {
    fn from(kind: ContentKind) -> Self {
        match kind {
            ContentKind::Text => "text".to_string(),
            ContentKind::Other(s) => s,
        }
    }
}

impl ContentKind {
    pub fn as_str(&self) -> &str {
        match self {
            ContentKind::Text => "text",
            ContentKind::Other(s) => s,
        }
    }

    pub fn is_text(&self) -> bool {
        matches!(self, ContentKind::Text)
    }
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// コンテンツ一覧の1件
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentItem {
    pub id: ContentId,

    #[serde(rename = "type")]
    pub kind: ContentKind,

    /// 一覧表示用の文字列（サーバー側でHTMLエスケープ済み）
    pub preview: String,

    /// 最終更新（Unix秒）
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modified: Option<i64>,
}

impl ContentItem {
    /// プレビューのHTMLエスケープを戻した表示用文字列
    ///
    /// サーバーはプレビューをエスケープしてJSONに載せる。テキストノードとして
    /// 描画する側では実体参照をそのまま出さないよう元に戻す。
    pub fn display_preview(&self) -> String {
        unescape_html(&self.preview)
    }
}

fn unescape_html(s: &str) -> String {
    if !s.contains('&') {
        return s.to_string();
    }
    s.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&#34;", "\"")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_uuid_item() {
        let json = r#"{"id":"0b5c7c3e-7f1d-4c57-9a51-2f4e1d0a9b11","type":"png","preview":"photo.png","modified":1718000000}"#;
        let item: ContentItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.id.as_str(), "0b5c7c3e-7f1d-4c57-9a51-2f4e1d0a9b11");
        assert_eq!(item.kind, ContentKind::Other("png".to_string()));
        assert_eq!(item.modified, Some(1718000000));
    }

    #[test]
    fn test_deserialize_numeric_id() {
        let json = r#"{"id":1,"type":"text","preview":"Q1 Report"}"#;
        let item: ContentItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.id, ContentId::new("1"));
        assert!(item.kind.is_text());
        assert_eq!(item.modified, None);
    }

    #[test]
    fn test_serialize_keeps_wire_names() {
        let item = ContentItem {
            id: ContentId::new("42"),
            kind: ContentKind::Text,
            preview: "memo".to_string(),
            modified: None,
        };
        let json = serde_json::to_string(&item).unwrap();
        assert_eq!(json, r#"{"id":"42","type":"text","preview":"memo"}"#);
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(ContentKind::Text.to_string(), "text");
        assert_eq!(ContentKind::from("pdf").to_string(), "pdf");
    }

    #[test]
    fn test_display_preview_unescapes() {
        let item = ContentItem {
            id: ContentId::new("1"),
            kind: ContentKind::Text,
            preview: "a &lt;b&gt; &amp;amp; &#39;c&#39; &#34;d&#34;".to_string(),
            modified: None,
        };
        assert_eq!(item.display_preview(), "a <b> &amp; 'c' \"d\"");
    }
}
