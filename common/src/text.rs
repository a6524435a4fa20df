//! テキスト投稿（`POST /api/new`）

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::types::ContentId;

/// 投稿できるテキストの上限（サーバーの MAX_CONTENT_LENGTH と同じ5MB）
pub const MAX_TEXT_BYTES: usize = 5 * 1024 * 1024;

/// 投稿成功
pub const TEXT_DONE: &str = "内容を登録しました。";

/// 投稿失敗
pub const TEXT_FAILED: &str = "登録に失敗しました。";

/// リクエスト本文 `{"contents": "..."}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewText {
    contents: String,
}

impl NewText {
    /// 空白だけ、または上限超過のテキストは送らない
    pub fn new(contents: impl Into<String>) -> Result<Self> {
        let contents = contents.into();
        if contents.trim().is_empty() {
            return Err(Error::EmptyText);
        }
        if contents.len() > MAX_TEXT_BYTES {
            return Err(Error::TextTooLarge {
                bytes: contents.len(),
            });
        }
        Ok(Self { contents })
    }

    pub fn contents(&self) -> &str {
        &self.contents
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// 成功レスポンス `{"message": "...", "id": "..."}`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreatedContent {
    pub id: ContentId,
    #[serde(default)]
    pub message: String,
}

/// 失敗レスポンス `{"error": "..."}`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ApiErrorBody {
    pub error: String,
}

impl ApiErrorBody {
    /// 本文からサーバーのエラーメッセージを取り出す（JSONでなければNone）
    pub fn message_from(body: &str) -> Option<String> {
        serde_json::from_str::<ApiErrorBody>(body)
            .ok()
            .map(|b| b.error)
    }
}
