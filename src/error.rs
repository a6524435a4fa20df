use thiserror::Error;

#[derive(Error, Debug)]
pub enum ShareBoardError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("サーバーURLが不正です: {0}")]
    InvalidServerUrl(String),

    #[error("HTTPエラー: {method} {path} -> {status}")]
    Http {
        method: &'static str,
        path: String,
        status: u16,
    },

    /// サーバーが `{"error": ...}` で拒否した
    #[error("サーバーが拒否しました ({status}): {message}")]
    Rejected { status: u16, message: String },

    #[error("通信エラー: {0}")]
    Request(#[from] reqwest::Error),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error("削除をキャンセルしました")]
    DeleteCancelled,

    #[error("入力エラー: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error(transparent)]
    Common(#[from] share_board_common::Error),
}

pub type Result<T> = std::result::Result<T, ShareBoardError>;
