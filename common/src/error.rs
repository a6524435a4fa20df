//! エラー型定義

use thiserror::Error;

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// サーバーが2xx以外を返した
    #[error("HTTP error: status {status}")]
    Http { status: u16 },

    /// 通信そのものが失敗した（fetch拒否、接続断など）
    #[error("Transport error: {0}")]
    Transport(String),

    #[error("内容が入力されていません")]
    EmptyText,

    #[error("内容が5MBを超えています（{bytes} bytes）")]
    TextTooLarge { bytes: usize },
}

impl Error {
    /// HTTPステータスからエラーを作る（成功系ならNone）
    pub fn from_status(status: u16) -> Option<Self> {
        if (200..300).contains(&status) {
            None
        } else {
            Some(Error::Http { status })
        }
    }
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_json() {
        let json_error = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let error = Error::Json(json_error);
        assert!(format!("{}", error).contains("JSON error"));
    }

    #[test]
    fn test_error_display_http() {
        let error = Error::Http { status: 500 };
        assert_eq!(format!("{}", error), "HTTP error: status 500");
    }

    #[test]
    fn test_error_display_transport() {
        let error = Error::Transport("connection refused".to_string());
        assert_eq!(format!("{}", error), "Transport error: connection refused");
    }

    #[test]
    fn test_from_status() {
        assert!(Error::from_status(200).is_none());
        assert!(Error::from_status(204).is_none());
        assert!(matches!(Error::from_status(404), Some(Error::Http { status: 404 })));
        assert!(matches!(Error::from_status(302), Some(Error::Http { status: 302 })));
    }

    #[test]
    fn test_error_from_json() {
        let json_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let error: Error = json_error.into();
        assert!(matches!(error, Error::Json(_)));
    }
}
