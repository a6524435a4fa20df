//! エラー表示のテスト

use share_board::error::ShareBoardError;

#[test]
fn test_error_display() {
    let errors = vec![
        ShareBoardError::Config("テスト設定エラー".to_string()),
        ShareBoardError::InvalidServerUrl("localhost".to_string()),
        ShareBoardError::Http {
            method: "GET",
            path: "/api/contents?page=0&q=&type=".to_string(),
            status: 502,
        },
        ShareBoardError::DeleteCancelled,
    ];

    for err in errors {
        let display = format!("{}", err);
        assert!(!display.is_empty(), "エラーメッセージが空: {:?}", err);
    }
}

#[test]
fn test_http_error_message() {
    let err = ShareBoardError::Http {
        method: "DELETE",
        path: "/api/delete/42".to_string(),
        status: 500,
    };
    assert_eq!(err.to_string(), "HTTPエラー: DELETE /api/delete/42 -> 500");
}

#[test]
fn test_common_error_is_transparent() {
    let err: ShareBoardError = share_board_common::Error::Http { status: 503 }.into();
    assert_eq!(err.to_string(), "HTTP error: status 503");
}

#[test]
fn test_io_error_conversion() {
    let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
    let err: ShareBoardError = io.into();
    assert!(matches!(err, ShareBoardError::Io(_)));
    assert!(err.to_string().contains("missing"));
}
