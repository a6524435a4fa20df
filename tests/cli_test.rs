//! コマンドライン引数のテスト

use clap::Parser;
use share_board::cli::{Cli, Commands};
use share_board::error::ShareBoardError;
use share_board_common::NewText;

#[test]
fn test_list_defaults() {
    let cli = Cli::try_parse_from(["sharectl", "list"]).unwrap();
    match cli.command {
        Commands::List { query, kind, max_pages } => {
            assert_eq!(query, "");
            assert_eq!(kind, "");
            assert_eq!(max_pages, None);
        }
        _ => panic!("list以外として解釈された"),
    }
}

#[test]
fn test_list_with_filter() {
    let cli = Cli::try_parse_from(["sharectl", "list", "-q", "report", "--type", "text", "-m", "2"])
        .unwrap();
    match cli.command {
        Commands::List { query, kind, max_pages } => {
            assert_eq!(query, "report");
            assert_eq!(kind, "text");
            assert_eq!(max_pages, Some(2));
        }
        _ => panic!("list以外として解釈された"),
    }
}

/// ページ上限0は受け付けない
#[test]
fn test_max_pages_zero_rejected() {
    assert!(Cli::try_parse_from(["sharectl", "list", "--max-pages", "0"]).is_err());
}

#[test]
fn test_new_text_or_file() {
    let cli = Cli::try_parse_from(["sharectl", "new", "hello"]).unwrap();
    assert!(matches!(cli.command, Commands::New { text: Some(ref t), file: None } if t == "hello"));

    let cli = Cli::try_parse_from(["sharectl", "new", "--file", "notes.txt"]).unwrap();
    assert!(matches!(cli.command, Commands::New { text: None, file: Some(_) }));
}

#[test]
fn test_new_requires_text_or_file() {
    assert!(Cli::try_parse_from(["sharectl", "new"]).is_err());
    assert!(Cli::try_parse_from(["sharectl", "new", "hello", "--file", "notes.txt"]).is_err());
}

/// 空白だけのテキストは送信前に弾かれる
#[test]
fn test_blank_text_becomes_cli_error() {
    let err: ShareBoardError = NewText::new("   ").unwrap_err().into();
    assert!(matches!(err, ShareBoardError::Common(share_board_common::Error::EmptyText)));
    assert_eq!(err.to_string(), "内容が入力されていません");
}
