use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "sharectl")]
#[command(about = "Share Board のコンテンツ一覧・検索・削除", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// サーバーURL（設定ファイル・環境変数より優先）
    #[arg(long, global = true)]
    pub server: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// コンテンツ一覧を表示（終端まで自動でページ送り）
    List {
        /// 検索語（プレビューの部分一致）
        #[arg(short, long, default_value = "")]
        query: String,

        /// 種別フィルタ（text, png, pdf ...）
        #[arg(short = 't', long = "type", default_value = "")]
        kind: String,

        /// 読み込むページ数の上限
        #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..))]
        max_pages: Option<u32>,
    },

    /// テキストを登録
    New {
        /// 登録するテキスト
        #[arg(required_unless_present = "file", conflicts_with = "file")]
        text: Option<String>,

        /// テキストファイルから登録
        #[arg(short, long)]
        file: Option<PathBuf>,
    },

    /// コンテンツを削除
    Delete {
        /// コンテンツID
        #[arg(required = true)]
        id: String,

        /// 確認を省略
        #[arg(short, long)]
        yes: bool,
    },

    /// 設定を表示/編集
    Config {
        /// サーバーURLを設定
        #[arg(long)]
        set_server: Option<String>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}
