use anyhow::Context;
use clap::Parser;
use dialoguer::Confirm;
use indicatif::{ProgressBar, ProgressStyle};
use share_board::{cli, client, config, error, listing, output};
use share_board_common::{
    routes, ContentFilter, ContentId, NewText, DELETE_CONFIRM, DELETE_DONE, DELETE_FAILED,
    EMPTY_STATE, TEXT_DONE, TEXT_FAILED,
};
use cli::{Cli, Commands};
use client::ApiClient;
use config::Config;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose {
        "share_board=debug"
    } else {
        "share_board=info"
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let mut config = Config::load().context("設定の読み込みに失敗しました")?;
    let server_url = cli.server.clone().unwrap_or_else(|| config.server_url());

    match cli.command {
        Commands::List { query, kind, max_pages } => {
            let api = ApiClient::new(&server_url, Duration::from_secs(config.timeout_seconds))?;
            let max_pages = max_pages.or(config.page_limit);

            let spinner = ProgressBar::new_spinner();
            spinner.set_style(
                ProgressStyle::with_template("{spinner} {msg}")
                    .unwrap_or_else(|_| ProgressStyle::default_spinner()),
            );
            spinner.set_message("読み込み中...");
            spinner.enable_steady_tick(Duration::from_millis(100));

            let filter = ContentFilter::new(query, kind);
            let summary = listing::run_listing(&api, filter, max_pages, |items| {
                spinner.suspend(|| {
                    for item in items {
                        println!("{}", output::format_item(item));
                    }
                });
            })
            .await;
            spinner.finish_and_clear();
            let summary = summary?;

            if summary.empty {
                println!("{}", EMPTY_STATE);
            } else if summary.truncated {
                println!("\n{}件（{}ページ、続きあり）", summary.items, summary.pages);
            } else {
                println!("\n{}件（{}ページ）", summary.items, summary.pages);
            }
        }

        Commands::New { text, file } => {
            let contents = match (text, file) {
                (Some(text), _) => text,
                (None, Some(path)) => std::fs::read_to_string(&path)
                    .with_context(|| format!("読み込めません: {}", path.display()))?,
                (None, None) => String::new(),
            };
            let text = NewText::new(contents).map_err(error::ShareBoardError::from)?;

            let api = ApiClient::new(&server_url, Duration::from_secs(config.timeout_seconds))?;
            let created = match api.create_text(&text).await {
                Ok(created) => created,
                Err(e) => {
                    eprintln!("✘ {}", TEXT_FAILED);
                    return Err(e.into());
                }
            };
            println!("✔ {}", TEXT_DONE);
            println!("  ID: {}", created.id);
            println!("  {}{}", api.base_url(), routes::viewer_href(&created.id));
        }

        Commands::Delete { id, yes } => {
            let api = ApiClient::new(&server_url, Duration::from_secs(config.timeout_seconds))?;
            let id = ContentId::new(id);

            let confirmed = yes
                || Confirm::new()
                    .with_prompt(format!("{} ({})", DELETE_CONFIRM, id))
                    .default(false)
                    .interact()
                    .map_err(error::ShareBoardError::from)?;
            if !confirmed {
                return Err(error::ShareBoardError::DeleteCancelled.into());
            }

            if let Err(e) = api.delete(&id).await {
                eprintln!("✘ {}", DELETE_FAILED);
                return Err(e.into());
            }
            println!("✔ {}", DELETE_DONE);
        }

        Commands::Config { set_server, show } => {
            if let Some(url) = set_server {
                config.set_server_url(url)?;
                config.save()?;
                println!("✔ サーバーURLを設定しました");
            }

            if show {
                println!("設定:");
                println!("  サーバーURL: {}", config.server_url());
                println!("  タイムアウト: {}秒", config.timeout_seconds);
                match config.page_limit {
                    Some(limit) => println!("  ページ上限: {}", limit),
                    None => println!("  ページ上限: なし"),
                }
                if let Ok(path) = Config::config_path() {
                    println!("  設定ファイル: {}", path.display());
                }
            }
        }
    }

    Ok(())
}
