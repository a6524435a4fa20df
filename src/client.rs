//! コンテンツAPIクライアント（reqwest）

use crate::config::validate_server_url;
use crate::error::{Result, ShareBoardError};
use share_board_common::{
    routes, ApiErrorBody, ContentId, ContentItem, ContentQuery, CreatedContent, NewText,
};
use std::time::Duration;

pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        validate_server_url(base_url)?;
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// 1ページ分の一覧を取得
    pub async fn list_page(&self, query: &ContentQuery) -> Result<Vec<ContentItem>> {
        let url = format!("{}{}", self.base_url, routes::LIST_PATH);
        tracing::debug!(page = query.page, q = %query.filter.q, kind = %query.filter.kind, "GET {}", url);

        let resp = self.http.get(&url).query(&query.pairs()).send().await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(ShareBoardError::Http {
                method: "GET",
                path: query.to_path(),
                status: status.as_u16(),
            });
        }

        let body = resp.text().await?;
        let items: Vec<ContentItem> = serde_json::from_str(&body)?;
        tracing::debug!(count = items.len(), "page {} loaded", query.page);
        Ok(items)
    }

    /// コンテンツを削除
    pub async fn delete(&self, id: &ContentId) -> Result<()> {
        let path = routes::delete_path(id);
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!("DELETE {}", url);

        let resp = self.http.delete(&url).send().await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(ShareBoardError::Http {
                method: "DELETE",
                path,
                status: status.as_u16(),
            });
        }
        Ok(())
    }

    /// テキストを投稿し、発行されたIDを返す
    pub async fn create_text(&self, text: &NewText) -> Result<CreatedContent> {
        let url = format!("{}{}", self.base_url, routes::NEW_TEXT_PATH);
        tracing::debug!(bytes = text.contents().len(), "POST {}", url);

        let resp = self.http.post(&url).json(text).send().await?;
        let status = resp.status();
        let body = resp.text().await?;
        if !status.is_success() {
            return Err(match ApiErrorBody::message_from(&body) {
                Some(message) => ShareBoardError::Rejected {
                    status: status.as_u16(),
                    message,
                },
                None => ShareBoardError::Http {
                    method: "POST",
                    path: routes::NEW_TEXT_PATH.to_string(),
                    status: status.as_u16(),
                },
            });
        }

        Ok(serde_json::from_str(&body)?)
    }
}
