//! コンテンツ一覧・投稿・削除API
//!
//! どれも一発勝負のリクエスト。リトライもタイムアウトもしない。

use share_board_common::{
    routes, ApiErrorBody, ContentId, ContentItem, ContentQuery, CreatedContent, Error, NewText,
    Result,
};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

fn transport(e: JsValue) -> Error {
    Error::Transport(e.as_string().unwrap_or_else(|| format!("{:?}", e)))
}

/// 同一オリジンへリクエストを送り、レスポンスを返す（ステータスは見ない）
async fn send(method: &str, url: &str, json_body: Option<String>) -> Result<Response> {
    let opts = RequestInit::new();
    opts.set_method(method);
    opts.set_mode(RequestMode::SameOrigin);
    if let Some(body) = &json_body {
        opts.set_body(&JsValue::from_str(body));
    }

    let request = Request::new_with_str_and_init(url, &opts).map_err(transport)?;
    let headers = request.headers();
    headers.set("Accept", "application/json").map_err(transport)?;
    if json_body.is_some() {
        headers.set("Content-Type", "application/json").map_err(transport)?;
    }

    let window = web_sys::window().ok_or_else(|| Error::Transport("window not available".into()))?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(transport)?;
    resp_value.dyn_into::<Response>().map_err(transport)
}

async fn body_text(resp: &Response) -> Result<String> {
    let text = JsFuture::from(resp.text().map_err(transport)?)
        .await
        .map_err(transport)?;
    text.as_string()
        .ok_or_else(|| Error::Transport("response body is not text".into()))
}

/// 2xx以外はHTTPエラー
fn ensure_ok(resp: &Response) -> Result<()> {
    match Error::from_status(resp.status()) {
        Some(err) => Err(err),
        None => Ok(()),
    }
}

/// `/api/contents` のレスポンス本文を解釈
pub fn parse_items(body: &str) -> Result<Vec<ContentItem>> {
    Ok(serde_json::from_str(body)?)
}

/// 1ページ分の一覧を取得
pub async fn fetch_contents(query: &ContentQuery) -> Result<Vec<ContentItem>> {
    let resp = send("GET", &query.to_path(), None).await?;
    ensure_ok(&resp)?;
    parse_items(&body_text(&resp).await?)
}

/// コンテンツを削除（本文は使わない）
pub async fn delete_content(id: &ContentId) -> Result<()> {
    let resp = send("DELETE", &routes::delete_path(id), None).await?;
    ensure_ok(&resp)
}

/// テキストを投稿
///
/// 失敗時はサーバーの `{"error": ...}` があればそれを返す。
pub async fn create_text(text: &NewText) -> std::result::Result<CreatedContent, String> {
    let resp = send("POST", routes::NEW_TEXT_PATH, Some(text.to_json().map_err(|e| e.to_string())?))
        .await
        .map_err(|e| e.to_string())?;
    let body = body_text(&resp).await.map_err(|e| e.to_string())?;

    if let Err(e) = ensure_ok(&resp) {
        return Err(ApiErrorBody::message_from(&body).unwrap_or_else(|| e.to_string()));
    }
    serde_json::from_str(&body).map_err(|e| Error::Json(e).to_string())
}
