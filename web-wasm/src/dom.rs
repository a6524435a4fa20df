//! window/document まわりの小物

use share_board_common::near_bottom;

/// 現在のパス（取得できなければ "/"）
pub fn current_path() -> String {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

/// ビューポート下端がドキュメント下端に近いか
pub fn scrolled_near_bottom() -> bool {
    let Some(window) = web_sys::window() else {
        return false;
    };
    let scroll_top = window.scroll_y().unwrap_or(0.0);
    let viewport_height = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    let document_height = window
        .document()
        .and_then(|d| d.document_element())
        .map(|el| f64::from(el.scroll_height()))
        .unwrap_or(0.0);

    near_bottom(scroll_top, viewport_height, document_height)
}

/// ページ全体を再読込
pub fn reload_page() {
    if let Some(window) = web_sys::window() {
        if let Err(e) = window.location().reload() {
            gloo::console::error!(format!("reload failed: {:?}", e));
        }
    }
}

/// 指定パスへ遷移
pub fn navigate(href: &str) {
    if let Some(window) = web_sys::window() {
        if let Err(e) = window.location().set_href(href) {
            gloo::console::error!(format!("navigate failed: {:?}", e));
        }
    }
}
