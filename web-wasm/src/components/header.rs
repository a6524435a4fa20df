//! ヘッダーコンポーネント

use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="header">
            <h1><a href="/">"Share Board"</a></h1>
            <nav class="header-nav">
                <a href="/">"一覧"</a>
                <a href="/new">"テキスト登録"</a>
                <a href="/upload">"アップロード"</a>
            </nav>
        </header>
    }
}
