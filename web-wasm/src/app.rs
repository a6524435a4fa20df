//! メインアプリケーションコンポーネント

use leptos::prelude::*;

use crate::components::{
    content_list::ContentList, header::Header, new_text::NewTextForm, upload_area::UploadArea,
};
use crate::dom;

/// 表示するページ
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Page {
    /// 一覧（無限スクロール・検索・削除）
    Index,
    /// テキスト登録
    New,
    /// アップロード
    Upload,
}

impl Page {
    pub fn from_path(path: &str) -> Self {
        match path.trim_end_matches('/') {
            "/new" => Page::New,
            "/upload" => Page::Upload,
            _ => Page::Index,
        }
    }
}

/// メインアプリケーションコンポーネント
#[component]
pub fn App() -> impl IntoView {
    let page = Page::from_path(&dom::current_path());

    view! {
        <div class="container">
            <Header />
            {match page {
                Page::Index => view! { <ContentList /> }.into_any(),
                Page::New => view! { <NewTextForm /> }.into_any(),
                Page::Upload => view! { <UploadArea /> }.into_any(),
            }}
        </div>
    }
}
