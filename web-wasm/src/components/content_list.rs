//! コンテンツ一覧コンポーネント
//!
//! 無限スクロールで `/api/contents` をページ単位に読み込み、行を追記する。
//! 検索語・種別フィルタが変わったら先頭ページから読み直す。

use std::collections::BTreeSet;

use leptos::prelude::*;
use leptos::task::spawn_local;
use share_board_common::{
    ContentFilter, ContentId, ContentRow, PageLoader, PageOutcome, DELETE_CONFIRM,
    DELETE_DONE, DELETE_FAILED, EMPTY_STATE,
};

use crate::api;
use crate::components::search_bar::SearchBar;
use crate::dom;

/// 一覧の状態
///
/// ページング状態は `PageLoader` に閉じ込め、外からは `load_contents` と
/// `reset_and_reload` だけを呼ぶ。
#[derive(Clone, Copy)]
pub struct ListState {
    loader: StoredValue<PageLoader>,
    rows: RwSignal<Vec<ContentRow>>,
    empty: RwSignal<bool>,
    loading: RwSignal<bool>,
    kinds: RwSignal<BTreeSet<String>>,
    pub query: RwSignal<String>,
    pub kind: RwSignal<String>,
}

impl ListState {
    pub fn new() -> Self {
        Self {
            loader: StoredValue::new(PageLoader::new()),
            rows: RwSignal::new(Vec::new()),
            empty: RwSignal::new(false),
            loading: RwSignal::new(false),
            kinds: RwSignal::new(BTreeSet::from(["text".to_string()])),
            query: RwSignal::new(String::new()),
            kind: RwSignal::new(String::new()),
        }
    }

    /// 次のページを読み込む（読込中・終端なら何もしない）
    pub fn load_contents(self) {
        let filter = ContentFilter::new(self.query.get_untracked(), self.kind.get_untracked());
        let Some(ticket) = self.loader.try_update_value(|l| l.begin(filter)).flatten() else {
            return;
        };
        self.loading.set(true);

        spawn_local(async move {
            match api::fetch_contents(ticket.query()).await {
                Ok(items) => {
                    let outcome = self.loader.try_update_value(|l| l.complete(&ticket, items));
                    match outcome {
                        Some(PageOutcome::Rows { items, .. }) => {
                            self.kinds.update(|kinds| {
                                kinds.extend(items.iter().map(|i| i.kind.as_str().to_string()));
                            });
                            self.rows
                                .update(|rows| rows.extend(items.iter().map(ContentRow::from)));
                        }
                        Some(PageOutcome::Empty) => {
                            self.rows.set(Vec::new());
                            self.empty.set(true);
                        }
                        Some(PageOutcome::Stale) | None => return,
                    }
                }
                Err(e) => {
                    let current = self.loader.try_update_value(|l| l.fail(&ticket));
                    if current != Some(true) {
                        return;
                    }
                    gloo::console::error!(format!("コンテンツ読込失敗: {}", e));
                }
            }
            self.sync_loading();
        });
    }

    /// 検索語・フィルタ変更: 状態を初期化して先頭ページを読み直す
    pub fn reset_and_reload(self) {
        self.loader.update_value(|l| l.reset());
        self.rows.set(Vec::new());
        self.empty.set(false);
        self.sync_loading();
        self.load_contents();
    }

    fn sync_loading(self) {
        let loading = self.loader.with_value(|l| l.is_loading());
        self.loading.set(loading);
    }

    pub fn kinds(self) -> Signal<Vec<String>> {
        let kinds = self.kinds;
        Signal::derive(move || kinds.get().into_iter().collect())
    }
}

impl Default for ListState {
    fn default() -> Self {
        Self::new()
    }
}

/// 削除ボタン: 確認 → DELETE → 成功ならページ再読込
fn delete_row(id: ContentId) {
    if !gloo::dialogs::confirm(DELETE_CONFIRM) {
        return;
    }
    spawn_local(async move {
        match api::delete_content(&id).await {
            Ok(()) => {
                gloo::dialogs::alert(DELETE_DONE);
                dom::reload_page();
            }
            Err(e) => {
                gloo::console::error!(format!("削除失敗 {}: {}", id, e));
                gloo::dialogs::alert(DELETE_FAILED);
            }
        }
    });
}

#[component]
pub fn ContentList() -> impl IntoView {
    let state = ListState::new();

    // スクロールで次ページ
    let scroll_handle = window_event_listener(leptos::ev::scroll, move |_| {
        if dom::scrolled_near_bottom() {
            state.load_contents();
        }
    });
    on_cleanup(move || scroll_handle.remove());

    // 初回読込
    state.load_contents();

    view! {
        <section class="content-board">
            <SearchBar
                query=state.query
                kind=state.kind
                kinds=state.kinds()
                on_change=move || state.reset_and_reload()
            />

            <div id="content-list" class="content-list">
                <Show
                    when=move || !state.empty.get()
                    fallback=|| view! { <p class="empty-state">{EMPTY_STATE}</p> }
                >
                    <For
                        each=move || state.rows.get().into_iter().enumerate()
                        key=|(index, row)| (*index, row.id.clone())
                        children=|(_, row)| view! { <ContentRowView row=row /> }
                    />
                </Show>
            </div>

            <Show when=move || state.loading.get()>
                <div id="loading-spinner" class="loading-spinner">"読み込み中..."</div>
            </Show>
        </section>
    }
}

#[component]
fn ContentRowView(row: ContentRow) -> impl IntoView {
    let ContentRow {
        id,
        kind_label,
        href,
        title,
    } = row;
    let data_id = id.to_string();

    view! {
        <div class="content-row">
            <div class="content-main">
                <span class="content-kind">{kind_label}</span>
                <a href=href class="content-link">{title}</a>
            </div>
            <button
                class="delete-btn"
                data-id=data_id
                title="削除"
                on:click=move |_| delete_row(id.clone())
            >
                "削除"
            </button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::task::Executor;
    use share_board_common::{ContentItem, ContentKind};
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn item(id: &str) -> ContentItem {
        ContentItem {
            id: ContentId::new(id),
            kind: ContentKind::Text,
            preview: format!("memo {}", id),
            modified: None,
        }
    }

    #[wasm_bindgen_test]
    fn test_reset_and_reload_clears_rows_and_starts_page_zero() {
        let _ = Executor::init_wasm_bindgen();
        let owner = Owner::new();
        owner.with(|| {
            let state = ListState::new();

            // 短いページまで読み終えた状態
            let loaded = vec![item("1"), item("2"), item("3")];
            state.loader.update_value(|l| {
                if let Some(ticket) = l.begin(ContentFilter::default()) {
                    l.complete(&ticket, loaded.clone());
                }
            });
            state.rows.set(loaded.iter().map(ContentRow::from).collect());
            state.empty.set(true);
            assert!(state.loader.with_value(|l| l.is_exhausted()));

            state.query.set("report".to_string());
            state.reset_and_reload();

            assert!(state.rows.get_untracked().is_empty());
            assert!(!state.empty.get_untracked());
            assert!(state.loading.get_untracked());
            state.loader.with_value(|l| {
                assert!(l.is_loading());
                assert!(!l.is_exhausted());
                assert_eq!(l.page(), 0);
            });

            // 読込中は2回目の取得を始めない
            state.load_contents();
            let second = state
                .loader
                .try_update_value(|l| l.begin(ContentFilter::default()))
                .flatten();
            assert!(second.is_none());
        });
    }
}
