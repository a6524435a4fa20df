//! テキスト登録コンポーネント

use leptos::prelude::*;
use leptos::task::spawn_local;
use share_board_common::{routes, NewText, TEXT_DONE, TEXT_FAILED};

use crate::api;
use crate::dom;

#[component]
pub fn NewTextForm() -> impl IntoView {
    let (contents, set_contents) = signal(String::new());
    let (status, set_status) = signal(String::new());
    let (submitting, set_submitting) = signal(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }

        // 空白だけ・5MB超はここで弾く
        let text = match NewText::new(contents.get_untracked()) {
            Ok(text) => text,
            Err(e) => {
                set_status.set(e.to_string());
                return;
            }
        };

        set_submitting.set(true);
        set_status.set(String::new());
        spawn_local(async move {
            match api::create_text(&text).await {
                Ok(created) => {
                    gloo::dialogs::alert(TEXT_DONE);
                    dom::navigate(&routes::viewer_href(&created.id));
                }
                Err(message) => {
                    gloo::console::error!(format!("テキスト登録失敗: {}", message));
                    set_status.set(format!("{} {}", TEXT_FAILED, message));
                }
            }
            set_submitting.set(false);
        });
    };

    view! {
        <form class="new-text-form" on:submit=on_submit>
            <textarea
                id="new-contents"
                rows="12"
                placeholder="共有するテキストを入力..."
                prop:value=move || contents.get()
                on:input=move |ev| set_contents.set(event_target_value(&ev))
            />
            <p class="form-status">{move || status.get()}</p>
            <button type="submit" class="btn btn-primary" disabled=move || submitting.get()>
                "登録"
            </button>
        </form>
    }
}
