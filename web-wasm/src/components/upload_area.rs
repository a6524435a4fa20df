//! アップロードエリアコンポーネント
//!
//! ドロップされたファイルはそのままファイル入力に流し込み、
//! 送信はネイティブのフォーム送信に任せる。

use leptos::html;
use leptos::prelude::*;
use share_board_common::{file_label, routes, DragPhase, DropZone};
use web_sys::DragEvent;

#[component]
pub fn UploadArea() -> impl IntoView {
    let file_input: NodeRef<html::Input> = NodeRef::new();
    let zone = RwSignal::new(DropZone::new());
    let (label, set_label) = signal(file_label(None));

    // 入力欄の先頭ファイル名でラベルを更新
    let update_file_name = move || {
        let name = file_input
            .get()
            .and_then(|input| input.files())
            .and_then(|files| files.get(0))
            .map(|file| file.name());
        set_label.set(file_label(name.as_deref()));
    };

    let on_drag = move |ev: DragEvent, phase: DragPhase| {
        ev.prevent_default();
        ev.stop_propagation();
        zone.update(|z| {
            z.apply(phase);
        });
    };

    let on_drop = move |ev: DragEvent| {
        on_drag(ev.clone(), DragPhase::Drop);

        let files = ev.data_transfer().and_then(|dt| dt.files());
        if let (Some(files), Some(input)) = (files, file_input.get()) {
            input.set_files(Some(&files));
        }
        update_file_name();
    };

    view! {
        <form
            class="upload-form"
            action=routes::UPLOAD_PATH
            method="post"
            enctype="multipart/form-data"
        >
            <label
                for="file-input"
                id="drag-area"
                class=move || {
                    if zone.get().is_active() {
                        "upload-area drag-area-active"
                    } else {
                        "upload-area"
                    }
                }
                on:dragenter=move |ev: DragEvent| on_drag(ev, DragPhase::Enter)
                on:dragover=move |ev: DragEvent| on_drag(ev, DragPhase::Over)
                on:dragleave=move |ev: DragEvent| on_drag(ev, DragPhase::Leave)
                on:drop=on_drop
            >
                <div class="upload-icon">"📄"</div>
                <p id="file-name-display">{move || label.get()}</p>
            </label>
            <input
                type="file"
                id="file-input"
                name="file"
                class="hidden"
                node_ref=file_input
                on:change=move |_| update_file_name()
            />
            <button type="submit" class="btn btn-primary">"アップロード"</button>
        </form>
    }
}
