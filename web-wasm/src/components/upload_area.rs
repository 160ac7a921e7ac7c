//! ファイル選択コンポーネント

use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use web_sys::{Event, File, FileList, HtmlInputElement};
use monitor_selector_common::messages::FILES_LABEL;
use monitor_selector_common::multipart::DOCX_ACCEPT;

#[component]
pub fn UploadArea<F>(on_files_selected: F) -> impl IntoView
where
    F: Fn(Vec<File>) + 'static + Clone,
{
    // 選択のたびに全件を渡す（前回分とはマージしない）
    let on_change = move |ev: Event| {
        let Some(input) = ev
            .target()
            .and_then(|t| t.dyn_into::<HtmlInputElement>().ok())
        else {
            return;
        };
        let files = input.files().map(collect_files).unwrap_or_default();
        on_files_selected(files);
    };

    view! {
        <div class="form-group upload-area">
            <label for="cv-files"><strong>{FILES_LABEL}</strong></label>
            <input
                type="file"
                id="cv-files"
                multiple=true
                accept=DOCX_ACCEPT
                on:change=on_change
            />
        </div>
    }
}

fn collect_files(list: FileList) -> Vec<File> {
    (0..list.length()).filter_map(|i| list.get(i)).collect()
}
