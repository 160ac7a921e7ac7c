//! FormData組み立てテスト（ブラウザで実行）

#![cfg(target_arch = "wasm32")]

use js_sys::Array;
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;
use web_sys::File;
use monitor_selector_common::{form_parts, FilterCriteria};
use monitor_selector_wasm::api::build_form_data;

wasm_bindgen_test_configure!(run_in_browser);

fn docx(name: &str) -> File {
    let content = Array::of1(&JsValue::from_str("PK"));
    File::new_with_str_sequence(&content, name).expect("File生成失敗")
}

#[wasm_bindgen_test]
fn test_files_are_repeated_parts() {
    let files = vec![docx("ana.docx"), docx("luis.docx")];
    let form = build_form_data(&form_parts(&files, &FilterCriteria::default()))
        .expect("FormData生成失敗");

    assert_eq!(form.get_all("files").length(), 2);
}

#[wasm_bindgen_test]
fn test_numbers_are_text_encoded() {
    let files = vec![docx("ana.docx")];
    let form = build_form_data(&form_parts(&files, &FilterCriteria::default()))
        .expect("FormData生成失敗");

    assert_eq!(form.get("subject").as_string().as_deref(), Some("Cálculo I"));
    assert_eq!(form.get("min_semester").as_string().as_deref(), Some("5"));
    assert_eq!(form.get("career").as_string().as_deref(), Some("Ingeniería de Sistemas"));
    assert_eq!(form.get("min_grade").as_string().as_deref(), Some("4"));
}
