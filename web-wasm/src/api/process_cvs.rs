//! 履歴書一括送信（/process-cvs）
//!
//! FormPart列をFormDataへ書き写し、fetchで1回だけPOSTする。
//! リトライ・タイムアウト・キャンセルは行わない。

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{File, FormData, Request, RequestInit, RequestMode, Response};
use monitor_selector_common::{parse_response, Candidate, Error, FormPart};

/// パート列からFormDataを組み立てる
///
/// ファイルは`files`として繰り返し追加、数値項目は既にテキスト化済み。
pub fn build_form_data(parts: &[FormPart<File>]) -> Result<FormData, JsValue> {
    let form = FormData::new()?;
    for part in parts {
        match part {
            FormPart::File { name, file } => {
                form.append_with_blob_and_filename(name, file, &file.name())?;
            }
            FormPart::Text { name, value } => {
                form.append_with_str(name, value)?;
            }
        }
    }
    Ok(form)
}

/// fetch呼び出し（ステータスと本文を返す）
async fn post_form(url: &str, parts: &[FormPart<File>]) -> Result<(u16, String), JsValue> {
    let form = build_form_data(parts)?;

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);
    opts.set_body(&form);

    // Content-Typeはブラウザがboundary付きで設定する
    let request = Request::new_with_str_and_init(url, &opts)?;

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("window not available"))?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request)).await?;
    let resp: Response = resp_value.dyn_into()?;

    let body = JsFuture::from(resp.text()?).await?;
    Ok((resp.status(), body.as_string().unwrap_or_default()))
}

/// 履歴書と選考条件を送信し、候補者配列を受け取る
///
/// 通信失敗・2xx以外・JSONでない本文はすべて`Err`になる。
pub async fn process_cvs(url: &str, parts: &[FormPart<File>]) -> Result<Vec<Candidate>, Error> {
    let (status, body) = post_form(url, parts)
        .await
        .map_err(|e| Error::Transport(format!("{:?}", e)))?;
    parse_response(status, &body)
}
