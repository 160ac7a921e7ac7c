//! メインアプリケーションコンポーネント

use leptos::prelude::*;
use leptos::task::spawn_local;
use web_sys::{File, SubmitEvent};
use crate::api::process_cvs;
use crate::components::{
    criteria_panel::CriteriaPanel,
    header::Header,
    results_table::ResultsPanel,
    submit_button::SubmitButton,
    upload_area::UploadArea,
};
use monitor_selector_common::{Field, FormController, SubmitAction, View, PROCESS_CVS_URL};

/// アプリケーションの状態（web_sys::FileはSendでないためローカル保持）
type AppState = RwSignal<FormController<File>, LocalStorage>;

/// メインアプリケーションコンポーネント
#[component]
pub fn App() -> impl IntoView {
    let state: AppState = RwSignal::new_local(FormController::new());

    // フォーム/結果の切り替えは結果の有無だけで決まる
    let shows_form = Memo::new(move |_| state.with(|c| c.shows_form()));
    let current = Signal::derive(move || state.with(|c| c.view()));
    let criteria = Signal::derive(move || state.with(|c| c.criteria().clone()));
    let invalid = Signal::derive(move || {
        state.with(|c| Field::ALL.into_iter().filter(|f| c.is_invalid(*f)).collect::<Vec<_>>())
    });
    let loading = Signal::derive(move || state.with(|c| c.is_loading()));
    let submit_label = Signal::derive(move || match current.get() {
        View::Form { submit_label, .. } => submit_label,
        _ => "",
    });

    // ファイル選択ハンドラ
    let on_files_selected = move |files: Vec<File>| {
        state.update(|c| c.set_files(files));
    };

    // 入力ハンドラ（数値として読めない入力は欄を強調し、直るまで送信を拒否）
    let on_field_input = move |field: Field, value: String| {
        state.update(|c| {
            if let Err(e) = c.set_field(field, &value) {
                gloo::console::debug!(e.to_string());
            }
        });
    };

    // 送信ハンドラ
    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        submit(state);
    };

    // 戻るハンドラ
    let on_back = move |_| {
        state.update(|c| c.reset());
    };

    view! {
        <div class="container">
            <Header />

            {move || if shows_form.get() {
                view! {
                    <form class="cv-form" on:submit=on_submit>
                        <UploadArea on_files_selected=on_files_selected />
                        <CriteriaPanel criteria=criteria invalid=invalid on_field_input=on_field_input />
                        <SubmitButton label=submit_label disabled=loading />
                    </form>
                }
                .into_any()
            } else {
                view! { <ResultsPanel current=current on_back=on_back /> }.into_any()
            }}
        </div>
    }
}

/// 送信処理
///
/// ファイル未選択ならアラート、送信中なら何もしない。
fn submit(state: AppState) {
    let mut action = SubmitAction::Ignored;
    state.update(|c| action = c.submit());

    match action {
        SubmitAction::Rejected(alert) => gloo::dialogs::alert(alert.message()),
        SubmitAction::Ignored => {}
        SubmitAction::Send(parts) => spawn_local(async move {
            let outcome = process_cvs(PROCESS_CVS_URL, &parts).await;
            if let Err(e) = &outcome {
                gloo::console::error!(format!("process-cvs failed: {}", e));
            }

            let mut alert = None;
            state.update(|c| alert = c.complete(outcome));
            if let Some(alert) = alert {
                gloo::dialogs::alert(alert.message());
            }
        }),
    }
}
