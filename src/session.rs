//! フォーム送信フロー（対話モード含む）

use crate::client::ProcessCvsClient;
use crate::error::{MonitorSelectorError, Result};
use crate::scanner::{collect_documents, DocumentFile};
use crate::table::format_view;
use dialoguer::{Confirm, Input};
use indicatif::{ProgressBar, ProgressStyle};
use monitor_selector_common::messages::{APP_TITLE, BACK_LABEL, FILES_LABEL};
use monitor_selector_common::multipart::field_text;
use monitor_selector_common::{Alert, Field, FormController, SubmitAction};
use std::path::PathBuf;
use std::time::Duration;

/// 送信を1回実行し、表示すべきアラートを返す
///
/// ファイル未選択なら通信せずに`MissingFiles`、送信中なら何もしない。
pub async fn submit(
    controller: &mut FormController<DocumentFile>,
    client: &ProcessCvsClient,
) -> Option<Alert> {
    let parts = match controller.submit() {
        SubmitAction::Rejected(alert) => return Some(alert),
        SubmitAction::Ignored => return None,
        SubmitAction::Send(parts) => parts,
    };

    let spinner = loading_spinner();
    let outcome = client.process(&parts).await;
    spinner.finish_and_clear();

    controller.complete(outcome)
}

fn loading_spinner() -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner} {msg}") {
        spinner.set_style(style);
    }
    spinner.set_message(monitor_selector_common::messages::SUBMIT_LOADING_LABEL);
    spinner.enable_steady_tick(Duration::from_millis(120));
    spinner
}

/// 対話モード
///
/// フォーム入力 → 送信 → 結果表示 → 「戻る」でフォームへ、を繰り返す。
pub async fn run_form_session(
    controller: &mut FormController<DocumentFile>,
    client: &ProcessCvsClient,
) -> Result<()> {
    println!("{}\n", APP_TITLE);

    loop {
        prompt_files(controller)?;
        for field in Field::ALL {
            prompt_field(controller, field)?;
        }

        if let Some(alert) = submit(controller, client).await {
            eprintln!("⚠ {}\n", alert.message());
            continue;
        }

        println!("\n{}", format_view(&controller.view()));

        let back = Confirm::new()
            .with_prompt(BACK_LABEL)
            .default(true)
            .interact()
            .map_err(|e| MonitorSelectorError::Prompt(e.to_string()))?;
        if !back {
            return Ok(());
        }
        controller.reset();
        println!();
    }
}

fn prompt_files(controller: &mut FormController<DocumentFile>) -> Result<()> {
    let input: String = Input::new()
        .with_prompt(format!("{} (rutas separadas por comas)", FILES_LABEL))
        .allow_empty(true)
        .interact_text()
        .map_err(|e| MonitorSelectorError::Prompt(e.to_string()))?;

    let paths: Vec<PathBuf> = input
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(PathBuf::from)
        .collect();

    let documents = match collect_documents(&paths) {
        Ok(documents) => documents,
        Err(e) => {
            eprintln!("✖ {}", e);
            Vec::new()
        }
    };
    println!("✔ {} archivo(s) .docx", documents.len());
    controller.set_files(documents);
    Ok(())
}

fn prompt_field(controller: &mut FormController<DocumentFile>, field: Field) -> Result<()> {
    loop {
        let current = field_text(controller.criteria(), field);
        let input: String = Input::new()
            .with_prompt(field.label().trim_end_matches(':'))
            .default(current)
            .interact_text()
            .map_err(|e| MonitorSelectorError::Prompt(e.to_string()))?;

        match controller.set_field(field, &input) {
            Ok(()) => return Ok(()),
            Err(e) => eprintln!("✖ {}", e),
        }
    }
}
