//! 結果表示のビューモデル
//!
//! 結果の有無・件数・現在の科目名だけから表示内容を決める純粋関数。

use crate::messages;
use crate::multipart::format_number;
use crate::types::Candidate;
use serde_json::Value;

/// 欠損セルの表示
pub const MISSING_CELL: &str = "-";

/// 画面の状態
#[derive(Debug, Clone, PartialEq)]
pub enum View {
    /// 入力フォーム
    Form {
        submit_label: &'static str,
        submit_disabled: bool,
    },
    /// 結果0件
    NoMatches { message: &'static str },
    /// 結果テーブル
    Table(ResultTable),
}

impl View {
    /// 結果画面（0件を含む）の見出し
    pub fn heading(&self) -> Option<&'static str> {
        match self {
            View::Form { .. } => None,
            View::NoMatches { .. } | View::Table(_) => Some(messages::RESULTS_HEADING),
        }
    }

    /// 「戻る」ボタンのラベル（結果画面のみ）
    pub fn back_label(&self) -> Option<&'static str> {
        self.heading().map(|_| messages::BACK_LABEL)
    }
}

/// 結果テーブル
#[derive(Debug, Clone, PartialEq)]
pub struct ResultTable {
    pub headers: [String; 4],
    pub rows: Vec<[String; 4]>,
}

/// 表示内容を生成
///
/// # Arguments
/// * `results` - 未送信なら`None`
/// * `subject` - 現在の科目名（評点列の見出しに使う）
/// * `loading` - 送信中か
pub fn render(results: Option<&[Candidate]>, subject: &str, loading: bool) -> View {
    match results {
        None => View::Form {
            submit_label: if loading {
                messages::SUBMIT_LOADING_LABEL
            } else {
                messages::SUBMIT_LABEL
            },
            submit_disabled: loading,
        },
        Some([]) => View::NoMatches {
            message: messages::NO_MATCHES,
        },
        Some(candidates) => View::Table(ResultTable {
            headers: table_headers(subject),
            rows: candidates.iter().map(row_cells).collect(),
        }),
    }
}

pub fn table_headers(subject: &str) -> [String; 4] {
    [
        "Nombre".to_string(),
        "Puntaje".to_string(),
        "Semestre".to_string(),
        format!("Nota en {}", subject),
    ]
}

/// 1行分のセル（名前, 点数, 学期, 評点）
pub fn row_cells(candidate: &Candidate) -> [String; 4] {
    [
        &candidate.name,
        &candidate.score,
        &candidate.semester,
        &candidate.grade_in_subject,
    ]
    .map(|value| value_cell(value.as_ref()))
}

/// 文字列と数値はそのまま、それ以外は`-`
fn value_cell(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(text)) => text.clone(),
        Some(Value::Number(number)) => match number.as_i64() {
            Some(integer) => integer.to_string(),
            None => number
                .as_f64()
                .map(format_number)
                .unwrap_or_else(|| number.to_string()),
        },
        _ => MISSING_CELL.to_string(),
    }
}
