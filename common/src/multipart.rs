//! 送信用multipartフィールドの組み立て
//!
//! ブラウザ(FormData)とCLI(reqwest)の双方がこのパート列をそのまま
//! 自分のトランスポートへ書き写す。

use crate::types::{Field, FilterCriteria};

/// スコアリングサービスの固定エンドポイント
pub const PROCESS_CVS_URL: &str = "http://localhost:8000/process-cvs";

/// ファイルパートのフィールド名（繰り返し）
pub const FILES_FIELD: &str = "files";

/// ファイル選択で受け付ける拡張子
pub const DOCX_ACCEPT: &str = ".docx";

pub const DOCX_MIME: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

/// multipartの1パート
#[derive(Debug, Clone, PartialEq)]
pub enum FormPart<F> {
    File { name: &'static str, file: F },
    Text { name: &'static str, value: String },
}

impl<F> FormPart<F> {
    pub fn name(&self) -> &'static str {
        match self {
            FormPart::File { name, .. } | FormPart::Text { name, .. } => name,
        }
    }
}

/// ファイル群と選考条件からパート列を組み立てる
///
/// ファイルが先、続いて`subject`, `min_semester`, `career`, `min_grade`の順。
pub fn form_parts<F: Clone>(files: &[F], criteria: &FilterCriteria) -> Vec<FormPart<F>> {
    let mut parts: Vec<FormPart<F>> = files
        .iter()
        .map(|file| FormPart::File {
            name: FILES_FIELD,
            file: file.clone(),
        })
        .collect();

    for field in Field::ALL {
        parts.push(FormPart::Text {
            name: field.form_name(),
            value: field_text(criteria, field),
        });
    }

    parts
}

/// 項目値をテキストとして取り出す
pub fn field_text(criteria: &FilterCriteria, field: Field) -> String {
    match field {
        Field::Subject => criteria.subject.clone(),
        Field::MinSemester => criteria.min_semester.to_string(),
        Field::Career => criteria.career.clone(),
        Field::MinGrade => format_number(criteria.min_grade),
    }
}

/// 数値を最短の10進表記に変換（4.0 → "4", 4.5 → "4.5"）
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        // -0.0 も "0"
        return "0".to_string();
    }
    format!("{}", value)
}

/// ファイル名が.docxかどうか（大文字小文字を区別しない）
pub fn is_docx(file_name: &str) -> bool {
    file_name.to_lowercase().ends_with(DOCX_ACCEPT)
}
