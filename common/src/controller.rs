//! フォームの状態管理
//!
//! ファイル選択・選考条件・送信中フラグ・結果を1つの構造体で持ち、
//! 画面側のイベントをメソッドとして受け取る。I/Oは行わない。

use crate::error::{Error, Result};
use crate::messages;
use crate::multipart::{form_parts, FormPart};
use crate::render::{render, View};
use crate::types::{Candidate, Field, FilterCriteria};

/// ユーザーに表示するアラート
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alert {
    /// ファイル未選択
    MissingFiles,
    /// 送信・パース失敗
    SubmitFailed,
    /// 数値欄が数値として読めない（画面の値と送信値が食い違うため送信しない）
    InvalidNumber(Field),
}

impl Alert {
    pub fn message(&self) -> &'static str {
        match self {
            Alert::MissingFiles => messages::ALERT_MISSING_FILES,
            Alert::SubmitFailed => messages::ALERT_SUBMIT_FAILED,
            Alert::InvalidNumber(Field::MinSemester) => messages::ALERT_INVALID_SEMESTER,
            Alert::InvalidNumber(_) => messages::ALERT_INVALID_GRADE,
        }
    }
}

/// `submit()`の結果
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitAction<F> {
    /// 送信しない（アラート表示）
    Rejected(Alert),
    /// 送信中のため何もしない
    Ignored,
    /// このパート列で1回だけ送信する
    Send(Vec<FormPart<F>>),
}

/// フォームコントローラ
#[derive(Debug, Clone)]
pub struct FormController<F> {
    files: Vec<F>,
    criteria: FilterCriteria,
    /// 直近の入力がパースできなかった数値欄
    invalid: Vec<Field>,
    loading: bool,
    results: Option<Vec<Candidate>>,
}

impl<F> Default for FormController<F> {
    fn default() -> Self {
        Self {
            files: Vec::new(),
            criteria: FilterCriteria::default(),
            invalid: Vec::new(),
            loading: false,
            results: None,
        }
    }
}

impl<F> FormController<F> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_criteria(criteria: FilterCriteria) -> Self {
        Self {
            criteria,
            ..Self::default()
        }
    }

    pub fn files(&self) -> &[F] {
        &self.files
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// 直近の成功した送信結果（未送信なら`None`）
    pub fn results(&self) -> Option<&[Candidate]> {
        self.results.as_deref()
    }

    /// 直近の入力がパースできず、保持値と画面表示が食い違っている欄か
    pub fn is_invalid(&self, field: Field) -> bool {
        self.invalid.contains(&field)
    }

    /// フォームを表示すべきか（結果が無いときだけ`true`）
    pub fn shows_form(&self) -> bool {
        self.results.is_none()
    }

    /// ファイル選択を丸ごと置き換える
    pub fn set_files(&mut self, files: Vec<F>) {
        self.files = files;
    }

    /// 選考条件を1項目更新
    ///
    /// 数値項目はテキストをパースする。範囲の丸めは行わない。
    /// パースできない場合は直前の値を保持してエラーを返し、その欄が
    /// 正しく入力し直されるまで送信を拒否する。
    pub fn set_field(&mut self, field: Field, value: &str) -> Result<()> {
        let result = self.apply_field(field, value);
        self.invalid.retain(|f| *f != field);
        if result.is_err() {
            self.invalid.push(field);
        }
        result
    }

    fn apply_field(&mut self, field: Field, value: &str) -> Result<()> {
        match field {
            Field::Subject => self.criteria.subject = value.to_string(),
            Field::Career => self.criteria.career = value.to_string(),
            Field::MinSemester => {
                self.criteria.min_semester = value
                    .trim()
                    .parse::<i64>()
                    .map_err(|_| invalid_number(field, value))?;
            }
            Field::MinGrade => {
                let grade = value
                    .trim()
                    .parse::<f64>()
                    .map_err(|_| invalid_number(field, value))?;
                if !grade.is_finite() {
                    return Err(invalid_number(field, value));
                }
                self.criteria.min_grade = grade;
            }
        }
        Ok(())
    }

    /// 送信開始
    ///
    /// ファイルが無ければアラート、送信中なら無視。それ以外は送信中に
    /// 遷移して送信すべきパート列を返す。
    pub fn submit(&mut self) -> SubmitAction<F>
    where
        F: Clone,
    {
        if self.loading {
            log::debug!("submit ignored: request already in flight");
            return SubmitAction::Ignored;
        }
        if self.files.is_empty() {
            return SubmitAction::Rejected(Alert::MissingFiles);
        }
        if let Some(&field) = self.invalid.first() {
            return SubmitAction::Rejected(Alert::InvalidNumber(field));
        }

        self.loading = true;
        log::info!(
            "submitting {} file(s) for subject {:?}",
            self.files.len(),
            self.criteria.subject
        );
        SubmitAction::Send(form_parts(&self.files, &self.criteria))
    }

    /// 送信完了
    ///
    /// 成功時は結果を置き換え、失敗時は結果を変えずにアラートを返す。
    /// どちらの場合も送信中フラグは解除される。
    pub fn complete(&mut self, outcome: Result<Vec<Candidate>>) -> Option<Alert> {
        if !self.loading {
            log::warn!("completion received with no request in flight; ignored");
            return None;
        }
        self.loading = false;

        match outcome {
            Ok(candidates) => {
                log::info!("received {} candidate(s)", candidates.len());
                self.results = Some(candidates);
                None
            }
            Err(e) => {
                log::error!("processing failed: {}", e);
                Some(Alert::SubmitFailed)
            }
        }
    }

    /// フォームへ戻る
    ///
    /// 選考条件は保持し、ファイル選択はクリアする（ファイル入力欄は
    /// 再表示時に空になるため）。数値欄は保持値で描き直されるので
    /// 不正入力の記録も消す。
    pub fn reset(&mut self) {
        self.results = None;
        self.files.clear();
        self.invalid.clear();
    }

    /// 現在の状態から表示内容を生成
    pub fn view(&self) -> View {
        render(self.results(), &self.criteria.subject, self.loading)
    }
}

fn invalid_number(field: Field, value: &str) -> Error {
    Error::InvalidNumber {
        field: field.form_name(),
        value: value.to_string(),
    }
}
