//! データ型定義
//!
//! CLIとWeb(WASM)で共有される型:
//! - FilterCriteria: 選考条件（フォーム入力）
//! - Candidate: スコアリングサービスが返す候補者
//! - Field: フォーム項目の識別子

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// 選考条件（フォームの4項目）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterCriteria {
    /// 対象科目（例: "Cálculo I"）
    pub subject: String,
    /// 最低学期（1〜10）
    pub min_semester: i64,
    /// 対象学科
    pub career: String,
    /// 科目の最低評点（0.0〜5.0）
    pub min_grade: f64,
}

impl Default for FilterCriteria {
    fn default() -> Self {
        Self {
            subject: "Cálculo I".to_string(),
            min_semester: 5,
            career: "Ingeniería de Sistemas".to_string(),
            min_grade: 4.0,
        }
    }
}

/// フォーム項目
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Subject,
    MinSemester,
    Career,
    MinGrade,
}

impl Field {
    pub const ALL: [Field; 4] = [
        Field::Subject,
        Field::MinSemester,
        Field::Career,
        Field::MinGrade,
    ];

    /// multipartのフィールド名
    pub fn form_name(&self) -> &'static str {
        match self {
            Field::Subject => "subject",
            Field::MinSemester => "min_semester",
            Field::Career => "career",
            Field::MinGrade => "min_grade",
        }
    }

    /// 画面上のラベル
    pub fn label(&self) -> &'static str {
        match self {
            Field::Subject => "Materia requerida:",
            Field::MinSemester => "Semestre mínimo:",
            Field::Career => "Carrera requerida:",
            Field::MinGrade => "Nota mínima en la materia:",
        }
    }
}

/// 候補者（外部サービスの出力、読み取り専用）
///
/// 要素の形は検証しない。各フィールドは受け取ったJSON値をそのまま持ち、
/// 欠けている・`null`のものは`None`。表示時の整形は`render`が行う。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Candidate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub semester: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grade_in_subject: Option<Value>,
}

impl Candidate {
    /// 配列の1要素から生成（オブジェクト以外は全フィールド欠損）
    pub fn from_value(value: &Value) -> Self {
        let field = |key: &str| value.get(key).filter(|v| !v.is_null()).cloned();
        Self {
            name: field("name"),
            score: field("score"),
            semester: field("semester"),
            grade_in_subject: field("grade_in_subject"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_filter_criteria_default() {
        let criteria = FilterCriteria::default();
        assert_eq!(criteria.subject, "Cálculo I");
        assert_eq!(criteria.min_semester, 5);
        assert_eq!(criteria.career, "Ingeniería de Sistemas");
        assert_eq!(criteria.min_grade, 4.0);
    }

    #[test]
    fn test_field_form_names() {
        let names: Vec<&str> = Field::ALL.iter().map(|f| f.form_name()).collect();
        assert_eq!(names, vec!["subject", "min_semester", "career", "min_grade"]);
    }

    #[test]
    fn test_candidate_from_value() {
        let value = json!({"name":"Ana","score":9.5,"semester":6,"grade_in_subject":4.8});
        let candidate = Candidate::from_value(&value);
        assert_eq!(candidate.name, Some(json!("Ana")));
        assert_eq!(candidate.score, Some(json!(9.5)));
        assert_eq!(candidate.semester, Some(json!(6)));
        assert_eq!(candidate.grade_in_subject, Some(json!(4.8)));
    }

    #[test]
    fn test_candidate_missing_and_null_fields() {
        let candidate = Candidate::from_value(&json!({"name":"Luis","score":null}));
        assert_eq!(candidate.name, Some(json!("Luis")));
        assert_eq!(candidate.score, None);
        assert_eq!(candidate.semester, None);
        assert_eq!(candidate.grade_in_subject, None);
    }

    #[test]
    fn test_candidate_keeps_unexpected_types() {
        let value = json!({"name":42,"score":"9.5","semester":6.0,"career":"Física"});
        let candidate = Candidate::from_value(&value);
        assert_eq!(candidate.name, Some(json!(42)));
        assert_eq!(candidate.score, Some(json!("9.5")));
        assert_eq!(candidate.semester, Some(json!(6.0)));
    }

    #[test]
    fn test_candidate_from_non_object() {
        assert_eq!(Candidate::from_value(&Value::Null), Candidate::default());
        assert_eq!(Candidate::from_value(&json!("Ana")), Candidate::default());
    }

    #[test]
    fn test_candidate_serialize_skips_missing() {
        let candidate = Candidate::from_value(&json!({"name":"Ana"}));
        let json = serde_json::to_string(&candidate).unwrap();
        assert_eq!(json, r#"{"name":"Ana"}"#);
    }
}
