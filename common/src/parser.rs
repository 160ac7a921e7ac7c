//! スコアリングサービスのレスポンスパーサー

use crate::error::{Error, Result};
use crate::types::Candidate;

/// レスポンス本文を候補者配列としてパース
///
/// 配列であることだけを確認し、要素の形は検証しない。
///
/// # Returns
/// * `Ok(Vec<Candidate>)` - 配列（空配列を含む）
/// * `Err` - JSONでない、または配列でない場合
///
/// # Examples
/// ```
/// use monitor_selector_common::parse_candidates;
///
/// let candidates = parse_candidates("[]").unwrap();
/// assert!(candidates.is_empty());
/// ```
pub fn parse_candidates(body: &str) -> Result<Vec<Candidate>> {
    let value: serde_json::Value = serde_json::from_str(body.trim())?;
    let serde_json::Value::Array(items) = value else {
        return Err(Error::NotAnArray);
    };
    Ok(items.iter().map(Candidate::from_value).collect())
}

/// HTTPステータスと本文からレスポンスを判定
///
/// 2xx以外は本文に関係なく失敗扱い。
pub fn parse_response(status: u16, body: &str) -> Result<Vec<Candidate>> {
    if !(200..300).contains(&status) {
        return Err(Error::Http { status });
    }
    parse_candidates(body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_empty_array() {
        let result = parse_candidates("[]").unwrap();
        assert!(result.is_empty());
    }

    #[test]
    fn test_parse_single_candidate() {
        let body = r#"[{"name":"Ana","score":9.5,"semester":6,"grade_in_subject":4.8}]"#;
        let result = parse_candidates(body).unwrap();
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].name, Some(serde_json::json!("Ana")));
    }

    #[test]
    fn test_parse_keeps_order() {
        let body = r#"[
            {"name":"B","score":60},
            {"name":"A","score":100},
            {"name":"C","score":90}
        ]"#;
        let names: Vec<String> = parse_candidates(body)
            .unwrap()
            .into_iter()
            .filter_map(|c| c.name)
            .filter_map(|n| n.as_str().map(str::to_string))
            .collect();
        assert_eq!(names, vec!["B", "A", "C"]);
    }

    #[test]
    fn test_parse_does_not_validate_elements() {
        let body = r#"[
            {"name":"Ana","score":9.5,"semester":6.0,"grade_in_subject":4.8},
            {"name":"Luis","score":"9.5"},
            null,
            "texto"
        ]"#;
        let result = parse_candidates(body).unwrap();
        assert_eq!(result.len(), 4);
        assert_eq!(result[0].semester, Some(serde_json::json!(6.0)));
        assert_eq!(result[1].score, Some(serde_json::json!("9.5")));
        assert_eq!(result[2], Candidate::default());
        assert_eq!(result[3], Candidate::default());
    }

    #[test]
    fn test_parse_not_json() {
        let result = parse_candidates("<html>Internal Server Error</html>");
        assert!(matches!(result, Err(Error::Json(_))));
    }

    #[test]
    fn test_parse_object_is_not_array() {
        let result = parse_candidates(r#"{"detail":"Field required"}"#);
        assert!(matches!(result, Err(Error::NotAnArray)));
    }

    #[test]
    fn test_parse_response_error_status() {
        let result = parse_response(422, r#"{"detail":[]}"#);
        assert!(matches!(result, Err(Error::Http { status: 422 })));
    }

    #[test]
    fn test_parse_response_ok() {
        let result = parse_response(200, "[]").unwrap();
        assert!(result.is_empty());
    }
}
