//! 結果のターミナル表示

use monitor_selector_common::{ResultTable, View};
use unicode_width::UnicodeWidthStr;

/// 表示内容をテキストに整形
pub fn format_view(view: &View) -> String {
    let mut out = String::new();

    if let Some(heading) = view.heading() {
        out.push_str(heading);
        out.push_str("\n\n");
    }

    match view {
        View::Form { .. } => {}
        View::NoMatches { message } => {
            out.push_str(message);
            out.push('\n');
        }
        View::Table(table) => out.push_str(&format_table(table)),
    }

    out
}

/// 罫線付きテーブル
///
/// 列幅は端末上の表示幅（全角・絵文字は2桁）で揃える。
pub fn format_table(table: &ResultTable) -> String {
    let mut widths: Vec<usize> = table.headers.iter().map(|h| h.width()).collect();
    for row in &table.rows {
        for (width, cell) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(cell.width());
        }
    }

    let separator = {
        let segments: Vec<String> = widths.iter().map(|w| "-".repeat(w + 2)).collect();
        format!("+{}+\n", segments.join("+"))
    };

    let mut out = String::new();
    out.push_str(&separator);
    out.push_str(&format_row(&table.headers, &widths));
    out.push_str(&separator);
    for row in &table.rows {
        out.push_str(&format_row(row, &widths));
    }
    out.push_str(&separator);
    out
}

fn format_row(cells: &[String; 4], widths: &[usize]) -> String {
    let padded: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| {
            let pad = width - cell.width();
            format!(" {}{} ", cell, " ".repeat(pad))
        })
        .collect();
    format!("|{}|\n", padded.join("|"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use monitor_selector_common::{parse_candidates, render};

    #[test]
    fn test_format_no_matches() {
        let candidates = parse_candidates("[]").unwrap();
        let text = format_view(&render(Some(&candidates), "Cálculo I", false));
        assert!(text.contains("Candidatos seleccionados"));
        assert!(text.contains("No se encontraron candidatos"));
        assert!(!text.contains('|'));
    }

    #[test]
    fn test_format_single_row() {
        let body = r#"[{"name":"Ana","score":9.5,"semester":6,"grade_in_subject":4.8}]"#;
        let candidates = parse_candidates(body).unwrap();
        let text = format_view(&render(Some(&candidates), "Cálculo I", false));

        let lines: Vec<&str> = text.lines().filter(|l| l.starts_with('|')).collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(
            lines[0],
            "| Nombre | Puntaje | Semestre | Nota en Cálculo I |"
        );
        assert_eq!(
            lines[1],
            "| Ana    | 9.5     | 6        | 4.8               |"
        );
    }

    #[test]
    fn test_format_wide_names_align() {
        let body = r#"[{"name":"田中🎓","score":9,"semester":6,"grade_in_subject":4.5},
                       {"name":"Ana","score":8,"semester":7,"grade_in_subject":4}]"#;
        let candidates = parse_candidates(body).unwrap();
        let text = format_view(&render(Some(&candidates), "Física", false));

        let widths: Vec<usize> = text
            .lines()
            .filter(|l| l.starts_with('|') || l.starts_with('+'))
            .map(|l| l.width())
            .collect();
        assert_eq!(widths.len(), 6);
        assert!(widths.iter().all(|w| *w == widths[0]), "列がずれている: {:?}", widths);
        assert!(text.contains("| 田中🎓 |"));
        assert!(text.contains("| Ana    |"));
    }

    #[test]
    fn test_format_form_is_empty() {
        assert_eq!(format_view(&render(None, "Cálculo I", false)), "");
    }
}
