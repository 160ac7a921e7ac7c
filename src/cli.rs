use clap::{Args, Parser, Subcommand};
use monitor_selector_common::FilterCriteria;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "monitor-selector")]
#[command(about = "Selector de monitores: envía hojas de vida (.docx) al servicio de puntaje", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 履歴書を送信して候補者一覧を表示
    Submit {
        /// .docxファイルまたはフォルダ（フォルダは直下のみ）
        paths: Vec<PathBuf>,

        #[command(flatten)]
        criteria: CriteriaArgs,

        /// 送信先URL（省略時は設定値）
        #[arg(long)]
        endpoint: Option<String>,

        /// 結果JSONの保存先
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// テーブルの代わりにJSONを出力
        #[arg(long)]
        json: bool,
    },

    /// 対話形式でフォームを入力して送信
    Form {
        /// 送信先URL（省略時は設定値）
        #[arg(long)]
        endpoint: Option<String>,
    },

    /// 保存済みの結果JSONを表示
    Show {
        /// 結果JSONファイル
        #[arg(required = true)]
        input: PathBuf,

        /// 評点列の科目名
        #[arg(long, default_value = "Cálculo I")]
        subject: String,
    },

    /// 設定を表示/編集
    Config {
        /// 送信先URLを設定
        #[arg(long)]
        set_endpoint: Option<String>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}

/// 選考条件（既定値はフォームの初期値）
#[derive(Args, Debug, Clone)]
pub struct CriteriaArgs {
    /// 対象科目
    #[arg(long, default_value = "Cálculo I")]
    pub subject: String,

    /// 最低学期
    #[arg(long, default_value = "5")]
    pub min_semester: i64,

    /// 対象学科
    #[arg(long, default_value = "Ingeniería de Sistemas")]
    pub career: String,

    /// 科目の最低評点
    #[arg(long, default_value = "4.0")]
    pub min_grade: f64,
}

impl From<CriteriaArgs> for FilterCriteria {
    fn from(args: CriteriaArgs) -> Self {
        FilterCriteria {
            subject: args.subject,
            min_semester: args.min_semester,
            career: args.career,
            min_grade: args.min_grade,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submit_defaults() {
        let cli = Cli::try_parse_from(["monitor-selector", "submit", "cvs/"]).unwrap();
        match cli.command {
            Commands::Submit { paths, criteria, json, .. } => {
                assert_eq!(paths, vec![PathBuf::from("cvs/")]);
                assert!(!json);
                assert_eq!(FilterCriteria::from(criteria), FilterCriteria::default());
            }
            _ => panic!("submitになるべき"),
        }
    }

    #[test]
    fn test_submit_criteria_flags() {
        let cli = Cli::try_parse_from([
            "monitor-selector",
            "submit",
            "ana.docx",
            "luis.docx",
            "--subject",
            "Física",
            "--min-semester",
            "3",
            "--min-grade",
            "3.5",
        ])
        .unwrap();
        match cli.command {
            Commands::Submit { paths, criteria, .. } => {
                assert_eq!(paths.len(), 2);
                let criteria = FilterCriteria::from(criteria);
                assert_eq!(criteria.subject, "Física");
                assert_eq!(criteria.min_semester, 3);
                assert_eq!(criteria.min_grade, 3.5);
                assert_eq!(criteria.career, "Ingeniería de Sistemas");
            }
            _ => panic!("submitになるべき"),
        }
    }

    #[test]
    fn test_invalid_number_flag_is_rejected() {
        let result = Cli::try_parse_from(["monitor-selector", "submit", "--min-grade", "cuatro"]);
        assert!(result.is_err());
    }
}
