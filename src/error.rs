use thiserror::Error;

#[derive(Error, Debug)]
pub enum MonitorSelectorError {
    #[error(transparent)]
    Common(#[from] monitor_selector_common::Error),

    #[error("設定エラー: {0}")]
    Config(String),

    #[error("ファイルが見つかりません: {0}")]
    FileNotFound(String),

    #[error("フォルダが見つかりません: {0}")]
    FolderNotFound(String),

    #[error("{0}")]
    NoDocumentsFound(String),

    #[error("{0}")]
    SubmitFailed(String),

    #[error("{0}")]
    InvalidCriteria(String),

    #[error("HTTPクライアントエラー: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error("入力エラー: {0}")]
    Prompt(String),
}

pub type Result<T> = std::result::Result<T, MonitorSelectorError>;
