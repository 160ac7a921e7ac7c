use crate::error::{MonitorSelectorError, Result};
use monitor_selector_common::is_docx;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// 送信対象の履歴書ファイル（中身は送信時に読む）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentFile {
    pub path: PathBuf,
    pub file_name: String,
}

impl DocumentFile {
    pub fn new(path: &Path) -> Self {
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();
        Self {
            path: path.to_path_buf(),
            file_name,
        }
    }
}

/// フォルダ直下の.docxを列挙（ファイル名順）
pub fn scan_folder(folder: &Path) -> Result<Vec<DocumentFile>> {
    if !folder.is_dir() {
        return Err(MonitorSelectorError::FolderNotFound(folder.display().to_string()));
    }

    let mut documents: Vec<DocumentFile> = WalkDir::new(folder)
        .max_depth(1) // 直下のみ（再帰しない）
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .map(|e| DocumentFile::new(e.path()))
        .filter(|doc| is_docx(&doc.file_name))
        .collect();

    documents.sort_by(|a, b| a.file_name.cmp(&b.file_name));

    Ok(documents)
}

/// ファイル/フォルダの指定から送信対象を集める
///
/// 指定順を保ち、フォルダは直下の.docxに展開する。
/// .docx以外のファイルは警告して除外する。
pub fn collect_documents(paths: &[PathBuf]) -> Result<Vec<DocumentFile>> {
    let mut documents = Vec::new();

    for path in paths {
        if path.is_dir() {
            let found = scan_folder(path)?;
            log::debug!("{}: {} document(s)", path.display(), found.len());
            documents.extend(found);
        } else if path.is_file() {
            let doc = DocumentFile::new(path);
            if is_docx(&doc.file_name) {
                documents.push(doc);
            } else {
                log::warn!("skipping non-.docx file: {}", path.display());
            }
        } else {
            return Err(MonitorSelectorError::FileNotFound(path.display().to_string()));
        }
    }

    Ok(documents)
}
