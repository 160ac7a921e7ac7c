//! 画面に表示する文言

pub const APP_TITLE: &str = "🎓 Selector de Monitores";

pub const FILES_LABEL: &str = "📁 Subir hojas de vida (.docx):";

pub const SUBMIT_LABEL: &str = "✅ Procesar hojas de vida";

pub const SUBMIT_LOADING_LABEL: &str = "Procesando...";

pub const RESULTS_HEADING: &str = "🏆 Candidatos seleccionados (ordenados por puntaje)";

pub const NO_MATCHES: &str = "No se encontraron candidatos que cumplan con todos los criterios.";

pub const BACK_LABEL: &str = "← Volver a subir archivos";

/// ファイル未選択時のアラート
pub const ALERT_MISSING_FILES: &str = "Por favor sube al menos un archivo .docx";

/// 送信失敗時のアラート
pub const ALERT_SUBMIT_FAILED: &str =
    "Error al procesar los archivos. Asegúrate de que el backend esté corriendo.";

/// 数値欄が読めないときのアラート
pub const ALERT_INVALID_SEMESTER: &str = "Por favor ingresa un semestre mínimo válido.";

pub const ALERT_INVALID_GRADE: &str = "Por favor ingresa una nota mínima válida.";
