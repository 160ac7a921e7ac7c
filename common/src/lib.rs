//! Monitor Selector Common Library
//!
//! CLIとWeb(WASM)で共有される型・フォーム状態・表示ロジック

pub mod types;
pub mod error;
pub mod messages;
pub mod multipart;
pub mod parser;
pub mod controller;
pub mod render;

pub use types::{Candidate, Field, FilterCriteria};
pub use error::{Error, Result};
pub use multipart::{form_parts, format_number, is_docx, FormPart, PROCESS_CVS_URL};
pub use parser::{parse_candidates, parse_response};
pub use controller::{Alert, FormController, SubmitAction};
pub use render::{render, ResultTable, View};
