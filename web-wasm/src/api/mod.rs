//! スコアリングサービス連携

mod process_cvs;

pub use process_cvs::{build_form_data, process_cvs};
