//! スコアリングサービスへの送信（reqwest multipart版）
//!
//! FormPart列をmultipartフォームへ書き写し、1回だけPOSTする。
//! リトライはしない。タイムアウトは設定時のみ。

use crate::error::Result;
use crate::scanner::DocumentFile;
use monitor_selector_common::multipart::DOCX_MIME;
use monitor_selector_common::{parse_response, Candidate, Error, FormPart};
use reqwest::multipart::{Form, Part};
use std::time::Duration;

pub struct ProcessCvsClient {
    http: reqwest::Client,
    endpoint: String,
}

impl ProcessCvsClient {
    pub fn new(endpoint: impl Into<String>, timeout: Option<Duration>) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            http: builder.build()?,
            endpoint: endpoint.into(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// 送信して候補者配列を受け取る
    ///
    /// ファイル読込・通信・ステータス・本文の失敗はすべて`Err`になる。
    pub async fn process(
        &self,
        parts: &[FormPart<DocumentFile>],
    ) -> std::result::Result<Vec<Candidate>, Error> {
        let form = build_form(parts).await?;

        log::debug!("POST {}", self.endpoint);
        let response = self
            .http
            .post(&self.endpoint)
            .multipart(form)
            .send()
            .await
            .map_err(|e| Error::Transport(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| Error::Transport(e.to_string()))?;
        log::debug!("response status {} ({} bytes)", status, body.len());

        parse_response(status, &body)
    }
}

/// パート列からmultipartフォームを組み立てる
async fn build_form(parts: &[FormPart<DocumentFile>]) -> std::result::Result<Form, Error> {
    let mut form = Form::new();
    for part in parts {
        form = match part {
            FormPart::File { name, file } => {
                let bytes = tokio::fs::read(&file.path)
                    .await
                    .map_err(|e| Error::Transport(format!("{}: {}", file.path.display(), e)))?;
                let part = Part::bytes(bytes)
                    .file_name(file.file_name.clone())
                    .mime_str(DOCX_MIME)
                    .map_err(|e| Error::Transport(e.to_string()))?;
                form.part(*name, part)
            }
            FormPart::Text { name, value } => form.text(*name, value.clone()),
        };
    }
    Ok(form)
}
