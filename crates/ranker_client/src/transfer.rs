use async_trait::async_trait;
use client_logging::client_warn;
use reqwest::multipart;
use serde::{Deserialize, Serialize};

use crate::settings::TransferSettings;
use crate::types::{RankQuery, RankedEntry, TransferError, TransferErrorKind, UploadFile};

/// Outbound calls to the remote ranking service.
///
/// Each call maps to exactly one network request; there are no retries and
/// nothing is cached locally.
#[async_trait]
pub trait TransferApi: Send + Sync {
    async fn upload(&self, files: &[UploadFile], owner: Option<&str>)
        -> Result<(), TransferError>;
    async fn rank(&self, query: &RankQuery) -> Result<Vec<RankedEntry>, TransferError>;
}

#[derive(Debug, Clone)]
pub struct HttpTransferClient {
    settings: TransferSettings,
}

impl HttpTransferClient {
    pub fn new(settings: TransferSettings) -> Self {
        Self { settings }
    }

    fn build_client(&self) -> Result<reqwest::Client, TransferError> {
        reqwest::Client::builder()
            .connect_timeout(self.settings.connect_timeout)
            .timeout(self.settings.request_timeout)
            .build()
            .map_err(|err| TransferError::new(TransferErrorKind::Network, err.to_string()))
    }
}

#[async_trait]
impl TransferApi for HttpTransferClient {
    async fn upload(
        &self,
        files: &[UploadFile],
        owner: Option<&str>,
    ) -> Result<(), TransferError> {
        let client = self.build_client()?;

        let mut form = multipart::Form::new();
        for file in files {
            let part = multipart::Part::bytes(file.bytes.clone()).file_name(file.name.clone());
            form = form.part("file", part);
        }
        // The service requires the field even for anonymous sessions.
        form = form.text("user_id", owner.unwrap_or_default().to_string());

        let response = client
            .post(self.settings.upload_url.clone())
            .multipart(form)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            let server_message = extract_server_error(response).await;
            return Err(TransferError::rejected(status.as_u16(), server_message));
        }
        Ok(())
    }

    async fn rank(&self, query: &RankQuery) -> Result<Vec<RankedEntry>, TransferError> {
        let client = self.build_client()?;

        let body = RankRequestBody {
            job_title: &query.job_title,
            job_description: &query.job_description,
            created_by: query.created_by.as_deref(),
        };
        let response = client
            .post(self.settings.rank_url.clone())
            .json(&body)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            let server_message = extract_server_error(response).await;
            return Err(TransferError::rejected(status.as_u16(), server_message));
        }

        let payload: RankResponseBody = response
            .json()
            .await
            .map_err(|err| TransferError::new(TransferErrorKind::Protocol, err.to_string()))?;
        Ok(collect_entries(payload.results))
    }
}

#[derive(Serialize)]
struct RankRequestBody<'a> {
    job_title: &'a str,
    job_description: &'a str,
    created_by: Option<&'a str>,
}

#[derive(Deserialize)]
struct RankResponseBody {
    // Individual entries are validated one by one below, so a single bad
    // entry cannot fail the whole response.
    #[serde(default)]
    results: Vec<serde_json::Value>,
}

#[derive(Deserialize)]
struct WireEntry {
    resume: WireResume,
    score: f64,
}

#[derive(Deserialize)]
struct WireResume {
    id: String,
    filename: String,
}

/// Validates entries in received order; malformed ones are dropped, not fatal.
fn collect_entries(raw: Vec<serde_json::Value>) -> Vec<RankedEntry> {
    let mut entries = Vec::with_capacity(raw.len());
    for value in raw {
        match serde_json::from_value::<WireEntry>(value) {
            Ok(entry) if entry.score.is_finite() && (0.0..=1.0).contains(&entry.score) => {
                entries.push(RankedEntry {
                    resume_id: entry.resume.id,
                    filename: entry.resume.filename,
                    score: entry.score,
                });
            }
            Ok(entry) => {
                client_warn!(
                    "dropping ranked entry {}: score {} outside [0,1]",
                    entry.resume.id,
                    entry.score
                );
            }
            Err(err) => {
                client_warn!("dropping malformed ranked entry: {err}");
            }
        }
    }
    entries
}

/// Pulls the `{error: string}` text out of a failure body, when there is one.
async fn extract_server_error(response: reqwest::Response) -> Option<String> {
    let body = response.text().await.ok()?;
    let value: serde_json::Value = serde_json::from_str(&body).ok()?;
    value.get("error")?.as_str().map(ToOwned::to_owned)
}

fn map_reqwest_error(err: reqwest::Error) -> TransferError {
    if err.is_timeout() {
        return TransferError::new(TransferErrorKind::Timeout, err.to_string());
    }
    TransferError::new(TransferErrorKind::Network, err.to_string())
}
