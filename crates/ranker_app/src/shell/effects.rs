use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use client_logging::{client_info, client_warn};
use ranker_client::{
    ClientEvent, ClientHandle, RankQuery, TransferError, TransferErrorKind, TransferSettings,
    UploadFile,
};
use ranker_core::{Effect, ErrorKind, Msg, TransferFailure};

use super::app::ShellMsg;
use super::render;

/// Executes coordinator effects and feeds transfer outcomes back as messages.
pub struct EffectRunner {
    client: ClientHandle,
}

impl EffectRunner {
    pub fn new(settings: TransferSettings, msg_tx: mpsc::Sender<ShellMsg>) -> Self {
        let client = ClientHandle::new(settings);
        let runner = Self { client };
        runner.spawn_event_loop(msg_tx);
        runner
    }

    pub fn enqueue(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::StartUpload { files, owner } => {
                    client_info!("StartUpload files={} owner={:?}", files.len(), owner);
                    let files = files
                        .into_iter()
                        .map(|file| UploadFile {
                            name: file.name,
                            bytes: file.content,
                        })
                        .collect();
                    self.client.start_upload(files, owner);
                }
                Effect::StartRank { query } => {
                    client_info!("StartRank title={}", query.title);
                    self.client.start_rank(RankQuery {
                        job_title: query.title,
                        job_description: query.description,
                        created_by: query.created_by,
                    });
                }
                Effect::Notify { level, message } => {
                    render::notify(level, &message);
                }
            }
        }
    }

    fn spawn_event_loop(&self, msg_tx: mpsc::Sender<ShellMsg>) {
        let client = self.client.clone();
        thread::spawn(move || loop {
            if let Some(event) = client.try_recv() {
                let msg = match event {
                    ClientEvent::UploadCompleted { result } => {
                        Msg::UploadResolved(result.map_err(map_failure))
                    }
                    ClientEvent::RankCompleted { result } => Msg::RankResolved(
                        result
                            .map(|entries| entries.into_iter().map(map_entry).collect())
                            .map_err(map_failure),
                    ),
                };
                if msg_tx.send(ShellMsg::Core(msg)).is_err() {
                    break;
                }
            } else {
                thread::sleep(Duration::from_millis(20));
            }
        });
    }
}

fn map_entry(entry: ranker_client::RankedEntry) -> ranker_core::RankedEntry {
    ranker_core::RankedEntry {
        resume_id: entry.resume_id,
        filename: entry.filename,
        score: entry.score,
    }
}

fn map_failure(error: TransferError) -> TransferFailure {
    client_warn!("transfer failed: {} ({})", error.message, error.kind);
    TransferFailure {
        kind: map_kind(error.kind),
        server_message: error.server_message,
    }
}

fn map_kind(kind: TransferErrorKind) -> ErrorKind {
    match kind {
        TransferErrorKind::Timeout => ErrorKind::Timeout,
        TransferErrorKind::Protocol => ErrorKind::Protocol,
        TransferErrorKind::Rejected(status) => ErrorKind::Rejected(status),
        TransferErrorKind::Network => ErrorKind::Network,
    }
}
