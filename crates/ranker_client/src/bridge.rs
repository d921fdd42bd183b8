use std::sync::{mpsc, Arc, Mutex};
use std::thread;

use crate::transfer::{HttpTransferClient, TransferApi};
use crate::types::{ClientEvent, RankQuery, UploadFile};
use crate::TransferSettings;

enum ClientCommand {
    Upload {
        files: Vec<UploadFile>,
        owner: Option<String>,
    },
    Rank {
        query: RankQuery,
    },
}

/// Async boundary around the transfer client.
///
/// Commands go in on a channel, run on a dedicated runtime thread, and each
/// produces exactly one terminal [`ClientEvent`]. In-flight requests cannot
/// be cancelled; callers gate concurrency before enqueueing.
#[derive(Clone)]
pub struct ClientHandle {
    cmd_tx: mpsc::Sender<ClientCommand>,
    event_rx: Arc<Mutex<mpsc::Receiver<ClientEvent>>>,
}

impl ClientHandle {
    pub fn new(settings: TransferSettings) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let client = Arc::new(HttpTransferClient::new(settings));

        thread::spawn(move || {
            let runtime = tokio::runtime::Runtime::new().expect("tokio runtime");
            while let Ok(command) = cmd_rx.recv() {
                let client = client.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    handle_command(client.as_ref(), command, event_tx).await;
                });
            }
        });

        Self {
            cmd_tx,
            event_rx: Arc::new(Mutex::new(event_rx)),
        }
    }

    pub fn start_upload(&self, files: Vec<UploadFile>, owner: Option<String>) {
        let _ = self.cmd_tx.send(ClientCommand::Upload { files, owner });
    }

    pub fn start_rank(&self, query: RankQuery) {
        let _ = self.cmd_tx.send(ClientCommand::Rank { query });
    }

    pub fn try_recv(&self) -> Option<ClientEvent> {
        self.event_rx.lock().ok()?.try_recv().ok()
    }
}

async fn handle_command(
    client: &dyn TransferApi,
    command: ClientCommand,
    event_tx: mpsc::Sender<ClientEvent>,
) {
    match command {
        ClientCommand::Upload { files, owner } => {
            let result = client.upload(&files, owner.as_deref()).await;
            let _ = event_tx.send(ClientEvent::UploadCompleted { result });
        }
        ClientCommand::Rank { query } => {
            let result = client.rank(&query).await;
            let _ = event_tx.send(ClientEvent::RankCompleted { result });
        }
    }
}
