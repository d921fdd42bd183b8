//! Ranker client: transfer layer for the remote ranking service.
mod bridge;
mod settings;
mod transfer;
mod types;

pub use bridge::ClientHandle;
pub use settings::{SettingsError, TransferSettings};
pub use transfer::{HttpTransferClient, TransferApi};
pub use types::{
    ClientEvent, RankQuery, RankedEntry, TransferError, TransferErrorKind, UploadFile,
};
