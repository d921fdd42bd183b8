use std::fmt;

/// One resume document handed to the transfer layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadFile {
    pub name: String,
    pub bytes: Vec<u8>,
}

/// Job description payload for a rank request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankQuery {
    pub job_title: String,
    pub job_description: String,
    pub created_by: Option<String>,
}

/// One scored resume as returned by the ranking service, in service order.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedEntry {
    pub resume_id: String,
    pub filename: String,
    pub score: f64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferError {
    pub kind: TransferErrorKind,
    pub message: String,
    /// Error text extracted from a non-2xx response body, when present.
    pub server_message: Option<String>,
}

impl TransferError {
    pub(crate) fn new(kind: TransferErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            server_message: None,
        }
    }

    pub(crate) fn rejected(status: u16, server_message: Option<String>) -> Self {
        Self {
            kind: TransferErrorKind::Rejected(status),
            message: format!("http status {status}"),
            server_message,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransferErrorKind {
    Timeout,
    Protocol,
    Rejected(u16),
    Network,
}

impl fmt::Display for TransferErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransferErrorKind::Timeout => write!(f, "timeout"),
            TransferErrorKind::Protocol => write!(f, "unparsable response"),
            TransferErrorKind::Rejected(status) => write!(f, "rejected with http status {status}"),
            TransferErrorKind::Network => write!(f, "network error"),
        }
    }
}

/// Terminal outcome of one transfer command.
#[derive(Debug, Clone, PartialEq)]
pub enum ClientEvent {
    UploadCompleted {
        result: Result<(), TransferError>,
    },
    RankCompleted {
        result: Result<Vec<RankedEntry>, TransferError>,
    },
}
