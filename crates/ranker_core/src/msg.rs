use crate::{ErrorKind, RankedEntry, ResumeFile};

#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    /// User picked a new set of resume files.
    FilesSelected(Vec<ResumeFile>),
    /// User asked to upload the current selection.
    UploadClicked,
    /// User edited the job description input (debounced text).
    JobTextChanged(String),
    /// User submitted the current job description for ranking.
    RankClicked,
    /// Transfer layer resolved the in-flight upload.
    UploadResolved(Result<(), TransferFailure>),
    /// Transfer layer resolved the in-flight rank request.
    RankResolved(Result<Vec<RankedEntry>, TransferFailure>),
    /// UI/render tick to coalesce rendering.
    Tick,
    /// Fallback for placeholder wiring.
    NoOp,
}

/// Failed transfer as reported back into the state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferFailure {
    pub kind: ErrorKind,
    /// Error text the service put in its response body, when present.
    pub server_message: Option<String>,
}
