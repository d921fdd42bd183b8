use crate::view_model::{AppViewModel, FileRowView};

/// Prefix prepended to the job-title excerpt sent to the ranking service.
pub const TITLE_PREFIX: &str = "Hiring - ";
/// Number of description characters carried into the derived job title.
pub const TITLE_EXCERPT_CHARS: usize = 30;

/// One resume document captured at selection time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResumeFile {
    pub name: String,
    pub content: Vec<u8>,
    pub size_bytes: u64,
}

impl ResumeFile {
    pub fn new(name: impl Into<String>, content: Vec<u8>) -> Self {
        let size_bytes = content.len() as u64;
        Self {
            name: name.into(),
            content,
            size_bytes,
        }
    }
}

/// Job description payload derived from the user's free text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobQuery {
    pub title: String,
    pub description: String,
    pub created_by: Option<String>,
}

impl JobQuery {
    /// Builds a query from raw input, or `None` when the trimmed text is empty.
    ///
    /// The title is the prefixed first [`TITLE_EXCERPT_CHARS`] characters of
    /// the description. The excerpt is a plain character count and may cut
    /// mid-word.
    pub fn from_description(raw: &str, created_by: Option<String>) -> Option<Self> {
        let description = raw.trim();
        if description.is_empty() {
            return None;
        }
        let excerpt: String = description.chars().take(TITLE_EXCERPT_CHARS).collect();
        Some(Self {
            title: format!("{TITLE_PREFIX}{excerpt}"),
            description: description.to_string(),
            created_by,
        })
    }
}

/// One scored resume as returned by the ranking service.
///
/// `score` is kept exactly as received; it is never re-scaled or re-sorted.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedEntry {
    pub resume_id: String,
    pub filename: String,
    pub score: f64,
}

/// Scored resumes in service-provided order.
pub type Ranking = Vec<RankedEntry>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Uploading,
    Ranking,
    Ready,
    Failed,
}

/// Transfer failure category surfaced to the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Timeout,
    Protocol,
    Rejected(u16),
    Network,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct SessionState {
    phase: Phase,
    selected_files: Vec<ResumeFile>,
    job_text: String,
    ranking: Option<Ranking>,
    last_error: Option<ErrorKind>,
    owner: Option<String>,
    dirty: bool,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Session with a fixed owner identifier, read once at startup.
    pub fn with_owner(owner: Option<String>) -> Self {
        Self {
            owner,
            ..Self::default()
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn selected_files(&self) -> &[ResumeFile] {
        &self.selected_files
    }

    pub fn job_text(&self) -> &str {
        &self.job_text
    }

    pub fn ranking(&self) -> Option<&Ranking> {
        self.ranking.as_ref()
    }

    pub fn last_error(&self) -> Option<ErrorKind> {
        self.last_error
    }

    pub fn owner(&self) -> Option<&str> {
        self.owner.as_deref()
    }

    /// True while a transfer is in flight and new submissions are rejected.
    pub fn is_busy(&self) -> bool {
        matches!(self.phase, Phase::Uploading | Phase::Ranking)
    }

    pub fn view(&self) -> AppViewModel {
        AppViewModel {
            phase: self.phase,
            job_text: self.job_text.clone(),
            selected_files: self
                .selected_files
                .iter()
                .map(|file| FileRowView {
                    name: file.name.clone(),
                    size_bytes: file.size_bytes,
                })
                .collect(),
            rows: self
                .ranking
                .as_ref()
                .map(crate::view_model::project)
                .unwrap_or_default(),
            last_error: self.last_error,
        }
    }

    /// Returns the dirty flag and clears it. The shell re-renders only when
    /// this reports a change.
    pub fn consume_dirty(&mut self) -> bool {
        let was_dirty = self.dirty;
        self.dirty = false;
        was_dirty
    }

    pub(crate) fn set_selected_files(&mut self, files: Vec<ResumeFile>) {
        self.selected_files = files;
        self.dirty = true;
    }

    pub(crate) fn set_job_text(&mut self, text: String) {
        self.job_text = text;
        self.dirty = true;
    }

    pub(crate) fn begin_upload(&mut self) {
        self.phase = Phase::Uploading;
        self.dirty = true;
    }

    pub(crate) fn complete_upload(&mut self) {
        self.phase = Phase::Idle;
        self.selected_files.clear();
        self.last_error = None;
        self.dirty = true;
    }

    pub(crate) fn begin_rank(&mut self) {
        self.phase = Phase::Ranking;
        self.dirty = true;
    }

    pub(crate) fn complete_rank(&mut self, ranking: Ranking) {
        self.phase = Phase::Ready;
        self.ranking = Some(ranking);
        self.last_error = None;
        self.dirty = true;
    }

    /// Records a failed transfer. A previously ranked result stays in place
    /// so the last good ranking remains visible.
    pub(crate) fn fail(&mut self, kind: ErrorKind) {
        self.phase = Phase::Failed;
        self.last_error = Some(kind);
        self.dirty = true;
    }
}
