//! Ranker core: pure state machine and view-model helpers.
mod effect;
mod msg;
mod state;
mod update;
mod view_model;

pub use effect::{Effect, NoticeLevel};
pub use msg::{Msg, TransferFailure};
pub use state::{
    ErrorKind, JobQuery, Phase, RankedEntry, Ranking, ResumeFile, SessionState,
    TITLE_EXCERPT_CHARS, TITLE_PREFIX,
};
pub use update::update;
pub use view_model::{project, AppViewModel, FileRowView, RenderRow};
