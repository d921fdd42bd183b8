use crate::{
    Effect, JobQuery, Msg, NoticeLevel, Phase, RankedEntry, SessionState, TransferFailure,
};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: SessionState, msg: Msg) -> (SessionState, Vec<Effect>) {
    let effects = match msg {
        Msg::FilesSelected(files) => {
            state.set_selected_files(files);
            Vec::new()
        }
        Msg::UploadClicked => submit_upload(&mut state),
        Msg::JobTextChanged(text) => {
            state.set_job_text(text);
            Vec::new()
        }
        Msg::RankClicked => submit_rank(&mut state),
        Msg::UploadResolved(result) => resolve_upload(&mut state, result),
        Msg::RankResolved(result) => resolve_rank(&mut state, result),
        Msg::Tick | Msg::NoOp => Vec::new(),
    };

    (state, effects)
}

fn submit_upload(state: &mut SessionState) -> Vec<Effect> {
    if state.is_busy() {
        return vec![warn("A request is already in progress.")];
    }
    if state.selected_files().is_empty() {
        return vec![warn("Please select resumes first!")];
    }

    let files = state.selected_files().to_vec();
    let owner = state.owner().map(ToOwned::to_owned);
    state.begin_upload();
    vec![Effect::StartUpload { files, owner }]
}

fn resolve_upload(state: &mut SessionState, result: Result<(), TransferFailure>) -> Vec<Effect> {
    if state.phase() != Phase::Uploading {
        // A resolution can only follow a submission; anything else is dropped.
        return Vec::new();
    }
    match result {
        Ok(()) => {
            state.complete_upload();
            vec![notify(
                NoticeLevel::Success,
                "Resumes uploaded successfully!",
            )]
        }
        Err(failure) => {
            state.fail(failure.kind);
            let message = failure
                .server_message
                .unwrap_or_else(|| "Upload failed. Please try again.".to_string());
            vec![notify(NoticeLevel::Error, message)]
        }
    }
}

fn submit_rank(state: &mut SessionState) -> Vec<Effect> {
    if state.is_busy() {
        return vec![warn("A request is already in progress.")];
    }
    let created_by = state.owner().map(ToOwned::to_owned);
    let Some(query) = JobQuery::from_description(state.job_text(), created_by) else {
        return vec![warn("Enter a job description first!")];
    };

    state.begin_rank();
    vec![Effect::StartRank { query }]
}

fn resolve_rank(
    state: &mut SessionState,
    result: Result<Vec<RankedEntry>, TransferFailure>,
) -> Vec<Effect> {
    if state.phase() != Phase::Ranking {
        return Vec::new();
    }
    match result {
        Ok(entries) => {
            state.complete_rank(entries);
            vec![notify(NoticeLevel::Success, "Resumes ranked successfully!")]
        }
        Err(failure) => {
            // The previous ranking stays visible; only the phase and error flip.
            state.fail(failure.kind);
            let message = failure
                .server_message
                .unwrap_or_else(|| "Failed to rank resumes.".to_string());
            vec![notify(NoticeLevel::Error, message)]
        }
    }
}

fn notify(level: NoticeLevel, message: impl Into<String>) -> Effect {
    Effect::Notify {
        level,
        message: message.into(),
    }
}

fn warn(message: &str) -> Effect {
    notify(NoticeLevel::Warning, message)
}
