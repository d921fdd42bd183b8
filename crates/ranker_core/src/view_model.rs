use crate::{ErrorKind, Phase, Ranking};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppViewModel {
    pub phase: Phase,
    pub job_text: String,
    pub selected_files: Vec<FileRowView>,
    pub rows: Vec<RenderRow>,
    pub last_error: Option<ErrorKind>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRowView {
    pub name: String,
    pub size_bytes: u64,
}

/// One renderable result line: label, percentage, and a bar width.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderRow {
    pub label: String,
    /// `score * 100` rounded to two decimals.
    pub percent: f64,
    /// Nearest whole percent, clamped to 0..=100, for drawing the bar.
    pub bar_width_percent: u8,
}

/// Projects a ranking into renderable rows.
///
/// Entries are neither reordered nor filtered; the output length and order
/// always match the input.
pub fn project(ranking: &Ranking) -> Vec<RenderRow> {
    ranking
        .iter()
        .map(|entry| RenderRow {
            label: entry.filename.clone(),
            percent: (entry.score * 10_000.0).round() / 100.0,
            bar_width_percent: bar_width(entry.score),
        })
        .collect()
}

fn bar_width(score: f64) -> u8 {
    (score * 100.0).round().clamp(0.0, 100.0) as u8
}
