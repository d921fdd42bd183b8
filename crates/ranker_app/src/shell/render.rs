use client_logging::{client_error, client_info, client_warn};
use ranker_core::{AppViewModel, NoticeLevel, Phase};

const BAR_SLOTS: usize = 20;

pub fn render(view: &AppViewModel) {
    println!(
        "-- {} | {} file(s) selected",
        phase_label(view.phase),
        view.selected_files.len()
    );
    for file in &view.selected_files {
        println!("   {} ({} bytes)", file.name, file.size_bytes);
    }
    if !view.rows.is_empty() {
        println!("   Ranking results:");
        for (index, row) in view.rows.iter().enumerate() {
            println!(
                "   {:>2}. {:<32} {:>6.2}%  [{}]",
                index + 1,
                row.label,
                row.percent,
                bar(row.bar_width_percent)
            );
        }
    }
    if let Some(kind) = view.last_error {
        println!("   last error: {kind:?}");
    }
}

fn phase_label(phase: Phase) -> &'static str {
    match phase {
        Phase::Idle => "Idle",
        Phase::Uploading => "Uploading",
        Phase::Ranking => "Ranking",
        Phase::Ready => "Ready",
        Phase::Failed => "Failed",
    }
}

fn bar(width_percent: u8) -> String {
    let filled = usize::from(width_percent) * BAR_SLOTS / 100;
    let mut bar = String::with_capacity(BAR_SLOTS);
    for slot in 0..BAR_SLOTS {
        bar.push(if slot < filled { '#' } else { '.' });
    }
    bar
}

/// Prints a user-facing notice and mirrors it into the log.
pub fn notify(level: NoticeLevel, message: &str) {
    match level {
        NoticeLevel::Success => {
            client_info!("{message}");
            println!("ok: {message}");
        }
        NoticeLevel::Warning => {
            client_warn!("{message}");
            println!("warn: {message}");
        }
        NoticeLevel::Error => {
            client_error!("{message}");
            println!("error: {message}");
        }
    }
}

pub fn print_help() {
    println!("Commands:");
    println!("  select <path>...   choose resume files");
    println!("  upload             upload the current selection");
    println!("  job <text>         set the job description");
    println!("  rank [text]        rank uploaded resumes against the description");
    println!("  status             show the current session");
    println!("  help               show this message");
    println!("  quit               exit");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bar_fills_proportionally() {
        assert_eq!(bar(0), "....................");
        assert_eq!(bar(50), "##########..........");
        assert_eq!(bar(100), "####################");
    }

    #[test]
    fn partial_bar_rounds_down_to_whole_slots() {
        assert_eq!(bar(87), "#################...");
    }
}
