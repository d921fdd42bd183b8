use client_logging::client_warn;
use ranker_core::ResumeFile;

/// One parsed input line from the terminal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Empty,
    Select(Vec<String>),
    Upload,
    Job(String),
    Rank(Option<String>),
    Status,
    Help,
    Quit,
    Unknown(String),
}

pub fn parse_line(line: &str) -> Command {
    let trimmed = line.trim();
    let (word, rest) = match trimmed.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (trimmed, ""),
    };

    match word {
        "" => Command::Empty,
        "select" => Command::Select(rest.split_whitespace().map(ToOwned::to_owned).collect()),
        "upload" => Command::Upload,
        "job" => Command::Job(rest.to_string()),
        "rank" => {
            if rest.is_empty() {
                Command::Rank(None)
            } else {
                Command::Rank(Some(rest.to_string()))
            }
        }
        "status" => Command::Status,
        "help" => Command::Help,
        "quit" | "exit" => Command::Quit,
        other => Command::Unknown(other.to_string()),
    }
}

/// Reads the given paths into resume files. Unreadable paths are logged and
/// skipped rather than aborting the selection.
pub fn load_files(paths: &[String]) -> Vec<ResumeFile> {
    let mut files = Vec::with_capacity(paths.len());
    for path in paths {
        match std::fs::read(path) {
            Ok(content) => {
                let name = std::path::Path::new(path)
                    .file_name()
                    .and_then(|name| name.to_str())
                    .unwrap_or(path)
                    .to_string();
                files.push(ResumeFile::new(name, content));
            }
            Err(err) => {
                client_warn!("skipping {path}: {err}");
            }
        }
    }
    files
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn lines_parse_into_commands() {
        assert_eq!(parse_line("   "), Command::Empty);
        assert_eq!(parse_line("upload"), Command::Upload);
        assert_eq!(
            parse_line("select a.pdf b.txt"),
            Command::Select(vec!["a.pdf".to_string(), "b.txt".to_string()])
        );
        assert_eq!(
            parse_line("job Senior backend engineer"),
            Command::Job("Senior backend engineer".to_string())
        );
        assert_eq!(parse_line("rank"), Command::Rank(None));
        assert_eq!(
            parse_line("rank Data engineer"),
            Command::Rank(Some("Data engineer".to_string()))
        );
        assert_eq!(parse_line("quit"), Command::Quit);
        assert_eq!(parse_line("frobnicate"), Command::Unknown("frobnicate".to_string()));
    }

    #[test]
    fn load_files_reads_content_and_skips_missing_paths() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("alice.pdf");
        let mut file = std::fs::File::create(&path).expect("create");
        file.write_all(b"%PDF-1.4 alice").expect("write");

        let paths = vec![
            path.to_string_lossy().into_owned(),
            dir.path().join("missing.pdf").to_string_lossy().into_owned(),
        ];
        let files = load_files(&paths);

        assert_eq!(files.len(), 1);
        assert_eq!(files[0].name, "alice.pdf");
        assert_eq!(files[0].content, b"%PDF-1.4 alice".to_vec());
        assert_eq!(files[0].size_bytes, 14);
    }
}
