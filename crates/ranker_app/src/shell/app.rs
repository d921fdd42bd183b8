use std::io::{self, BufRead};
use std::sync::mpsc;
use std::thread;

use client_logging::client_info;
use ranker_client::TransferSettings;
use ranker_core::{update, Msg, NoticeLevel, SessionState};

use super::commands::{self, Command};
use super::config::AppConfig;
use super::effects::EffectRunner;
use super::logging::{self, LogDestination};
use super::render;

/// Messages driving the shell's main loop, from stdin or the transfer layer.
#[derive(Debug)]
pub enum ShellMsg {
    Core(Msg),
    ShowStatus,
    ShowHelp,
    Quit,
}

pub fn run_app() -> anyhow::Result<()> {
    logging::init(LogDestination::File)?;
    let config = AppConfig::from_env()?;
    let settings = TransferSettings::new(&config.api_base)?;
    client_info!("resume ranker shell starting against {}", config.api_base);

    let (msg_tx, msg_rx) = mpsc::channel::<ShellMsg>();
    let runner = EffectRunner::new(settings, msg_tx.clone());
    spawn_stdin_reader(msg_tx);

    let mut state = SessionState::with_owner(config.owner);
    render::print_help();

    while let Ok(shell_msg) = msg_rx.recv() {
        match shell_msg {
            ShellMsg::Core(msg) => {
                let (next, effects) = update(state, msg);
                state = next;
                runner.enqueue(effects);
                if state.consume_dirty() {
                    render::render(&state.view());
                }
            }
            ShellMsg::ShowStatus => render::render(&state.view()),
            ShellMsg::ShowHelp => render::print_help(),
            ShellMsg::Quit => break,
        }
    }

    client_info!("resume ranker shell exiting");
    Ok(())
}

fn spawn_stdin_reader(msg_tx: mpsc::Sender<ShellMsg>) {
    thread::spawn(move || {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let Ok(line) = line else { break };
            for shell_msg in interpret(&line) {
                if msg_tx.send(shell_msg).is_err() {
                    return;
                }
            }
        }
        // Treat a closed stdin as a request to exit.
        let _ = msg_tx.send(ShellMsg::Quit);
    });
}

fn interpret(line: &str) -> Vec<ShellMsg> {
    match commands::parse_line(line) {
        Command::Empty => Vec::new(),
        Command::Select(paths) => {
            let files = commands::load_files(&paths);
            if files.is_empty() {
                render::notify(NoticeLevel::Warning, "No readable files in selection.");
                Vec::new()
            } else {
                vec![ShellMsg::Core(Msg::FilesSelected(files))]
            }
        }
        Command::Upload => vec![ShellMsg::Core(Msg::UploadClicked)],
        Command::Job(text) => vec![ShellMsg::Core(Msg::JobTextChanged(text))],
        Command::Rank(text) => {
            let mut msgs = Vec::new();
            if let Some(text) = text {
                msgs.push(ShellMsg::Core(Msg::JobTextChanged(text)));
            }
            msgs.push(ShellMsg::Core(Msg::RankClicked));
            msgs
        }
        Command::Status => vec![ShellMsg::ShowStatus],
        Command::Help => vec![ShellMsg::ShowHelp],
        Command::Quit => vec![ShellMsg::Quit],
        Command::Unknown(word) => {
            render::notify(
                NoticeLevel::Warning,
                &format!("Unknown command: {word}. Type 'help'."),
            );
            Vec::new()
        }
    }
}
