use std::io::{self, BufRead};
use std::sync::mpsc::Sender;

use anyhow::Result;
use clap::Parser;

use gridsync::cli::{CliArgs, StartupMode};
use gridsync::config::AppConfig;
use gridsync::csv::PastePayload;
use gridsync::messages::{AppMsg, GridMsg, Msg};
use gridsync::model::AppModel;
use gridsync::runtime::{Input, InputParser, Session, TextGridRenderer, HELP_TEXT, SAMPLE_CSV};

fn main() -> Result<()> {
    let args = CliArgs::parse();

    gridsync::tracing::init();

    let config = match &args.config {
        Some(path) => AppConfig::load_from(path),
        None => AppConfig::load(),
    };
    let mode = args
        .startup_mode(config.load_sample)
        .map_err(anyhow::Error::msg)?;
    tracing::info!(?mode, "starting session");

    let surface = TextGridRenderer::new(io::stdout(), config.char_width);
    let mut session = Session::new(AppModel::new(config), surface);

    match mode {
        StartupMode::Empty => session.start(""),
        StartupMode::Sample => session.start(SAMPLE_CSV),
        StartupMode::File(path) => {
            session.start("");
            session.dispatch(Msg::App(AppMsg::LoadFile(path)));
        }
    }

    let tx = session.sender();
    std::thread::spawn(move || read_commands(tx));

    session.run();
    Ok(())
}

/// Turn stdin lines into messages until EOF or the session goes away
fn read_commands(tx: Sender<Msg>) {
    let mut parser = InputParser::new();
    println!("Type 'help' for commands.");

    for line in io::stdin().lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                tracing::warn!("Failed to read stdin: {}", e);
                break;
            }
        };

        let msgs = match parser.feed(line.trim_end_matches('\r')) {
            Ok(Some(Input::Msg(msg))) => vec![msg],
            Ok(Some(Input::Msgs(msgs))) => msgs,
            Ok(Some(Input::ClipboardPaste { row, col })) => vec![Msg::Grid(GridMsg::Paste {
                row,
                col,
                payload: clipboard_payload(),
            })],
            Ok(Some(Input::Help)) => {
                println!("{}", HELP_TEXT);
                continue;
            }
            Ok(None) => continue,
            Err(e) => {
                eprintln!("{}", e);
                continue;
            }
        };

        for msg in msgs {
            if tx.send(msg).is_err() {
                return;
            }
        }
    }

    let _ = tx.send(Msg::App(AppMsg::Quit));
}

/// Current system clipboard text, empty if unavailable
fn clipboard_payload() -> PastePayload {
    let clipboard_text = if let Ok(mut clipboard) = arboard::Clipboard::new() {
        clipboard.get_text().ok()
    } else {
        None
    };

    if clipboard_text.is_none() {
        tracing::warn!("Clipboard has no text");
    }

    PastePayload {
        plain: clipboard_text,
        html: None,
    }
}
