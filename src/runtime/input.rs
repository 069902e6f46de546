//! Terminal command input
//!
//! Maps lines typed at the prompt to messages. Multi-line CSV entry starts
//! with `text` and ends with a line holding a single `.`.

use std::path::PathBuf;
use std::str::FromStr;

use crate::messages::{AppMsg, GridMsg, Msg, ResizeMsg};

/// Shown for `help`
pub const HELP_TEXT: &str = "\
Commands:
  text            enter new CSV text, end with a line holding a single '.'
  set R C VALUE   set the cell at row R, column C (row 0 is the header)
  edit R C        focus a cell
  blur            leave the focused cell
  paste R C       paste the clipboard into a cell at its caret
  col C DX        drag column C's edge by DX pixels
  panel DX        drag the panel separator by DX pixels
  width PX        resize the container to PX pixels
  show            draw the grid
  csv             print the CSV text
  json            print the table as JSON
  load PATH       load a CSV file
  save [PATH]     save the CSV text
  help            show this help
  quit            exit";

/// What a typed line asks for
#[derive(Debug, Clone, PartialEq)]
pub enum Input {
    /// A single message
    Msg(Msg),
    /// Messages to apply in order (a whole drag gesture)
    Msgs(Vec<Msg>),
    /// Read the system clipboard and paste it into a cell
    ClipboardPaste { row: usize, col: usize },
    /// Print the command list
    Help,
}

/// Line-oriented command parser
#[derive(Debug, Default)]
pub struct InputParser {
    /// Lines collected since `text`, while capturing
    capture: Option<Vec<String>>,
}

impl InputParser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether lines are being collected as CSV text
    pub fn is_capturing(&self) -> bool {
        self.capture.is_some()
    }

    /// Feed one line (without its line terminator)
    ///
    /// Returns `Ok(None)` for lines that produce nothing yet, such as blank
    /// lines or lines collected during text entry.
    pub fn feed(&mut self, line: &str) -> Result<Option<Input>, String> {
        if let Some(lines) = &mut self.capture {
            if line == "." {
                let text = lines.join("\n");
                self.capture = None;
                return Ok(Some(Input::Msg(Msg::text_changed(text))));
            }
            lines.push(line.to_string());
            return Ok(None);
        }

        let Some((command, rest)) = next_token(line) else {
            return Ok(None);
        };

        let input = match command {
            "text" => {
                self.capture = Some(Vec::new());
                return Ok(None);
            }
            "set" => {
                let (row, rest) = parse_token(rest, "row")?;
                let (col, rest) = parse_token(rest, "column")?;
                let value = rest.strip_prefix(' ').unwrap_or(rest);
                Input::Msg(Msg::cell_input(row, col, value))
            }
            "edit" => {
                let (row, rest) = parse_token(rest, "row")?;
                let (col, _) = parse_token(rest, "column")?;
                Input::Msg(Msg::Grid(GridMsg::Focus { row, col }))
            }
            "blur" => Input::Msg(Msg::Grid(GridMsg::Blur)),
            "paste" => {
                let (row, rest) = parse_token(rest, "row")?;
                let (col, _) = parse_token(rest, "column")?;
                Input::ClipboardPaste { row, col }
            }
            "col" => {
                let (col, rest) = parse_token(rest, "column")?;
                let (dx, _) = parse_pixels(rest, "DX")?;
                Input::Msgs(drag(ResizeMsg::StartColumn { col, x: 0.0 }, dx))
            }
            "panel" => {
                let (dx, _) = parse_pixels(rest, "DX")?;
                Input::Msgs(drag(ResizeMsg::StartPanel { x: 0.0 }, dx))
            }
            "width" => {
                let (width, _) = parse_pixels(rest, "PX")?;
                let width = width as f32;
                Input::Msg(Msg::Resize(ResizeMsg::ContainerResized { width }))
            }
            "show" => Input::Msg(Msg::App(AppMsg::ShowGrid)),
            "csv" => Input::Msg(Msg::App(AppMsg::ShowText)),
            "json" => Input::Msg(Msg::App(AppMsg::DumpJson)),
            "load" => {
                let path = rest.trim();
                if path.is_empty() {
                    return Err("usage: load PATH".to_string());
                }
                Input::Msg(Msg::App(AppMsg::LoadFile(PathBuf::from(path))))
            }
            "save" => {
                let path = rest.trim();
                let target = (!path.is_empty()).then(|| PathBuf::from(path));
                Input::Msg(Msg::App(AppMsg::SaveFile(target)))
            }
            "help" | "?" => Input::Help,
            "quit" | "exit" => Input::Msg(Msg::App(AppMsg::Quit)),
            other => return Err(format!("unknown command '{}', try 'help'", other)),
        };

        Ok(Some(input))
    }
}

/// A complete drag gesture: press, one move by `dx`, release
fn drag(start: ResizeMsg, dx: f64) -> Vec<Msg> {
    vec![
        Msg::Resize(start),
        Msg::Resize(ResizeMsg::Move { x: dx }),
        Msg::Resize(ResizeMsg::End),
    ]
}

/// Split off the first whitespace-delimited token
fn next_token(s: &str) -> Option<(&str, &str)> {
    let s = s.trim_start();
    if s.is_empty() {
        return None;
    }
    let end = s.find(char::is_whitespace).unwrap_or(s.len());
    Some((&s[..end], &s[end..]))
}

/// Parse the next token as a `T`, naming it `what` in errors
fn parse_token<'a, T: FromStr>(s: &'a str, what: &str) -> Result<(T, &'a str), String> {
    let (token, rest) = next_token(s).ok_or_else(|| format!("missing {}", what))?;
    let value = token
        .parse()
        .map_err(|_| format!("invalid {} '{}'", what, token))?;
    Ok((value, rest))
}

/// Parse the next token as a finite pixel amount
fn parse_pixels<'a>(s: &'a str, what: &str) -> Result<(f64, &'a str), String> {
    let (value, rest) = parse_token::<f64>(s, what)?;
    if !(value as f32).is_finite() {
        return Err(format!("{} must be a finite number of pixels", what));
    }
    Ok((value, rest))
}
