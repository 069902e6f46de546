//! Runtime module - drives the update loop against a surface
//!
//! - `input` - Terminal command line to message mapping
//! - `terminal` - Text rendering of the grid for a terminal
//!
//! The [`Session`] owns the model. Every message, whether typed by the user
//! or produced by a file I/O thread, arrives on one channel and is applied in
//! order, so the canonical table has exactly one writer.

pub mod input;
pub mod terminal;

use std::sync::mpsc::{self, Receiver, Sender};
use std::time::Duration;

use tracing::debug;

use crate::commands::Cmd;
use crate::csv::GridView;
use crate::messages::{AppMsg, Msg};
use crate::model::AppModel;
use crate::update::update;

pub use input::{Input, InputParser, HELP_TEXT};
pub use terminal::TextGridRenderer;

/// Data shown when the session starts without a file
pub const SAMPLE_CSV: &str = "Name,Age,City,Occupation
John Doe,30,New York,Engineer
Jane Smith,25,London,Designer
\"Peter Jones\",40,\"Paris, France\",Artist
\"Alice \"\"Wonderland\"\" Brown\",35,Berlin,\"Data Scientist, Senior\"
Bob,28,Tokyo,Developer";

/// Where the text, the grid and the status line are shown
///
/// A surface only displays what it is given. Every change to the data goes
/// back through a [`Msg`].
pub trait Surface {
    /// Draw the grid from scratch
    fn render_grid(&mut self, view: &GridView);
    /// Replace the text panel content
    fn publish_text(&mut self, text: &str);
    /// Apply a new width to the header and body cells of one column
    fn resize_column(&mut self, col: usize, width: f32);
    /// Apply new text and grid panel widths
    fn resize_panels(&mut self, left: f32, right: f32);
    /// Show a one-off message
    fn show_status(&mut self, message: &str);
}

/// A running sync session bound to one surface
pub struct Session<S: Surface> {
    model: AppModel,
    surface: S,
    msg_tx: Sender<Msg>,
    msg_rx: Receiver<Msg>,
    running: bool,
}

impl<S: Surface> Session<S> {
    pub fn new(model: AppModel, surface: S) -> Self {
        let (msg_tx, msg_rx) = mpsc::channel();
        Self {
            model,
            surface,
            msg_tx,
            msg_rx,
            running: true,
        }
    }

    /// Sender for feeding messages from other threads
    pub fn sender(&self) -> Sender<Msg> {
        self.msg_tx.clone()
    }

    pub fn model(&self) -> &AppModel {
        &self.model
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Show `initial_text` in the text panel and render the grid from it
    pub fn start(&mut self, initial_text: &str) {
        self.surface.publish_text(initial_text);
        self.surface.resize_panels(
            self.model.layout.left_panel_width,
            self.model.layout.right_panel_width,
        );
        self.dispatch(Msg::text_changed(initial_text));
    }

    /// Apply one message and execute the command it produces
    pub fn dispatch(&mut self, msg: Msg) {
        if let Some(cmd) = update(&mut self.model, msg) {
            self.process_cmd(cmd);
        }
    }

    fn process_cmd(&mut self, cmd: Cmd) {
        match cmd {
            Cmd::None => {}
            Cmd::RenderGrid => {
                let view = self.model.grid_view();
                self.surface.render_grid(&view);
            }
            Cmd::PublishText(text) => self.surface.publish_text(&text),
            Cmd::ResizeColumn { col, width } => self.surface.resize_column(col, width),
            Cmd::ResizePanels { left, right } => self.surface.resize_panels(left, right),
            Cmd::SetStatus(message) => self.surface.show_status(&message),
            Cmd::LoadFile { path } => {
                let tx = self.msg_tx.clone();
                std::thread::spawn(move || {
                    let result = std::fs::read_to_string(&path).map_err(|e| e.to_string());
                    let _ = tx.send(Msg::App(AppMsg::FileLoaded { path, result }));
                });
            }
            Cmd::SaveFile { path, content } => {
                let tx = self.msg_tx.clone();
                std::thread::spawn(move || {
                    let result = std::fs::write(&path, content).map_err(|e| e.to_string());
                    let _ = tx.send(Msg::App(AppMsg::SaveCompleted { path, result }));
                });
            }
            Cmd::Quit => {
                debug!("session quit requested");
                self.running = false;
            }
            Cmd::Batch(cmds) => {
                for cmd in cmds {
                    self.process_cmd(cmd);
                }
            }
        }
    }

    /// Apply every message already queued. Returns how many were applied.
    pub fn process_pending(&mut self) -> usize {
        let mut count = 0;
        while let Ok(msg) = self.msg_rx.try_recv() {
            self.dispatch(msg);
            count += 1;
        }
        count
    }

    /// Wait up to `timeout` for one message and apply it
    pub fn process_next(&mut self, timeout: Duration) -> bool {
        match self.msg_rx.recv_timeout(timeout) {
            Ok(msg) => {
                self.dispatch(msg);
                true
            }
            Err(_) => false,
        }
    }

    /// Apply messages until a quit is requested
    pub fn run(&mut self) {
        while self.running {
            match self.msg_rx.recv() {
                Ok(msg) => self.dispatch(msg),
                Err(_) => break,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::messages::{GridMsg, ResizeMsg};

    #[derive(Default)]
    struct Recorder {
        grids: Vec<GridView>,
        texts: Vec<String>,
        columns: Vec<(usize, f32)>,
        panels: Vec<(f32, f32)>,
        statuses: Vec<String>,
    }

    impl Surface for Recorder {
        fn render_grid(&mut self, view: &GridView) {
            self.grids.push(view.clone());
        }
        fn publish_text(&mut self, text: &str) {
            self.texts.push(text.to_string());
        }
        fn resize_column(&mut self, col: usize, width: f32) {
            self.columns.push((col, width));
        }
        fn resize_panels(&mut self, left: f32, right: f32) {
            self.panels.push((left, right));
        }
        fn show_status(&mut self, message: &str) {
            self.statuses.push(message.to_string());
        }
    }

    fn session() -> Session<Recorder> {
        Session::new(AppModel::default(), Recorder::default())
    }

    #[test]
    fn test_start_renders_sample() {
        let mut session = session();
        session.start(SAMPLE_CSV);

        let surface = session.surface();
        assert_eq!(surface.texts, vec![SAMPLE_CSV.to_string()]);
        assert_eq!(surface.panels, vec![(596.0, 596.0)]);
        assert_eq!(surface.grids.len(), 1);
        assert_eq!(surface.grids[0].column_count(), 4);
        assert_eq!(surface.grids[0].body().len(), 5);
        assert_eq!(
            session.model().sync.table().get(3, 2),
            Some("Paris, France")
        );
        assert_eq!(
            session.model().sync.table().get(4, 0),
            Some("Alice \"Wonderland\" Brown")
        );
    }

    #[test]
    fn test_cell_edit_publishes_without_render() {
        let mut session = session();
        session.start("a,b\n1,2");
        session.dispatch(Msg::cell_input(1, 0, "x"));

        let surface = session.surface();
        assert_eq!(surface.grids.len(), 1);
        assert_eq!(surface.texts.last().map(String::as_str), Some("a,b\nx,2"));
    }

    #[test]
    fn test_queued_messages_apply_in_order() {
        let mut session = session();
        session.start("");
        let tx = session.sender();
        tx.send(Msg::text_changed("a,b\n1,2")).unwrap();
        tx.send(Msg::cell_input(1, 1, "3")).unwrap();
        tx.send(Msg::Grid(GridMsg::Blur)).unwrap();

        assert_eq!(session.process_pending(), 3);
        assert_eq!(session.model().sync.text(), "a,b\n1,3");
    }

    #[test]
    fn test_column_drag_reaches_surface() {
        let mut session = session();
        session.start("name,age");
        session.dispatch(Msg::Resize(ResizeMsg::StartColumn { col: 1, x: 10.0 }));
        session.dispatch(Msg::Resize(ResizeMsg::Move { x: 40.0 }));
        session.dispatch(Msg::Resize(ResizeMsg::End));

        assert_eq!(session.surface().columns, vec![(1, 80.0)]);
    }

    #[test]
    fn test_save_and_load_round_trip_through_threads() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");

        let mut session = session();
        session.start("a,b\n1,2");
        session.dispatch(Msg::App(AppMsg::SaveFile(Some(path.clone()))));
        assert!(session.process_next(Duration::from_secs(5)));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "a,b\n1,2");
        assert!(!session.model().sync.document().is_modified);
        assert!(session
            .surface()
            .statuses
            .iter()
            .any(|s| s.starts_with("Saved:")));

        session.dispatch(Msg::text_changed("other"));
        session.dispatch(Msg::App(AppMsg::LoadFile(path)));
        assert!(session.process_next(Duration::from_secs(5)));
        assert_eq!(session.model().sync.text(), "a,b\n1,2");
        assert_eq!(session.model().sync.table().row_count(), 2);
    }

    #[test]
    fn test_quit_stops_run() {
        let mut session = session();
        session.sender().send(Msg::App(AppMsg::Quit)).unwrap();
        session.run();

        assert!(!session.is_running());
    }
}
