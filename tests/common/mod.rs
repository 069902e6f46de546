//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use gridsync::config::AppConfig;
use gridsync::csv::{GridView, Table};
use gridsync::messages::Msg;
use gridsync::model::AppModel;
use gridsync::runtime::{Session, Surface};
use gridsync::update::update;

/// Create a test model whose text (and table) is `text`
pub fn test_model(text: &str) -> AppModel {
    test_model_with_config(text, AppConfig::default())
}

pub fn test_model_with_config(text: &str, config: AppConfig) -> AppModel {
    let mut model = AppModel::new(config);
    update(&mut model, Msg::text_changed(text));
    model
}

/// Table contents as nested string slices
pub fn rows(table: &Table) -> Vec<Vec<&str>> {
    table
        .rows()
        .iter()
        .map(|r| r.iter().map(String::as_str).collect())
        .collect()
}

/// Surface that records everything it is asked to show
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub grids: Vec<GridView>,
    pub texts: Vec<String>,
    pub columns: Vec<(usize, f32)>,
    pub panels: Vec<(f32, f32)>,
    pub statuses: Vec<String>,
}

impl RecordingSurface {
    pub fn last_text(&self) -> Option<&str> {
        self.texts.last().map(String::as_str)
    }

    pub fn last_grid(&self) -> Option<&GridView> {
        self.grids.last()
    }
}

impl Surface for RecordingSurface {
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

/// Session over a recording surface, started with `text`
pub fn test_session(text: &str) -> Session<RecordingSurface> {
    let mut session = Session::new(AppModel::default(), RecordingSurface::default());
    session.start(text);
    session
}
