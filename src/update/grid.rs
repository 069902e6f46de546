//! Grid message handlers
//!
//! Header cells are read-only here even though the coordinator could edit
//! them: the grid never offers them for editing.

use crate::commands::Cmd;
use crate::csv::{CellEditState, CellPosition, PastePayload};
use crate::messages::GridMsg;
use crate::model::AppModel;

/// Handle grid messages
pub fn update_grid(model: &mut AppModel, msg: GridMsg) -> Option<Cmd> {
    match msg {
        GridMsg::Focus { row, col } => focus_cell(model, CellPosition::new(row, col)),
        GridMsg::Input { row, col, value } => {
            input_cell(model, CellPosition::new(row, col), &value)
        }
        GridMsg::Paste { row, col, payload } => {
            paste_into_cell(model, CellPosition::new(row, col), &payload)
        }
        GridMsg::Blur => {
            model.editing = None;
            None
        }
    }
}

/// Body cell that exists in the current table, or `None`
fn editable_value(model: &AppModel, position: CellPosition) -> Option<String> {
    if position.is_header() {
        return None;
    }
    model
        .sync
        .table()
        .get(position.row, position.col)
        .map(str::to_string)
}

/// Edit session for `position`, opening a new one if another cell had focus
fn edit_session(model: &mut AppModel, position: CellPosition) -> Option<&mut CellEditState> {
    let value = editable_value(model, position)?;
    let reuse = model
        .editing
        .as_ref()
        .is_some_and(|edit| edit.position == position);
    if !reuse {
        model.editing = Some(CellEditState::new(position, value));
    }
    model.editing.as_mut()
}

fn focus_cell(model: &mut AppModel, position: CellPosition) -> Option<Cmd> {
    edit_session(model, position)?;
    None
}

fn input_cell(model: &mut AppModel, position: CellPosition, value: &str) -> Option<Cmd> {
    edit_session(model, position)?.set_value(value);
    model.sync.on_cell_edit(position.row, position.col, value)
}

fn paste_into_cell(
    model: &mut AppModel,
    position: CellPosition,
    payload: &PastePayload,
) -> Option<Cmd> {
    let text = payload.text()?;
    let edit = edit_session(model, position)?;
    edit.insert_text(text);
    let value = edit.buffer().to_string();
    model.sync.on_cell_edit(position.row, position.col, &value)
}
