//! Text surface message handlers

use crate::commands::Cmd;
use crate::messages::TextMsg;
use crate::model::AppModel;

/// Handle text surface messages
pub fn update_text(model: &mut AppModel, msg: TextMsg) -> Option<Cmd> {
    match msg {
        TextMsg::Changed(text) => {
            let cmd = model.sync.on_full_text_change(&text);
            model.table_replaced();
            Some(cmd)
        }
    }
}
