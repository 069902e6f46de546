//! Drag-resize message handlers

use crate::commands::Cmd;
use crate::messages::ResizeMsg;
use crate::model::{AppModel, ColumnDrag, DragSession, DragUpdate, PanelDrag};

/// Handle panel and column resize messages
pub fn update_resize(model: &mut AppModel, msg: ResizeMsg) -> Option<Cmd> {
    match msg {
        ResizeMsg::StartPanel { x } => {
            let session = DragSession::Panel(PanelDrag {
                start_x: x,
                start_width: model.layout.left_panel_width,
                constraints: model.layout.panel_constraints(&model.config),
            });
            model.drag.press(session);
            None
        }

        ResizeMsg::StartColumn { col, x } => {
            // Only header columns carry a resize handle
            if col >= model.sync.table().column_count() {
                return None;
            }
            let session = DragSession::Column(ColumnDrag {
                col,
                start_x: x,
                start_width: model.layout.column_width(col),
                constraints: model.layout.column_constraints(&model.config),
            });
            model.drag.press(session);
            None
        }

        ResizeMsg::Move { x } => match model.drag.pointer_moved(x)? {
            DragUpdate::Panels { left, right } => {
                model.layout.left_panel_width = left;
                model.layout.right_panel_width = right;
                Some(Cmd::ResizePanels { left, right })
            }
            DragUpdate::Column { col, width } => {
                model.layout.set_column_width(col, width);
                Some(Cmd::ResizeColumn { col, width })
            }
        },

        ResizeMsg::End => {
            model.drag.release();
            None
        }

        ResizeMsg::ContainerResized { width } => {
            model.layout.set_container_width(width, &model.config);
            Some(Cmd::ResizePanels {
                left: model.layout.left_panel_width,
                right: model.layout.right_panel_width,
            })
        }
    }
}
