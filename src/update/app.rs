//! App message handlers (file operations, session control)

use tracing::warn;

use crate::commands::Cmd;
use crate::messages::AppMsg;
use crate::model::AppModel;

/// Handle app messages (file operations, session control)
pub fn update_app(model: &mut AppModel, msg: AppMsg) -> Option<Cmd> {
    match msg {
        AppMsg::LoadFile(path) => {
            model.ui.is_loading = true;
            model.ui.set_status("Loading...");
            Some(Cmd::LoadFile { path })
        }

        AppMsg::FileLoaded { path, result } => {
            model.ui.is_loading = false;
            match result {
                Ok(content) => {
                    let render = model.sync.load_file(&content, path.clone());
                    model.table_replaced();
                    Some(Cmd::batch(vec![
                        render,
                        Cmd::PublishText(content),
                        status(model, format!("Loaded: {}", path.display())),
                    ]))
                }
                Err(e) => {
                    warn!("Failed to load {}: {}", path.display(), e);
                    Some(status(model, format!("Error: {}", e)))
                }
            }
        }

        AppMsg::SaveFile(target) => {
            let path = target.or_else(|| model.sync.document().file_path.clone());
            match path {
                Some(path) => {
                    model.ui.is_saving = true;
                    model.ui.set_status("Saving...");
                    Some(Cmd::SaveFile {
                        path,
                        content: model.sync.text(),
                    })
                }
                None => Some(status(model, "No file path - cannot save")),
            }
        }

        AppMsg::SaveCompleted { path, result } => {
            model.ui.is_saving = false;
            match result {
                Ok(()) => {
                    model.sync.document_mut().mark_saved(&path);
                    Some(status(model, format!("Saved: {}", path.display())))
                }
                Err(e) => {
                    warn!("Failed to save {}: {}", path.display(), e);
                    Some(status(model, format!("Error: {}", e)))
                }
            }
        }

        AppMsg::ShowGrid => Some(Cmd::RenderGrid),

        AppMsg::ShowText => Some(Cmd::PublishText(model.sync.text())),

        AppMsg::DumpJson => match serde_json::to_string_pretty(model.sync.table()) {
            Ok(json) => Some(Cmd::SetStatus(json)),
            Err(e) => Some(status(model, format!("Error: {}", e))),
        },

        AppMsg::Quit => Some(Cmd::Quit),
    }
}

/// Record a status message and return the command that shows it
fn status(model: &mut AppModel, message: impl Into<String>) -> Cmd {
    let message = message.into();
    model.ui.set_status(message.clone());
    Cmd::SetStatus(message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_file_loaded_replaces_table_and_text() {
        let mut model = AppModel::default();
        let cmd = update_app(
            &mut model,
            AppMsg::FileLoaded {
                path: PathBuf::from("people.csv"),
                result: Ok("name,age\nAlice,30".to_string()),
            },
        )
        .unwrap();

        assert!(cmd.needs_render());
        assert_eq!(cmd.published_text(), Some("name,age\nAlice,30"));
        assert_eq!(model.sync.table().get(1, 0), Some("Alice"));
        assert!(!model.sync.document().is_modified);
        assert!(!model.ui.is_loading);
        assert_eq!(model.layout.column_widths.len(), 2);
    }

    #[test]
    fn test_file_load_error_keeps_table() {
        let mut model = AppModel::default();
        model.sync.on_full_text_change("a,b");

        let cmd = update_app(
            &mut model,
            AppMsg::FileLoaded {
                path: PathBuf::from("missing.csv"),
                result: Err("not found".to_string()),
            },
        );

        assert_eq!(cmd, Some(Cmd::status("Error: not found")));
        assert_eq!(model.sync.text(), "a,b");
    }

    #[test]
    fn test_save_without_path_reports_status() {
        let mut model = AppModel::default();
        let cmd = update_app(&mut model, AppMsg::SaveFile(None));

        assert_eq!(cmd, Some(Cmd::status("No file path - cannot save")));
        assert!(!model.ui.is_saving);
    }

    #[test]
    fn test_save_uses_canonical_text() {
        let mut model = AppModel::default();
        model.sync.on_full_text_change("a,b\n1,2");
        model.sync.on_cell_edit(1, 0, "x y");

        let cmd = update_app(&mut model, AppMsg::SaveFile(Some(PathBuf::from("out.csv"))));

        assert_eq!(
            cmd,
            Some(Cmd::SaveFile {
                path: PathBuf::from("out.csv"),
                content: "a,b\nx y,2".to_string(),
            })
        );
        assert!(model.ui.is_saving);
    }

    #[test]
    fn test_save_completed_marks_document_clean() {
        let mut model = AppModel::default();
        model.sync.on_full_text_change("a,b");
        assert!(model.sync.document().is_modified);

        update_app(
            &mut model,
            AppMsg::SaveCompleted {
                path: PathBuf::from("out.csv"),
                result: Ok(()),
            },
        );

        assert!(!model.sync.document().is_modified);
        assert_eq!(model.sync.document().display_name(), "out.csv");
    }

    #[test]
    fn test_dump_json() {
        let mut model = AppModel::default();
        model.sync.on_full_text_change("a,b\n1");

        let cmd = update_app(&mut model, AppMsg::DumpJson);
        let Some(Cmd::SetStatus(json)) = cmd else {
            panic!("expected status, got {:?}", cmd);
        };
        let parsed: Vec<Vec<String>> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, vec![vec!["a", "b"], vec!["1"]]);
    }
}
