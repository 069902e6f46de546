//! Drag-resize sessions for the panel separator and column handles
//!
//! Each drag is `Inactive -> Dragging -> Inactive`: a press captures the
//! pointer position, the current size and the clamping constraints; moves
//! compute a new size from the pointer delta; release ends the session.

/// Limits for the text/grid panel split
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelConstraints {
    pub min_left: f32,
    pub min_right: f32,
    pub container_width: f32,
    pub separator_width: f32,
}

impl PanelConstraints {
    /// Widest the left panel may get while leaving `min_right` for the grid
    pub fn max_left(&self) -> f32 {
        self.container_width - self.separator_width - self.min_right
    }

    /// Clamp a left panel width. The minimum wins if the container is too
    /// narrow to honor both limits.
    pub fn clamp_left(&self, width: f32) -> f32 {
        width.min(self.max_left()).max(self.min_left)
    }

    /// Width left for the grid panel next to a left panel of `left`
    pub fn right_for(&self, left: f32) -> f32 {
        self.container_width - left - self.separator_width
    }
}

/// Limits for a single column width
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColumnConstraints {
    pub min_width: f32,
}

impl ColumnConstraints {
    pub fn clamp(&self, width: f32) -> f32 {
        width.max(self.min_width)
    }
}

/// Separator drag between the text and grid panels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelDrag {
    pub start_x: f64,
    pub start_width: f32,
    pub constraints: PanelConstraints,
}

impl PanelDrag {
    /// Panel widths `(left, right)` for the pointer at `x`
    pub fn widths_at(&self, x: f64) -> (f32, f32) {
        let delta = (x - self.start_x) as f32;
        let left = self.constraints.clamp_left(self.start_width + delta);
        (left, self.constraints.right_for(left))
    }
}

/// Column handle drag
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColumnDrag {
    pub col: usize,
    pub start_x: f64,
    pub start_width: f32,
    pub constraints: ColumnConstraints,
}

impl ColumnDrag {
    /// Column width for the pointer at `x`
    pub fn width_at(&self, x: f64) -> f32 {
        let delta = (x - self.start_x) as f32;
        self.constraints.clamp(self.start_width + delta)
    }
}

/// An active drag gesture
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragSession {
    Panel(PanelDrag),
    Column(ColumnDrag),
}

/// Sizes produced by moving the pointer during a drag
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragUpdate {
    Panels { left: f32, right: f32 },
    Column { col: usize, width: f32 },
}

impl DragSession {
    pub fn update(&self, x: f64) -> DragUpdate {
        match self {
            DragSession::Panel(drag) => {
                let (left, right) = drag.widths_at(x);
                DragUpdate::Panels { left, right }
            }
            DragSession::Column(drag) => DragUpdate::Column {
                col: drag.col,
                width: drag.width_at(x),
            },
        }
    }
}

/// Drag state machine
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum DragState {
    #[default]
    Inactive,
    Dragging(DragSession),
}

impl DragState {
    pub fn is_dragging(&self) -> bool {
        matches!(self, DragState::Dragging(_))
    }

    /// Enter `Dragging`, replacing any session still in progress
    pub fn press(&mut self, session: DragSession) {
        *self = DragState::Dragging(session);
    }

    /// Compute the sizes for a pointer move; `None` while inactive
    pub fn pointer_moved(&self, x: f64) -> Option<DragUpdate> {
        match self {
            DragState::Inactive => None,
            DragState::Dragging(session) => Some(session.update(x)),
        }
    }

    /// Return to `Inactive`, handing back the finished session
    pub fn release(&mut self) -> Option<DragSession> {
        match std::mem::take(self) {
            DragState::Inactive => None,
            DragState::Dragging(session) => Some(session),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn panel_constraints() -> PanelConstraints {
        PanelConstraints {
            min_left: 100.0,
            min_right: 100.0,
            container_width: 1000.0,
            separator_width: 8.0,
        }
    }

    #[test]
    fn test_panel_drag_follows_pointer() {
        let drag = PanelDrag {
            start_x: 500.0,
            start_width: 496.0,
            constraints: panel_constraints(),
        };

        assert_eq!(drag.widths_at(550.0), (546.0, 446.0));
        assert_eq!(drag.widths_at(400.0), (396.0, 596.0));
    }

    #[test]
    fn test_panel_drag_clamps_both_sides() {
        let drag = PanelDrag {
            start_x: 500.0,
            start_width: 496.0,
            constraints: panel_constraints(),
        };

        assert_eq!(drag.widths_at(0.0), (100.0, 892.0));
        // 1000 - 8 - 100
        assert_eq!(drag.widths_at(2000.0), (892.0, 100.0));
    }

    #[test]
    fn test_panel_clamp_narrow_container_prefers_minimum() {
        let constraints = PanelConstraints {
            container_width: 150.0,
            ..panel_constraints()
        };

        assert_eq!(constraints.clamp_left(500.0), 100.0);
        assert_eq!(constraints.clamp_left(0.0), 100.0);
    }

    #[test]
    fn test_column_drag_clamps_to_minimum() {
        let drag = ColumnDrag {
            col: 2,
            start_x: 300.0,
            start_width: 80.0,
            constraints: ColumnConstraints { min_width: 50.0 },
        };

        assert_eq!(drag.width_at(340.0), 120.0);
        assert_eq!(drag.width_at(290.0), 70.0);
        assert_eq!(drag.width_at(100.0), 50.0);
    }

    #[test]
    fn test_drag_state_lifecycle() {
        let mut state = DragState::default();
        assert!(!state.is_dragging());
        assert_eq!(state.pointer_moved(10.0), None);

        state.press(DragSession::Column(ColumnDrag {
            col: 0,
            start_x: 0.0,
            start_width: 60.0,
            constraints: ColumnConstraints { min_width: 50.0 },
        }));
        assert!(state.is_dragging());
        assert_eq!(
            state.pointer_moved(15.0),
            Some(DragUpdate::Column { col: 0, width: 75.0 })
        );

        assert!(state.release().is_some());
        assert!(!state.is_dragging());
        assert_eq!(state.release(), None);
    }
}
