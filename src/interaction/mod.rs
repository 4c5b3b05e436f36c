use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TouchLineMode {
    /// Touch line follows the nearest data sample (default behavior).
    Magnet,
    /// Touch line follows the raw pointer position without snapping.
    Normal,
    /// Touch line remains hidden regardless of pointer movement.
    Hidden,
}

/// Deterministic snap candidate used to drive the touch line and readout.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TouchSnap {
    pub x: f64,
    pub y: f64,
    pub graph_x: f64,
    pub graph_y: f64,
}

/// Public touch readout state exposed to host applications.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TouchState {
    pub visible: bool,
    pub x: f64,
    pub y: f64,
    pub snapped_x: Option<f64>,
    pub snapped_y: Option<f64>,
    pub snapped_graph_x: Option<f64>,
    pub snapped_graph_y: Option<f64>,
}

impl Default for TouchState {
    fn default() -> Self {
        Self {
            visible: false,
            x: 0.0,
            y: 0.0,
            snapped_x: None,
            snapped_y: None,
            snapped_graph_x: None,
            snapped_graph_y: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InteractionState {
    touch_line_mode: TouchLineMode,
    cursor_x: f64,
    cursor_y: f64,
    touch: TouchState,
}

impl Default for InteractionState {
    fn default() -> Self {
        Self {
            touch_line_mode: TouchLineMode::Magnet,
            cursor_x: 0.0,
            cursor_y: 0.0,
            touch: TouchState::default(),
        }
    }
}

impl InteractionState {
    #[must_use]
    pub fn touch_line_mode(self) -> TouchLineMode {
        self.touch_line_mode
    }

    pub fn set_touch_line_mode(&mut self, mode: TouchLineMode) {
        self.touch_line_mode = mode;
    }

    #[must_use]
    pub fn cursor(self) -> (f64, f64) {
        (self.cursor_x, self.cursor_y)
    }

    #[must_use]
    pub fn touch(self) -> TouchState {
        self.touch
    }

    pub fn on_pointer_move(&mut self, x: f64, y: f64) {
        self.cursor_x = x;
        self.cursor_y = y;
        self.touch.visible = true;
        self.touch.x = x;
        self.touch.y = y;
    }

    pub fn on_pointer_leave(&mut self) {
        self.touch.visible = false;
        self.touch.snapped_x = None;
        self.touch.snapped_y = None;
        self.touch.snapped_graph_x = None;
        self.touch.snapped_graph_y = None;
    }

    pub fn set_touch_snap(&mut self, snap: Option<TouchSnap>) {
        match snap {
            Some(snap) => {
                self.touch.snapped_x = Some(snap.x);
                self.touch.snapped_y = Some(snap.y);
                self.touch.snapped_graph_x = Some(snap.graph_x);
                self.touch.snapped_graph_y = Some(snap.graph_y);
            }
            None => {
                self.touch.snapped_x = None;
                self.touch.snapped_y = None;
                self.touch.snapped_graph_x = None;
                self.touch.snapped_graph_y = None;
            }
        }
    }
}
