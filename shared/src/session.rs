use crate::geometry::{normalize_point, Point};
use crate::log::LogSink;
use crate::shape::{Selectable, Shape, ShapeId};
use crate::surface::{Surface, DRAW_TOLERANCE, SELECT_TOLERANCE};
use crate::viewport::ZOOM_STEP;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    Draw,
    Select,
}

#[derive(Default)]
struct DrawGesture {
    active: bool,
    points: Vec<Point>,
    /// Single-slot handle to the transient shape replaced on every
    /// pointer-move sample.
    preview: Option<ShapeId>,
}

#[derive(Default)]
struct PanState {
    armed: bool,
    dragging: bool,
    anchor: Option<Point>,
    /// Area-selection setting suppressed at drag start, restored once both
    /// the drag and the modifier are released.
    saved_area_selection: Option<bool>,
}

/// One interactive canvas: mode, in-flight gestures, selection and the
/// surface they act on. All state transitions happen synchronously inside
/// the event methods below.
pub struct Session<L: LogSink> {
    surface: Surface,
    mode: Mode,
    gesture: DrawGesture,
    pan: PanState,
    selected: Option<ShapeId>,
    log: L,
}

impl<L: LogSink> Session<L> {
    /// Starts in select mode with area-selection enabled, matching the
    /// surface defaults.
    pub fn new(log: L) -> Self {
        Self {
            surface: Surface::new(),
            mode: Mode::Select,
            gesture: DrawGesture::default(),
            pan: PanState::default(),
            selected: None,
            log,
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    pub fn log(&self) -> &L {
        &self.log
    }

    pub fn selected(&self) -> Option<ShapeId> {
        self.selected
    }

    pub fn is_drawing(&self) -> bool {
        self.gesture.active
    }

    pub fn pending_points(&self) -> &[Point] {
        &self.gesture.points
    }

    pub fn panning_armed(&self) -> bool {
        self.pan.armed
    }

    pub fn zoom_percent(&self) -> u32 {
        self.surface.viewport.zoom_percent()
    }

    pub fn cursor_hint(&self) -> &'static str {
        if self.pan.armed {
            if self.pan.dragging {
                "grabbing"
            } else {
                "grab"
            }
        } else {
            match self.mode {
                Mode::Draw => "crosshair",
                Mode::Select => "default",
            }
        }
    }

    pub fn take_render_request(&mut self) -> bool {
        self.surface.take_render_request()
    }

    /// Explicit mode switch. Any in-progress draw gesture is abandoned; no
    /// gesture survives a mode change.
    pub fn set_mode(&mut self, mode: Mode) {
        self.abandon_gesture();
        self.pan.saved_area_selection = None;
        self.mode = mode;
        match mode {
            Mode::Draw => {
                self.surface.area_selection = false;
                self.surface.target_find_tolerance = DRAW_TOLERANCE;
                self.surface.set_all_selectable(false);
                self.deselect_current();
                self.log.log("Switched to draw mode.");
            }
            Mode::Select => {
                self.surface.area_selection = true;
                self.surface.target_find_tolerance = SELECT_TOLERANCE;
                self.surface.set_all_selectable(true);
                self.log.log("Switched to select mode.");
            }
        }
        tracing::debug!(?mode, "mode switched");
    }

    pub fn pointer_down(&mut self, position: Point) {
        let Some(position) = normalize_point(position) else {
            return;
        };
        if self.pan.armed {
            if self.pan.saved_area_selection.is_none() {
                self.pan.saved_area_selection = Some(self.surface.area_selection);
            }
            self.surface.area_selection = false;
            self.pan.anchor = Some(position);
            self.pan.dragging = true;
            return;
        }
        match self.mode {
            Mode::Draw => {
                self.gesture.active = true;
                self.gesture.points.clear();
                self.gesture
                    .points
                    .push(self.surface.viewport.screen_to_world(position));
            }
            Mode::Select => {
                let hit = self.surface.hit_test(position);
                if hit == self.selected {
                    return;
                }
                self.deselect_current();
                if let Some(id) = hit {
                    if let Some(shape) = self.surface.shape_mut(id) {
                        let line = shape.select();
                        self.log.log(&line);
                        self.selected = Some(id);
                        self.surface.request_render();
                    }
                }
            }
        }
    }

    pub fn pointer_move(&mut self, position: Point) {
        let Some(position) = normalize_point(position) else {
            return;
        };
        if self.pan.dragging {
            if let Some(anchor) = self.pan.anchor {
                self.surface
                    .viewport
                    .pan_by(position.x - anchor.x, position.y - anchor.y);
            }
            self.pan.anchor = Some(position);
            self.surface.request_render();
            return;
        }
        if !self.gesture.active {
            return;
        }
        self.gesture
            .points
            .push(self.surface.viewport.screen_to_world(position));
        if let Some(id) = self.gesture.preview.take() {
            self.surface.remove(id);
        }
        let id = self.surface.issue_id();
        self.surface.add(Shape::preview(id, self.gesture.points.clone()));
        self.gesture.preview = Some(id);
    }

    pub fn pointer_up(&mut self) {
        if self.pan.dragging {
            self.pan.dragging = false;
            self.pan.anchor = None;
            if !self.pan.armed {
                self.restore_area_selection();
            }
            return;
        }
        if !self.gesture.active {
            return;
        }
        if let Some(id) = self.gesture.preview.take() {
            self.surface.remove(id);
        }
        let points = std::mem::take(&mut self.gesture.points);
        self.gesture.active = false;
        // Degenerate gestures (a bare pointer-down) still commit; bounds are
        // clamped, input is never rejected.
        let id = self.surface.issue_id();
        let shape = Shape::committed(id, points);
        let line = format!("{} drawn.", shape.kind.label());
        tracing::debug!(points = shape.points.len(), "gesture finalized");
        self.surface.add(shape);
        self.log.log(&line);
    }

    /// Modifier key held: arm panning. A draw gesture in flight is abandoned.
    pub fn modifier_down(&mut self) {
        if self.pan.armed {
            return;
        }
        self.pan.armed = true;
        self.abandon_gesture();
    }

    pub fn modifier_up(&mut self) {
        self.pan.armed = false;
        if !self.pan.dragging {
            self.restore_area_selection();
        }
    }

    pub fn zoom_in(&mut self) {
        self.surface.viewport.zoom_in();
        self.log_zoom();
    }

    pub fn zoom_out(&mut self) {
        self.surface.viewport.zoom_out();
        self.log_zoom();
    }

    pub fn reset_zoom(&mut self) {
        self.surface.viewport.reset_zoom();
        self.log_zoom();
    }

    /// Wheel zoom anchored at the cursor: one step per notch, the board
    /// point under the cursor stays put. Scrolling up zooms in.
    pub fn wheel_zoom(&mut self, delta_y: f64, cursor: Point) {
        if delta_y == 0.0 || !delta_y.is_finite() {
            return;
        }
        let Some(cursor) = normalize_point(cursor) else {
            return;
        };
        let step = if delta_y < 0.0 { ZOOM_STEP } else { -ZOOM_STEP };
        let target = self.surface.viewport.zoom + step;
        self.surface.viewport.zoom_at(cursor, target);
        self.log_zoom();
    }

    /// Removes all shapes and resets gesture state; zoom and pan stay.
    pub fn clear(&mut self) {
        self.surface.clear();
        self.gesture = DrawGesture::default();
        self.selected = None;
        self.log.log("Canvas cleared.");
    }

    fn log_zoom(&mut self) {
        let percent = self.surface.viewport.zoom_percent();
        self.log.log(&format!("Zoom level set to {percent}%."));
        self.surface.request_render();
    }

    fn abandon_gesture(&mut self) {
        if let Some(id) = self.gesture.preview.take() {
            self.surface.remove(id);
        }
        self.gesture.points.clear();
        self.gesture.active = false;
    }

    fn deselect_current(&mut self) {
        if let Some(id) = self.selected.take() {
            if let Some(shape) = self.surface.shape_mut(id) {
                let line = shape.deselect();
                self.log.log(&line);
                self.surface.request_render();
            }
        }
    }

    fn restore_area_selection(&mut self) {
        if let Some(saved) = self.pan.saved_area_selection.take() {
            self.surface.area_selection = saved;
        }
    }
}

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;
