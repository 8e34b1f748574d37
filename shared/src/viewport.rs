use crate::geometry::Point;

pub const MIN_ZOOM: f64 = 0.5;
pub const MAX_ZOOM: f64 = 5.0;
pub const ZOOM_STEP: f64 = 0.1;

/// Zoom scale plus pan translation, applied when mapping board coordinates
/// to the screen. Zoom never leaves `[MIN_ZOOM, MAX_ZOOM]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub zoom: f64,
    pub pan_x: f64,
    pub pan_y: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new()
    }
}

impl Viewport {
    pub fn new() -> Self {
        Self {
            zoom: 1.0,
            pan_x: 0.0,
            pan_y: 0.0,
        }
    }

    pub fn set_zoom(&mut self, zoom: f64) {
        self.zoom = zoom.clamp(MIN_ZOOM, MAX_ZOOM);
    }

    pub fn zoom_in(&mut self) {
        self.set_zoom(self.zoom + ZOOM_STEP);
    }

    pub fn zoom_out(&mut self) {
        self.set_zoom(self.zoom - ZOOM_STEP);
    }

    pub fn reset_zoom(&mut self) {
        self.zoom = 1.0;
    }

    /// Zoom towards `target` keeping the board point under `cursor` (screen
    /// coordinates) visually stationary.
    pub fn zoom_at(&mut self, cursor: Point, target: f64) {
        let target = target.clamp(MIN_ZOOM, MAX_ZOOM);
        let world_x = (cursor.x - self.pan_x) / self.zoom;
        let world_y = (cursor.y - self.pan_y) / self.zoom;
        self.zoom = target;
        self.pan_x = cursor.x - world_x * target;
        self.pan_y = cursor.y - world_y * target;
    }

    /// Screen-space translation; deltas are not scaled by zoom.
    pub fn pan_by(&mut self, dx: f64, dy: f64) {
        self.pan_x += dx;
        self.pan_y += dy;
    }

    pub fn world_to_screen(&self, point: Point) -> Point {
        Point {
            x: point.x * self.zoom + self.pan_x,
            y: point.y * self.zoom + self.pan_y,
        }
    }

    pub fn screen_to_world(&self, point: Point) -> Point {
        Point {
            x: (point.x - self.pan_x) / self.zoom,
            y: (point.y - self.pan_y) / self.zoom,
        }
    }

    pub fn zoom_percent(&self) -> u32 {
        (self.zoom * 100.0).round() as u32
    }
}

#[cfg(test)]
#[path = "viewport_test.rs"]
mod viewport_test;
