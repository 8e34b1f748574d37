use crate::geometry::{distance_to_segment, points_bounds, Point};
use crate::shape::{Shape, ShapeId};
use crate::viewport::Viewport;

/// Hit-test tolerance while drawing: near zero so a new stroke is never
/// swallowed by an accidental selection.
pub const DRAW_TOLERANCE: f64 = 1.0;
/// Hit-test tolerance while selecting, in screen pixels.
pub const SELECT_TOLERANCE: f64 = 6.0;

/// Owns the shape list and the view transform. Everything else acts on it.
pub struct Surface {
    shapes: Vec<Shape>,
    pub viewport: Viewport,
    pub area_selection: bool,
    pub target_find_tolerance: f64,
    needs_render: bool,
    next_id: u64,
}

impl Default for Surface {
    fn default() -> Self {
        Self::new()
    }
}

impl Surface {
    pub fn new() -> Self {
        Self {
            shapes: Vec::new(),
            viewport: Viewport::new(),
            area_selection: true,
            target_find_tolerance: SELECT_TOLERANCE,
            needs_render: false,
            next_id: 0,
        }
    }

    pub fn issue_id(&mut self) -> ShapeId {
        let id = ShapeId(self.next_id);
        self.next_id += 1;
        id
    }

    pub fn add(&mut self, shape: Shape) {
        self.shapes.push(shape);
        self.request_render();
    }

    pub fn remove(&mut self, id: ShapeId) -> Option<Shape> {
        let index = self.shapes.iter().position(|shape| shape.id == id)?;
        self.request_render();
        Some(self.shapes.remove(index))
    }

    pub fn shape(&self, id: ShapeId) -> Option<&Shape> {
        self.shapes.iter().find(|shape| shape.id == id)
    }

    pub fn shape_mut(&mut self, id: ShapeId) -> Option<&mut Shape> {
        self.shapes.iter_mut().find(|shape| shape.id == id)
    }

    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    pub fn set_all_selectable(&mut self, selectable: bool) {
        for shape in &mut self.shapes {
            shape.selectable = selectable;
        }
    }

    /// Removes every shape. The viewport is left as-is.
    pub fn clear(&mut self) {
        self.shapes.clear();
        self.request_render();
    }

    /// Topmost selectable shape under the given screen position, if any.
    pub fn hit_test(&self, screen: Point) -> Option<ShapeId> {
        self.shapes
            .iter()
            .rev()
            .filter(|shape| shape.selectable)
            .find(|shape| self.shape_hit(shape, screen))
            .map(|shape| shape.id)
    }

    fn shape_hit(&self, shape: &Shape, screen: Point) -> bool {
        if shape.points.is_empty() {
            return false;
        }
        let zoom = self.viewport.zoom;
        let threshold = (shape.stroke_width * zoom / 2.0).max(self.target_find_tolerance);

        if !shape.per_pixel_target_find {
            let Some(bounds) = points_bounds(&shape.points) else {
                return false;
            };
            let top_left = self.viewport.world_to_screen(Point::new(bounds.min_x, bounds.min_y));
            let bottom_right = self.viewport.world_to_screen(Point::new(bounds.max_x, bounds.max_y));
            return screen.x >= top_left.x - threshold
                && screen.x <= bottom_right.x + threshold
                && screen.y >= top_left.y - threshold
                && screen.y <= bottom_right.y + threshold;
        }

        if shape.points.len() == 1 {
            let point = self.viewport.world_to_screen(shape.points[0]);
            let dx = point.x - screen.x;
            let dy = point.y - screen.y;
            return dx * dx + dy * dy <= threshold * threshold;
        }
        for window in shape.points.windows(2) {
            let start = self.viewport.world_to_screen(window[0]);
            let end = self.viewport.world_to_screen(window[1]);
            let distance = distance_to_segment(screen.x, screen.y, start.x, start.y, end.x, end.y);
            if distance <= threshold {
                return true;
            }
        }
        false
    }

    pub fn request_render(&mut self) {
        self.needs_render = true;
    }

    /// Returns and clears the pending render request. Callers may coalesce
    /// redraws to the next display frame.
    pub fn take_render_request(&mut self) -> bool {
        std::mem::take(&mut self.needs_render)
    }
}

#[cfg(test)]
#[path = "surface_test.rs"]
mod surface_test;
