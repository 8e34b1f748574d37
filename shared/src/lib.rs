mod geometry;
mod log;
mod session;
mod shape;
mod surface;
mod viewport;

pub use geometry::{distance_to_segment, normalize_point, points_bounds, Bounds, Point};
pub use log::{LogSink, MemoryLog};
pub use session::{Mode, Session};
pub use shape::{
    Selectable, Shape, ShapeId, ShapeKind, COMMITTED_STROKE, PREVIEW_STROKE, SELECTED_STROKE,
    STROKE_WIDTH,
};
pub use surface::{Surface, DRAW_TOLERANCE, SELECT_TOLERANCE};
pub use viewport::{Viewport, MAX_ZOOM, MIN_ZOOM, ZOOM_STEP};
