use serde::{Deserialize, Serialize};

use crate::geometry::Point;

pub const PREVIEW_STROKE: &str = "red";
pub const COMMITTED_STROKE: &str = "blue";
pub const SELECTED_STROKE: &str = "green";
pub const STROKE_WIDTH: f64 = 2.0;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ShapeId(pub u64);

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShapeKind {
    Line,
    Polyline,
}

impl ShapeKind {
    pub fn from_points(points: &[Point]) -> Self {
        if points.len() == 2 {
            ShapeKind::Line
        } else {
            ShapeKind::Polyline
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ShapeKind::Line => "Line",
            ShapeKind::Polyline => "Polyline",
        }
    }
}

/// A drawable primitive. `stroke` is the color currently painted; committed
/// shapes keep their resting color in `base_stroke` so selection feedback can
/// revert it.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Shape {
    pub id: ShapeId,
    pub kind: ShapeKind,
    pub points: Vec<Point>,
    pub stroke: String,
    pub base_stroke: String,
    pub stroke_width: f64,
    pub selectable: bool,
    pub per_pixel_target_find: bool,
    pub has_decorations: bool,
    pub preview: bool,
}

impl Shape {
    /// Transient shape rebuilt on every pointer-move of an active gesture.
    pub fn preview(id: ShapeId, points: Vec<Point>) -> Self {
        Self {
            id,
            kind: ShapeKind::from_points(&points),
            points,
            stroke: PREVIEW_STROKE.to_string(),
            base_stroke: PREVIEW_STROKE.to_string(),
            stroke_width: STROKE_WIDTH,
            selectable: false,
            per_pixel_target_find: false,
            has_decorations: false,
            preview: true,
        }
    }

    /// Finalized shape added to the surface when a gesture ends.
    pub fn committed(id: ShapeId, points: Vec<Point>) -> Self {
        Self {
            id,
            kind: ShapeKind::from_points(&points),
            points,
            stroke: COMMITTED_STROKE.to_string(),
            base_stroke: COMMITTED_STROKE.to_string(),
            stroke_width: STROKE_WIDTH,
            selectable: true,
            per_pixel_target_find: true,
            has_decorations: false,
            preview: false,
        }
    }
}

/// Selection feedback owned by each shape: recolor on selection, revert on
/// deselection. Returns the log line describing the transition.
pub trait Selectable {
    fn select(&mut self) -> String;
    fn deselect(&mut self) -> String;
}

impl Selectable for Shape {
    fn select(&mut self) -> String {
        self.stroke = SELECTED_STROKE.to_string();
        format!("{} selected!", self.kind.label())
    }

    fn deselect(&mut self) -> String {
        self.stroke = self.base_stroke.clone();
        format!("{} deselected!", self.kind.label())
    }
}

#[cfg(test)]
#[path = "shape_test.rs"]
mod shape_test;
