use web_sys::CanvasRenderingContext2d;

use sketchboard_shared::{Shape, Surface, Viewport};

pub fn redraw(ctx: &CanvasRenderingContext2d, surface: &Surface, width: f64, height: f64) {
    ctx.clear_rect(0.0, 0.0, width, height);
    for shape in surface.shapes() {
        draw_shape(ctx, &surface.viewport, shape);
    }
}

fn draw_shape(ctx: &CanvasRenderingContext2d, viewport: &Viewport, shape: &Shape) {
    if shape.points.is_empty() {
        return;
    }
    let weight = shape.stroke_width * viewport.zoom;
    if shape.points.len() == 1 {
        let point = viewport.world_to_screen(shape.points[0]);
        ctx.set_fill_style_str(&shape.stroke);
        ctx.begin_path();
        let _ = ctx.arc(point.x, point.y, weight / 2.0, 0.0, std::f64::consts::PI * 2.0);
        ctx.fill();
        return;
    }
    ctx.set_stroke_style_str(&shape.stroke);
    ctx.set_line_width(weight);
    ctx.begin_path();
    let mut first = true;
    for point in &shape.points {
        let screen = viewport.world_to_screen(*point);
        if first {
            ctx.move_to(screen.x, screen.y);
            first = false;
        } else {
            ctx.line_to(screen.x, screen.y);
        }
    }
    ctx.stroke();
}
