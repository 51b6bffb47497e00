use macroquad::prelude::{clear_background, draw_rectangle, draw_rectangle_lines, draw_text, measure_text};
use snake::scene::{Anchor, Label, Scene};

const BORDER_THICKNESS: f32 = 1.0;

pub fn draw(scene: &Scene) {
    clear_background(scene.background);
    for r in &scene.rects {
        draw_rectangle(r.x, r.y, r.w, r.h, r.fill);
        draw_rectangle_lines(r.x, r.y, r.w, r.h, BORDER_THICKNESS, r.border);
    }
    for label in &scene.labels {
        draw_label(label);
    }
}

fn draw_label(label: &Label) {
    let dims = measure_text(&label.text, None, label.font_size, 1.0);
    // draw_text positions the baseline, not the top edge
    let (x, y) = match label.anchor {
        Anchor::TopLeft { x, y } => (x, y + dims.offset_y),
        Anchor::Center { x, y } => (
            x - dims.width * 0.5,
            y - dims.height * 0.5 + dims.offset_y,
        ),
    };
    draw_text(&label.text, x, y, label.font_size as f32, label.color);
}
