//! Renderer-neutral description of one frame.

use macroquad::color::Color;
use rand::Rng;

use crate::grid::Grid;
use crate::menu::{Menu, MenuOption};
use crate::session::Session;

pub const BLACK: Color = Color::new(0.0, 0.0, 0.0, 1.0);
pub const WHITE: Color = Color::new(1.0, 1.0, 1.0, 1.0);
pub const GREEN: Color = Color::new(0.0, 1.0, 0.0, 1.0);
pub const RED: Color = Color::new(1.0, 0.0, 0.0, 1.0);
pub const GRAY: Color = Color::new(0.5, 0.5, 0.5, 1.0);

const TITLE_FONT_SIZE: u16 = 72;
const OPTION_FONT_SIZE: u16 = 50;
const OPTION_SPACING: f32 = 50.0;
const HUD_FONT_SIZE: u16 = 36;

#[derive(Clone, Debug, PartialEq)]
pub struct Rectangle {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
    pub fill: Color,
    pub border: Color,
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Anchor {
    TopLeft { x: f32, y: f32 },
    Center { x: f32, y: f32 },
}

#[derive(Clone, Debug, PartialEq)]
pub struct Label {
    pub text: String,
    pub font_size: u16,
    pub color: Color,
    pub anchor: Anchor,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Scene {
    pub background: Color,
    pub rects: Vec<Rectangle>,
    pub labels: Vec<Label>,
}

impl Scene {
    fn blank() -> Self {
        Self {
            background: BLACK,
            rects: vec![],
            labels: vec![],
        }
    }

    pub fn menu(menu: &Menu, grid: Grid) -> Self {
        let (w, h) = (grid.width as f32, grid.height as f32);
        let mut scene = Self::blank();
        scene.labels.push(Label {
            text: "SNAKE".to_string(),
            font_size: TITLE_FONT_SIZE,
            color: GREEN,
            anchor: Anchor::Center { x: w / 2.0, y: h / 4.0 },
        });
        for (i, option) in MenuOption::ALL.iter().enumerate() {
            let color = if i == menu.selected() { WHITE } else { GRAY };
            scene.labels.push(Label {
                text: option.label().to_string(),
                font_size: OPTION_FONT_SIZE,
                color,
                anchor: Anchor::Center {
                    x: w / 2.0,
                    y: h / 2.0 + i as f32 * OPTION_SPACING,
                },
            });
        }
        scene.labels.push(Label {
            text: format!("Best Score: {}", menu.best_score()),
            font_size: HUD_FONT_SIZE,
            color: WHITE,
            anchor: Anchor::TopLeft { x: 10.0, y: 10.0 },
        });
        scene
    }

    pub fn session<R: Rng>(session: &Session<R>) -> Self {
        let size = session.grid().cell_size as f32;
        let cell_rect = |x: i32, y: i32, fill: Color| Rectangle {
            x: x as f32,
            y: y as f32,
            w: size,
            h: size,
            fill,
            border: BLACK,
        };

        let mut scene = Self::blank();
        for cell in session.snake().segments() {
            scene.rects.push(cell_rect(cell.x, cell.y, GREEN));
        }
        let food = session.food().position();
        scene.rects.push(cell_rect(food.x, food.y, RED));

        for (i, text) in [
            format!("Score: {}", session.score()),
            format!("Best Score: {}", session.best_score()),
        ]
        .into_iter()
        .enumerate()
        {
            scene.labels.push(Label {
                text,
                font_size: HUD_FONT_SIZE,
                color: WHITE,
                anchor: Anchor::TopLeft {
                    x: 10.0,
                    y: 10.0 + i as f32 * 30.0,
                },
            });
        }
        scene
    }
}
