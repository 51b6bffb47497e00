mod input;
mod render;

use std::sync::OnceLock;

use log::info;
use macroquad::input::prevent_quit;
use macroquad::prelude::*;
use snake::app::{App, Control};
use snake::config::GameConfig;

static CONFIG: OnceLock<GameConfig> = OnceLock::new();

// Read once; the window is configured before `main` runs.
fn config() -> &'static GameConfig {
    CONFIG.get_or_init(|| GameConfig::load_or_default(&GameConfig::default_path()))
}

fn window_conf() -> Conf {
    pretty_env_logger::init();

    let config = config();
    Conf {
        window_title: config.title.clone(),
        window_width: config.width,
        window_height: config.height,
        window_resizable: false,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    let config = config().clone();
    info!(
        "starting {}x{} board, best score kept in {}",
        config.width,
        config.height,
        config.best_score_path.display()
    );

    // Window close goes through the same path as the Exit menu option.
    prevent_quit();
    let mut app = App::new(config);

    'frames: loop {
        let now = get_time();
        for event in input::poll() {
            if app.handle(event, now) == Control::Exit {
                break 'frames;
            }
        }

        app.update(now);
        render::draw(&app.scene());

        next_frame().await;
    }

    info!("exiting");
}
