use log::info;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::config::GameConfig;
use crate::grid::Direction;
use crate::menu::{Menu, MenuAction};
use crate::scene::Scene;
use crate::score::ScoreStore;
use crate::session::Session;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    Confirm,
    Escape,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Input {
    Quit,
    KeyDown(Key),
}

/// Whether the main loop should keep running.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Control {
    Continue,
    Exit,
}

pub enum Screen {
    Menu(Menu),
    Playing(Session),
}

/// Top-level state machine switching between the menu and a play session.
pub struct App {
    config: GameConfig,
    store: ScoreStore,
    screen: Screen,
    rng: StdRng,
}

impl App {
    pub fn new(config: GameConfig) -> Self {
        App::new_with_rng(config, StdRng::from_entropy())
    }

    pub fn new_with_rng(config: GameConfig, rng: StdRng) -> Self {
        let store = ScoreStore::new(config.best_score_path.clone());
        let screen = Screen::Menu(Menu::new(&store));
        Self {
            config,
            store,
            screen,
            rng,
        }
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn handle(&mut self, input: Input, now: f64) -> Control {
        let key = match input {
            Input::Quit => {
                info!("quit requested");
                return Control::Exit;
            }
            Input::KeyDown(key) => key,
        };

        let mut next_screen: Option<Screen> = None;
        match &mut self.screen {
            Screen::Menu(menu) => match key {
                Key::Up => menu.select_previous(),
                Key::Down => menu.select_next(),
                Key::Confirm => match menu.confirm(&self.store) {
                    MenuAction::Start => {
                        let rng = StdRng::from_rng(&mut self.rng)
                            .unwrap_or_else(|_| StdRng::from_entropy());
                        let session =
                            Session::new_with_rng(&self.config, self.store.clone(), now, rng);
                        next_screen = Some(Screen::Playing(session));
                    }
                    MenuAction::Exit => {
                        info!("exit selected");
                        return Control::Exit;
                    }
                    MenuAction::Stay => {}
                },
                _ => {}
            },
            Screen::Playing(session) => match key {
                Key::Up => session.turn(Direction::Up),
                Key::Down => session.turn(Direction::Down),
                Key::Left => session.turn(Direction::Left),
                Key::Right => session.turn(Direction::Right),
                Key::Escape => {
                    info!("back to menu, score {} discarded", session.score());
                    next_screen = Some(Screen::Menu(Menu::new(&self.store)));
                }
                Key::Confirm => {}
            },
        }

        if let Some(screen) = next_screen {
            self.screen = screen;
        }
        Control::Continue
    }

    /// Advances the running session, if any, according to the clock.
    pub fn update(&mut self, now: f64) {
        if let Screen::Playing(session) = &mut self.screen {
            session.step(now);
        }
    }

    pub fn scene(&self) -> Scene {
        match &self.screen {
            Screen::Menu(menu) => Scene::menu(menu, self.config.grid()),
            Screen::Playing(session) => Scene::session(session),
        }
    }
}
