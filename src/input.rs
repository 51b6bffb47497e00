use macroquad::input::{KeyCode, is_key_pressed, is_quit_requested};
use snake::app::{Input, Key};

const KEY_BINDINGS: [(KeyCode, Key); 7] = [
    (KeyCode::Up, Key::Up),
    (KeyCode::Down, Key::Down),
    (KeyCode::Left, Key::Left),
    (KeyCode::Right, Key::Right),
    (KeyCode::Enter, Key::Confirm),
    (KeyCode::KpEnter, Key::Confirm),
    (KeyCode::Escape, Key::Escape),
];

/// Everything that happened since the previous frame. Never blocks.
pub fn poll() -> Vec<Input> {
    let mut events = vec![];
    if is_quit_requested() {
        events.push(Input::Quit);
    }
    for (code, key) in KEY_BINDINGS {
        if is_key_pressed(code) {
            events.push(Input::KeyDown(key));
        }
    }
    events
}
