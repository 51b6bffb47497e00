use log::error;

use crate::score::ScoreStore;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MenuOption {
    Start,
    ResetBestScore,
    Exit,
}

impl MenuOption {
    pub const ALL: [MenuOption; 3] = [
        MenuOption::Start,
        MenuOption::ResetBestScore,
        MenuOption::Exit,
    ];

    pub fn label(self) -> &'static str {
        match self {
            MenuOption::Start => "Start",
            MenuOption::ResetBestScore => "Reset Best Score",
            MenuOption::Exit => "Exit",
        }
    }
}

/// What confirming the highlighted option asks the application to do.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MenuAction {
    Stay,
    Start,
    Exit,
}

#[derive(Clone, Debug)]
pub struct Menu {
    selected: usize,
    best_score: u32,
}

impl Menu {
    pub fn new(store: &ScoreStore) -> Self {
        Self {
            selected: 0,
            best_score: store.load(),
        }
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn selected_option(&self) -> MenuOption {
        MenuOption::ALL[self.selected]
    }

    pub fn best_score(&self) -> u32 {
        self.best_score
    }

    pub fn select_previous(&mut self) {
        let len = MenuOption::ALL.len();
        self.selected = (self.selected + len - 1) % len;
    }

    pub fn select_next(&mut self) {
        self.selected = (self.selected + 1) % MenuOption::ALL.len();
    }

    pub fn confirm(&mut self, store: &ScoreStore) -> MenuAction {
        match self.selected_option() {
            MenuOption::Start => MenuAction::Start,
            MenuOption::ResetBestScore => {
                if let Err(e) = store.reset() {
                    error!("error resetting best score: {}", e);
                }
                self.best_score = 0;
                MenuAction::Stay
            }
            MenuOption::Exit => MenuAction::Exit,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::fs;

    fn store(name: &str) -> ScoreStore {
        let path = env::temp_dir().join(format!("snake-menu-{}-{}.txt", name, std::process::id()));
        let _ = fs::remove_file(&path);
        ScoreStore::new(path)
    }

    #[test]
    fn up_from_first_option_wraps_to_last() {
        let mut menu = Menu::new(&store("wrap-up"));
        assert_eq!(menu.selected(), 0);
        menu.select_previous();
        assert_eq!(menu.selected(), 2);
        assert_eq!(menu.selected_option(), MenuOption::Exit);
    }

    #[test]
    fn down_cycles_through_every_option() {
        let mut menu = Menu::new(&store("cycle"));
        let mut seen = vec![];
        for _ in 0..4 {
            seen.push(menu.selected_option());
            menu.select_next();
        }
        assert_eq!(
            seen,
            vec![
                MenuOption::Start,
                MenuOption::ResetBestScore,
                MenuOption::Exit,
                MenuOption::Start
            ]
        );
    }

    #[test]
    fn confirm_reports_start_and_exit() {
        let store = store("confirm");
        let mut menu = Menu::new(&store);
        assert_eq!(menu.confirm(&store), MenuAction::Start);
        menu.select_previous();
        assert_eq!(menu.confirm(&store), MenuAction::Exit);
    }

    #[test]
    fn reset_best_score_persists_zero() {
        let store = store("reset");
        store.save(57).unwrap();
        let mut menu = Menu::new(&store);
        assert_eq!(menu.best_score(), 57);
        menu.select_next();
        assert_eq!(menu.confirm(&store), MenuAction::Stay);
        assert_eq!(menu.best_score(), 0);
        assert_eq!(store.load(), 0);
        assert_eq!(fs::read_to_string(store.path()).unwrap(), "0");
        fs::remove_file(store.path()).unwrap();
    }
}
