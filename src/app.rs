//! Screen state machine: main menu, a running puzzle, and the leaderboard.
//!
//! `App` owns the session and the record store and turns terminal events into
//! core calls. It never touches the terminal itself; `main` feeds it events and
//! ticks and asks it to render into a framebuffer.

use std::collections::hash_map::DefaultHasher;
use std::fmt::Display;
use std::hash::{Hash, Hasher};

use crossterm::event::KeyEvent;
use log::{info, warn};

use crate::config::AppConfig;
use crate::core::{elapsed_secs, GameSession, GameSnapshot, Leaderboard, RecordStore, SimpleRng};
use crate::input::{handle_key_event, handle_menu_key, should_quit, Click};
use crate::term::{FrameBuffer, GameView, MenuState, MenuView, RecordStatus, Viewport};
use crate::types::{GameAction, MenuAction, MenuItem, MAX_COLS, MAX_ROWS, MIN_COLS, MIN_ROWS};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Screen {
    Menu,
    Game,
    Leaderboard,
}

/// Step `value` by `delta`, clamped to `[min, max]`.
pub fn adjust_size(value: u8, delta: i8, min: u8, max: u8) -> u8 {
    let next = value as i16 + delta as i16;
    next.clamp(min as i16, max as i16) as u8
}

/// What a menu action asks the app to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuOutcome {
    Nothing,
    Play,
    ShowLeaderboard,
    Quit,
}

/// Main menu selection and the board size to play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Menu {
    selected: MenuItem,
    rows: u8,
    cols: u8,
}

impl Menu {
    pub fn new(rows: u8, cols: u8) -> Self {
        Self {
            selected: MenuItem::Play,
            rows: rows.clamp(MIN_ROWS, MAX_ROWS),
            cols: cols.clamp(MIN_COLS, MAX_COLS),
        }
    }

    pub fn selected(&self) -> MenuItem {
        self.selected
    }

    pub fn rows(&self) -> u8 {
        self.rows
    }

    pub fn cols(&self) -> u8 {
        self.cols
    }

    pub fn apply(&mut self, action: MenuAction) -> MenuOutcome {
        match action {
            MenuAction::Prev => self.selected = self.selected.prev(),
            MenuAction::Next => self.selected = self.selected.next(),
            MenuAction::Adjust(delta) => match self.selected {
                MenuItem::Rows => self.rows = adjust_size(self.rows, delta, MIN_ROWS, MAX_ROWS),
                MenuItem::Columns => self.cols = adjust_size(self.cols, delta, MIN_COLS, MAX_COLS),
                _ => {}
            },
            MenuAction::Select => {
                return match self.selected {
                    MenuItem::Play => MenuOutcome::Play,
                    MenuItem::Leaderboard => MenuOutcome::ShowLeaderboard,
                    MenuItem::Quit => MenuOutcome::Quit,
                    MenuItem::Rows | MenuItem::Columns => MenuOutcome::Nothing,
                };
            }
            MenuAction::Back => {}
        }
        MenuOutcome::Nothing
    }
}

pub struct App<S: RecordStore> {
    player: String,
    screen: Screen,
    menu: Menu,
    session: Option<GameSession>,
    /// Whether the current session's result was already submitted.
    submitted: bool,
    record: RecordStatus,
    leaderboard: Leaderboard,
    store: S,
    seeds: SimpleRng,
    quit: bool,
    view: GameView,
    snapshot: GameSnapshot,
}

impl<S> App<S>
where
    S: RecordStore,
    S::Error: Display,
{
    pub fn new(config: &AppConfig, seed: u32, mut store: S) -> Self {
        let leaderboard = match store.load() {
            Ok(board) => board,
            Err(e) => {
                warn!("leaderboard unavailable, starting empty: {:#}", e);
                Leaderboard::new()
            }
        };
        Self {
            player: config.player.clone(),
            screen: Screen::Menu,
            menu: Menu::new(config.rows, config.cols),
            session: None,
            submitted: false,
            record: RecordStatus::default(),
            leaderboard,
            store,
            seeds: SimpleRng::new(seed),
            quit: false,
            view: GameView::default(),
            snapshot: GameSnapshot::default(),
        }
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn menu(&self) -> &Menu {
        &self.menu
    }

    pub fn session(&self) -> Option<&GameSession> {
        self.session.as_ref()
    }

    pub fn leaderboard(&self) -> &Leaderboard {
        &self.leaderboard
    }

    pub fn record_status(&self) -> RecordStatus {
        self.record
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn should_quit(&self) -> bool {
        self.quit
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if should_quit(key) {
            self.quit = true;
            return;
        }
        match self.screen {
            Screen::Menu => {
                if let Some(action) = handle_menu_key(key) {
                    self.apply_menu(action);
                }
            }
            Screen::Leaderboard => {
                if let Some(MenuAction::Back | MenuAction::Select) = handle_menu_key(key) {
                    self.screen = Screen::Menu;
                }
            }
            Screen::Game => {
                if let Some(action) = handle_key_event(key) {
                    self.apply_game(action);
                }
            }
        }
    }

    pub fn apply_menu(&mut self, action: MenuAction) {
        match self.menu.apply(action) {
            MenuOutcome::Nothing => {}
            MenuOutcome::Play => self.start_game(),
            MenuOutcome::ShowLeaderboard => self.screen = Screen::Leaderboard,
            MenuOutcome::Quit => self.quit = true,
        }
    }

    pub fn apply_game(&mut self, action: GameAction) {
        if action == GameAction::Menu {
            self.session = None;
            self.screen = Screen::Menu;
            return;
        }
        let Some(session) = self.session.as_mut() else {
            return;
        };
        session.apply_action(action);
        if action == GameAction::Restart {
            self.reset_record();
        }
        self.submit_if_solved();
    }

    /// Mouse click on the board: move the cursor there and rotate.
    pub fn handle_click(&mut self, click: Click, viewport: Viewport) {
        if self.screen != Screen::Game {
            return;
        }
        let Some(session) = self.session.as_mut() else {
            return;
        };
        let Some((x, y)) =
            self.view
                .cell_at(session.rows(), session.cols(), viewport, click.column, click.row)
        else {
            return;
        };
        if session.set_cursor(x, y).is_ok() && session.rotate(x, y, click.clockwise).is_ok() {
            self.submit_if_solved();
        }
    }

    /// One fixed step of the game clock.
    pub fn tick(&mut self) {
        if let Some(session) = self.session.as_mut() {
            session.tick();
        }
    }

    pub fn start_game(&mut self) {
        let seed = self.seeds.next_u32();
        match GameSession::new(self.menu.rows, self.menu.cols, seed) {
            Ok(session) => self.start_session(session),
            Err(e) => warn!("cannot start game: {}", e),
        }
    }

    /// Switch to the game screen on `session`, replacing any running one.
    pub fn start_session(&mut self, session: GameSession) {
        info!(
            "{} starts a {}x{} puzzle",
            self.player,
            session.rows(),
            session.cols()
        );
        self.session = Some(session);
        self.screen = Screen::Game;
        self.reset_record();
        self.submit_if_solved();
    }

    fn reset_record(&mut self) {
        self.submitted = false;
        self.record = RecordStatus {
            best: self.leaderboard.best(&self.player).map(|e| e.score),
            new_record: false,
        };
    }

    fn submit_if_solved(&mut self) {
        if self.submitted {
            return;
        }
        let Some(entry) = self.session.as_ref().and_then(|s| s.record_entry(&self.player)) else {
            return;
        };
        self.submitted = true;
        self.record.new_record = self.leaderboard.submit(entry.clone());
        if self.record.new_record {
            info!(
                "new record for {}: {} ({} moves, {}s)",
                entry.player, entry.score, entry.moves, entry.elapsed_secs
            );
        }
        if let Err(e) = self.store.submit(entry) {
            warn!("could not save leaderboard: {:#}", e);
        }
    }

    /// Hash of everything the current frame depends on.
    pub fn fingerprint(&self, viewport: Viewport) -> u64 {
        let mut h = DefaultHasher::new();
        (viewport.width, viewport.height).hash(&mut h);
        self.screen.hash(&mut h);
        match self.screen {
            Screen::Menu => self.menu.hash(&mut h),
            Screen::Leaderboard => self.leaderboard.len().hash(&mut h),
            Screen::Game => {
                if let Some(s) = &self.session {
                    (s.episode_id(), s.moves(), s.cursor(), s.paused(), s.solved()).hash(&mut h);
                    elapsed_secs(s.elapsed_ticks()).hash(&mut h);
                }
                (self.record.best, self.record.new_record).hash(&mut h);
            }
        }
        h.finish()
    }

    pub fn render_into(&mut self, viewport: Viewport, fb: &mut FrameBuffer) {
        match (self.screen, &self.session) {
            (Screen::Game, Some(session)) => {
                session.snapshot_into(&mut self.snapshot);
                self.view.render_into(&self.snapshot, self.record, viewport, fb);
            }
            (Screen::Leaderboard, _) => {
                let ranked = self.leaderboard.ranked();
                MenuView.render_leaderboard_into(&ranked, &self.player, viewport, fb);
            }
            _ => {
                let state = MenuState {
                    selected: self.menu.selected,
                    rows: self.menu.rows,
                    cols: self.menu.cols,
                    player: &self.player,
                };
                MenuView.render_menu_into(&state, viewport, fb);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Grid, MemoryStore, Tile};
    use crate::types::{Angle, Direction, PipeKind};
    use crossterm::event::{KeyCode, KeyModifiers};

    fn app() -> App<MemoryStore> {
        let config = AppConfig {
            player: "ana".to_string(),
            ..AppConfig::default()
        };
        App::new(&config, 99, MemoryStore::new())
    }

    /// Straights along row 0, a bend at (8, 0), straights down column 8.
    /// Solved once the bend sits at angle 0.
    fn corner_session(bend: Angle) -> GameSession {
        let mut grid = Grid::filled(9, 9, Tile::new(PipeKind::Straight, Angle::Deg0)).unwrap();
        grid.set(8, 0, Tile::new(PipeKind::Bend, bend)).unwrap();
        for y in 1..8 {
            grid.set(8, y, Tile::new(PipeKind::Straight, Angle::Deg90)).unwrap();
        }
        grid.set(8, 8, Tile::new(PipeKind::End, Angle::Deg270)).unwrap();
        GameSession::from_grid(grid)
    }

    fn rotate_bend(app: &mut App<MemoryStore>, turns: usize) {
        for _ in 0..8 {
            app.apply_game(GameAction::Cursor(Direction::Right));
        }
        for _ in 0..turns {
            app.apply_game(GameAction::RotateCw);
        }
    }

    #[test]
    fn first_solve_is_a_new_record_and_saved_once() {
        let mut app = app();
        app.start_session(corner_session(Angle::Deg90));
        assert_eq!(app.screen(), Screen::Game);
        assert_eq!(app.record_status(), RecordStatus::default());

        rotate_bend(&mut app, 1);
        assert!(app.session().is_some_and(|s| s.solved()));
        assert!(app.record_status().new_record);
        assert_eq!(app.store().saves(), 1);
        assert_eq!(app.leaderboard().best("ana").map(|e| e.score), Some(656_100));

        app.apply_game(GameAction::RotateCw);
        app.apply_game(GameAction::Pause);
        app.tick();
        assert_eq!(app.store().saves(), 1);
        assert!(app.record_status().new_record);
    }

    #[test]
    fn lower_score_keeps_the_stored_best() {
        let mut app = app();
        app.start_session(corner_session(Angle::Deg90));
        rotate_bend(&mut app, 1);

        app.start_session(corner_session(Angle::Deg180));
        assert_eq!(app.record_status().best, Some(656_100));
        rotate_bend(&mut app, 2);
        assert_eq!(app.session().map(|s| s.score()), Some(328_050));
        assert!(!app.record_status().new_record);
        assert_eq!(app.store().saves(), 1);
        assert_eq!(app.leaderboard().best("ana").map(|e| e.score), Some(656_100));
    }

    #[test]
    fn restart_after_a_solve_submits_again() {
        let mut app = app();
        app.start_session(corner_session(Angle::Deg90));
        rotate_bend(&mut app, 1);
        app.apply_game(GameAction::Restart);
        assert!(!app.record_status().new_record);
        assert_eq!(app.record_status().best, Some(656_100));
    }

    #[test]
    fn clicks_on_a_hidden_board_do_nothing() {
        let mut app = app();
        app.start_session(GameSession::new(18, 36, 4).unwrap());
        let before = app.session().map(|s| (s.moves(), s.grid().clone()));
        let click = Click {
            column: 5,
            row: 3,
            clockwise: true,
        };
        app.handle_click(click, Viewport::new(40, 10));
        assert_eq!(app.session().map(|s| (s.moves(), s.grid().clone())), before);
    }

    #[test]
    fn adjust_size_clamps_both_ends() {
        assert_eq!(adjust_size(9, -1, 9, 18), 9);
        assert_eq!(adjust_size(9, -5, 9, 18), 9);
        assert_eq!(adjust_size(16, 5, 9, 18), 18);
        assert_eq!(adjust_size(12, 5, 9, 36), 17);
        assert_eq!(adjust_size(35, 1, 9, 36), 36);
        assert_eq!(adjust_size(36, 1, 9, 36), 36);
    }

    #[test]
    fn menu_adjusts_selected_dimension() {
        let mut menu = Menu::new(9, 9);
        menu.apply(MenuAction::Adjust(1));
        assert_eq!((menu.rows(), menu.cols()), (9, 9));

        menu.apply(MenuAction::Next);
        menu.apply(MenuAction::Adjust(5));
        menu.apply(MenuAction::Next);
        menu.apply(MenuAction::Adjust(40));
        assert_eq!((menu.rows(), menu.cols()), (14, 36));

        menu.apply(MenuAction::Adjust(-100));
        assert_eq!(menu.cols(), 9);
    }

    #[test]
    fn menu_select_outcomes() {
        let mut menu = Menu::new(9, 9);
        assert_eq!(menu.apply(MenuAction::Select), MenuOutcome::Play);
        menu.apply(MenuAction::Prev);
        assert_eq!(menu.apply(MenuAction::Select), MenuOutcome::Quit);
        menu.apply(MenuAction::Prev);
        assert_eq!(menu.apply(MenuAction::Select), MenuOutcome::ShowLeaderboard);
    }

    #[test]
    fn play_escape_and_quit() {
        let mut app = app();
        assert_eq!(app.screen(), Screen::Menu);

        app.handle_key(KeyEvent::from(KeyCode::Enter));
        assert_eq!(app.screen(), Screen::Game);
        assert_eq!(app.session().map(|s| s.rows()), Some(9));

        app.handle_key(KeyEvent::from(KeyCode::Esc));
        assert_eq!(app.screen(), Screen::Menu);
        assert!(app.session().is_none());

        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit());
    }

    #[test]
    fn leaderboard_screen_and_back() {
        let mut app = app();
        app.apply_menu(MenuAction::Prev);
        app.apply_menu(MenuAction::Prev);
        app.apply_menu(MenuAction::Select);
        assert_eq!(app.screen(), Screen::Leaderboard);
        app.handle_key(KeyEvent::from(KeyCode::Esc));
        assert_eq!(app.screen(), Screen::Menu);
    }

    #[test]
    fn ticks_only_advance_the_running_game() {
        let mut app = app();
        app.tick();
        app.apply_menu(MenuAction::Select);
        let solved = app.session().map_or(false, |s| s.solved());
        for _ in 0..10 {
            app.tick();
        }
        let expected = if solved { 0 } else { 10 };
        assert_eq!(app.session().map(|s| s.elapsed_ticks()), Some(expected));
    }

    #[test]
    fn fingerprint_tracks_menu_changes() {
        let mut app = app();
        let vp = Viewport::new(80, 24);
        let before = app.fingerprint(vp);
        assert_eq!(before, app.fingerprint(vp));
        app.apply_menu(MenuAction::Next);
        assert_ne!(before, app.fingerprint(vp));
        assert_ne!(app.fingerprint(vp), app.fingerprint(Viewport::new(100, 24)));
    }

    #[test]
    fn render_switches_views() {
        let mut app = app();
        let vp = Viewport::new(80, 24);
        let mut fb = FrameBuffer::new(0, 0);
        app.render_into(vp, &mut fb);
        assert!((0..fb.height()).any(|y| fb.row_text(y).contains("P I P E S")));

        app.apply_menu(MenuAction::Select);
        app.render_into(vp, &mut fb);
        assert!((0..fb.height()).any(|y| fb.row_text(y).contains("MOVES")));
    }
}
