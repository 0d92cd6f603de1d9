use std::time::Instant;

use common::games::SessionRng;
use common::games::snake::{Direction, SnakeGameState, SnakeRenderFrame, SnakeSessionSettings};
use common::log;
use eframe::egui;

use crate::input::{collect_commands, InputCommand};
use crate::ticker::Ticker;
use crate::ui::render_board;

/// Owns the play session and wires egui frames, key presses and the tick
/// schedule to it.
pub struct SnakeApp {
    settings: SnakeSessionSettings,
    rng: SessionRng,
    state: SnakeGameState,
    ticker: Ticker,
    cell_size: f32,
    sessions_started: u32,
}

impl SnakeApp {
    pub fn new(settings: SnakeSessionSettings, seed: Option<u64>, cell_size: f32, now: Instant) -> Self {
        let mut rng = SessionRng::from_seed_or_random(seed);
        let state = SnakeGameState::new(&settings, &mut rng);
        let ticker = Ticker::new(settings.tick_interval, now);
        log!(
            "Session 1 started on a {}x{} field (seed {})",
            settings.field_size.width,
            settings.field_size.height,
            rng.seed()
        );

        Self {
            settings,
            rng,
            state,
            ticker,
            cell_size,
            sessions_started: 1,
        }
    }

    pub fn state(&self) -> &SnakeGameState {
        &self.state
    }

    pub fn handle_turn(&mut self, direction: Direction) {
        self.state.set_direction(direction);
    }

    /// Steps the session if a tick is due. Returns true if it stepped.
    pub fn handle_tick(&mut self, now: Instant) -> bool {
        if !self.ticker.tick_due(now) {
            return false;
        }
        self.state.step(&mut self.rng);
        true
    }

    /// Replaces a finished session with a fresh one. Ignored while playing.
    pub fn restart(&mut self, now: Instant) -> bool {
        if !self.state.is_game_over() {
            return false;
        }

        self.state = SnakeGameState::new(&self.settings, &mut self.rng);
        self.ticker.reset(now);
        self.sessions_started += 1;
        log!("Session {} started", self.sessions_started);
        true
    }

    fn handle_input(&mut self, ctx: &egui::Context, now: Instant) {
        for command in collect_commands(ctx) {
            match command {
                InputCommand::Turn(direction) => self.handle_turn(direction),
                InputCommand::Restart => {
                    self.restart(now);
                }
                InputCommand::Quit => ctx.send_viewport_cmd(egui::ViewportCommand::Close),
            }
        }
    }
}

impl eframe::App for SnakeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();
        self.handle_input(ctx, now);
        self.handle_tick(now);

        let frame = SnakeRenderFrame::from_state(self.state());
        egui::CentralPanel::default().show(ctx, |ui| {
            render_board(ui, &frame, self.cell_size);
        });

        if !self.state.is_game_over() {
            ctx.request_repaint_after(self.ticker.time_until_next(now));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::games::snake::{FieldSize, GameEndReason};
    use std::time::Duration;

    fn create_app(width: usize, now: Instant) -> SnakeApp {
        let settings = SnakeSessionSettings {
            field_size: FieldSize::new(width, 5),
            ..SnakeSessionSettings::default()
        };
        SnakeApp::new(settings, Some(42), 20.0, now)
    }

    #[test]
    fn test_tick_moves_snake() {
        let start = Instant::now();
        let mut app = create_app(5, start);
        let head = app.state().head();

        assert!(!app.handle_tick(start + Duration::from_millis(100)));
        assert_eq!(app.state().head(), head);

        assert!(app.handle_tick(start + Duration::from_millis(150)));
        assert!(app.state().head() != head);
    }

    #[test]
    fn test_stalled_frame_steps_once() {
        let start = Instant::now();
        let mut app = create_app(10, start);
        let head = app.state().head();

        assert!(app.handle_tick(start + Duration::from_millis(150 * 4)));
        assert!(!app.handle_tick(start + Duration::from_millis(150 * 4)));
        assert_eq!(app.state().head().x, head.x + 1);
    }

    #[test]
    fn test_turn_goes_to_state() {
        let start = Instant::now();
        let mut app = create_app(5, start);
        app.handle_turn(Direction::Up);
        assert_eq!(app.state().direction(), Direction::Up);
        app.handle_turn(Direction::Down);
        assert_eq!(app.state().direction(), Direction::Up);
    }

    #[test]
    fn test_restart_only_after_game_over() {
        let start = Instant::now();
        let mut app = create_app(5, start);
        assert!(!app.restart(start));

        // Head starts at (2,2) heading right on a 5-wide field; the wall is three ticks away.
        let mut now = start;
        for _ in 0..3 {
            now += Duration::from_millis(150);
            app.handle_tick(now);
        }
        assert_eq!(app.state().end_reason(), Some(GameEndReason::WallCollision));

        assert!(app.restart(now));
        assert!(!app.state().is_game_over());
        assert_eq!(app.state().score(), 0);
        assert_eq!(app.state().snake_len(), 1);
        assert!(!app.handle_tick(now + Duration::from_millis(100)));
    }
}
