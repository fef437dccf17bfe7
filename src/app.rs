use crate::config::GameConfig;
use crate::error::GameError;
use crate::game::{Countdown, GRID_COLS, GRID_ROWS, GameEvent, GameState, Transition};
use crate::terminal::TerminalGuard;
use crate::terminal::input::{self, Command, Cursor};
use crate::terminal::layout::Layout;
use crate::terminal::render;
use log::{debug, info};
use rand::Rng;
use std::time::{Duration, Instant};

const FRAME_MS: u64 = 33;

/// What the player did before quitting, printed once the terminal is restored.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SessionSummary
{
    pub games_played: u32,
    pub best_score: u32,
    pub last_score: u32,
}

/// The game state plus the countdown that drives it.
pub struct Session<R>
{
    game: GameState,
    countdown: Countdown,
    rng: R,
    summary: SessionSummary,
}

impl<R: Rng> Session<R>
{
    pub fn new(config: &GameConfig, mut rng: R, now: Instant) -> Self
    {
        let game = GameState::new(config.start_duration, &mut rng);
        let mut session = Self {
            game,
            countdown: Countdown::new(config.tick_interval),
            rng,
            summary: SessionSummary {
                games_played: 1,
                ..SessionSummary::default()
            },
        };
        session.sync_countdown(now);
        session
    }

    pub fn game(&self) -> &GameState
    {
        &self.game
    }

    pub fn summary(&self) -> SessionSummary
    {
        SessionSummary {
            last_score: self.game.score(),
            best_score: self.summary.best_score.max(self.game.score()),
            ..self.summary
        }
    }

    /// Fires the countdown if its tick is due.
    pub fn advance(&mut self, now: Instant) -> Option<Transition>
    {
        let tick = self.countdown.poll(now)?;
        Some(self.dispatch(GameEvent::Tick(tick), now))
    }

    /// Applies one event and re-arms or cancels the countdown to match.
    pub fn dispatch(&mut self, event: GameEvent, now: Instant) -> Transition
    {
        let score_before = self.game.score();
        let transition = self.game.apply(event, &mut self.rng);
        match transition {
            Transition::Ignored => {}
            Transition::Restarted => {
                self.summary.games_played += 1;
                self.summary.best_score = self.summary.best_score.max(score_before);
                debug!("[Session] {:?} -> {:?}", event, transition);
            }
            _ => debug!("[Session] {:?} -> {:?}", event, transition),
        }
        self.sync_countdown(now);
        transition
    }

    #[cfg(test)]
    pub fn time_until_tick(&self, now: Instant) -> Option<Duration>
    {
        self.countdown.time_until_due(now)
    }

    fn sync_countdown(&mut self, now: Instant)
    {
        self.countdown
            .sync(self.game.generation(), !self.game.is_game_over(), now);
    }
}

pub fn run(config: &GameConfig) -> Result<SessionSummary, GameError>
{
    let mut term = TerminalGuard::enter()?;
    let layout = Layout::new(GRID_ROWS, GRID_COLS);
    let mut cursor = Cursor::new(GRID_ROWS, GRID_COLS);
    let mut session = Session::new(config, config.rng(), Instant::now());
    let mut last_frame: Option<Instant> = None;

    info!(
        "[Session] Starting with a {}s countdown (seed {:?})",
        config.start_duration, config.seed
    );

    loop {
        let now = Instant::now();
        session.advance(now);

        for command in input::read_commands(&layout)? {
            let event = match command {
                Command::Quit => {
                    let summary = session.summary();
                    info!("[Session] Quit: {:?}", summary);
                    return Ok(summary);
                }
                Command::Move(direction) => {
                    cursor.step(direction);
                    None
                }
                Command::Select { row, col } => {
                    cursor.place(row, col);
                    Some(GameEvent::Select { row, col })
                }
                Command::Confirm if session.game().is_game_over() => Some(GameEvent::PlayAgain),
                Command::Confirm => {
                    let (row, col) = cursor.position();
                    Some(GameEvent::Select { row, col })
                }
                Command::PlayAgain => Some(GameEvent::PlayAgain),
            };
            if let Some(event) = event {
                session.dispatch(event, now);
            }
        }

        let frame_due = last_frame
            .is_none_or(|at| at.elapsed() >= Duration::from_millis(FRAME_MS));
        if frame_due {
            let lines = render::compose_frame(session.game(), &layout, Some(cursor.position()));
            render::draw(term.stdout(), &lines)?;
            last_frame = Some(Instant::now());
        }

        std::thread::sleep(Duration::from_millis(1));
    }
}
