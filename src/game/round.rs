use crate::game::countdown::Tick;
use crate::game::grid::{Board, GRID_COLS, GRID_ROWS};
use crate::game::palette::Color;
use log::{debug, info};
use rand::Rng;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameEvent
{
    Tick(Tick),
    Select
    {
        row: usize,
        col: usize,
    },
    PlayAgain,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transition
{
    Ignored,
    Selected,
    RoundCleared
    {
        score: u32,
        next_duration: u32,
    },
    Ticked
    {
        timer: u32,
    },
    GameOver,
    Restarted,
}

#[derive(Clone, Debug)]
pub struct GameState
{
    board: Board,
    target: Color,
    timer: u32,
    round: u32,
    score: u32,
    game_over: bool,
    generation: u64,
    start_duration: u32,
}

impl GameState
{
    pub fn new(start_duration: u32, rng: &mut impl Rng) -> Self
    {
        let mut state = Self {
            board: Board::from_cells(Vec::new()),
            target: Color::Red,
            timer: 0,
            round: 1,
            score: 0,
            game_over: false,
            generation: 0,
            start_duration: start_duration.max(1),
        };
        state.start_round(state.start_duration, rng);
        state
    }

    pub fn board(&self) -> &Board
    {
        &self.board
    }

    pub fn target(&self) -> Color
    {
        self.target
    }

    pub fn timer(&self) -> u32
    {
        self.timer
    }

    pub fn round(&self) -> u32
    {
        self.round
    }

    pub fn score(&self) -> u32
    {
        self.score
    }

    pub fn is_game_over(&self) -> bool
    {
        self.game_over
    }

    pub fn generation(&self) -> u64
    {
        self.generation
    }

    /// Replaces the target, grid and selection, and restarts the countdown.
    pub fn start_round(&mut self, duration: u32, rng: &mut impl Rng)
    {
        self.target = Color::random(rng);
        self.board = Board::generate(GRID_ROWS, GRID_COLS, rng);
        self.timer = duration.max(1);
        self.generation += 1;
        debug!(
            "[Round] Round {} started: target={} matches={} timer={}s",
            self.round,
            self.target.name(),
            self.board.count_of(self.target),
            self.timer
        );
    }

    pub fn apply(&mut self, event: GameEvent, rng: &mut impl Rng) -> Transition
    {
        match event {
            GameEvent::Tick(tick) => self.tick(tick),
            GameEvent::Select { row, col } => self.handle_click(row, col, rng),
            GameEvent::PlayAgain if self.game_over => {
                self.play_again(rng);
                Transition::Restarted
            }
            GameEvent::PlayAgain => Transition::Ignored,
        }
    }

    pub fn tick(&mut self, tick: Tick) -> Transition
    {
        if self.game_over {
            return Transition::Ignored;
        }
        if tick.generation != self.generation {
            debug!(
                "[Countdown] Dropped stale tick for generation {} (current {})",
                tick.generation, self.generation
            );
            return Transition::Ignored;
        }

        self.timer = self.timer.saturating_sub(1);
        if self.timer == 0 {
            self.game_over = true;
            info!(
                "[Round] Time is up in round {}; final score {}",
                self.round, self.score
            );
            return Transition::GameOver;
        }
        Transition::Ticked { timer: self.timer }
    }

    pub fn handle_click(&mut self, row: usize, col: usize, rng: &mut impl Rng) -> Transition
    {
        if self.game_over {
            return Transition::Ignored;
        }
        if self.board.color_at(row, col) != Some(self.target) {
            return Transition::Ignored;
        }
        if !self.board.select(row, col) {
            return Transition::Ignored;
        }

        if !self.board.all_selected(self.target) {
            return Transition::Selected;
        }

        let next_duration = self.timer.saturating_sub(1).max(1);
        self.score += 1;
        self.round += 1;
        info!(
            "[Round] Cleared with {}s left; score {}, next round {}s",
            self.timer, self.score, next_duration
        );
        self.start_round(next_duration, rng);
        Transition::RoundCleared {
            score: self.score,
            next_duration,
        }
    }

    pub fn play_again(&mut self, rng: &mut impl Rng)
    {
        self.score = 0;
        self.round = 1;
        self.game_over = false;
        info!("[Round] Starting a new game");
        self.start_round(self.start_duration, rng);
    }

    #[cfg(test)]
    fn with_board(mut self, board: Board, target: Color, timer: u32) -> Self
    {
        self.board = board;
        self.target = target;
        self.timer = timer;
        self
    }
}
