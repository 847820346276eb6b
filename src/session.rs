//! Session orchestration: fetches words, generates rounds and feeds player actions and clock
//! ticks into the [`GameState`] machine. Presentation is behind [`GameInterface`].

use crate::config::GameConfig;
use crate::difficulty::Difficulty;
use crate::game_state::{GameEvent, GameState, Notice, RoundView};
use crate::generator::Generator;
use crate::grid::Position;
use crate::rng::RandomSource;
use crate::wordbank::{WordSource, resolve_round_words};
use crate::{debug_log, info_log};
use std::time::{Duration, Instant};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserAction {
    /// Drag from `from` to `to` and release
    Select { from: Position, to: Position },
    /// Start a new round, optionally on a different theme
    NewRound(Option<String>),
    /// Difficulty for the next round
    ChangeDifficulty(Difficulty),
    Exit,
}

/// Presentation side of a session.
pub trait GameInterface {
    /// Next player action. `None` means the input was not understood and is skipped.
    fn read_action(&mut self) -> Option<UserAction>;
    fn display_round(&mut self, view: &RoundView<'_>, theme: &str);
    fn display_notice(&mut self, notice: &Notice);
    fn display_difficulty_change(&mut self, difficulty: Difficulty);
    fn display_exit_message(&mut self);
}

/// Whole seconds elapsed since the last call, as clock ticks.
pub trait TickSource {
    fn elapsed_ticks(&mut self) -> u32;
    /// Restart counting from now
    fn reset(&mut self);
}

#[derive(Debug, Clone, Copy)]
pub struct WallClock {
    last: Instant,
}

impl Default for WallClock {
    fn default() -> Self {
        Self::new()
    }
}

impl WallClock {
    #[must_use]
    pub fn new() -> Self {
        Self {
            last: Instant::now(),
        }
    }
}

impl TickSource for WallClock {
    fn elapsed_ticks(&mut self) -> u32 {
        let whole = self.last.elapsed().as_secs();
        // Keep the sub-second remainder for the next call.
        self.last += Duration::from_secs(whole);
        u32::try_from(whole).unwrap_or(u32::MAX)
    }

    fn reset(&mut self) {
        self.last = Instant::now();
    }
}

pub struct Session<W, R, T> {
    config: GameConfig,
    source: W,
    rng: R,
    ticker: T,
    state: GameState,
    theme: String,
    difficulty: Difficulty,
}

impl<W, R, T> Session<W, R, T>
where
    W: WordSource,
    R: RandomSource,
    T: TickSource,
{
    pub fn new(config: GameConfig, source: W, rng: R, ticker: T) -> Self {
        Self {
            config,
            source,
            rng,
            ticker,
            state: GameState::new(),
            theme: String::new(),
            difficulty: Difficulty::default(),
        }
    }

    #[must_use]
    pub const fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub fn theme(&self) -> &str {
        &self.theme
    }

    /// Difficulty the next round will use.
    #[must_use]
    pub const fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Throw away the current round and generate a new one.
    pub fn start_round(&mut self, theme: &str, difficulty: Difficulty) {
        let words = resolve_round_words(&self.source, theme, &self.config, &mut self.rng);
        debug_log!("Round words for {:?}: {:?}", theme, words);
        let puzzle = Generator::with_config(self.config.generator()).generate(
            &words,
            difficulty,
            &mut self.rng,
        );
        if puzzle.placements.len() < words.len() {
            info_log!(
                "Placed {} of {} words",
                puzzle.placements.len(),
                words.len()
            );
        }
        self.theme = theme.to_string();
        self.difficulty = difficulty;
        self.state.handle(GameEvent::StartRound { puzzle, difficulty });
        self.ticker.reset();
    }

    /// Feed every whole second that passed since the last call into the round clock.
    pub fn advance_clock(&mut self) -> Vec<Notice> {
        let ticks = self.ticker.elapsed_ticks();
        let mut notices = Vec::new();
        for _ in 0..ticks {
            if let Some(notice) = self.state.handle(GameEvent::Tick) {
                notices.push(notice);
            }
        }
        notices
    }

    /// Anchor at `from`, drag to `to`, release.
    ///
    /// An end outside the grid is reported back without touching the round.
    pub fn select(&mut self, from: Position, to: Position) -> Option<Notice> {
        if let Some(outside) = [from, to]
            .into_iter()
            .find(|&pos| !self.state.grid().contains(pos))
        {
            debug_log!("Selection {} -> {} leaves the grid", from, to);
            return Some(Notice::OffGrid(outside));
        }
        self.state.handle(GameEvent::AnchorDown(from));
        if from != to {
            self.state.handle(GameEvent::DragTo(to));
        }
        self.state.handle(GameEvent::Release)
    }

    /// Play rounds until the interface asks to exit.
    pub fn run<I: GameInterface>(&mut self, interface: &mut I, theme: &str, difficulty: Difficulty) {
        self.start_round(theme, difficulty);
        interface.display_round(&self.state.view(), &self.theme);

        loop {
            let action = interface.read_action();
            // Time kept running while the player was thinking.
            for notice in self.advance_clock() {
                interface.display_notice(&notice);
            }
            let Some(action) = action else {
                continue;
            };

            match action {
                UserAction::Exit => {
                    interface.display_exit_message();
                    break;
                }
                UserAction::NewRound(new_theme) => {
                    let theme = new_theme.unwrap_or_else(|| self.theme.clone());
                    self.start_round(&theme, self.difficulty);
                }
                UserAction::ChangeDifficulty(difficulty) => {
                    self.difficulty = difficulty;
                    interface.display_difficulty_change(difficulty);
                    continue;
                }
                UserAction::Select { from, to } => {
                    if let Some(notice) = self.select(from, to) {
                        interface.display_notice(&notice);
                    }
                }
            }
            interface.display_round(&self.state.view(), &self.theme);
        }
    }
}
