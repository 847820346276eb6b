//! Round state machine.
//!
//! # Phases
//! - `Idle`: no round yet
//! - `Playing`: round active, clock running
//! - `Won`: every placement found
//! - `Lost`: clock reached zero
//!
//! `Won` and `Lost` only end when a new round starts. Every transition goes through
//! [`GameState::apply`], which takes the old state and an event and returns the new state.
//!
//! A round with zero placements cannot be won; it runs until the clock expires or the
//! player starts another round.

use crate::difficulty::Difficulty;
use crate::generator::{Placement, Puzzle};
use crate::grid::{Grid, Position};
use crate::scoring::{credit_time, find_points};
use crate::selection::{Selection, check_match};
use crate::{debug_log, info_log};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Playing,
    Won,
    Lost,
}

impl Phase {
    #[must_use]
    pub const fn is_over(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// Inputs to the state machine.
#[derive(Debug, Clone)]
pub enum GameEvent {
    /// Replace whatever round was active with a freshly generated one
    StartRound {
        puzzle: Puzzle,
        difficulty: Difficulty,
    },
    AnchorDown(Position),
    DragTo(Position),
    Release,
    /// One second of wall-clock time
    Tick,
}

/// Something the presentation layer should tell the player about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Found {
        word: String,
        points: u32,
        time_bonus: u32,
        /// This find completed the round
        completed: bool,
    },
    Missed {
        spelled: String,
    },
    /// A typed selection ended outside the grid; nothing was selected.
    OffGrid(Position),
    TimeUp,
}

#[derive(Debug, Clone, Default)]
pub struct GameState {
    grid: Grid,
    placements: Vec<Placement>,
    selection: Selection,
    dragging: bool,
    phase: Phase,
    difficulty: Difficulty,
    remaining: u32,
    score: u32,
}

/// Read-only projection handed to the presentation layer after each change.
#[derive(Debug, Clone, Copy)]
pub struct RoundView<'a> {
    pub grid: &'a Grid,
    pub placements: &'a [Placement],
    pub selection: &'a Selection,
    pub phase: Phase,
    pub difficulty: Difficulty,
    pub remaining: u32,
    pub score: u32,
}

impl RoundView<'_> {
    /// Whether `pos` belongs to a word the player has already found.
    #[must_use]
    pub fn is_found_cell(&self, pos: Position) -> bool {
        self.placements
            .iter()
            .any(|p| p.found && p.positions.contains(&pos))
    }

    #[must_use]
    pub fn words_left(&self) -> usize {
        self.placements.iter().filter(|p| !p.found).count()
    }
}

impl GameState {
    /// A fresh controller in the `Idle` phase.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub const fn grid(&self) -> &Grid {
        &self.grid
    }

    #[must_use]
    pub fn placements(&self) -> &[Placement] {
        &self.placements
    }

    #[must_use]
    pub const fn selection(&self) -> &Selection {
        &self.selection
    }

    #[must_use]
    pub const fn remaining(&self) -> u32 {
        self.remaining
    }

    #[must_use]
    pub const fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub const fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    #[must_use]
    pub const fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// True once every placement is found. Never true for a round without placements.
    #[must_use]
    pub fn all_found(&self) -> bool {
        !self.placements.is_empty() && self.placements.iter().all(|p| p.found)
    }

    #[must_use]
    pub fn view(&self) -> RoundView<'_> {
        RoundView {
            grid: &self.grid,
            placements: &self.placements,
            selection: &self.selection,
            phase: self.phase,
            difficulty: self.difficulty,
            remaining: self.remaining,
            score: self.score,
        }
    }

    /// Apply one event, returning the next state and any notice it produced.
    #[must_use]
    pub fn apply(mut self, event: GameEvent) -> (Self, Option<Notice>) {
        let notice = match event {
            GameEvent::StartRound { puzzle, difficulty } => {
                self = Self::start_round(puzzle, difficulty);
                None
            }
            GameEvent::AnchorDown(pos) => {
                self.anchor_down(pos);
                None
            }
            GameEvent::DragTo(pos) => {
                self.drag_to(pos);
                None
            }
            GameEvent::Release => self.release(),
            GameEvent::Tick => self.tick(),
        };
        (self, notice)
    }

    /// In-place form of [`GameState::apply`] for callers that own the state mutably.
    pub fn handle(&mut self, event: GameEvent) -> Option<Notice> {
        let (next, notice) = std::mem::take(self).apply(event);
        *self = next;
        notice
    }

    fn start_round(puzzle: Puzzle, difficulty: Difficulty) -> Self {
        info_log!(
            "Starting {} round: {} words on a {}x{} grid",
            difficulty,
            puzzle.placements.len(),
            puzzle.grid.size(),
            puzzle.grid.size()
        );
        Self {
            grid: puzzle.grid,
            placements: puzzle.placements,
            selection: Selection::new(),
            dragging: false,
            phase: Phase::Playing,
            difficulty,
            remaining: difficulty.time_limit(),
            score: 0,
        }
    }

    fn accepts_pointer(&self, pos: Position) -> bool {
        if self.phase != Phase::Playing {
            return false;
        }
        if !self.grid.contains(pos) {
            debug_log!("Ignoring off-grid position {}", pos);
            return false;
        }
        true
    }

    fn anchor_down(&mut self, pos: Position) {
        if self.accepts_pointer(pos) {
            self.selection = Selection::starting_at(pos);
            self.dragging = true;
        }
    }

    fn drag_to(&mut self, pos: Position) {
        if !self.dragging || !self.accepts_pointer(pos) {
            return;
        }
        if let Some(anchor) = self.selection.anchor() {
            self.selection.extend(anchor, pos, self.grid.size());
        }
    }

    fn release(&mut self) -> Option<Notice> {
        if !self.dragging {
            return None;
        }
        self.dragging = false;
        let cells = std::mem::take(&mut self.selection);
        if self.phase != Phase::Playing {
            return None;
        }

        let Some(index) = check_match(cells.cells(), &self.grid, &mut self.placements) else {
            let spelled = self.grid.spell(cells.cells()).unwrap_or_default();
            debug_log!("Selection {:?} matched nothing", spelled);
            return Some(Notice::Missed { spelled });
        };

        let points = find_points(self.difficulty, self.remaining);
        let credited = credit_time(self.difficulty, self.remaining);
        let time_bonus = credited - self.remaining;
        self.score += points;
        self.remaining = credited;

        let completed = self.all_found();
        if completed {
            self.phase = Phase::Won;
            info_log!("Round won with score {}", self.score);
        }
        Some(Notice::Found {
            word: self.placements[index].word.clone(),
            points,
            time_bonus,
            completed,
        })
    }

    fn tick(&mut self) -> Option<Notice> {
        if self.phase != Phase::Playing {
            return None;
        }
        self.remaining = self.remaining.saturating_sub(1);
        if self.remaining > 0 {
            return None;
        }
        self.phase = Phase::Lost;
        self.dragging = false;
        self.selection.clear();
        info_log!("Round lost on time with score {}", self.score);
        Some(Notice::TimeUp)
    }
}
