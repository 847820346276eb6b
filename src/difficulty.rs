//! Difficulty levels and the rules each one carries.
//!
//! | Level  | Directions                  | Time | Multiplier | Time bonus |
//! |--------|-----------------------------|------|------------|------------|
//! | Easy   | right, down                 | 40s  | 1          | 6s         |
//! | Medium | right, down, down-right     | 25s  | 2          | 4s         |
//! | Hard   | all eight                   | 15s  | 3          | 2s         |

use crate::grid::Direction;
use clap::ValueEnum;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, ValueEnum)]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

const EASY_DIRECTIONS: [Direction; 2] = [Direction::RIGHT, Direction::DOWN];

const MEDIUM_DIRECTIONS: [Direction; 3] =
    [Direction::RIGHT, Direction::DOWN, Direction::DOWN_RIGHT];

const HARD_DIRECTIONS: [Direction; 8] = [
    Direction::RIGHT,
    Direction::DOWN,
    Direction::DOWN_RIGHT,
    Direction::LEFT,
    Direction::UP,
    Direction::UP_RIGHT,
    Direction::DOWN_LEFT,
    Direction::UP_LEFT,
];

impl Difficulty {
    pub const ALL: [Self; 3] = [Self::Easy, Self::Medium, Self::Hard];

    /// Directions words may be laid along at this level.
    #[must_use]
    pub fn directions(self) -> &'static [Direction] {
        match self {
            Self::Easy => &EASY_DIRECTIONS,
            Self::Medium => &MEDIUM_DIRECTIONS,
            Self::Hard => &HARD_DIRECTIONS,
        }
    }

    /// Seconds on the clock when a round starts; also the cap for time bonuses.
    #[must_use]
    pub const fn time_limit(self) -> u32 {
        match self {
            Self::Easy => 40,
            Self::Medium => 25,
            Self::Hard => 15,
        }
    }

    #[must_use]
    pub const fn score_multiplier(self) -> u32 {
        match self {
            Self::Easy => 1,
            Self::Medium => 2,
            Self::Hard => 3,
        }
    }

    #[must_use]
    pub const fn time_bonus(self) -> u32 {
        match self {
            Self::Easy => 6,
            Self::Medium => 4,
            Self::Hard => 2,
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Easy => "Easy",
            Self::Medium => "Medium",
            Self::Hard => "Hard",
        };
        f.write_str(label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_easy_has_no_diagonals() {
        assert!(
            Difficulty::Easy
                .directions()
                .iter()
                .all(|d| !d.is_diagonal())
        );
    }

    #[test]
    fn test_medium_adds_only_down_right() {
        let dirs = Difficulty::Medium.directions();
        assert_eq!(dirs.len(), 3);
        assert!(dirs.contains(&Direction::DOWN_RIGHT));
        assert_eq!(dirs.iter().filter(|d| d.is_diagonal()).count(), 1);
    }

    #[test]
    fn test_hard_covers_full_compass() {
        let dirs = Difficulty::Hard.directions();
        assert_eq!(dirs.len(), 8);
        for d_row in -1..=1 {
            for d_col in -1..=1 {
                if d_row == 0 && d_col == 0 {
                    continue;
                }
                assert!(dirs.contains(&Direction::new(d_row, d_col).unwrap()));
            }
        }
    }

    #[test]
    fn test_harder_levels_trade_time_for_points() {
        for pair in Difficulty::ALL.windows(2) {
            let (easier, harder) = (pair[0], pair[1]);
            assert!(harder.time_limit() < easier.time_limit());
            assert!(harder.time_bonus() < easier.time_bonus());
            assert!(harder.score_multiplier() > easier.score_multiplier());
        }
    }
}
