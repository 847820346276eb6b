//! Points and clock credit for finding a word.

use crate::difficulty::Difficulty;

const BASE_FIND_POINTS: u32 = 100;

/// Points for a find: `100 × multiplier` plus the seconds left on the clock before any bonus.
#[must_use]
pub const fn find_points(difficulty: Difficulty, remaining: u32) -> u32 {
    BASE_FIND_POINTS * difficulty.score_multiplier() + remaining
}

/// Remaining time after crediting the find bonus, capped at the round's starting allowance.
#[must_use]
pub fn credit_time(difficulty: Difficulty, remaining: u32) -> u32 {
    remaining
        .saturating_add(difficulty.time_bonus())
        .min(difficulty.time_limit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_points_per_level() {
        assert_eq!(find_points(Difficulty::Easy, 30), 130);
        assert_eq!(find_points(Difficulty::Medium, 10), 210);
        assert_eq!(find_points(Difficulty::Hard, 0), 300);
    }

    #[test]
    fn test_credit_time_adds_bonus() {
        assert_eq!(credit_time(Difficulty::Easy, 20), 26);
        assert_eq!(credit_time(Difficulty::Medium, 20), 24);
        assert_eq!(credit_time(Difficulty::Hard, 5), 7);
    }

    #[test]
    fn test_credit_time_caps_at_allowance() {
        assert_eq!(credit_time(Difficulty::Easy, 38), 40);
        assert_eq!(credit_time(Difficulty::Medium, 25), 25);
        assert_eq!(credit_time(Difficulty::Hard, 14), 15);
    }
}
