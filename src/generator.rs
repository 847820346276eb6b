//! Grid generator: lays words into a square grid along the directions a difficulty allows,
//! retrying random starts a bounded number of times, then fills the gaps with noise letters.
//!
//! Placement is best effort. A word that cannot be placed within the attempt budget (or can
//! never fit, e.g. longer than the grid) is dropped and simply has no [`Placement`].

use crate::debug_log;
use crate::difficulty::Difficulty;
use crate::grid::{Direction, Grid, Position};
use crate::rng::RandomSource;

pub const DEFAULT_GRID_SIZE: usize = 10;
pub const DEFAULT_MAX_ATTEMPTS: usize = 150;

const ALPHABET: &[u8; 26] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Where a word was laid and whether the player has found it yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placement {
    pub word: String,
    pub found: bool,
    pub positions: Vec<Position>,
    pub direction: Direction,
}

/// Output of one generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Puzzle {
    pub grid: Grid,
    pub placements: Vec<Placement>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneratorConfig {
    pub grid_size: usize,
    /// Random trials per word before it is skipped
    pub max_attempts: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            grid_size: DEFAULT_GRID_SIZE,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}

pub struct Generator {
    config: GeneratorConfig,
}

impl Default for Generator {
    fn default() -> Self {
        Self::new()
    }
}

impl Generator {
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(GeneratorConfig::default())
    }

    #[must_use]
    pub const fn with_config(config: GeneratorConfig) -> Self {
        Self { config }
    }

    /// Place `words` in input order, then fill every empty cell with a random letter.
    pub fn generate<R: RandomSource>(
        &self,
        words: &[String],
        difficulty: Difficulty,
        rng: &mut R,
    ) -> Puzzle {
        let size = self.config.grid_size;
        let directions = difficulty.directions();
        let mut cells: Vec<Option<char>> = vec![None; size * size];
        let mut placements = Vec::with_capacity(words.len());

        for word in words {
            if !is_placeable(word, size) {
                debug_log!("Skipping unplaceable word {:?} for grid size {}", word, size);
                continue;
            }
            let letters: Vec<char> = word.chars().collect();
            match self.try_place(&mut cells, &letters, directions, rng) {
                Some((positions, direction)) => placements.push(Placement {
                    word: word.clone(),
                    found: false,
                    positions,
                    direction,
                }),
                None => {
                    debug_log!(
                        "Dropping {:?} after {} attempts",
                        word,
                        self.config.max_attempts
                    );
                }
            }
        }

        let filled = cells
            .into_iter()
            .map(|cell| cell.unwrap_or_else(|| char::from(ALPHABET[rng.below(ALPHABET.len())])))
            .collect();

        Puzzle {
            grid: Grid::from_cells(size, filled),
            placements,
        }
    }

    fn try_place<R: RandomSource>(
        &self,
        cells: &mut [Option<char>],
        letters: &[char],
        directions: &[Direction],
        rng: &mut R,
    ) -> Option<(Vec<Position>, Direction)> {
        let size = self.config.grid_size;
        for _ in 0..self.config.max_attempts {
            let direction = directions[rng.below(directions.len())];
            let start = Position::new(rng.below(size), rng.below(size));
            if let Some(positions) = fit(cells, size, letters, start, direction) {
                for (pos, &letter) in positions.iter().zip(letters) {
                    cells[pos.row * size + pos.col] = Some(letter);
                }
                return Some((positions, direction));
            }
        }
        None
    }
}

/// Generate with default attempt budget for an arbitrary grid size.
pub fn generate<R: RandomSource>(
    words: &[String],
    difficulty: Difficulty,
    grid_size: usize,
    rng: &mut R,
) -> Puzzle {
    Generator::with_config(GeneratorConfig {
        grid_size,
        ..GeneratorConfig::default()
    })
    .generate(words, difficulty, rng)
}

fn is_placeable(word: &str, size: usize) -> bool {
    !word.is_empty() && word.len() <= size && word.bytes().all(|b| b.is_ascii_uppercase())
}

/// Positions for `letters` from `start` along `direction` if every cell is in bounds and
/// either empty or already holding the same letter.
fn fit(
    cells: &[Option<char>],
    size: usize,
    letters: &[char],
    start: Position,
    direction: Direction,
) -> Option<Vec<Position>> {
    letters
        .iter()
        .enumerate()
        .map(|(i, &letter)| {
            let pos = start.offset(direction, i, size)?;
            match cells[pos.row * size + pos.col] {
                Some(existing) if existing != letter => None,
                _ => Some(pos),
            }
        })
        .collect()
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::rng::make_rng;
    use std::collections::{HashMap, HashSet, VecDeque};

    /// Replays a fixed list of draws, then falls back to zero.
    pub(crate) struct Scripted(pub VecDeque<usize>);

    impl Scripted {
        pub(crate) fn new(values: &[usize]) -> Self {
            Self(values.iter().copied().collect())
        }
    }

    impl RandomSource for Scripted {
        fn below(&mut self, bound: usize) -> usize {
            self.0.pop_front().unwrap_or(0) % bound
        }
    }

    fn words(list: &[&str]) -> Vec<String> {
        list.iter().map(|w| w.to_string()).collect()
    }

    fn assert_placements_valid(puzzle: &Puzzle, difficulty: Difficulty) {
        let size = puzzle.grid.size();
        for placement in &puzzle.placements {
            assert_eq!(placement.positions.len(), placement.word.len());
            assert!(difficulty.directions().contains(&placement.direction));
            for (i, (pos, letter)) in placement
                .positions
                .iter()
                .zip(placement.word.chars())
                .enumerate()
            {
                assert!(pos.row < size && pos.col < size);
                assert_eq!(puzzle.grid.get(*pos), Some(letter));
                if i > 0 {
                    let prev = placement.positions[i - 1];
                    assert_eq!(prev.offset(placement.direction, 1, size), Some(*pos));
                }
            }
        }
    }

    #[test]
    fn test_scripted_placement_is_exact() {
        // direction index 0 (right), start (1, 0) for CAT; direction 1 (down), start (0, 3) for DOG
        let mut rng = Scripted::new(&[0, 1, 0, 1, 0, 3]);
        let puzzle = generate(&words(&["CAT", "DOG"]), Difficulty::Easy, 4, &mut rng);

        assert_eq!(puzzle.placements.len(), 2);
        let cat = &puzzle.placements[0];
        assert_eq!(cat.direction, Direction::RIGHT);
        assert_eq!(
            cat.positions,
            vec![Position::new(1, 0), Position::new(1, 1), Position::new(1, 2)]
        );
        let dog = &puzzle.placements[1];
        assert_eq!(dog.direction, Direction::DOWN);
        assert_eq!(
            dog.positions,
            vec![Position::new(0, 3), Position::new(1, 3), Position::new(2, 3)]
        );
        // Scripted draws run out, so every noise cell is 'A'.
        assert_eq!(puzzle.grid.get(Position::new(3, 3)), Some('A'));
    }

    #[test]
    fn test_retries_after_out_of_bounds_start() {
        // First trial: right from (0, 2) overflows a 4-wide grid. Second: right from (0, 0).
        let mut rng = Scripted::new(&[0, 0, 2, 0, 0, 0]);
        let puzzle = generate(&words(&["CAT"]), Difficulty::Easy, 4, &mut rng);
        assert_eq!(puzzle.placements[0].positions[0], Position::new(0, 0));
    }

    #[test]
    fn test_crossing_on_shared_letter_is_allowed() {
        // CAT right from (0, 0); TOP down from (0, 2) shares the T.
        let mut rng = Scripted::new(&[0, 0, 0, 1, 0, 2]);
        let puzzle = generate(&words(&["CAT", "TOP"]), Difficulty::Easy, 3, &mut rng);
        assert_eq!(puzzle.placements.len(), 2);
        assert_eq!(puzzle.placements[1].positions[0], Position::new(0, 2));
    }

    #[test]
    fn test_contradictory_overlap_is_rejected() {
        // DOG down from (0, 0) would overwrite C; with a budget of 1 the word is dropped.
        let generator = Generator::with_config(GeneratorConfig {
            grid_size: 3,
            max_attempts: 1,
        });
        let mut rng = Scripted::new(&[0, 0, 0, 1, 0, 0]);
        let puzzle = generator.generate(&words(&["CAT", "DOG"]), Difficulty::Easy, &mut rng);
        assert_eq!(puzzle.placements.len(), 1);
        assert_eq!(puzzle.placements[0].word, "CAT");
    }

    #[test]
    fn test_too_long_and_empty_words_are_dropped() {
        let mut rng = make_rng(Some(1));
        let puzzle = generate(
            &words(&["", "ELEPHANT", "OX", "lower", "A1"]),
            Difficulty::Hard,
            4,
            &mut rng,
        );
        let placed: Vec<&str> = puzzle.placements.iter().map(|p| p.word.as_str()).collect();
        assert_eq!(placed, vec!["OX"]);
    }

    #[test]
    fn test_empty_word_list_still_fills_grid() {
        let mut rng = make_rng(Some(5));
        let puzzle = generate(&[], Difficulty::Medium, 6, &mut rng);
        assert!(puzzle.placements.is_empty());
        assert_eq!(puzzle.grid.rows().flatten().count(), 36);
    }

    #[test]
    fn test_every_cell_is_an_uppercase_letter() {
        let mut rng = make_rng(Some(11));
        let puzzle = Generator::new().generate(
            &words(&["PLANET", "COMET", "ORBIT", "NOVA", "STAR"]),
            Difficulty::Hard,
            &mut rng,
        );
        assert_eq!(puzzle.grid.size(), DEFAULT_GRID_SIZE);
        assert!(
            puzzle
                .grid
                .rows()
                .flatten()
                .all(|c| c.is_ascii_uppercase())
        );
    }

    #[test]
    fn test_placements_valid_across_seeds() {
        let list = words(&["PLANET", "COMET", "ORBIT", "NOVA", "STAR", "MOON", "SUN"]);
        for difficulty in Difficulty::ALL {
            for seed in 0..40 {
                let mut rng = make_rng(Some(seed));
                let puzzle = Generator::new().generate(&list, difficulty, &mut rng);
                assert_placements_valid(&puzzle, difficulty);
            }
        }
    }

    #[test]
    fn test_shared_cells_agree_between_placements() {
        let list = words(&["AAAA", "ABBA", "BAAB", "BABA", "ABAB", "AABB"]);
        for seed in 0..40 {
            let mut rng = make_rng(Some(seed));
            let puzzle = generate(&list, Difficulty::Hard, 5, &mut rng);
            let mut seen: HashMap<Position, char> = HashMap::new();
            for placement in &puzzle.placements {
                for (pos, letter) in placement.positions.iter().zip(placement.word.chars()) {
                    if let Some(&other) = seen.get(pos) {
                        assert_eq!(other, letter, "conflict at {pos}");
                    }
                    seen.insert(*pos, letter);
                }
            }
        }
    }

    #[test]
    fn test_easy_never_places_diagonally() {
        let list = words(&["CAT", "DOG", "EMU", "YAK", "GNU", "ELK"]);
        for seed in 0..30 {
            let mut rng = make_rng(Some(seed));
            let puzzle = generate(&list, Difficulty::Easy, 6, &mut rng);
            assert!(puzzle.placements.iter().all(|p| !p.direction.is_diagonal()));
        }
    }

    #[test]
    fn test_hard_reaches_all_directions() {
        let list = words(&["CAT", "DOG", "EMU", "YAK", "GNU", "ELK"]);
        let mut seen = HashSet::new();
        for seed in 0..200 {
            let mut rng = make_rng(Some(seed));
            let puzzle = generate(&list, Difficulty::Hard, 10, &mut rng);
            seen.extend(puzzle.placements.iter().map(|p| p.direction));
        }
        assert_eq!(seen.len(), 8);
    }
}
