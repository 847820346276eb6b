// Library interface for word-blitz
// The binary and integration tests both go through these modules

pub mod cli;
pub mod config;
pub mod difficulty;
pub mod error;
pub mod game_state;
pub mod generator;
pub mod grid;
pub mod logging;
pub mod rng;
pub mod scoring;
pub mod selection;
pub mod session;
pub mod wordbank;

// Re-export commonly used items for easier testing
pub use config::GameConfig;
pub use difficulty::Difficulty;
pub use error::{ConfigError, WordSourceError};
pub use game_state::{GameEvent, GameState, Notice, Phase, RoundView};
pub use generator::{Generator, GeneratorConfig, Placement, Puzzle, generate};
pub use grid::{Direction, Grid, Position};
pub use rng::{RandomSource, make_rng};
pub use selection::{Selection, check_match, line_between};
pub use session::{GameInterface, Session, TickSource, UserAction, WallClock};
pub use wordbank::{
    ThemeLibrary, WordListFile, WordSource, load_wordbank_from_file, load_wordbank_from_str,
    resolve_round_words, sanitize_word,
};
