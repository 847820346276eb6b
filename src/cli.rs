use crate::config::{DEFAULT_MIN_WORDS, DEFAULT_WORDS_PER_ROUND, GameConfig};
use crate::debug_log;
use crate::difficulty::Difficulty;
use crate::error::ConfigError;
use crate::game_state::{Notice, Phase, RoundView};
use crate::generator::{DEFAULT_GRID_SIZE, DEFAULT_MAX_ATTEMPTS};
use crate::grid::Position;
use crate::session::{GameInterface, UserAction};
use clap::{Parser, ValueEnum};
use std::io::BufRead;
use std::path::PathBuf;

/// Timed word search in the terminal
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Theme to draw words from
    #[arg(short, long, default_value = "Space")]
    pub theme: String,

    #[arg(short, long, value_enum, default_value_t = Difficulty::Medium)]
    pub difficulty: Difficulty,

    /// Side length of the square grid
    #[arg(short, long, default_value_t = DEFAULT_GRID_SIZE)]
    pub size: usize,

    /// Path to a newline-delimited word list, used instead of themes
    #[arg(short = 'i', long = "words")]
    pub words_path: Option<PathBuf>,

    /// Directory holding `<theme>.txt` word lists
    #[arg(long)]
    pub themes_dir: Option<PathBuf>,

    /// Placement attempts per word before it is dropped
    #[arg(long, default_value_t = DEFAULT_MAX_ATTEMPTS)]
    pub attempts: usize,

    /// Words per round
    #[arg(short = 'n', long, default_value_t = DEFAULT_WORDS_PER_ROUND)]
    pub count: usize,

    /// Seed for reproducible grids
    #[arg(long)]
    pub seed: Option<u64>,

    #[arg(short, long)]
    pub verbose: bool,
}

#[must_use]
pub fn parse_cli() -> Cli {
    Cli::parse()
}

impl Cli {
    pub fn config(&self) -> Result<GameConfig, ConfigError> {
        let config = GameConfig {
            grid_size: self.size,
            max_attempts: self.attempts,
            words_per_round: self.count,
            min_words: DEFAULT_MIN_WORDS.min(self.count),
        };
        config.validate()?;
        Ok(config)
    }
}

const HELP_TEXT: &str = "Commands: 'r1 c1 r2 c2' selects a line, 'r c' a single cell, \
'new [theme]' starts a round, 'level easy|medium|hard' sets the next difficulty, 'exit' quits.";

/// Parse one line of player input.
#[must_use]
pub fn parse_action(line: &str) -> Option<UserAction> {
    let line = line.trim();
    let lower = line.to_lowercase();
    let mut words = lower.split_whitespace();
    match words.next()? {
        "exit" | "quit" => return Some(UserAction::Exit),
        "new" => {
            let theme = line.split_whitespace().skip(1).collect::<Vec<_>>().join(" ");
            return Some(UserAction::NewRound((!theme.is_empty()).then_some(theme)));
        }
        "level" | "difficulty" => {
            let level = Difficulty::from_str(words.next()?, true).ok()?;
            return Some(UserAction::ChangeDifficulty(level));
        }
        _ => {}
    }

    let numbers: Option<Vec<usize>> = line
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|part| !part.is_empty())
        .map(|part| part.parse().ok())
        .collect();
    match numbers?.as_slice() {
        &[row, col] => {
            let cell = Position::new(row, col);
            Some(UserAction::Select { from: cell, to: cell })
        }
        &[r1, c1, r2, c2] => Some(UserAction::Select {
            from: Position::new(r1, c1),
            to: Position::new(r2, c2),
        }),
        _ => None,
    }
}

pub fn render_grid(view: &RoundView<'_>) -> String {
    let size = view.grid.size();
    let mut out = String::from("    ");
    for col in 0..size {
        out.push_str(&format!("{col:>2} "));
    }
    out.push('\n');
    for (row, letters) in view.grid.rows().enumerate() {
        out.push_str(&format!("{row:>2}  "));
        for (col, &letter) in letters.iter().enumerate() {
            // Found words are shown in lowercase.
            let shown = if view.is_found_cell(Position::new(row, col)) {
                letter.to_ascii_lowercase()
            } else {
                letter
            };
            out.push_str(&format!(" {shown} "));
        }
        out.push('\n');
    }
    out
}

pub fn display_round(view: &RoundView<'_>, theme: &str) {
    println!();
    println!(
        "Theme: {theme} | {} | Time: {}s | Score: {:05}",
        view.difficulty, view.remaining, view.score
    );
    print!("{}", render_grid(view));
    let words: Vec<String> = view
        .placements
        .iter()
        .map(|p| {
            if p.found {
                format!("[{}]", p.word)
            } else {
                p.word.clone()
            }
        })
        .collect();
    println!("Words ({} left): {}", view.words_left(), words.join(" "));
    match view.phase {
        Phase::Won => println!("All words found! Type 'new' for another round."),
        Phase::Lost => println!("Time's up. Type 'new' to try again."),
        Phase::Playing if view.placements.is_empty() => {
            println!("No words could be placed this round. Type 'new' to reroll.");
        }
        Phase::Playing | Phase::Idle => {}
    }
}

pub fn display_notice(notice: &Notice) {
    match notice {
        Notice::Found {
            word,
            points,
            time_bonus,
            ..
        } => println!("Found {word}! +{points} points, +{time_bonus}s"),
        Notice::OffGrid(pos) => println!("{pos} is off the grid."),
        Notice::Missed { spelled } => println!("No word at {spelled}."),
        Notice::TimeUp => println!("Out of time!"),
    }
}

pub fn display_exit_message() {
    println!("Exiting.");
}

/// CLI implementation of the GameInterface trait
/// This struct wraps a BufRead reader and prints to stdout
pub struct CliInterface<R: BufRead> {
    reader: R,
}

impl<R: BufRead> CliInterface<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> GameInterface for CliInterface<R> {
    fn read_action(&mut self) -> Option<UserAction> {
        println!("\n{HELP_TEXT}");
        let mut input = String::new();
        match self.reader.read_line(&mut input) {
            // End of input ends the session.
            Ok(0) => Some(UserAction::Exit),
            Ok(_) => {
                let action = parse_action(&input);
                if action.is_none() {
                    debug_log!("Unrecognised input {:?}", input.trim());
                    println!("Didn't understand that.");
                }
                action
            }
            Err(e) => {
                log::error!("Failed to read input: {e}");
                Some(UserAction::Exit)
            }
        }
    }

    fn display_round(&mut self, view: &RoundView<'_>, theme: &str) {
        display_round(view, theme);
    }

    fn display_notice(&mut self, notice: &Notice) {
        display_notice(notice);
    }

    fn display_difficulty_change(&mut self, difficulty: Difficulty) {
        println!("Next round will be {difficulty}.");
    }

    fn display_exit_message(&mut self) {
        display_exit_message();
    }
}
