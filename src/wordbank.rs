use crate::config::GameConfig;
use crate::debug_log;
use crate::error::WordSourceError;
use crate::rng::RandomSource;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

pub const EMBEDDED_THEMES: &str = include_str!("resources/themes.txt");

/// Used when a source fails or yields too few usable words.
pub const FALLBACK_WORDS: [&str; 5] = ["REACT", "CODE", "NODE", "HTML", "GRID"];

/// Where a word comes from for a given theme.
pub trait WordSource {
    fn words_for(&self, theme: &str) -> Result<Vec<String>, WordSourceError>;
}

/// Uppercase `raw` and strip everything that is not `A-Z`. `None` if nothing is left.
#[must_use]
pub fn sanitize_word(raw: &str) -> Option<String> {
    let word: String = raw
        .chars()
        .filter(char::is_ascii_alphabetic)
        .map(|c| c.to_ascii_uppercase())
        .collect();
    (!word.is_empty()).then_some(word)
}

fn is_comment(line: &str) -> bool {
    line.trim_start().starts_with('#')
}

pub fn load_wordbank_from_str(data: &str) -> Vec<String> {
    data.lines()
        .filter(|line| !is_comment(line))
        .filter_map(sanitize_word)
        .collect()
}

pub fn load_wordbank_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let mut words = Vec::new();
    for line in reader.lines() {
        let line = line?;
        if is_comment(&line) {
            continue;
        }
        if let Some(word) = sanitize_word(&line) {
            words.push(word);
        }
    }
    Ok(words)
}

/// Words for `theme` from the embedded bank, matched case-insensitively.
#[must_use]
pub fn embedded_theme(theme: &str) -> Option<Vec<String>> {
    let wanted = sanitize_word(theme)?;
    EMBEDDED_THEMES
        .lines()
        .filter(|line| !is_comment(line))
        .filter_map(|line| line.split_once(':'))
        .find(|(name, _)| sanitize_word(name).as_deref() == Some(wanted.as_str()))
        .map(|(_, words)| words.split_whitespace().filter_map(sanitize_word).collect())
}

/// Names of the embedded themes, in file order.
#[must_use]
pub fn embedded_theme_names() -> Vec<String> {
    EMBEDDED_THEMES
        .lines()
        .filter(|line| !is_comment(line))
        .filter_map(|line| line.split_once(':'))
        .map(|(name, _)| name.trim().to_string())
        .collect()
}

/// `<config dir>/word-blitz/themes`, where user theme files `<theme>.txt` live.
#[must_use]
pub fn default_themes_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("word-blitz").join("themes"))
}

/// Theme lookup: a `<theme>.txt` file in the themes directory first, then the embedded bank.
#[derive(Debug, Clone, Default)]
pub struct ThemeLibrary {
    dir: Option<PathBuf>,
}

impl ThemeLibrary {
    #[must_use]
    pub const fn new(dir: Option<PathBuf>) -> Self {
        Self { dir }
    }

    #[must_use]
    pub const fn embedded() -> Self {
        Self { dir: None }
    }

    fn theme_file(&self, theme: &str) -> Option<PathBuf> {
        let name = sanitize_word(theme)?.to_ascii_lowercase();
        let path = self.dir.as_ref()?.join(format!("{name}.txt"));
        path.is_file().then_some(path)
    }
}

impl WordSource for ThemeLibrary {
    fn words_for(&self, theme: &str) -> Result<Vec<String>, WordSourceError> {
        if let Some(path) = self.theme_file(theme) {
            debug_log!("Loading theme {:?} from {}", theme, path.display());
            return load_wordbank_from_file(&path)
                .map_err(|source| WordSourceError::Io { path, source });
        }
        embedded_theme(theme).ok_or_else(|| WordSourceError::UnknownTheme(theme.to_string()))
    }
}

/// A newline-delimited word list used for every theme.
#[derive(Debug, Clone)]
pub struct WordListFile {
    path: PathBuf,
}

impl WordListFile {
    #[must_use]
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }
}

impl WordSource for WordListFile {
    fn words_for(&self, _theme: &str) -> Result<Vec<String>, WordSourceError> {
        load_wordbank_from_file(&self.path).map_err(|source| WordSourceError::Io {
            path: self.path.clone(),
            source,
        })
    }
}

#[must_use]
pub fn fallback_words() -> Vec<String> {
    FALLBACK_WORDS.iter().map(|w| (*w).to_string()).collect()
}

/// The words for one round: fetched, sanitized, deduplicated and trimmed to what fits.
///
/// Falls back to [`FALLBACK_WORDS`] when the source errors or leaves fewer than
/// `config.min_words` usable words. At most `config.words_per_round` words are returned,
/// in random order.
pub fn resolve_round_words<W, R>(
    source: &W,
    theme: &str,
    config: &GameConfig,
    rng: &mut R,
) -> Vec<String>
where
    W: WordSource + ?Sized,
    R: RandomSource,
{
    let fetched = source.words_for(theme).unwrap_or_else(|err| {
        log::warn!("{err}; using fallback words");
        Vec::new()
    });

    let mut usable: Vec<String> = Vec::new();
    for word in fetched.iter().filter_map(|w| sanitize_word(w)) {
        if word.len() <= config.grid_size && !usable.contains(&word) {
            usable.push(word);
        }
    }

    if usable.len() < config.min_words {
        log::warn!(
            "Theme {:?} gave {} usable words (need {}); using fallback words",
            theme,
            usable.len(),
            config.min_words
        );
        usable = fallback_words();
    }

    rng.shuffle(&mut usable);
    usable.truncate(config.words_per_round);
    usable
}
