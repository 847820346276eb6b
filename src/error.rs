use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Rejected game configuration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("grid size must be at least 1")]
    EmptyGrid,
    #[error("placement attempt budget must be at least 1")]
    ZeroAttempts,
    #[error("a round needs at least one word")]
    ZeroWordsPerRound,
}

/// Failure of a word source. Callers fall back to the built-in list.
#[derive(Debug, Error)]
pub enum WordSourceError {
    #[error("failed to read word list '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("no word list for theme '{0}'")]
    UnknownTheme(String),
}
