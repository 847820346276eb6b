use std::io;
use std::process::ExitCode;
use word_blitz::cli::{CliInterface, parse_cli};
use word_blitz::logging::init_logging;
use word_blitz::wordbank::default_themes_dir;
use word_blitz::{Session, ThemeLibrary, WallClock, WordListFile, WordSource, info_log, make_rng};

fn play<W: WordSource>(source: W, cli: &word_blitz::cli::Cli, config: word_blitz::GameConfig) {
    let rng = make_rng(cli.seed);
    let mut session = Session::new(config, source, rng, WallClock::new());
    let stdin = io::stdin();
    let mut interface = CliInterface::new(stdin.lock());
    session.run(&mut interface, &cli.theme, cli.difficulty);
}

fn main() -> ExitCode {
    let cli = parse_cli();
    init_logging(cli.verbose);

    let config = match cli.config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Invalid settings: {e}");
            return ExitCode::FAILURE;
        }
    };

    match &cli.words_path {
        Some(path) => {
            let source = WordListFile::new(path);
            // Surface a bad path up front instead of silently using the fallback list.
            if let Err(e) = source.words_for(&cli.theme) {
                eprintln!("{e}");
                return ExitCode::FAILURE;
            }
            info_log!("Using word list {}", path.display());
            play(source, &cli, config);
        }
        None => {
            let dir = cli.themes_dir.clone().or_else(default_themes_dir);
            info_log!("Theme directory: {:?}", dir);
            play(ThemeLibrary::new(dir), &cli, config);
        }
    }
    ExitCode::SUCCESS
}
