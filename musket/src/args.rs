use std::fmt;
use std::path::PathBuf;

use log::LevelFilter;
use musket_search::{ParseStrategyError, Strategy};

/// Board file read when none is given.
pub const DEFAULT_BOARD: &str = "input.txt";

pub const USAGE: &str = "\
usage: musket [--strategy NAME] [--json] [-v]... [FILE]

Search a path from every musketeer (1) to the diamond (3) and report the
shortest one. FILE holds one board row per line, cells as integer codes
separated by spaces (0 soldier, 1 musketeer, 2 free, 3 diamond). It
defaults to input.txt.

options:
  -s, --strategy NAME   best-first (default), depth-first or ida-star
  -j, --json            print the result as JSON
  -v, --verbose         log search progress; repeat for more detail
  -h, --help            show this message";

/// Settings for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    pub board: PathBuf,
    pub strategy: Strategy,
    pub json: bool,
    pub verbosity: u8,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            board: PathBuf::from(DEFAULT_BOARD),
            strategy: Strategy::default(),
            json: false,
            verbosity: 0,
        }
    }
}

impl Options {
    /// Log level for the chosen verbosity.
    pub fn log_level(&self) -> LevelFilter {
        match self.verbosity {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}

/// What the binary was asked to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Run(Options),
    Help,
}

/// Parse arguments, excluding the program name.
pub fn parse<I, S>(args: I) -> Result<Command, ArgsError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut opts = Options::default();
    let mut board: Option<PathBuf> = None;
    let mut args = args.into_iter().map(Into::into);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => return Ok(Command::Help),
            "-j" | "--json" => opts.json = true,
            "-v" | "--verbose" => opts.verbosity = opts.verbosity.saturating_add(1),
            "-s" | "--strategy" => {
                let name = args.next().ok_or(ArgsError::MissingValue(arg.clone()))?;
                opts.strategy = name.parse()?;
            }
            _ if arg.starts_with("--strategy=") => {
                opts.strategy = arg["--strategy=".len()..].parse()?;
            }
            _ if arg.starts_with("-vv") && arg[1..].chars().all(|c| c == 'v') => {
                let n = (arg.len() - 1).min(u8::MAX as usize) as u8;
                opts.verbosity = opts.verbosity.saturating_add(n);
            }
            _ if arg.starts_with('-') && arg != "-" => return Err(ArgsError::UnknownFlag(arg)),
            _ => {
                if board.is_some() {
                    return Err(ArgsError::UnexpectedArgument(arg));
                }
                board = Some(PathBuf::from(arg));
            }
        }
    }

    if let Some(board) = board {
        opts.board = board;
    }
    Ok(Command::Run(opts))
}

/// Reasons the command line is rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArgsError {
    UnknownFlag(String),
    MissingValue(String),
    UnexpectedArgument(String),
    Strategy(ParseStrategyError),
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownFlag(flag) => write!(f, "unknown option {flag}"),
            Self::MissingValue(flag) => write!(f, "option {flag} needs a value"),
            Self::UnexpectedArgument(arg) => write!(f, "unexpected argument {arg}"),
            Self::Strategy(e) => e.fmt(f),
        }
    }
}

impl std::error::Error for ArgsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Strategy(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ParseStrategyError> for ArgsError {
    fn from(e: ParseStrategyError) -> Self {
        Self::Strategy(e)
    }
}
