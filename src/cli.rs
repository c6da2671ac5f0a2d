use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::PathBuf;

use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use log::{info, LevelFilter};
use thiserror::Error;

use bank_ocr::{read_accounts, OcrError};

/// Decode OCR account numbers from a text file and print one per line.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// File of glyph rows: three rows per account, separated by blank lines.
    pub file: Option<String>,

    /// Show a spinner on stderr counting decoded accounts.
    #[arg(short, long, default_value_t = false)]
    pub progress: bool,

    /// Log more detail. Repeat for more. RUST_LOG overrides this.
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Debug, Error)]
pub enum CliError {
    #[error("No file name given.")]
    NoFileName,

    #[error("Could not open file. {path}: {source}")]
    Open { path: PathBuf, source: io::Error },

    #[error("{0}")]
    Decode(#[from] OcrError),

    #[error("Could not write output: {0}")]
    Output(io::Error),
}

impl Args {
    pub fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }

    fn path(&self) -> Result<PathBuf, CliError> {
        match self.file.as_deref().map(str::trim) {
            Some(name) if !name.is_empty() => Ok(PathBuf::from(name)),
            _ => Err(CliError::NoFileName),
        }
    }
}

pub fn init_logging(args: &Args) {
    env_logger::Builder::new()
        .filter_level(args.log_level())
        .parse_default_env()
        .init();
}

/// Decode the file named in `args`, writing each account to `out` as soon as
/// it is decoded. Returns the number of accounts written.
pub fn run<W: Write>(args: &Args, out: &mut W) -> Result<u64, CliError> {
    let path = args.path()?;
    info!("Attempting to read file: {}", path.display());
    let file = File::open(&path).map_err(|source| CliError::Open { path: path.clone(), source })?;
    info!("File opened.");

    let bar = if args.progress { ProgressBar::new_spinner() } else { ProgressBar::hidden() };
    bar.set_style(ProgressStyle::with_template("{spinner} {pos} accounts decoded").unwrap_or_else(|_| ProgressStyle::default_spinner()));

    for account in read_accounts(BufReader::new(file)) {
        let account = match account {
            Ok(account) => account,
            Err(e) => {
                bar.abandon();
                return Err(e.into());
            }
        };
        bar.suspend(|| writeln!(out, "{}", account)).map_err(CliError::Output)?;
        bar.inc(1);
    }

    let count = bar.position();
    bar.finish_and_clear();
    info!("Decoded {} accounts from {}", count, path.display());
    Ok(count)
}
