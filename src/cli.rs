// src/cli.rs
use std::path::{Path, PathBuf};

use clap::Parser;

use crate::config::consts::*;
use crate::config::options::{Account, Params, Source};
use crate::data::Snapshot;
use crate::error::Result;
use crate::progress::Progress;
use crate::trigger::Trigger;

/// Append snapshots of an Overwatch career page to a CSV log.
///
/// Without `--from`, fetches the live page, writes a row, then waits for the
/// hotkey to collect again (q, Esc or Ctrl+C to quit).
#[derive(Debug, Parser)]
#[command(name = "throwverwatch", version, about)]
pub struct Args {
    /// CSV file to append to. A directory gets a generated filename inside it.
    pub output_file: Option<PathBuf>,

    #[arg(short, long, default_value = DEFAULT_BATTLETAG)]
    pub battletag: String,

    #[arg(short, long, default_value = DEFAULT_REGION)]
    pub region: String,

    #[arg(short, long, default_value = DEFAULT_PLATFORM)]
    pub platform: String,

    /// Key that triggers the next collection, e.g. home, f5, ctrl+r.
    #[arg(long, default_value = DEFAULT_HOTKEY)]
    pub hotkey: Trigger,

    /// Parse a saved copy of the career page once instead of polling.
    #[arg(long, value_name = "FILE")]
    pub from: Option<PathBuf>,

    /// Date cell for `--from` (defaults to now).
    #[arg(long, requires = "from")]
    pub date: Option<String>,

    /// Stat catalog JSON to use instead of the built-in one.
    #[arg(long, value_name = "FILE")]
    pub layout: Option<PathBuf>,

    /// Debug-level logging.
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    pub fn into_params(self) -> Params {
        let source = match self.from {
            Some(path) => Source::Saved { path, date: self.date },
            None => Source::Poll(Account {
                battletag: self.battletag,
                region: self.region,
                platform: self.platform,
            }),
        };
        Params {
            source,
            out: self.output_file,
            layout: self.layout,
            trigger: self.hotkey,
        }
    }
}

/// Prints a short summary of each snapshot, the way players check their
/// numbers between games.
pub struct ConsoleProgress {
    hint: Option<String>,
}

impl ConsoleProgress {
    pub fn new(params: &Params) -> Self {
        let hint = match params.source {
            Source::Poll(_) => Some(format!("Press {} to collect again, q to quit.", params.trigger)),
            Source::Saved { .. } => None,
        };
        Self { hint }
    }
}

impl Progress for ConsoleProgress {
    fn log(&mut self, msg: &str) {
        println!("{msg}");
    }

    fn snapshot_saved(&mut self, snapshot: &Snapshot, path: &Path) {
        for line in summary_lines(snapshot) {
            println!("{line}");
        }
        println!("Saved to {}", path.display());
        if let Some(hint) = &self.hint {
            println!("{hint}");
        }
    }
}

/// The headline numbers, when the snapshot has them.
pub fn summary_lines(snapshot: &Snapshot) -> Vec<String> {
    let mut lines = Vec::new();
    if let Some(sr) = snapshot.value("skill_rating") {
        lines.push(format!("Your SR is {sr}."));
    }
    if let Some(wins) = snapshot.value("games_won_quickplay") {
        lines.push(format!("{wins} qp wins."));
    }
    if let (Some(wins), Some(played)) = (
        snapshot.value("games_won_competitive"),
        snapshot.value("games_played_competitive"),
    ) {
        lines.push(format!("{wins} comp wins out of {played} games."));
    }
    lines
}

pub fn run() -> Result<()> {
    let args = Args::parse();
    crate::logging::init(args.verbose);

    let params = args.into_params();
    log::debug!("{params:?}");

    let mut progress = ConsoleProgress::new(&params);
    let summary = crate::runner::run(&params, Some(&mut progress))?;
    log::info!("{} snapshot(s) written to {}", summary.snapshots, summary.path.display());
    Ok(())
}
