// src/logging.rs
use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::PathBuf;
use std::sync::OnceLock;
use std::time::Instant;

use log::LevelFilter;

use crate::config::consts::{LOG_FILE, STORE_DIR};

static START: OnceLock<Instant> = OnceLock::new();

fn start() -> Instant {
    *START.get_or_init(Instant::now)
}

pub fn fmt_elapsed(ms: u128) -> String {
    let total_ms = ms as u64;
    let h = total_ms / 3_600_000;
    let m = (total_ms % 3_600_000) / 60_000;
    let s = (total_ms % 60_000) / 1_000;
    let ms = total_ms % 1_000;
    format!("{h:02}:{m:02}:{s:02}.{ms:03}")
}

pub fn log_path() -> PathBuf {
    PathBuf::from(STORE_DIR).join(LOG_FILE)
}

fn open_log_file() -> Option<File> {
    fs::create_dir_all(STORE_DIR).ok()?;
    OpenOptions::new().create(true).append(true).open(log_path()).ok()
}

/// `[HH:MM:SS.mmm][LEVEL] msg` lines, time relative to process start, into
/// `.store/debug.log` (stderr if that can't be opened). `RUST_LOG` overrides
/// the level.
pub fn init(verbose: bool) {
    start();

    let mut builder = env_logger::Builder::new();
    builder
        .filter_level(if verbose { LevelFilter::Debug } else { LevelFilter::Info })
        .parse_default_env()
        .format(|buf, record| {
            let elapsed = fmt_elapsed(start().elapsed().as_millis());
            writeln!(buf, "[{elapsed}][{}] {}", record.level(), record.args())
        });

    if let Some(file) = open_log_file() {
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    }

    // A second init (tests, embedding) keeps the first logger.
    let _ = builder.try_init();
}
