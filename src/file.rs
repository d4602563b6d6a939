// src/file.rs

use std::{
    fs::{self, File, OpenOptions},
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use chrono::{DateTime, Local};

use crate::config::consts::{CSV_SEP, DEFAULT_FILE_STEM, FILE_STAMP_FMT, MAX_FILENAME_FUDGE};
use crate::csv::{data_row, header_row, parse_rows, write_row};
use crate::data::Snapshot;
use crate::error::{Result, ScrapeError};

/// Open `path` for appending, creating it (and its parent directory) if needed.
/// The flag says whether the file was already there, i.e. whether it already
/// has a header.
pub fn open_log(path: &Path) -> Result<(File, bool)> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }
    let existed = path.exists();
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    Ok((file, existed))
}

/// Appends one CSV row per snapshot. The header goes out with the first
/// snapshot, and only when the file is new (or empty).
pub struct SnapshotWriter {
    path: PathBuf,
    out: BufWriter<File>,
    needs_header: bool,
    existing_header: Option<Vec<String>>,
}

impl SnapshotWriter {
    pub fn open(path: &Path) -> Result<Self> {
        let (file, existed) = open_log(path)?;
        let existing_header = if existed { read_header(path)? } else { None };
        log::info!(
            "{} {}",
            if existed { "Appending to" } else { "Creating" },
            path.display()
        );
        Ok(Self {
            path: path.to_path_buf(),
            out: BufWriter::new(file),
            needs_header: existing_header.is_none(),
            existing_header,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn write(&mut self, snapshot: &Snapshot, date: &str) -> Result<()> {
        let header = header_row(snapshot);
        if self.needs_header {
            write_row(&mut self.out, &header, CSV_SEP)?;
            self.needs_header = false;
        } else if let Some(existing) = self.existing_header.take() {
            // Only checked once; later rows come from the same roster.
            if existing != header {
                log::warn!(
                    "{}: columns differ from this snapshot ({} in file, {} now); appending anyway",
                    self.path.display(),
                    existing.len(),
                    header.len()
                );
            }
        }
        write_row(&mut self.out, &data_row(snapshot, date), CSV_SEP)?;
        // Rows must survive the process being killed mid-poll.
        self.out.flush()?;
        Ok(())
    }
}

/// First row of an existing log, if it has one.
pub fn read_header(path: &Path) -> Result<Option<Vec<String>>> {
    let text = fs::read_to_string(path)?;
    Ok(parse_rows(&text, CSV_SEP).into_iter().next())
}

/// Where to write. A user path pointing at a directory (or ending in a
/// separator) gets a generated filename inside it; no path at all gets a
/// generated filename in the working directory.
pub fn resolve_output_path(user: Option<&Path>, now: DateTime<Local>) -> Result<PathBuf> {
    match user {
        None => unique_filename(Path::new(""), now),
        Some(p) if p.is_dir() || looks_like_dir_hint(p) => {
            ensure_directory(p)?;
            unique_filename(p, now)
        }
        Some(p) => Ok(p.to_path_buf()),
    }
}

/// `throwverwatch-<stamp>.csv`, or `throwverwatch-<stamp>-<n>.csv` when taken.
pub fn unique_filename(dir: &Path, now: DateTime<Local>) -> Result<PathBuf> {
    let stamp = now.format(FILE_STAMP_FMT).to_string();
    let first = dir.join(format!("{DEFAULT_FILE_STEM}-{stamp}.csv"));
    if !first.exists() {
        return Ok(first);
    }
    for fudge in 1..=MAX_FILENAME_FUDGE {
        let candidate = dir.join(format!("{DEFAULT_FILE_STEM}-{stamp}-{fudge}.csv"));
        if !candidate.exists() {
            return Ok(candidate);
        }
    }
    Err(ScrapeError::OutputPath {
        path: first,
        reason: format!("more than {MAX_FILENAME_FUDGE} files with this name already exist"),
    })
}

pub fn ensure_directory(dir: &Path) -> Result<()> {
    if dir.exists() && !dir.is_dir() {
        return Err(ScrapeError::OutputPath {
            path: dir.to_path_buf(),
            reason: "exists but is not a directory".into(),
        });
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}

pub fn looks_like_dir_hint(p: &Path) -> bool {
    let s = p.to_string_lossy();
    s.ends_with('/') || s.ends_with('\\')
}
