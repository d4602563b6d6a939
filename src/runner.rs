// src/runner.rs
use std::fs;
use std::path::PathBuf;

use chrono::Local;

use crate::{
    config::{
        Catalog,
        consts::DATE_FMT,
        options::{Account, Params, Source},
    },
    core::net::{http_get, profile_url},
    error::Result,
    file::{SnapshotWriter, resolve_output_path},
    progress::{NullProgress, Progress},
    specs,
    trigger::Action,
};

/// Summary of what was produced.
#[derive(Debug)]
pub struct RunSummary {
    pub path: PathBuf,
    pub snapshots: usize,
}

/// Top-level runner: dispatch on the source and run.
/// `progress` can be None (no reporting) or Some(&mut impl Progress).
pub fn run(params: &Params, progress: Option<&mut dyn Progress>) -> Result<RunSummary> {
    let mut null = NullProgress;
    let progress: &mut dyn Progress = match progress {
        Some(p) => p,
        None => &mut null,
    };
    let result = run_inner(params, progress);
    progress.finish();
    result
}

fn run_inner(params: &Params, progress: &mut dyn Progress) -> Result<RunSummary> {
    let catalog = Catalog::load(params.layout.as_deref())?;
    log::debug!("Catalog: {} sections, {} stats", catalog.sections().len(), catalog.stat_count());

    let path = resolve_output_path(params.out.as_deref(), Local::now())?;

    let snapshots = match &params.source {
        Source::Saved { path: page, date } => {
            progress.log(&format!("Reading {}", page.display()));
            let text = fs::read_to_string(page)?;
            let snapshot = specs::parse_document(&text, &catalog)?;
            let date = saved_date(date.as_deref());

            // The log is only touched once there is a row for it.
            let mut writer = SnapshotWriter::open(&path)?;
            writer.write(&snapshot, &date)?;
            log::info!("Saved {} values from {}", snapshot.len(), page.display());
            progress.snapshot_saved(&snapshot, writer.path());
            1
        }
        Source::Poll(account) => {
            let url = profile_url(account);
            log::info!("Polling {url}");
            progress.log(&collecting_line(account));

            let mut writer = SnapshotWriter::open(&path)?;
            let trigger = params.trigger;
            let mut warned = false;
            poll(
                &catalog,
                &mut writer,
                || http_get(&url),
                || Ok(trigger.wait(&mut warned)? == Action::Again),
                progress,
            )?
        }
    };

    Ok(RunSummary { path, snapshots })
}

/// Fetch, parse and append until `wait` says stop. Returns the number of rows
/// written. The first failure ends the loop.
pub fn poll<F, W>(
    catalog: &Catalog,
    writer: &mut SnapshotWriter,
    mut fetch: F,
    mut wait: W,
    progress: &mut dyn Progress,
) -> Result<usize>
where
    F: FnMut() -> Result<String>,
    W: FnMut() -> Result<bool>,
{
    let mut written = 0;
    loop {
        progress.log("Collecting stats...");
        let text = fetch()?;
        let snapshot = specs::parse_document(&text, catalog)?;
        writer.write(&snapshot, &timestamp_now())?;
        written += 1;
        log::info!("Snapshot {written}: {} values", snapshot.len());

        progress.snapshot_saved(&snapshot, writer.path());
        if !wait()? {
            break;
        }
    }
    Ok(written)
}

/// Date cell for a saved page: the given date, or now when it is absent or blank.
pub fn saved_date(date: Option<&str>) -> String {
    match date.map(str::trim) {
        Some(d) if !d.is_empty() => d.to_string(),
        _ => timestamp_now(),
    }
}

pub fn collecting_line(account: &Account) -> String {
    format!(
        "Collecting stats for battletag {} in region {} and platform {}.",
        account.battletag, account.region, account.platform
    )
}

/// Local wall-clock time in the date column's format.
pub fn timestamp_now() -> String {
    Local::now().format(DATE_FMT).to_string()
}
