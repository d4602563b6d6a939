// src/config/options.rs
use std::path::PathBuf;

use super::consts::*;
use crate::trigger::Trigger;

/// Which career page to read.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Account {
    pub battletag: String,
    pub region: String,
    pub platform: String,
}

impl Default for Account {
    fn default() -> Self {
        Self {
            battletag: DEFAULT_BATTLETAG.to_string(),
            region: DEFAULT_REGION.to_string(),
            platform: DEFAULT_PLATFORM.to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Source {
    /// Fetch live, then wait for the trigger, forever.
    Poll(Account),
    /// Parse a saved copy of the page once. `date` overrides the timestamp cell.
    Saved { path: PathBuf, date: Option<String> },
}

#[derive(Clone, Debug)]
pub struct Params {
    pub source: Source,
    pub out: Option<PathBuf>,      // CSV path; generated when absent
    pub layout: Option<PathBuf>,   // catalog override; built-in when absent
    pub trigger: Trigger,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            source: Source::Poll(Account::default()),
            out: None,
            layout: None,
            trigger: Trigger::default(),
        }
    }
}
