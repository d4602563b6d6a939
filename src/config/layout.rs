// src/config/layout.rs
//! Layout catalog: which statistics live in which stat table.
//!
//! Stat names are stored in the singular ("Melee Final Blow"); the page
//! singularizes labels whose count is exactly one, and the extractor strips a
//! trailing `s` from the page's label before comparing. Suffixed labels such as
//! "Eliminations - Most in Game" are stored as name "Elimination" with suffix
//! "- Most in Game".
//!
//! File shape (the same one the built-in catalog uses):
//! ```json
//! { "career_stats": [
//!     { "sectionName": "Combat",
//!       "stats": [ { "name": "Melee Final Blow", "key": "melee_final_blows" } ] } ] }
//! ```
//! A bare array of section objects is accepted too.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::{Result, ScrapeError};

const BUILTIN_LAYOUT: &str = include_str!("page_layout.json");

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct StatDefinition {
    #[serde(rename = "name")]
    pub display_name: String,
    pub key: String,
    #[serde(default)]
    pub suffix: Option<String>,
}

impl StatDefinition {
    pub fn new(display_name: &str, key: &str, suffix: Option<&str>) -> Self {
        Self {
            display_name: display_name.to_string(),
            key: key.to_string(),
            suffix: suffix.map(str::to_string),
        }
    }

    /// Suffix to match against, with `""` meaning none.
    pub fn suffix(&self) -> Option<&str> {
        self.suffix.as_deref().filter(|s| !s.is_empty())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct SectionDefinition {
    #[serde(rename = "sectionName")]
    pub section_header: String,
    pub stats: Vec<StatDefinition>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum LayoutFile {
    Wrapped { career_stats: Vec<SectionDefinition> },
    Bare(Vec<SectionDefinition>),
}

/// Immutable once built; hand it to the extractor by reference.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Catalog {
    sections: Vec<SectionDefinition>,
}

impl Catalog {
    pub fn new(sections: Vec<SectionDefinition>) -> Result<Self> {
        validate_keys(&sections)?;
        Ok(Self { sections })
    }

    pub fn from_json(text: &str) -> Result<Self> {
        let sections = match serde_json::from_str::<LayoutFile>(text)? {
            LayoutFile::Wrapped { career_stats } => career_stats,
            LayoutFile::Bare(sections) => sections,
        };
        Self::new(sections)
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    pub fn builtin() -> Result<Self> {
        Self::from_json(BUILTIN_LAYOUT)
    }

    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) => {
                log::info!("Layout catalog: {}", p.display());
                Self::from_path(p)
            }
            None => Self::builtin(),
        }
    }

    pub fn sections(&self) -> &[SectionDefinition] {
        &self.sections
    }

    pub fn stat_count(&self) -> usize {
        self.sections.iter().map(|s| s.stats.len()).sum()
    }
}

fn validate_keys(sections: &[SectionDefinition]) -> Result<()> {
    let mut seen = HashSet::new();
    for stat in sections.iter().flat_map(|s| &s.stats) {
        if stat.key.is_empty() {
            return Err(ScrapeError::Catalog(format!(
                "stat \"{}\" has an empty key",
                stat.display_name
            )));
        }
        if !seen.insert(stat.key.as_str()) {
            return Err(ScrapeError::Catalog(format!("duplicate key \"{}\"", stat.key)));
        }
    }
    Ok(())
}
