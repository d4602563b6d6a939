// src/data.rs
//
// Canonical shapes flowing out of the extractor.
//
// - StatRecord: one named value. `value` is None when the row is not on the page.
// - Hero: one entry of the page's hero picker.
// - Snapshot: every record of one fetch, in column order, keys unique.

use std::collections::HashSet;
use std::fmt;

use crate::error::{Result, ScrapeError};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatRecord {
    pub name: String,
    pub key: String,
    pub value: Option<String>,
}

impl StatRecord {
    pub fn new(name: impl Into<String>, key: impl Into<String>, value: Option<String>) -> Self {
        Self { name: name.into(), key: key.into(), value }
    }

    /// Namespace a per-hero record: "Eliminations (Ana)" / `eliminations_ana`.
    pub fn for_hero(self, hero: &Hero) -> Self {
        Self {
            name: format!("{} ({})", self.name, hero.name),
            key: format!("{}_{}", self.key, hero.normalized_name),
            value: self.value,
        }
    }

    /// Namespace a record by game mode: "Eliminations - competitive" / `eliminations_competitive`.
    pub fn for_mode(self, mode: GameMode) -> Self {
        Self {
            name: format!("{} - {}", self.name, mode),
            key: format!("{}_{}", self.key, mode),
            value: self.value,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Hero {
    pub name: String,
    pub normalized_name: String,
    /// Page-specific category id used to find the hero's stat block.
    pub id: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GameMode {
    Competitive,
    Quickplay,
}

impl GameMode {
    /// Column order depends on this order; do not reorder.
    pub const ALL: [GameMode; 2] = [GameMode::Competitive, GameMode::Quickplay];

    /// Both the page section id and the key suffix.
    pub fn id(self) -> &'static str {
        match self {
            GameMode::Competitive => "competitive",
            GameMode::Quickplay => "quickplay",
        }
    }
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// One complete, ordered extraction for one account at one point in time.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Snapshot {
    records: Vec<StatRecord>,
}

impl Snapshot {
    /// Fails on the first repeated key; a CSV with two columns of the same
    /// name cannot be read back reliably.
    pub fn new(records: Vec<StatRecord>) -> Result<Self> {
        if let Some(dup) = first_duplicate(&records) {
            return Err(ScrapeError::DuplicateKey(dup));
        }
        Ok(Self { records })
    }

    pub fn records(&self) -> &[StatRecord] { &self.records }
    pub fn len(&self) -> usize { self.records.len() }
    pub fn is_empty(&self) -> bool { self.records.is_empty() }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.records.iter().map(|r| r.key.as_str())
    }

    pub fn get(&self, key: &str) -> Option<&StatRecord> {
        self.records.iter().find(|r| r.key == key)
    }

    /// Value under `key`; None both when the key is absent and when its value is.
    pub fn value(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(|r| r.value.as_deref())
    }
}

fn first_duplicate(records: &[StatRecord]) -> Option<String> {
    let mut seen = HashSet::with_capacity(records.len());
    records
        .iter()
        .find(|r| !seen.insert(r.key.as_str()))
        .map(|r| r.key.clone())
}

impl<'a> IntoIterator for &'a Snapshot {
    type Item = &'a StatRecord;
    type IntoIter = std::slice::Iter<'a, StatRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ana() -> Hero {
        Hero { name: "Ana".into(), normalized_name: "ana".into(), id: "0x02E000000000013B".into() }
    }

    #[test]
    fn hero_then_mode_namespacing() {
        let rec = StatRecord::new("Eliminations", "eliminations", Some("12".into()))
            .for_hero(&ana())
            .for_mode(GameMode::Quickplay);
        assert_eq!(rec.name, "Eliminations (Ana) - quickplay");
        assert_eq!(rec.key, "eliminations_ana_quickplay");
        assert_eq!(rec.value.as_deref(), Some("12"));
    }

    #[test]
    fn snapshot_rejects_duplicate_keys() {
        let recs = vec![
            StatRecord::new("A", "a", None),
            StatRecord::new("B", "b", None),
            StatRecord::new("A again", "a", Some("1".into())),
        ];
        match Snapshot::new(recs) {
            Err(ScrapeError::DuplicateKey(k)) => assert_eq!(k, "a"),
            other => panic!("expected duplicate key error, got {other:?}"),
        }
    }

    #[test]
    fn snapshot_lookup() {
        let snap = Snapshot::new(vec![
            StatRecord::new("Skill Rating", "skill_rating", Some("2,512".into())),
            StatRecord::new("Rank", "rank", None),
        ])
        .unwrap();
        assert_eq!(snap.value("skill_rating"), Some("2,512"));
        assert_eq!(snap.value("rank"), None);
        assert!(snap.get("rank").is_some());
        assert_eq!(snap.keys().collect::<Vec<_>>(), vec!["skill_rating", "rank"]);
    }
}
