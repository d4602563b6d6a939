// src/specs/mod.rs
//! # Career page “specs”
//!
//! Everything that knows *where the numbers live* in the career page HTML.
//!
//! ## What lives here
//! - **Table lookup** by header text, and **row lookup** by label with the
//!   page's singular/plural quirk (`table`).
//! - **Hero picker** enumeration (`heroes`).
//! - **Headline stats**: skill rating and rank tier (`headline`).
//! - **Per-container aggregation** driven by the layout catalog (`career`).
//! - **Page assembly** across game modes and heroes into one `Snapshot` (`page`).
//!
//! ## What does **not** live here
//! - Fetching (`core::net`), CSV writing (`csv`, `file`), polling (`runner`).
//! - Any numeric interpretation of values; cells come back as page text.
//!
//! ## Typical call chain
//! ```text
//! runner → core::net::http_get → core::html::parse_document
//!        → specs::page::parse_stats_page(root, &catalog) → Snapshot
//!        → file::SnapshotWriter::write
//! ```
//!
//! ## Conventions & invariants
//! - All lookups are generic over `core::html::Node`.
//! - **Absent is normal**: a missing table or row is `None` / no records.
//! - **Missing landmarks are errors**: a missing mode section, hero picker or
//!   rank widget means the page is not the page we expect; that surfaces as
//!   `ScrapeError::Structure` instead of an empty snapshot.
//! - Record order follows catalog order, then hero order, then mode order, so
//!   CSV columns stay put from run to run.
pub mod career;
pub mod headline;
pub mod heroes;
pub mod page;
pub mod table;

pub use page::{parse_document, parse_stats_page};
