// src/specs/headline.rs
//! Skill rating and rank tier from the competitive rank badge:
//! ```html
//! <div class="competitive-rank">
//!   <img src="https://…/rank-icons/season-2/rank-5.png">
//!   <div class="u-align-center h6">3,012</div>
//! </div>
//! ```
//! Top 500 players show the Grandmaster badge.

use crate::config::consts::{RANK_TIERS, RANK_WIDGET_CLASS};
use crate::core::Node;
use crate::data::StatRecord;
use crate::error::{Result, ScrapeError};

pub fn skill_rating_and_rank<N: Node>(page: N) -> Result<Vec<StatRecord>> {
    let widget = page
        .find_by_class(RANK_WIDGET_CLASS)
        .ok_or_else(|| ScrapeError::missing("competitive rank widget"))?;

    let rating = widget
        .find_first("div")
        .ok_or_else(|| ScrapeError::missing("skill rating in rank widget"))?
        .inner_text()
        .trim()
        .to_string();

    let badge = widget
        .find_first("img")
        .and_then(|img| img.attribute("src").map(str::to_string))
        .ok_or_else(|| ScrapeError::missing("rank badge image"))?;

    let rank = rank_from_badge(&badge);
    if rank.is_none() {
        log::warn!("Unrecognized rank badge: {badge}");
    }

    Ok(vec![
        StatRecord::new("Skill Rating", "skill_rating", Some(rating)),
        StatRecord::new("Rank", "rank", rank.map(str::to_string)),
    ])
}

/// `…/rank-5.png` → "Diamond". The tier code is the character just before `.png`.
pub fn rank_from_badge(src: &str) -> Option<&'static str> {
    let code = src.chars().rev().nth(4)?;
    RANK_TIERS
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, tier)| *tier)
}
