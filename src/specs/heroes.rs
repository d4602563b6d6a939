// src/specs/heroes.rs
//! Hero roster, read from the career page's hero picker:
//! ```html
//! <select data-js="career-select" data-group-id="stats">
//!   <option value="0x02E00000FFFFFFFF">ALL HEROES</option>
//!   <option value="0x02E0000000000079">Lúcio</option>
//! </select>
//! ```
//! The first option is always the "all heroes" entry and is skipped.

use crate::config::consts::HERO_SELECT_ATTRS;
use crate::core::sanitize::normalize_name;
use crate::core::Node;
use crate::data::Hero;
use crate::error::{Result, ScrapeError};

pub fn heroes_from_selection_menu<N: Node>(page: N) -> Result<Vec<Hero>> {
    let select = page
        .find_by_attrs("select", HERO_SELECT_ATTRS)
        .ok_or_else(|| ScrapeError::missing("hero selection menu"))?;

    let heroes = select
        .find_all("option")
        .into_iter()
        .skip(1)
        .map(|option| {
            let name = option.inner_text().trim().to_string();
            let id = option
                .attribute("value")
                .ok_or_else(|| ScrapeError::missing(format!("value of hero option \"{name}\"")))?
                .to_string();
            Ok(Hero { normalized_name: normalize_name(&name), name, id })
        })
        .collect::<Result<Vec<_>>>()?;

    log::debug!(
        "Heroes: {:?}",
        heroes.iter().map(|h| h.name.as_str()).collect::<Vec<_>>()
    );
    Ok(heroes)
}
