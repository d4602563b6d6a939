// src/specs/page.rs

use crate::config::consts::{ALL_HEROES_CATEGORY, CATEGORY_ATTR};
use crate::config::Catalog;
use crate::core::html;
use crate::core::Node;
use crate::data::{GameMode, Hero, Snapshot, StatRecord};
use crate::error::{Result, ScrapeError};

use super::career::career_stats;
use super::headline::skill_rating_and_rank;
use super::heroes::heroes_from_selection_menu;

/// Parse career page markup into a snapshot.
pub fn parse_document(text: &str, catalog: &Catalog) -> Result<Snapshot> {
    let doc = html::parse_document(text);
    parse_stats_page(doc.root_element(), catalog)
}

/// Headline stats, then every mode's all-heroes block followed by one block per
/// hero that has stats in that mode.
pub fn parse_stats_page<N: Node>(page: N, catalog: &Catalog) -> Result<Snapshot> {
    let mut records = skill_rating_and_rank(page)?;
    let heroes = heroes_from_selection_menu(page)?;

    for mode in GameMode::ALL {
        records.extend(mode_stats(page, mode, &heroes, catalog)?);
    }

    log::debug!("Snapshot: {} records", records.len());
    Snapshot::new(records)
}

fn mode_stats<N: Node>(
    page: N,
    mode: GameMode,
    heroes: &[Hero],
    catalog: &Catalog,
) -> Result<Vec<StatRecord>> {
    let section = page
        .find_by_id(mode.id())
        .ok_or_else(|| ScrapeError::missing(format!("{mode} section")))?;

    let overall = category(section, ALL_HEROES_CATEGORY)
        .ok_or_else(|| ScrapeError::missing(format!("{mode} all-heroes stats")))?;
    let mut stats = career_stats(overall, catalog);

    for hero in heroes {
        let Some(container) = category(section, &hero.id) else {
            log::debug!("{}: no {mode} stats", hero.name);
            continue;
        };
        stats.extend(
            career_stats(container, catalog)
                .into_iter()
                .map(|stat| stat.for_hero(hero)),
        );
    }

    Ok(stats.into_iter().map(|stat| stat.for_mode(mode)).collect())
}

fn category<N: Node>(section: N, id: &str) -> Option<N> {
    section.find_by_attrs("div", &[(CATEGORY_ATTR, id)])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{SectionDefinition, StatDefinition};

    fn games_played() -> Catalog {
        Catalog::new(vec![SectionDefinition {
            section_header: "Game".into(),
            stats: vec![StatDefinition::new("Games Played", "games_played", None)],
        }])
        .unwrap()
    }

    const HEAD: &str = r#"
        <div class="competitive-rank"><img src="rank-3.png"><div>1,850</div></div>
        <select data-js="career-select" data-group-id="stats">
          <option value="0x02E00000FFFFFFFF">ALL HEROES</option>
          <option value="0xA">Ana</option>
        </select>"#;

    fn game_table(n: &str) -> String {
        format!(r#"<table><thead><tr><th>Game</th></tr></thead>
            <tbody><tr><td>Games Played</td><td>{n}</td></tr></tbody></table>"#)
    }

    #[test]
    fn hero_blocks_follow_the_mode_aggregate() {
        let page = format!(
            r#"<html><body>{HEAD}
            <div id="competitive">
              <div data-category-id="0x02E00000FFFFFFFF">{}</div>
              <div data-category-id="0xA">{}</div>
            </div>
            <div id="quickplay">
              <div data-category-id="0x02E00000FFFFFFFF">{}</div>
            </div></body></html>"#,
            game_table("10"),
            game_table("4"),
            game_table("99"),
        );
        let snap = parse_document(&page, &games_played()).unwrap();
        let keys: Vec<_> = snap.keys().collect();
        assert_eq!(
            keys,
            vec![
                "skill_rating",
                "rank",
                "games_played_competitive",
                "games_played_ana_competitive",
                "games_played_quickplay",
            ]
        );
        let ana = snap.get("games_played_ana_competitive").unwrap();
        assert_eq!(ana.name, "Games Played (Ana) - competitive");
        assert_eq!(ana.value.as_deref(), Some("4"));
        assert_eq!(snap.value("rank"), Some("Gold"));
    }

    #[test]
    fn missing_mode_section_is_structural() {
        let page = format!(
            r#"<html><body>{HEAD}
            <div id="competitive"><div data-category-id="0x02E00000FFFFFFFF"></div></div>
            </body></html>"#
        );
        let err = parse_document(&page, &games_played()).unwrap_err();
        match err {
            ScrapeError::Structure { landmark } => assert!(landmark.contains("quickplay")),
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn missing_all_heroes_block_is_structural() {
        let page = format!(
            r#"<html><body>{HEAD}
            <div id="competitive"></div><div id="quickplay"></div>
            </body></html>"#
        );
        assert!(parse_document(&page, &games_played()).unwrap_err().is_structural());
    }
}
