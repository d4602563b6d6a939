// src/specs/career.rs

use crate::config::Catalog;
use crate::core::Node;
use crate::data::StatRecord;

use super::table::{find_stat_in_table, find_table};

/// Every catalogued stat found in one stat container (the all-heroes block or
/// one hero's block), in catalog order.
///
/// A section whose table is missing contributes nothing, not a run of empty
/// records; a row missing from a present table gives a record with no value.
pub fn career_stats<N: Node>(container: N, catalog: &Catalog) -> Vec<StatRecord> {
    let mut stats = Vec::with_capacity(catalog.stat_count());

    for section in catalog.sections() {
        let Some(table) = find_table(&section.section_header, container) else {
            continue;
        };
        stats.extend(section.stats.iter().map(|stat| {
            let value = find_stat_in_table(&stat.display_name, table, stat.suffix());
            StatRecord::new(&stat.display_name, &stat.key, value)
        }));
    }
    stats
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{SectionDefinition, StatDefinition};
    use crate::core::html::parse_document;

    fn catalog() -> Catalog {
        Catalog::new(vec![
            SectionDefinition {
                section_header: "Combat".into(),
                stats: vec![
                    StatDefinition::new("Solo Kill", "solo_kills", None),
                    StatDefinition::new("Melee Final Blow", "melee_final_blows", None),
                ],
            },
            SectionDefinition {
                section_header: "Game".into(),
                stats: vec![StatDefinition::new("Games Played", "games_played", None)],
            },
        ])
        .unwrap()
    }

    const COMBAT: &str = r#"<table><thead><tr><th>Combat</th></tr></thead>
        <tbody><tr><td>Solo Kills</td><td>12</td></tr></tbody></table>"#;
    const GAME: &str = r#"<table><thead><tr><th>Game</th></tr></thead>
        <tbody><tr><td>Games Played</td><td>10</td></tr></tbody></table>"#;

    fn stats(body: &str) -> Vec<StatRecord> {
        let doc = parse_document(&format!(r#"<div id="box">{body}</div>"#));
        career_stats(doc.root_element().find_by_id("box").unwrap(), &catalog())
    }

    #[test]
    fn catalog_order_with_nulls_for_missing_rows() {
        // tables out of catalog order on the page
        let recs = stats(&format!("{GAME}{COMBAT}"));
        let keys: Vec<_> = recs.iter().map(|r| r.key.as_str()).collect();
        assert_eq!(keys, vec!["solo_kills", "melee_final_blows", "games_played"]);
        assert_eq!(recs[0].value.as_deref(), Some("12"));
        assert_eq!(recs[1].value, None);
        assert_eq!(recs[1].name, "Melee Final Blow");
        assert_eq!(recs[2].value.as_deref(), Some("10"));
    }

    #[test]
    fn missing_section_is_omitted_not_padded() {
        let full = stats(&format!("{COMBAT}{GAME}"));
        let partial = stats(COMBAT);
        assert!(partial.len() < full.len());
        assert_eq!(partial.len(), 2);
        assert!(partial.iter().all(|r| r.key != "games_played"));
    }

    #[test]
    fn empty_container_gives_nothing() {
        assert!(stats("<p>never played</p>").is_empty());
    }
}
