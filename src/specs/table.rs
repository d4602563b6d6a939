// src/specs/table.rs
//! Stat tables look like this:
//! ```html
//! <table class="data-table">
//!   <thead><tr><th colspan="2"><span class="stat-title">Combat</span></th></tr></thead>
//!   <tbody>
//!     <tr><td>Melee Final Blow</td><td>1</td></tr>
//!     <tr><td>Solo Kills</td><td>5,124</td></tr>
//!     <tr><td>Objective Kills - Most in Game</td><td>31</td></tr>
//!   </tbody>
//! </table>
//! ```
//! Labels whose count is exactly one are singular on the page, suffixed
//! labels included ("Objective Kill - Most in Game: 1").

use crate::core::Node;

/// First table under `container` whose header row reads `header`.
pub fn find_table<N: Node>(header: &str, container: N) -> Option<N> {
    log::debug!("Looking for table \"{header}\"");
    container
        .find_all("table")
        .into_iter()
        .find(|table| header_text(table).as_deref() == Some(header))
}

fn header_text<N: Node>(table: &N) -> Option<String> {
    let row = table.find_first("thead")?.find_first("tr")?;
    Some(row.inner_text().trim().to_string())
}

/// Value cell of the row labelled `stat`.
///
/// `stat` is the singular name ("Melee Final Blow"). `suffix` is whatever
/// follows the name on the label, without the separating space ("- Gold" for
/// "Medals - Gold").
///
/// The plural rule is the page's own: strip every trailing `s` from the label
/// and compare. "Games Won" has to be catalogued as "Games Won", not
/// "Game Won".
///
/// Label and value text are trimmed of surrounding whitespace first, so
/// `"Kills "` matches `"Kill"` and values come back without padding.
pub fn find_stat_in_table<N: Node>(stat: &str, table: N, suffix: Option<&str>) -> Option<String> {
    let suffix = suffix.filter(|s| !s.is_empty());

    for row in table.find_all("tr") {
        let cells = row.find_all("td");
        let (Some(label_cell), Some(value_cell)) = (cells.first(), cells.get(1)) else {
            continue; // header rows, spacers
        };
        let label = label_cell.inner_text();
        let label = label.trim();
        if label.is_empty() {
            continue;
        }
        if label_matches(label, stat, suffix) {
            return Some(value_cell.inner_text().trim().to_string());
        }
    }
    None
}

pub fn label_matches(label: &str, stat: &str, suffix: Option<&str>) -> bool {
    match suffix {
        Some(suffix) => label
            .strip_suffix(suffix)
            .is_some_and(|prefix| prefix.trim_end_matches(' ').trim_end_matches('s') == stat),
        None => label.trim_end_matches('s') == stat,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::html::parse_document;

    const PAGE: &str = r#"
        <html><body><div id="hero">
          <table class="data-table">
            <thead><tr><th colspan="2"><span class="stat-title">Combat</span></th></tr></thead>
            <tbody>
              <tr><td>Melee Final Blow</td><td>1</td></tr>
              <tr><td>Solo Kills</td><td>5,124</td></tr>
              <tr><td>Objective Kills - Most in Game</td><td>31</td></tr>
              <tr><td>Objective Kill - Average</td><td>1</td></tr>
              <tr><td>Lonely</td></tr>
            </tbody>
          </table>
          <table class="data-table">
            <thead><tr><th colspan="2">
              <span class="stat-title">Game</span>
            </th></tr></thead>
            <tbody><tr><td>Games Played</td><td>10</td></tr></tbody>
          </table>
        </div></body></html>
    "#;

    fn stat(name: &str, suffix: Option<&str>) -> Option<String> {
        let doc = parse_document(PAGE);
        let hero = doc.root_element().find_by_id("hero").unwrap();
        let table = find_table("Combat", hero).unwrap();
        find_stat_in_table(name, table, suffix)
    }

    #[test]
    fn finds_table_by_header_text() {
        let doc = parse_document(PAGE);
        let hero = doc.root_element().find_by_id("hero").unwrap();
        assert!(find_table("Combat", hero).is_some());
        // header text spread over indented lines still matches
        assert!(find_table("Game", hero).is_some());
        assert!(find_table("Best", hero).is_none());
        assert!(find_table("Comb", hero).is_none());
    }

    #[test]
    fn singular_and_plural_labels_match() {
        assert_eq!(stat("Melee Final Blow", None).as_deref(), Some("1"));
        assert_eq!(stat("Solo Kill", None).as_deref(), Some("5,124"));
    }

    #[test]
    fn suffixed_labels_match_in_both_numbers() {
        assert_eq!(stat("Objective Kill", Some("- Most in Game")).as_deref(), Some("31"));
        assert_eq!(stat("Objective Kill", Some("- Average")).as_deref(), Some("1"));
    }

    #[test]
    fn suffix_required_when_given() {
        // "Solo Kills" exists, but not "Solo Kills - Average"
        assert_eq!(stat("Solo Kill", Some("- Average")), None);
        // and a suffixed row is not a bare match
        assert_eq!(stat("Objective Kill", None), None);
    }

    #[test]
    fn missing_row_and_single_cell_row_are_none() {
        assert_eq!(stat("Environmental Kill", None), None);
        assert_eq!(stat("Lonely", None), None);
    }

    #[test]
    fn empty_suffix_behaves_as_none() {
        assert_eq!(stat("Solo Kill", Some("")).as_deref(), Some("5,124"));
    }

    #[test]
    fn padded_cells_are_trimmed() {
        let doc = parse_document(r#"<table><thead><tr><th>Combat</th></tr></thead><tbody>
            <tr><td> Kills </td><td> 5 </td></tr></tbody></table>"#);
        let table = find_table("Combat", doc.root_element()).unwrap();
        assert_eq!(find_stat_in_table("Kill", table, None).as_deref(), Some("5"));
    }

    #[test]
    fn label_rule_is_naive() {
        assert!(label_matches("Medals", "Medal", None));
        assert!(label_matches("Medalsss", "Medal", None));
        assert!(label_matches("Medals - Gold", "Medal", Some("- Gold")));
        assert!(label_matches("Medal   - Gold", "Medal", Some("- Gold")));
        assert!(!label_matches("Medals - Gold", "Medal", None));
        // irregular plurals are not handled
        assert!(!label_matches("Games Won", "Game Won", None));
        assert!(!label_matches("Glass", "Glass", None));
    }
}
