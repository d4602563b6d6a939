// src/core/sanitize.rs
use unicode_normalization::{char::is_combining_mark, UnicodeNormalization};

/// Stable key fragment for a display name: decompose, drop combining marks,
/// lowercase, keep ASCII alphanumerics only. `"Lúcio"` → `"lucio"`.
pub fn normalize_name(name: &str) -> String {
    name.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .filter(char::is_ascii_alphanumeric)
        .collect()
}

pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

/// "Time Played" cell → minutes.
/// `--` (never played) is zero; seconds come back fractional.
pub fn minutes_played(text: &str) -> Option<f64> {
    let text = normalize_ws(text);
    if text == "--" {
        return Some(0.0);
    }
    let amount = text.split(' ').next()?;
    let unit = text.rsplit(' ').next()?;

    if text.contains("second") {
        amount.parse::<f64>().ok().map(|s| s / 60.0)
    } else if unit.contains("minute") {
        amount.parse::<u32>().ok().map(f64::from)
    } else if unit.contains("hour") {
        amount.parse::<u32>().ok().map(|h| f64::from(h) * 60.0)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_strips_marks_and_punctuation() {
        assert_eq!(normalize_name("Lúcio"), "lucio");
        assert_eq!(normalize_name("Torbjörn"), "torbjorn");
        assert_eq!(normalize_name("Soldier: 76"), "soldier76");
        assert_eq!(normalize_name("D.Va"), "dva");
    }

    #[test]
    fn normalize_drops_letters_without_ascii_base() {
        // ø has no decomposition, so it disappears rather than becoming 'o'
        assert_eq!(normalize_name("Torbjørn"), "torbjrn");
        assert_eq!(normalize_name("짬내"), "");
    }

    #[test]
    fn normalize_is_idempotent() {
        for name in ["Lúcio", "Soldier: 76", "Wrecking Ball", "Torbjørn", "  "] {
            let once = normalize_name(name);
            assert_eq!(normalize_name(&once), once);
            assert!(once.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()));
        }
    }

    #[test]
    fn minutes_played_units() {
        assert_eq!(minutes_played("--"), Some(0.0));
        assert_eq!(minutes_played("30 seconds"), Some(0.5));
        assert_eq!(minutes_played("1 minute"), Some(1.0));
        assert_eq!(minutes_played("42 minutes"), Some(42.0));
        assert_eq!(minutes_played("3 hours"), Some(180.0));
        assert_eq!(minutes_played("5 days"), None);
        assert_eq!(minutes_played("many hours"), None);
    }
}
