//! Display names for result rows that have no dex entry of their own.

/// Upper-case the first character: `"fire"` becomes `"Fire"`.
#[must_use]
pub fn capitalize(id: &str) -> String {
    let mut chars = id.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}

/// Egg group display name and the match end adjusted to it.
///
/// The hard-coded names insert a separator after the fifth character
/// (`water1` is shown as `Water 1`), so a match reaching past it shifts right.
#[must_use]
pub fn egg_group_name(id: &str, match_end: usize) -> (String, usize) {
    let fixed = match id {
        "humanlike" => Some("Human-Like"),
        "water1" => Some("Water 1"),
        "water2" => Some("Water 2"),
        "water3" => Some("Water 3"),
        _ => None,
    };
    match fixed {
        Some(name) if match_end > 5 => (name.to_string(), match_end + 1),
        Some(name) => (name.to_string(), match_end),
        None => (capitalize(id), match_end),
    }
}

#[must_use]
pub fn tier_name(id: &str) -> String {
    match id {
        "uber" => "Uber".to_string(),
        "caplc" => "CAP LC".to_string(),
        "capnfe" => "CAP NFE".to_string(),
        _ => id.to_uppercase(),
    }
}

/// Article ids that name a search mode rather than an article.
#[must_use]
pub fn is_search_type_article(id: &str) -> bool {
    matches!(id, "pokemon" | "moves")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capitalize_handles_empty_and_ascii() {
        assert_eq!(capitalize(""), "");
        assert_eq!(capitalize("fire"), "Fire");
        assert_eq!(capitalize("physical"), "Physical");
    }

    #[test]
    fn egg_groups_shift_match_past_separator() {
        assert_eq!(egg_group_name("water1", 6), ("Water 1".to_string(), 7));
        assert_eq!(egg_group_name("water1", 5), ("Water 1".to_string(), 5));
        assert_eq!(egg_group_name("humanlike", 9), ("Human-Like".to_string(), 10));
        assert_eq!(egg_group_name("monster", 7), ("Monster".to_string(), 7));
    }

    #[test]
    fn tiers_use_table_then_upper_case() {
        assert_eq!(tier_name("uber"), "Uber");
        assert_eq!(tier_name("capnfe"), "CAP NFE");
        assert_eq!(tier_name("ou"), "OU");
    }
}
