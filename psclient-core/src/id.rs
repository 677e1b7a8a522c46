//! Identifier normalization shared by names, users and rooms.

/// Lower-case and strip everything except ASCII letters and digits.
#[must_use]
pub fn to_id(text: &str) -> String {
    text.chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// Like [`to_id`] but keeps `-`, which room ids use as a separator.
#[must_use]
pub fn to_room_id(text: &str) -> String {
    text.chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '-')
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// Whether `name` starts with a letter or digit rather than a rank symbol.
#[must_use]
pub fn starts_alphanumeric(name: &str) -> bool {
    name.chars().next().is_some_and(|c| c.is_ascii_alphanumeric())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_drop_punctuation_and_case() {
        assert_eq!(to_id("Mr. Mime"), "mrmime");
        assert_eq!(to_id(" @Zarel"), "zarel");
        assert_eq!(to_id(""), "");
    }

    #[test]
    fn room_ids_keep_dashes() {
        assert_eq!(to_room_id("Battle-Gen9OU-1234"), "battle-gen9ou-1234");
        assert_eq!(to_room_id("Tech & Code"), "techcode");
    }

    #[test]
    fn rank_prefix_detection() {
        assert!(starts_alphanumeric("zarel"));
        assert!(!starts_alphanumeric("@zarel"));
        assert!(!starts_alphanumeric(""));
    }
}
