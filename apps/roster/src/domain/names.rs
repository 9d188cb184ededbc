// Name normalization shared by players, positions, teams and opponents

/// Trims and title-cases a name
///
/// A letter starts a word when the character before it is not alphabetic,
/// so apostrophes and hyphens start new words.
///
/// # Example
/// ```
/// use team_roster::domain::names::normalize_name;
///
/// assert_eq!(normalize_name("  lionel MESSI "), "Lionel Messi");
/// assert_eq!(normalize_name("o'neil-smith"), "O'Neil-Smith");
/// ```
pub fn normalize_name(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut prev_alpha = false;

    for ch in raw.trim().chars() {
        if prev_alpha {
            out.extend(ch.to_lowercase());
        } else {
            out.extend(ch.to_uppercase());
        }
        prev_alpha = ch.is_alphabetic();
    }

    out
}
