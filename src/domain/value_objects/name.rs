//! Name handling shared by matching and ledger rewriting

/// Normalize a slot or asset name for comparison.
///
/// Lowercases, turns `_` and `-` into spaces, collapses whitespace runs to a
/// single space and trims both ends. The result is never written anywhere.
pub fn normalize_name(name: &str) -> String {
    name.to_lowercase()
        .split(|c: char| c.is_whitespace() || c == '_' || c == '-')
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Build a ledger display title from an asset filename (without extension).
///
/// Underscores become spaces; every alphabetic run starts uppercase and
/// continues lowercase (`mystery_orb` → `Mystery Orb`, `ice-bolt2x` → `Ice-Bolt2X`).
pub fn title_from_filename(filename: &str) -> String {
    title_case(&filename.replace('_', " "))
}

/// Title-case text: a letter is uppercased when the previous char is not a letter.
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut prev_is_letter = false;
    for c in text.chars() {
        if c.is_alphabetic() {
            if prev_is_letter {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_is_letter = true;
        } else {
            out.push(c);
            prev_is_letter = false;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_lowercases_and_splits_separators() {
        assert_eq!(normalize_name("Fire_Sword"), "fire sword");
        assert_eq!(normalize_name("ice-shard"), "ice shard");
        assert_eq!(normalize_name("  Wind Blade "), "wind blade");
    }

    #[test]
    fn normalize_collapses_runs() {
        assert_eq!(normalize_name("dragon__-__egg"), "dragon egg");
        assert_eq!(normalize_name("_orb_"), "orb");
    }

    #[test]
    fn normalize_empty() {
        assert_eq!(normalize_name(""), "");
        assert_eq!(normalize_name("__"), "");
    }

    #[test]
    fn title_from_filename_basic() {
        assert_eq!(title_from_filename("mystery_orb"), "Mystery Orb");
        assert_eq!(title_from_filename("MYSTERY_ORB"), "Mystery Orb");
    }

    #[test]
    fn title_keeps_hyphens_and_capitalizes_after_digits() {
        assert_eq!(title_from_filename("ice-bolt2x"), "Ice-Bolt2X");
        assert_eq!(title_case("o'neil"), "O'Neil");
    }
}
