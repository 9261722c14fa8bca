/// Country-name to flag-emoji lookup.
///
/// The table is matched exactly as reported by the crew feed, which mixes
/// capitalized and lowercase country names; both spellings are listed as
/// separate entries rather than normalized.
pub fn country_flag(country: &str) -> Option<&'static str> {
    match country {
        "USA" => Some("\u{1F1FA}\u{1F1F8}"),
        "usa" => Some("\u{1F1FA}\u{1F1F8}"),
        "Russia" => Some("\u{1F1F7}\u{1F1FA}"),
        "russia" => Some("\u{1F1F7}\u{1F1FA}"),
        "China" => Some("\u{1F1E8}\u{1F1F3}"),
        "china" => Some("\u{1F1E8}\u{1F1F3}"),
        "Japan" => Some("\u{1F1EF}\u{1F1F5}"),
        "japan" => Some("\u{1F1EF}\u{1F1F5}"),
        "Canada" => Some("\u{1F1E8}\u{1F1E6}"),
        "canada" => Some("\u{1F1E8}\u{1F1E6}"),
        "France" => Some("\u{1F1EB}\u{1F1F7}"),
        "france" => Some("\u{1F1EB}\u{1F1F7}"),
        "Germany" => Some("\u{1F1E9}\u{1F1EA}"),
        "germany" => Some("\u{1F1E9}\u{1F1EA}"),
        "Italy" => Some("\u{1F1EE}\u{1F1F9}"),
        "italy" => Some("\u{1F1EE}\u{1F1F9}"),
        "Denmark" => Some("\u{1F1E9}\u{1F1F0}"),
        "denmark" => Some("\u{1F1E9}\u{1F1F0}"),
        "Sweden" => Some("\u{1F1F8}\u{1F1EA}"),
        "sweden" => Some("\u{1F1F8}\u{1F1EA}"),
        "Spain" => Some("\u{1F1EA}\u{1F1F8}"),
        "spain" => Some("\u{1F1EA}\u{1F1F8}"),
        "United Kingdom" => Some("\u{1F1EC}\u{1F1E7}"),
        "united kingdom" => Some("\u{1F1EC}\u{1F1E7}"),
        "UAE" => Some("\u{1F1E6}\u{1F1EA}"),
        "uae" => Some("\u{1F1E6}\u{1F1EA}"),
        "Saudi Arabia" => Some("\u{1F1F8}\u{1F1E6}"),
        "saudi arabia" => Some("\u{1F1F8}\u{1F1E6}"),
        "India" => Some("\u{1F1EE}\u{1F1F3}"),
        "india" => Some("\u{1F1EE}\u{1F1F3}"),
        "Belarus" => Some("\u{1F1E7}\u{1F1FE}"),
        "belarus" => Some("\u{1F1E7}\u{1F1FE}"),
        "Turkey" => Some("\u{1F1F9}\u{1F1F7}"),
        "turkey" => Some("\u{1F1F9}\u{1F1F7}"),
        "Poland" => Some("\u{1F1F5}\u{1F1F1}"),
        "poland" => Some("\u{1F1F5}\u{1F1F1}"),
        "Hungary" => Some("\u{1F1ED}\u{1F1FA}"),
        "hungary" => Some("\u{1F1ED}\u{1F1FA}"),
        "Israel" => Some("\u{1F1EE}\u{1F1F1}"),
        "israel" => Some("\u{1F1EE}\u{1F1F1}"),
        "Kazakhstan" => Some("\u{1F1F0}\u{1F1FF}"),
        "kazakhstan" => Some("\u{1F1F0}\u{1F1FF}"),
        "Netherlands" => Some("\u{1F1F3}\u{1F1F1}"),
        "netherlands" => Some("\u{1F1F3}\u{1F1F1}"),
        "Belgium" => Some("\u{1F1E7}\u{1F1EA}"),
        "belgium" => Some("\u{1F1E7}\u{1F1EA}"),
        "Switzerland" => Some("\u{1F1E8}\u{1F1ED}"),
        "switzerland" => Some("\u{1F1E8}\u{1F1ED}"),
        "Norway" => Some("\u{1F1F3}\u{1F1F4}"),
        "norway" => Some("\u{1F1F3}\u{1F1F4}"),
        "Brazil" => Some("\u{1F1E7}\u{1F1F7}"),
        "brazil" => Some("\u{1F1E7}\u{1F1F7}"),
        "South Korea" => Some("\u{1F1F0}\u{1F1F7}"),
        "south korea" => Some("\u{1F1F0}\u{1F1F7}"),
        _ => None,
    }
}

/// Displayed country value: the flag when the table knows the spelling,
/// otherwise the uppercased name.
pub fn country_display(country: &str) -> String {
    match country_flag(country) {
        Some(flag) => flag.to_string(),
        None => country.to_uppercase(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_case_variants_resolve_to_the_same_flag() {
        assert_eq!(country_flag("USA"), country_flag("usa"));
        assert!(country_flag("USA").is_some());
        assert_eq!(country_flag("Russia"), country_flag("russia"));
    }

    #[test]
    fn lookup_is_exact_match_only() {
        assert_eq!(country_flag("Usa"), None);
        assert_eq!(country_flag("RUSSIA"), None);
    }

    #[test]
    fn unknown_country_falls_back_to_uppercase() {
        assert_eq!(country_display("Atlantis"), "ATLANTIS");
    }

    #[test]
    fn known_country_displays_its_flag() {
        assert_eq!(country_display("Japan"), "\u{1F1EF}\u{1F1F5}");
        assert_eq!(country_display("japan"), "\u{1F1EF}\u{1F1F5}");
    }
}
