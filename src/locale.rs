use icu_locale::Locale;

/// Canonicalize a language tag to its BCP 47 form
///
/// Parseable tags are normalized so that differently-cased spellings address
/// the same table entry: `"uk-ua"`, `"UK-UA"` and `"uk-UA"` all canonicalize
/// to `"uk-UA"`. Tags that do not parse as a locale are lowercased and passed
/// through unchanged; a bad tag is never an error here, it simply fails to
/// match any table entry later.
///
/// # Example
///
/// ```ignore
/// assert_eq!(canonicalize_tag("uk-ua"), "uk-UA");
/// assert_eq!(canonicalize_tag("EN"), "en");
/// ```
pub fn canonicalize_tag(tag: &str) -> String {
    match tag.parse::<Locale>() {
        Ok(locale) => locale.to_string(),
        Err(_) => tag.to_ascii_lowercase(),
    }
}

/// Check that a language tag is in acceptable shape for lookup
///
/// Accepts non-empty tags made of alphanumeric characters, hyphens, and
/// underscores. Used by the command line front end to reject obviously
/// malformed tags before any table is consulted.
pub fn is_valid_tag(tag: &str) -> bool {
    !tag.is_empty()
        && tag
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}
