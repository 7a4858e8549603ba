//! Client locale normalization.

#[cfg(test)]
#[path = "locale_test.rs"]
mod locale_test;

pub const DEFAULT_LOCALE: &str = "en";

/// Reduce a BCP 47 tag such as `"en-US"` to its lowercase primary subtag.
///
/// Returns `None` for tags whose primary subtag is not 2-3 ASCII letters.
#[must_use]
pub fn normalize_locale(raw: &str) -> Option<String> {
    let primary = raw.trim().split(['-', '_']).next()?;
    let valid = (2..=3).contains(&primary.len()) && primary.chars().all(|c| c.is_ascii_alphabetic());
    valid.then(|| primary.to_ascii_lowercase())
}
