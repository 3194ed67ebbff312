//! Defensive parsing of free-form dimension strings.
//!
//! Unit configuration documents carry dimensions as free text entered by
//! application engineers: `"48 in"`, `"100\""`, `"60IN"`, or simply `""`.
//! Malformed or missing values are not errors anywhere in planview; every
//! call site substitutes the same documented per-field default so that a
//! layout can always be produced.
//!
//! The default values themselves are historical: 48 in matches the most
//! common module length in the field, 100 in is the legacy width/height
//! placeholder. They are kept as constants here so every parse site agrees.

/// Default module length in inches, used when the length string is
/// missing or unparseable. Coincides with the most common real length, so
/// tests must distinguish the two cases with a second value.
pub const DEFAULT_LENGTH_IN: f32 = 48.0;

/// Default module width in inches.
pub const DEFAULT_WIDTH_IN: f32 = 100.0;

/// Default module height in inches.
pub const DEFAULT_HEIGHT_IN: f32 = 100.0;

/// Default wall thickness in inches, shared by interior-wall specs and the
/// unit-level separator thickness.
pub const DEFAULT_WALL_THICKNESS_IN: f32 = 4.0;

/// Parses a free-form dimension string into inches.
///
/// Strips `"` and `in`/`IN` suffixes along with any spaces, then parses
/// the remainder as a number. Returns `None` when the string does not
/// parse or the value is not strictly positive.
///
/// # Examples
///
/// ```
/// # use planview_core::dimension::parse_inches;
/// assert_eq!(parse_inches("48 in"), Some(48.0));
/// assert_eq!(parse_inches("100\""), Some(100.0));
/// assert_eq!(parse_inches("60IN"), Some(60.0));
/// assert_eq!(parse_inches(""), None);
/// assert_eq!(parse_inches("-4"), None);
/// ```
pub fn parse_inches(raw: &str) -> Option<f32> {
    let cleaned: String = raw
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '"')
        .collect();
    let cleaned = cleaned
        .strip_suffix("in")
        .or_else(|| cleaned.strip_suffix("IN"))
        .or_else(|| cleaned.strip_suffix("In"))
        .or_else(|| cleaned.strip_suffix("iN"))
        .unwrap_or(&cleaned);

    match cleaned.parse::<f32>() {
        Ok(value) if value > 0.0 && value.is_finite() => Some(value),
        _ => None,
    }
}

/// Parses a dimension string, substituting `default` when the string is
/// missing or unparseable.
pub fn parse_inches_or(raw: &str, default: f32) -> f32 {
    match parse_inches(raw) {
        Some(value) => value,
        None => {
            if !raw.is_empty() {
                log::debug!(raw, default; "unparseable dimension, substituting default");
            }
            default
        }
    }
}
