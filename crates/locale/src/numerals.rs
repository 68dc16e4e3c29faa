//! Devanagari digit rendering.

/// Devanagari glyphs for the digits 0 through 9.
pub const DEVANAGARI_DIGITS: [char; 10] = ['०', '१', '२', '३', '४', '५', '६', '७', '८', '९'];

/// Digit set used when rendering numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Numerals {
    /// ASCII digits.
    #[default]
    Latin,
    /// Devanagari digits.
    Devanagari,
}

/// Renders `n` in decimal with Devanagari digits.
///
/// ```ignore
/// assert_eq!(to_localized_digits(2082), "२०८२");
/// ```
pub fn to_localized_digits(n: u64) -> String {
    localize_digits(&n.to_string())
}

/// Replaces every ASCII digit in `s` with its Devanagari glyph, leaving all
/// other characters as they are.
pub fn localize_digits(s: &str) -> String {
    s.chars()
        .map(|c| c.to_digit(10).map_or(c, |d| DEVANAGARI_DIGITS[d as usize]))
        .collect()
}
