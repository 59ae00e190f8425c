//! A1-style cell reference decoding.

/// Highest column a worksheet may use (`XFD`).
pub const MAX_COLUMN: usize = 16_384;

/// Decode the column of an A1-style reference, 1-based.
///
/// The leading letters are read as a base-26 number with `A` = 1 through
/// `Z` = 26, most significant letter first, so `AA` is 27. Letters are
/// case-insensitive and anything after them (the row number) is ignored.
///
/// Returns `None` when the reference has no leading letters or names a
/// column past [`MAX_COLUMN`].
///
/// # Example
///
/// ```
/// use signup_prefill::xlsx::column_index;
///
/// assert_eq!(column_index("B7"), Some(2));
/// assert_eq!(column_index("AA1"), Some(27));
/// assert_eq!(column_index("17"), None);
/// ```
pub fn column_index(reference: &str) -> Option<usize> {
    let letters = reference
        .bytes()
        .take_while(u8::is_ascii_alphabetic)
        .map(|b| usize::from(b.to_ascii_uppercase() - b'A') + 1);

    let mut index = 0usize;
    let mut seen = false;
    for digit in letters {
        index = index * 26 + digit;
        if index > MAX_COLUMN {
            return None;
        }
        seen = true;
    }
    seen.then_some(index)
}

/// Column letters for a 1-based column index (`1` → `A`, `27` → `AA`).
///
/// Index 0 has no letters and yields an empty string.
pub fn column_letters(index: usize) -> String {
    let mut letters = Vec::new();
    let mut n = index;
    while n > 0 {
        let rem = (n - 1) % 26;
        letters.push(b'A' + rem as u8);
        n = (n - 1) / 26;
    }
    letters.reverse();
    String::from_utf8(letters).unwrap_or_default()
}
