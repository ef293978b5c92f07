//! Album name handling: URL-safe basenames and display titles.
//!
//! Album titles come straight from the tree builder (usually a folder name)
//! and are used two ways:
//!
//! - **Basename**: the slug used for output filenames and URLs. Everything
//!   except ASCII letters, digits, `-` and `_` is dropped, so
//!   `"Summer Trip (2023)"` becomes `"SummerTrip2023"`.
//! - **Display title**: optionally "titleized" for presentation, so
//!   `"summerTrip_photos"` becomes `"Summer Trip Photos"`. Titleizing never
//!   changes the basename, which is fixed when the album is constructed.
//!
//! Titles made only of digits and dashes (`2023`, `2023-07`) count as
//! numeric and can be sorted ahead of the others.

/// Reduce a title to a filesystem and URL safe basename.
///
/// - `"Vacation2023"` → `"Vacation2023"`
/// - `"My Trip!"` → `"MyTrip"`
/// - `"2023-07_beach"` → `"2023-07_beach"`
/// - `"été"` → `"t"`
pub fn sanitise(title: &str) -> String {
    title
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '-' || *c == '_')
        .collect()
}

/// Turn a raw album name into a display title.
///
/// camelCase boundaries and underscores become spaces, the whole string is
/// lowercased, then the first letter or digit of every whitespace-separated
/// word is capitalized. Leading punctuation in a word is skipped over:
///
/// - `"summerTrip_photos"` → `"Summer Trip Photos"`
/// - `"the (old) house"` → `"The (Old) House"`
/// - `"BEACH day"` → `"Beach Day"`
pub fn titleize(title: &str) -> String {
    let mut spaced = String::with_capacity(title.len() + 4);
    let mut prev_lower = false;
    for c in title.chars() {
        if c == '_' {
            spaced.push(' ');
            prev_lower = false;
            continue;
        }
        if prev_lower && c.is_uppercase() {
            spaced.push(' ');
        }
        prev_lower = c.is_lowercase();
        spaced.push(c);
    }

    let mut result = String::with_capacity(spaced.len());
    let mut at_word_start = true;
    for c in spaced.to_lowercase().chars() {
        if c.is_whitespace() {
            at_word_start = true;
            result.push(c);
        } else if at_word_start && c.is_alphanumeric() {
            result.extend(c.to_uppercase());
            at_word_start = false;
        } else {
            result.push(c);
        }
    }
    result
}

/// Whether a title is purely numeric (digits and dashes, e.g. `2023-07`).
pub fn is_numeric_title(title: &str) -> bool {
    !title.is_empty() && title.chars().all(|c| c.is_ascii_digit() || c == '-')
}
