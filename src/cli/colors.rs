//! To maintain a theme of colors, I will add colors here as constants so
//! the UI does not look bad at any point.
//!
//! - WORDLIST_TEAL: Main Color

use colored::Color;

pub(crate) const WORDLIST_TEAL: Color = Color::TrueColor {
    r: 64,
    g: 196,
    b: 180,
};
