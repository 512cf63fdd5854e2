// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Human-readable formatting of album data for the UI.

use crate::model::{MAX_RATING, sort::parse_release_date};

/// Formats a catalog release date as e.g. `"January 14, 1977"`.
///
/// Dates that are not a full `YYYY-MM-DD` (the catalog also reports bare
/// years) are shown as they are.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(format_release_date("1977-01-14"), "January 14, 1977");
/// assert_eq!(format_release_date("1994"), "1994");
/// ```
pub(crate) fn format_release_date(text: &str) -> String {
    match parse_release_date(text) {
        Some(date) => date.format("%B %-d, %Y").to_string(),
        None => text.to_string(),
    }
}

/// Formats a rating as `"7/10"`, or an empty string when unrated.
pub(crate) fn format_rating(rating: i32) -> String {
    if rating > 0 {
        format!("{}/{}", rating, MAX_RATING)
    } else {
        String::new()
    }
}

/// Formats a rating as a row of filled and empty records, one per point.
pub(crate) fn format_rating_bar(rating: i32) -> String {
    let filled = rating.clamp(0, MAX_RATING) as usize;
    let empty = MAX_RATING as usize - filled;
    format!("{}{}", "●".repeat(filled), "○".repeat(empty))
}

/// Formats a byte count using binary units.
pub(crate) fn format_size(bytes: usize) -> String {
    const UNITS: [&str; 3] = ["KB", "MB", "GB"];

    if bytes < 1024 {
        return format!("{} B", bytes);
    }

    let mut size = bytes as f64 / 1024.0;
    let mut unit = 0;
    while size >= 1024.0 && unit < UNITS.len() - 1 {
        size /= 1024.0;
        unit += 1;
    }

    format!("{:.1} {}", size, UNITS[unit])
}
