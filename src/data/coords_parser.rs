//! Coordinate-file parsing
//!
//! Parses the plain-text region description into [`Region`] records, one per
//! line:
//!
//! ```text
//! x1:<int> y1:<int> x2:<int> y2:<int> [category]
//! ```
//!
//! Integers are non-negative, the category token is optional (defaulting to
//! `"unknown"`), and arbitrary whitespace is tolerated between tokens and
//! after the label colons. Lines are independent: a malformed line is skipped
//! with a debug log and has no effect on its siblings. Output order matches
//! input line order.

use crate::constants::UNKNOWN_CATEGORY;
use crate::types::Region;
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

static COORD_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"x1:\s*(\d+)\s*y1:\s*(\d+)\s*x2:\s*(\d+)\s*y2:\s*(\d+)\s*(\w+)?")
        .expect("coordinate line pattern is valid")
});

/// Parse coordinate text into an ordered region list.
///
/// Never fails: lines not matching the expected pattern (including blank
/// lines) are silently skipped. No `x1 < x2` / `y1 < y2` validation is
/// performed; downstream consumers tolerate degenerate rectangles.
pub fn parse_coordinates(text: &str) -> Vec<Region> {
    let mut regions = Vec::new();

    for (line_no, line) in text.lines().enumerate() {
        let Some(captures) = COORD_LINE.captures(line) else {
            if !line.trim().is_empty() {
                debug!(line = line_no + 1, content = line, "skipping malformed coordinate line");
            }
            continue;
        };

        let mut coords = [0u32; 4];
        let mut overflowed = false;
        for (i, slot) in coords.iter_mut().enumerate() {
            // The pattern guarantees digits; parse can still overflow u32.
            match captures
                .get(i + 1)
                .map(|m| m.as_str())
                .unwrap_or_default()
                .parse::<u32>()
            {
                Ok(value) => *slot = value,
                Err(_) => {
                    debug!(line = line_no + 1, "skipping coordinate line with out-of-range integer");
                    overflowed = true;
                    break;
                }
            }
        }
        if overflowed {
            continue;
        }

        let category = captures
            .get(5)
            .map(|m| m.as_str())
            .unwrap_or(UNKNOWN_CATEGORY);

        let [x1, y1, x2, y2] = coords;
        regions.push(Region::new(x1, y1, x2, y2, category));
    }

    regions
}
