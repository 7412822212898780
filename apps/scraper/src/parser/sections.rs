//! Section segmentation: splits a flat line sequence into titled résumé sections.
//!
//! There is no markup to lean on, so headings are guessed from casing: an
//! all-caps line without digits opens a section. A section survives only if
//! some line in it carries a year, which keeps dated entries (experience,
//! education) and drops undated lists (skills, interests).

use std::collections::HashMap;

use indexmap::IndexMap;

use crate::parser::patterns::Patterns;

/// Section title → body lines joined by `\n`, in document order.
pub type SectionMap = IndexMap<String, String>;

const TAB_ESCAPE: &str = "\\t";

pub fn segment(patterns: &Patterns, lines: &[String]) -> SectionMap {
    let clean = clean_lines(patterns, lines);

    // Repeated heading text keeps its last position.
    let mut positions: HashMap<&str, usize> = HashMap::new();
    for (i, line) in clean.iter().enumerate() {
        if is_heading_candidate(line) {
            positions.insert(line.as_str(), i);
        }
    }

    let mut starts: Vec<usize> = positions.into_values().collect();
    starts.sort_unstable();

    let mut sections = SectionMap::new();
    for (n, &start) in starts.iter().enumerate() {
        let end = starts.get(n + 1).copied().unwrap_or(clean.len());
        let span = &clean[start..end];

        if !span.iter().any(|line| patterns.year.is_match(line)) {
            continue;
        }

        sections.insert(span[0].clone(), span[1..].join("\n"));
    }

    tracing::debug!(
        lines = clean.len(),
        headings = starts.len(),
        kept = sections.len(),
        "segmented document"
    );

    sections
}

/// Strips tab escapes and decoder residue, trims, and drops blank lines.
pub fn clean_lines(patterns: &Patterns, lines: &[String]) -> Vec<String> {
    lines
        .iter()
        .map(|line| {
            let line = line.replace(TAB_ESCAPE, "");
            patterns
                .encoding_escape
                .replace_all(&line, "")
                .trim()
                .to_string()
        })
        .filter(|line| !line.is_empty() && line != TAB_ESCAPE)
        .collect()
}

/// Non-empty, free of ASCII digits and already uppercase. Pure punctuation
/// qualifies.
pub fn is_heading_candidate(line: &str) -> bool {
    !line.is_empty() && !line.chars().any(|c| c.is_ascii_digit()) && line == line.to_uppercase()
}
