use crate::enums::item_status::ItemStatus;
use crate::structs::report::parsed_item::ParsedItem;

const AFFIRMATIVE_MARKS: &[char] = &['✓', '✔', '✅', '☑'];
const CAUTION_MARKS: &[char] = &['⚠', '⚡', '❗'];
const NEGATIVE_MARKS: &[char] = &['✗', '✘', '❌', '✖', '×'];
const VARIATION_SELECTOR: char = '\u{FE0F}';
pub const BULLET_PREFIXES: &[char] = &['-', '•', '*'];
const DISCARD_PREFIXES: &[&str] = &["#", "---", "===", "___", "***"];
const BOLD_MARKER: &str = "**";
const MIN_LINE_CHARS: usize = 3;
const MIN_BARE_LABEL_CHARS: usize = 3;

/// Marker families, checked in order. The first family present in a line
/// decides the item status.
const MARKER_FAMILIES: &[(ItemStatus, &[char])] = &[
    (ItemStatus::Good, AFFIRMATIVE_MARKS),
    (ItemStatus::Warning, CAUTION_MARKS),
    (ItemStatus::Critical, NEGATIVE_MARKS),
];

/// Turns a line inside a section into an item, or `None` when the line
/// carries nothing usable.
pub fn classify_item(line: &str) -> Option<ParsedItem> {
    let line = line.trim();
    if line.chars().count() < MIN_LINE_CHARS
        || DISCARD_PREFIXES.iter().any(|prefix| line.starts_with(prefix))
    {
        return None;
    }

    let (status, cleaned) = strip_status_marker(line);
    let cleaned = cleaned
        .trim()
        .trim_start_matches(BULLET_PREFIXES)
        .replace(BOLD_MARKER, "");
    let cleaned = cleaned.trim();

    if let Some((label, value)) = cleaned.split_once(':') {
        let label = label.trim();
        if label.is_empty() {
            return None;
        }
        return Some(ParsedItem {
            label: label.to_string(),
            value: value.trim().to_string(),
            status,
        });
    }

    if cleaned.chars().count() > MIN_BARE_LABEL_CHARS {
        return Some(ParsedItem {
            label: cleaned.to_string(),
            value: String::new(),
            status,
        });
    }

    None
}

fn strip_status_marker(line: &str) -> (ItemStatus, String) {
    match MARKER_FAMILIES.iter().find(|(_, marks)| line.contains(*marks)) {
        Some((status, marks)) => {
            let cleaned = line.replace(|c: char| marks.contains(&c) || c == VARIATION_SELECTOR, "");
            (*status, cleaned)
        }
        None => (ItemStatus::Good, line.to_string()),
    }
}
