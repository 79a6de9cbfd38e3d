/// Lower-cases text so that Turkish dotted and dotless capitals compare equal
/// to their ASCII forms: `İ`, `I` and `ı` all fold to `i`.
pub fn fold_case(text: &str) -> String {
    let mut folded = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            'İ' | 'I' | 'ı' => folded.push('i'),
            other => folded.extend(other.to_lowercase()),
        }
    }
    folded
}

/// Value after the first `:` of `line` when the folded line starts with one
/// of `labels` (given in folded form, including the colon).
pub fn strip_label<'a>(line: &'a str, labels: &[&str]) -> Option<&'a str> {
    let folded = fold_case(line);
    if !labels.iter().any(|label| folded.starts_with(label)) {
        return None;
    }
    line.split_once(':').map(|(_, value)| value.trim())
}

/// Escapes text for interpolation into an HTML email body.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}
