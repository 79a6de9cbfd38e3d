use once_cell::sync::Lazy;
use regex::Regex;
use crate::services::item_classifier::BULLET_PREFIXES;

const MIN_BULLET_TEXT_CHARS: usize = 10;

static NUMBERED_RECOMMENDATION_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d+\.\s*(.+)$").expect("invalid numbered recommendation regex"));

/// Title of the recommendation on `line`, if it is one. Numbered lines always
/// qualify; bulleted lines need more than ten characters of text.
pub fn classify_recommendation(line: &str) -> Option<String> {
    let line = line.trim();

    if let Some(caps) = NUMBERED_RECOMMENDATION_RE.captures(line) {
        return clean_title(&caps[1]);
    }

    if line.starts_with(BULLET_PREFIXES) {
        let text = line.trim_start_matches(BULLET_PREFIXES).trim();
        if text.chars().count() > MIN_BULLET_TEXT_CHARS {
            return clean_title(text);
        }
    }

    None
}

fn clean_title(text: &str) -> Option<String> {
    let title = text.replace("**", "");
    let title = title.trim();
    (!title.is_empty()).then(|| title.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_numbered_lines() {
        assert_eq!(classify_recommendation("1. Mobil uyumu iyileştirin"), Some("Mobil uyumu iyileştirin".into()));
        assert_eq!(classify_recommendation("12.Blog açın"), Some("Blog açın".into()));
        assert_eq!(classify_recommendation("3. **Google Analytics kurun**"), Some("Google Analytics kurun".into()));
    }

    #[test]
    fn accepts_long_bullets_only() {
        assert_eq!(classify_recommendation("- Instagram paylaşım sıklığını artırın"), Some("Instagram paylaşım sıklığını artırın".into()));
        assert_eq!(classify_recommendation("• Logo yenileyin"), Some("Logo yenileyin".into()));
        assert_eq!(classify_recommendation("* Site hızını artırın"), Some("Site hızını artırın".into()));
        assert_eq!(classify_recommendation("* Kısa öneri"), None);
        assert_eq!(classify_recommendation("- Çok kısa"), None);
    }

    #[test]
    fn rejects_plain_text() {
        assert_eq!(classify_recommendation("Bu bölümde öneriler yer alır"), None);
        assert_eq!(classify_recommendation("1."), None);
    }
}
