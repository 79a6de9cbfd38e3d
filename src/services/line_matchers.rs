use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use crate::enums::line_kind::LineKind;
use crate::helpers::text_helper::{fold_case, strip_label};

const REPORT_TITLE_MARKERS: &[&str] = &["dijital analiz raporu", "digital analysis report"];
pub const COMPANY_LABELS: &[&str] = &["şirket:", "firma:", "company:"];
const DATE_LABELS: &[&str] = &["tarih:", "rapor tarihi:", "date:", "report date:"];
const OVERALL_SCORE_MARKERS: &[&str] = &[
    "genel dijital skor",
    "genel skor",
    "toplam skor",
    "dijital skor",
    "overall score",
];
const RECOMMENDATIONS_MARKERS: &[&str] = &["öneriler", "tavsiyeler", "recommendations"];

static OVERALL_SCORE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d+)\s*/\s*100").expect("invalid overall score regex"));

static NUMBERED_HEADER_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\d+\.\s*(.+?)\s*\((\d+)\s*/\s*(\d+)\)\s*:?$").expect("invalid numbered header regex")
});

static CAPS_HEADER_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\p{Lu}[\p{Lu}\d\s&/\-]*?)\s*\((\d+)\s*/\s*(\d+)\)\s*:?$").expect("invalid caps header regex")
});

static HASH_HEADER_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^#{1,6}\s*(.+?)\s*[-–—]\s*(\d+)\s*/\s*(\d+)\s*$").expect("invalid hash header regex")
});

static RECOMMENDATIONS_PREFIX_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[#\s\d.)]*").expect("invalid recommendations prefix regex"));

pub type Matcher = fn(&str) -> Option<LineKind>;

/// Structural matchers in priority order. The first one to return `Some`
/// decides what the line is.
pub const LINE_MATCHERS: &[(&str, Matcher)] = &[
    ("report_title", match_report_title),
    ("report_date", match_report_date),
    ("overall_score", match_overall_score),
    ("section_header", match_section_header),
    ("recommendations_header", match_recommendations_header),
];

/// Header shapes, tried in order.
static SECTION_HEADER_SHAPES: &[(&str, &Lazy<Regex>)] = &[
    ("numbered", &NUMBERED_HEADER_RE),
    ("caps", &CAPS_HEADER_RE),
    ("hash", &HASH_HEADER_RE),
];

pub fn classify_line(line: &str) -> Option<LineKind> {
    LINE_MATCHERS.iter().find_map(|(name, matcher)| {
        let kind = matcher(line)?;
        log::trace!("line matched {}: {}", name, line);
        Some(kind)
    })
}

pub fn match_report_title(line: &str) -> Option<LineKind> {
    let folded = fold_case(line);
    REPORT_TITLE_MARKERS
        .iter()
        .any(|marker| folded.contains(marker))
        .then_some(LineKind::ReportTitle)
}

pub fn match_company(line: &str) -> Option<String> {
    strip_label(line, COMPANY_LABELS).map(str::to_string)
}

pub fn match_report_date(line: &str) -> Option<LineKind> {
    strip_label(line, DATE_LABELS).map(|date| LineKind::ReportDate(date.to_string()))
}

pub fn match_overall_score(line: &str) -> Option<LineKind> {
    let folded = fold_case(line);
    if !OVERALL_SCORE_MARKERS.iter().any(|marker| folded.contains(marker)) {
        return None;
    }

    // Without a fraction the line is left to the header and item matchers.
    OVERALL_SCORE_RE
        .captures(line)
        .and_then(|caps| caps[1].parse::<u32>().ok())
        .map(LineKind::OverallScore)
}

pub fn match_section_header(line: &str) -> Option<LineKind> {
    SECTION_HEADER_SHAPES.iter().find_map(|(_, shape)| {
        shape.captures(line).and_then(|caps| section_from_captures(&caps))
    })
}

fn section_from_captures(caps: &Captures<'_>) -> Option<LineKind> {
    let title = caps[1].trim().to_string();
    if title.is_empty() {
        return None;
    }

    Some(LineKind::SectionHeader {
        title,
        score: caps[2].parse().ok()?,
        max_score: caps[3].parse().ok()?,
    })
}

pub fn match_recommendations_header(line: &str) -> Option<LineKind> {
    let heading = RECOMMENDATIONS_PREFIX_RE.replace(line, "");
    let heading = heading.trim().trim_matches('*').trim();
    let heading = heading.strip_suffix(':').unwrap_or(heading).trim();

    if heading.contains(':') {
        return None;
    }

    let folded = fold_case(heading);
    RECOMMENDATIONS_MARKERS
        .iter()
        .any(|marker| folded.starts_with(marker))
        .then_some(LineKind::RecommendationsHeader)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header(title: &str, score: u32, max_score: u32) -> Option<LineKind> {
        Some(LineKind::SectionHeader {
            title: title.to_string(),
            score,
            max_score,
        })
    }

    #[test]
    fn recognises_all_header_shapes() {
        assert_eq!(match_section_header("1. WEB SİTESİ ANALİZİ (12/20)"), header("WEB SİTESİ ANALİZİ", 12, 20));
        assert_eq!(match_section_header("2. SEO Performansı (5/20)"), header("SEO Performansı", 5, 20));
        assert_eq!(match_section_header("SOSYAL MEDYA (8 / 20)"), header("SOSYAL MEDYA", 8, 20));
        assert_eq!(match_section_header("## İçerik Kalitesi - 9/15"), header("İçerik Kalitesi", 9, 15));
        assert_eq!(match_section_header("### Marka — 4/15"), header("Marka", 4, 15));
    }

    #[test]
    fn rejects_non_headers() {
        assert_eq!(match_section_header("✓ SSL Sertifikası: Aktif"), None);
        assert_eq!(match_section_header("Mobil uyum (kısmen)"), None);
        assert_eq!(match_section_header("1. Blog yazıları yayınlayın"), None);
    }

    #[test]
    fn extracts_overall_score() {
        assert_eq!(match_overall_score("GENEL DİJİTAL SKOR: 67/100"), Some(LineKind::OverallScore(67)));
        assert_eq!(match_overall_score("Overall Score: 81 / 100"), Some(LineKind::OverallScore(81)));
        assert_eq!(match_overall_score("Genel skor: hesaplanamadı"), None);
        assert_eq!(match_overall_score("SEO (5/20)"), None);
    }

    #[test]
    fn recognises_recommendations_heading() {
        for line in ["ÖNERİLER", "ÖNERİLER:", "## Öneriler", "5. TAVSİYELER", "**Recommendations**"] {
            assert_eq!(match_recommendations_header(line), Some(LineKind::RecommendationsHeader), "{}", line);
        }
        assert_eq!(match_recommendations_header("Öneriler: blog açın"), None);
        assert_eq!(match_recommendations_header("- Öneri yok"), None);
    }

    #[test]
    fn dispatch_order_prefers_overall_score_over_headers() {
        assert_eq!(
            classify_line("GENEL SKOR (45/100)"),
            Some(LineKind::OverallScore(45))
        );
        assert_eq!(
            classify_line("1. DİJİTAL SKOR ÖZETİ (10/20)"),
            Some(LineKind::SectionHeader { title: "DİJİTAL SKOR ÖZETİ".into(), score: 10, max_score: 20 })
        );
        assert_eq!(classify_line("DİJİTAL ANALİZ RAPORU"), Some(LineKind::ReportTitle));
        assert_eq!(classify_line("Tarih: 01.02.2024"), Some(LineKind::ReportDate("01.02.2024".into())));
        assert_eq!(classify_line("Mobil Uyum: Zayıf"), None);
    }

    #[test]
    fn matcher_order_is_explicit() {
        let names: Vec<&str> = LINE_MATCHERS.iter().map(|(name, _)| *name).collect();
        assert_eq!(
            names,
            vec!["report_title", "report_date", "overall_score", "section_header", "recommendations_header"]
        );
    }
}
