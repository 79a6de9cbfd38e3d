use crate::enums::line_kind::LineKind;
use crate::services::item_classifier::classify_item;
use crate::services::line_matchers::{classify_line, match_company};
use crate::services::recommendation_parser::classify_recommendation;
use crate::structs::report::parsed_report::ParsedReport;
use crate::structs::report::parsed_section::ParsedSection;
use crate::structs::report::recommendation::Recommendation;

const MAX_OVERALL_SCORE: u32 = 100;

/// Where the scanner is inside the report.
#[derive(Debug)]
enum ScanState {
    Preamble,
    InSection(ParsedSection),
    InRecommendations,
}

/// Single forward pass over a free-text analysis report. Never fails: lines
/// that match nothing are dropped.
pub struct ReportParser {
    lines: Vec<String>,
    current: usize,
}

impl ReportParser {
    pub fn new(input: &str) -> Self {
        Self {
            lines: input
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .map(str::to_string)
                .collect(),
            current: 0,
        }
    }

    pub fn parse(&mut self) -> ParsedReport {
        let mut report = ParsedReport::default();
        let mut state = ScanState::Preamble;

        while !self.is_eof() {
            let line = self.current_line().to_string();
            self.advance();

            state = match classify_line(&line) {
                Some(kind) => self.apply_structural_line(kind, state, &mut report),
                None => Self::apply_content_line(&line, state, &mut report),
            };
        }

        Self::flush_section(state, &mut report);

        log::debug!(
            "📄 Parsed report '{}': {} sections, {} items, {} recommendations",
            report.company_name,
            report.sections.len(),
            report.item_count(),
            report.recommendations.len()
        );

        report
    }

    fn apply_structural_line(&mut self, kind: LineKind, state: ScanState, report: &mut ParsedReport) -> ScanState {
        match kind {
            LineKind::ReportTitle => {
                if let Some(company) = match_company(self.current_line()) {
                    report.company_name = company;
                    self.advance();
                }
                state
            }
            LineKind::ReportDate(date) => {
                report.report_date = date;
                state
            }
            LineKind::OverallScore(score) => {
                report.overall_score = score.min(MAX_OVERALL_SCORE);
                state
            }
            LineKind::SectionHeader { title, score, max_score } => {
                Self::flush_section(state, report);
                ScanState::InSection(ParsedSection::new(title, score, max_score))
            }
            LineKind::RecommendationsHeader => {
                Self::flush_section(state, report);
                ScanState::InRecommendations
            }
        }
    }

    fn apply_content_line(line: &str, state: ScanState, report: &mut ParsedReport) -> ScanState {
        match state {
            ScanState::InSection(mut section) => {
                match classify_item(line) {
                    Some(item) => section.items.push(item),
                    None => log::trace!("Skipping line in section '{}': {}", section.title, line),
                }
                ScanState::InSection(section)
            }
            ScanState::InRecommendations => {
                match classify_recommendation(line) {
                    Some(title) => {
                        let position = report.recommendations.len();
                        report.recommendations.push(Recommendation::at_position(position, title));
                    }
                    None => log::trace!("Skipping line in recommendations: {}", line),
                }
                ScanState::InRecommendations
            }
            ScanState::Preamble => {
                log::trace!("Skipping preamble line: {}", line);
                ScanState::Preamble
            }
        }
    }

    fn flush_section(state: ScanState, report: &mut ParsedReport) {
        if let ScanState::InSection(section) = state {
            report.sections.push(section);
        }
    }

    fn current_line(&self) -> &str {
        self.lines.get(self.current).map(|s| s.as_str()).unwrap_or("")
    }

    fn advance(&mut self) {
        self.current += 1;
    }

    fn is_eof(&self) -> bool {
        self.current >= self.lines.len()
    }
}

pub fn parse_report_text(text: &str) -> ParsedReport {
    ReportParser::new(text).parse()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::item_status::ItemStatus;
    use crate::enums::priority::Priority;
    use crate::structs::report::parsed_item::ParsedItem;

    #[test]
    fn parses_single_section_with_items() {
        let report = parse_report_text("1. WEB SİTESİ ANALİZİ (12/20)\n✓ SSL Sertifikası: Aktif\n✗ Mobil Uyum: Zayıf");

        assert_eq!(report.sections.len(), 1);
        let section = &report.sections[0];
        assert_eq!(section.title, "WEB SİTESİ ANALİZİ");
        assert_eq!((section.score, section.max_score), (12, 20));
        assert_eq!(section.status, ItemStatus::Warning);
        assert_eq!(
            section.items,
            vec![
                ParsedItem { label: "SSL Sertifikası".into(), value: "Aktif".into(), status: ItemStatus::Good },
                ParsedItem { label: "Mobil Uyum".into(), value: "Zayıf".into(), status: ItemStatus::Critical },
            ]
        );
    }

    #[test]
    fn reads_overall_score() {
        let report = parse_report_text("GENEL DİJİTAL SKOR: 67/100");
        assert_eq!(report.overall_score, 67);
    }

    #[test]
    fn assigns_priority_by_position() {
        let report = parse_report_text(
            "ÖNERİLER\n1. Mobil uyum\n2. SSL yenile\n3. Blog aç\n4. Reels paylaş\n5. Logo yenile",
        );

        let priorities: Vec<Priority> = report.recommendations.iter().map(|r| r.priority).collect();
        assert_eq!(
            priorities,
            vec![Priority::High, Priority::High, Priority::High, Priority::Medium, Priority::Medium]
        );
        assert_eq!(report.recommendations[0].id, "rec-1");
        assert_eq!(report.recommendations[3].impact, "Orta");
    }

    #[test]
    fn empty_input_gives_empty_report() {
        assert_eq!(parse_report_text(""), ParsedReport::default());
        assert_eq!(parse_report_text("\n   \n"), ParsedReport::default());
    }

    #[test]
    fn reads_title_company_and_date() {
        let report = parse_report_text("DİJİTAL ANALİZ RAPORU\nŞirket: Örnek Yazılım A.Ş.\nTarih: 15.03.2024\n");
        assert_eq!(report.company_name, "Örnek Yazılım A.Ş.");
        assert_eq!(report.report_date, "15.03.2024");
    }

    #[test]
    fn company_is_only_read_right_after_title() {
        let report = parse_report_text("Şirket: Kayıp Ltd\nDİJİTAL ANALİZ RAPORU\nTarih: 01.01.2024");
        assert_eq!(report.company_name, "");
        assert_eq!(report.report_date, "01.01.2024");
    }

    #[test]
    fn keeps_sections_in_document_order_and_flushes_last() {
        let report = parse_report_text(
            "## SEO Analizi - 14/20\nMeta: Var\nSOSYAL MEDYA (6/20)\n- Instagram: Pasif\n3. İÇERİK (9/15)\nBlog: Yok",
        );

        let titles: Vec<&str> = report.sections.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(titles, vec!["SEO Analizi", "SOSYAL MEDYA", "İÇERİK"]);
        assert_eq!(report.sections[2].items.len(), 1);
    }

    #[test]
    fn drops_preamble_noise() {
        let report = parse_report_text("Bu rapor otomatik oluşturulmuştur\n1. SEO (10/20)\nBaşlıklar: Düzenli");
        assert_eq!(report.sections.len(), 1);
        assert_eq!(report.sections[0].items.len(), 1);
    }

    #[test]
    fn recommendations_end_the_open_section() {
        let report = parse_report_text("1. SEO (10/20)\nMeta: Eksik\nÖNERİLER:\n- Meta açıklamalarını tamamlayın\nMeta: Eksik");

        assert_eq!(report.sections.len(), 1);
        assert_eq!(report.sections[0].items.len(), 1);
        assert_eq!(report.recommendations.len(), 1);
        assert_eq!(report.recommendations[0].title, "Meta açıklamalarını tamamlayın");
    }

    #[test]
    fn section_header_leaves_recommendations_mode() {
        let report = parse_report_text("ÖNERİLER\n1. Blog açın\nANALİTİK (3/10)\nGoogle Analytics: Yok");
        assert_eq!(report.recommendations.len(), 1);
        assert_eq!(report.sections.len(), 1);
        assert_eq!(report.sections[0].items[0].label, "Google Analytics");
    }

    #[test]
    fn tolerates_score_above_maximum() {
        let report = parse_report_text("1. MARKA (18/15)\nLogo: Tutarlı");
        let section = &report.sections[0];
        assert_eq!((section.score, section.max_score), (18, 15));
        assert_eq!(section.status, ItemStatus::Good);
    }

    #[test]
    fn score_marker_inside_a_header_title_still_opens_a_section() {
        let report = parse_report_text("1. DİJİTAL SKOR ÖZETİ (10/20)\nGenel skor: hesaplanamadı\nMeta: Var");

        assert_eq!(report.overall_score, 0);
        assert_eq!(report.sections.len(), 1);
        assert_eq!(report.sections[0].title, "DİJİTAL SKOR ÖZETİ");
        assert_eq!(report.sections[0].items.len(), 2);
        assert_eq!(report.sections[0].items[0].label, "Genel skor");
    }

    #[test]
    fn clamps_overall_score() {
        assert_eq!(parse_report_text("Genel Skor: 140/100").overall_score, 100);
    }
}
