use crate::enums::item_status::ItemStatus;
use crate::enums::priority::Priority;
use crate::services::score_mapper::map_category_scores;
use crate::services::strength_extractor::extract_highlights;
use crate::structs::report::analysis_result::AnalysisResult;
use crate::structs::report::parsed_report::ParsedReport;
use crate::structs::report::report_data::{PriorityBreakdown, ReportData};
use crate::structs::report::report_section::ReportSection;

pub fn convert_to_analysis_result(parsed: &ParsedReport) -> AnalysisResult {
    let highlights = extract_highlights(&parsed.sections);

    AnalysisResult {
        company_name: parsed.company_name.clone(),
        report_date: parsed.report_date.clone(),
        overall_score: parsed.overall_score,
        category_scores: map_category_scores(&parsed.sections),
        strengths: highlights.strengths,
        weaknesses: highlights.weaknesses,
        recommendations: parsed.recommendations.clone(),
    }
}

pub fn convert_to_report_data(parsed: &ParsedReport) -> ReportData {
    let priority_breakdown = parsed
        .recommendations
        .iter()
        .fold(PriorityBreakdown::default(), |mut counts, rec| {
            match rec.priority {
                Priority::High => counts.high += 1,
                Priority::Medium => counts.medium += 1,
                Priority::Low => counts.low += 1,
            }
            counts
        });

    ReportData {
        company_name: parsed.company_name.clone(),
        report_date: parsed.report_date.clone(),
        overall_score: parsed.overall_score,
        overall_status: ItemStatus::from_percentage(parsed.overall_score),
        sections: parsed.sections.iter().map(ReportSection::from).collect(),
        recommendations: parsed.recommendations.clone(),
        priority_breakdown,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::report_parser::parse_report_text;

    const REPORT: &str = "\
DİJİTAL ANALİZ RAPORU
Şirket: Kuzey Mobilya
GENEL DİJİTAL SKOR: 48/100
1. WEB SİTESİ (14/20)
✓ SSL: Aktif
⚠ Hız: 3.1 sn
2. SEO Performansı (5/20)
✗ Meta açıklama: Eksik
ÖNERİLER
1. Meta açıklamaları yazın
2. Görselleri sıkıştırın
3. Google Business profili açın
4. Blog başlatın
";

    #[test]
    fn builds_analysis_result() {
        let result = convert_to_analysis_result(&parse_report_text(REPORT));

        assert_eq!(result.company_name, "Kuzey Mobilya");
        assert_eq!(result.overall_score, 48);
        assert_eq!(result.category_scores.website.score, 14);
        assert_eq!(result.category_scores.seo.score, 5);
        assert_eq!(result.category_scores.analytics.score, 0);
        assert_eq!(result.strengths, vec!["SSL: Aktif".to_string()]);
        assert_eq!(result.weaknesses, vec!["Meta açıklama: Eksik".to_string()]);
        assert_eq!(result.recommendations.len(), 4);
    }

    #[test]
    fn builds_report_data() {
        let data = convert_to_report_data(&parse_report_text(REPORT));

        assert_eq!(data.overall_status, ItemStatus::Warning);
        assert_eq!(data.sections.len(), 2);
        assert_eq!(data.sections[0].percentage, 70);
        assert_eq!(data.sections[0].status, ItemStatus::Good);
        assert_eq!(data.sections[1].percentage, 25);
        assert_eq!(data.sections[1].status, ItemStatus::Critical);
        assert_eq!(data.priority_breakdown, PriorityBreakdown { high: 3, medium: 1, low: 0 });
    }
}
