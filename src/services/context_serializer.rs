use serde_json::{Map, Value};
use crate::structs::report::report_summary::ReportSummary;

pub const MAX_CONTEXT_RECOMMENDATIONS: usize = 5;

/// Flattens a stored report into the plain-text block DigiBot receives as
/// context. Category entries that are not JSON objects are skipped.
pub fn generate_report_context(report: &ReportSummary) -> String {
    let mut lines = vec![
        format!("Şirket: {}", report.company_name),
        format!("Genel Dijital Skor: {}/100", report.overall_score),
        String::new(),
        "Kategori Skorları:".to_string(),
    ];

    for (key, value) in &report.category_scores {
        if let Value::Object(category) = value {
            lines.push(category_line(key, category));
        }
    }

    lines.push(String::new());
    lines.push("Güçlü Yönler:".to_string());
    lines.extend(report.strengths.iter().map(|s| format!("- {}", s)));

    lines.push(String::new());
    lines.push("Zayıf Yönler:".to_string());
    lines.extend(report.weaknesses.iter().map(|w| format!("- {}", w)));

    lines.push(String::new());
    lines.push("Öncelikli Öneriler:".to_string());
    lines.extend(
        report
            .recommendations
            .iter()
            .take(MAX_CONTEXT_RECOMMENDATIONS)
            .enumerate()
            .map(|(i, rec)| format!("{}. {} (öncelik: {})", i + 1, rec.title, rec.priority.impact_label())),
    );

    lines.join("\n")
}

fn category_line(key: &str, category: &Map<String, Value>) -> String {
    let label = category.get("label").and_then(Value::as_str).unwrap_or(key);
    format!(
        "- {}: {}/{}",
        label,
        number_field(category, "score"),
        number_field(category, "maxScore")
    )
}

fn number_field(category: &Map<String, Value>, field: &str) -> String {
    match category.get(field) {
        Some(Value::Number(number)) => number.to_string(),
        _ => "0".to_string(),
    }
}
