use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use crate::structs::report::analysis_result::AnalysisResult;
use crate::structs::report::recommendation::Recommendation;

/// A report as it is stored and handed to DigiBot. Category scores stay
/// loosely typed because stored rows are not guaranteed to hold objects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ReportSummary {
    #[serde(default)]
    pub company_name: String,
    #[serde(default)]
    pub overall_score: u32,
    #[serde(default)]
    pub category_scores: Map<String, Value>,
    #[serde(default)]
    pub strengths: Vec<String>,
    #[serde(default)]
    pub weaknesses: Vec<String>,
    #[serde(default)]
    pub recommendations: Vec<Recommendation>,
}

impl From<&AnalysisResult> for ReportSummary {
    fn from(result: &AnalysisResult) -> Self {
        let category_scores = result
            .category_scores
            .iter()
            .filter_map(|(key, score)| {
                serde_json::to_value(score)
                    .ok()
                    .map(|value| (key.key().to_string(), value))
            })
            .collect();

        Self {
            company_name: result.company_name.clone(),
            overall_score: result.overall_score,
            category_scores,
            strengths: result.strengths.clone(),
            weaknesses: result.weaknesses.clone(),
            recommendations: result.recommendations.clone(),
        }
    }
}
