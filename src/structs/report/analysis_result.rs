use serde::{Deserialize, Serialize};
use crate::structs::report::category_scores::CategoryScores;
use crate::structs::report::recommendation::Recommendation;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub company_name: String,
    pub report_date: String,
    pub overall_score: u32,
    pub category_scores: CategoryScores,
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub recommendations: Vec<Recommendation>,
}
