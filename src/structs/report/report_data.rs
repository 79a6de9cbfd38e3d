use serde::{Deserialize, Serialize};
use crate::enums::item_status::ItemStatus;
use crate::structs::report::recommendation::Recommendation;
use crate::structs::report::report_section::ReportSection;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct PriorityBreakdown {
    pub high: usize,
    pub medium: usize,
    pub low: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportData {
    pub company_name: String,
    pub report_date: String,
    pub overall_score: u32,
    pub overall_status: ItemStatus,
    pub sections: Vec<ReportSection>,
    pub recommendations: Vec<Recommendation>,
    pub priority_breakdown: PriorityBreakdown,
}
