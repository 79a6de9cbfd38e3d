use serde::{Deserialize, Serialize};
use crate::structs::report::parsed_section::ParsedSection;
use crate::structs::report::recommendation::Recommendation;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ParsedReport {
    pub company_name: String,
    pub report_date: String,
    pub overall_score: u32,
    pub sections: Vec<ParsedSection>,
    pub recommendations: Vec<Recommendation>,
}

impl ParsedReport {
    pub fn item_count(&self) -> usize {
        self.sections.iter().map(|s| s.items.len()).sum()
    }
}
