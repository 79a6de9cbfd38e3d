use serde::{Deserialize, Serialize};
use crate::enums::item_status::ItemStatus;
use crate::structs::report::parsed_item::ParsedItem;
use crate::structs::report::parsed_section::ParsedSection;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportSection {
    pub title: String,
    pub score: u32,
    pub max_score: u32,
    pub percentage: u32,
    pub status: ItemStatus,
    pub items: Vec<ParsedItem>,
}

impl From<&ParsedSection> for ReportSection {
    fn from(section: &ParsedSection) -> Self {
        Self {
            title: section.title.clone(),
            score: section.score,
            max_score: section.max_score,
            percentage: section.percentage(),
            status: section.status,
            items: section.items.clone(),
        }
    }
}
