use serde::{Deserialize, Serialize};
use crate::enums::item_status::ItemStatus;
use crate::structs::report::parsed_item::ParsedItem;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedSection {
    pub title: String,
    pub score: u32,
    pub max_score: u32,
    pub items: Vec<ParsedItem>,
    pub status: ItemStatus,
}

impl ParsedSection {
    pub fn new(title: String, score: u32, max_score: u32) -> Self {
        Self {
            status: ItemStatus::from_score(score, max_score),
            title,
            score,
            max_score,
            items: Vec::new(),
        }
    }

    pub fn percentage(&self) -> u32 {
        percentage(self.score, self.max_score)
    }
}

/// Rounded `score / max_score` in percent; zero when the maximum is zero.
/// `score > max_score` is not clamped.
pub fn percentage(score: u32, max_score: u32) -> u32 {
    if max_score == 0 {
        return 0;
    }
    let scaled = u64::from(score) * 100;
    let max = u64::from(max_score);
    u32::try_from((scaled + max / 2) / max).unwrap_or(u32::MAX)
}
