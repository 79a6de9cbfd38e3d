use serde::{Deserialize, Serialize};
use crate::enums::category_key::CategoryKey;
use crate::structs::report::parsed_section::ParsedSection;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryScore {
    pub score: u32,
    pub max_score: u32,
    pub label: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub details: Vec<String>,
}

impl CategoryScore {
    pub fn empty(key: CategoryKey) -> Self {
        Self {
            score: 0,
            max_score: key.default_max_score(),
            label: key.default_label().to_string(),
            description: String::new(),
            details: Vec::new(),
        }
    }

    pub fn from_section(section: &ParsedSection) -> Self {
        Self {
            score: section.score,
            max_score: section.max_score,
            label: section.title.clone(),
            description: format!("{} kriter değerlendirildi", section.items.len()),
            details: section.items.iter().map(|item| item.display()).collect(),
        }
    }
}
