use serde::{Deserialize, Serialize};
use crate::enums::effort::Effort;
use crate::enums::priority::Priority;

pub const GENERAL_CATEGORY: &str = "general";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    pub id: String,
    #[serde(default = "default_category")]
    pub category: String,
    #[serde(default)]
    pub priority: Priority,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub impact: String,
    #[serde(default)]
    pub effort: Effort,
}

fn default_category() -> String {
    GENERAL_CATEGORY.to_string()
}

impl Recommendation {
    /// Recommendation found at `position` (0-based) in the recommendations block.
    pub fn at_position(position: usize, title: String) -> Self {
        let priority = Priority::from_position(position);
        Self {
            id: format!("rec-{}", position + 1),
            category: default_category(),
            impact: priority.impact_label().to_string(),
            priority,
            title,
            description: String::new(),
            effort: Effort::Medium,
        }
    }
}
