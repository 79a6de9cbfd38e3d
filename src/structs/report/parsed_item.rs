use serde::{Deserialize, Serialize};
use crate::enums::item_status::ItemStatus;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedItem {
    pub label: String,
    pub value: String,
    pub status: ItemStatus,
}

impl ParsedItem {
    /// `label: value`, or the bare label when there is no value.
    pub fn display(&self) -> String {
        if self.value.is_empty() {
            self.label.clone()
        } else {
            format!("{}: {}", self.label, self.value)
        }
    }
}
