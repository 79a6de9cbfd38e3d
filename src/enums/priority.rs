use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone, Copy, Eq, Hash, PartialEq, Default)]
pub enum Priority {
    #[serde(rename = "high")]
    High,
    #[default]
    #[serde(rename = "medium")]
    Medium,
    #[serde(rename = "low")]
    Low,
}

impl Priority {
    const BUCKET_SIZE: usize = 3;

    /// Priority of the recommendation at `position` (0-based) among all
    /// recommendations of a report.
    pub fn from_position(position: usize) -> Self {
        match position / Self::BUCKET_SIZE {
            0 => Self::High,
            1 => Self::Medium,
            _ => Self::Low,
        }
    }

    pub fn impact_label(&self) -> &'static str {
        match self {
            Self::High => "Yüksek",
            Self::Medium => "Orta",
            Self::Low => "Düşük",
        }
    }
}
