use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ItemStatus {
    #[default]
    Good,
    Warning,
    Critical,
}

impl ItemStatus {
    pub const GOOD_THRESHOLD: u32 = 70;
    pub const WARNING_THRESHOLD: u32 = 40;

    /// Status of `score` out of `max_score`, compared on the exact ratio.
    /// A zero maximum is critical; `score > max_score` resolves to `Good`.
    pub fn from_score(score: u32, max_score: u32) -> Self {
        let scaled = u64::from(score) * 100;
        let max = u64::from(max_score);

        if max == 0 {
            Self::Critical
        } else if scaled >= u64::from(Self::GOOD_THRESHOLD) * max {
            Self::Good
        } else if scaled >= u64::from(Self::WARNING_THRESHOLD) * max {
            Self::Warning
        } else {
            Self::Critical
        }
    }

    pub fn from_percentage(percentage: u32) -> Self {
        Self::from_score(percentage, 100)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thresholds_use_the_exact_ratio() {
        assert_eq!(ItemStatus::from_score(139, 200), ItemStatus::Warning);
        assert_eq!(ItemStatus::from_score(140, 200), ItemStatus::Good);
        assert_eq!(ItemStatus::from_score(79, 200), ItemStatus::Critical);
        assert_eq!(ItemStatus::from_score(80, 200), ItemStatus::Warning);
        assert_eq!(ItemStatus::from_score(14, 20), ItemStatus::Good);
        assert_eq!(ItemStatus::from_score(8, 20), ItemStatus::Warning);
    }

    #[test]
    fn zero_maximum_is_critical() {
        assert_eq!(ItemStatus::from_score(0, 0), ItemStatus::Critical);
        assert_eq!(ItemStatus::from_score(5, 0), ItemStatus::Critical);
    }

    #[test]
    fn over_maximum_is_good() {
        assert_eq!(ItemStatus::from_score(18, 15), ItemStatus::Good);
        assert_eq!(ItemStatus::from_percentage(120), ItemStatus::Good);
    }
}
