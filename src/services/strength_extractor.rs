use crate::enums::item_status::ItemStatus;
use crate::structs::report::parsed_section::ParsedSection;

pub const MAX_HIGHLIGHTS: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Highlights {
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
}

/// First five good items become strengths and the first five critical items
/// become weaknesses, in document order. Warning items go to neither list.
pub fn extract_highlights(sections: &[ParsedSection]) -> Highlights {
    let items = || sections.iter().flat_map(|section| section.items.iter());

    let collect = |status: ItemStatus| -> Vec<String> {
        items()
            .filter(|item| item.status == status)
            .take(MAX_HIGHLIGHTS)
            .map(|item| item.display())
            .collect()
    };

    Highlights {
        strengths: collect(ItemStatus::Good),
        weaknesses: collect(ItemStatus::Critical),
    }
}
