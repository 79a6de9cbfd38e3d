use crate::enums::category_key::CategoryKey;
use crate::helpers::text_helper::fold_case;
use crate::structs::report::category_score::CategoryScore;
use crate::structs::report::category_scores::CategoryScores;
use crate::structs::report::parsed_section::ParsedSection;

/// Keyword -> category, in match order. Keywords are in folded lower case.
pub const CATEGORY_KEYWORDS: &[(&str, CategoryKey)] = &[
    ("web", CategoryKey::Website),
    ("site", CategoryKey::Website),
    ("seo", CategoryKey::Seo),
    ("sosyal", CategoryKey::SocialMedia),
    ("social", CategoryKey::SocialMedia),
    ("içerik", CategoryKey::Content),
    ("content", CategoryKey::Content),
    ("marka", CategoryKey::Branding),
    ("brand", CategoryKey::Branding),
    ("analitik", CategoryKey::Analytics),
    ("analytics", CategoryKey::Analytics),
    ("ölçüm", CategoryKey::Analytics),
];

pub fn category_for_title(title: &str) -> Option<CategoryKey> {
    let folded = fold_case(title);
    CATEGORY_KEYWORDS
        .iter()
        .find(|(keyword, _)| folded.contains(keyword))
        .map(|(_, key)| *key)
}

/// Projects sections onto the six fixed categories. A later section for the
/// same category replaces the earlier one; unmatched sections are dropped.
pub fn map_category_scores(sections: &[ParsedSection]) -> CategoryScores {
    let mut scores = CategoryScores::default();

    for section in sections {
        match category_for_title(&section.title) {
            Some(key) => *scores.get_mut(key) = CategoryScore::from_section(section),
            None => log::debug!("No category for section '{}', dropping it", section.title),
        }
    }

    scores
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::item_status::ItemStatus;
    use crate::structs::report::parsed_item::ParsedItem;

    fn section(title: &str, score: u32, max_score: u32, items: &[(&str, &str)]) -> ParsedSection {
        let mut section = ParsedSection::new(title.to_string(), score, max_score);
        section.items = items
            .iter()
            .map(|(label, value)| ParsedItem {
                label: label.to_string(),
                value: value.to_string(),
                status: ItemStatus::Good,
            })
            .collect();
        section
    }

    #[test]
    fn maps_titles_by_keyword() {
        assert_eq!(category_for_title("SEO Performansı"), Some(CategoryKey::Seo));
        assert_eq!(category_for_title("WEB SİTESİ ANALİZİ"), Some(CategoryKey::Website));
        assert_eq!(category_for_title("SOSYAL MEDYA"), Some(CategoryKey::SocialMedia));
        assert_eq!(category_for_title("İÇERİK PAZARLAMASI"), Some(CategoryKey::Content));
        assert_eq!(category_for_title("Marka Kimliği"), Some(CategoryKey::Branding));
        assert_eq!(category_for_title("ANALİTİK & ÖLÇÜM"), Some(CategoryKey::Analytics));
        assert_eq!(category_for_title("Rakip Karşılaştırması"), None);
    }

    #[test]
    fn fills_matched_category() {
        let scores = map_category_scores(&[section("SEO Performansı", 5, 20, &[("Meta", "Eksik"), ("Sitemap", "")])]);

        assert_eq!(scores.seo.score, 5);
        assert_eq!(scores.seo.max_score, 20);
        assert_eq!(scores.seo.label, "SEO Performansı");
        assert_eq!(scores.seo.description, "2 kriter değerlendirildi");
        assert_eq!(scores.seo.details, vec!["Meta: Eksik".to_string(), "Sitemap".to_string()]);
        assert_eq!(scores.website, CategoryScore::empty(CategoryKey::Website));
    }

    #[test]
    fn later_section_wins() {
        let scores = map_category_scores(&[
            section("SEO Teknik", 5, 20, &[("Robots", "Var")]),
            section("SEO İçerik", 11, 20, &[]),
        ]);

        assert_eq!(scores.seo.score, 11);
        assert_eq!(scores.seo.label, "SEO İçerik");
        assert!(scores.seo.details.is_empty());
    }

    #[test]
    fn unmatched_sections_leave_defaults() {
        let scores = map_category_scores(&[section("Rakip Analizi", 7, 10, &[])]);
        assert_eq!(scores, CategoryScores::default());
    }
}
