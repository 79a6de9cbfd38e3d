use serde::{Deserialize, Serialize};
use crate::enums::category_key::CategoryKey;
use crate::structs::report::category_score::CategoryScore;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryScores {
    pub website: CategoryScore,
    pub seo: CategoryScore,
    pub social_media: CategoryScore,
    pub content: CategoryScore,
    pub branding: CategoryScore,
    pub analytics: CategoryScore,
}

impl Default for CategoryScores {
    fn default() -> Self {
        Self {
            website: CategoryScore::empty(CategoryKey::Website),
            seo: CategoryScore::empty(CategoryKey::Seo),
            social_media: CategoryScore::empty(CategoryKey::SocialMedia),
            content: CategoryScore::empty(CategoryKey::Content),
            branding: CategoryScore::empty(CategoryKey::Branding),
            analytics: CategoryScore::empty(CategoryKey::Analytics),
        }
    }
}

impl CategoryScores {
    pub fn get(&self, key: CategoryKey) -> &CategoryScore {
        match key {
            CategoryKey::Website => &self.website,
            CategoryKey::Seo => &self.seo,
            CategoryKey::SocialMedia => &self.social_media,
            CategoryKey::Content => &self.content,
            CategoryKey::Branding => &self.branding,
            CategoryKey::Analytics => &self.analytics,
        }
    }

    pub fn get_mut(&mut self, key: CategoryKey) -> &mut CategoryScore {
        match key {
            CategoryKey::Website => &mut self.website,
            CategoryKey::Seo => &mut self.seo,
            CategoryKey::SocialMedia => &mut self.social_media,
            CategoryKey::Content => &mut self.content,
            CategoryKey::Branding => &mut self.branding,
            CategoryKey::Analytics => &mut self.analytics,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (CategoryKey, &CategoryScore)> {
        CategoryKey::ALL.into_iter().map(move |key| (key, self.get(key)))
    }
}
