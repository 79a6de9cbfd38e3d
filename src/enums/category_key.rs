use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoryKey {
    Website,
    Seo,
    SocialMedia,
    Content,
    Branding,
    Analytics,
}

impl CategoryKey {
    pub const ALL: [CategoryKey; 6] = [
        Self::Website,
        Self::Seo,
        Self::SocialMedia,
        Self::Content,
        Self::Branding,
        Self::Analytics,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            Self::Website => "website",
            Self::Seo => "seo",
            Self::SocialMedia => "social_media",
            Self::Content => "content",
            Self::Branding => "branding",
            Self::Analytics => "analytics",
        }
    }

    pub fn default_label(&self) -> &'static str {
        match self {
            Self::Website => "Web Sitesi",
            Self::Seo => "SEO",
            Self::SocialMedia => "Sosyal Medya",
            Self::Content => "İçerik",
            Self::Branding => "Marka",
            Self::Analytics => "Analitik",
        }
    }

    /// Fixed maximum score; the six categories add up to 100.
    pub fn default_max_score(&self) -> u32 {
        match self {
            Self::Website | Self::Seo | Self::SocialMedia => 20,
            Self::Content | Self::Branding => 15,
            Self::Analytics => 10,
        }
    }
}
