/// Structural lines recognised by the report scanner. Anything else is either
/// an item, a recommendation, or noise, depending on scanner state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind {
    ReportTitle,
    ReportDate(String),
    OverallScore(u32),
    SectionHeader {
        title: String,
        score: u32,
        max_score: u32,
    },
    RecommendationsHeader,
}
