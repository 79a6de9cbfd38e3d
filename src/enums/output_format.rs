use clap::ValueEnum;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum OutputFormat {
    /// Raw parsed report as JSON
    #[default]
    Json,
    /// Category scores, strengths and weaknesses as JSON
    Analysis,
    /// Render-ready report data as JSON
    Report,
    /// Plain-text chat context
    Context,
}
