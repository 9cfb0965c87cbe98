//! Output formatter trait

use madori_domain::{OutputFormat, Recommendation};

/// Trait for formatting a recommendation
pub trait OutputFormatter {
    /// Human-readable report
    fn format(&self, recommendation: &Recommendation) -> String;

    /// Format as JSON
    fn format_json(&self, recommendation: &Recommendation) -> String;

    /// Format in the requested [`OutputFormat`]
    fn render(&self, recommendation: &Recommendation, format: OutputFormat) -> String {
        match format {
            OutputFormat::Text => self.format(recommendation),
            OutputFormat::Json => self.format_json(recommendation),
        }
    }
}
