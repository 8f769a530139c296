//! Pipeline configuration values.

use chrono::Duration;

/// Explicit configuration passed into the pipeline.
///
/// These were process-wide constants in earlier incarnations of the
/// unifier; keeping them on a config struct lets callers override the
/// team filter or SLA window per run.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Title used for the generated report.
    pub report_title: String,
    /// Export-side rows are retained only when their trimmed team value
    /// equals this exactly (case-sensitive).
    pub target_team: String,
    /// Deadline applied when a row has no parseable explicit deadline.
    pub sla_default: Duration,
    /// Description values shorter than this (in characters) that carry no
    /// failure-type label are treated as already being a category label.
    pub short_text_limit: usize,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            report_title: "Central de Incidentes Unificada".to_string(),
            target_team: "TCLOUD-DEVOPS-PROTHEUS".to_string(),
            sla_default: Duration::hours(24),
            short_text_limit: 50,
        }
    }
}

impl PipelineConfig {
    /// Override the default SLA window, in whole hours.
    #[must_use]
    pub fn with_sla_hours(mut self, hours: i64) -> Self {
        self.sla_default = Duration::hours(hours);
        self
    }

    /// Override the target team for the export-side filter.
    #[must_use]
    pub fn with_target_team(mut self, team: impl Into<String>) -> Self {
        self.target_team = team.into();
        self
    }
}
