//! Per-source schema configuration.
//!
//! Each source system names its columns differently, and some logical
//! fields only exist on one side. Resolution works off an ordered
//! candidate-name list per logical field: the first candidate present in
//! the dataset's headers wins, and a field with no match resolves to an
//! explicit absent marker rather than failing the run.

/// A canonical concept resolved from one of several raw column names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LogicalField {
    /// Record identifier.
    Identifier,
    /// Failure description text the failure type is extracted from.
    Description,
    /// When the incident was opened.
    OpenedAt,
    /// Explicit SLA deadline, when the source provides one.
    Deadline,
    /// Responsible-team column used for source-side filtering.
    Team,
}

impl LogicalField {
    pub const ALL: [LogicalField; 5] = [
        Self::Identifier,
        Self::Description,
        Self::OpenedAt,
        Self::Deadline,
        Self::Team,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Identifier => "identifier",
            Self::Description => "description",
            Self::OpenedAt => "opened-at",
            Self::Deadline => "deadline",
            Self::Team => "team",
        }
    }
}

/// How a failure type is extracted from the resolved description value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtractStrategy {
    /// Search long free text for a labeled failure-type field.
    Pattern,
    /// Take the text before the first hyphen of a short subject line.
    Prefix,
}

/// Static per-source configuration: candidate column names per logical
/// field plus the extraction strategy for description values.
#[derive(Debug, Clone)]
pub struct SourceSchema {
    /// Human-readable source name used in logs and error messages.
    pub name: &'static str,
    pub identifier: &'static [&'static str],
    pub description: &'static [&'static str],
    pub opened_at: &'static [&'static str],
    pub deadline: &'static [&'static str],
    pub team: &'static [&'static str],
    pub strategy: ExtractStrategy,
    /// Fall back to the first header when no description candidate matches.
    pub description_falls_back_to_first_column: bool,
}

impl SourceSchema {
    /// Schema of the Grid (TCloud) incident grid export.
    pub fn grid() -> Self {
        Self {
            name: "grid",
            identifier: &["Exibir ID"],
            description: &["Descrição", "Resumo"],
            opened_at: &["Data de criação", "Data da última modificação"],
            deadline: &[],
            team: &[],
            strategy: ExtractStrategy::Pattern,
            description_falls_back_to_first_column: false,
        }
    }

    /// Schema of the Export system ticket dump.
    pub fn export() -> Self {
        Self {
            name: "export",
            identifier: &["Número", "ID"],
            description: &["Assunto"],
            opened_at: &["Data Hora de Abertura"],
            deadline: &["Resolver até"],
            team: &["Equipe Responsável"],
            strategy: ExtractStrategy::Prefix,
            description_falls_back_to_first_column: true,
        }
    }

    /// The ordered candidate list for one logical field.
    pub fn candidates(&self, field: LogicalField) -> &'static [&'static str] {
        match field {
            LogicalField::Identifier => self.identifier,
            LogicalField::Description => self.description,
            LogicalField::OpenedAt => self.opened_at,
            LogicalField::Deadline => self.deadline,
            LogicalField::Team => self.team,
        }
    }
}
