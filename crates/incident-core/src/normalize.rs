//! Per-source row normalization.

use chrono::NaiveDateTime;
use tracing::warn;

use incident_ingest::{RawTable, ResolvedFields};
use incident_model::{PipelineConfig, SourceSchema};

use crate::error::PipelineError;
use crate::failure::extract_failure_type;
use crate::sla::compute_deadline;
use crate::temporal::parse_datetime;

/// One fully-normalized row, before origin tagging and status evaluation.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedRow {
    pub id: String,
    pub failure_type: String,
    pub opened_at: Option<NaiveDateTime>,
    pub sla_deadline: Option<NaiveDateTime>,
    /// Trimmed team value, when the source resolved a team column.
    pub team: Option<String>,
}

/// A normalized source branch plus the degradations it accumulated.
#[derive(Debug, Clone)]
pub struct NormalizedSource {
    pub rows: Vec<NormalizedRow>,
    /// Whether a team column resolved; the reconciler only filters when
    /// it did.
    pub team_resolved: bool,
    pub warnings: Vec<String>,
}

/// Normalizes every row of a resolved table.
///
/// The description field is required: without it no failure type can be
/// extracted, and the run aborts. Every other absence degrades per the
/// field's policy: synthetic sequential ids, null opened-at timestamps,
/// default-duration deadlines, or an unfiltered team.
pub fn normalize_source(
    table: &RawTable,
    fields: &ResolvedFields,
    schema: &SourceSchema,
    config: &PipelineConfig,
) -> Result<NormalizedSource, PipelineError> {
    let description = fields
        .description
        .as_ref()
        .ok_or_else(|| PipelineError::MissingRequiredColumn {
            source_name: schema.name.to_string(),
        })?;

    let mut warnings = Vec::new();
    if fields.opened_at.is_none() && !schema.opened_at.is_empty() {
        let message = format!(
            "no opened-at column found in the {} input; dates will be null",
            schema.name
        );
        warn!(source = schema.name, "{message}");
        warnings.push(message);
    }
    if fields.deadline.is_none() && !schema.deadline.is_empty() {
        let message = format!(
            "no deadline column found in the {} input; applying the default SLA window",
            schema.name
        );
        warn!(source = schema.name, "{message}");
        warnings.push(message);
    }
    if fields.team.is_none() && !schema.team.is_empty() {
        let message = format!(
            "no team column found in the {} input; no team filter applied",
            schema.name
        );
        warn!(source = schema.name, "{message}");
        warnings.push(message);
    }

    let mut rows = Vec::with_capacity(table.rows.len());
    for (index, row) in table.rows.iter().enumerate() {
        let id = match &fields.identifier {
            Some(column) => column.value(row).to_string(),
            None => index.to_string(),
        };
        let failure_type = extract_failure_type(
            description.value(row),
            schema.strategy,
            config.short_text_limit,
        );
        let opened_at = fields
            .opened_at
            .as_ref()
            .and_then(|column| parse_datetime(column.value(row)));
        let raw_deadline = fields.deadline.as_ref().map(|column| column.value(row));
        let sla_deadline = compute_deadline(opened_at, raw_deadline, config.sla_default);
        let team = fields
            .team
            .as_ref()
            .map(|column| column.value(row).trim().to_string());

        rows.push(NormalizedRow {
            id,
            failure_type,
            opened_at,
            sla_deadline,
            team,
        });
    }

    Ok(NormalizedSource {
        rows,
        team_resolved: fields.team.is_some(),
        warnings,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use incident_ingest::{decode_table, resolve_fields};

    fn normalize(csv: &str, schema: &SourceSchema) -> NormalizedSource {
        let table = decode_table(csv.as_bytes()).unwrap();
        let fields = resolve_fields(&table, schema);
        normalize_source(&table, &fields, schema, &PipelineConfig::default()).unwrap()
    }

    #[test]
    fn test_grid_rows_normalize() {
        let source = normalize(
            "Exibir ID,Descrição,Data de criação\n\
             INC-1,\"Tipo de falha: Timeout\nOutros dados\",17/12/2025 14:46:02\n",
            &SourceSchema::grid(),
        );
        assert_eq!(source.rows.len(), 1);
        assert_eq!(source.rows[0].id, "INC-1");
        assert_eq!(source.rows[0].failure_type, "Timeout");
        let opened = NaiveDate::from_ymd_opt(2025, 12, 17)
            .unwrap()
            .and_hms_opt(14, 46, 2)
            .unwrap();
        assert_eq!(source.rows[0].opened_at, Some(opened));
        assert_eq!(
            source.rows[0].sla_deadline,
            Some(opened + chrono::Duration::hours(24))
        );
    }

    #[test]
    fn test_synthetic_ids_when_identifier_absent() {
        let source = normalize(
            "Resumo,Data de criação\nAcesso,17/12/2025\nRede,18/12/2025\n",
            &SourceSchema::grid(),
        );
        assert_eq!(source.rows[0].id, "0");
        assert_eq!(source.rows[1].id, "1");
    }

    #[test]
    fn test_default_deadline_applied_per_row() {
        let source = normalize(
            "Assunto,Número,Data Hora de Abertura,Resolver até,Equipe Responsável\n\
             Incidente - Rede,1,01/06/2025 08:00:00,10/06/2025 18:00:00,TCLOUD-DEVOPS-PROTHEUS\n\
             Incidente - Banco,2,01/06/2025 08:00:00,,TCLOUD-DEVOPS-PROTHEUS\n",
            &SourceSchema::export(),
        );
        let explicit = NaiveDate::from_ymd_opt(2025, 6, 10)
            .unwrap()
            .and_hms_opt(18, 0, 0)
            .unwrap();
        let defaulted = NaiveDate::from_ymd_opt(2025, 6, 2)
            .unwrap()
            .and_hms_opt(8, 0, 0)
            .unwrap();
        assert_eq!(source.rows[0].sla_deadline, Some(explicit));
        assert_eq!(source.rows[1].sla_deadline, Some(defaulted));
    }

    #[test]
    fn test_missing_description_is_fatal() {
        let table = decode_table("Coluna A,Coluna B\nx,y\n".as_bytes()).unwrap();
        let schema = SourceSchema::grid();
        let fields = resolve_fields(&table, &schema);
        let err = normalize_source(&table, &fields, &schema, &PipelineConfig::default())
            .unwrap_err();
        assert!(matches!(err, PipelineError::MissingRequiredColumn { .. }));
    }

    #[test]
    fn test_missing_optional_columns_warn() {
        let source = normalize(
            "Assunto,Número\nIncidente - Rede,1\n",
            &SourceSchema::export(),
        );
        assert!(!source.team_resolved);
        assert_eq!(source.warnings.len(), 3);
        assert!(source.rows[0].opened_at.is_none());
        assert!(source.rows[0].sla_deadline.is_none());
    }

    #[test]
    fn test_unparseable_date_degrades_to_null() {
        let source = normalize(
            "Resumo,Data de criação\nAcesso,data inválida\n",
            &SourceSchema::grid(),
        );
        assert_eq!(source.rows[0].opened_at, None);
        assert_eq!(source.rows[0].sla_deadline, None);
        assert_eq!(source.rows[0].failure_type, "Acesso");
    }
}
