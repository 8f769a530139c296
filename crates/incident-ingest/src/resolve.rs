//! Logical-field resolution against a decoded table's headers.

use incident_model::{LogicalField, SourceSchema};

use crate::table::RawTable;

/// A logical field resolved to a concrete column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedColumn {
    pub header: String,
    pub index: usize,
}

impl ResolvedColumn {
    /// The cell value for this column in one row, trimmed by ingestion.
    pub fn value<'a>(&self, row: &'a [String]) -> &'a str {
        row.get(self.index).map(String::as_str).unwrap_or("")
    }
}

/// Resolution result: each logical field maps to a concrete column or to
/// an explicit absent marker. Absence is not an error here; callers apply
/// their own per-field policy (synthetic ids, default SLA policy, no team
/// filter, or a hard error for the description field).
#[derive(Debug, Clone, Default)]
pub struct ResolvedFields {
    pub identifier: Option<ResolvedColumn>,
    pub description: Option<ResolvedColumn>,
    pub opened_at: Option<ResolvedColumn>,
    pub deadline: Option<ResolvedColumn>,
    pub team: Option<ResolvedColumn>,
}

impl ResolvedFields {
    pub fn get(&self, field: LogicalField) -> Option<&ResolvedColumn> {
        match field {
            LogicalField::Identifier => self.identifier.as_ref(),
            LogicalField::Description => self.description.as_ref(),
            LogicalField::OpenedAt => self.opened_at.as_ref(),
            LogicalField::Deadline => self.deadline.as_ref(),
            LogicalField::Team => self.team.as_ref(),
        }
    }
}

fn first_match(table: &RawTable, candidates: &[&str]) -> Option<ResolvedColumn> {
    for candidate in candidates {
        if let Some(index) = table.column_index(candidate) {
            return Some(ResolvedColumn {
                header: (*candidate).to_string(),
                index,
            });
        }
    }
    None
}

/// Resolves the schema's logical fields against the table's headers.
///
/// For each field the ordered candidate list is scanned and the first
/// name present wins. The description field may fall back to the first
/// column when the schema allows it (the Export subject line is the
/// leading column in older dumps).
pub fn resolve_fields(table: &RawTable, schema: &SourceSchema) -> ResolvedFields {
    let mut resolved = ResolvedFields {
        identifier: first_match(table, schema.identifier),
        description: first_match(table, schema.description),
        opened_at: first_match(table, schema.opened_at),
        deadline: first_match(table, schema.deadline),
        team: first_match(table, schema.team),
    };
    if resolved.description.is_none()
        && schema.description_falls_back_to_first_column
        && let Some(first) = table.headers.first()
    {
        resolved.description = Some(ResolvedColumn {
            header: first.clone(),
            index: 0,
        });
    }
    resolved
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::decode_table;

    #[test]
    fn test_resolve_grid_preferred_columns() {
        let table =
            decode_table("Exibir ID,Descrição,Data de criação\n1,falha,01/02/2025\n".as_bytes())
                .unwrap();
        let fields = resolve_fields(&table, &SourceSchema::grid());
        assert_eq!(fields.identifier.as_ref().unwrap().header, "Exibir ID");
        assert_eq!(fields.description.as_ref().unwrap().header, "Descrição");
        assert_eq!(fields.opened_at.as_ref().unwrap().header, "Data de criação");
        assert!(fields.deadline.is_none());
        assert!(fields.team.is_none());
    }

    #[test]
    fn test_resolve_grid_fallback_columns() {
        let table =
            decode_table("Resumo,Data da última modificação\nfalha,01/02/2025\n".as_bytes())
                .unwrap();
        let fields = resolve_fields(&table, &SourceSchema::grid());
        assert!(fields.identifier.is_none());
        assert_eq!(fields.description.as_ref().unwrap().header, "Resumo");
        assert_eq!(
            fields.opened_at.as_ref().unwrap().header,
            "Data da última modificação"
        );
    }

    #[test]
    fn test_resolve_grid_description_has_no_first_column_fallback() {
        let table = decode_table("Coluna A,Coluna B\nx,y\n".as_bytes()).unwrap();
        let fields = resolve_fields(&table, &SourceSchema::grid());
        assert!(fields.description.is_none());
    }

    #[test]
    fn test_resolve_export_first_column_fallback() {
        let table = decode_table("Chamado,Número\nRede - instável,42\n".as_bytes()).unwrap();
        let fields = resolve_fields(&table, &SourceSchema::export());
        let description = fields.description.unwrap();
        assert_eq!(description.header, "Chamado");
        assert_eq!(description.index, 0);
    }

    #[test]
    fn test_resolve_export_identifier_candidate_order() {
        let table = decode_table("ID,Número,Assunto\n1,2,x\n".as_bytes()).unwrap();
        let fields = resolve_fields(&table, &SourceSchema::export());
        // "Número" is the preferred candidate even when "ID" appears first.
        assert_eq!(fields.identifier.as_ref().unwrap().header, "Número");
        assert_eq!(fields.identifier.as_ref().unwrap().index, 1);
    }

    #[test]
    fn test_resolved_column_value_handles_short_rows() {
        let column = ResolvedColumn {
            header: "B".to_string(),
            index: 3,
        };
        let row = vec!["a".to_string()];
        assert_eq!(column.value(&row), "");
    }
}
