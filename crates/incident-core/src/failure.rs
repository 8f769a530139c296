//! Failure-type extraction from heterogeneous description fields.
//!
//! The Grid source delivers long free-text descriptions with an embedded
//! labeled field ("Tipo de falha: ..."); the Export source delivers short
//! categorical subject lines ("Incidente - Rede instável"). Both shapes
//! reduce to a short normalized label, and extraction never fails: inputs
//! that fit neither shape degrade to a sentinel.

use std::sync::LazyLock;

use regex::Regex;

use incident_model::ExtractStrategy;

/// Sentinel label for values no strategy could classify.
pub const UNIDENTIFIED: &str = "Não Identificado";

/// Accepted spellings of the embedded failure-type label, captured up to
/// the end of the line.
static FAILURE_LABEL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:Tipo d?e? falha|Tp\.? falha|Falha):\s*(.*?)(?:\n|$)")
        .expect("invalid failure label regex")
});

/// Extracts a short normalized failure label from a description value.
///
/// Total function: null-ish (empty/whitespace) input yields the
/// [`UNIDENTIFIED`] sentinel, never an error.
pub fn extract_failure_type(raw: &str, strategy: ExtractStrategy, short_text_limit: usize) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return UNIDENTIFIED.to_string();
    }
    match strategy {
        ExtractStrategy::Pattern => extract_labeled(raw, trimmed, short_text_limit),
        ExtractStrategy::Prefix => extract_prefix(trimmed),
    }
}

fn extract_labeled(raw: &str, trimmed: &str, short_text_limit: usize) -> String {
    // Short label-free text is already a category label; keep it as-is.
    if raw.chars().count() < short_text_limit && !FAILURE_LABEL_REGEX.is_match(raw) {
        return trimmed.to_string();
    }
    match FAILURE_LABEL_REGEX.captures(raw) {
        Some(captures) => captures[1].trim().to_string(),
        None => UNIDENTIFIED.to_string(),
    }
}

fn extract_prefix(trimmed: &str) -> String {
    match trimmed.split_once('-') {
        Some((prefix, _)) => prefix.trim().to_string(),
        None => trimmed.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LIMIT: usize = 50;

    fn pattern(raw: &str) -> String {
        extract_failure_type(raw, ExtractStrategy::Pattern, LIMIT)
    }

    fn prefix(raw: &str) -> String {
        extract_failure_type(raw, ExtractStrategy::Prefix, LIMIT)
    }

    #[test]
    fn test_pattern_extracts_labeled_value() {
        assert_eq!(pattern("Tipo de falha: Timeout\nOutros dados"), "Timeout");
    }

    #[test]
    fn test_pattern_label_spellings() {
        assert_eq!(pattern("Tp. falha: Disco cheio\nmais texto"), "Disco cheio");
        assert_eq!(pattern("tipo de falha: rede"), "rede");
        let long = format!("Falha: Energia\n{}", "x".repeat(80));
        assert_eq!(pattern(&long), "Energia");
    }

    #[test]
    fn test_pattern_short_label_free_text_is_verbatim() {
        assert_eq!(pattern("Acesso"), "Acesso");
        assert_eq!(pattern("  Banco de Dados  "), "Banco de Dados");
    }

    #[test]
    fn test_pattern_long_text_without_label_is_sentinel() {
        let long = "um relato extenso do incidente sem campo estruturado algum ".repeat(3);
        assert_eq!(pattern(&long), UNIDENTIFIED);
    }

    #[test]
    fn test_pattern_empty_input_is_sentinel() {
        assert_eq!(pattern(""), UNIDENTIFIED);
        assert_eq!(pattern("   "), UNIDENTIFIED);
    }

    #[test]
    fn test_pattern_capture_stops_at_line_end() {
        let text = format!(
            "Prioridade: Alta\nTipo de falha: Indisponibilidade\nEquipe: N2\n{}",
            "preenchimento ".repeat(5)
        );
        assert_eq!(pattern(&text), "Indisponibilidade");
    }

    #[test]
    fn test_prefix_takes_text_before_first_hyphen() {
        assert_eq!(prefix("Incidente - Rede instável"), "Incidente");
        assert_eq!(prefix("Mudança - Banco - Índice"), "Mudança");
    }

    #[test]
    fn test_prefix_without_hyphen_is_whole_string() {
        assert_eq!(prefix("Requisição"), "Requisição");
        assert_eq!(prefix("  Requisição  "), "Requisição");
    }

    #[test]
    fn test_prefix_empty_input_is_sentinel() {
        assert_eq!(prefix(""), UNIDENTIFIED);
    }
}
