use serde::Deserialize;

use super::types::{ExamAnalysis, Finding, NO_REFERENCE};
use super::AnalysisError;

/// Parse the model's response into a structured analysis.
///
/// The prompt demands bare JSON, but models routinely wrap the payload in
/// Markdown code fences anyway; strip those before parsing.
pub fn parse_analysis_response(response: &str) -> Result<ExamAnalysis, AnalysisError> {
    let json_str = strip_code_fences(response);
    if json_str.is_empty() {
        return Err(AnalysisError::MalformedResponse("empty response".into()));
    }
    parse_analysis_json(json_str)
}

/// Remove optional ```json fences around the payload.
fn strip_code_fences(response: &str) -> &str {
    let mut text = response.trim();
    if let Some(rest) = text.strip_prefix("```json") {
        text = rest;
    } else if let Some(rest) = text.strip_prefix("```") {
        text = rest;
    }
    if let Some(rest) = text.strip_suffix("```") {
        text = rest;
    }
    text.trim()
}

/// Lenient mirror of the output schema. Categories the model omitted
/// default to absent; `bi_rads` tolerates a bare number.
#[derive(Deserialize)]
struct RawAnalysis {
    cisto: Option<RawFinding>,
    nodulo: Option<RawFinding>,
    calcificacao: Option<RawFinding>,
    microcalcificacao: Option<RawFinding>,
    bi_rads: Option<serde_json::Value>,
    outras_citacoes: Option<String>,
}

#[derive(Deserialize)]
struct RawFinding {
    presente: Option<bool>,
    detalhes: Option<String>,
}

fn parse_analysis_json(json_str: &str) -> Result<ExamAnalysis, AnalysisError> {
    let raw: RawAnalysis = serde_json::from_str(json_str)
        .map_err(|e| AnalysisError::JsonParsing(e.to_string()))?;

    Ok(ExamAnalysis {
        cyst: finding_or_absent(raw.cisto),
        nodule: finding_or_absent(raw.nodulo),
        calcification: finding_or_absent(raw.calcificacao),
        microcalcification: finding_or_absent(raw.microcalcificacao),
        bi_rads: scalar_to_string(raw.bi_rads),
        notes: raw
            .outras_citacoes
            .unwrap_or_else(|| NO_REFERENCE.to_string()),
    })
}

fn finding_or_absent(raw: Option<RawFinding>) -> Finding {
    match raw {
        None => Finding::default(),
        Some(f) => Finding {
            present: f.presente.unwrap_or(false),
            details: f.detalhes.unwrap_or_else(|| NO_REFERENCE.to_string()),
        },
    }
}

/// `bi_rads` arrives as a string or a bare number depending on the model.
fn scalar_to_string(value: Option<serde_json::Value>) -> String {
    match value {
        None | Some(serde_json::Value::Null) => NO_REFERENCE.to_string(),
        Some(serde_json::Value::String(s)) => s,
        Some(other) => other.to_string(),
    }
}
