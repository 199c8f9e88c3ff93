use serde_json::Value;

use super::types::{Claim, Draft, StructuredSummary};
use super::DraftError;

/// Parse the model's completion into a draft.
///
/// Accepts bare JSON or a single ```json fenced block (models add fences
/// despite instructions). The top level must be an object carrying a
/// `structured_summary` object; summary fields and the patient summary
/// default to empty strings, and claims are parsed leniently with entries
/// missing either field skipped.
pub fn parse_draft_response(response: &str) -> Result<Draft, DraftError> {
    let payload = extract_json_payload(response);
    let value: Value =
        serde_json::from_str(payload).map_err(|e| DraftError::JsonParsing(e.to_string()))?;

    let summary_obj = value
        .get("structured_summary")
        .and_then(Value::as_object)
        .ok_or_else(|| {
            DraftError::MalformedDraft("missing structured_summary object".into())
        })?;

    let summary = StructuredSummary {
        chief_complaint: string_field(summary_obj, "chief_complaint"),
        hpi: string_field(summary_obj, "hpi"),
        pmh: string_field(summary_obj, "pmh"),
        vitals: string_field(summary_obj, "vitals"),
        exam: string_field(summary_obj, "exam"),
        ekg: string_field(summary_obj, "ekg"),
        labs: string_field(summary_obj, "labs"),
        assessment: string_field(summary_obj, "assessment"),
        plan: string_field(summary_obj, "plan"),
    };

    let patient_summary = value
        .get("patient_friendly_summary")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();

    let claims = parse_claims_lenient(value.get("key_claims"));

    Ok(Draft {
        summary,
        patient_summary,
        claims,
    })
}

fn string_field(obj: &serde_json::Map<String, Value>, key: &str) -> String {
    obj.get(key)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

/// Strip an optional ```json fence around the payload.
fn extract_json_payload(response: &str) -> &str {
    let trimmed = response.trim();
    if let Some(start) = trimmed.find("```json") {
        let body = &trimmed[start + 7..];
        if let Some(end) = body.find("```") {
            return body[..end].trim();
        }
    }
    trimmed
}

/// Parse the claim array leniently, skipping items that fail to deserialize.
fn parse_claims_lenient(value: Option<&Value>) -> Vec<Claim> {
    match value.and_then(Value::as_array) {
        None => vec![],
        Some(items) => items
            .iter()
            .filter_map(|v| serde_json::from_value(v.clone()).ok())
            .collect(),
    }
}
