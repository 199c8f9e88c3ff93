/// System preamble for the drafting call. The model restructures the
/// clinician's note; it never advises.
pub const DRAFT_SYSTEM_PROMPT: &str =
    "You are an ED documentation assistant. You do NOT provide medical advice. \
     You only restructure the clinician's note and draft documentation. \
     Return STRICT JSON only.";

/// Build the drafting prompt for one note.
pub fn build_draft_prompt(note: &str) -> String {
    format!(
        r#"Input ED note:
{note}

Return JSON with keys:
- structured_summary: {{ chief_complaint, hpi, pmh, vitals, exam, ekg, labs, assessment, plan }}
- patient_friendly_summary: string (plain language, no new facts)
- key_claims: [{{claim, evidence_snippet}}] (each claim must cite a snippet copied verbatim from the note)

Rules:
- Do not invent facts.
- Keep plan generic and based only on what's already in the note.
- Evidence snippets must be exact substrings of the input note.
"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_embeds_the_note() {
        let prompt = build_draft_prompt("CC: chest pain");
        assert!(prompt.contains("CC: chest pain"));
    }

    #[test]
    fn prompt_names_all_summary_fields() {
        let prompt = build_draft_prompt("note");
        for field in [
            "chief_complaint",
            "hpi",
            "pmh",
            "vitals",
            "exam",
            "ekg",
            "labs",
            "assessment",
            "plan",
        ] {
            assert!(prompt.contains(field), "prompt missing field {field}");
        }
    }

    #[test]
    fn prompt_requires_verbatim_evidence() {
        let prompt = build_draft_prompt("note");
        assert!(prompt.contains("exact substrings"));
        assert!(prompt.contains("evidence_snippet"));
    }

    #[test]
    fn system_prompt_forbids_advice() {
        assert!(DRAFT_SYSTEM_PROMPT.contains("NOT provide medical advice"));
    }
}
