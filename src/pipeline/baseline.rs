use super::span::find_span;
use super::types::{Claim, Draft, StructuredSummary};

/// Fixed patient-facing paragraph. The baseline never generates per-note
/// language; the paragraph only describes what an ED chest-pain note covers.
const BASELINE_PATIENT_SUMMARY: &str =
    "This note describes a visit to the emergency department for chest pain. \
     The clinician documented the symptoms, vital signs, ECG and lab results, \
     and a plan for next steps.";

/// Deterministic fallback drafter.
///
/// Extracts summary fields by case-insensitive line-prefix matching over the
/// non-empty trimmed lines of the note. Chief complaint defaults to
/// "Chest pain" when no `cc:` line exists; every other missing field is an
/// empty string. Always succeeds.
pub fn draft_baseline(note: &str) -> Draft {
    let lines: Vec<&str> = note
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect();

    let cc_line = first_with_prefix(&lines, "cc:");
    let ekg_line = first_with_prefix(&lines, "ecg:").unwrap_or("");
    let labs_line = first_with_prefix(&lines, "labs:").unwrap_or("");

    let summary = StructuredSummary {
        chief_complaint: cc_line
            .map(after_colon)
            .unwrap_or_else(|| "Chest pain".to_string()),
        hpi: join_with_prefix(&lines, "hpi:"),
        pmh: join_presenting_lines(&lines),
        vitals: first_with_prefix(&lines, "vitals:")
            .unwrap_or("")
            .to_string(),
        exam: join_with_prefix(&lines, "exam:"),
        ekg: ekg_line.to_string(),
        labs: labs_line.to_string(),
        assessment: first_with_prefix(&lines, "assessment:")
            .map(after_colon)
            .unwrap_or_default(),
        plan: first_with_prefix(&lines, "plan:")
            .map(after_colon)
            .unwrap_or_default(),
    };

    // Candidate claims from the obvious lines. Pairs whose line cannot be
    // located in the note are dropped here, before citation building.
    let claims = [
        ("Chief complaint is chest pain", cc_line.unwrap_or("")),
        ("ECG findings were documented", ekg_line),
        ("Troponin result was documented", labs_line),
    ]
    .into_iter()
    .filter(|(_, snippet)| !snippet.is_empty() && find_span(note, snippet).is_some())
    .map(|(claim, snippet)| Claim {
        claim: claim.to_string(),
        evidence_snippet: snippet.to_string(),
    })
    .collect();

    Draft {
        summary,
        patient_summary: BASELINE_PATIENT_SUMMARY.to_string(),
        claims,
    }
}

fn has_prefix(line: &str, prefix: &str) -> bool {
    line.get(..prefix.len())
        .is_some_and(|head| head.eq_ignore_ascii_case(prefix))
}

/// First line starting with `prefix`, case-insensitive, whole line returned.
fn first_with_prefix<'a>(lines: &[&'a str], prefix: &str) -> Option<&'a str> {
    lines.iter().copied().find(|l| has_prefix(l, prefix))
}

/// All lines starting with `prefix`, joined by single spaces.
fn join_with_prefix(lines: &[&str], prefix: &str) -> String {
    lines
        .iter()
        .copied()
        .filter(|l| has_prefix(l, prefix))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Past medical history heuristic: narrative lines of the form
/// "... presents with ..." carry the history in free-text ED notes.
fn join_presenting_lines(lines: &[&str]) -> String {
    lines
        .iter()
        .copied()
        .filter(|l| {
            let lower = l.to_lowercase();
            lower.contains("presents") && lower.contains("with")
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Value after the first colon, trimmed. Empty when the line has no colon.
fn after_colon(line: &str) -> String {
    line.split_once(':')
        .map(|(_, rest)| rest.trim().to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    const NOTE: &str = "CC: chest pain\n\
                        HPI: 58M presents with substernal chest pain x2h\n\
                        Vitals: BP 152/90, HR 96\n\
                        Exam: diaphoretic, lungs clear\n\
                        ECG: ST depression noted in V4-V6\n\
                        Labs: Troponin 0.08\n\
                        Assessment: possible ACS\n\
                        Plan: serial troponins, cardiology consult";

    #[test]
    fn extracts_prefixed_fields() {
        let draft = draft_baseline(NOTE);
        assert_eq!(draft.summary.chief_complaint, "chest pain");
        assert_eq!(
            draft.summary.hpi,
            "HPI: 58M presents with substernal chest pain x2h"
        );
        assert_eq!(draft.summary.vitals, "Vitals: BP 152/90, HR 96");
        assert_eq!(draft.summary.exam, "Exam: diaphoretic, lungs clear");
        assert_eq!(draft.summary.ekg, "ECG: ST depression noted in V4-V6");
        assert_eq!(draft.summary.labs, "Labs: Troponin 0.08");
        assert_eq!(draft.summary.assessment, "possible ACS");
        assert_eq!(draft.summary.plan, "serial troponins, cardiology consult");
    }

    #[test]
    fn pmh_picks_up_presenting_narrative() {
        let draft = draft_baseline(NOTE);
        assert!(draft.summary.pmh.contains("presents with"));
    }

    #[test]
    fn chief_complaint_defaults_when_cc_missing() {
        let draft = draft_baseline("Vitals: BP 120/80");
        assert_eq!(draft.summary.chief_complaint, "Chest pain");
    }

    #[test]
    fn empty_note_yields_defaults() {
        let draft = draft_baseline("");
        assert_eq!(draft.summary.chief_complaint, "Chest pain");
        assert!(draft.summary.hpi.is_empty());
        assert!(draft.summary.vitals.is_empty());
        assert!(draft.summary.plan.is_empty());
        assert!(draft.claims.is_empty());
    }

    #[test]
    fn prefix_matching_is_case_insensitive() {
        let draft = draft_baseline("cc: palpitations\nPLAN: observe");
        assert_eq!(draft.summary.chief_complaint, "palpitations");
        assert_eq!(draft.summary.plan, "observe");
    }

    #[test]
    fn candidate_claims_cover_cc_ecg_and_labs() {
        let draft = draft_baseline(NOTE);
        let claims: Vec<&str> = draft.claims.iter().map(|c| c.claim.as_str()).collect();
        assert_eq!(
            claims,
            vec![
                "Chief complaint is chest pain",
                "ECG findings were documented",
                "Troponin result was documented",
            ]
        );
        for claim in &draft.claims {
            assert!(find_span(NOTE, &claim.evidence_snippet).is_some());
        }
    }

    #[test]
    fn claims_skip_missing_lines() {
        let draft = draft_baseline("CC: chest pain");
        assert_eq!(draft.claims.len(), 1);
        assert_eq!(draft.claims[0].evidence_snippet, "CC: chest pain");
    }

    #[test]
    fn patient_summary_is_fixed_boilerplate() {
        let a = draft_baseline(NOTE);
        let b = draft_baseline("CC: sore throat");
        assert_eq!(a.patient_summary, b.patient_summary);
        assert!(a.patient_summary.contains("emergency department"));
    }

    #[test]
    fn drafting_is_deterministic() {
        assert_eq!(draft_baseline(NOTE), draft_baseline(NOTE));
    }

    #[test]
    fn indented_lines_are_trimmed_before_matching() {
        let draft = draft_baseline("   CC: chest pain   \n\t Labs: Troponin 0.04");
        assert_eq!(draft.summary.chief_complaint, "chest pain");
        assert_eq!(draft.summary.labs, "Labs: Troponin 0.04");
    }
}
