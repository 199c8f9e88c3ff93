use std::sync::LazyLock;

use regex::Regex;

/// One red-flag rule: every pattern must match somewhere in the note.
///
/// Rules run on the raw note text, never on drafted output, so a drafting
/// error cannot suppress a warning.
struct RedFlagRule {
    all_of: Vec<Regex>,
    warning: &'static str,
}

/// Fixed keyword rules for ED chest-pain notes. Substring semantics: the
/// troponin rule's `0\.` deliberately treats any decimal-looking token near a
/// troponin mention as a numeric result.
static RED_FLAG_RULES: LazyLock<Vec<RedFlagRule>> = LazyLock::new(|| {
    vec![
        rule(
            &[r"(?i)st depressions?"],
            "ECG shows ST depression — consider ischemia; escalate per protocol.",
        ),
        rule(
            &[r"(?i)troponin", r"(?i)elevated|0\."],
            "Troponin appears elevated — treat as possible ACS; consider serial troponins.",
        ),
        rule(
            &[r"(?i)diaphoretic|diaphoresis"],
            "Diaphoresis with chest pain is concerning — monitor closely.",
        ),
        rule(
            &[r"(?i)radiating", r"(?i)arm"],
            "Radiation to arm is concerning for ACS — prioritize evaluation.",
        ),
    ]
});

fn rule(patterns: &[&str], warning: &'static str) -> RedFlagRule {
    RedFlagRule {
        all_of: patterns
            .iter()
            .map(|p| Regex::new(p).expect("Invalid red-flag pattern"))
            .collect(),
        warning,
    }
}

/// Scan a note for red-flag keywords.
///
/// Each rule fires at most once; the returned order follows the rule table.
/// Returns an empty vec when nothing matches. Purely functional.
pub fn detect_red_flags(note: &str) -> Vec<String> {
    RED_FLAG_RULES
        .iter()
        .filter(|r| r.all_of.iter().all(|p| p.is_match(note)))
        .map(|r| r.warning.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn st_depression_flags_ischemia() {
        let flags = detect_red_flags("ECG: ST depression noted in V4-V6");
        assert_eq!(flags.len(), 1);
        assert!(flags[0].contains("ST depression"));
    }

    #[test]
    fn st_depressions_plural_also_flags() {
        let flags = detect_red_flags("ecg shows st depressions laterally");
        assert_eq!(flags.len(), 1);
        assert!(flags[0].contains("ST depression"));
    }

    #[test]
    fn troponin_with_decimal_value_flags_acs() {
        let flags = detect_red_flags("Labs: Troponin 0.08 ng/mL");
        assert!(flags.iter().any(|f| f.contains("Troponin")));
    }

    #[test]
    fn troponin_with_elevated_flags_acs() {
        let flags = detect_red_flags("troponin elevated on repeat draw");
        assert!(flags.iter().any(|f| f.contains("Troponin")));
    }

    #[test]
    fn troponin_without_value_or_elevated_does_not_flag() {
        let flags = detect_red_flags("Labs: troponin pending");
        assert!(flags.is_empty());
    }

    #[test]
    fn diaphoresis_flags_monitoring() {
        assert_eq!(detect_red_flags("Patient diaphoretic on arrival").len(), 1);
        assert_eq!(detect_red_flags("noted diaphoresis and pallor").len(), 1);
    }

    #[test]
    fn radiation_to_arm_flags_acs() {
        let flags = detect_red_flags("pain radiating to the left arm");
        assert_eq!(flags.len(), 1);
        assert!(flags[0].contains("Radiation to arm"));
    }

    #[test]
    fn radiating_without_arm_does_not_flag() {
        assert!(detect_red_flags("pain radiating to the jaw").is_empty());
    }

    #[test]
    fn detection_is_case_insensitive() {
        assert!(!detect_red_flags("DIAPHORETIC").is_empty());
        assert!(!detect_red_flags("St Depression").is_empty());
    }

    #[test]
    fn benign_note_produces_no_flags() {
        assert!(detect_red_flags("CC: sore throat").is_empty());
    }

    #[test]
    fn empty_note_produces_no_flags() {
        assert!(detect_red_flags("").is_empty());
    }

    #[test]
    fn scenario_note_triggers_both_expected_flags() {
        let note = "CC: chest pain\nECG: ST depression noted\nLabs: Troponin 0.08";
        let flags = detect_red_flags(note);
        assert_eq!(flags.len(), 2);
        assert!(flags[0].contains("ST depression"));
        assert!(flags[1].contains("Troponin"));
    }

    #[test]
    fn flag_set_is_order_independent() {
        let a = detect_red_flags("Troponin 0.12 after ST depression seen");
        let b = detect_red_flags("ST depression seen, then Troponin 0.12");
        let mut a_sorted = a.clone();
        let mut b_sorted = b.clone();
        a_sorted.sort();
        b_sorted.sort();
        assert_eq!(a_sorted, b_sorted);
        assert_eq!(a.len(), 2);
    }

    #[test]
    fn each_rule_fires_at_most_once() {
        let flags = detect_red_flags("diaphoretic, diaphoresis, still diaphoretic");
        assert_eq!(flags.len(), 1);
    }
}
