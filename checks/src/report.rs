use crate::outcome::CheckOutcome;

#[derive(Debug, Default, PartialEq, Eq)]
pub struct ReportSummary {
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
}

pub fn summarize(outcomes: &[CheckOutcome]) -> ReportSummary {
    let passed = outcomes.iter().filter(|outcome| outcome.passed).count();
    ReportSummary {
        total: outcomes.len(),
        passed,
        failed: outcomes.len() - passed,
    }
}

/// Status line for one check, e.g. `DemocracyTest.ZeroParties passed.`
pub fn line(outcome: &CheckOutcome) -> String {
    let verdict = if outcome.passed { "passed" } else { "failed" };
    format!("{} {verdict}.", outcome.id)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outcomes() -> Vec<CheckOutcome> {
        vec![
            CheckOutcome::pass("DemocracyTest.ZeroParties".to_string()),
            CheckOutcome::fail(
                "DemocracyTest.CountryNameCheck".to_string(),
                "expected name Electoria, got Nowhere".to_string(),
            ),
            CheckOutcome::pass("DemocracyTest.ZeroVotersCheck".to_string()),
        ]
    }

    #[test]
    fn summarizes_counts() {
        let summary = summarize(&outcomes());
        assert_eq!(summary, ReportSummary {
            total: 3,
            passed: 2,
            failed: 1,
        });
    }

    #[test]
    fn formats_status_lines() {
        let outcomes = outcomes();
        assert_eq!(line(&outcomes[0]), "DemocracyTest.ZeroParties passed.");
        assert_eq!(line(&outcomes[1]), "DemocracyTest.CountryNameCheck failed.");
    }

    #[test]
    fn empty_run_summarizes_to_zero() {
        assert_eq!(summarize(&[]), ReportSummary::default());
    }
}
