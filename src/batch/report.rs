use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;

use crate::analysis::{BiRads, ExamAnalysis, FindingCategory};

/// A report that could not be analyzed, with the reason it was skipped.
#[derive(Debug, Clone)]
pub struct FailedReport {
    pub path: PathBuf,
    pub error: String,
}

/// Aggregate result of a batch run.
#[derive(Debug, Default)]
pub struct BatchSummary {
    analyzed: usize,
    failures: Vec<FailedReport>,
    findings_present: BTreeMap<FindingCategory, usize>,
    birads_counts: BTreeMap<BiRads, usize>,
    birads_unclassified: usize,
}

impl BatchSummary {
    /// Record one successful analysis.
    pub fn record_success(&mut self, analysis: &ExamAnalysis) {
        self.analyzed += 1;

        for category in FindingCategory::all() {
            if analysis.finding(*category).present {
                *self.findings_present.entry(*category).or_insert(0) += 1;
            }
        }

        match BiRads::parse(&analysis.bi_rads) {
            Some(category) => *self.birads_counts.entry(category).or_insert(0) += 1,
            None => self.birads_unclassified += 1,
        }
    }

    /// Record one skipped report.
    pub fn record_failure(&mut self, path: PathBuf, error: String) {
        self.failures.push(FailedReport { path, error });
    }

    pub fn analyzed(&self) -> usize {
        self.analyzed
    }

    pub fn failed(&self) -> usize {
        self.failures.len()
    }

    pub fn failures(&self) -> &[FailedReport] {
        &self.failures
    }

    /// Analyses whose normalized BI-RADS warrants tissue diagnosis.
    pub fn suspicious(&self) -> usize {
        self.birads_counts
            .iter()
            .filter(|(category, _)| category.is_suspicious())
            .map(|(_, count)| count)
            .sum()
    }
}

impl fmt::Display for BatchSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Batch Analysis Summary")?;
        writeln!(f, "======================")?;
        writeln!(f)?;
        writeln!(f, "Reports analyzed: {}", self.analyzed)?;
        writeln!(f, "Reports failed:   {}", self.failed())?;
        if self.suspicious() > 0 {
            writeln!(f, "Suspicious (BI-RADS >= 4): {}", self.suspicious())?;
        }

        if !self.findings_present.is_empty() {
            writeln!(f)?;
            writeln!(f, "Findings present")?;
            writeln!(f, "----------------")?;
            for (category, count) in &self.findings_present {
                writeln!(f, "{:<20} {}", format!("{category}:"), count)?;
            }
        }

        if !self.birads_counts.is_empty() || self.birads_unclassified > 0 {
            writeln!(f)?;
            writeln!(f, "BI-RADS distribution")?;
            writeln!(f, "--------------------")?;
            for (category, count) in &self.birads_counts {
                writeln!(f, "{:<20} {}", format!("{category}:"), count)?;
            }
            if self.birads_unclassified > 0 {
                writeln!(f, "{:<20} {}", "unclassified:", self.birads_unclassified)?;
            }
        }

        if !self.failures.is_empty() {
            writeln!(f)?;
            writeln!(f, "Failures")?;
            writeln!(f, "--------")?;
            for failure in &self.failures {
                writeln!(f, "{}: {}", failure.path.display(), failure.error)?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::Finding;

    fn analysis(bi_rads: &str, nodule_present: bool) -> ExamAnalysis {
        ExamAnalysis {
            nodule: Finding {
                present: nodule_present,
                details: "nódulo sólido, 12mm".into(),
            },
            bi_rads: bi_rads.into(),
            ..Default::default()
        }
    }

    #[test]
    fn counts_accumulate_across_reports() {
        let mut summary = BatchSummary::default();
        summary.record_success(&analysis("2", false));
        summary.record_success(&analysis("4A", true));
        summary.record_success(&analysis("não informado", true));
        summary.record_failure(PathBuf::from("bad.txt"), "boom".into());

        assert_eq!(summary.analyzed(), 3);
        assert_eq!(summary.failed(), 1);
        assert_eq!(summary.suspicious(), 1);
        assert_eq!(summary.birads_unclassified, 1);
        assert_eq!(
            summary.findings_present.get(&FindingCategory::Nodule),
            Some(&2)
        );
        assert_eq!(summary.findings_present.get(&FindingCategory::Cyst), None);
    }

    #[test]
    fn display_includes_counts_and_failures() {
        let mut summary = BatchSummary::default();
        summary.record_success(&analysis("4B", true));
        summary.record_failure(PathBuf::from("exam_007.txt"), "JSON parsing error".into());

        let output = summary.to_string();
        assert!(output.contains("Batch Analysis Summary"));
        assert!(output.contains("Reports analyzed: 1"));
        assert!(output.contains("Reports failed:   1"));
        assert!(output.contains("Suspicious (BI-RADS >= 4): 1"));
        assert!(output.contains("nodulo:"));
        assert!(output.contains("4B:"));
        assert!(output.contains("exam_007.txt: JSON parsing error"));
    }

    #[test]
    fn empty_summary_has_no_optional_sections() {
        let output = BatchSummary::default().to_string();
        assert!(output.contains("Reports analyzed: 0"));
        assert!(!output.contains("Findings present"));
        assert!(!output.contains("BI-RADS distribution"));
        assert!(!output.contains("Failures"));
    }
}
