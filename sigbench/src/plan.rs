//! Benchmark plans: the ordered (algorithm, label) pairs a session runs.

#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]

use std::fmt;
use std::str::FromStr;

use crate::error::{BenchError, Result};

/// One pair to benchmark: the algorithm to open and the label written to the
/// VERSION column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanEntry {
    /// Algorithm name passed to the provider
    pub algorithm: String,
    /// Free-text tag distinguishing runs of the same algorithm
    pub label: String,
}

impl PlanEntry {
    /// Create an entry.
    #[must_use]
    pub fn new(algorithm: impl Into<String>, label: impl Into<String>) -> Self {
        Self { algorithm: algorithm.into(), label: label.into() }
    }

    /// Reject values the CSV report cannot carry unquoted.
    ///
    /// # Errors
    /// Returns [`BenchError::InvalidPlanEntry`] for empty fields or fields
    /// containing a comma, quote or line break.
    pub fn validate(&self) -> Result<()> {
        check_field(self, "algorithm", &self.algorithm)?;
        check_field(self, "label", &self.label)
    }
}

fn check_field(entry: &PlanEntry, what: &str, value: &str) -> Result<()> {
    let reason = if value.trim().is_empty() {
        format!("{what} is empty")
    } else if let Some(c) = value.chars().find(|c| matches!(c, ',' | '"' | '\n' | '\r')) {
        format!("{what} contains {c:?}")
    } else {
        return Ok(());
    };
    Err(BenchError::InvalidPlanEntry { entry: entry.to_string(), reason })
}

impl fmt::Display for PlanEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.algorithm, self.label)
    }
}

/// Parses `ALGORITHM[:LABEL]`; the label defaults to the algorithm name.
impl FromStr for PlanEntry {
    type Err = BenchError;

    fn from_str(s: &str) -> Result<Self> {
        let (algorithm, label) = match s.split_once(':') {
            Some((algorithm, label)) => (algorithm.trim(), label.trim()),
            None => (s.trim(), s.trim()),
        };
        let entry = PlanEntry::new(algorithm, label);
        entry.validate()?;
        Ok(entry)
    }
}

/// Ordered list of pairs for one session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BenchPlan {
    entries: Vec<PlanEntry>,
}

impl BenchPlan {
    /// The reference comparison: ML-DSA-44 twice (as an "optimized" and a
    /// "general" build), then ML-DSA-65, ML-DSA-87 and FN-DSA-512.
    #[must_use]
    pub fn reference() -> Self {
        Self::from_entries(vec![
            PlanEntry::new("ML-DSA-44", "Dilithium_II_Optimized"),
            PlanEntry::new("ML-DSA-44", "Dilithium_II_General"),
            PlanEntry::new("ML-DSA-65", "Dilithium_III"),
            PlanEntry::new("ML-DSA-87", "Dilithium_V"),
            PlanEntry::new("FN-DSA-512", "Falcon_512"),
        ])
    }

    /// Build a plan from explicit entries, keeping their order.
    #[must_use]
    pub fn from_entries(entries: Vec<PlanEntry>) -> Self {
        Self { entries }
    }

    /// Entries in run order
    #[must_use]
    pub fn entries(&self) -> &[PlanEntry] {
        &self.entries
    }

    /// Iterate entries in run order
    pub fn iter(&self) -> std::slice::Iter<'_, PlanEntry> {
        self.entries.iter()
    }

    /// Number of entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if the plan has no entries
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Validate every entry.
    ///
    /// # Errors
    /// Returns the first entry error, or [`BenchError::Configuration`] for an empty plan.
    pub fn validate(&self) -> Result<()> {
        if self.entries.is_empty() {
            return Err(BenchError::Configuration("benchmark plan is empty".to_string()));
        }
        self.entries.iter().try_for_each(PlanEntry::validate)
    }
}

impl Default for BenchPlan {
    fn default() -> Self {
        Self::reference()
    }
}

impl<'a> IntoIterator for &'a BenchPlan {
    type Item = &'a PlanEntry;
    type IntoIter = std::slice::Iter<'a, PlanEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_plan_order() {
        let plan = BenchPlan::reference();
        let pairs: Vec<(&str, &str)> =
            plan.iter().map(|e| (e.algorithm.as_str(), e.label.as_str())).collect();
        assert_eq!(
            pairs,
            vec![
                ("ML-DSA-44", "Dilithium_II_Optimized"),
                ("ML-DSA-44", "Dilithium_II_General"),
                ("ML-DSA-65", "Dilithium_III"),
                ("ML-DSA-87", "Dilithium_V"),
                ("FN-DSA-512", "Falcon_512"),
            ]
        );
        assert!(plan.validate().is_ok());
    }

    #[test]
    fn test_parse_with_label() {
        let entry: PlanEntry = "ML-DSA-65:Level3".parse().unwrap();
        assert_eq!(entry, PlanEntry::new("ML-DSA-65", "Level3"));
    }

    #[test]
    fn test_parse_without_label_uses_algorithm() {
        let entry: PlanEntry = " Falcon-512 ".parse().unwrap();
        assert_eq!(entry, PlanEntry::new("Falcon-512", "Falcon-512"));
    }

    #[test]
    fn test_parse_rejects_csv_breaking_label() {
        let err = "ML-DSA-44:a,b".parse::<PlanEntry>().unwrap_err();
        match err {
            BenchError::InvalidPlanEntry { reason, .. } => assert_eq!(reason, "label contains ','"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_parse_rejects_empty_parts() {
        assert!(":label".parse::<PlanEntry>().is_err());
        assert!("ML-DSA-44:".parse::<PlanEntry>().is_err());
        assert!("".parse::<PlanEntry>().is_err());
    }

    #[test]
    fn test_empty_plan_is_invalid() {
        let err = BenchPlan::from_entries(Vec::new()).validate().unwrap_err();
        assert!(matches!(err, BenchError::Configuration(_)));
    }

    #[test]
    fn test_plan_iterates_by_reference() {
        let plan = BenchPlan::from_entries(vec![PlanEntry::new("X", "L")]);
        let mut seen = 0;
        for entry in &plan {
            assert_eq!(entry.label, "L");
            seen += 1;
        }
        assert_eq!(seen, plan.len());
        assert!(!plan.is_empty());
    }
}
