//! Run reports: what a search found, in a shareable form.

use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::pattern::GradualPattern;
use crate::GradacoResult;

use super::controller::{SearchOutcome, SearchStats};

/// A winning pattern rendered with column titles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportedPattern {
    /// Items such as `"temp+"`.
    pub items: Vec<String>,
    pub support: f64,
}

impl ReportedPattern {
    fn from_pattern(pattern: &GradualPattern, titles: &[String]) -> Self {
        Self {
            items: pattern.item_labels(titles),
            support: pattern.support(),
        }
    }
}

/// Summary of one search run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchReport {
    pub run_id: Uuid,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
    pub min_support: f64,
    pub iteration_count: usize,
    pub stats: SearchStats,
    /// Winners, highest support first.
    pub patterns: Vec<ReportedPattern>,
}

impl SearchReport {
    /// Builds a report for a finished run.
    pub fn new(
        outcome: &SearchOutcome,
        titles: &[String],
        min_support: f64,
        started_at: DateTime<Utc>,
    ) -> Self {
        let mut patterns: Vec<ReportedPattern> = outcome
            .winners
            .iter()
            .map(|p| ReportedPattern::from_pattern(p, titles))
            .collect();
        patterns.sort_by(|a, b| b.support.total_cmp(&a.support));

        Self {
            run_id: Uuid::new_v4(),
            started_at,
            finished_at: Utc::now(),
            min_support,
            iteration_count: outcome.iteration_count,
            stats: outcome.stats,
            patterns,
        }
    }

    pub fn to_json(&self) -> GradacoResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Writes the report as JSON.
    pub fn save(&self, path: &Path) -> GradacoResult<()> {
        std::fs::write(path, self.to_json()?)?;
        tracing::info!(path = %path.display(), patterns = self.patterns.len(), "report saved");
        Ok(())
    }

    /// Human-readable listing of the winners.
    pub fn summary(&self) -> String {
        let mut out = format!(
            "{} gradual pattern(s) with support >= {} after {} iteration(s)\n",
            self.patterns.len(),
            self.min_support,
            self.iteration_count
        );
        for pattern in &self.patterns {
            out.push_str(&format!("  [{}] : {:.3}\n", pattern.items.join(", "), pattern.support));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pattern::GradualItem;
    use tempfile::tempdir;

    fn outcome() -> SearchOutcome {
        let mut low = GradualPattern::from_items([GradualItem::increasing(0), GradualItem::decreasing(1)]);
        low.set_support(0.6);
        let mut high = GradualPattern::from_items([GradualItem::increasing(1), GradualItem::increasing(2)]);
        high.set_support(0.9);
        SearchOutcome {
            winners: vec![low, high],
            iteration_count: 10,
            stats: SearchStats::default(),
        }
    }

    #[test]
    fn test_patterns_sorted_and_titled() {
        let titles = vec!["a".to_string(), "b".to_string()];
        let report = SearchReport::new(&outcome(), &titles, 0.5, Utc::now());

        assert_eq!(report.patterns[0].items, vec!["b+", "2+"]);
        assert_eq!(report.patterns[1].items, vec!["a+", "b-"]);
        assert!(report.finished_at >= report.started_at);
    }

    #[test]
    fn test_summary_lists_patterns() {
        let report = SearchReport::new(&outcome(), &[], 0.5, Utc::now());
        let summary = report.summary();
        assert!(summary.starts_with("2 gradual pattern(s)"));
        assert!(summary.contains("[1+, 2+] : 0.900"));
    }

    #[test]
    fn test_save_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("report.json");
        let report = SearchReport::new(&outcome(), &[], 0.5, Utc::now());
        report.save(&path).unwrap();

        let loaded: SearchReport =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(loaded.run_id, report.run_id);
        assert_eq!(loaded.patterns, report.patterns);
    }
}
