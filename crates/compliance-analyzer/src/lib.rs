//! Compliance scoring and gap analysis over annotated ESG documents.
//!
//! This crate provides:
//! - A single-pass fold of document/framework annotations into coverage totals
//! - Two named scoring presets (insights and dashboard weightings)
//! - Gap detection against the canonical framework and document-type lists
//! - Recommendation derivation, one per gap, in detection order
//!
//! The analyzer is a pure function of its inputs: no I/O, no shared state,
//! deterministic for identical input order, and total over well-formed input
//! (malformed optional fields degrade to defaults instead of failing).

mod coverage;
mod gaps;
mod scoring;

pub use scoring::ScoringPreset;

use shared_types::{AnalysisResult, Document};

/// ComplianceAnalyzer entry point
pub struct ComplianceAnalyzer;

impl ComplianceAnalyzer {
    pub fn new() -> Self {
        Self
    }

    /// Analyze a document set with the default (insights) scoring preset.
    ///
    /// `frameworks` is the catalog of framework names the system knows
    /// about. It is accepted for forward compatibility but does not affect
    /// gap detection, which always checks the canonical key-framework list.
    pub fn analyze(&self, documents: &[Document], frameworks: &[String]) -> AnalysisResult {
        self.analyze_with(documents, frameworks, ScoringPreset::default())
    }

    /// Analyze with an explicit scoring preset.
    pub fn analyze_with(
        &self,
        documents: &[Document],
        frameworks: &[String],
        preset: ScoringPreset,
    ) -> AnalysisResult {
        let survey = coverage::survey(documents);
        let overall_score = preset.score(&survey);
        let (gaps, recommendations) = gaps::detect(&survey);

        tracing::debug!(
            documents = survey.total_documents,
            frameworks_observed = survey.distinct_frameworks(),
            frameworks_known = frameworks.len(),
            ?preset,
            overall_score,
            gaps = gaps.len(),
            "compliance analysis complete"
        );

        AnalysisResult {
            overall_score,
            framework_coverage: survey.coverage_table(),
            gaps,
            recommendations,
        }
    }
}

impl Default for ComplianceAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use shared_types::{CoverageStatus, FrameworkAssociation, Gap, Severity};

    fn doc(id: &str, doc_type: Option<&str>, frameworks: &[(&str, Option<f64>)]) -> Document {
        Document {
            id: id.to_string(),
            filename: None,
            document_type: doc_type.map(str::to_string),
            compliance_frameworks: frameworks
                .iter()
                .map(|(name, score)| FrameworkAssociation {
                    framework: name.to_string(),
                    relevance_score: *score,
                })
                .collect(),
            uploaded_at: None,
            processing_status: None,
        }
    }

    #[test]
    fn test_empty_document_set() {
        let analyzer = ComplianceAnalyzer::new();
        let result = analyzer.analyze(&[], &[]);

        assert_eq!(result.overall_score, 0);
        assert!(result.framework_coverage.is_empty());
        assert_eq!(result.gaps.len(), 5);
        assert_eq!(result.recommendations.len(), 4);
    }

    #[test]
    fn test_single_csrd_report_scores_24() {
        let analyzer = ComplianceAnalyzer::new();
        let docs = vec![doc("doc-1", Some("esg_report"), &[("CSRD", Some(0.9))])];
        let result = analyzer.analyze(&docs, &[]);

        // 5 (document) + 15 (framework) + 4 (diversity).
        assert_eq!(result.overall_score, 24);

        assert_eq!(result.framework_coverage.len(), 1);
        let csrd = &result.framework_coverage[0];
        assert_eq!(csrd.framework, "CSRD");
        assert_eq!(csrd.document_count, 1);
        assert_eq!(csrd.completeness, 25);
        assert_eq!(csrd.status, CoverageStatus::Good);

        // ISSB, GHG_Protocol, TCFD framework gaps, then the two missing
        // document types, truncated to 5.
        assert_eq!(result.gaps.len(), 5);
        assert!(matches!(
            &result.gaps[0],
            Gap::Framework { framework, .. } if framework == "ISSB"
        ));
        assert!(matches!(
            &result.gaps[3],
            Gap::Document { doc_type, .. } if doc_type == "governance_policy"
        ));
        assert!(matches!(
            &result.gaps[4],
            Gap::Document { doc_type, .. } if doc_type == "environmental_data"
        ));
    }

    #[test]
    fn test_dashboard_preset_differs_from_insights() {
        let analyzer = ComplianceAnalyzer::new();
        let docs = vec![doc("doc-1", Some("esg_report"), &[("CSRD", Some(0.9))])];

        let insights = analyzer.analyze_with(&docs, &[], ScoringPreset::Insights);
        let dashboard = analyzer.analyze_with(&docs, &[], ScoringPreset::Dashboard);

        assert_eq!(insights.overall_score, 24);
        assert_eq!(dashboard.overall_score, 35);
        // Coverage and gaps are preset-independent.
        assert_eq!(insights.framework_coverage, dashboard.framework_coverage);
        assert_eq!(insights.gaps, dashboard.gaps);
    }

    #[test]
    fn test_framework_catalog_does_not_change_gap_detection() {
        let analyzer = ComplianceAnalyzer::new();
        let docs = vec![doc("doc-1", Some("esg_report"), &[("CSRD", Some(0.9))])];
        let catalog = vec!["CSRD".to_string(), "EU_Taxonomy".to_string()];

        let with_catalog = analyzer.analyze(&docs, &catalog);
        let without = analyzer.analyze(&docs, &[]);
        assert_eq!(with_catalog, without);
    }

    #[test]
    fn test_malformed_relevance_degrades_to_defaults() {
        let analyzer = ComplianceAnalyzer::new();
        let docs = vec![doc(
            "doc-1",
            None,
            &[
                ("CSRD", Some(f64::NAN)),
                ("CSRD", Some(3.0)),
                ("CSRD", Some(-1.0)),
            ],
        )];
        let result = analyzer.analyze(&docs, &[]);

        let csrd = &result.framework_coverage[0];
        assert_eq!(csrd.document_count, 3);
        // NaN -> 0.5, 3.0 -> 1.0, -1.0 -> 0.0.
        assert!((csrd.average_relevance - 0.5).abs() < 1e-9);
        assert_eq!(csrd.status, CoverageStatus::Fair);
    }

    #[test]
    fn test_idempotence() {
        let analyzer = ComplianceAnalyzer::new();
        let docs = vec![
            doc("a", Some("esg_report"), &[("CSRD", Some(0.9)), ("TCFD", None)]),
            doc("b", Some("environmental_data"), &[("GHG_Protocol", Some(0.3))]),
        ];
        let first = analyzer.analyze(&docs, &[]);
        let second = analyzer.analyze(&docs, &[]);
        assert_eq!(first, second);
    }

    #[test]
    fn test_unknown_frameworks_still_counted() {
        let analyzer = ComplianceAnalyzer::new();
        let docs = vec![doc("a", None, &[("EU_Taxonomy", Some(0.6))])];
        let result = analyzer.analyze(&docs, &[]);

        assert_eq!(result.framework_coverage.len(), 1);
        assert_eq!(result.framework_coverage[0].framework, "EU_Taxonomy");
        // All four canonical frameworks are still missing.
        assert_eq!(result.gaps.len(), 5);
        assert_eq!(result.gaps[0].severity(), Severity::High);
    }
}
