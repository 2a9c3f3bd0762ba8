//! Report assembly on top of the compliance analyzer.
//!
//! This crate provides:
//! - Report catalog types (`ReportType`) and history shapes (`ReportRecord`)
//! - `ReportGenerator`, which turns a document set into a `ComplianceReport`
//! - JSON export matching the client-side download format
//!
//! Reports are presentation layers over the analyzer's output; all scores,
//! gaps, and recommendations come from the same `ComplianceAnalyzer` core.

pub mod error;
pub mod report;

pub use error::ReportError;
pub use report::{
    AnalysisStatus, ComplianceReport, FrameworkAnalysis, ReportRecord, ReportStatus,
    ReportSummary, ReportType,
};

use std::collections::BTreeMap;

use compliance_analyzer::ComplianceAnalyzer;
use shared_types::{Document, FrameworkCoverage, ProcessingStatus};

/// Assembles compliance reports from annotated document sets.
#[derive(Default)]
pub struct ReportGenerator {
    analyzer: ComplianceAnalyzer,
}

impl ReportGenerator {
    pub fn new() -> Self {
        Self {
            analyzer: ComplianceAnalyzer::new(),
        }
    }

    /// Generate a report of the requested type over `documents`.
    ///
    /// Thematic report types restrict the per-framework table to their
    /// frameworks; the summary score always reflects the full document set.
    pub fn generate(&self, documents: &[Document], report_type: ReportType) -> ComplianceReport {
        let analysis = self.analyzer.analyze(documents, &[]);

        let filter = report_type.framework_filter();
        let in_scope = |framework: &str| match filter {
            Some(frameworks) => frameworks.contains(&framework),
            None => true,
        };

        let mut framework_analysis = BTreeMap::new();
        for entry in &analysis.framework_coverage {
            if in_scope(&entry.framework) {
                framework_analysis.insert(entry.framework.clone(), framework_section(entry));
            }
        }
        // Thematic frameworks with no evidence still get a section, so the
        // report shows the hole instead of omitting the row.
        if let Some(frameworks) = filter {
            for framework in frameworks {
                framework_analysis
                    .entry((*framework).to_string())
                    .or_insert_with(|| empty_section(framework));
            }
        }

        let frameworks_covered: Vec<String> = analysis
            .framework_coverage
            .iter()
            .filter(|entry| in_scope(&entry.framework))
            .map(|entry| entry.framework.clone())
            .collect();

        let report = ComplianceReport {
            id: uuid::Uuid::new_v4().to_string(),
            report_type,
            generated_at: chrono::Utc::now(),
            summary: ReportSummary {
                total_documents: documents.len(),
                frameworks_covered,
                overall_score: analysis.overall_score,
                data_quality: data_quality(documents),
            },
            framework_analysis,
            gaps: analysis.gaps,
            recommendations: analysis.recommendations,
        };

        tracing::info!(
            report_id = %report.id,
            report_type = report_type.id(),
            documents = documents.len(),
            overall_score = report.summary.overall_score,
            "generated compliance report"
        );

        report
    }
}

fn framework_section(entry: &FrameworkCoverage) -> FrameworkAnalysis {
    let mut gaps = Vec::new();
    if entry.completeness < 100 {
        gaps.push(format!(
            "Limited evidence: {} of 4 expected documents",
            entry.document_count
        ));
    }
    if entry.average_relevance <= 0.4 {
        gaps.push(format!(
            "Low average relevance ({:.2}) across associated documents",
            entry.average_relevance
        ));
    }

    FrameworkAnalysis {
        coverage: entry.completeness,
        documents_count: entry.document_count,
        status: AnalysisStatus::from_coverage(entry.completeness),
        gaps,
    }
}

fn empty_section(framework: &str) -> FrameworkAnalysis {
    FrameworkAnalysis {
        coverage: 0,
        documents_count: 0,
        status: AnalysisStatus::Poor,
        gaps: vec![format!("No documents found for {framework} compliance")],
    }
}

/// Free-text data-quality grade based on how much of the set finished
/// processing.
fn data_quality(documents: &[Document]) -> String {
    if documents.is_empty() {
        return "Limited - no documents available".to_string();
    }

    let completed = documents
        .iter()
        .filter(|doc| doc.processing_status == Some(ProcessingStatus::Completed))
        .count();

    if completed == documents.len() {
        "High - all documents fully processed".to_string()
    } else if completed > 0 {
        format!(
            "Moderate - {completed} of {} documents fully processed",
            documents.len()
        )
    } else {
        "Limited - document processing still in progress".to_string()
    }
}
