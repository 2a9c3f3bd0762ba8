use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Reporting frameworks every document set is checked against, in gap-check order.
pub const KEY_FRAMEWORKS: [&str; 4] = ["CSRD", "ISSB", "GHG_Protocol", "TCFD"];

/// Document types expected for baseline compliance, checked after framework gaps.
pub const KEY_DOCUMENT_TYPES: [&str; 3] = ["governance_policy", "environmental_data", "esg_report"];

/// Relevance assumed for an association the processing pipeline scored but
/// left without a confidence value.
pub const DEFAULT_RELEVANCE: f64 = 0.5;

/// An uploaded document as returned by the document listing service.
///
/// The analyzer treats these as read-only input; every field beyond `id` is
/// optional because upstream processing may still be in flight.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub document_type: Option<String>,
    #[serde(default)]
    pub compliance_frameworks: Vec<FrameworkAssociation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uploaded_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub processing_status: Option<ProcessingStatus>,
}

/// A detected link between a document and a reporting framework.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameworkAssociation {
    pub framework: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relevance_score: Option<f64>,
}

impl FrameworkAssociation {
    /// Relevance with defaulting and clamping applied: absent or NaN scores
    /// fall back to [`DEFAULT_RELEVANCE`], out-of-range scores snap to the
    /// nearest bound.
    pub fn effective_relevance(&self) -> f64 {
        match self.relevance_score {
            Some(score) if !score.is_nan() => score.clamp(0.0, 1.0),
            _ => DEFAULT_RELEVANCE,
        }
    }
}

/// Processing lifecycle reported by the upload status endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProcessingStatus {
    Pending,
    Processing,
    Completed,
    Failed,
}

impl ProcessingStatus {
    /// Terminal states end the upload polling loop.
    pub fn is_terminal(self) -> bool {
        matches!(self, ProcessingStatus::Completed | ProcessingStatus::Failed)
    }
}

/// Gap severity; framework gaps are always high, document-type gaps medium.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    High,
    Medium,
}

/// Which kind of evidence a gap or recommendation concerns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GapKind {
    Framework,
    Document,
}

/// A missing piece of baseline compliance evidence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Gap {
    #[serde(rename_all = "camelCase")]
    Framework {
        framework: String,
        severity: Severity,
        description: String,
    },
    #[serde(rename_all = "camelCase")]
    Document {
        doc_type: String,
        severity: Severity,
        description: String,
    },
}

impl Gap {
    pub fn severity(&self) -> Severity {
        match self {
            Gap::Framework { severity, .. } | Gap::Document { severity, .. } => *severity,
        }
    }

    pub fn description(&self) -> &str {
        match self {
            Gap::Framework { description, .. } | Gap::Document { description, .. } => description,
        }
    }

    pub fn kind(&self) -> GapKind {
        match self {
            Gap::Framework { .. } => GapKind::Framework,
            Gap::Document { .. } => GapKind::Document,
        }
    }
}

/// A suggested action derived from a gap, same ordering as its source gap.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    #[serde(rename = "type")]
    pub kind: GapKind,
    pub priority: Severity,
    pub title: String,
    pub description: String,
}

/// Qualitative coverage grade derived from average relevance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CoverageStatus {
    Good,
    Fair,
    Poor,
}

impl CoverageStatus {
    pub fn from_relevance(average_relevance: f64) -> Self {
        if average_relevance > 0.7 {
            CoverageStatus::Good
        } else if average_relevance > 0.4 {
            CoverageStatus::Fair
        } else {
            CoverageStatus::Poor
        }
    }
}

/// Aggregated evidence for one framework across the whole document set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameworkCoverage {
    pub framework: String,
    /// Number of framework associations folded in, not distinct documents.
    pub document_count: u32,
    /// Arithmetic mean of effective relevance over all contributing associations.
    pub average_relevance: f64,
    /// Percentage estimate: 25 points per associated document, capped at 100.
    pub completeness: u32,
    pub status: CoverageStatus,
}

/// Output of the compliance analyzer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    /// Integer score in [0, 100].
    pub overall_score: u32,
    /// One entry per distinct framework observed, in first-seen order.
    pub framework_coverage: Vec<FrameworkCoverage>,
    /// At most 5, framework gaps before document gaps, detection order.
    pub gaps: Vec<Gap>,
    /// At most 4, mirroring gap order and severity.
    pub recommendations: Vec<Recommendation>,
}
