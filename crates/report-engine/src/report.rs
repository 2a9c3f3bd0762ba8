//! Report data shapes consumed by the report view and the JSON export.

use std::collections::BTreeMap;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use shared_types::{Gap, Recommendation};

use crate::error::ReportError;

/// Report catalog entry ids, as served by the report-types endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportType {
    Comprehensive,
    Environmental,
    Social,
    Governance,
}

impl ReportType {
    pub fn id(self) -> &'static str {
        match self {
            ReportType::Comprehensive => "comprehensive",
            ReportType::Environmental => "environmental",
            ReportType::Social => "social",
            ReportType::Governance => "governance",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ReportType::Comprehensive => "Comprehensive ESG Report",
            ReportType::Environmental => "Environmental Report",
            ReportType::Social => "Social Report",
            ReportType::Governance => "Governance Report",
        }
    }

    /// Frameworks a thematic report restricts its analysis table to.
    /// `None` keeps every observed framework.
    pub fn framework_filter(self) -> Option<&'static [&'static str]> {
        match self {
            ReportType::Comprehensive => None,
            ReportType::Environmental => Some(&["GHG_Protocol", "TCFD"]),
            ReportType::Social => Some(&["CSRD", "ISSB"]),
            ReportType::Governance => Some(&["CSRD", "ISSB", "TCFD"]),
        }
    }

    pub fn all() -> [ReportType; 4] {
        [
            ReportType::Comprehensive,
            ReportType::Environmental,
            ReportType::Social,
            ReportType::Governance,
        ]
    }
}

impl FromStr for ReportType {
    type Err = ReportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "comprehensive" => Ok(ReportType::Comprehensive),
            "environmental" => Ok(ReportType::Environmental),
            "social" => Ok(ReportType::Social),
            "governance" => Ok(ReportType::Governance),
            other => Err(ReportError::UnknownReportType(other.to_string())),
        }
    }
}

/// Four-level grade shown per framework in the report view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnalysisStatus {
    Excellent,
    Good,
    Fair,
    Poor,
}

impl AnalysisStatus {
    /// Graded from the completeness percentage, matching the report view's
    /// 80/60/40 breakpoints.
    pub fn from_coverage(coverage: u32) -> Self {
        if coverage > 80 {
            AnalysisStatus::Excellent
        } else if coverage > 60 {
            AnalysisStatus::Good
        } else if coverage > 40 {
            AnalysisStatus::Fair
        } else {
            AnalysisStatus::Poor
        }
    }
}

/// Headline numbers of a generated report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportSummary {
    pub total_documents: usize,
    pub frameworks_covered: Vec<String>,
    pub overall_score: u32,
    pub data_quality: String,
}

/// Per-framework section of a generated report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameworkAnalysis {
    /// Completeness percentage, 0 when the framework has no evidence.
    pub coverage: u32,
    pub documents_count: u32,
    pub status: AnalysisStatus,
    pub gaps: Vec<String>,
}

/// A generated compliance report.
///
/// The summary and framework table are presentation layers over an
/// [`AnalysisResult`]; scores are never re-derived with different constants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplianceReport {
    pub id: String,
    pub report_type: ReportType,
    pub generated_at: DateTime<Utc>,
    pub summary: ReportSummary,
    pub framework_analysis: BTreeMap<String, FrameworkAnalysis>,
    pub gaps: Vec<Gap>,
    pub recommendations: Vec<Recommendation>,
}

impl ComplianceReport {
    /// Pretty-printed JSON, as downloaded by the export action.
    pub fn to_json_pretty(&self) -> Result<String, ReportError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Suggested filename for the JSON download.
    pub fn export_filename(&self) -> String {
        format!(
            "esg-report-{}-{}.json",
            self.report_type.id(),
            self.generated_at.format("%Y-%m-%d")
        )
    }
}

/// History entry shape served by the reports listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportRecord {
    pub id: String,
    pub report_type: ReportType,
    pub generated_at: DateTime<Utc>,
    pub status: ReportStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportStatus {
    Generating,
    Completed,
    Failed,
}

impl From<&ComplianceReport> for ReportRecord {
    fn from(report: &ComplianceReport) -> Self {
        Self {
            id: report.id.clone(),
            report_type: report.report_type,
            generated_at: report.generated_at,
            status: ReportStatus::Completed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_report_type_round_trip() {
        for report_type in ReportType::all() {
            assert_eq!(report_type.id().parse::<ReportType>().unwrap(), report_type);
        }
    }

    #[test]
    fn test_unknown_report_type_is_an_error() {
        let err = "quarterly".parse::<ReportType>().unwrap_err();
        assert!(matches!(err, ReportError::UnknownReportType(ref t) if t == "quarterly"));
    }

    #[test]
    fn test_analysis_status_breakpoints() {
        assert_eq!(AnalysisStatus::from_coverage(100), AnalysisStatus::Excellent);
        assert_eq!(AnalysisStatus::from_coverage(81), AnalysisStatus::Excellent);
        assert_eq!(AnalysisStatus::from_coverage(80), AnalysisStatus::Good);
        assert_eq!(AnalysisStatus::from_coverage(61), AnalysisStatus::Good);
        assert_eq!(AnalysisStatus::from_coverage(50), AnalysisStatus::Fair);
        assert_eq!(AnalysisStatus::from_coverage(40), AnalysisStatus::Poor);
        assert_eq!(AnalysisStatus::from_coverage(0), AnalysisStatus::Poor);
    }
}
