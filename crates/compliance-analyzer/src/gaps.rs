//! Gap detection and recommendation derivation.

use shared_types::{Gap, GapKind, Recommendation, Severity, KEY_DOCUMENT_TYPES, KEY_FRAMEWORKS};

use crate::coverage::DocumentSurvey;

/// Gaps returned to callers are truncated in detection order, framework
/// gaps first. A later document-type gap can be dropped even though an
/// earlier framework gap made the cut; that matches the shipped behavior.
pub(crate) const MAX_GAPS: usize = 5;
pub(crate) const MAX_RECOMMENDATIONS: usize = 4;

/// Check the canonical framework and document-type lists against the
/// surveyed set. The canonical lists, not the caller-provided framework
/// catalog, are the source of truth here.
pub(crate) fn detect(survey: &DocumentSurvey) -> (Vec<Gap>, Vec<Recommendation>) {
    let mut gaps = Vec::new();
    let mut recommendations = Vec::new();

    for framework in KEY_FRAMEWORKS {
        if !survey.has_framework(framework) {
            gaps.push(Gap::Framework {
                framework: framework.to_string(),
                severity: Severity::High,
                description: format!("No documents found for {framework} compliance"),
            });
            recommendations.push(Recommendation {
                kind: GapKind::Framework,
                priority: Severity::High,
                title: format!("Implement {framework} Reporting"),
                description: format!(
                    "Upload or create documents that address {framework} requirements"
                ),
            });
        }
    }

    for doc_type in KEY_DOCUMENT_TYPES {
        if !survey.document_types.contains(doc_type) {
            let label = doc_type.replace('_', " ");
            gaps.push(Gap::Document {
                doc_type: doc_type.to_string(),
                severity: Severity::Medium,
                description: format!("Missing {label} documentation"),
            });
            recommendations.push(Recommendation {
                kind: GapKind::Document,
                priority: Severity::Medium,
                title: format!("Add {label}"),
                description: format!("Upload documents related to {label}"),
            });
        }
    }

    gaps.truncate(MAX_GAPS);
    recommendations.truncate(MAX_RECOMMENDATIONS);
    (gaps, recommendations)
}
