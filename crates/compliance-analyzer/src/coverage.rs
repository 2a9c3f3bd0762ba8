//! Folding documents into per-framework coverage totals.

use std::collections::HashSet;

use shared_types::{CoverageStatus, Document, FrameworkCoverage};

/// Running totals for one framework while documents are folded in.
#[derive(Debug, Clone)]
pub(crate) struct CoverageAccumulator {
    pub framework: String,
    pub document_count: u32,
    pub total_relevance: f64,
}

impl CoverageAccumulator {
    fn new(framework: &str) -> Self {
        Self {
            framework: framework.to_string(),
            document_count: 0,
            total_relevance: 0.0,
        }
    }

    fn fold(&mut self, relevance: f64) {
        self.document_count += 1;
        self.total_relevance += relevance;
    }

    pub fn average_relevance(&self) -> f64 {
        self.total_relevance / f64::from(self.document_count)
    }

    fn finish(&self) -> FrameworkCoverage {
        let average_relevance = self.average_relevance();
        FrameworkCoverage {
            framework: self.framework.clone(),
            document_count: self.document_count,
            average_relevance,
            completeness: (self.document_count * 25).min(100),
            status: CoverageStatus::from_relevance(average_relevance),
        }
    }
}

/// Everything one pass over the document set yields: coverage totals in
/// first-seen framework order, the set of observed document types, and the
/// raw document count.
#[derive(Debug, Default)]
pub(crate) struct DocumentSurvey {
    pub coverage: Vec<CoverageAccumulator>,
    pub document_types: HashSet<String>,
    pub total_documents: usize,
}

impl DocumentSurvey {
    pub fn distinct_frameworks(&self) -> usize {
        self.coverage.len()
    }

    pub fn has_framework(&self, framework: &str) -> bool {
        self.coverage.iter().any(|acc| acc.framework == framework)
    }

    pub fn coverage_table(&self) -> Vec<FrameworkCoverage> {
        self.coverage.iter().map(CoverageAccumulator::finish).collect()
    }
}

/// Single fold over all documents. Association order within a document and
/// document order in the input determine first-seen framework order.
pub(crate) fn survey(documents: &[Document]) -> DocumentSurvey {
    let mut result = DocumentSurvey {
        total_documents: documents.len(),
        ..Default::default()
    };

    for doc in documents {
        if let Some(doc_type) = &doc.document_type {
            result.document_types.insert(doc_type.clone());
        }

        for assoc in &doc.compliance_frameworks {
            let relevance = assoc.effective_relevance();
            match result
                .coverage
                .iter_mut()
                .find(|acc| acc.framework == assoc.framework)
            {
                Some(acc) => acc.fold(relevance),
                None => {
                    let mut acc = CoverageAccumulator::new(&assoc.framework);
                    acc.fold(relevance);
                    result.coverage.push(acc);
                }
            }
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use shared_types::FrameworkAssociation;

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
    fn test_empty_input_yields_empty_survey() {
        let survey = survey(&[]);
        assert_eq!(survey.total_documents, 0);
        assert_eq!(survey.distinct_frameworks(), 0);
        assert!(survey.document_types.is_empty());
    }

    #[test]
    fn test_running_mean_over_multiple_associations() {
        let docs = vec![
            doc("a", None, &[("CSRD", Some(0.9))]),
            doc("b", None, &[("CSRD", Some(0.5))]),
            doc("c", None, &[("CSRD", None)]), // defaults to 0.5
        ];
        let survey = survey(&docs);
        let acc = &survey.coverage[0];
        assert_eq!(acc.document_count, 3);
        assert!((acc.average_relevance() - (1.9 / 3.0)).abs() < 1e-9);
    }

    #[test]
    fn test_first_seen_framework_order_preserved() {
        let docs = vec![
            doc("a", None, &[("TCFD", Some(0.6)), ("CSRD", Some(0.8))]),
            doc("b", None, &[("ISSB", Some(0.7)), ("TCFD", Some(0.4))]),
        ];
        let survey = survey(&docs);
        let order: Vec<&str> = survey
            .coverage
            .iter()
            .map(|acc| acc.framework.as_str())
            .collect();
        assert_eq!(order, vec!["TCFD", "CSRD", "ISSB"]);
    }

    #[test]
    fn test_completeness_caps_at_100() {
        let assocs: Vec<(&str, Option<f64>)> = vec![("CSRD", Some(0.8)); 6];
        let docs = vec![doc("a", None, &assocs)];
        let table = survey(&docs).coverage_table();
        assert_eq!(table[0].completeness, 100);
    }

    #[test]
    fn test_document_types_collected() {
        let docs = vec![
            doc("a", Some("esg_report"), &[]),
            doc("b", Some("esg_report"), &[]),
            doc("c", None, &[]),
        ];
        let survey = survey(&docs);
        assert_eq!(survey.document_types.len(), 1);
        assert!(survey.document_types.contains("esg_report"));
    }
}
