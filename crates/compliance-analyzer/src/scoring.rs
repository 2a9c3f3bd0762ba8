//! Overall-score presets.
//!
//! The product historically scored compliance two different ways: the
//! insights view weights raw document count, framework breadth, and
//! document-type diversity; the dashboard view weights framework breadth
//! more heavily and grants a flat base for having any documents at all.
//! Both formulas are kept as named presets so callers get the exact score
//! their view always showed.

use serde::{Deserialize, Serialize};

use crate::coverage::DocumentSurvey;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoringPreset {
    /// `min(docs*5,30) + min(frameworks*15,50) + min(types*4,20)`.
    #[default]
    Insights,
    /// `min(frameworks*15,60) + min(types*10,30) + 10`, zero when no documents.
    Dashboard,
}

impl ScoringPreset {
    /// Compute the overall score for a surveyed document set. Always in [0, 100].
    pub(crate) fn score(self, survey: &DocumentSurvey) -> u32 {
        let documents = survey.total_documents as u32;
        let frameworks = survey.distinct_frameworks() as u32;
        let doc_types = survey.document_types.len() as u32;

        match self {
            ScoringPreset::Insights => {
                let document_score = (documents * 5).min(30);
                let framework_score = (frameworks * 15).min(50);
                let diversity_score = (doc_types * 4).min(20);
                (document_score + framework_score + diversity_score).min(100)
            }
            ScoringPreset::Dashboard => {
                if documents == 0 {
                    return 0;
                }
                let framework_score = (frameworks * 15).min(60);
                let document_score = (doc_types * 10).min(30);
                (framework_score + document_score + 10).min(100)
            }
        }
    }
}
