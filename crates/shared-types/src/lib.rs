pub mod chat;
pub mod types;

pub use chat::{ChatResponse, ChatSource};
pub use types::{
    AnalysisResult, CoverageStatus, Document, FrameworkAssociation, FrameworkCoverage, Gap,
    GapKind, ProcessingStatus, Recommendation, Severity, KEY_DOCUMENT_TYPES, KEY_FRAMEWORKS,
};
