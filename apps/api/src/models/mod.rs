pub mod interview;
pub mod learning_path;
pub mod resume;

use crate::models::interview::MockInterviewRecord;
use crate::models::learning_path::LearningPathRecord;
use crate::models::resume::ResumeAnalysisRecord;

/// Any record a pipeline hands to the `RecordStore`.
#[derive(Debug, Clone, PartialEq)]
pub enum StoredRecord {
    LearningPath(LearningPathRecord),
    MockInterview(MockInterviewRecord),
    ResumeAnalysis(ResumeAnalysisRecord),
}

impl StoredRecord {
    pub fn kind(&self) -> &'static str {
        match self {
            StoredRecord::LearningPath(_) => "learning_path",
            StoredRecord::MockInterview(_) => "mock_interview",
            StoredRecord::ResumeAnalysis(_) => "resume_analysis",
        }
    }
}
