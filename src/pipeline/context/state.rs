use crate::domain::ClassificationResult;
use crate::registry::RegistryRecord;
use crate::vision::VisionAnalysis;

// Markers to track the state of a trademark check
pub struct UploadedState;
pub struct AnalyzedState {
    pub(super) analysis: VisionAnalysis,
}
pub struct ClassifiedState {
    pub(super) analysis: VisionAnalysis,
    pub(super) codes: ClassificationResult,
}
pub struct ResolvedState {
    pub(super) analysis: VisionAnalysis,
    pub(super) codes: ClassificationResult,
    pub(super) records: Vec<RegistryRecord>,
}

pub trait ProcessingState: 'static {
    fn state_name() -> &'static str;
}

impl ProcessingState for UploadedState {
    fn state_name() -> &'static str {
        "Uploaded"
    }
}

impl ProcessingState for AnalyzedState {
    fn state_name() -> &'static str {
        "Analyzed"
    }
}

impl ProcessingState for ClassifiedState {
    fn state_name() -> &'static str {
        "Classified"
    }
}

impl ProcessingState for ResolvedState {
    fn state_name() -> &'static str {
        "Resolved"
    }
}
