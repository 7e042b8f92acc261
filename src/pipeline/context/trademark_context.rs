use std::sync::Arc;
use std::time::{Duration, Instant};

use uuid::Uuid;

use crate::classifier::DesignCodeClassifier;
use crate::domain::ClassificationResult;
use crate::pipeline::context::metrics::CheckMetrics;
use crate::pipeline::context::state::{
    AnalyzedState, ClassifiedState, ProcessingState, ResolvedState, UploadedState,
};
use crate::pipeline::report::TrademarkReport;
use crate::registry::RegistryRecord;
use crate::upload::ImageUpload;
use crate::vision::VisionAnalysis;

// TrademarkContext with compile-time state tracking via the state marker
pub struct TrademarkContext<S> {
    request_id: Uuid,
    upload: Arc<ImageUpload>,
    metrics: CheckMetrics,
    processing_start: Instant,
    stage_start: Instant,
    state: S,
}

impl<S: ProcessingState> TrademarkContext<S> {
    fn advance<T>(
        self,
        next: impl FnOnce(S) -> T,
        record: fn(&mut CheckMetrics, Duration),
    ) -> TrademarkContext<T> {
        let mut metrics = self.metrics;
        record(&mut metrics, self.stage_start.elapsed());
        TrademarkContext {
            request_id: self.request_id,
            upload: self.upload,
            metrics,
            processing_start: self.processing_start,
            stage_start: Instant::now(),
            state: next(self.state),
        }
    }

    pub fn request_id(&self) -> Uuid {
        self.request_id
    }

    pub fn upload(&self) -> &ImageUpload {
        &self.upload
    }

    pub fn metrics(&self) -> &CheckMetrics {
        &self.metrics
    }

    pub fn elapsed(&self) -> Duration {
        self.processing_start.elapsed()
    }

    pub fn state_name(&self) -> &'static str {
        S::state_name()
    }
}

impl TrademarkContext<UploadedState> {
    pub fn new(upload: ImageUpload) -> Self {
        let now = Instant::now();
        Self {
            request_id: Uuid::new_v4(),
            upload: Arc::new(upload),
            metrics: CheckMetrics::new(),
            processing_start: now,
            stage_start: now,
            state: UploadedState,
        }
    }

    pub fn into_analyzed(self, analysis: VisionAnalysis) -> TrademarkContext<AnalyzedState> {
        self.advance(
            |_| AnalyzedState { analysis },
            CheckMetrics::record_vision_duration,
        )
    }
}

impl TrademarkContext<AnalyzedState> {
    pub fn analysis(&self) -> &VisionAnalysis {
        &self.state.analysis
    }

    pub fn classify(self, classifier: &DesignCodeClassifier) -> TrademarkContext<ClassifiedState> {
        let features = self.state.analysis.features();
        let codes = classifier.classify(&features, self.state.analysis.dominant_colors());
        self.into_classified(codes)
    }

    pub fn into_classified(
        self,
        codes: ClassificationResult,
    ) -> TrademarkContext<ClassifiedState> {
        self.advance(
            |state| ClassifiedState {
                analysis: state.analysis,
                codes,
            },
            CheckMetrics::record_classification_duration,
        )
    }
}

impl TrademarkContext<ClassifiedState> {
    pub fn analysis(&self) -> &VisionAnalysis {
        &self.state.analysis
    }

    pub fn codes(&self) -> &ClassificationResult {
        &self.state.codes
    }

    pub fn into_resolved(self, records: Vec<RegistryRecord>) -> TrademarkContext<ResolvedState> {
        self.advance(
            |state| ResolvedState {
                analysis: state.analysis,
                codes: state.codes,
                records,
            },
            CheckMetrics::record_registry_duration,
        )
    }
}

impl TrademarkContext<ResolvedState> {
    pub fn codes(&self) -> &ClassificationResult {
        &self.state.codes
    }

    pub fn records(&self) -> &[RegistryRecord] {
        &self.state.records
    }

    pub fn into_report(self) -> TrademarkReport {
        let ResolvedState {
            analysis,
            codes,
            records,
        } = self.state;
        TrademarkReport {
            logo_detection: analysis.logo_detections(),
            features: analysis
                .features()
                .iter()
                .filter_map(|feature| feature.text().map(str::to_string))
                .collect(),
            design_codes: codes.to_vec(),
            trademark_results: records,
        }
    }
}
