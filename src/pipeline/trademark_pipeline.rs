use std::sync::Arc;
use std::time::Duration;

use futures::future::join_all;
use tower::limit::ConcurrencyLimitLayer;
use tower::timeout::error::Elapsed;
use tower::timeout::TimeoutLayer;
use tower::util::BoxCloneService;
use tower::{BoxError, ServiceBuilder, ServiceExt};

use crate::classifier::DesignCodeClassifier;
use crate::config::Configuration;
use crate::domain::{ClassificationResult, DesignCode};
use crate::error::{AppError, VisionError};
use crate::pipeline::context::{AnalyzedState, TrademarkContext, UploadedState};
use crate::pipeline::report::TrademarkReport;
use crate::pipeline::service::{RegistryLookupService, VisionService};
use crate::registry::{RegistryLookup, RegistryRecord, UsptoRegistryClient};
use crate::upload::ImageUpload;
use crate::vision::{GoogleVisionClient, VisionAnalyzer};

type VisionStep =
    BoxCloneService<TrademarkContext<UploadedState>, TrademarkContext<AnalyzedState>, BoxError>;
type LookupStep = BoxCloneService<DesignCode, Option<RegistryRecord>, BoxError>;

const DEFAULT_REGISTRY_CONCURRENCY: usize = 8;

/// Vision analysis, then classification, then one registry lookup per code.
#[derive(Clone)]
pub struct TrademarkPipeline {
    vision: VisionStep,
    lookup: LookupStep,
    classifier: DesignCodeClassifier,
}

impl TrademarkPipeline {
    pub fn builder() -> TrademarkPipelineBuilder {
        TrademarkPipelineBuilder::new()
    }

    pub fn from_configuration(configuration: &Configuration) -> Result<Self, AppError> {
        let vision = GoogleVisionClient::new(&configuration.vision)?;
        let registry = UsptoRegistryClient::new(&configuration.registry)?;

        Self::builder()
            .vision(Arc::new(vision))
            .registry(Arc::new(registry))
            .classifier(
                DesignCodeClassifier::new()
                    .with_color_threshold(configuration.classifier.color_threshold),
            )
            .vision_timeout(configuration.vision.timeout())
            .lookup_timeout(configuration.registry.timeout())
            .registry_concurrency(configuration.registry.concurrency)
            .build()
    }

    pub async fn check(&self, upload: ImageUpload) -> Result<TrademarkReport, AppError> {
        let context = TrademarkContext::new(upload);
        let request_id = context.request_id();
        tracing::debug!(%request_id, bytes = context.upload().len(), "Trademark check started");

        let analyzed = self
            .vision
            .clone()
            .oneshot(context)
            .await
            .map_err(into_vision_error)?;

        let classified = analyzed.classify(&self.classifier);
        tracing::debug!(%request_id, codes = classified.codes().len(), "Design codes inferred");

        let records = self.resolve(classified.codes()).await;
        let resolved = classified.into_resolved(records);

        let metrics = resolved.metrics();
        tracing::info!(
            %request_id,
            codes = resolved.codes().len(),
            records = resolved.records().len(),
            vision_ms = metrics.vision_duration().unwrap_or_default().as_millis() as u64,
            classification_ms = metrics
                .classification_duration()
                .unwrap_or_default()
                .as_millis() as u64,
            registry_ms = metrics.registry_duration().unwrap_or_default().as_millis() as u64,
            total_ms = resolved.elapsed().as_millis() as u64,
            "Trademark check complete"
        );

        Ok(resolved.into_report())
    }

    /// Lookups are independent; a failed or timed-out one is dropped, not propagated.
    async fn resolve(&self, codes: &ClassificationResult) -> Vec<RegistryRecord> {
        let lookups = codes.iter().map(|code| {
            let lookup = self.lookup.clone();
            async move { (code, lookup.oneshot(code).await) }
        });

        join_all(lookups)
            .await
            .into_iter()
            .filter_map(|(code, outcome)| match outcome {
                Ok(record) => record,
                Err(error) => {
                    tracing::warn!(%code, %error, "Registry lookup dropped");
                    None
                }
            })
            .collect()
    }
}

fn into_vision_error(error: BoxError) -> AppError {
    if error.is::<Elapsed>() {
        return AppError::Vision(VisionError::Timeout);
    }
    match error.downcast::<VisionError>() {
        Ok(vision) => AppError::Vision(*vision),
        Err(other) => AppError::Vision(VisionError::Other(other.to_string())),
    }
}

pub struct TrademarkPipelineBuilder {
    vision: Option<Arc<dyn VisionAnalyzer>>,
    registry: Option<Arc<dyn RegistryLookup>>,
    classifier: DesignCodeClassifier,
    vision_timeout: Option<Duration>,
    lookup_timeout: Option<Duration>,
    registry_concurrency: usize,
}

impl Default for TrademarkPipelineBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TrademarkPipelineBuilder {
    pub fn new() -> Self {
        Self {
            vision: None,
            registry: None,
            classifier: DesignCodeClassifier::new(),
            vision_timeout: None,
            lookup_timeout: None,
            registry_concurrency: DEFAULT_REGISTRY_CONCURRENCY,
        }
    }

    pub fn vision(mut self, vision: Arc<dyn VisionAnalyzer>) -> Self {
        self.vision = Some(vision);
        self
    }

    pub fn registry(mut self, registry: Arc<dyn RegistryLookup>) -> Self {
        self.registry = Some(registry);
        self
    }

    pub fn classifier(mut self, classifier: DesignCodeClassifier) -> Self {
        self.classifier = classifier;
        self
    }

    // Bounds the whole vision call, including response decoding.
    pub fn vision_timeout(mut self, timeout: Duration) -> Self {
        self.vision_timeout = Some(timeout);
        self
    }

    // Bounds each registry lookup separately.
    pub fn lookup_timeout(mut self, timeout: Duration) -> Self {
        self.lookup_timeout = Some(timeout);
        self
    }

    pub fn registry_concurrency(mut self, concurrency: usize) -> Self {
        self.registry_concurrency = concurrency.max(1);
        self
    }

    pub fn build(self) -> Result<TrademarkPipeline, AppError> {
        let vision = self
            .vision
            .ok_or(AppError::Pipeline("Vision analyzer not set".to_string()))?;
        let registry = self
            .registry
            .ok_or(AppError::Pipeline("Registry lookup not set".to_string()))?;

        let vision_step = ServiceBuilder::new()
            .option_layer(self.vision_timeout.map(TimeoutLayer::new))
            .service(VisionService::new(vision));

        let lookup_step = ServiceBuilder::new()
            .layer(ConcurrencyLimitLayer::new(self.registry_concurrency))
            .option_layer(self.lookup_timeout.map(TimeoutLayer::new))
            .service(RegistryLookupService::new(registry));

        Ok(TrademarkPipeline {
            vision: BoxCloneService::new(vision_step),
            lookup: BoxCloneService::new(lookup_step),
            classifier: self.classifier,
        })
    }
}
