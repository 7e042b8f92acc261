use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};

use tower::{BoxError, Service};

use crate::pipeline::context::{AnalyzedState, TrademarkContext, UploadedState};
use crate::vision::VisionAnalyzer;

#[derive(Clone)]
pub struct VisionService {
    inner: Arc<dyn VisionAnalyzer>,
}

impl VisionService {
    pub fn new(inner: Arc<dyn VisionAnalyzer>) -> Self {
        Self { inner }
    }
}

impl Service<TrademarkContext<UploadedState>> for VisionService {
    type Response = TrademarkContext<AnalyzedState>;
    type Error = BoxError;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, req: TrademarkContext<UploadedState>) -> Self::Future {
        let inner = self.inner.clone();

        Box::pin(async move {
            let analysis = inner.analyze(req.upload()).await?;
            tracing::debug!(
                request_id = %req.request_id(),
                logos = analysis.logos.len(),
                objects = analysis.objects.len(),
                labels = analysis.labels.len(),
                "Vision analysis received"
            );
            Ok(req.into_analyzed(analysis))
        })
    }
}
