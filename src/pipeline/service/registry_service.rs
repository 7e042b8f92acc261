use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};

use tower::{BoxError, Service};

use crate::domain::DesignCode;
use crate::registry::{RegistryLookup, RegistryRecord};

/// One registry query per design code.
#[derive(Clone)]
pub struct RegistryLookupService {
    inner: Arc<dyn RegistryLookup>,
}

impl RegistryLookupService {
    pub fn new(inner: Arc<dyn RegistryLookup>) -> Self {
        Self { inner }
    }
}

impl Service<DesignCode> for RegistryLookupService {
    type Response = Option<RegistryRecord>;
    type Error = BoxError;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, code: DesignCode) -> Self::Future {
        let inner = self.inner.clone();
        Box::pin(async move { Ok(inner.lookup(code).await?) })
    }
}
