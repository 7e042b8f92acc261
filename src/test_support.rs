use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;

use crate::domain::DesignCode;
use crate::error::{RegistryError, VisionError};
use crate::registry::{RegistryLookup, RegistryRecord};
use crate::upload::ImageUpload;
use crate::vision::{VisionAnalysis, VisionAnalyzer};

/// Returns the same analysis for every image, optionally after a delay.
pub struct StaticVision {
    analysis: VisionAnalysis,
    delay: Option<Duration>,
    failure: Option<String>,
}

impl StaticVision {
    pub fn new(analysis: VisionAnalysis) -> Self {
        Self {
            analysis,
            delay: None,
            failure: None,
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            analysis: VisionAnalysis::default(),
            delay: None,
            failure: Some(message.to_string()),
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }
}

#[async_trait]
impl VisionAnalyzer for StaticVision {
    async fn analyze(&self, _image: &ImageUpload) -> Result<VisionAnalysis, VisionError> {
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        match &self.failure {
            Some(message) => Err(VisionError::Api {
                code: 13,
                message: message.clone(),
            }),
            None => Ok(self.analysis.clone()),
        }
    }
}

/// In-memory registry that records which codes were queried.
#[derive(Clone, Default)]
pub struct StaticRegistry {
    records: HashMap<&'static str, String>,
    failing: HashSet<&'static str>,
    slow: HashSet<&'static str>,
    calls: Arc<Mutex<Vec<DesignCode>>>,
}

impl StaticRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_record(mut self, code: &'static str, body: &str) -> Self {
        self.records.insert(code, body.to_string());
        self
    }

    pub fn with_failure(mut self, code: &'static str) -> Self {
        self.failing.insert(code);
        self
    }

    pub fn with_slow(mut self, code: &'static str) -> Self {
        self.slow.insert(code);
        self
    }

    pub fn calls(&self) -> Vec<DesignCode> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl RegistryLookup for StaticRegistry {
    async fn lookup(&self, code: DesignCode) -> Result<Option<RegistryRecord>, RegistryError> {
        self.calls.lock().unwrap().push(code);
        if self.slow.contains(code.as_str()) {
            tokio::time::sleep(Duration::from_secs(5)).await;
        }
        if self.failing.contains(code.as_str()) {
            return Err(RegistryError::Transport {
                code: code.to_string(),
                source: failing_reqwest_error().await,
            });
        }
        Ok(self
            .records
            .get(code.as_str())
            .map(|body| RegistryRecord::new(code, body.clone())))
    }
}

// reqwest::Error has no public constructor; an unparsable URL produces one.
async fn failing_reqwest_error() -> reqwest::Error {
    match reqwest::Client::new().get("not a url").send().await {
        Err(error) => error,
        Ok(_) => unreachable!("request to an invalid URL cannot succeed"),
    }
}
