use std::time::Duration;

/// Per-stage timings of one trademark check
#[derive(Debug, Clone, Default)]
pub struct CheckMetrics {
    vision_duration: Option<Duration>,
    classification_duration: Option<Duration>,
    registry_duration: Option<Duration>,
}

impl CheckMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_vision_duration(&mut self, duration: Duration) {
        self.vision_duration = Some(duration);
    }

    pub fn record_classification_duration(&mut self, duration: Duration) {
        self.classification_duration = Some(duration);
    }

    pub fn record_registry_duration(&mut self, duration: Duration) {
        self.registry_duration = Some(duration);
    }

    pub fn vision_duration(&self) -> Option<Duration> {
        self.vision_duration
    }

    pub fn classification_duration(&self) -> Option<Duration> {
        self.classification_duration
    }

    pub fn registry_duration(&self) -> Option<Duration> {
        self.registry_duration
    }
}
