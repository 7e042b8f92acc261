pub mod google;

use async_trait::async_trait;
use serde::Serialize;

use crate::domain::{DetectedFeature, DominantColorSample};
use crate::error::VisionError;
use crate::upload::ImageUpload;

pub use google::GoogleVisionClient;

/// Upstream image analysis (logo, object, label and color detection).
#[async_trait]
pub trait VisionAnalyzer: Send + Sync {
    async fn analyze(&self, image: &ImageUpload) -> Result<VisionAnalysis, VisionError>;
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct VisionAnalysis {
    pub logos: Vec<DetectedFeature>,
    pub objects: Vec<DetectedFeature>,
    pub labels: Vec<DetectedFeature>,
    pub dominant_colors: Option<Vec<DominantColorSample>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LogoDetection {
    pub name: Option<String>,
    pub confidence: Option<f32>,
}

impl VisionAnalysis {
    /// Logos, then objects, then labels; detections without text are dropped.
    pub fn features(&self) -> Vec<DetectedFeature> {
        self.logos
            .iter()
            .chain(&self.objects)
            .chain(&self.labels)
            .filter(|feature| feature.text().is_some())
            .cloned()
            .collect()
    }

    pub fn dominant_colors(&self) -> Option<&[DominantColorSample]> {
        self.dominant_colors.as_deref()
    }

    pub fn logo_detections(&self) -> Vec<LogoDetection> {
        self.logos
            .iter()
            .map(|logo| LogoDetection {
                name: logo.description.clone(),
                confidence: logo.confidence,
            })
            .collect()
    }
}
