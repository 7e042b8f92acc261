pub mod classifier;
pub mod config;
pub mod domain;
pub mod error;
pub mod pipeline;
pub mod registry;
pub mod server;
pub mod upload;
pub mod vision;

#[cfg(test)]
pub(crate) mod test_support;

pub use classifier::DesignCodeClassifier;
pub use config::Configuration;
pub use domain::{ClassificationResult, DesignCode, DetectedFeature, DominantColorSample, Rgb};
pub use error::{AppError, RegistryError, UploadError, VisionError};
pub use pipeline::{TrademarkPipeline, TrademarkReport};
