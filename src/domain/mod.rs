pub mod classification;
pub mod design_code;
pub mod feature;

pub use classification::ClassificationResult;
pub use design_code::{DesignCode, DesignSeries};
pub use feature::{DetectedFeature, DominantColorSample, FeatureSource, Rgb};
