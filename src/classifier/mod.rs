pub mod color;
pub mod taxonomy;

use crate::domain::{ClassificationResult, DetectedFeature, DominantColorSample};

pub use color::{match_color, ColorRule, COLOR_RULES};
pub use taxonomy::{match_keywords, taxonomy, KeywordRule, KEYWORD_RULES};

pub const DEFAULT_COLOR_THRESHOLD: f64 = 0.2;

/// Maps detected features and dominant colors to design codes.
///
/// Pure and synchronous: the same input always gives the same set, and
/// features without any text are skipped.
#[derive(Debug, Clone, Copy)]
pub struct DesignCodeClassifier {
    color_threshold: f64,
}

impl Default for DesignCodeClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl DesignCodeClassifier {
    pub fn new() -> Self {
        Self {
            color_threshold: DEFAULT_COLOR_THRESHOLD,
        }
    }

    /// Colors must cover strictly more than `threshold` of the image to count.
    pub fn with_color_threshold(mut self, threshold: f64) -> Self {
        self.color_threshold = threshold;
        self
    }

    pub fn classify(
        &self,
        features: &[DetectedFeature],
        colors: Option<&[DominantColorSample]>,
    ) -> ClassificationResult {
        let mut result = ClassificationResult::new();

        for feature in features {
            let Some(text) = feature.text() else {
                continue;
            };
            let normalized = text.to_lowercase();
            result.extend(match_keywords(&normalized));
        }

        for sample in colors.unwrap_or_default() {
            if sample.score > self.color_threshold {
                result.extend(match_color(sample.rgb()));
            }
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Rgb;

    fn features(texts: &[&str]) -> Vec<DetectedFeature> {
        texts.iter().map(|t| DetectedFeature::labelled(*t)).collect()
    }

    #[test]
    fn test_empty_input_yields_empty_result() {
        let classifier = DesignCodeClassifier::new();
        assert!(classifier.classify(&[], None).is_empty());
        assert!(classifier.classify(&[], Some(&[])).is_empty());
    }

    #[test]
    fn test_dog_keyword() {
        let result =
            DesignCodeClassifier::new().classify(&features(&["Golden Retriever dog detected"]), None);
        assert!(result.contains("03.01.08"));
    }

    #[test]
    fn test_solar_keyword() {
        let result = DesignCodeClassifier::new().classify(&features(&["Solar eclipse"]), None);
        assert!(result.contains("01.03.01"));
    }

    #[test]
    fn test_unknown_text_contributes_nothing() {
        let result = DesignCodeClassifier::new().classify(&features(&["xyz123"]), None);
        assert!(result.is_empty());
    }

    #[test]
    fn test_feature_without_text_is_skipped() {
        let result = DesignCodeClassifier::new().classify(&[DetectedFeature::default()], None);
        assert!(result.is_empty());
    }

    #[test]
    fn test_one_feature_can_trigger_several_rules() {
        let result = DesignCodeClassifier::new().classify(&features(&["star tower"]), None);
        assert!(result.contains("01.01.01"));
        assert!(result.contains("07.05.02"));
    }

    #[test]
    fn test_repeated_features_do_not_duplicate_codes() {
        let classifier = DesignCodeClassifier::new();
        let once = classifier.classify(&features(&["Horse"]), None);
        let twice = classifier.classify(&features(&["Horse", "horse"]), None);
        assert_eq!(once, twice);
        assert_eq!(twice.len(), 1);
    }

    #[test]
    fn test_classification_is_deterministic() {
        let classifier = DesignCodeClassifier::new();
        let input = features(&["Crown", "Lion", "Circle", "Chinese text"]);
        let colors = [DominantColorSample::new(Rgb::new(250, 250, 250), 0.6)];
        let first = classifier.classify(&input, Some(&colors));
        for _ in 0..10 {
            assert_eq!(classifier.classify(&input, Some(&colors)), first);
        }
    }

    #[test]
    fn test_color_below_threshold_is_ignored() {
        let colors = [DominantColorSample::new(Rgb::new(220, 10, 5), 0.1)];
        let result = DesignCodeClassifier::new().classify(&[], Some(&colors));
        assert!(result.is_empty());
    }

    #[test]
    fn test_color_at_threshold_is_ignored() {
        let colors = [DominantColorSample::new(Rgb::new(220, 10, 5), 0.2)];
        let result = DesignCodeClassifier::new().classify(&[], Some(&colors));
        assert!(result.is_empty());
    }

    #[test]
    fn test_color_above_threshold_is_classified() {
        let colors = [DominantColorSample::new(Rgb::new(220, 10, 5), 0.25)];
        let result = DesignCodeClassifier::new().classify(&[], Some(&colors));
        assert_eq!(result.to_vec().len(), 1);
        assert!(result.contains("29.01.01"));
    }

    #[test]
    fn test_missing_rgb_is_classified_as_black() {
        let colors = [DominantColorSample {
            color: None,
            score: 0.3,
        }];
        let result = DesignCodeClassifier::new().classify(&[], Some(&colors));
        assert!(result.contains("29.01.08"));
    }

    #[test]
    fn test_prevalence_just_above_threshold_counts() {
        let colors = [DominantColorSample::new(Rgb::new(220, 10, 5), 0.200_000_01)];
        let result = DesignCodeClassifier::new().classify(&[], Some(&colors));
        assert!(result.contains("29.01.01"));
    }

    #[test]
    fn test_fractional_channels_are_not_rounded() {
        let classifier = DesignCodeClassifier::new();
        let red = [DominantColorSample::new(Rgb::new(200.4, 10, 5), 0.5)];
        assert!(classifier.classify(&[], Some(&red)).contains("29.01.01"));

        let green = [DominantColorSample::new(Rgb::new(10, 200.5, 99.6), 0.5)];
        assert!(classifier.classify(&[], Some(&green)).contains("29.01.03"));

        let not_red = [DominantColorSample::new(Rgb::new(200.0, 10, 5), 0.5)];
        assert!(classifier.classify(&[], Some(&not_red)).is_empty());
    }

    #[test]
    fn test_custom_threshold() {
        let colors = [DominantColorSample::new(Rgb::new(10, 20, 230), 0.15)];
        let result = DesignCodeClassifier::new()
            .with_color_threshold(0.1)
            .classify(&[], Some(&colors));
        assert!(result.contains("29.01.04"));
    }

    #[test]
    fn test_combined_features_and_colors() {
        let colors = [DominantColorSample::new(Rgb::new(10, 20, 230), 0.5)];
        let result = DesignCodeClassifier::new()
            .classify(&features(&["Eagle soaring", "Blue sky"]), Some(&colors));
        assert!(result.contains("03.07.01"));
        assert!(result.contains("03.07.02"));
        assert!(result.contains("29.01.04"));
        assert_eq!(result.len(), 3);
    }
}
