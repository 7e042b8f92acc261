use serde::{Deserialize, Serialize};

/// Which detector produced a feature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeatureSource {
    Logo,
    Object,
    #[default]
    Label,
}

/// A free-text detection (logo, localized object or label).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DetectedFeature {
    pub description: Option<String>,
    pub name: Option<String>,
    pub confidence: Option<f32>,
    #[serde(default)]
    pub source: FeatureSource,
}

impl DetectedFeature {
    pub fn labelled(text: impl Into<String>) -> Self {
        Self {
            description: Some(text.into()),
            ..Self::default()
        }
    }

    pub fn with_source(mut self, source: FeatureSource) -> Self {
        self.source = source;
        self
    }

    pub fn with_confidence(mut self, confidence: f32) -> Self {
        self.confidence = Some(confidence);
        self
    }

    /// The description if present and non-empty, otherwise the name.
    pub fn text(&self) -> Option<&str> {
        self.description
            .as_deref()
            .filter(|text| !text.is_empty())
            .or_else(|| self.name.as_deref().filter(|text| !text.is_empty()))
    }
}

// Channels keep the upstream float values so range checks see them unrounded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rgb {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
}

impl Rgb {
    pub fn new(red: impl Into<f64>, green: impl Into<f64>, blue: impl Into<f64>) -> Self {
        Self {
            red: red.into(),
            green: green.into(),
            blue: blue.into(),
        }
    }
}

/// One dominant color of the image and how much of it the color covers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DominantColorSample {
    pub color: Option<Rgb>,
    pub score: f64,
}

impl DominantColorSample {
    pub fn new(color: Rgb, score: f64) -> Self {
        Self {
            color: Some(color),
            score,
        }
    }

    /// Absent colors read as black.
    pub fn rgb(&self) -> Rgb {
        self.color.unwrap_or_default()
    }
}
