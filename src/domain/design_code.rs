use std::fmt;

use serde::Serialize;

/// Semantic series of the design-code taxonomy, keyed by the code's first segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DesignSeries {
    CelestialBodies,
    HumanFigures,
    Animals,
    Plants,
    Buildings,
    Implements,
    Clothing,
    Transportation,
    GeometricFigures,
    LettersAndNumbers,
    Inscriptions,
    Colors,
}

impl DesignSeries {
    pub const ALL: [DesignSeries; 12] = [
        DesignSeries::CelestialBodies,
        DesignSeries::HumanFigures,
        DesignSeries::Animals,
        DesignSeries::Plants,
        DesignSeries::Buildings,
        DesignSeries::Implements,
        DesignSeries::Clothing,
        DesignSeries::Transportation,
        DesignSeries::GeometricFigures,
        DesignSeries::LettersAndNumbers,
        DesignSeries::Inscriptions,
        DesignSeries::Colors,
    ];

    pub fn prefix(&self) -> &'static str {
        match self {
            DesignSeries::CelestialBodies => "01",
            DesignSeries::HumanFigures => "02",
            DesignSeries::Animals => "03",
            DesignSeries::Plants => "05",
            DesignSeries::Buildings => "07",
            DesignSeries::Implements => "08",
            DesignSeries::Clothing => "09",
            DesignSeries::Transportation => "18",
            DesignSeries::GeometricFigures => "26",
            DesignSeries::LettersAndNumbers => "27",
            DesignSeries::Inscriptions => "28",
            DesignSeries::Colors => "29",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DesignSeries::CelestialBodies => "Celestial bodies",
            DesignSeries::HumanFigures => "Human figures",
            DesignSeries::Animals => "Animals",
            DesignSeries::Plants => "Plants",
            DesignSeries::Buildings => "Buildings",
            DesignSeries::Implements => "Implements",
            DesignSeries::Clothing => "Clothing",
            DesignSeries::Transportation => "Transportation",
            DesignSeries::GeometricFigures => "Geometric figures",
            DesignSeries::LettersAndNumbers => "Letters and numbers",
            DesignSeries::Inscriptions => "Inscriptions",
            DesignSeries::Colors => "Colors",
        }
    }

    pub fn from_prefix(prefix: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|series| series.prefix() == prefix)
    }
}

/// A dotted-triplet design code such as `01.01.01`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct DesignCode(&'static str);

impl DesignCode {
    pub const fn new(code: &'static str) -> Self {
        Self(code)
    }

    pub fn as_str(&self) -> &'static str {
        self.0
    }

    pub fn series(&self) -> Option<DesignSeries> {
        self.0
            .split('.')
            .next()
            .and_then(DesignSeries::from_prefix)
    }
}

impl fmt::Display for DesignCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}
