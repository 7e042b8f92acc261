use indexmap::IndexMap;
use once_cell::sync::Lazy;
use regex::{Regex, RegexBuilder};
use serde::Serialize;

use crate::domain::{DesignCode, DesignSeries};

/// A keyword family that, when found anywhere in a feature's text, yields `code`.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct KeywordRule {
    pub series: DesignSeries,
    pub pattern: &'static str,
    pub code: DesignCode,
}

const fn rule(series: DesignSeries, pattern: &'static str, code: &'static str) -> KeywordRule {
    KeywordRule {
        series,
        pattern,
        code: DesignCode::new(code),
    }
}

use DesignSeries::*;

pub const KEYWORD_RULES: &[KeywordRule] = &[
    rule(CelestialBodies, "star|astro|celestial", "01.01.01"),
    rule(CelestialBodies, "sun|solar", "01.03.01"),
    rule(CelestialBodies, "moon|lunar", "01.07.01"),
    rule(CelestialBodies, "planet|saturn|mars", "01.11.01"),
    rule(HumanFigures, "face|head|portrait", "02.03.01"),
    rule(HumanFigures, "hand|finger|palm", "02.09.01"),
    rule(HumanFigures, "eye|iris|pupil", "02.09.04"),
    rule(HumanFigures, "lip|mouth", "02.09.08"),
    rule(HumanFigures, "arm|forearm", "02.09.14"),
    rule(HumanFigures, "leg|foot|feet", "02.09.20"),
    rule(Animals, "lion|tiger|cat|feline", "03.01.01"),
    rule(Animals, "dog|wolf|canine", "03.01.08"),
    rule(Animals, "bear|panda", "03.01.14"),
    rule(Animals, "horse|stallion|equine", "03.03.01"),
    rule(Animals, "cow|bull|cattle", "03.04.01"),
    rule(Animals, "sheep|goat", "03.04.11"),
    // A named bird species also counts as a bird.
    rule(Animals, "bird|wing|eagle|hawk|falcon|dove", "03.07.01"),
    rule(Animals, "eagle|hawk|falcon", "03.07.02"),
    rule(Animals, "dove|peace.bird", "03.07.09"),
    rule(Animals, "fish|marine", "03.09.01"),
    rule(Animals, "snake|serpent", "03.11.01"),
    rule(Animals, "dragon|mythical", "03.11.13"),
    rule(Plants, "tree|palm", "05.01.01"),
    rule(Plants, "leaf|foliage", "05.03.01"),
    rule(Plants, "flower|bloom|petal", "05.05.01"),
    rule(Plants, "fruit|apple|orange", "05.07.01"),
    rule(Plants, "grain|wheat|corn", "05.07.02"),
    rule(Buildings, "house|building|structure", "07.01.01"),
    rule(Buildings, "castle|fortress", "07.01.02"),
    rule(Buildings, "church|temple|religious", "07.01.03"),
    rule(Buildings, "tower|antenna", "07.05.02"),
    rule(Buildings, "bridge|arch", "07.11.01"),
    rule(Implements, "tool|implement", "08.01.01"),
    rule(Implements, "hammer|mallet", "08.01.03"),
    rule(Implements, "sword|blade", "08.03.01"),
    rule(Implements, "key|lock", "08.07.01"),
    rule(Clothing, "clothing|garment|apparel", "09.01.01"),
    rule(Clothing, "hat|cap|crown", "09.05.01"),
    rule(Clothing, "shoe|boot|footwear", "09.09.01"),
    rule(Transportation, "vehicle|car|auto", "18.01.01"),
    rule(Transportation, "ship|boat|vessel", "18.03.02"),
    rule(Transportation, "train|railway", "18.05.01"),
    rule(Transportation, "plane|aircraft", "18.05.03"),
    rule(GeometricFigures, "circle|round", "26.01.01"),
    rule(GeometricFigures, "triangle", "26.03.01"),
    rule(GeometricFigures, "square|rectangle", "26.05.01"),
    rule(GeometricFigures, "hexagon|octagon", "26.05.09"),
    rule(GeometricFigures, "curved.line|wave", "26.11.01"),
    rule(GeometricFigures, "straight.line|stripe", "26.11.02"),
    rule(GeometricFigures, "arrow|pointer", "26.11.21"),
    rule(LettersAndNumbers, "text|letter|word", "27.03.01"),
    rule(LettersAndNumbers, "greek|latin", "27.03.02"),
    rule(LettersAndNumbers, "script|cursive", "27.03.05"),
    rule(LettersAndNumbers, "number|digit|numeric", "27.07.01"),
    rule(Inscriptions, "arabic|farsi", "28.01.01"),
    rule(Inscriptions, "chinese|japanese|asian", "28.03.01"),
    rule(Inscriptions, "inscription|writing", "28.11.01"),
];

static COMPILED_RULES: Lazy<Vec<(Regex, DesignCode)>> = Lazy::new(|| {
    KEYWORD_RULES
        .iter()
        .map(|rule| {
            let regex = RegexBuilder::new(rule.pattern)
                .case_insensitive(true)
                .build()
                .expect("keyword patterns are static and valid");
            (regex, rule.code)
        })
        .collect()
});

/// Every code whose keyword family occurs in `text`.
pub fn match_keywords(text: &str) -> impl Iterator<Item = DesignCode> + '_ {
    COMPILED_RULES
        .iter()
        .filter(move |(regex, _)| regex.is_match(text))
        .map(|(_, code)| *code)
}

#[derive(Debug, Clone, Serialize)]
pub struct TaxonomyEntry {
    pub code: DesignCode,
    pub pattern: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct TaxonomySeries {
    pub prefix: &'static str,
    pub label: &'static str,
    pub entries: Vec<TaxonomyEntry>,
}

/// The keyword and color tables grouped by series, in table order.
pub fn taxonomy() -> IndexMap<DesignSeries, TaxonomySeries> {
    let mut grouped: IndexMap<DesignSeries, TaxonomySeries> = IndexMap::new();
    let keyword_entries = KEYWORD_RULES
        .iter()
        .map(|rule| (rule.series, rule.code, rule.pattern));
    let color_entries = super::color::COLOR_RULES
        .iter()
        .map(|rule| (Colors, rule.code, rule.name));

    for (series, code, pattern) in keyword_entries.chain(color_entries) {
        grouped
            .entry(series)
            .or_insert_with(|| TaxonomySeries {
                prefix: series.prefix(),
                label: series.label(),
                entries: Vec::new(),
            })
            .entries
            .push(TaxonomyEntry { code, pattern });
    }
    grouped
}
