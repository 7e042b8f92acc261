use std::collections::BTreeSet;

use serde::Serialize;

use crate::domain::design_code::DesignCode;

/// Deduplicated set of design codes inferred for one image.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ClassificationResult {
    codes: BTreeSet<DesignCode>,
}

impl ClassificationResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns false when the code was already present.
    pub fn insert(&mut self, code: DesignCode) -> bool {
        self.codes.insert(code)
    }

    pub fn contains(&self, code: &str) -> bool {
        self.codes.iter().any(|c| c.as_str() == code)
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = DesignCode> + '_ {
        self.codes.iter().copied()
    }

    pub fn to_vec(&self) -> Vec<DesignCode> {
        self.iter().collect()
    }
}

impl Extend<DesignCode> for ClassificationResult {
    fn extend<T: IntoIterator<Item = DesignCode>>(&mut self, iter: T) {
        self.codes.extend(iter);
    }
}

impl FromIterator<DesignCode> for ClassificationResult {
    fn from_iter<T: IntoIterator<Item = DesignCode>>(iter: T) -> Self {
        Self {
            codes: iter.into_iter().collect(),
        }
    }
}
