use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::SaleDimension;

/// Per group totals of sale price for one grouping dimension.
///
/// Keys are exactly the distinct dimension values seen in the input records,
/// held in ascending lexical order so report output is deterministic.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AggregationResult {
    totals: BTreeMap<String, f64>,
}

impl AggregationResult {
    pub fn new(totals: BTreeMap<String, f64>) -> Self {
        Self { totals }
    }

    pub fn totals(&self) -> &BTreeMap<String, f64> {
        &self.totals
    }

    pub fn get(&self, key: &str) -> Option<f64> {
        self.totals.get(key).copied()
    }

    pub fn len(&self) -> usize {
        self.totals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.totals.is_empty()
    }

    /// Sum over every group.
    pub fn grand_total(&self) -> f64 {
        self.totals.values().sum()
    }
}

impl FromIterator<(String, f64)> for AggregationResult {
    fn from_iter<T: IntoIterator<Item = (String, f64)>>(iter: T) -> Self {
        Self {
            totals: iter.into_iter().collect(),
        }
    }
}

/// What a report request produced: the dimension it grouped on, the totals
/// behind the chart, and where the rendered image landed.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ReportArtifact {
    pub dimension: SaleDimension,
    pub totals: AggregationResult,
    pub image_path: String,
}
