//! Resource grade parameters

use ghgecon_core::config::Unrecognized;
use ghgecon_core::modeltime::FloatValue;
use serde::{Deserialize, Serialize};

/// Parameters for one cost tier of a resource.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GradeParameters {
    pub name: String,
    /// Resource quantity in this grade
    /// unit: EJ
    pub available: FloatValue,
    /// Base extraction cost before technical change, environmental cost and taxes
    /// unit: 1975$/GJ
    pub extraction_cost: FloatValue,
    #[serde(flatten)]
    pub unrecognized: Unrecognized,
}

impl GradeParameters {
    pub fn new(name: impl Into<String>, available: FloatValue, extraction_cost: FloatValue) -> Self {
        Self {
            name: name.into(),
            available,
            extraction_cost,
            unrecognized: Unrecognized::new(),
        }
    }
}

/// Ordered grades of one resource, cheapest first.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SubresourceParameters {
    pub name: String,
    #[serde(rename = "grade")]
    pub grades: Vec<GradeParameters>,
    #[serde(flatten)]
    pub unrecognized: Unrecognized,
}
