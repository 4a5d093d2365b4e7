//! Indirect emissions coefficients
//!
//! Secondary energy (electricity, refined fuels) carries the emissions of the
//! sector that produced it. Each entry maps a sector or fuel name to a
//! per-gas coefficient applied to the amount of that energy consumed.

use crate::config::Unrecognized;
use crate::modeltime::FloatValue;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IndirectEmissionsCoefficient {
    /// Sector or fuel name the coefficients apply to.
    pub name: String,
    /// Emissions per unit of energy, keyed by gas name.
    #[serde(default)]
    pub coefficients: BTreeMap<String, FloatValue>,
    #[serde(flatten)]
    pub unrecognized: Unrecognized,
}

impl IndirectEmissionsCoefficient {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_coefficient(mut self, gas: impl Into<String>, coefficient: FloatValue) -> Self {
        self.coefficients.insert(gas.into(), coefficient);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Coefficient for a gas; gases without an entry have none.
    pub fn coefficient_for(&self, gas: &str) -> FloatValue {
        self.coefficients.get(gas).copied().unwrap_or(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_gas_has_no_coefficient() {
        let entry = IndirectEmissionsCoefficient::new("electricity").with_coefficient("CO2", 0.3);
        assert_eq!(entry.name(), "electricity");
        assert_eq!(entry.coefficient_for("CO2"), 0.3);
        assert_eq!(entry.coefficient_for("CH4"), 0.0);
    }

    #[test]
    fn test_from_toml() {
        let entry: IndirectEmissionsCoefficient = toml::from_str(
            r#"
            name = "refined oil"
            coefficients = { CO2 = 1.2, N2O = 0.001 }
            "#,
        )
        .unwrap();
        assert_eq!(entry.coefficient_for("N2O"), 0.001);
        assert!(entry.unrecognized.is_empty());
    }
}
