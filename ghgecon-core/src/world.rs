//! Default carbon coefficients by region
//!
//! A [`World`] answers the [`CarbonAccounting`] queries from per-region tables.
//! Fuels or products missing from a table carry no carbon and read as 0.

use crate::config::{report_unrecognized, Unrecognized};
use crate::modeltime::FloatValue;
use crate::services::CarbonAccounting;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Coefficient tables for one region.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegionCoefficients {
    /// CO2 content of primary fuels and products (TgC/EJ).
    pub primary_fuel_co2: BTreeMap<String, FloatValue>,
    /// Carbon tax to energy tax conversion coefficients.
    pub carbon_tax: BTreeMap<String, FloatValue>,
    #[serde(flatten)]
    pub unrecognized: Unrecognized,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct World {
    pub regions: BTreeMap<String, RegionCoefficients>,
}

impl World {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_primary_fuel_co2_coef(&mut self, region: &str, name: &str, coef: FloatValue) {
        self.regions
            .entry(region.to_string())
            .or_default()
            .primary_fuel_co2
            .insert(name.to_string(), coef);
    }

    pub fn set_carbon_tax_coef(&mut self, region: &str, fuel: &str, coef: FloatValue) {
        self.regions
            .entry(region.to_string())
            .or_default()
            .carbon_tax
            .insert(fuel.to_string(), coef);
    }

    /// Warn about any keys that were present in configuration but not understood.
    pub fn report_unrecognized(&self) {
        for (region, coefficients) in &self.regions {
            report_unrecognized("region", region, &coefficients.unrecognized);
        }
    }

    fn lookup(
        &self,
        region: &str,
        name: &str,
        table: impl Fn(&RegionCoefficients) -> &BTreeMap<String, FloatValue>,
    ) -> FloatValue {
        self.regions
            .get(region)
            .and_then(|coefficients| table(coefficients).get(name))
            .copied()
            .unwrap_or(0.0)
    }
}

impl CarbonAccounting for World {
    fn primary_fuel_co2_coef(&self, region: &str, name: &str) -> FloatValue {
        self.lookup(region, name, |c| &c.primary_fuel_co2)
    }

    fn carbon_tax_coef(&self, region: &str, fuel: &str) -> FloatValue {
        self.lookup(region, fuel, |c| &c.carbon_tax)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_coefficients_are_zero() {
        let mut world = World::new();
        world.set_primary_fuel_co2_coef("USA", "coal", 25.0);

        assert_eq!(world.primary_fuel_co2_coef("USA", "coal"), 25.0);
        assert_eq!(world.primary_fuel_co2_coef("USA", "biomass"), 0.0);
        assert_eq!(world.primary_fuel_co2_coef("Canada", "coal"), 0.0);
        assert_eq!(world.carbon_tax_coef("USA", "coal"), 0.0);
    }

    #[test]
    fn test_regions_are_independent() {
        let mut world = World::new();
        world.set_carbon_tax_coef("USA", "natural gas", 13.7);
        world.set_carbon_tax_coef("Canada", "natural gas", 14.2);

        assert_eq!(world.carbon_tax_coef("USA", "natural gas"), 13.7);
        assert_eq!(world.carbon_tax_coef("Canada", "natural gas"), 14.2);
    }

    #[test]
    fn test_from_toml() {
        let world: World = toml::from_str(
            r#"
            [regions.USA.primary_fuel_co2]
            crude = 19.6
            coal = 25.8

            [regions.USA.carbon_tax]
            crude = 19.6

            [regions.USA]
            sulfur = 1.0
            "#,
        )
        .unwrap();

        assert_eq!(world.primary_fuel_co2_coef("USA", "coal"), 25.8);
        assert_eq!(world.carbon_tax_coef("USA", "crude"), 19.6);
        assert!(world.regions["USA"].unrecognized.contains_key("sulfur"));
    }
}
