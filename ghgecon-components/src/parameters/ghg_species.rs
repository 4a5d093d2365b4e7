//! Greenhouse gas parameters

use ghgecon_core::config::Unrecognized;
use ghgecon_core::modeltime::FloatValue;
use serde::{Deserialize, Serialize};

/// How a gas turns fuel and product flows into emissions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EmissionsPathway {
    /// Emissions follow the default CO2 coefficients of the consumed fuel and
    /// the produced good, as published by the world carbon accounts.
    CarbonDioxide,
    /// Emissions follow the gas's own read-in coefficient applied to the net flow.
    FlatCoefficient,
}

impl EmissionsPathway {
    /// Pathway conventionally used for a gas name.
    pub fn for_gas(name: &str) -> Self {
        if name == "CO2" {
            EmissionsPathway::CarbonDioxide
        } else {
            EmissionsPathway::FlatCoefficient
        }
    }
}

/// Parameters for one greenhouse gas tracked by one technology.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GhgSpeciesParameters {
    /// Gas name, also the name of its market (e.g. "CO2", "CH4")
    pub name: String,

    /// Physical unit of the emissions
    pub unit: String,

    /// Emissions pathway. Inferred from the name when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pathway: Option<EmissionsPathway>,

    /// Emissions per unit of net flow for gases on the flat-coefficient pathway.
    ///
    /// Default: 0.0
    pub emiss_coef: FloatValue,

    /// Fraction of potential emissions captured and stored instead of released.
    /// unit: dimensionless, in [0, 1]
    ///
    /// Default: 0.0
    pub remove_fraction: FloatValue,

    /// Global warming potential, converting the gas to CO2-equivalent.
    ///
    /// Default: 1.0
    pub gwp: FloatValue,

    /// Fixed cost of storing captured emissions
    /// unit: 1990$/tC
    ///
    /// Default: 0.0
    pub storage_cost: FloatValue,

    #[serde(flatten)]
    pub unrecognized: Unrecognized,
}

impl Default for GhgSpeciesParameters {
    fn default() -> Self {
        Self {
            name: String::new(),
            unit: String::new(),
            pathway: None,
            emiss_coef: 0.0,
            remove_fraction: 0.0,
            gwp: 1.0,
            storage_cost: 0.0,
            unrecognized: Unrecognized::new(),
        }
    }
}

impl GhgSpeciesParameters {
    /// Pathway to use, falling back to the one conventional for the name.
    pub fn resolved_pathway(&self) -> EmissionsPathway {
        self.pathway
            .unwrap_or_else(|| EmissionsPathway::for_gas(&self.name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pathway_inferred_from_name() {
        let co2 = GhgSpeciesParameters {
            name: "CO2".to_string(),
            ..Default::default()
        };
        assert_eq!(co2.resolved_pathway(), EmissionsPathway::CarbonDioxide);

        let ch4 = GhgSpeciesParameters {
            name: "CH4".to_string(),
            ..Default::default()
        };
        assert_eq!(ch4.resolved_pathway(), EmissionsPathway::FlatCoefficient);

        // Case matters for inference; an explicit pathway avoids relying on it
        let lower = GhgSpeciesParameters {
            name: "co2".to_string(),
            pathway: Some(EmissionsPathway::CarbonDioxide),
            ..Default::default()
        };
        assert_eq!(lower.resolved_pathway(), EmissionsPathway::CarbonDioxide);
    }

    #[test]
    fn test_from_toml() {
        let parameters: GhgSpeciesParameters = toml::from_str(
            r#"
            name = "CH4"
            unit = "Tg"
            pathway = "flat-coefficient"
            emiss_coef = 0.05
            gwp = 21.0
            "#,
        )
        .unwrap();

        assert_eq!(parameters.pathway, Some(EmissionsPathway::FlatCoefficient));
        assert_eq!(parameters.emiss_coef, 0.05);
        assert_eq!(parameters.gwp, 21.0);
        assert_eq!(parameters.remove_fraction, 0.0);
        assert!(parameters.unrecognized.is_empty());
    }
}
