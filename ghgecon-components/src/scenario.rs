//! Scenario loading
//!
//! A scenario file gathers the model time, the world carbon coefficients, the
//! GHG constraint markets, resource grades and indirect emissions
//! coefficients:
//!
//! ```toml
//! [modeltime]
//! start_year = 2005
//! interval = 5
//! periods = 2
//!
//! [world.regions.USA.primary_fuel_co2]
//! coal = 25.0
//!
//! [[ghg_market]]
//! name = "CO2"
//! market = "global"
//! period = [{ constraint = 1500.0 }, { constraint = 1400.0 }]
//!
//! [[resource]]
//! name = "coal"
//! grade = [{ name = "grade 1", available = 100.0, extraction_cost = 1.5 }]
//!
//! [[indirect_coefficient]]
//! name = "electricity"
//! coefficients = { CO2 = 0.3 }
//! ```

use crate::emissions::GhgMarketConstraint;
use crate::parameters::{GhgMarketParameters, SubresourceParameters};
use crate::resources::Subresource;
use ghgecon_core::config::{from_toml_str, read_toml, report_unrecognized, to_toml_string, Unrecognized};
use ghgecon_core::errors::GhgResult;
use ghgecon_core::indirect::IndirectEmissionsCoefficient;
use ghgecon_core::marketplace::Marketplace;
use ghgecon_core::modeltime::Modeltime;
use ghgecon_core::world::World;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Scenario file contents before validation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScenarioConfig {
    pub modeltime: Modeltime,
    pub world: World,
    #[serde(rename = "ghg_market")]
    pub ghg_markets: Vec<GhgMarketParameters>,
    #[serde(rename = "resource")]
    pub resources: Vec<SubresourceParameters>,
    #[serde(rename = "indirect_coefficient")]
    pub indirect_coefficients: Vec<IndirectEmissionsCoefficient>,
    #[serde(flatten)]
    pub unrecognized: Unrecognized,
}

/// Validated scenario.
#[derive(Debug, Clone)]
pub struct Scenario {
    modeltime: Modeltime,
    world: World,
    markets: Vec<GhgMarketConstraint>,
    resources: Vec<Subresource>,
    indirect_coefficients: Vec<IndirectEmissionsCoefficient>,
}

impl Scenario {
    pub fn from_config(config: ScenarioConfig) -> GhgResult<Self> {
        config.modeltime.validate()?;
        report_unrecognized("scenario", "root", &config.unrecognized);
        config.world.report_unrecognized();
        for entry in config.indirect_coefficients.iter() {
            report_unrecognized("indirect coefficient", &entry.name, &entry.unrecognized);
        }

        let modeltime = config.modeltime;
        let markets = config
            .ghg_markets
            .into_iter()
            .map(|parameters| GhgMarketConstraint::from_parameters(parameters, &modeltime))
            .collect::<GhgResult<Vec<_>>>()?;
        let resources = config
            .resources
            .into_iter()
            .map(|parameters| Subresource::from_parameters(parameters, &modeltime))
            .collect::<GhgResult<Vec<_>>>()?;

        Ok(Self {
            modeltime,
            world: config.world,
            markets,
            resources,
            indirect_coefficients: config.indirect_coefficients,
        })
    }

    pub fn from_toml_str(contents: &str) -> GhgResult<Self> {
        Self::from_config(from_toml_str(contents)?)
    }

    pub fn read(path: impl AsRef<Path>) -> GhgResult<Self> {
        Self::from_config(read_toml(path)?)
    }

    /// Configuration that rebuilds this scenario. Computed state is dropped.
    pub fn to_config(&self) -> ScenarioConfig {
        ScenarioConfig {
            modeltime: self.modeltime,
            world: self.world.clone(),
            ghg_markets: self.markets.iter().map(|m| m.to_parameters()).collect(),
            resources: self
                .resources
                .iter()
                .map(|subresource| SubresourceParameters {
                    name: subresource.name().to_string(),
                    grades: subresource.grades().iter().map(|g| g.to_parameters()).collect(),
                    ..Default::default()
                })
                .collect(),
            indirect_coefficients: self.indirect_coefficients.clone(),
            unrecognized: Unrecognized::new(),
        }
    }

    pub fn to_toml_string(&self) -> GhgResult<String> {
        to_toml_string(&self.to_config())
    }

    /// Marketplace with every GHG market registered for each of `regions`.
    pub fn build_marketplace<S: AsRef<str>>(&self, regions: &[S]) -> Marketplace {
        let mut marketplace = Marketplace::new(self.modeltime.max_period());
        for region in regions {
            for market in self.markets.iter() {
                market.register_market(&mut marketplace, region.as_ref());
            }
        }
        marketplace
    }

    pub fn modeltime(&self) -> &Modeltime {
        &self.modeltime
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    /// Regions with carbon coefficients.
    pub fn regions(&self) -> impl Iterator<Item = &str> {
        self.world.regions.keys().map(|r| r.as_str())
    }

    pub fn markets(&self) -> &[GhgMarketConstraint] {
        &self.markets
    }

    pub fn markets_mut(&mut self) -> &mut [GhgMarketConstraint] {
        &mut self.markets
    }

    pub fn market(&self, name: &str) -> Option<&GhgMarketConstraint> {
        self.markets.iter().find(|m| m.name() == name)
    }

    pub fn market_mut(&mut self, name: &str) -> Option<&mut GhgMarketConstraint> {
        self.markets.iter_mut().find(|m| m.name() == name)
    }

    pub fn resources(&self) -> &[Subresource] {
        &self.resources
    }

    pub fn resources_mut(&mut self) -> &mut [Subresource] {
        &mut self.resources
    }

    pub fn indirect_coefficients(&self) -> &[IndirectEmissionsCoefficient] {
        &self.indirect_coefficients
    }
}
