//! Greenhouse gas species
//!
//! A [`GhgSpecies`] tracks one gas for one technology. Each solver iteration
//! the technology asks it for the generalized cost of the gas (the market tax
//! and any storage cost, per unit of fuel) and, once output is known, reports
//! its fuel input and product output so the physical emissions can be derived.
//!
//! # Emissions
//!
//! For the CO2 pathway the net carbon flow is
//!
//! $$N = I \cdot c_{fuel} - O \cdot c_{product}$$
//!
//! where the coefficients are the world defaults for the consumed fuel and the
//! produced good. With removal fraction $r$ and global warming potential $g$:
//!
//! - sequestered: $r N$ (only written when $r > 0$)
//! - emission: $(1 - r) N$
//! - GWP-weighted emission: $(1 - r) g N$
//! - fuel-embodied emission: $(1 - r) I c_{fuel}$
//!
//! Gases on the flat-coefficient pathway use their own coefficient for both
//! fuel and product.

use crate::parameters::{EmissionsPathway, GhgSpeciesParameters};
use ghgecon_core::config::report_unrecognized;
use ghgecon_core::debug::DebugWriter;
use ghgecon_core::errors::{ensure_fraction, ensure_named, GhgResult};
use ghgecon_core::indirect::IndirectEmissionsCoefficient;
use ghgecon_core::modeltime::{FloatValue, Period};
use ghgecon_core::services::ScenarioView;
use std::io::{self, Write};
use tracing::trace;

/// Converts 1975 dollars, the base year of storage costs, into 1990 dollars.
pub const CVRT90: FloatValue = 2.212;

/// Converts teragrams of carbon per exajoule into metric tons of carbon per gigajoule.
pub const TGC_PER_EJ_TO_TC_PER_GJ: FloatValue = 1e-3;

/// One greenhouse gas tracked for one technology.
#[derive(Debug, Clone, PartialEq)]
pub struct GhgSpecies {
    name: String,
    unit: String,
    pathway: EmissionsPathway,
    /// Fraction of the net flow captured and stored, in [0, 1]
    remove_fraction: FloatValue,
    /// Global warming potential relative to CO2
    gwp: FloatValue,
    /// Emissions per unit of fuel on the flat-coefficient pathway
    emiss_coef: FloatValue,
    /// Storage cost in 1975 dollars per unit stored
    storage_cost: FloatValue,

    emission: FloatValue,
    sequestered_amount: FloatValue,
    emiss_gwp: FloatValue,
    emiss_fuel: FloatValue,
    emiss_ind: FloatValue,
}

impl GhgSpecies {
    /// Create a gas with no storage cost, inferring the pathway from its name.
    pub fn new(
        name: impl Into<String>,
        unit: impl Into<String>,
        remove_fraction: FloatValue,
        gwp: FloatValue,
        emiss_coef: FloatValue,
    ) -> GhgResult<Self> {
        Self::from_parameters(GhgSpeciesParameters {
            name: name.into(),
            unit: unit.into(),
            remove_fraction,
            gwp,
            emiss_coef,
            ..Default::default()
        })
    }

    /// Validate parameters and build the gas.
    pub fn from_parameters(parameters: GhgSpeciesParameters) -> GhgResult<Self> {
        ensure_named("GHG", &parameters.name)?;
        ensure_fraction(
            "GHG",
            &parameters.name,
            "remove_fraction",
            parameters.remove_fraction,
        )?;
        report_unrecognized("GHG", &parameters.name, &parameters.unrecognized);

        let pathway = parameters.resolved_pathway();
        Ok(Self {
            name: parameters.name,
            unit: parameters.unit,
            pathway,
            remove_fraction: parameters.remove_fraction,
            gwp: parameters.gwp,
            emiss_coef: parameters.emiss_coef,
            storage_cost: parameters.storage_cost,
            emission: 0.0,
            sequestered_amount: 0.0,
            emiss_gwp: 0.0,
            emiss_fuel: 0.0,
            emiss_ind: 0.0,
        })
    }

    /// Configuration record that rebuilds this gas.
    pub fn to_parameters(&self) -> GhgSpeciesParameters {
        GhgSpeciesParameters {
            name: self.name.clone(),
            unit: self.unit.clone(),
            pathway: Some(self.pathway),
            emiss_coef: self.emiss_coef,
            remove_fraction: self.remove_fraction,
            gwp: self.gwp,
            storage_cost: self.storage_cost,
            ..Default::default()
        }
    }

    /// Replace the flat emissions coefficient.
    pub fn set_emiss_coef(&mut self, emiss_coef: FloatValue) {
        self.emiss_coef = emiss_coef;
    }

    /// Replace the removal fraction. Fails outside [0, 1].
    pub fn set_remove_fraction(&mut self, remove_fraction: FloatValue) -> GhgResult<()> {
        ensure_fraction("GHG", &self.name, "remove_fraction", remove_fraction)?;
        self.remove_fraction = remove_fraction;
        Ok(())
    }

    /// Zero every derived emissions quantity, including the sequestered amount.
    pub fn reset_emissions(&mut self) {
        self.emission = 0.0;
        self.sequestered_amount = 0.0;
        self.emiss_gwp = 0.0;
        self.emiss_fuel = 0.0;
        self.emiss_ind = 0.0;
    }

    /// Factor converting a carbon tax into an energy tax for a fuel.
    ///
    /// Only CO2 takes part in this conversion; other gases return 0.
    pub fn tax_conversion_factor(&self, view: &ScenarioView, region: &str, fuel: &str) -> FloatValue {
        match self.pathway {
            EmissionsPathway::CarbonDioxide => {
                (1.0 - self.remove_fraction) * self.gwp * view.carbon_tax_coef(region, fuel)
            }
            EmissionsPathway::FlatCoefficient => 0.0,
        }
    }

    /// Cost (or value) of the gas's tax and storage burden per unit of fuel.
    ///
    /// The tax is the current price of this gas's market for `region` and
    /// `period`. Storage cost only applies when some of the gas is removed.
    pub fn generalized_cost(
        &self,
        view: &ScenarioView,
        region: &str,
        fuel: &str,
        period: Period,
    ) -> FloatValue {
        let tax = view.price(&self.name, region, period);

        let burden = if self.remove_fraction > 0.0 {
            tax * (1.0 - self.remove_fraction) * self.gwp + self.storage_cost / CVRT90
        } else {
            tax * (1.0 - self.remove_fraction) * self.gwp
        };

        match self.pathway {
            EmissionsPathway::CarbonDioxide => {
                burden * view.carbon_tax_coef(region, fuel) * TGC_PER_EJ_TO_TC_PER_GJ
            }
            EmissionsPathway::FlatCoefficient => burden * self.emiss_coef,
        }
    }

    /// Derive emissions from a technology's fuel input and product output.
    ///
    /// A CO2 process that passes its input straight through (equal amounts and
    /// equal coefficients) releases nothing; only the fuel-embodied emission is
    /// recorded.
    ///
    /// When the removal fraction is 0 the sequestered amount keeps its
    /// previous value. Use [`GhgSpecies::reset_emissions`] to clear it.
    pub fn calc_emissions(
        &mut self,
        view: &ScenarioView,
        region: &str,
        fuel: &str,
        input: FloatValue,
        product: &str,
        output: FloatValue,
    ) {
        match self.pathway {
            EmissionsPathway::CarbonDioxide => {
                let coef_fuel = view.primary_fuel_co2_coef(region, fuel);
                let coef_product = view.primary_fuel_co2_coef(region, product);

                if input == output && coef_fuel == coef_product {
                    self.emission = 0.0;
                    self.emiss_gwp = 0.0;
                    self.sequestered_amount = 0.0;
                    self.emiss_fuel = (1.0 - self.remove_fraction) * input * coef_fuel;
                } else {
                    self.account(input * coef_fuel - output * coef_product, input * coef_fuel);
                }
            }
            EmissionsPathway::FlatCoefficient => {
                self.account((input - output) * self.emiss_coef, input * self.emiss_coef);
            }
        }

        trace!(
            "{} emissions for {} -> {} in {}: emission={}, sequestered={}, fuel={}",
            self.name,
            fuel,
            product,
            region,
            self.emission,
            self.sequestered_amount,
            self.emiss_fuel
        );
    }

    /// Split a net flow into released, sequestered and embodied quantities.
    ///
    /// Net flows may be negative, e.g. biomass whose coefficient is 0.
    fn account(&mut self, net: FloatValue, embodied: FloatValue) {
        let released = 1.0 - self.remove_fraction;
        if self.remove_fraction > 0.0 {
            self.sequestered_amount = self.remove_fraction * net;
        }
        self.emission = released * net;
        self.emiss_gwp = released * self.gwp * net;
        self.emiss_fuel = released * embodied;
    }

    /// Indirect emissions from consuming `input` of secondary energy `fuel`.
    ///
    /// Fuels missing from the table produce no indirect emissions.
    pub fn calc_indirect_emissions(
        &mut self,
        input: FloatValue,
        fuel: &str,
        coefficients: &[IndirectEmissionsCoefficient],
    ) {
        // The last entry for a name takes precedence
        self.emiss_ind = coefficients
            .iter()
            .rev()
            .find(|entry| entry.name == fuel)
            .map(|entry| entry.coefficient_for(&self.name) * input)
            .unwrap_or(0.0);
    }

    /// Gas name, also the good its market trades
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Unit emissions are reported in
    pub fn unit(&self) -> &str {
        &self.unit
    }

    /// How emissions and costs are derived for this gas
    pub fn pathway(&self) -> EmissionsPathway {
        self.pathway
    }

    /// Fraction captured and stored
    pub fn remove_fraction(&self) -> FloatValue {
        self.remove_fraction
    }

    /// Global warming potential
    pub fn gwp(&self) -> FloatValue {
        self.gwp
    }

    /// Flat emissions coefficient
    pub fn emiss_coef(&self) -> FloatValue {
        self.emiss_coef
    }

    /// Storage cost in 1975 dollars
    pub fn storage_cost(&self) -> FloatValue {
        self.storage_cost
    }

    /// Released emissions from the last [`GhgSpecies::calc_emissions`]
    pub fn emission(&self) -> FloatValue {
        self.emission
    }

    /// Captured amount from the last call with a non-zero removal fraction
    pub fn sequestered_amount(&self) -> FloatValue {
        self.sequestered_amount
    }

    /// Released emissions weighted by GWP
    pub fn emiss_gwp(&self) -> FloatValue {
        self.emiss_gwp
    }

    /// Released emissions embodied in the consumed fuel
    pub fn emiss_fuel(&self) -> FloatValue {
        self.emiss_fuel
    }

    /// Indirect emissions from the last [`GhgSpecies::calc_indirect_emissions`]
    pub fn emiss_ind(&self) -> FloatValue {
        self.emiss_ind
    }

    /// Write the gas's parameters and last derived emissions.
    pub fn write_debug<W: Write>(&self, writer: &mut DebugWriter<'_, W>) -> io::Result<()> {
        writer.open("GHG", &self.name)?;
        writer.element("unit", &self.unit)?;
        writer.element("removefrac", self.remove_fraction)?;
        writer.element("GWP", self.gwp)?;
        writer.element("emission", self.emission)?;
        writer.element("sequesteredAmount", self.sequestered_amount)?;
        writer.element("emiss_gwp", self.emiss_gwp)?;
        writer.element("emisscoef", self.emiss_coef)?;
        writer.element("emiss_fuel", self.emiss_fuel)?;
        writer.element("emiss_ind", self.emiss_ind)?;
        writer.close("GHG")
    }
}
