//! Services consumed by the accounting entities
//!
//! Prices, default carbon coefficients and market registration are owned by
//! collaborators outside this workspace (the market solver and the world
//! container). They are expressed as traits so any implementation can be
//! threaded through the calls; [`crate::marketplace::Marketplace`] and
//! [`crate::world::World`] are simple in-memory implementations.

use crate::errors::GhgError;
use crate::modeltime::{FloatValue, Period};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Kind of market a good is traded in.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum MarketKind {
    /// Ordinary supply and demand market.
    Normal,
    /// Greenhouse-gas constraint market, priced as a tax.
    Ghg,
    /// Fixed-price market that is never solved.
    Calibration,
}

impl fmt::Display for MarketKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            MarketKind::Normal => "NORMAL",
            MarketKind::Ghg => "GHG",
            MarketKind::Calibration => "CALIBRATION",
        };
        f.write_str(label)
    }
}

impl FromStr for MarketKind {
    type Err = GhgError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "NORMAL" => Ok(MarketKind::Normal),
            "GHG" => Ok(MarketKind::Ghg),
            "CALIBRATION" => Ok(MarketKind::Calibration),
            _ => Err(GhgError::Error(format!("Unknown market kind: {}", s))),
        }
    }
}

/// Read access to current, possibly mid-solve, market prices.
pub trait MarketPrices {
    /// Price of `good` as seen from `region` in `period`.
    fn price(&self, good: &str, region: &str, period: Period) -> FloatValue;
}

/// Default emissions and conversion coefficients, independent of any technology.
pub trait CarbonAccounting {
    /// CO2 coefficient of a primary fuel or product, in TgC/EJ.
    fn primary_fuel_co2_coef(&self, region: &str, name: &str) -> FloatValue;

    /// Coefficient used to turn a carbon tax into an energy tax for a fuel.
    fn carbon_tax_coef(&self, region: &str, fuel: &str) -> FloatValue;
}

/// Creation of markets that the solver treats as unknowns.
pub trait MarketRegistry {
    /// Create (or reuse) the market for `good` in `market_region` and map `region` onto it.
    fn set_market(&mut self, region: &str, market_region: &str, good: &str, kind: MarketKind);

    /// Flag the market for `good` in `market_region` as a solver unknown.
    fn set_market_to_solve(&mut self, good: &str, market_region: &str);
}

/// Read-only handle on the market and world services.
///
/// Passed explicitly into every call that needs prices or default
/// coefficients in place of global scenario state.
#[derive(Clone, Copy)]
pub struct ScenarioView<'a> {
    pub prices: &'a dyn MarketPrices,
    pub carbon: &'a dyn CarbonAccounting,
}

impl<'a> ScenarioView<'a> {
    pub fn new(prices: &'a dyn MarketPrices, carbon: &'a dyn CarbonAccounting) -> Self {
        Self { prices, carbon }
    }

    pub fn price(&self, good: &str, region: &str, period: Period) -> FloatValue {
        self.prices.price(good, region, period)
    }

    pub fn primary_fuel_co2_coef(&self, region: &str, name: &str) -> FloatValue {
        self.carbon.primary_fuel_co2_coef(region, name)
    }

    pub fn carbon_tax_coef(&self, region: &str, fuel: &str) -> FloatValue {
        self.carbon.carbon_tax_coef(region, fuel)
    }
}

impl fmt::Debug for ScenarioView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScenarioView").finish_non_exhaustive()
    }
}
