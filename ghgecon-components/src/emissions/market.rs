//! GHG constraint market
//!
//! A [`GhgMarketConstraint`] binds a per-period emissions ceiling to a
//! price-bearing market. It registers the market with the solver, stores the
//! emissions realized each iteration and exposes the residual
//! `constraint - emission` that the solver drives to zero by moving the price.
//! No solving happens here.

use crate::parameters::{GhgMarketParameters, PeriodConstraint};
use ghgecon_core::config::report_unrecognized;
use ghgecon_core::debug::DebugWriter;
use ghgecon_core::errors::{ensure_named, GhgError, GhgResult};
use ghgecon_core::modeltime::{FloatValue, Modeltime, Period};
use ghgecon_core::services::{MarketKind, MarketRegistry};
use std::io::{self, Write};
use tracing::debug;

/// Per-period emissions ceiling for one gas over one market region.
#[derive(Debug, Clone, PartialEq)]
pub struct GhgMarketConstraint {
    /// Gas name, also the name of the traded good
    name: String,
    unit: String,
    /// Market region
    market: String,
    /// Emissions ceiling per period
    constraint: Vec<FloatValue>,
    /// Realized emissions per period
    emission: Vec<FloatValue>,
}

impl GhgMarketConstraint {
    /// Build a market with one ceiling per model period.
    pub fn from_parameters(parameters: GhgMarketParameters, modeltime: &Modeltime) -> GhgResult<Self> {
        ensure_named("GHG market", &parameters.name)?;
        if parameters.market.trim().is_empty() {
            return Err(GhgError::InvalidParameter {
                entity: "GHG market".to_string(),
                name: parameters.name,
                parameter: "market".to_string(),
                reason: "a market region is required".to_string(),
            });
        }

        let expected = modeltime.max_period();
        if parameters.periods.len() != expected {
            return Err(GhgError::ConstraintPeriodMismatch {
                name: parameters.name,
                expected,
                found: parameters.periods.len(),
            });
        }

        report_unrecognized("GHG market", &parameters.name, &parameters.unrecognized);
        for period in parameters.periods.iter() {
            report_unrecognized("GHG market period", &parameters.name, &period.unrecognized);
        }

        let constraint = parameters.constraints();
        Ok(Self {
            name: parameters.name,
            unit: parameters.unit,
            market: parameters.market,
            constraint,
            emission: vec![0.0; expected],
        })
    }

    /// Configuration record that rebuilds this market. Realized emissions are not kept.
    pub fn to_parameters(&self) -> GhgMarketParameters {
        GhgMarketParameters {
            name: self.name.clone(),
            unit: self.unit.clone(),
            market: self.market.clone(),
            periods: self
                .constraint
                .iter()
                .copied()
                .map(PeriodConstraint::new)
                .collect(),
            ..Default::default()
        }
    }

    /// Create the market for this gas over its market region and make its price a solver unknown.
    pub fn register_market(&self, registry: &mut dyn MarketRegistry, region: &str) {
        debug!(
            "Registering {} market {} for region {}",
            self.name, self.market, region
        );
        registry.set_market(region, &self.market, &self.name, MarketKind::Ghg);
        registry.set_market_to_solve(&self.name, &self.market);
    }

    /// Overwrite the realized emissions for a period.
    pub fn set_emission(&mut self, amount: FloatValue, period: Period) {
        self.emission[period] = amount;
    }

    /// Gas name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Unit of the ceiling and emissions
    pub fn unit(&self) -> &str {
        &self.unit
    }

    /// Market region the constraint applies over.
    pub fn market(&self) -> &str {
        &self.market
    }

    /// Emissions ceiling for a period.
    pub fn constraint(&self, period: Period) -> FloatValue {
        self.constraint[period]
    }

    /// Emissions last reported for a period.
    pub fn emission(&self, period: Period) -> FloatValue {
        self.emission[period]
    }

    /// Headroom left under the ceiling; negative when the constraint is exceeded.
    pub fn residual(&self, period: Period) -> FloatValue {
        self.constraint[period] - self.emission[period]
    }

    /// Ceilings of every period
    pub fn constraints(&self) -> &[FloatValue] {
        &self.constraint
    }

    /// Realized emissions of every period
    pub fn emissions(&self) -> &[FloatValue] {
        &self.emission
    }

    /// Write the market's ceiling and emissions for one period.
    pub fn write_debug<W: Write>(&self, period: Period, writer: &mut DebugWriter<'_, W>) -> io::Result<()> {
        writer.open("ghgmarket", &self.name)?;
        writer.element("unit", &self.unit)?;
        writer.element("market", &self.market)?;
        writer.element("constraint", self.constraint[period])?;
        writer.element("emission", self.emission[period])?;
        writer.close("ghgmarket")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ghgecon_core::marketplace::Marketplace;
    use ghgecon_core::services::MarketPrices;

    fn modeltime() -> Modeltime {
        Modeltime::new(2005, 5, 3).unwrap()
    }

    fn market() -> GhgMarketConstraint {
        let parameters = GhgMarketParameters::new("CO2", "global", [100.0, 90.0, 80.0]);
        GhgMarketConstraint::from_parameters(parameters, &modeltime()).unwrap()
    }

    #[test]
    fn test_series_sized_to_model() {
        let market = market();
        assert_eq!(market.constraints(), &[100.0, 90.0, 80.0]);
        assert_eq!(market.emissions(), &[0.0, 0.0, 0.0]);
        assert_eq!(market.name(), "CO2");
        assert_eq!(market.market(), "global");
    }

    #[test]
    fn test_constraint_count_must_match_periods() {
        let parameters = GhgMarketParameters::new("CO2", "global", [100.0, 90.0]);
        let err = GhgMarketConstraint::from_parameters(parameters, &modeltime()).unwrap_err();
        assert!(matches!(
            err,
            GhgError::ConstraintPeriodMismatch {
                expected: 3,
                found: 2,
                ..
            }
        ));
    }

    #[test]
    fn test_market_region_required() {
        let parameters = GhgMarketParameters::new("CO2", "", [1.0, 1.0, 1.0]);
        assert!(GhgMarketConstraint::from_parameters(parameters, &modeltime()).is_err());
    }

    #[test]
    fn test_set_emission_overwrites() {
        let mut market = market();
        market.set_emission(40.0, 1);
        market.set_emission(70.0, 1);
        assert_eq!(market.emission(1), 70.0);

        // Periods may be written in any order
        market.set_emission(5.0, 2);
        market.set_emission(15.0, 0);
        assert_eq!(market.emissions(), &[15.0, 70.0, 5.0]);
    }

    #[test]
    fn test_residual() {
        let mut market = market();
        market.set_emission(95.0, 1);
        assert_eq!(market.residual(1), -5.0);
        market.set_emission(85.0, 1);
        assert_eq!(market.residual(1), 5.0);
        assert_eq!(market.residual(0), 100.0);
    }

    #[test]
    #[should_panic]
    fn test_out_of_range_period_panics() {
        market().constraint(3);
    }

    #[test]
    fn test_register_market() {
        let market = market();
        let mut marketplace = Marketplace::new(3);
        market.register_market(&mut marketplace, "USA");
        market.register_market(&mut marketplace, "China");

        assert_eq!(marketplace.len(), 1);
        let solved: Vec<_> = marketplace.markets_to_solve().collect();
        assert_eq!(solved.len(), 1);
        assert_eq!(solved[0].kind, MarketKind::Ghg);
        assert_eq!(solved[0].good, "CO2");
        assert_eq!(solved[0].region, "global");

        marketplace.set_price("CO2", "global", 2, 12.0).unwrap();
        assert_eq!(marketplace.price("CO2", "China", 2), 12.0);
    }

    #[test]
    fn test_round_trip() {
        let mut market = market();
        market.set_emission(1.0, 0);
        let serialised = toml::to_string(&market.to_parameters()).unwrap();
        let parameters: GhgMarketParameters = toml::from_str(&serialised).unwrap();
        let rebuilt = GhgMarketConstraint::from_parameters(parameters, &modeltime()).unwrap();

        assert_eq!(rebuilt.constraints(), market.constraints());
        // Realized emissions are not configuration
        assert_eq!(rebuilt.emission(0), 0.0);
    }

    #[test]
    fn test_debug_block() {
        let mut market = market();
        market.set_emission(42.0, 2);
        let mut out = Vec::new();
        market
            .write_debug(2, &mut DebugWriter::new(&mut out))
            .unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("\t<constraint>80</constraint>\n"));
        assert!(text.contains("\t<emission>42</emission>\n"));
    }
}
