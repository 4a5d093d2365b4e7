//! In-memory marketplace
//!
//! Holds one [`Market`] per `(good, market region)` pair and maps every
//! participating region onto it. Prices are written by whoever drives the
//! solve (see [`Marketplace::set_price`]) and read through [`MarketPrices`].

use crate::errors::{GhgError, GhgResult};
use crate::modeltime::{FloatValue, Period};
use crate::services::{MarketKind, MarketPrices, MarketRegistry};
use std::collections::HashMap;
use tracing::{debug, warn};

/// A single price-bearing market.
#[derive(Debug, Clone, PartialEq)]
pub struct Market {
    pub good: String,
    /// Region the market is defined over (may span several model regions).
    pub region: String,
    pub kind: MarketKind,
    /// Whether the solver treats the price as an unknown.
    pub solve: bool,
    prices: Vec<FloatValue>,
}

impl Market {
    fn new(good: &str, region: &str, kind: MarketKind, periods: usize) -> Self {
        Self {
            good: good.to_string(),
            region: region.to_string(),
            kind,
            solve: false,
            prices: vec![0.0; periods],
        }
    }

    pub fn price(&self, period: Period) -> FloatValue {
        self.prices[period]
    }

    pub fn prices(&self) -> &[FloatValue] {
        &self.prices
    }
}

/// Collection of markets keyed by good and region.
#[derive(Debug, Clone, Default)]
pub struct Marketplace {
    periods: usize,
    markets: Vec<Market>,
    /// (good, region) -> index into `markets`, for both model and market regions.
    lookup: HashMap<(String, String), usize>,
}

impl Marketplace {
    /// Create an empty marketplace whose price series span `periods` periods.
    pub fn new(periods: usize) -> Self {
        Self {
            periods,
            markets: Vec::new(),
            lookup: HashMap::new(),
        }
    }

    fn index(&self, good: &str, region: &str) -> Option<usize> {
        self.lookup
            .get(&(good.to_string(), region.to_string()))
            .copied()
    }

    /// Market that `region` trades `good` in.
    pub fn market(&self, good: &str, region: &str) -> Option<&Market> {
        self.index(good, region).map(|i| &self.markets[i])
    }

    /// Set the price of the market `region` trades `good` in.
    ///
    /// Fails when no such market exists or `period` is outside the price series.
    pub fn set_price(
        &mut self,
        good: &str,
        region: &str,
        period: Period,
        price: FloatValue,
    ) -> GhgResult<()> {
        let index = self.index(good, region).ok_or_else(|| {
            GhgError::Error(format!("No market for {} in region {}", good, region))
        })?;
        let periods = self.periods;
        let slot = self.markets[index].prices.get_mut(period).ok_or_else(|| {
            GhgError::Error(format!(
                "Period {} is outside the {} periods of the {} market",
                period, periods, good
            ))
        })?;
        *slot = price;
        Ok(())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Market> {
        self.markets.iter()
    }

    /// Markets whose prices are solver unknowns.
    pub fn markets_to_solve(&self) -> impl Iterator<Item = &Market> {
        self.markets.iter().filter(|m| m.solve)
    }

    pub fn len(&self) -> usize {
        self.markets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.markets.is_empty()
    }
}

impl MarketRegistry for Marketplace {
    fn set_market(&mut self, region: &str, market_region: &str, good: &str, kind: MarketKind) {
        let index = match self.index(good, market_region) {
            Some(index) => index,
            None => {
                debug!(
                    "Creating {} market for {} in market region {}",
                    kind, good, market_region
                );
                self.markets
                    .push(Market::new(good, market_region, kind, self.periods));
                let index = self.markets.len() - 1;
                self.lookup
                    .insert((good.to_string(), market_region.to_string()), index);
                index
            }
        };
        self.lookup
            .insert((good.to_string(), region.to_string()), index);
    }

    fn set_market_to_solve(&mut self, good: &str, market_region: &str) {
        match self.index(good, market_region) {
            Some(index) => self.markets[index].solve = true,
            None => warn!(
                "Cannot solve {} in {}: the market has not been created",
                good, market_region
            ),
        }
    }
}

impl MarketPrices for Marketplace {
    fn price(&self, good: &str, region: &str, period: Period) -> FloatValue {
        match self.market(good, region) {
            Some(market) => market.price(period),
            None => {
                debug!("No market for {} in {}; using a price of 0", good, region);
                0.0
            }
        }
    }
}
