//! GHG market parameters

use ghgecon_core::config::Unrecognized;
use ghgecon_core::modeltime::FloatValue;
use serde::{Deserialize, Serialize};

/// Emissions ceiling for one period.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PeriodConstraint {
    /// unit: same as the market (e.g. MTC)
    pub constraint: FloatValue,
    #[serde(flatten)]
    pub unrecognized: Unrecognized,
}

impl PeriodConstraint {
    pub fn new(constraint: FloatValue) -> Self {
        Self {
            constraint,
            unrecognized: Unrecognized::new(),
        }
    }
}

/// Parameters for a GHG constraint market.
///
/// ```toml
/// [[ghg_market]]
/// name = "CO2"
/// unit = "MTC"
/// market = "global"
/// period = [{ constraint = 1500.0 }, { constraint = 1450.0 }]
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GhgMarketParameters {
    /// Gas the market constrains
    pub name: String,
    pub unit: String,
    /// Market region the constraint applies over
    pub market: String,
    /// One ceiling per model period, in period order
    #[serde(rename = "period")]
    pub periods: Vec<PeriodConstraint>,
    #[serde(flatten)]
    pub unrecognized: Unrecognized,
}

impl GhgMarketParameters {
    pub fn new(
        name: impl Into<String>,
        market: impl Into<String>,
        constraints: impl IntoIterator<Item = FloatValue>,
    ) -> Self {
        Self {
            name: name.into(),
            market: market.into(),
            periods: constraints.into_iter().map(PeriodConstraint::new).collect(),
            ..Default::default()
        }
    }

    pub fn constraints(&self) -> Vec<FloatValue> {
        self.periods.iter().map(|p| p.constraint).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_period_blocks_from_toml() {
        let parameters: GhgMarketParameters = toml::from_str(
            r#"
            name = "CO2"
            unit = "MTC"
            market = "global"

            [[period]]
            constraint = 1500.0

            [[period]]
            constraint = 1400.0
            "#,
        )
        .unwrap();

        assert_eq!(parameters.market, "global");
        assert_eq!(parameters.constraints(), vec![1500.0, 1400.0]);
    }
}
