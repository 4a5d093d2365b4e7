//! Python bindings for the market and world services

use crate::indirect::IndirectEmissionsCoefficient;
use crate::marketplace::Marketplace;
use crate::modeltime::{FloatValue, Modeltime, Period};
use crate::services::{CarbonAccounting, MarketKind, MarketPrices, MarketRegistry};
use crate::world::World;
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use std::collections::HashMap;

#[pyclass]
#[pyo3(name = "Modeltime")]
#[derive(Debug, Clone)]
pub struct PyModeltime(pub Modeltime);

#[pymethods]
impl PyModeltime {
    #[new]
    #[pyo3(signature = (start_year=1975, interval=15, periods=9))]
    fn new(start_year: i32, interval: i32, periods: usize) -> PyResult<Self> {
        Ok(Self(Modeltime::new(start_year, interval, periods)?))
    }

    #[getter]
    fn periods(&self) -> usize {
        self.0.max_period()
    }

    fn period_to_year(&self, period: Period) -> i32 {
        self.0.period_to_year(period)
    }

    fn year_to_period(&self, year: i32) -> Option<Period> {
        self.0.year_to_period(year)
    }
}

#[pyclass]
#[pyo3(name = "Marketplace")]
#[derive(Debug, Clone)]
pub struct PyMarketplace(pub Marketplace);

#[pymethods]
impl PyMarketplace {
    #[new]
    fn new(periods: usize) -> Self {
        Self(Marketplace::new(periods))
    }

    #[pyo3(signature = (region, market_region, good, kind="NORMAL"))]
    fn set_market(
        &mut self,
        region: &str,
        market_region: &str,
        good: &str,
        kind: &str,
    ) -> PyResult<()> {
        let kind: MarketKind = kind.parse()?;
        self.0.set_market(region, market_region, good, kind);
        Ok(())
    }

    fn set_market_to_solve(&mut self, good: &str, market_region: &str) {
        self.0.set_market_to_solve(good, market_region)
    }

    fn set_price(
        &mut self,
        good: &str,
        region: &str,
        period: Period,
        price: FloatValue,
    ) -> PyResult<()> {
        Ok(self.0.set_price(good, region, period, price)?)
    }

    fn price(&self, good: &str, region: &str, period: Period) -> FloatValue {
        self.0.price(good, region, period)
    }

    /// (good, market region) of every market the solver must clear
    fn markets_to_solve(&self) -> Vec<(String, String)> {
        self.0
            .markets_to_solve()
            .map(|m| (m.good.clone(), m.region.clone()))
            .collect()
    }
}

#[pyclass]
#[pyo3(name = "World")]
#[derive(Debug, Clone)]
pub struct PyWorld(pub World);

#[pymethods]
impl PyWorld {
    #[new]
    fn new() -> Self {
        Self(World::new())
    }

    #[staticmethod]
    fn from_dict(value: Bound<PyAny>) -> PyResult<Self> {
        let world = pythonize::depythonize::<World>(&value)
            .map_err(|e| PyValueError::new_err(format!("{}", e)))?;
        world.report_unrecognized();
        Ok(Self(world))
    }

    fn set_primary_fuel_co2_coef(&mut self, region: &str, name: &str, coef: FloatValue) {
        self.0.set_primary_fuel_co2_coef(region, name, coef)
    }

    fn set_carbon_tax_coef(&mut self, region: &str, fuel: &str, coef: FloatValue) {
        self.0.set_carbon_tax_coef(region, fuel, coef)
    }

    fn primary_fuel_co2_coef(&self, region: &str, name: &str) -> FloatValue {
        self.0.primary_fuel_co2_coef(region, name)
    }

    fn carbon_tax_coef(&self, region: &str, fuel: &str) -> FloatValue {
        self.0.carbon_tax_coef(region, fuel)
    }
}

#[pyclass]
#[pyo3(name = "IndirectEmissionsCoefficient")]
#[derive(Debug, Clone)]
pub struct PyIndirectEmissionsCoefficient(pub IndirectEmissionsCoefficient);

#[pymethods]
impl PyIndirectEmissionsCoefficient {
    #[new]
    fn new(name: String, coefficients: HashMap<String, FloatValue>) -> Self {
        let mut entry = IndirectEmissionsCoefficient::new(name);
        entry.coefficients.extend(coefficients);
        Self(entry)
    }

    #[getter]
    fn name(&self) -> String {
        self.0.name.clone()
    }

    fn coefficient_for(&self, gas: &str) -> FloatValue {
        self.0.coefficient_for(gas)
    }
}

#[pymodule]
pub fn core(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyModeltime>()?;
    m.add_class::<PyMarketplace>()?;
    m.add_class::<PyWorld>()?;
    m.add_class::<PyIndirectEmissionsCoefficient>()?;
    Ok(())
}
