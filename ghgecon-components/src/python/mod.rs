use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::{pymodule, Bound, PyResult};

use ghgecon_core::modeltime::{FloatValue, Period};
use ghgecon_core::python::{PyIndirectEmissionsCoefficient, PyMarketplace, PyModeltime, PyWorld};
use ghgecon_core::services::ScenarioView;

use crate::emissions::{GhgMarketConstraint, GhgSpecies};
use crate::parameters::{GhgMarketParameters, GhgSpeciesParameters, GradeParameters};
use crate::resources::ResourceGrade;

fn depythonize_parameters<'py, T: serde::de::DeserializeOwned>(
    parameters: &Bound<'py, PyAny>,
) -> PyResult<T> {
    pythonize::depythonize::<T>(parameters).map_err(|e| PyValueError::new_err(format!("{}", e)))
}

#[pyclass]
#[pyo3(name = "GhgSpecies")]
#[derive(Debug, Clone)]
pub struct PyGhgSpecies(pub GhgSpecies);

#[pymethods]
impl PyGhgSpecies {
    #[new]
    #[pyo3(signature = (name, unit="", remove_fraction=0.0, gwp=1.0, emiss_coef=0.0))]
    fn new(
        name: &str,
        unit: &str,
        remove_fraction: FloatValue,
        gwp: FloatValue,
        emiss_coef: FloatValue,
    ) -> PyResult<Self> {
        Ok(Self(GhgSpecies::new(name, unit, remove_fraction, gwp, emiss_coef)?))
    }

    #[staticmethod]
    fn from_parameters(parameters: Bound<PyAny>) -> PyResult<Self> {
        let parameters: GhgSpeciesParameters = depythonize_parameters(&parameters)?;
        Ok(Self(GhgSpecies::from_parameters(parameters)?))
    }

    fn set_emiss_coef(&mut self, emiss_coef: FloatValue) {
        self.0.set_emiss_coef(emiss_coef)
    }

    fn set_remove_fraction(&mut self, remove_fraction: FloatValue) -> PyResult<()> {
        Ok(self.0.set_remove_fraction(remove_fraction)?)
    }

    fn reset_emissions(&mut self) {
        self.0.reset_emissions()
    }

    fn tax_conversion_factor(
        &self,
        marketplace: PyRef<PyMarketplace>,
        world: PyRef<PyWorld>,
        region: &str,
        fuel: &str,
    ) -> FloatValue {
        let view = ScenarioView::new(&marketplace.0, &world.0);
        self.0.tax_conversion_factor(&view, region, fuel)
    }

    fn generalized_cost(
        &self,
        marketplace: PyRef<PyMarketplace>,
        world: PyRef<PyWorld>,
        region: &str,
        fuel: &str,
        period: Period,
    ) -> FloatValue {
        let view = ScenarioView::new(&marketplace.0, &world.0);
        self.0.generalized_cost(&view, region, fuel, period)
    }

    #[allow(clippy::too_many_arguments)]
    fn calc_emissions(
        &mut self,
        marketplace: PyRef<PyMarketplace>,
        world: PyRef<PyWorld>,
        region: &str,
        fuel: &str,
        input: FloatValue,
        product: &str,
        output: FloatValue,
    ) {
        let view = ScenarioView::new(&marketplace.0, &world.0);
        self.0
            .calc_emissions(&view, region, fuel, input, product, output)
    }

    fn calc_indirect_emissions(
        &mut self,
        input: FloatValue,
        fuel: &str,
        coefficients: Vec<PyIndirectEmissionsCoefficient>,
    ) {
        let coefficients: Vec<_> = coefficients.into_iter().map(|c| c.0).collect();
        self.0.calc_indirect_emissions(input, fuel, &coefficients)
    }

    #[getter]
    fn name(&self) -> String {
        self.0.name().to_string()
    }

    #[getter]
    fn unit(&self) -> String {
        self.0.unit().to_string()
    }

    #[getter]
    fn remove_fraction(&self) -> FloatValue {
        self.0.remove_fraction()
    }

    #[getter]
    fn gwp(&self) -> FloatValue {
        self.0.gwp()
    }

    #[getter]
    fn emiss_coef(&self) -> FloatValue {
        self.0.emiss_coef()
    }

    #[getter]
    fn storage_cost(&self) -> FloatValue {
        self.0.storage_cost()
    }

    #[getter]
    fn emission(&self) -> FloatValue {
        self.0.emission()
    }

    #[getter]
    fn sequestered_amount(&self) -> FloatValue {
        self.0.sequestered_amount()
    }

    #[getter]
    fn emiss_gwp(&self) -> FloatValue {
        self.0.emiss_gwp()
    }

    #[getter]
    fn emiss_fuel(&self) -> FloatValue {
        self.0.emiss_fuel()
    }

    #[getter]
    fn emiss_ind(&self) -> FloatValue {
        self.0.emiss_ind()
    }
}

#[pyclass]
#[pyo3(name = "GhgMarketConstraint")]
#[derive(Debug, Clone)]
pub struct PyGhgMarketConstraint(pub GhgMarketConstraint);

#[pymethods]
impl PyGhgMarketConstraint {
    #[new]
    fn new(
        name: &str,
        market: &str,
        constraints: Vec<FloatValue>,
        modeltime: PyRef<PyModeltime>,
    ) -> PyResult<Self> {
        let parameters = GhgMarketParameters::new(name, market, constraints);
        Ok(Self(GhgMarketConstraint::from_parameters(
            parameters,
            &modeltime.0,
        )?))
    }

    #[staticmethod]
    fn from_parameters(parameters: Bound<PyAny>, modeltime: PyRef<PyModeltime>) -> PyResult<Self> {
        let parameters: GhgMarketParameters = depythonize_parameters(&parameters)?;
        Ok(Self(GhgMarketConstraint::from_parameters(
            parameters,
            &modeltime.0,
        )?))
    }

    fn register_market(&self, mut marketplace: PyRefMut<PyMarketplace>, region: &str) {
        self.0.register_market(&mut marketplace.0, region)
    }

    fn set_emission(&mut self, amount: FloatValue, period: Period) {
        self.0.set_emission(amount, period)
    }

    #[getter]
    fn name(&self) -> String {
        self.0.name().to_string()
    }

    #[getter]
    fn market(&self) -> String {
        self.0.market().to_string()
    }

    fn constraint(&self, period: Period) -> FloatValue {
        self.0.constraint(period)
    }

    fn emission(&self, period: Period) -> FloatValue {
        self.0.emission(period)
    }

    fn residual(&self, period: Period) -> FloatValue {
        self.0.residual(period)
    }
}

#[pyclass]
#[pyo3(name = "ResourceGrade")]
#[derive(Debug, Clone)]
pub struct PyResourceGrade(pub ResourceGrade);

#[pymethods]
impl PyResourceGrade {
    #[new]
    fn new(
        name: &str,
        available: FloatValue,
        extraction_cost: FloatValue,
        modeltime: PyRef<PyModeltime>,
    ) -> PyResult<Self> {
        let parameters = GradeParameters::new(name, available, extraction_cost);
        Ok(Self(ResourceGrade::from_parameters(parameters, &modeltime.0)?))
    }

    fn calc_cost(
        &mut self,
        tax: FloatValue,
        cum_tech_change: FloatValue,
        environ_cost: FloatValue,
        period: Period,
    ) {
        self.0.calc_cost(tax, cum_tech_change, environ_cost, period)
    }

    fn cost(&self, period: Period) -> FloatValue {
        self.0.cost(period)
    }

    #[getter]
    fn name(&self) -> String {
        self.0.name().to_string()
    }

    #[getter]
    fn available(&self) -> FloatValue {
        self.0.available()
    }

    #[getter]
    fn extraction_cost(&self) -> FloatValue {
        self.0.extraction_cost()
    }
}

#[pymodule]
pub fn components(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyGhgSpecies>()?;
    m.add_class::<PyGhgMarketConstraint>()?;
    m.add_class::<PyResourceGrade>()?;
    Ok(())
}
