//! Resource grades
//!
//! A grade is one cost tier of a finite resource. Its total cost for a period
//! is
//!
//! $$C_{total} = \frac{C_{extract} + C_{environ}}{T_{cum}} + \tau$$
//!
//! where $T_{cum}$ is the cumulative technical change divisor and $\tau$ the
//! severance or carbon tax. Costs are recomputed each call, never accumulated.

use crate::parameters::GradeParameters;
use ghgecon_core::config::report_unrecognized;
use ghgecon_core::debug::DebugWriter;
use ghgecon_core::errors::{ensure_named, GhgResult};
use ghgecon_core::modeltime::{FloatValue, Modeltime, Period};
use std::io::{self, Write};

/// One cost tier of a resource.
#[derive(Debug, Clone, PartialEq)]
pub struct ResourceGrade {
    name: String,
    /// Amount of the resource available in this grade
    available: FloatValue,
    /// Base extraction cost before technical change
    extraction_cost: FloatValue,
    /// Total cost per period, written by [`ResourceGrade::calc_cost`]
    total_cost: Vec<FloatValue>,
}

impl ResourceGrade {
    /// Build a grade with a zeroed total-cost series spanning every model period.
    pub fn from_parameters(parameters: GradeParameters, modeltime: &Modeltime) -> GhgResult<Self> {
        ensure_named("grade", &parameters.name)?;
        report_unrecognized("grade", &parameters.name, &parameters.unrecognized);

        Ok(Self {
            name: parameters.name,
            available: parameters.available,
            extraction_cost: parameters.extraction_cost,
            total_cost: vec![0.0; modeltime.max_period()],
        })
    }

    /// Configuration record that rebuilds this grade.
    pub fn to_parameters(&self) -> GradeParameters {
        GradeParameters::new(self.name.clone(), self.available, self.extraction_cost)
    }

    /// Recompute the total cost of the grade for a period.
    ///
    /// `cum_tech_change` must be non-zero.
    pub fn calc_cost(
        &mut self,
        tax: FloatValue,
        cum_tech_change: FloatValue,
        environ_cost: FloatValue,
        period: Period,
    ) {
        debug_assert!(
            cum_tech_change != 0.0,
            "cumulative technical change for grade {} must be non-zero",
            self.name
        );
        self.total_cost[period] = (self.extraction_cost + environ_cost) / cum_tech_change + tax;
    }

    /// Grade name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Amount available in this grade
    pub fn available(&self) -> FloatValue {
        self.available
    }

    /// Base extraction cost
    pub fn extraction_cost(&self) -> FloatValue {
        self.extraction_cost
    }

    /// Total cost computed by the last [`ResourceGrade::calc_cost`] for a period.
    pub fn cost(&self, period: Period) -> FloatValue {
        self.total_cost[period]
    }

    /// Total cost of every period
    pub fn total_costs(&self) -> &[FloatValue] {
        &self.total_cost
    }

    /// Write results, one total cost per period tagged with its year.
    pub fn write_output<W: Write>(
        &self,
        modeltime: &Modeltime,
        writer: &mut DebugWriter<'_, W>,
    ) -> io::Result<()> {
        writer.open("grade", &self.name)?;
        writer.element("available", self.available)?;
        writer.element("extractioncost", self.extraction_cost)?;
        for (period, cost) in self.total_cost.iter().enumerate() {
            writer.element_for_year("totalcost", cost, modeltime.period_to_year(period))?;
        }
        writer.close("grade")
    }

    /// Write the grade's state for one period.
    pub fn write_debug<W: Write>(&self, period: Period, writer: &mut DebugWriter<'_, W>) -> io::Result<()> {
        writer.open("Grade", &self.name)?;
        writer.element("available", self.available)?;
        writer.element("extractioncost", self.extraction_cost)?;
        writer.element("totalcost", self.total_cost[period])?;
        writer.close("Grade")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn grade() -> ResourceGrade {
        ResourceGrade::from_parameters(
            GradeParameters::new("grade 1", 250.0, 10.0),
            &Modeltime::new(1975, 15, 4).unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn test_cost_composition() {
        let mut grade = grade();
        grade.calc_cost(5.0, 2.0, 3.0, 1);
        assert_eq!(grade.cost(1), 11.5);

        // Recomputed, not accumulated
        grade.calc_cost(5.0, 1.0, 1.0, 1);
        assert_eq!(grade.cost(1), 16.0);

        grade.calc_cost(5.0, 1.0, 3.0, 1);
        assert_eq!(grade.cost(1), 18.0);
    }

    #[test]
    fn test_later_tax_overwrites() {
        let mut grade = grade();
        grade.calc_cost(5.0, 1.0, 0.0, 2);
        grade.calc_cost(1.0, 1.0, 0.0, 2);
        assert_eq!(grade.cost(2), 11.0);
        assert_eq!(grade.cost(0), 0.0);
    }

    #[test]
    fn test_technical_change_lowers_cost() {
        let mut grade = grade();
        let mut cum_tech_change = 1.0;
        for period in 0..4 {
            grade.calc_cost(0.0, cum_tech_change, 0.0, period);
            cum_tech_change *= 1.1;
        }
        let costs = grade.total_costs();
        assert!(costs.windows(2).all(|w| w[1] < w[0]));
        assert_relative_eq!(costs[3], 10.0 / 1.1_f64.powi(3), epsilon = 1e-12);
    }

    #[test]
    fn test_accessors() {
        let grade = grade();
        assert_eq!(grade.name(), "grade 1");
        assert_eq!(grade.available(), 250.0);
        assert_eq!(grade.extraction_cost(), 10.0);
        assert_eq!(grade.total_costs().len(), 4);
        assert_eq!(grade.to_parameters(), GradeParameters::new("grade 1", 250.0, 10.0));
    }

    #[test]
    fn test_unnamed_grade_rejected() {
        let result = ResourceGrade::from_parameters(
            GradeParameters::new("", 1.0, 1.0),
            &Modeltime::default(),
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_output_tags_years() {
        let mut grade = grade();
        grade.calc_cost(0.0, 1.0, 0.0, 0);
        let mut out = Vec::new();
        grade
            .write_output(&Modeltime::new(1975, 15, 4).unwrap(), &mut DebugWriter::new(&mut out))
            .unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("\t<totalcost year=\"1975\">10</totalcost>\n"));
        assert!(text.contains("\t<totalcost year=\"2020\">0</totalcost>\n"));
    }

    #[test]
    fn test_debug_block() {
        let mut grade = grade();
        grade.calc_cost(5.0, 2.0, 3.0, 1);
        let mut out = Vec::new();
        grade.write_debug(1, &mut DebugWriter::new(&mut out)).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(
            text,
            "<Grade name=\"grade 1\">\n\t<available>250</available>\n\t<extractioncost>10</extractioncost>\n\t<totalcost>11.5</totalcost>\n</Grade>\n"
        );
    }
}
