//! Resource supply tiers

mod grade;

pub use grade::ResourceGrade;

use crate::parameters::SubresourceParameters;
use ghgecon_core::config::report_unrecognized;
use ghgecon_core::errors::{ensure_named, GhgResult};
use ghgecon_core::modeltime::Modeltime;

/// The ordered grades of one resource.
///
/// Grade order is kept as configured; ranking grades by cost is up to the
/// resource-supply driver.
#[derive(Debug, Clone, PartialEq)]
pub struct Subresource {
    name: String,
    grades: Vec<ResourceGrade>,
}

impl Subresource {
    /// Build every configured grade, failing on the first invalid one.
    pub fn from_parameters(parameters: SubresourceParameters, modeltime: &Modeltime) -> GhgResult<Self> {
        ensure_named("subresource", &parameters.name)?;
        report_unrecognized("subresource", &parameters.name, &parameters.unrecognized);

        let grades = parameters
            .grades
            .into_iter()
            .map(|grade| ResourceGrade::from_parameters(grade, modeltime))
            .collect::<GhgResult<Vec<_>>>()?;

        Ok(Self {
            name: parameters.name,
            grades,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn grades(&self) -> &[ResourceGrade] {
        &self.grades
    }

    pub fn grades_mut(&mut self) -> &mut [ResourceGrade] {
        &mut self.grades
    }

    /// First grade named `name`
    pub fn grade(&self, name: &str) -> Option<&ResourceGrade> {
        self.grades.iter().find(|g| g.name() == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parameters::GradeParameters;

    #[test]
    fn test_grades_keep_configured_order() {
        let parameters = SubresourceParameters {
            name: "crude oil".to_string(),
            grades: vec![
                GradeParameters::new("grade 2", 50.0, 6.0),
                GradeParameters::new("grade 1", 100.0, 2.0),
            ],
            ..Default::default()
        };
        let mut subresource = Subresource::from_parameters(parameters, &Modeltime::default()).unwrap();

        let names: Vec<_> = subresource.grades().iter().map(|g| g.name()).collect();
        assert_eq!(names, vec!["grade 2", "grade 1"]);
        assert_eq!(subresource.grade("grade 1").unwrap().extraction_cost(), 2.0);
        assert!(subresource.grade("grade 3").is_none());

        for grade in subresource.grades_mut() {
            grade.calc_cost(1.0, 1.0, 0.0, 0);
        }
        assert_eq!(subresource.grade("grade 2").unwrap().cost(0), 7.0);
    }

    #[test]
    fn test_invalid_grade_fails_the_subresource() {
        let parameters = SubresourceParameters {
            name: "coal".to_string(),
            grades: vec![GradeParameters::new("", 1.0, 1.0)],
            ..Default::default()
        };
        assert!(Subresource::from_parameters(parameters, &Modeltime::default()).is_err());
    }
}
