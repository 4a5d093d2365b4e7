use thiserror::Error;

/// Error type for invalid configuration and I/O.
///
/// Runtime accounting never fails; every variant here is raised while
/// building entities from configuration or while reading/writing files.
#[derive(Error, Debug)]
pub enum GhgError {
    #[error("{0}")]
    Error(String),
    #[error("Invalid value for {parameter} in {entity} '{name}': {reason}")]
    InvalidParameter {
        entity: String,
        name: String,
        parameter: String,
        reason: String,
    },
    #[error("A {0} was configured without a name")]
    MissingName(String),
    #[error("GHG market '{name}' has {found} period constraints but the model has {expected} periods")]
    ConstraintPeriodMismatch {
        name: String,
        expected: usize,
        found: usize,
    },
    #[error("Could not parse configuration: {0}")]
    Config(#[from] toml::de::Error),
    #[error("Could not serialise configuration: {0}")]
    Serialise(#[from] toml::ser::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<GhgError> for pyo3::PyErr {
    fn from(err: GhgError) -> pyo3::PyErr {
        pyo3::exceptions::PyValueError::new_err(err.to_string())
    }
}

/// Convenience type for `Result<T, GhgError>`.
pub type GhgResult<T> = Result<T, GhgError>;

/// Checks that a fraction lies within [0, 1].
pub fn ensure_fraction(entity: &str, name: &str, parameter: &str, value: f64) -> GhgResult<()> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(GhgError::InvalidParameter {
            entity: entity.to_string(),
            name: name.to_string(),
            parameter: parameter.to_string(),
            reason: format!("expected a value in [0, 1], got {}", value),
        })
    }
}

/// Checks that a configured name is present.
pub fn ensure_named(entity: &str, name: &str) -> GhgResult<()> {
    if name.trim().is_empty() {
        Err(GhgError::MissingName(entity.to_string()))
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fraction_bounds_are_inclusive() {
        assert!(ensure_fraction("GHG", "CO2", "remove_fraction", 0.0).is_ok());
        assert!(ensure_fraction("GHG", "CO2", "remove_fraction", 1.0).is_ok());
        assert!(ensure_fraction("GHG", "CO2", "remove_fraction", 1.5).is_err());
        assert!(ensure_fraction("GHG", "CO2", "remove_fraction", -0.1).is_err());
        assert!(ensure_fraction("GHG", "CO2", "remove_fraction", f64::NAN).is_err());
    }

    #[test]
    fn test_error_messages_name_the_entity() {
        let err = ensure_fraction("GHG", "CH4", "remove_fraction", 2.0).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("CH4"));
        assert!(message.contains("remove_fraction"));

        let err = ensure_named("grade", "  ").unwrap_err();
        assert_eq!(err.to_string(), "A grade was configured without a name");
    }
}
