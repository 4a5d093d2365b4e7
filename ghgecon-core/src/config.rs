//! TOML configuration helpers
//!
//! Configuration records keep any keys they do not understand in an
//! [`Unrecognized`] map. Those keys are reported with [`report_unrecognized`]
//! and otherwise ignored so that newer files still load.

use crate::errors::GhgResult;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use tracing::warn;

/// Keys found in a configuration record that have no matching field.
pub type Unrecognized = BTreeMap<String, toml::Value>;

/// Log every unrecognized key of a record. Returns the number reported.
pub fn report_unrecognized(kind: &str, name: &str, unrecognized: &Unrecognized) -> usize {
    for key in unrecognized.keys() {
        warn!(
            "Unrecognized key '{}' found while parsing {} '{}'; ignoring it",
            key, kind, name
        );
    }
    unrecognized.len()
}

pub fn from_toml_str<T: DeserializeOwned>(contents: &str) -> GhgResult<T> {
    Ok(toml::from_str(contents)?)
}

/// Read and deserialise a TOML file.
pub fn read_toml<T: DeserializeOwned>(path: impl AsRef<Path>) -> GhgResult<T> {
    let contents = fs::read_to_string(path)?;
    from_toml_str(&contents)
}

pub fn to_toml_string<T: Serialize>(value: &T) -> GhgResult<String> {
    Ok(toml::to_string(value)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Serialize, Deserialize)]
    struct Record {
        name: String,
        #[serde(default)]
        value: f64,
        #[serde(flatten)]
        unrecognized: Unrecognized,
    }

    #[test]
    fn test_unknown_keys_are_collected() {
        let record: Record = from_toml_str(
            r#"
            name = "coal"
            value = 2.5
            colour = "black"
            "#,
        )
        .unwrap();

        assert_eq!(record.name, "coal");
        assert_eq!(record.value, 2.5);
        assert_eq!(report_unrecognized("record", &record.name, &record.unrecognized), 1);
    }

    #[test]
    fn test_malformed_toml_is_an_error() {
        let result = from_toml_str::<Record>("name = ");
        assert!(result.is_err());
    }

    #[test]
    fn test_missing_file_is_an_io_error() {
        let result = read_toml::<Record>("/this/path/does/not/exist.toml");
        assert!(matches!(result, Err(crate::errors::GhgError::Io(_))));
    }

    #[test]
    fn test_serialise() {
        let record = Record {
            name: "gas".to_string(),
            value: 1.0,
            unrecognized: Unrecognized::new(),
        };
        let serialised = to_toml_string(&record).unwrap();
        assert!(serialised.contains("name = \"gas\""));
    }
}
