//! Configuration records
//!
//! Each accounting entity is built from a parameters struct that mirrors the
//! scenario file. Keys a record does not understand are kept in its
//! `unrecognized` map and reported when the entity is built.

mod ghg_market;
mod ghg_species;
mod grade;

pub use ghg_market::{GhgMarketParameters, PeriodConstraint};
pub use ghg_species::{EmissionsPathway, GhgSpeciesParameters};
pub use grade::{GradeParameters, SubresourceParameters};
