//! Emissions-economics accounting components
//!
//! This crate provides the entities a technology and resource driver call into
//! every solver iteration:
//!
//! - `emissions`: per-gas emissions and tax cost ([`emissions::GhgSpecies`]) and
//!   emissions-constraint markets ([`emissions::GhgMarketConstraint`])
//! - `resources`: resource grade cost escalation ([`resources::ResourceGrade`])
//!
//! # Parameters
//!
//! Each entity is built from an associated struct in the `parameters` module
//! that mirrors its scenario file record.

pub mod emissions;
pub mod parameters;
pub mod python;
pub mod resources;
pub mod scenario;
