//! Greenhouse gas accounting
//!
//! - [`GhgSpecies`]: per-technology emissions and tax cost of one gas
//! - [`GhgMarketConstraint`]: emissions ceiling bound to a solvable market

mod market;
mod species;

pub use market::GhgMarketConstraint;
pub use species::{GhgSpecies, CVRT90, TGC_PER_EJ_TO_TC_PER_GJ};
