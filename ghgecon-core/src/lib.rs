pub mod config;
pub mod debug;
pub mod indirect;
pub mod marketplace;
pub mod modeltime;
pub mod python;
pub mod services;
pub mod world;

pub mod errors;
