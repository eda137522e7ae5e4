//! Configuration loading for the Ponto Engine.
//!
//! This module loads the payroll policy (working-day limits, night window,
//! rate multipliers) and the regional holiday list from YAML files.
//!
//! # Example
//!
//! ```no_run
//! use ponto_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/ponto").unwrap();
//! println!("Loaded policy: {}", config.policy().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    HoursConfig, HolidaysConfig, NightWindowConfig, PolicyConfig, PolicyMetadata,
    RegionalHolidayConfig,
};
