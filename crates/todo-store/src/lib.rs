pub mod config;
pub mod day_store;
pub mod error;

pub use config::{Config, ConfigFile, Overrides, default_base_dir, default_config_path};
pub use day_store::{DayDocument, DayStore};
pub use error::{Result, StoreError};
