pub mod api;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::{cli::LocalStorage, toml_config::FileConfig, Settings};

pub use app::{Mode, Runner};
pub use crate::core::search::{batch, forward_search, near_target_cost, nearest_to_target};
pub use crate::core::{PalindromeMatch, PalindromeSearch, PriceResults, VolumeKind};
pub use utils::error::{FuelError, Result};
