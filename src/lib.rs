pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use adapters::{HeadHunterProvider, SuperJobProvider};
pub use config::{CliConfig, StatsConfig};
pub use core::{engine::StatsEngine, LanguageStats, ProviderReport};
pub use utils::error::{Result, StatsError};
