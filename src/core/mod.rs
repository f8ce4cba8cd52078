pub mod aggregator;
pub mod engine;
pub mod report;
pub mod salary;

pub use crate::domain::model::{FetchedVacancies, LanguageStats, ProviderReport};
pub use crate::domain::ports::{ConfigProvider, VacancyProvider};
pub use crate::utils::error::Result;
