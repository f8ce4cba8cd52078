use crate::domain::model::FetchedVacancies;
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait ConfigProvider: Send + Sync {
    fn languages(&self) -> &[String];
    fn concurrent_requests(&self) -> usize;
}

/// A job board that can be searched by language.
#[async_trait]
pub trait VacancyProvider: Send + Sync {
    type Listing: Send + Sync;

    fn name(&self) -> &str;

    /// Table title, e.g. "HeadHunter Moscow".
    fn title(&self) -> &str;

    /// Pages through every search result for `language`.
    async fn fetch_vacancies(&self, language: &str) -> Result<FetchedVacancies<Self::Listing>>;

    /// Ruble salary estimate, `None` when the listing has no usable salary.
    fn predict_rub_salary(&self, listing: &Self::Listing) -> Option<f64>;
}
