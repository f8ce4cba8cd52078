use crate::adapters::http::get_json;
use crate::config::HhConfig;
use crate::core::salary::predict_salary;
use crate::domain::model::FetchedVacancies;
use crate::domain::ports::VacancyProvider;
use crate::utils::error::Result;
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

pub const PROVIDER_NAME: &str = "HeadHunter";
pub const RUB_CURRENCY: &str = "RUR";

/// One page of `GET /vacancies`.
#[derive(Debug, Clone, Deserialize)]
pub struct HhPage {
    pub items: Vec<HhVacancy>,
    pub found: u64,
    pub pages: u32,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct HhVacancy {
    pub salary: Option<HhSalary>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HhSalary {
    pub from: Option<u64>,
    pub to: Option<u64>,
    pub currency: Option<String>,
}

pub struct HeadHunterProvider {
    client: Client,
    config: HhConfig,
}

impl HeadHunterProvider {
    pub fn new(client: Client, config: HhConfig) -> Self {
        Self { client, config }
    }

    async fn fetch_page(&self, language: &str, page: u32) -> Result<HhPage> {
        let params = [
            ("text", language.to_string()),
            ("area", self.config.area.to_string()),
            ("period", self.config.period.to_string()),
            ("per_page", self.config.per_page.to_string()),
            ("page", page.to_string()),
        ];

        tracing::debug!("{}: fetching '{}' page {}", PROVIDER_NAME, language, page);
        let request = self.client.get(&self.config.base_url).query(&params);
        get_json(request, PROVIDER_NAME).await
    }
}

#[async_trait]
impl VacancyProvider for HeadHunterProvider {
    type Listing = HhVacancy;

    fn name(&self) -> &str {
        PROVIDER_NAME
    }

    fn title(&self) -> &str {
        &self.config.title
    }

    async fn fetch_vacancies(&self, language: &str) -> Result<FetchedVacancies<HhVacancy>> {
        let mut listings = Vec::new();
        let mut found = 0;
        let mut page = 0;
        let mut total_pages = 1;

        // 頁數以每次回應的 pages 為準
        while page < total_pages {
            let data = self.fetch_page(language, page).await?;
            if page == 0 {
                found = data.found;
            }
            listings.extend(data.items);
            total_pages = data.pages;
            page += 1;
        }

        tracing::debug!(
            "{}: '{}' done after {} page(s), {} listings",
            PROVIDER_NAME,
            language,
            page,
            listings.len()
        );
        Ok(FetchedVacancies::new(listings, found))
    }

    fn predict_rub_salary(&self, vacancy: &HhVacancy) -> Option<f64> {
        let salary = vacancy.salary.as_ref()?;
        if salary.currency.as_deref() != Some(RUB_CURRENCY) {
            return None;
        }
        predict_salary(salary.from, salary.to)
    }
}
