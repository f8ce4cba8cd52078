use crate::adapters::http::get_json;
use crate::config::{SjConfig, SJ_API_KEY_VAR};
use crate::core::salary::predict_salary;
use crate::domain::model::FetchedVacancies;
use crate::domain::ports::VacancyProvider;
use crate::utils::error::{Result, StatsError};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

pub const PROVIDER_NAME: &str = "SuperJob";
pub const RUB_CURRENCY: &str = "rub";
pub const API_KEY_HEADER: &str = "X-Api-App-Id";

/// One page of `GET /2.0/vacancies/`.
#[derive(Debug, Clone, Deserialize)]
pub struct SjPage {
    pub objects: Vec<SjVacancy>,
    pub total: u64,
    pub more: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SjVacancy {
    pub payment_from: Option<u64>,
    pub payment_to: Option<u64>,
    pub currency: String,
}

pub struct SuperJobProvider {
    client: Client,
    config: SjConfig,
    api_key: String,
}

impl SuperJobProvider {
    pub fn new(client: Client, config: SjConfig) -> Result<Self> {
        let api_key = config
            .api_key
            .clone()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| StatsError::MissingCredential {
                variable: SJ_API_KEY_VAR.to_string(),
            })?;

        Ok(Self {
            client,
            config,
            api_key,
        })
    }

    async fn fetch_page(&self, language: &str, page: u32) -> Result<SjPage> {
        let params = [
            ("keyword", language.to_string()),
            ("town", self.config.town.to_string()),
            ("catalogues", self.config.catalogues.to_string()),
            ("count", self.config.count.to_string()),
            ("page", page.to_string()),
        ];

        tracing::debug!("{}: fetching '{}' page {}", PROVIDER_NAME, language, page);
        let request = self
            .client
            .get(&self.config.base_url)
            .header(API_KEY_HEADER, &self.api_key)
            .query(&params);
        get_json(request, PROVIDER_NAME).await
    }
}

#[async_trait]
impl VacancyProvider for SuperJobProvider {
    type Listing = SjVacancy;

    fn name(&self) -> &str {
        PROVIDER_NAME
    }

    fn title(&self) -> &str {
        &self.config.title
    }

    async fn fetch_vacancies(&self, language: &str) -> Result<FetchedVacancies<SjVacancy>> {
        let mut listings = Vec::new();
        let mut found = 0;
        let mut page = 0;
        let mut has_more = true;

        while has_more {
            let data = self.fetch_page(language, page).await?;
            if page == 0 {
                found = data.total;
            }
            listings.extend(data.objects);
            has_more = data.more;
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

    fn predict_rub_salary(&self, vacancy: &SjVacancy) -> Option<f64> {
        if vacancy.currency != RUB_CURRENCY {
            return None;
        }
        predict_salary(vacancy.payment_from, vacancy.payment_to)
    }
}
