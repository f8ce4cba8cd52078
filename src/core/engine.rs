use crate::core::aggregator::aggregate;
use crate::core::{ConfigProvider, ProviderReport, Result, VacancyProvider};
use futures::{stream, StreamExt, TryStreamExt};
use std::io::Write;

pub struct StatsEngine<C: ConfigProvider> {
    config: C,
}

impl<C: ConfigProvider> StatsEngine<C> {
    pub fn new(config: C) -> Self {
        Self { config }
    }

    /// Fetches and aggregates every configured language for one provider.
    ///
    /// Up to `concurrent_requests` languages are in flight at once; rows come
    /// back in configured order regardless of which fetch finishes first. The
    /// first failure aborts the whole provider.
    pub async fn collect<P: VacancyProvider>(&self, provider: &P) -> Result<ProviderReport> {
        let languages = self.config.languages();
        let concurrency = self.config.concurrent_requests().max(1);

        tracing::info!(
            "🔎 {}: collecting {} languages (concurrency {})",
            provider.name(),
            languages.len(),
            concurrency
        );

        let rows = stream::iter(languages.iter().cloned())
            .map(|language| async move {
                let fetched = provider.fetch_vacancies(&language).await?;
                let stats = aggregate(&fetched.listings, fetched.found, |listing| {
                    provider.predict_rub_salary(listing)
                });

                tracing::info!(
                    "📊 {} {}: found {}, processed {}, average {}",
                    provider.name(),
                    language,
                    stats.vacancies_found,
                    stats.vacancies_processed,
                    stats.average_salary
                );
                Ok::<_, crate::utils::error::StatsError>((language, stats))
            })
            .buffered(concurrency)
            .try_collect::<Vec<_>>()
            .await?;

        Ok(ProviderReport {
            title: provider.title().to_string(),
            rows,
        })
    }

    /// Collects one provider and writes its table to `out`.
    pub async fn report<P: VacancyProvider, W: Write>(
        &self,
        provider: &P,
        out: &mut W,
    ) -> Result<ProviderReport> {
        let report = self.collect(provider).await?;
        writeln!(out, "{}", report.render())?;
        out.flush()?;
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::FetchedVacancies;
    use crate::utils::error::StatsError;
    use async_trait::async_trait;
    use std::collections::HashMap;
    use std::time::Duration;

    struct MockConfig {
        languages: Vec<String>,
        concurrent_requests: usize,
    }

    impl MockConfig {
        fn new(languages: &[&str], concurrent_requests: usize) -> Self {
            Self {
                languages: languages.iter().map(|l| l.to_string()).collect(),
                concurrent_requests,
            }
        }
    }

    impl ConfigProvider for MockConfig {
        fn languages(&self) -> &[String] {
            &self.languages
        }

        fn concurrent_requests(&self) -> usize {
            self.concurrent_requests
        }
    }

    /// Listings are the estimates themselves.
    struct MockProvider {
        data: HashMap<String, (u64, Vec<Option<f64>>)>,
        delays_ms: HashMap<String, u64>,
        failing: Option<String>,
    }

    impl MockProvider {
        fn new() -> Self {
            Self {
                data: HashMap::new(),
                delays_ms: HashMap::new(),
                failing: None,
            }
        }

        fn with_language(mut self, language: &str, found: u64, estimates: Vec<Option<f64>>) -> Self {
            self.data.insert(language.to_string(), (found, estimates));
            self
        }

        fn with_delay(mut self, language: &str, delay_ms: u64) -> Self {
            self.delays_ms.insert(language.to_string(), delay_ms);
            self
        }

        fn with_failure(mut self, language: &str) -> Self {
            self.failing = Some(language.to_string());
            self
        }
    }

    #[async_trait]
    impl VacancyProvider for MockProvider {
        type Listing = Option<f64>;

        fn name(&self) -> &str {
            "Mock"
        }

        fn title(&self) -> &str {
            "Mock Moscow"
        }

        async fn fetch_vacancies(&self, language: &str) -> Result<FetchedVacancies<Option<f64>>> {
            if let Some(delay) = self.delays_ms.get(language) {
                tokio::time::sleep(Duration::from_millis(*delay)).await;
            }
            if self.failing.as_deref() == Some(language) {
                return Err(StatsError::HttpStatus {
                    provider: "Mock".to_string(),
                    status: 502,
                    url: format!("http://mock/{}", language),
                });
            }
            let (found, estimates) = self.data.get(language).cloned().unwrap_or_default();
            Ok(FetchedVacancies::new(estimates, found))
        }

        fn predict_rub_salary(&self, listing: &Option<f64>) -> Option<f64> {
            *listing
        }
    }

    #[tokio::test]
    async fn test_collect_builds_row_per_language() {
        let provider = MockProvider::new()
            .with_language("Python", 50, vec![Some(100.0), Some(200.0), None])
            .with_language("Java", 4, vec![None]);
        let engine = StatsEngine::new(MockConfig::new(&["Python", "Java", "Go"], 1));

        let report = engine.collect(&provider).await.unwrap();

        assert_eq!(report.title, "Mock Moscow");
        let python = report.stats_for("Python").unwrap();
        assert_eq!(python.vacancies_found, 50);
        assert_eq!(python.vacancies_processed, 2);
        assert_eq!(python.average_salary, 150);

        let java = report.stats_for("Java").unwrap();
        assert_eq!(java.vacancies_processed, 0);
        assert_eq!(java.average_salary, 0);

        let go = report.stats_for("Go").unwrap();
        assert_eq!(go.vacancies_found, 0);
    }

    #[tokio::test]
    async fn test_concurrent_collect_keeps_configured_order() {
        let provider = MockProvider::new()
            .with_language("Python", 1, vec![Some(10.0)])
            .with_language("Java", 2, vec![Some(20.0)])
            .with_language("Ruby", 3, vec![Some(30.0)])
            .with_delay("Python", 60)
            .with_delay("Java", 30);
        let engine = StatsEngine::new(MockConfig::new(&["Python", "Java", "Ruby"], 3));

        let report = engine.collect(&provider).await.unwrap();

        let order: Vec<&str> = report.rows.iter().map(|(name, _)| name.as_str()).collect();
        assert_eq!(order, vec!["Python", "Java", "Ruby"]);
        assert_eq!(report.rows[2].1.average_salary, 30);
    }

    #[tokio::test]
    async fn test_failure_aborts_provider() {
        let provider = MockProvider::new()
            .with_language("Python", 1, vec![Some(10.0)])
            .with_failure("Java");
        let engine = StatsEngine::new(MockConfig::new(&["Python", "Java", "Ruby"], 1));

        let err = engine.collect(&provider).await.unwrap_err();
        assert!(matches!(err, StatsError::HttpStatus { status: 502, .. }));
    }

    #[tokio::test]
    async fn test_report_writes_table() {
        let provider = MockProvider::new().with_language("Python", 50, vec![Some(100.0), Some(200.0), None]);
        let engine = StatsEngine::new(MockConfig::new(&["Python"], 1));
        let mut out = Vec::new();

        engine.report(&provider, &mut out).await.unwrap();

        let printed = String::from_utf8(out).unwrap();
        assert!(printed.starts_with("+Mock Moscow"));
        assert!(printed.ends_with("+\n"));
        let row = printed.lines().nth(3).unwrap();
        let cells: Vec<&str> = row.trim_matches('|').split('|').map(str::trim).collect();
        assert_eq!(cells, vec!["Python", "50", "2", "150"]);
    }
}
