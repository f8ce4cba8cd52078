pub mod toml_config;

use crate::core::ConfigProvider;
use crate::utils::error::{Result, StatsError};
use crate::utils::validation::{self, Validate};
use clap::Parser;
use toml_config::TomlConfig;

pub const SJ_API_KEY_VAR: &str = "SJ_API_KEY";

pub const DEFAULT_LANGUAGES: [&str; 9] = [
    "Python",
    "Java",
    "JavaScript",
    "C++",
    "C#",
    "Ruby",
    "Go",
    "1С",
    "PHP",
];

#[derive(Debug, Clone, Parser)]
#[command(name = "vacancy-stats")]
#[command(about = "Average programming salaries on HeadHunter and SuperJob")]
pub struct CliConfig {
    /// Optional TOML file with provider settings
    #[arg(short, long)]
    pub config: Option<String>,

    /// Comma separated languages to query
    #[arg(long, value_delimiter = ',')]
    pub languages: Vec<String>,

    /// Languages fetched at the same time per provider
    #[arg(long)]
    pub concurrent_requests: Option<usize>,

    #[arg(long, env = "SJ_API_KEY", hide_env_values = true)]
    pub sj_api_key: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

/// HeadHunter search filter.
#[derive(Debug, Clone, PartialEq)]
pub struct HhConfig {
    pub base_url: String,
    pub title: String,
    /// Region id, 1 is Moscow.
    pub area: u32,
    /// Publication window in days.
    pub period: u32,
    pub per_page: u32,
}

impl Default for HhConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.hh.ru/vacancies".to_string(),
            title: "HeadHunter Moscow".to_string(),
            area: 1,
            period: 30,
            per_page: 100,
        }
    }
}

/// SuperJob search filter.
#[derive(Debug, Clone, PartialEq)]
pub struct SjConfig {
    pub base_url: String,
    pub title: String,
    pub api_key: Option<String>,
    /// Town id, 4 is Moscow.
    pub town: u32,
    /// Catalogue id, 48 is software development.
    pub catalogues: u32,
    pub count: u32,
}

impl Default for SjConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.superjob.ru/2.0/vacancies/".to_string(),
            title: "SuperJob Moscow".to_string(),
            api_key: None,
            town: 4,
            catalogues: 48,
            count: 100,
        }
    }
}

/// Settings after defaults, config file and CLI flags have been merged.
#[derive(Debug, Clone, PartialEq)]
pub struct StatsConfig {
    pub languages: Vec<String>,
    pub concurrent_requests: usize,
    pub request_timeout_seconds: Option<u64>,
    pub user_agent: String,
    pub headhunter: HhConfig,
    pub superjob: SjConfig,
}

impl Default for StatsConfig {
    fn default() -> Self {
        Self {
            languages: DEFAULT_LANGUAGES.iter().map(|l| l.to_string()).collect(),
            concurrent_requests: 1,
            request_timeout_seconds: None,
            user_agent: format!("vacancy-stats/{}", env!("CARGO_PKG_VERSION")),
            headhunter: HhConfig::default(),
            superjob: SjConfig::default(),
        }
    }
}

impl StatsConfig {
    /// 依序套用：預設值 → TOML 檔 → 命令列參數
    pub fn resolve(cli: &CliConfig) -> Result<Self> {
        let mut config = Self::default();

        if let Some(path) = &cli.config {
            tracing::info!("📁 Loading configuration from: {}", path);
            TomlConfig::from_file(path)?.apply_to(&mut config);
        }

        if !cli.languages.is_empty() {
            config.languages = cli.languages.clone();
        }
        if let Some(concurrent) = cli.concurrent_requests {
            config.concurrent_requests = concurrent;
        }
        if let Some(key) = &cli.sj_api_key {
            config.superjob.api_key = Some(key.clone());
        }

        config.validate()?;
        Ok(config)
    }

    pub fn superjob_api_key(&self) -> Result<&str> {
        match self.superjob.api_key.as_deref() {
            Some(key) if !key.trim().is_empty() => Ok(key),
            _ => Err(StatsError::MissingCredential {
                variable: SJ_API_KEY_VAR.to_string(),
            }),
        }
    }
}

impl Validate for StatsConfig {
    fn validate(&self) -> Result<()> {
        if self.languages.is_empty() {
            return Err(StatsError::MissingConfigError {
                field: "languages".to_string(),
            });
        }
        for language in &self.languages {
            validation::validate_non_empty_string("languages", language)?;
        }
        validation::validate_positive_number("concurrent_requests", self.concurrent_requests, 1)?;
        if let Some(timeout) = self.request_timeout_seconds {
            validation::validate_range("request_timeout_seconds", timeout, 1, 3600)?;
        }
        validation::validate_non_empty_string("user_agent", &self.user_agent)?;

        validation::validate_url("headhunter.base_url", &self.headhunter.base_url)?;
        validation::validate_range("headhunter.per_page", self.headhunter.per_page, 1, 100)?;

        validation::validate_url("superjob.base_url", &self.superjob.base_url)?;
        validation::validate_range("superjob.count", self.superjob.count, 1, 100)?;
        self.superjob_api_key()?;

        Ok(())
    }
}

impl ConfigProvider for StatsConfig {
    fn languages(&self) -> &[String] {
        &self.languages
    }

    fn concurrent_requests(&self) -> usize {
        self.concurrent_requests
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cli(args: &[&str]) -> CliConfig {
        let mut argv = vec!["vacancy-stats"];
        argv.extend_from_slice(args);
        CliConfig::try_parse_from(argv).unwrap()
    }

    #[test]
    fn test_defaults_match_moscow_filters() {
        let config = StatsConfig::default();

        assert_eq!(config.languages.len(), 9);
        assert_eq!(config.languages[7], "1С");
        assert_eq!(config.concurrent_requests, 1);
        assert_eq!(config.headhunter.area, 1);
        assert_eq!(config.headhunter.period, 30);
        assert_eq!(config.headhunter.per_page, 100);
        assert_eq!(config.superjob.town, 4);
        assert_eq!(config.superjob.catalogues, 48);
        assert_eq!(config.superjob.count, 100);
    }

    #[test]
    fn test_missing_api_key_is_fatal() {
        let mut args = cli(&[]);
        args.sj_api_key = None;

        let err = StatsConfig::resolve(&args).unwrap_err();
        assert!(matches!(err, StatsError::MissingCredential { .. }));
    }

    #[test]
    fn test_cli_overrides() {
        let args = cli(&[
            "--languages",
            "Rust,Go",
            "--concurrent-requests",
            "3",
            "--sj-api-key",
            "v3.r.secret",
        ]);

        let config = StatsConfig::resolve(&args).unwrap();
        assert_eq!(config.languages, vec!["Rust", "Go"]);
        assert_eq!(config.concurrent_requests, 3);
        assert_eq!(config.superjob_api_key().unwrap(), "v3.r.secret");
    }

    #[test]
    fn test_zero_concurrency_is_rejected() {
        let args = cli(&["--concurrent-requests", "0", "--sj-api-key", "key"]);
        assert!(StatsConfig::resolve(&args).is_err());
    }
}
