use crate::config::StatsConfig;
use crate::utils::error::{Result, StatsError};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// 對應設定檔的結構，所有欄位皆可省略
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    pub general: Option<GeneralConfig>,
    pub headhunter: Option<HeadHunterSection>,
    pub superjob: Option<SuperJobSection>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GeneralConfig {
    pub languages: Option<Vec<String>>,
    pub concurrent_requests: Option<usize>,
    pub request_timeout_seconds: Option<u64>,
    pub user_agent: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HeadHunterSection {
    pub base_url: Option<String>,
    pub title: Option<String>,
    pub area: Option<u32>,
    pub period: Option<u32>,
    pub per_page: Option<u32>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SuperJobSection {
    pub base_url: Option<String>,
    pub title: Option<String>,
    pub api_key: Option<String>,
    pub town: Option<u32>,
    pub catalogues: Option<u32>,
    pub count: Option<u32>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(StatsError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| StatsError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${SJ_API_KEY})，未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| StatsError::ConfigValidationError {
            field: "env_substitution".to_string(),
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn apply_to(self, config: &mut StatsConfig) {
        if let Some(general) = self.general {
            if let Some(languages) = general.languages {
                config.languages = languages;
            }
            if let Some(concurrent) = general.concurrent_requests {
                config.concurrent_requests = concurrent;
            }
            if general.request_timeout_seconds.is_some() {
                config.request_timeout_seconds = general.request_timeout_seconds;
            }
            if let Some(user_agent) = general.user_agent {
                config.user_agent = user_agent;
            }
        }

        if let Some(hh) = self.headhunter {
            let target = &mut config.headhunter;
            if let Some(base_url) = hh.base_url {
                target.base_url = base_url;
            }
            if let Some(title) = hh.title {
                target.title = title;
            }
            target.area = hh.area.unwrap_or(target.area);
            target.period = hh.period.unwrap_or(target.period);
            target.per_page = hh.per_page.unwrap_or(target.per_page);
        }

        if let Some(sj) = self.superjob {
            let target = &mut config.superjob;
            if let Some(base_url) = sj.base_url {
                target.base_url = base_url;
            }
            if let Some(title) = sj.title {
                target.title = title;
            }
            // 未替換的 ${VAR} 視為沒有設定
            if let Some(api_key) = sj.api_key.filter(|key| !key.starts_with("${")) {
                target.api_key = Some(api_key);
            }
            target.town = sj.town.unwrap_or(target.town);
            target.catalogues = sj.catalogues.unwrap_or(target.catalogues);
            target.count = sj.count.unwrap_or(target.count);
        }
    }
}
