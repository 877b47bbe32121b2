use anyhow::Context;
use chrono::{Datelike, Utc};
use serde::{Deserialize, de::DeserializeOwned};

fn default_schedule_url() -> String {
    "https://app.demosphere.com/_widgets/v1/seasonal_schedule/66c33ac190249400089a06e3/groupings"
        .to_string()
}

fn default_base_url() -> String {
    "https://app.demosphere.com".to_string()
}

fn default_season_year() -> i32 {
    Utc::now().year()
}

/// The env config env vars needed for scraping. Every field has a default,
/// so an empty environment still yields a working config.
#[derive(Debug, Deserialize)]
pub struct ScrapingEnv {
    #[serde(default = "default_schedule_url")]
    schedule_url: String,
    #[serde(default = "default_base_url")]
    base_url: String,
    #[serde(default = "default_season_year")]
    season_year: i32,
}

pub struct ScrapingConfig {
    schedule_url: String,
    base_url: String,
    season_year: i32,
}

impl ScrapingConfig {
    pub fn new() -> anyhow::Result<Self> {
        let scraping_env = ScrapingEnv::load_from_env()?;
        Ok(Self {
            schedule_url: scraping_env.schedule_url,
            base_url: scraping_env.base_url,
            season_year: scraping_env.season_year,
        })
    }

    /// The top-level seasonal schedule listing page.
    pub fn schedule_url(&self) -> &str {
        &self.schedule_url
    }

    /// Prefix that the site's relative group links resolve against.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The source pages carry no year in their date fragments; every parsed
    /// game gets this one. Schedules spanning a calendar year boundary are a
    /// known limitation.
    pub fn season_year(&self) -> i32 {
        self.season_year
    }
}

// Extension trait.
pub trait LoadFromEnv: DeserializeOwned {
    fn load_from_env() -> anyhow::Result<Self> {
        // Don't throw an error if .env file doesn't exist.
        let _ = dotenv::dotenv();
        let config =
            envy::from_env::<Self>().context("failed to load env variables into config struct")?;
        Ok(config)
    }
}

impl<T: DeserializeOwned> LoadFromEnv for T {}
