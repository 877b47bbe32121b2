use anyhow::Context;
use futures::future::join_all;
use log::{info, warn};

use crate::aggregator::ScheduleDataset;
use crate::config::ScrapingConfig;
use crate::game_scraper::extract_game_schedule;
use crate::link_discovery::discover_group_schedule_links;
use crate::link_validator::validate_links;
use crate::requests::{PageFetcher, RequestClient};
use crate::team_info::TeamInfoParser;

/// Owns everything one ingestion run needs, plus the canonical dataset it
/// produces. Consumers only ever see the dataset through the read-only
/// accessor; a rebuild is an explicit call, not a side effect of loading
/// the module.
pub struct SchedulePipeline {
    config: ScrapingConfig,
    client: RequestClient,
    team_parser: TeamInfoParser,
    dataset: ScheduleDataset,
}

impl SchedulePipeline {
    pub fn new() -> anyhow::Result<Self> {
        let config = ScrapingConfig::new()?;
        let client = RequestClient::new()?;
        let team_parser = TeamInfoParser::new()?;
        Ok(Self {
            config,
            client,
            team_parser,
            dataset: ScheduleDataset::default(),
        })
    }

    /// Run one full ingestion and replace the canonical dataset.
    ///
    /// Only an unreachable top-level listing is an error, and even then the
    /// dataset is left valid (empty). Everything below the listing degrades
    /// per page or per row inside the respective stage.
    pub async fn rebuild(&mut self) -> anyhow::Result<()> {
        self.dataset = ScheduleDataset::default();

        let listing = self
            .client
            .fetch_page(self.config.schedule_url())
            .await
            .map_err(anyhow::Error::new)
            .context("seasonal schedule listing unavailable")?;

        let links = discover_group_schedule_links(&listing);
        info!("discovered {} group schedule links", links.len());

        let valid_links = validate_links(&self.client, self.config.base_url(), &links).await;
        info!("{} paginated schedule pages are reachable", valid_links.len());

        let season_year = self.config.season_year();
        let client = &self.client;
        // Fan out the per-page fetches; join_all keeps results in input
        // order, so aggregation sees batches exactly as the sequential loop
        // would.
        let batches = join_all(valid_links.iter().map(|url| async move {
            match client.fetch_page(url).await {
                Ok(html) => extract_game_schedule(&html, season_year),
                Err(e) => {
                    warn!("schedule page contributed no games: {e}");
                    Vec::new()
                }
            }
        }))
        .await;

        self.dataset = ScheduleDataset::aggregate(batches, &self.team_parser);
        info!("aggregated {} games into the canonical dataset", self.dataset.len());
        Ok(())
    }

    pub fn dataset(&self) -> &ScheduleDataset {
        &self.dataset
    }
}
