use std::fs;

use dotenv::dotenv;
use touchline::{CALENDAR_FILE_NAME, SchedulePipeline, export_calendar};

extern crate env_logger;
extern crate log;

use log::LevelFilter;

use log::{error, info};

const DATASET_FILE_NAME: &str = "schedule.json";

async fn run_schedule_ingestion_job() -> Option<SchedulePipeline> {
    match SchedulePipeline::new() {
        Ok(mut pipeline) => {
            if let Err(e) = pipeline.rebuild().await {
                error!("ingestion run failed: {e:#}");
            }
            Some(pipeline)
        }
        Err(e) => {
            error!("could not assemble the scraping pipeline: {e:#}");
            None
        }
    }
}

/// The calendar file is the export artifact proper; the JSON dump is what
/// the dashboard reads to render its table and populate the filter
/// dropdowns.
fn write_schedule_artifacts(pipeline: &SchedulePipeline) -> anyhow::Result<()> {
    let dataset = pipeline.dataset();
    fs::write(CALENDAR_FILE_NAME, export_calendar(dataset.records()))?;
    fs::write(DATASET_FILE_NAME, serde_json::to_vec_pretty(dataset.records())?)?;
    Ok(())
}

#[tokio::main]
async fn main() {
    dotenv().ok();
    env_logger::Builder::new()
        .filter_level(LevelFilter::Info)
        .init();

    let Some(pipeline) = run_schedule_ingestion_job().await else {
        return;
    };

    let dataset = pipeline.dataset();
    info!(
        "ingested {} games across {} age groups",
        dataset.len(),
        dataset.age_groups().len()
    );

    if let Err(e) = write_schedule_artifacts(&pipeline) {
        error!("failed to write schedule artifacts: {e:#}");
    }
}
