use std::collections::{BTreeSet, HashSet};

use log::debug;

use crate::filter::{FilterSelection, filter_records};
use crate::game_scraper::GameRecord;
use crate::team_info::TeamInfoParser;

/// The canonical, time-sorted record set for one ingestion run. Built once,
/// read-only afterwards; filtering returns derived subsets and never
/// mutates it.
#[derive(Debug, Default)]
pub struct ScheduleDataset {
    records: Vec<GameRecord>,
}

impl ScheduleDataset {
    /// Merge per-page batches into the canonical dataset.
    ///
    /// Game ids can collide across pages; the first occurrence in batch
    /// arrival order wins, so identical input always produces an identical
    /// dataset. The final sort is stable, keeping arrival order for games
    /// that share a kickoff time.
    pub fn aggregate(batches: Vec<Vec<GameRecord>>, parser: &TeamInfoParser) -> Self {
        let mut seen_ids = HashSet::new();
        let mut records = Vec::new();
        for batch in batches {
            for mut record in batch {
                if !seen_ids.insert(record.game_id.clone()) {
                    debug!("duplicate game id {} dropped", record.game_id);
                    continue;
                }
                record.home_info = parser.parse(&record.home_raw);
                record.away_info = parser.parse(&record.away_raw);
                records.push(record);
            }
        }
        records.sort_by(|a, b| a.start_time.cmp(&b.start_time));
        Self { records }
    }

    pub fn records(&self) -> &[GameRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Distinct raw team labels from both sides, sorted; dropdown fodder for
    /// the dashboard collaborator.
    pub fn team_labels(&self) -> Vec<String> {
        let labels: BTreeSet<_> = self
            .records
            .iter()
            .flat_map(|record| [record.home_raw.clone(), record.away_raw.clone()])
            .collect();
        labels.into_iter().collect()
    }

    /// Distinct normalized age groups from both sides, sorted. Labels that
    /// failed team-info parsing contribute nothing.
    pub fn age_groups(&self) -> Vec<String> {
        let groups: BTreeSet<_> = self
            .records
            .iter()
            .flat_map(|record| {
                [
                    record.home_info.age_group.clone(),
                    record.away_info.age_group.clone(),
                ]
            })
            .filter(|group| !group.is_empty())
            .collect();
        groups.into_iter().collect()
    }

    pub fn filter(&self, selection: &FilterSelection) -> Vec<GameRecord> {
        filter_records(&self.records, selection)
    }
}
