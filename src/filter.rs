use std::collections::HashSet;

use crate::game_scraper::GameRecord;

/// Selections coming from the dashboard's dropdowns. `None` (or an empty
/// set, matching the dashboard's cleared-selection state) means that
/// dimension doesn't constrain.
#[derive(Debug, Clone, Default)]
pub struct FilterSelection {
    pub teams: Option<HashSet<String>>,
    pub age_groups: Option<HashSet<String>>,
}

/// Dimensions combine with AND; within a dimension a game matches if either
/// its home or away side satisfies the selection. Input order is preserved,
/// so a filtered dataset stays time-sorted.
pub fn filter_records(records: &[GameRecord], selection: &FilterSelection) -> Vec<GameRecord> {
    records
        .iter()
        .filter(|record| matches_teams(record, selection) && matches_age_groups(record, selection))
        .cloned()
        .collect()
}

fn matches_teams(record: &GameRecord, selection: &FilterSelection) -> bool {
    match &selection.teams {
        Some(teams) if !teams.is_empty() => {
            teams.contains(&record.home_raw) || teams.contains(&record.away_raw)
        }
        _ => true,
    }
}

fn matches_age_groups(record: &GameRecord, selection: &FilterSelection) -> bool {
    match &selection.age_groups {
        Some(groups) if !groups.is_empty() => {
            groups.contains(&record.home_info.age_group)
                || groups.contains(&record.away_info.age_group)
        }
        _ => true,
    }
}
