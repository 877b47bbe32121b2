use chrono::NaiveDateTime;
use log::warn;
use scraper::{ElementRef, Html, Selector};
use serde::Serialize;

use crate::team_info::TeamInfo;
use crate::text_manipulators::{extract_text, strip_decoration};

// The pages show "Apr 12" and "09:30 AM" fragments with no year anywhere.
const DATE_TIME_FORMAT: &str = "%b %d %I:%M %p %Y";

#[derive(Debug, Clone, Serialize)]
pub struct GameRecord {
    pub game_id: String,
    pub start_time: NaiveDateTime,
    pub home_raw: String,
    pub away_raw: String,
    pub location: String,
    pub surface: String,
    pub home_info: TeamInfo,
    pub away_info: TeamInfo,
}

/// Parse one fetched group page into raw game records, in document order.
///
/// Rows without a game reference are decorative (headers, separators) and
/// are skipped silently. Rows missing any other field, or whose date
/// fragments don't combine into a parseable timestamp, are dropped with a
/// warning; one bad row never loses the page.
pub fn extract_game_schedule(html: &str, season_year: i32) -> Vec<GameRecord> {
    let document = Html::parse_document(html);
    let row_selector = Selector::parse("div.games-row").unwrap();
    let ref_selector = Selector::parse("div.game-ref").unwrap();
    let month_selector = Selector::parse("div.month").unwrap();
    let day_selector = Selector::parse("div.day").unwrap();
    let time_selector = Selector::parse("div.time").unwrap();
    let home_selector = Selector::parse("div.game-home").unwrap();
    let away_selector = Selector::parse("div.game-away").unwrap();
    let location_selector = Selector::parse("div.game-location").unwrap();
    let surface_selector = Selector::parse("div.game-surface").unwrap();

    let mut games = Vec::new();
    for row in document.select(&row_selector) {
        let Some(game_id) = field_text(row, &ref_selector) else {
            continue;
        };

        let cells = [
            ("month", &month_selector),
            ("day", &day_selector),
            ("time", &time_selector),
            ("home", &home_selector),
            ("away", &away_selector),
            ("location", &location_selector),
            ("surface", &surface_selector),
        ]
        .map(|(name, selector)| (name, field_text(row, selector)));
        if let Some((name, _)) = cells.iter().find(|(_, text)| text.is_none()) {
            warn!("game {game_id}: missing {name} cell, row dropped");
            continue;
        }
        let [month, day, time, home_raw, away_raw, location, surface] =
            cells.map(|(_, text)| text.unwrap_or_default());

        let date_time_str = format!("{month} {day} {time} {season_year}");
        let start_time = match NaiveDateTime::parse_from_str(&date_time_str, DATE_TIME_FORMAT) {
            Ok(parsed) => parsed,
            Err(e) => {
                warn!("game {game_id}: unparseable date {date_time_str:?} ({e}), row dropped");
                continue;
            }
        };

        let location = strip_decoration(&location, "MAP");
        let surface = strip_decoration(&surface, "OPEN");

        games.push(GameRecord {
            game_id,
            start_time,
            home_raw,
            away_raw,
            location,
            surface,
            home_info: TeamInfo::default(),
            away_info: TeamInfo::default(),
        });
    }
    games
}

fn field_text(row: ElementRef, selector: &Selector) -> Option<String> {
    row.select(selector)
        .next()
        .map(|cell| extract_text(cell).trim().to_string())
}
