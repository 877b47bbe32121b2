//! Calendar (.ics) generation per RFC 5545.

use chrono::{Duration, NaiveDateTime};

use crate::game_scraper::GameRecord;

pub const CALENDAR_FILE_NAME: &str = "soccer_schedule.ics";

// The source publishes kickoff times four hours behind the wall-clock time
// the calendar should show; shift every event start forward uniformly.
const SOURCE_TIME_SHIFT: Duration = Duration::hours(4);

// Game length by age group, matched as substrings of the home label,
// top to bottom, first hit wins. A label matching no row gets no end time.
const DURATION_RULES: &[(&[&str], i64)] = &[
    (&["U6", "6U"], 50),
    (&["U8", "8U"], 50),
    (&["U10", "U12", "10U", "12U"], 60),
    (&["U15", "15U"], 70),
    (&["U19", "19U"], 80),
];

fn game_duration(home_label: &str) -> Option<Duration> {
    DURATION_RULES
        .iter()
        .find(|(tokens, _)| tokens.iter().any(|token| home_label.contains(token)))
        .map(|(_, minutes)| Duration::minutes(*minutes))
}

/// Serialize records into a UTF-8 iCalendar byte stream. Pure value
/// construction; the caller decides where the bytes go. Zero records still
/// produce a valid, empty calendar.
pub fn export_calendar(records: &[GameRecord]) -> Vec<u8> {
    let mut lines = vec![
        "BEGIN:VCALENDAR".to_string(),
        "VERSION:2.0".to_string(),
        "PRODID:-//touchline//Soccer Schedule//EN".to_string(),
        "CALSCALE:GREGORIAN".to_string(),
    ];
    for record in records {
        push_event(&mut lines, record);
    }
    lines.push("END:VCALENDAR".to_string());

    let mut out = String::new();
    for line in lines {
        out.push_str(&fold_line(&line));
        out.push_str("\r\n");
    }
    out.into_bytes()
}

fn push_event(lines: &mut Vec<String>, record: &GameRecord) {
    let begin = record.start_time + SOURCE_TIME_SHIFT;
    lines.push("BEGIN:VEVENT".to_string());
    // Deterministic identity so re-exporting the same dataset is
    // byte-identical; DTSTAMP has no meaningful creation time here.
    lines.push(format!("UID:{}@touchline", escape_text(&record.game_id)));
    lines.push(format!("DTSTAMP:{}", format_date_time(begin)));
    lines.push(format!("DTSTART:{}", format_date_time(begin)));
    if let Some(duration) = game_duration(&record.home_raw) {
        lines.push(format!("DTEND:{}", format_date_time(begin + duration)));
    }
    lines.push(format!(
        "SUMMARY:{}",
        escape_text(&format!("{} vs {}", record.home_raw, record.away_raw))
    ));
    lines.push(format!("LOCATION:{}", escape_text(&record.location)));
    let description = format!(
        "Game ID: {}\nDate/Time: {}\nHome Team: {}\nAway Team: {}\nLocation: {}\nSurface: {}",
        record.game_id,
        record.start_time.format("%Y-%m-%d %H:%M:%S"),
        record.home_raw,
        record.away_raw,
        record.location,
        record.surface,
    );
    lines.push(format!("DESCRIPTION:{}", escape_text(&description)));
    lines.push("END:VEVENT".to_string());
}

fn format_date_time(value: NaiveDateTime) -> String {
    value.format("%Y%m%dT%H%M%S").to_string()
}

// RFC 5545 3.3.11: backslash, semicolon, comma and newline must be escaped
// inside TEXT values.
fn escape_text(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '\\' => escaped.push_str(r"\\"),
            ';' => escaped.push_str(r"\;"),
            ',' => escaped.push_str(r"\,"),
            '\n' => escaped.push_str(r"\n"),
            '\r' => {}
            _ => escaped.push(ch),
        }
    }
    escaped
}

// RFC 5545 3.1: content lines over 75 octets are folded with CRLF plus a
// single space. The fold must not split a UTF-8 sequence, so count octets
// per char.
fn fold_line(line: &str) -> String {
    let mut folded = String::with_capacity(line.len());
    let mut octets = 0;
    for ch in line.chars() {
        let width = ch.len_utf8();
        if octets + width > 75 {
            folded.push_str("\r\n ");
            octets = 1;
        }
        folded.push(ch);
        octets += width;
    }
    folded
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::team_info::TeamInfo;

    fn record(game_id: &str, start: &str, home: &str) -> GameRecord {
        GameRecord {
            game_id: game_id.to_string(),
            start_time: NaiveDateTime::parse_from_str(start, "%Y-%m-%d %H:%M").unwrap(),
            home_raw: home.to_string(),
            away_raw: "ABC B-10U-Hawks".to_string(),
            location: "Memorial Park".to_string(),
            surface: "Turf 3".to_string(),
            home_info: TeamInfo::default(),
            away_info: TeamInfo::default(),
        }
    }

    fn unfolded(records: &[GameRecord]) -> String {
        String::from_utf8(export_calendar(records))
            .unwrap()
            .replace("\r\n ", "")
    }

    #[test]
    fn empty_export_is_a_valid_calendar_without_events() {
        let text = unfolded(&[]);
        assert!(text.starts_with("BEGIN:VCALENDAR\r\n"));
        assert!(text.ends_with("END:VCALENDAR\r\n"));
        assert!(!text.contains("BEGIN:VEVENT"));
    }

    #[test]
    fn start_is_shifted_four_hours_and_u10_ends_sixty_minutes_later() {
        let text = unfolded(&[record("1", "2024-04-12 09:30", "ABC B-U10-Falcons")]);
        assert!(text.contains("DTSTART:20240412T133000"));
        assert!(text.contains("DTEND:20240412T143000"));
    }

    #[test]
    fn fifteen_u_games_run_seventy_minutes() {
        let text = unfolded(&[record("1", "2024-04-12 09:30", "ABC G-15U-Comets")]);
        assert!(text.contains("DTEND:20240412T144000"));
    }

    #[test]
    fn first_matching_duration_rule_wins() {
        // A combined-bracket label hits both the U8 and U10 rows; the table
        // is ordered and the U8 row comes first.
        let text = unfolded(&[record("1", "2024-04-12 09:30", "ABC B-U8-U10 Combined")]);
        assert!(text.contains("DTEND:20240412T142000"));
    }

    #[test]
    fn unmatched_age_group_gets_no_end_time() {
        let text = unfolded(&[record("1", "2024-04-12 09:30", "Scrimmage Guests")]);
        assert!(text.contains("DTSTART:"));
        assert!(!text.contains("DTEND:"));
    }

    #[test]
    fn summary_and_description_carry_the_game_fields() {
        let text = unfolded(&[record("4217", "2024-04-12 09:30", "ABC B-U10-Falcons")]);
        assert!(text.contains("SUMMARY:ABC B-U10-Falcons vs ABC B-10U-Hawks"));
        assert!(text.contains("UID:4217@touchline"));
        assert!(text.contains(
            "DESCRIPTION:Game ID: 4217\\nDate/Time: 2024-04-12 09:30:00\\nHome Team: ABC \
             B-U10-Falcons\\nAway Team: ABC B-10U-Hawks\\nLocation: Memorial \
             Park\\nSurface: Turf 3"
        ));
    }

    #[test]
    fn text_values_are_escaped() {
        let mut game = record("1", "2024-04-12 09:30", "ABC B-U10-Falcons");
        game.location = "Field 2; north end, by the creek".to_string();
        let text = unfolded(&[game]);
        assert!(text.contains(r"LOCATION:Field 2\; north end\, by the creek"));
    }

    #[test]
    fn long_lines_are_folded_within_75_octets() {
        let game = record("1", "2024-04-12 09:30", &"ABC B-U10-".repeat(12));
        let raw = String::from_utf8(export_calendar(&[game])).unwrap();
        for line in raw.split("\r\n") {
            assert!(line.len() <= 75, "overlong line: {line:?}");
        }
    }
}
