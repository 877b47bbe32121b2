use regex::Regex;
use serde::Serialize;

/// Fields decomposed from a composite team label such as
/// `"ABC B-U10-Falcons"`. All fields are empty when the label does not
/// follow the league's naming convention.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TeamInfo {
    pub league: String,
    pub gender: String,
    pub age_group: String,
    pub team_name: String,
}

pub struct TeamInfoParser {
    // `<league> <B|G>-<U10|10U>-<team name>`; the site uses both age token
    // spellings interchangeably.
    label_pattern: Regex,
}

impl TeamInfoParser {
    pub fn new() -> anyhow::Result<Self> {
        let label_pattern =
            Regex::new(r"^(?P<league>\w+)\s(?P<gender>[BG])-(?P<age>U\d+|\d+U)-(?P<name>.+)$")?;
        Ok(Self { label_pattern })
    }

    /// Non-standard labels are common on the site, so a mismatch degrades to
    /// an all-empty `TeamInfo` instead of failing the record.
    pub fn parse(&self, label: &str) -> TeamInfo {
        let Some(caps) = self.label_pattern.captures(label) else {
            return TeamInfo::default();
        };
        let gender = &caps["gender"];
        // Normalize U10 / 10U spellings into one "<gender>-<N>U" form.
        let age_group = format!("{}-{}U", gender, caps["age"].replace('U', ""));
        TeamInfo {
            league: caps["league"].to_string(),
            gender: gender.to_string(),
            age_group,
            team_name: caps["name"].to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_age_first_spelling() {
        let parser = TeamInfoParser::new().unwrap();
        let info = parser.parse("ABC B-U10-Falcons");
        assert_eq!(info.league, "ABC");
        assert_eq!(info.gender, "B");
        assert_eq!(info.age_group, "B-10U");
        assert_eq!(info.team_name, "Falcons");
    }

    #[test]
    fn parses_age_last_spelling_to_same_form() {
        let parser = TeamInfoParser::new().unwrap();
        let info = parser.parse("ABC G-12U-Comets");
        assert_eq!(info.gender, "G");
        assert_eq!(info.age_group, "G-12U");
        assert_eq!(info.team_name, "Comets");
    }

    #[test]
    fn team_name_keeps_internal_dashes_and_spaces() {
        let parser = TeamInfoParser::new().unwrap();
        let info = parser.parse("XYZ B-15U-Red Star B-Side");
        assert_eq!(info.age_group, "B-15U");
        assert_eq!(info.team_name, "Red Star B-Side");
    }

    #[test]
    fn malformed_labels_yield_empty_fields() {
        let parser = TeamInfoParser::new().unwrap();
        for label in ["RandomText", "ABC X-U10-Falcons", "ABC B-TEN-Falcons", ""] {
            assert_eq!(parser.parse(label), TeamInfo::default(), "label: {label:?}");
        }
    }
}
