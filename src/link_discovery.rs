use scraper::{Html, Selector};

use crate::text_manipulators::extract_text;

/// Anchor label that marks a link to one group's paginated game listing.
const GROUP_SCHEDULE_MARKER: &str = "Group Schedules";

/// Scan the seasonal listing page for group schedule links and return their
/// hrefs verbatim (relative fragments, unvalidated), in document order.
/// A page without any matching anchors just yields an empty vec.
pub fn discover_group_schedule_links(html: &str) -> Vec<String> {
    let document = Html::parse_document(html);
    let anchor_selector = Selector::parse("a[href]").unwrap();
    document
        .select(&anchor_selector)
        .filter(|anchor| extract_text(*anchor).contains(GROUP_SCHEDULE_MARKER))
        .filter_map(|anchor| anchor.value().attr("href").map(str::to_string))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_only_group_schedule_anchors_in_document_order() {
        let html = r#"
            <body>
                <a href="/standings/u10">Standings</a>
                <a href="/schedule/u10"><span>U10 Group Schedules</span></a>
                <a href="/schedule/u12">U12 Group Schedules</a>
                <a>Group Schedules without href</a>
            </body>
        "#;
        let links = discover_group_schedule_links(html);
        assert_eq!(links, vec!["/schedule/u10", "/schedule/u12"]);
    }

    #[test]
    fn empty_or_linkless_page_yields_empty_vec() {
        assert!(discover_group_schedule_links("").is_empty());
        assert!(discover_group_schedule_links("<p>No schedules yet</p>").is_empty());
    }
}
