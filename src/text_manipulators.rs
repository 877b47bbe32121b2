use scraper::ElementRef;

pub fn extract_text(node: ElementRef) -> String {
    node.text().collect::<String>()
}

/// Remove a decorative token the site appends to some cells ("MAP", "OPEN")
/// and trim whatever whitespace is left around the real value.
pub fn strip_decoration(text: &str, decoration: &str) -> String {
    text.replace(decoration, "").trim().to_string()
}
