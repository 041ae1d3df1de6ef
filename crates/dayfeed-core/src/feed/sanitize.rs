use scraper::Html;

/// Text content of an HTML fragment: tags dropped, entities decoded,
/// whitespace kept as written.
pub fn sanitize_html(fragment: &str) -> String {
    if fragment.is_empty() {
        return String::new();
    }
    Html::parse_fragment(fragment)
        .root_element()
        .text()
        .collect()
}
