//! `img[src]` extraction from page markup.

use scraper::{Html, Selector};

/// Returns the raw `src` attribute of every `<img>` carrying one, in
/// document order. `<img>` tags without a `src` are ignored.
pub fn image_sources(html: &str) -> Vec<String> {
    let selector = Selector::parse("img[src]").expect("img[src] selector");
    let document = Html::parse_document(html);
    document
        .select(&selector)
        .filter_map(|img| img.value().attr("src"))
        .map(str::to_string)
        .collect()
}
