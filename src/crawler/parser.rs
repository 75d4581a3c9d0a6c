use scraper::{ElementRef, Html, Selector};
use std::collections::HashSet;

use crate::crawler::error::ScrapeError;
use crate::crawler::models::Flat;
use crate::crawler::normalize;

/// Total flat count for a project, read from the index page filter label
/// ("25 квартир" -> 25).
pub fn parse_flats_total(html: &str) -> Result<usize, ScrapeError> {
    let document = Html::parse_document(html);
    let selector = Selector::parse("b.page-filters__result").unwrap();

    let label = document
        .select(&selector)
        .next()
        .map(|el| text_of(&el))
        .ok_or_else(|| ScrapeError::MissingElement("b.page-filters__result".to_string()))?;

    label
        .split_whitespace()
        .next()
        .and_then(|token| token.parse().ok())
        .ok_or_else(|| ScrapeError::Format(format!("no flat count in label: {label}")))
}

/// Absolute detail-page links for every listing tile on an index page, in
/// document order.
pub fn collect_flat_links(html: &str, base_url: &str) -> Result<Vec<String>, ScrapeError> {
    let document = Html::parse_document(html);
    let tile_selector = Selector::parse("div._tile").unwrap();
    let link_selector = Selector::parse("a.product-card__link").unwrap();

    let mut links = Vec::new();
    for tile in document.select(&tile_selector) {
        let anchor = tile
            .select(&link_selector)
            .next()
            .ok_or_else(|| ScrapeError::MissingElement("a.product-card__link".to_string()))?;
        let href = anchor
            .value()
            .attr("href")
            .ok_or_else(|| ScrapeError::MissingElement("a.product-card__link href".to_string()))?;
        links.push(format!("{base_url}{href}"));
    }

    Ok(links)
}

/// Extract one flat record from its detail page.
pub fn scrape_flat_details(
    html: &str,
    url: &str,
    slug: &str,
    base_url: &str,
) -> Result<Flat, ScrapeError> {
    let document = Html::parse_document(html);

    let title = text_of_required(&document, "div.product-info-card__title")?;
    let mut parts = title.split(',');
    let (rooms_label, area) = match (parts.next(), parts.next()) {
        (Some(rooms_label), Some(area)) => (rooms_label.trim(), area.trim()),
        _ => return Err(ScrapeError::Format(format!("unexpected flat title: {title}"))),
    };
    let rooms = normalize::parse_room_count(rooms_label)?;

    // The deadline is always the last distinct feature on the page.
    let feature_selector = Selector::parse("span.product-feature").unwrap();
    let mut seen = HashSet::new();
    let mut features = Vec::new();
    for el in document.select(&feature_selector) {
        let text = text_of(&el);
        if seen.insert(text.clone()) {
            features.push(text);
        }
    }
    let deadline_label = features
        .last()
        .ok_or_else(|| ScrapeError::MissingElement("span.product-feature".to_string()))?;
    let building_deadline = normalize::resolve_building_deadline(deadline_label)?;

    // Headings read "<name>, <floor> этаж из <total>".
    let heading = text_of_required(&document, "h1")?;
    let floor: i32 = heading
        .split("этаж")
        .next()
        .unwrap_or_default()
        .rsplit(',')
        .next()
        .unwrap_or_default()
        .trim()
        .parse()
        .map_err(|_| ScrapeError::Format(format!("no floor number in heading: {heading}")))?;

    let price = text_of_required(&document, "span.js-current-price")?;

    let image_selector = Selector::parse("img[itemprop='image']").unwrap();
    let image = document
        .select(&image_selector)
        .next()
        .ok_or_else(|| ScrapeError::MissingElement("img[itemprop='image']".to_string()))?;
    let src = image
        .value()
        .attr("src")
        .ok_or_else(|| ScrapeError::MissingElement("img[itemprop='image'] src".to_string()))?;

    Ok(Flat {
        residential_complex_internal_id: slug.to_string(),
        developer_url: url.to_string(),
        price,
        floor,
        area: area.to_string(),
        rooms,
        building_deadline,
        layout_image_url: format!("{base_url}{src}"),
    })
}

fn text_of(el: &ElementRef) -> String {
    el.text().collect::<String>().trim().to_string()
}

fn text_of_required(document: &Html, selector: &str) -> Result<String, ScrapeError> {
    let parsed = Selector::parse(selector).unwrap();
    document
        .select(&parsed)
        .next()
        .map(|el| text_of(&el))
        .ok_or_else(|| ScrapeError::MissingElement(selector.to_string()))
}
