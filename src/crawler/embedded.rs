use regex::Regex;
use serde_json::Value;

use crate::crawler::error::ScrapeError;
use crate::crawler::models::{GeoLocation, ResidentialComplex};
use crate::crawler::normalize;

/// Recover the project list from the `projectsObjects` literal embedded in
/// the projects page script.
///
/// The literal is not valid JSON, so the captured text goes through three
/// repairs before parsing: bare keys are quoted, single quotes become double
/// quotes, trailing commas before a closing brace/bracket are stripped. The
/// order matters: the comma strip assumes quoting is already normalized.
/// Anything the repairs do not cover is a parse error, not worked around.
pub fn extract_projects(html: &str, base_url: &str) -> Result<Vec<ResidentialComplex>, ScrapeError> {
    let marker = Regex::new(r"(?s)var projectsObjects = (.+?)</script>").unwrap();
    let raw = marker
        .captures(html)
        .and_then(|caps| caps.get(1))
        .ok_or_else(|| ScrapeError::Parse("projectsObjects assignment not found".to_string()))?
        .as_str()
        .trim();

    let repaired = strip_trailing_commas(&normalize_quotes(&quote_keys(raw)));
    let value: Value = serde_json::from_str(&repaired)
        .map_err(|e| ScrapeError::Parse(format!("repaired projects object is not valid JSON: {e}")))?;

    let items = value
        .get("items")
        .and_then(Value::as_array)
        .ok_or_else(|| ScrapeError::Parse("projects object has no items list".to_string()))?;

    items
        .iter()
        .map(|item| project_from_item(item, base_url))
        .collect()
}

fn quote_keys(text: &str) -> String {
    let re = Regex::new(r"\b(\w+):").unwrap();
    re.replace_all(text, "'${1}':").into_owned()
}

fn normalize_quotes(text: &str) -> String {
    text.replace('\'', "\"")
}

fn strip_trailing_commas(text: &str) -> String {
    let re = Regex::new(r",\s*([}\]])").unwrap();
    re.replace_all(text, "${1}").into_owned()
}

fn project_from_item(item: &Value, base_url: &str) -> Result<ResidentialComplex, ScrapeError> {
    let link = str_field(item, "link")?;
    let name = str_field(item, "name")?;
    let image_path = str_field(item, "menuImgPath")?;

    let center = item
        .get("center")
        .and_then(Value::as_array)
        .ok_or_else(|| ScrapeError::Parse("project entry has no center coordinates".to_string()))?;
    // Site convention: index 0 is latitude, index 1 is longitude.
    let latitude = coordinate(center, 0)?;
    let longitude = coordinate(center, 1)?;

    Ok(ResidentialComplex {
        internal_id: normalize::derive_slug_from_link(link)?,
        name: name.to_string(),
        geo_location: GeoLocation {
            latitude,
            longitude,
        },
        render_image_url: format!("{base_url}{image_path}"),
        presentation_url: None,
        flats: Vec::new(),
    })
}

fn str_field<'a>(item: &'a Value, key: &str) -> Result<&'a str, ScrapeError> {
    item.get(key)
        .and_then(Value::as_str)
        .ok_or_else(|| ScrapeError::Parse(format!("project entry has no {key} field")))
}

fn coordinate(center: &[Value], index: usize) -> Result<f64, ScrapeError> {
    center
        .get(index)
        .and_then(Value::as_f64)
        .ok_or_else(|| ScrapeError::Parse(format!("bad coordinate at index {index}")))
}
