use chrono::{Datelike, NaiveDate, Utc};

use crate::crawler::error::ScrapeError;

const STUDIO_LABEL: &str = "Студия";
const DELIVERED_LABELS: [&str; 2] = ["Дом сдан", "Вторичная"];
const CURRENT_YEAR_LABEL: &str = "Сдаем в этом году";

/// Earliest representable date, used as the "already available" marker.
fn delivered_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(1, 1, 1).unwrap()
}

/// Room count from a title label: the studio label means 0 rooms, anything
/// else carries the count before the dash ("2-комнатная" -> 2).
pub fn parse_room_count(label: &str) -> Result<u32, ScrapeError> {
    if label == STUDIO_LABEL {
        return Ok(0);
    }
    label
        .split('-')
        .next()
        .unwrap_or_default()
        .parse()
        .map_err(|_| ScrapeError::Format(format!("unrecognized room count label: {label}")))
}

/// Resolve a construction-deadline phrase to an ISO date string.
///
/// Delivered or resale listings map to the minimum date, "this year" phrases
/// to quarter 4 of the current year; everything else is expected to carry a
/// quarter ordinal as its third word and a year as its last word.
pub fn resolve_building_deadline(phrase: &str) -> Result<String, ScrapeError> {
    if DELIVERED_LABELS.contains(&phrase) {
        return Ok(delivered_date().to_string());
    }

    let (year, quarter) = if phrase == CURRENT_YEAR_LABEL {
        (Utc::now().year(), 4)
    } else {
        let words: Vec<&str> = phrase.split_whitespace().collect();
        let quarter = words.get(2).and_then(|w| w.parse().ok());
        let year = words.last().and_then(|w| w.parse().ok());
        match (year, quarter) {
            (Some(year), Some(quarter)) => (year, quarter),
            _ => {
                return Err(ScrapeError::Format(format!(
                    "unrecognized deadline phrase: {phrase}"
                )))
            }
        }
    };

    let date = date_from_quarter(year, quarter).ok_or_else(|| {
        ScrapeError::Format(format!("quarter {quarter} of {year} is out of range"))
    })?;
    Ok(date.to_string())
}

/// A quarter is represented by the first day of its first month.
pub fn date_from_quarter(year: i32, quarter: u32) -> Option<NaiveDate> {
    let month = quarter.checked_sub(1)? * 3 + 1;
    NaiveDate::from_ymd_opt(year, month, 1)
}

/// The project slug is the third path segment of its link
/// ("/projects/slugname/" -> "slugname").
pub fn derive_slug_from_link(link: &str) -> Result<String, ScrapeError> {
    link.split('/')
        .nth(2)
        .filter(|segment| !segment.is_empty())
        .map(str::to_string)
        .ok_or_else(|| ScrapeError::Format(format!("project link has no slug segment: {link}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn studio_label_is_zero_rooms() {
        assert_eq!(parse_room_count("Студия").unwrap(), 0);
    }

    #[test]
    fn room_count_before_dash() {
        assert_eq!(parse_room_count("1-комнатная").unwrap(), 1);
        assert_eq!(parse_room_count("3-комнатная").unwrap(), 3);
    }

    #[test]
    fn room_count_rejects_unknown_label() {
        let err = parse_room_count("Пентхаус").unwrap_err();
        assert!(matches!(err, ScrapeError::Format(_)));
    }

    #[test]
    fn delivered_phrases_map_to_minimum_date() {
        assert_eq!(resolve_building_deadline("Дом сдан").unwrap(), "0001-01-01");
        assert_eq!(resolve_building_deadline("Вторичная").unwrap(), "0001-01-01");
    }

    #[test]
    fn this_year_phrase_is_fourth_quarter_of_current_year() {
        let expected = format!("{}-10-01", Utc::now().year());
        assert_eq!(resolve_building_deadline("Сдаем в этом году").unwrap(), expected);
    }

    #[test]
    fn quarter_phrase_resolves_via_quarter_date() {
        assert_eq!(
            resolve_building_deadline("Сдаем в 3 квартале 2026").unwrap(),
            "2026-07-01"
        );
        assert_eq!(
            resolve_building_deadline("Сдаем в 1 квартале 2027").unwrap(),
            "2027-01-01"
        );
    }

    #[test]
    fn deadline_rejects_phrase_without_numbers() {
        let err = resolve_building_deadline("Сдаем когда-нибудь потом").unwrap_err();
        assert!(matches!(err, ScrapeError::Format(_)));
    }

    #[test]
    fn deadline_rejects_out_of_range_quarter() {
        let err = resolve_building_deadline("Сдаем в 5 квартале 2026").unwrap_err();
        assert!(matches!(err, ScrapeError::Format(_)));
    }

    #[test]
    fn quarters_start_on_first_month_day() {
        assert_eq!(
            date_from_quarter(2026, 1),
            NaiveDate::from_ymd_opt(2026, 1, 1)
        );
        assert_eq!(
            date_from_quarter(2026, 2),
            NaiveDate::from_ymd_opt(2026, 4, 1)
        );
        assert_eq!(
            date_from_quarter(2026, 3),
            NaiveDate::from_ymd_opt(2026, 7, 1)
        );
        assert_eq!(
            date_from_quarter(2026, 4),
            NaiveDate::from_ymd_opt(2026, 10, 1)
        );
        assert_eq!(date_from_quarter(2026, 0), None);
        assert_eq!(date_from_quarter(2026, 5), None);
    }

    #[test]
    fn slug_is_third_path_segment() {
        assert_eq!(derive_slug_from_link("/projects/slugname/").unwrap(), "slugname");
        assert_eq!(derive_slug_from_link("/projects/ozerny").unwrap(), "ozerny");
    }

    #[test]
    fn slug_requires_three_segments() {
        let err = derive_slug_from_link("/projects").unwrap_err();
        assert!(matches!(err, ScrapeError::Format(_)));
    }
}
