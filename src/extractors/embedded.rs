//! Data serialized into inline `<script>` tags rather than rendered markup.

use super::selector;
use crate::error::ExtractError;
use crate::models::{ConditionStatus, MoreCharacteristics};
use regex::Regex;
use scraper::Html;
use serde_json::Value;

const UTAG_MARKER: &str = "utag_data";
const TOUR_MARKER: &str = "visit3DTour";

/// Fields projected from the `utag_data` object
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AdData {
    pub location_id: Option<String>,
    pub characteristics: MoreCharacteristics,
}

/// Flags of the first `visit3DTour` entry
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VirtualTour {
    pub allows_remote_visit: bool,
    pub has_360: bool,
}

pub fn ad_data(doc: &Html) -> Result<AdData, ExtractError> {
    let script = script_containing(doc, "var utag_data")?;
    let pattern = Regex::new(r"var\s+utag_data\s*=\s*\{")?;
    let literal = literal_after(&script, &pattern, UTAG_MARKER)?;
    let value: Value = serde_json::from_str(literal)?;
    Ok(project_ad_data(&value))
}

pub fn virtual_tour(doc: &Html) -> Result<VirtualTour, ExtractError> {
    let script = script_containing(doc, TOUR_MARKER)?;
    let pattern = Regex::new(r"visit3DTour\s*:\s*\[")?;
    let literal = literal_after(&script, &pattern, TOUR_MARKER)?;
    let value: Value = serde_json::from_str(literal)?;

    let Some(entry) = value.as_array().and_then(|entries| entries.first()) else {
        return Ok(VirtualTour::default());
    };

    Ok(VirtualTour {
        allows_remote_visit: flag(entry.get("3d")),
        has_360: flag(entry.get("360")),
    })
}

/// Project `ad.characteristics`, `ad.condition` and `ad.address` into record shape
pub fn project_ad_data(utag: &Value) -> AdData {
    let ad = &utag["ad"];
    let characteristics = &ad["characteristics"];
    let condition = &ad["condition"];
    let c = |key: &str| characteristics.get(key);

    AdData {
        location_id: text(ad["address"].get("locationId")),
        characteristics: MoreCharacteristics {
            community_costs: float(c("communityCosts")),
            room_number: count(c("roomNumber")),
            is_studio: flag(c("isStudio")),
            bath_number: count(c("bathNumber")),
            exterior: flag(c("isExterior")),
            housing_furnitures: flag(c("hasFurniture")),
            is_penthouse: flag(c("isPenthouse")),
            energy_certification_type: text(ad["energyCertification"].get("type")),
            swimming_pool: flag(c("hasSwimmingPool")),
            flat_location: text(c("flatLocation")),
            modification_date: text(ad.get("modificationDate")),
            constructed_area: float(c("constructedArea")),
            lift: flag(c("hasLift")),
            garden: flag(c("hasGarden")),
            boxroom: flag(c("hasBoxroom")),
            is_duplex: flag(c("isDuplex")),
            floor: text(c("floor")),
            status: condition_status(condition),
            is_suitable_for_recommended: flag(ad.get("isSuitableForRecommended")),
        },
    }
}

/// New development wins over good condition, which wins over needs renovating
pub fn condition_status(condition: &Value) -> Option<ConditionStatus> {
    if flag(condition.get("isNewDevelopment")) {
        Some(ConditionStatus::Excellent)
    } else if flag(condition.get("isGoodCondition")) {
        Some(ConditionStatus::Good)
    } else if flag(condition.get("isNeedsRenovating")) {
        Some(ConditionStatus::Bad)
    } else {
        None
    }
}

fn script_containing(doc: &Html, needle: &'static str) -> Result<String, ExtractError> {
    let scripts = selector("script")?;
    doc.select(&scripts)
        .map(|s| s.text().collect::<String>())
        .find(|body| body.contains(needle))
        .ok_or(ExtractError::MissingScript(needle))
}

/// Slice out the literal whose opening bracket ends `pattern`'s match
fn literal_after<'a>(
    script: &'a str,
    pattern: &Regex,
    marker: &'static str,
) -> Result<&'a str, ExtractError> {
    let found = pattern
        .find(script)
        .ok_or(ExtractError::MissingScript(marker))?;
    balanced_literal(script, found.end() - 1).ok_or(ExtractError::Unbalanced(marker))
}

/// Bracket-balanced `{...}` or `[...]` starting at byte `start`, skipping string contents
pub fn balanced_literal(source: &str, start: usize) -> Option<&str> {
    let open = source[start..].chars().next()?;
    let close = match open {
        '{' => '}',
        '[' => ']',
        _ => return None,
    };

    let mut depth = 0;
    let mut in_str = false;
    let mut escape = false;
    for (offset, ch) in source[start..].char_indices() {
        if in_str {
            if escape {
                escape = false;
            } else if ch == '\\' {
                escape = true;
            } else if ch == '"' {
                in_str = false;
            }
            continue;
        }
        match ch {
            '"' => in_str = true,
            c if c == open => depth += 1,
            c if c == close => {
                depth -= 1;
                if depth == 0 {
                    let end = start + offset + ch.len_utf8();
                    return Some(&source[start..end]);
                }
            }
            _ => {}
        }
    }
    None
}

/// Boolean stored as `"0"`/`"1"`, a number or a real bool
fn flag(value: Option<&Value>) -> bool {
    match value {
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64().is_some_and(|v| v != 0.0),
        Some(Value::String(s)) => {
            let s = s.trim();
            s.eq_ignore_ascii_case("true") || s.parse::<i64>().is_ok_and(|v| v != 0)
        }
        _ => false,
    }
}

fn text(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn count(value: Option<&Value>) -> Option<u32> {
    match value? {
        Value::Number(n) => n.as_u64().and_then(|v| u32::try_from(v).ok()),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn float(value: Option<&Value>) -> Option<f64> {
    match value? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().replace(',', ".").parse().ok(),
        _ => None,
    }
}
