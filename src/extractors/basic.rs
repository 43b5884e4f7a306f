use super::{first, first_in, text_of};
use crate::error::ExtractError;
use crate::models::PriceInfo;
use scraper::Html;

/// Site-assigned reference shown in the ad reference box
pub fn adid(doc: &Html) -> Result<Option<String>, ExtractError> {
    let container = first(doc, "div.ad-reference-container")?;
    let reference = first_in(container, "p.txt-ref")?;
    Ok(non_empty(text_of(reference)))
}

pub fn price(doc: &Html) -> Result<PriceInfo, ExtractError> {
    let tag = first(doc, "span.info-data-price")?;
    parse_price(&text_of(tag))
}

/// Turn a rendered price such as `"450.000 €"` into amount and currency symbol.
/// Dots, commas and (narrow) spaces are thousands separators; any other
/// non-digit character is taken as the currency.
pub fn parse_price(raw: &str) -> Result<PriceInfo, ExtractError> {
    let mut digits = String::new();
    let mut currency = String::new();

    for c in raw.chars() {
        match c {
            '0'..='9' => digits.push(c),
            '.' | ',' | '\u{a0}' | '\u{202f}' => {}
            c if c.is_whitespace() => {}
            c => currency.push(c),
        }
    }

    if digits.is_empty() {
        return Err(ExtractError::Number(raw.to_string()));
    }
    let amount = digits
        .parse::<i64>()
        .map_err(|_| ExtractError::Number(raw.to_string()))?;

    Ok(PriceInfo {
        amount: Some(amount),
        currency_suffix: non_empty(currency),
    })
}

/// Minor title under the headline, usually the neighbourhood and city
pub fn title(doc: &Html) -> Result<Option<String>, ExtractError> {
    let tag = first(doc, "span.main-info__title-minor")?;
    Ok(non_empty(text_of(tag)))
}

pub fn detail_web_link(doc: &Html) -> Result<Option<String>, ExtractError> {
    let link = first(doc, "link[rel=\"canonical\"]")?;
    let href = link
        .value()
        .attr("href")
        .ok_or(ExtractError::MissingAttribute("href"))?;
    Ok(non_empty(href.trim().to_string()))
}

/// Free-text description in the site's own language
pub fn description(doc: &Html) -> Result<Option<String>, ExtractError> {
    let comment = first(doc, "div.comment")?;
    let paragraph = first_in(comment, "p")?;
    Ok(non_empty(text_of(paragraph)))
}

fn non_empty(s: String) -> Option<String> {
    if s.is_empty() {
        None
    } else {
        Some(s)
    }
}
