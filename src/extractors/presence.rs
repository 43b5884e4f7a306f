use super::{selector, visible_text};
use crate::error::ExtractError;
use scraper::Html;

const COUNTER_OFFER_TEXT: &str = "Hacer una contraoferta";
const MORTGAGE_SIMULATOR: &str = "div.item-form.item-redils.js-buying-price-slider.buying-price";

/// Whether the page offers the counter-offer action anywhere in its rendered text
pub fn allows_counter_offers(doc: &Html) -> Result<bool, ExtractError> {
    Ok(visible_text(doc).contains(COUNTER_OFFER_TEXT))
}

pub fn allows_mortgage_simulator(doc: &Html) -> Result<bool, ExtractError> {
    let simulator = selector(MORTGAGE_SIMULATOR)?;
    Ok(doc.select(&simulator).next().is_some())
}
