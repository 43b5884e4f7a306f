use super::{first, selector, text_of};
use crate::error::ExtractError;
use crate::models::AdministrativeAreas;
use scraper::Html;
use url::Url;

/// Base used only to resolve relative or scheme-less map URLs; just the query is read
const RELATIVE_BASE: &str = "https://localhost/";

/// Latitude and longitude from the map container's `data-url`.
/// Either both coordinates are returned or the call fails.
pub fn coordinates(doc: &Html) -> Result<(Option<f64>, Option<f64>), ExtractError> {
    let map = first(doc, "div.map")?;
    let map_url = map
        .value()
        .attr("data-url")
        .ok_or(ExtractError::MissingAttribute("data-url"))?;

    let (lat, lon) = parse_center(map_url)?;
    Ok((Some(lat), Some(lon)))
}

/// Read the `center=lat,lon` query parameter of a map URL
pub fn parse_center(map_url: &str) -> Result<(f64, f64), ExtractError> {
    let url = match Url::parse(map_url) {
        Ok(url) => url,
        Err(url::ParseError::RelativeUrlWithoutBase) => Url::parse(RELATIVE_BASE)?.join(map_url)?,
        Err(e) => return Err(e.into()),
    };

    let center = url
        .query_pairs()
        .find(|(key, _)| key == "center")
        .map(|(_, value)| value.into_owned())
        .ok_or(ExtractError::MissingParam("center"))?;

    let parts: Vec<&str> = center.split(',').collect();
    let [lat, lon] = parts.as_slice() else {
        return Err(ExtractError::Number(center.clone()));
    };

    Ok((parse_coordinate(lat)?, parse_coordinate(lon)?))
}

fn parse_coordinate(raw: &str) -> Result<f64, ExtractError> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| ExtractError::Number(raw.to_string()))
}

/// Breadcrumb of area names under the location header, most specific first
pub fn administrative_areas(doc: &Html) -> Result<AdministrativeAreas, ExtractError> {
    let header = first(doc, "div#headerMap")?;
    let item = selector("li.header-map-list")?;

    let names: Vec<String> = header.select(&item).map(text_of).collect();
    Ok(areas_from_breadcrumb(&names))
}

/// Map breadcrumb positions onto levels: position 0 is level4, position 3 is level1.
/// Missing positions stay empty; nothing is shifted.
pub fn areas_from_breadcrumb(names: &[String]) -> AdministrativeAreas {
    let at = |i: usize| names.get(i).cloned();

    AdministrativeAreas {
        level4: at(0),
        level3: at(1),
        level2: at(2),
        level1: at(3),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn center_parameter_gives_both_coordinates() {
        let (lat, lon) =
            parse_center("https://maps.example.com/map?center=40.4,-3.7&zoom=15").unwrap();
        assert_eq!(lat, 40.4);
        assert_eq!(lon, -3.7);
    }

    #[test]
    fn relative_and_encoded_urls_are_accepted() {
        let (lat, lon) = parse_center("//maps.example.com/staticmap?center=37.38%2C-5.99").unwrap();
        assert_eq!((lat, lon), (37.38, -5.99));

        let (lat, lon) = parse_center("/map?zoom=3&center=37.38,%20-5.99").unwrap();
        assert_eq!((lat, lon), (37.38, -5.99));
    }

    #[test]
    fn missing_or_malformed_center_fails_whole() {
        assert!(matches!(
            parse_center("https://maps.example.com/map?zoom=15"),
            Err(ExtractError::MissingParam("center"))
        ));
        assert!(parse_center("https://maps.example.com/map?center=40.4").is_err());
        assert!(parse_center("https://maps.example.com/map?center=40.4,abc").is_err());
        assert!(parse_center("https://maps.example.com/map?center=1,2,3").is_err());
    }

    #[test]
    fn map_container_without_center_defaults_to_no_coordinates() {
        let doc = Html::parse_document(
            r#"<div class="map" data-url="https://maps.example.com/map?zoom=15"></div>"#,
        );
        let coords = crate::extractors::contained("coordinates", coordinates(&doc));
        assert_eq!(coords, (None, None));

        let doc = Html::parse_document(
            r#"<div class="map" data-url="https://maps.example.com/map?center=40.4,-3.7&zoom=15"></div>"#,
        );
        assert_eq!(coordinates(&doc).unwrap(), (Some(40.4), Some(-3.7)));
    }

    #[test]
    fn map_container_without_data_url_is_missing() {
        let doc = Html::parse_document(r#"<div class="map" data-src="/map?center=1,2"></div>"#);
        assert!(matches!(
            coordinates(&doc),
            Err(ExtractError::MissingAttribute("data-url"))
        ));
        assert_eq!(
            crate::extractors::contained("coordinates", coordinates(&doc)),
            (None, None)
        );
    }

    #[test]
    fn full_breadcrumb_fills_all_levels() {
        let areas = areas_from_breadcrumb(&names(&["Triana", "Sevilla", "Sevilla", "Andalucía"]));
        assert_eq!(areas.level4.as_deref(), Some("Triana"));
        assert_eq!(areas.level3.as_deref(), Some("Sevilla"));
        assert_eq!(areas.level2.as_deref(), Some("Sevilla"));
        assert_eq!(areas.level1.as_deref(), Some("Andalucía"));
    }

    #[test]
    fn short_breadcrumb_leaves_trailing_levels_empty() {
        let areas = areas_from_breadcrumb(&names(&["Triana"]));
        assert_eq!(
            areas,
            AdministrativeAreas {
                level4: Some("Triana".to_string()),
                level3: None,
                level2: None,
                level1: None,
            }
        );
    }

    #[test]
    fn breadcrumb_is_read_in_document_order() {
        let doc = Html::parse_document(
            r#"<div id="headerMap"><ul>
                <li class="header-map-list"> Triana </li>
                <li class="header-map-list">Sevilla</li>
            </ul></div>"#,
        );
        let areas = administrative_areas(&doc).unwrap();
        assert_eq!(areas.level4.as_deref(), Some("Triana"));
        assert_eq!(areas.level3.as_deref(), Some("Sevilla"));
        assert_eq!(areas.level2, None);
    }
}
