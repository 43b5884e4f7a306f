use super::{first, selector, text_of};
use crate::error::ExtractError;
use crate::models::{EnergyCertification, ImageRef, Multimedia, VideoRef};
use regex::Regex;
use scraper::Html;

pub fn multimedia(doc: &Html) -> Result<Multimedia, ExtractError> {
    Ok(Multimedia {
        images: images(doc)?,
        videos: videos(doc)?,
    })
}

/// Every `<img>` with a `src`, in document order
pub fn images(doc: &Html) -> Result<Vec<ImageRef>, ExtractError> {
    let img = selector("img[src]")?;

    Ok(doc
        .select(&img)
        .filter_map(|el| {
            let attrs = el.value();
            let url = attrs.attr("src")?.trim();
            let tag = attrs.attr("alt").unwrap_or("image").to_string();

            Some(ImageRef {
                url: url.to_string(),
                localized_name: tag.clone(),
                tag,
                deeplink_url: attrs.attr("data-url").unwrap_or_default().to_string(),
            })
        })
        .collect())
}

pub fn videos(doc: &Html) -> Result<Vec<VideoRef>, ExtractError> {
    let video = selector("video[src], video source[src]")?;

    Ok(doc
        .select(&video)
        .filter_map(|el| {
            let attrs = el.value();
            Some(VideoRef {
                url: attrs.attr("src")?.trim().to_string(),
                tag: attrs.attr("title").unwrap_or("video").to_string(),
            })
        })
        .collect())
}

/// Energy certificate rows: label, rating letter from the `icon-energy-c-*` class
pub fn energy_certification(doc: &Html) -> Result<Vec<EnergyCertification>, ExtractError> {
    let features = first(doc, "div.details-property-feature-two")?;
    let item = selector("li")?;
    let span = selector("span")?;
    let rating = Regex::new(r"^icon-energy-c-([a-g])$")?;

    let mut certifications = Vec::new();
    for li in features.select(&item) {
        let prefix = li
            .select(&span)
            .next()
            .map(text_of)
            .filter(|t| !t.is_empty());

        let suffix = li.select(&span).find_map(|s| {
            s.value()
                .classes()
                .find_map(|class| rating.captures(class))
                .map(|caps| caps[1].to_uppercase())
        });

        certifications.push(EnergyCertification {
            prefix,
            has_icon: suffix.is_some(),
            suffix,
        });
    }

    Ok(certifications)
}
