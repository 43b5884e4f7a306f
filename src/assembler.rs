use crate::config::Features;
use crate::extractors::{basic, contained, embedded, geo, media, presence};
use crate::models::{ListingRecord, Ubication};
use crate::scrapers::types::ListingScope;
use crate::scrapers::Translator;
use crate::translation::{original_comment, translate_comment};
use scraper::Html;

/// Builds one [`ListingRecord`] from a detail page.
/// Every extractor runs independently; a record is always produced.
pub struct RecordAssembler<'a> {
    pub scope: &'a ListingScope,
    pub features: Features,
    pub source_language: &'a str,
    pub languages: &'a [String],
    pub translator: Option<&'a dyn Translator>,
}

impl RecordAssembler<'_> {
    pub async fn assemble(&self, html: &str) -> ListingRecord {
        // The parsed document is dropped before any translation call
        let (mut record, description) = self.extract(html);

        if let Some(text) = description {
            record.comments = match (self.translator, self.features.translate_comments) {
                (Some(translator), true) => {
                    translate_comment(translator, &text, self.source_language, self.languages).await
                }
                _ => vec![original_comment(&text, self.source_language)],
            };
        }

        record
    }

    /// Run every extractor; returns the record without comments plus the raw description
    pub fn extract(&self, html: &str) -> (ListingRecord, Option<String>) {
        let doc = Html::parse_document(html);

        let price_info = contained("price", basic::price(&doc));
        let (latitude, longitude) = contained("coordinates", geo::coordinates(&doc));
        let ad_data = contained("utagData", embedded::ad_data(&doc));
        let tour = contained("visit3DTour", embedded::virtual_tour(&doc));

        let energy_certification = if self.features.energy_certification {
            contained("energyCertification", media::energy_certification(&doc))
        } else {
            Vec::new()
        };

        let record = ListingRecord {
            adid: contained("adid", basic::adid(&doc)),
            price: price_info.amount,
            price_info,
            operation: self.scope.operation.clone(),
            property_type: self.scope.property_type.clone(),
            state: self.scope.state.clone(),
            country: self.scope.country.clone(),
            multimedia: contained("multimedia", media::multimedia(&doc)),
            ubication: Ubication {
                title: contained("title", basic::title(&doc)),
                latitude,
                longitude,
                location_id: ad_data.location_id,
                administrative_areas: contained(
                    "administrativeAreas",
                    geo::administrative_areas(&doc),
                ),
            },
            more_characteristics: ad_data.characteristics,
            comments: Vec::new(),
            detail_web_link: contained("detailWebLink", basic::detail_web_link(&doc)),
            energy_certification,
            allows_counter_offers: contained(
                "allowsCounterOffers",
                presence::allows_counter_offers(&doc),
            ),
            allows_remote_visit: tour.allows_remote_visit,
            allows_mortgage_simulator: contained(
                "allowsMortgageSimulator",
                presence::allows_mortgage_simulator(&doc),
            ),
            has_360_vhs: tour.has_360,
        };

        let description = contained("description", basic::description(&doc));
        (record, description)
    }
}
