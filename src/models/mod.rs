use serde::{Deserialize, Serialize};

/// Condition of the property as reported by the listing's embedded data
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ConditionStatus {
    Excellent,
    Good,
    Bad,
}

/// Price as an integer amount plus the currency symbol that followed it
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PriceInfo {
    pub amount: Option<i64>,
    pub currency_suffix: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ImageRef {
    pub url: String,
    pub tag: String,
    pub localized_name: String,
    pub deeplink_url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct VideoRef {
    pub url: String,
    pub tag: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Multimedia {
    pub images: Vec<ImageRef>,
    pub videos: Vec<VideoRef>,
}

/// Administrative hierarchy, level4 is the most specific area
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AdministrativeAreas {
    #[serde(rename = "administrativeAreaLevel4")]
    pub level4: Option<String>,
    #[serde(rename = "administrativeAreaLevel3")]
    pub level3: Option<String>,
    #[serde(rename = "administrativeAreaLevel2")]
    pub level2: Option<String>,
    #[serde(rename = "administrativeAreaLevel1")]
    pub level1: Option<String>,
}

/// Location information for a listing
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Ubication {
    pub title: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub location_id: Option<String>,
    pub administrative_areas: AdministrativeAreas,
}

/// Characteristics projected from the page's embedded ad data
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MoreCharacteristics {
    pub community_costs: Option<f64>,
    pub room_number: Option<u32>,
    pub is_studio: bool,
    pub bath_number: Option<u32>,
    pub exterior: bool,
    pub housing_furnitures: bool,
    pub is_penthouse: bool,
    pub energy_certification_type: Option<String>,
    pub swimming_pool: bool,
    pub flat_location: Option<String>,
    pub modification_date: Option<String>,
    pub constructed_area: Option<f64>,
    pub lift: bool,
    pub garden: bool,
    pub boxroom: bool,
    pub is_duplex: bool,
    pub floor: Option<String>,
    pub status: Option<ConditionStatus>,
    pub is_suitable_for_recommended: bool,
}

/// One language version of the listing's free-text description
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CommentTranslation {
    pub property_comment: String,
    pub auto_translated: bool,
    pub language: String,
    pub default_language: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EnergyCertification {
    pub prefix: Option<String>,
    pub suffix: Option<String>,
    pub has_icon: bool,
}

/// One record per visited detail page
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ListingRecord {
    pub adid: Option<String>,
    pub price: Option<i64>,
    pub price_info: PriceInfo,
    pub operation: String,
    pub property_type: String,
    pub state: String,
    pub country: String,
    pub multimedia: Multimedia,
    pub ubication: Ubication,
    pub more_characteristics: MoreCharacteristics,
    pub comments: Vec<CommentTranslation>,
    pub detail_web_link: Option<String>,
    pub energy_certification: Vec<EnergyCertification>,
    pub allows_counter_offers: bool,
    pub allows_remote_visit: bool,
    pub allows_mortgage_simulator: bool,
    #[serde(rename = "has360VHS")]
    pub has_360_vhs: bool,
}
