// src/config/consts.rs

// Net config
pub const DEFAULT_BASE_URL: &str = "https://api.apify.com/v2";
pub const USER_AGENT: &str = concat!("apify_run_fetch/", env!("CARGO_PKG_VERSION"));

// Environment
pub const ENV_TOKEN: &str = "APIFY_TOKEN";
pub const ENV_RUN_ID: &str = "ACTOR_RUN_ID";
pub const ENV_STORE_ID: &str = "KEY_VALUE_STORE_ID";
pub const ENV_DATASET_ID: &str = "DATASET_ID";
pub const ENV_BASE_URL: &str = "APIFY_API_BASE_URL";

/// Key-value store record holding the actor input.
pub const INPUT_RECORD_KEY: &str = "INPUT";

/// Dataset fields requested from the server, in query order.
/// Output columns do not follow this order; they follow first-seen order in the payload.
pub const FIELDS: &[&str] = &[
    "zpid", "location", "address", "isFeatured", "isShowcaseListing", "rental", "currency",
    "country", "listingDateTimeOnZillow", "bestGuessTimeZone", "isUnmappable",
    "listCardRecommendation", "bathrooms", "bedrooms", "livingArea", "yearBuilt",
    "lotSizeWithUnit", "propertyType", "listing", "daysOnZillow", "isPreforeclosureAuction",
    "price", "estimates", "zillowOwnedProperty", "taxAssessment", "region",
    "personalizedResult", "propertyDisplayRules", "ssid", "hasFloorPlan", "scrapedAt",
    "openHouseShowingList", "title", "groupType", "newConstruction", "mapDotTag",
];

// Export
pub const DEFAULT_OUT_FILE: &str = "zillow_properties.csv";
pub const DEFAULT_PREVIEW_ROWS: usize = 5;
