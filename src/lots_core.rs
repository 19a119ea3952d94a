use serde::{Deserialize, Serialize};

/// Pack name used when the infobox has no `| game = [[...]]` entry
pub const PACK_NOT_FOUND: &str = "(Pack not found via infobox parse)";

/// Lot type used when neither the bullet nor its heading says anything else
pub const DEFAULT_LOT_TYPE: &str = "Residential";

/// Column headers of the lots catalog, in the order they are written
pub const LOT_HEADERS: [&str; 5] = ["World", "Pack/DLC", "Lot Name", "Lot Type", "Bucket/Section"];

// The types used to represent things scraped from the wiki

/// One row of the lots catalog
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LotRecord {
    /// The world the lot is found in
    #[serde(rename = "World")]
    pub world: String,
    /// The pack or DLC which introduced the world, or PACK_NOT_FOUND
    #[serde(rename = "Pack/DLC")]
    pub pack: String,
    /// The name of the lot, user-facing
    #[serde(rename = "Lot Name")]
    pub lot_name: String,
    /// Explicit or inferred classification, never empty
    #[serde(rename = "Lot Type")]
    pub lot_type: String,
    /// The last heading seen before the lot, verbatim
    #[serde(rename = "Bucket/Section")]
    pub bucket: String,
}
