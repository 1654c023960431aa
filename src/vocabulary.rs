//! Property codes, items and units of the target knowledge base.
//!
//! These are literal constants of the statement-edit format; nothing in the
//! crate interprets them beyond writing them into rows.

// ------------- Names -------------
pub const GIVEN_NAME: &str = "P735";
pub const FAMILY_NAME: &str = "P734";
pub const SERIES_ORDINAL: &str = "P1545";

// ------------- Family -------------
pub const FATHER: &str = "P22";
pub const MOTHER: &str = "P25";
pub const CHILD: &str = "P40";
pub const SPOUSE: &str = "P26";

// ------------- Vital events -------------
pub const DATE_OF_BIRTH: &str = "P569";
pub const DATE_OF_BAPTISM: &str = "P1636";
pub const DATE_OF_DEATH: &str = "P570";
pub const DATE_OF_BURIAL: &str = "P4602";
pub const PLACE_OF_BIRTH: &str = "P19";
pub const PLACE_OF_DEATH: &str = "P20";
pub const PLACE_OF_BURIAL: &str = "P119";

// ------------- Qualifiers -------------
pub const SOURCING_CIRCUMSTANCES: &str = "P1480";
pub const CIRCA: &str = "Q5727902";
pub const AGE_AT_EVENT: &str = "P3629";
/// Unit suffix for ages, the item for "annum".
pub const YEAR_UNIT: &str = "U24564698";
pub const LATEST_DATE: &str = "P1326";

// ------------- Other personal -------------
pub const RESIDENCE: &str = "P551";
pub const OCCUPATION: &str = "P106";

// ------------- Reference -------------
pub const FAMILYSEARCH_ARK: &str = "S8091";
pub const COLLECTION: &str = "S6333";
/// Everything after this marker in a record URL is the ARK.
pub const ARK_MARKER: &str = "familysearch.org/";

/// Written in place of a value that is known to exist but was not recorded.
pub const UNKNOWN_VALUE: &str = "somevalue";
