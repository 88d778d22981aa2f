#![allow(clippy::extra_unused_lifetimes)]

use super::schema::*;

#[derive(Insertable)]
#[diesel(table_name = geo_data)]
pub struct NewGeoData<'a> {
    pub type_: &'a str,
    pub key: &'a str,
    pub special: i16,
    pub has_poly: i16,
    pub json: String,
}

/// A zip code row, the columns may be `NULL` in
/// databases built by the data pipeline.
#[derive(Queryable)]
pub struct GeoData {
    pub key: String,
    pub special: Option<i16>,
    pub json: Option<String>,
}
