use anyhow::anyhow;
use diesel::{self, prelude::*, result::Error as DieselError};

use zc_core::{
    entities::*,
    repositories::{self as repo, *},
};

use super::*;

mod zip_record;

type Result<T> = std::result::Result<T, repo::Error>;

/// Type of the rows in `geo_data` that contain zip codes.
const ZIP_CODE_TYPE: &str = "uszip";

pub fn from_diesel_err(err: DieselError) -> repo::Error {
    match err {
        DieselError::NotFound => repo::Error::NotFound,
        _ => repo::Error::Other(err.into()),
    }
}

fn load_zip_record(row: models::GeoData) -> Result<ZipRecord> {
    let models::GeoData { key, special, json } = row;
    let json = json.ok_or_else(|| anyhow!("Missing JSON of zip code {key}"))?;
    let record: zc_boundary::ZipRecord = serde_json::from_str(&json)
        .map_err(|err| anyhow!("Invalid JSON of zip code {key}: {err}"))?;
    let mut record = record
        .try_into_entity(key)
        .map_err(|err| repo::Error::Other(err.into()))?;
    record.undeliverable |= special.unwrap_or(0) != 0;
    Ok(record)
}

fn into_new_geo_data(record: &ZipRecord) -> Result<models::NewGeoData> {
    let json = serde_json::to_string(&zc_boundary::ZipRecord::from(record.clone()))
        .map_err(|err| repo::Error::Other(err.into()))?;
    Ok(models::NewGeoData {
        type_: ZIP_CODE_TYPE,
        key: &record.code,
        special: i16::from(record.undeliverable),
        has_poly: i16::from(record.has_polygon()),
        json,
    })
}
