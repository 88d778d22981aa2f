use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

#[cfg(feature = "entity-conversions")]
mod conv;

#[cfg(feature = "entity-conversions")]
pub use conv::ConversionError;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    #[serde(deserialize_with = "deserialize_degrees")]
    pub lat: f64,
    #[serde(deserialize_with = "deserialize_degrees")]
    pub lng: f64,
}

// The imported data sets store degrees either as JSON numbers or as text.
fn deserialize_degrees<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Degrees {
        Number(f64),
        Text(String),
    }
    match Degrees::deserialize(deserializer)? {
        Degrees::Number(deg) => Ok(deg),
        Degrees::Text(s) => s
            .trim()
            .parse()
            .map_err(|_| serde::de::Error::custom(format!("invalid degrees '{s}'"))),
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct ZipRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub poly: Option<Vec<Coordinate>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub center: Option<Coordinate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "is_false")]
    pub undeliverable: bool,
}

fn is_false(b: &bool) -> bool {
    !*b
}

/// Response of the zip code lookup, keyed by the 5 digit zip code.
pub type ZipRecords = BTreeMap<String, ZipRecord>;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "extra-derive", derive(thiserror::Error))]
#[cfg_attr(feature = "extra-derive", error("{http_status}: {message}"))]
pub struct Error {
    pub http_status: u16,
    pub message: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct PolygonStyle {
    pub weight: u8,
    pub fill: bool,
    pub fill_opacity: f64,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct MapGroup {
    pub id: usize,
    pub name: String,
    pub color: String,
}

/// Drawing instructions that are replayed by the map script.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(tag = "cmd", rename_all = "kebab-case")]
pub enum MapCommand {
    DrawPolygon {
        key: String,
        group: usize,
        color: String,
        poly: Vec<Coordinate>,
    },
    RemoveLayer {
        key: String,
        group: usize,
    },
    FitBounds {
        sw: Coordinate,
        ne: Coordinate,
    },
    SetView {
        center: Coordinate,
    },
}

/// Everything the map script needs to render the initial map.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MapSetup {
    pub center: Coordinate,
    pub zoom: u8,
    pub max_zoom: u8,
    pub tile_url: String,
    pub attribution: String,
    pub style: PolygonStyle,
    pub groups: Vec<MapGroup>,
    pub zipcodes: ZipRecords,
    pub commands: Vec<MapCommand>,
}
