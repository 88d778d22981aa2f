use super::*;
use e::geo::{MapBbox, MapPoint};
use zc_entities as e;

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ConversionError {
    #[error("Invalid coordinate ({lat}, {lng})")]
    Coordinate { lat: f64, lng: f64 },
}

impl From<MapPoint> for Coordinate {
    fn from(from: MapPoint) -> Self {
        let (lat, lng) = from.to_lat_lng_deg();
        Self { lat, lng }
    }
}

impl TryFrom<Coordinate> for MapPoint {
    type Error = ConversionError;
    fn try_from(from: Coordinate) -> Result<Self, Self::Error> {
        let Coordinate { lat, lng } = from;
        MapPoint::try_from_lat_lng_deg(lat, lng).ok_or(ConversionError::Coordinate { lat, lng })
    }
}

impl From<e::zip::ZipRecord> for ZipRecord {
    fn from(from: e::zip::ZipRecord) -> Self {
        let e::zip::ZipRecord {
            code: _,
            name,
            center,
            poly,
            undeliverable,
        } = from;
        let poly = if poly.is_empty() {
            None
        } else {
            Some(poly.into_iter().map(Coordinate::from).collect())
        };
        Self {
            poly,
            center: center.map(Coordinate::from),
            name,
            undeliverable,
        }
    }
}

impl ZipRecord {
    /// The zip code is not part of the serialized record but
    /// the key under which it has been stored.
    pub fn try_into_entity(self, code: String) -> Result<e::zip::ZipRecord, ConversionError> {
        let ZipRecord {
            poly,
            center,
            name,
            undeliverable,
        } = self;
        let poly = poly
            .unwrap_or_default()
            .into_iter()
            .map(MapPoint::try_from)
            .collect::<Result<_, _>>()?;
        let center = center.map(MapPoint::try_from).transpose()?;
        Ok(e::zip::ZipRecord {
            code,
            name,
            center,
            poly,
            undeliverable,
        })
    }
}

impl From<e::group::Group> for MapGroup {
    fn from(from: e::group::Group) -> Self {
        let e::group::Group {
            id,
            name,
            color,
            zip_codes: _,
        } = from;
        Self {
            id: id.number(),
            name,
            color: color.to_string(),
        }
    }
}

impl MapCommand {
    pub fn fit_bounds(bbox: &MapBbox) -> Self {
        Self::FitBounds {
            sw: bbox.south_west().into(),
            ne: bbox.north_east().into(),
        }
    }
}
