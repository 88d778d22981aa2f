pub type RawCoord = i32;

// Assumption: 2-complement binary representation
const RAW_COORD_INVALID: RawCoord = RawCoord::MIN;
const RAW_COORD_MAX: RawCoord = RawCoord::MAX;
const RAW_COORD_MIN: RawCoord = -RAW_COORD_MAX;

/// Compact fixed-point integer representation of a geographical coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GeoCoord(RawCoord);

impl GeoCoord {
    const INVALID: Self = Self(RAW_COORD_INVALID);

    pub const fn max() -> Self {
        Self(RAW_COORD_MAX)
    }

    pub const fn min() -> Self {
        Self(RAW_COORD_MIN)
    }

    pub const fn to_raw(self) -> RawCoord {
        self.0
    }

    pub const fn from_raw(raw: RawCoord) -> Self {
        Self(raw)
    }

    pub fn is_valid(self) -> bool {
        self != Self::INVALID
    }
}

impl Default for GeoCoord {
    fn default() -> Self {
        Self::INVALID
    }
}

impl PartialOrd for GeoCoord {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        if self == other {
            Some(std::cmp::Ordering::Equal)
        } else if self.is_valid() && other.is_valid() {
            Some(self.to_raw().cmp(&other.to_raw()))
        } else {
            None
        }
    }
}

macro_rules! degree_coord {
    ($(#[$attr:meta])* $name:ident, $deg_max:expr) => {
        $(#[$attr])*
        #[derive(Clone, Copy, Debug, Default, Eq, PartialEq, PartialOrd, Hash)]
        pub struct $name(GeoCoord);

        impl $name {
            const DEG_MAX: f64 = $deg_max;
            const DEG_MIN: f64 = -$deg_max;
            const TO_DEG: f64 =
                (Self::DEG_MAX - Self::DEG_MIN) / (RAW_COORD_MAX as f64 - RAW_COORD_MIN as f64);
            const FROM_DEG: f64 =
                (RAW_COORD_MAX as f64 - RAW_COORD_MIN as f64) / (Self::DEG_MAX - Self::DEG_MIN);

            pub const fn max() -> Self {
                Self(GeoCoord::max())
            }

            pub const fn min() -> Self {
                Self(GeoCoord::min())
            }

            pub const fn to_raw(self) -> RawCoord {
                self.0.to_raw()
            }

            pub const fn from_raw(raw: RawCoord) -> Self {
                Self(GeoCoord::from_raw(raw))
            }

            pub fn is_valid(self) -> bool {
                self.0.is_valid()
            }

            pub fn to_deg(self) -> f64 {
                if self.is_valid() {
                    f64::from(self.to_raw()) * Self::TO_DEG
                } else {
                    f64::NAN
                }
            }

            pub fn from_deg<T: Into<f64>>(deg: T) -> Self {
                let deg = deg.into();
                debug_assert!(deg >= Self::DEG_MIN);
                debug_assert!(deg <= Self::DEG_MAX);
                let raw = f64::round(deg * Self::FROM_DEG) as RawCoord;
                Self::from_raw(raw)
            }

            pub fn try_from_deg<T: Into<f64>>(deg: T) -> Option<Self> {
                let deg = deg.into();
                if (Self::DEG_MIN..=Self::DEG_MAX).contains(&deg) {
                    Some(Self::from_deg(deg))
                } else {
                    None
                }
            }
        }
    };
}

degree_coord!(
    /// Latitude in the range [-90, 90] degrees.
    LatCoord,
    90.0
);

degree_coord!(
    /// Longitude in the range [-180, 180] degrees.
    LngCoord,
    180.0
);

/// Compact internal representation of a geographical location on a (flat) map.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct MapPoint {
    lat: LatCoord,
    lng: LngCoord,
}

impl MapPoint {
    pub const fn new(lat: LatCoord, lng: LngCoord) -> Self {
        Self { lat, lng }
    }

    pub const fn lat(self) -> LatCoord {
        self.lat
    }

    pub const fn lng(self) -> LngCoord {
        self.lng
    }

    pub fn is_valid(self) -> bool {
        self.lat.is_valid() && self.lng.is_valid()
    }

    pub fn to_lat_lng_deg(self) -> (f64, f64) {
        (self.lat.to_deg(), self.lng.to_deg())
    }

    pub fn from_lat_lng_deg<LAT: Into<f64>, LNG: Into<f64>>(lat: LAT, lng: LNG) -> Self {
        Self::new(LatCoord::from_deg(lat), LngCoord::from_deg(lng))
    }

    pub fn try_from_lat_lng_deg<LAT: Into<f64>, LNG: Into<f64>>(
        lat: LAT,
        lng: LNG,
    ) -> Option<Self> {
        match (LatCoord::try_from_deg(lat), LngCoord::try_from_deg(lng)) {
            (Some(lat), Some(lng)) => Some(Self::new(lat, lng)),
            _ => None,
        }
    }
}

/// Axis aligned bounding box.
///
/// Zip code areas never cross the antimeridian, so unlike a general
/// purpose bbox the south-west corner is always west of the north-east one.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MapBbox {
    sw: MapPoint,
    ne: MapPoint,
}

impl MapBbox {
    pub const fn new(sw: MapPoint, ne: MapPoint) -> Self {
        Self { sw, ne }
    }

    /// Bounds of all valid points or `None` if there are none.
    pub fn from_points<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = MapPoint>,
    {
        points
            .into_iter()
            .filter(|p| p.is_valid())
            .fold(None, |bbox: Option<Self>, p| {
                Some(match bbox {
                    Some(bbox) => bbox.extended_by(p),
                    None => Self::new(p, p),
                })
            })
    }

    pub const fn south_west(&self) -> MapPoint {
        self.sw
    }

    pub const fn north_east(&self) -> MapPoint {
        self.ne
    }

    #[must_use]
    pub fn extended_by(self, pt: MapPoint) -> Self {
        debug_assert!(pt.is_valid());
        let sw = MapPoint::from_raw_pair(
            self.sw.lat().to_raw().min(pt.lat().to_raw()),
            self.sw.lng().to_raw().min(pt.lng().to_raw()),
        );
        let ne = MapPoint::from_raw_pair(
            self.ne.lat().to_raw().max(pt.lat().to_raw()),
            self.ne.lng().to_raw().max(pt.lng().to_raw()),
        );
        Self::new(sw, ne)
    }

    #[must_use]
    pub fn union(self, other: Self) -> Self {
        self.extended_by(other.sw).extended_by(other.ne)
    }
}

impl MapPoint {
    const fn from_raw_pair(lat: RawCoord, lng: RawCoord) -> Self {
        Self::new(LatCoord::from_raw(lat), LngCoord::from_raw(lng))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn latitude() {
        assert!(!LatCoord::default().is_valid());
        assert!(LatCoord::default().to_deg().is_nan());
        assert_eq!(0.0, LatCoord::from_raw(0).to_deg());
        assert_eq!(RAW_COORD_MIN, LatCoord::min().to_raw());
        assert_eq!(RAW_COORD_MAX, LatCoord::max().to_raw());
        assert_eq!(LatCoord::min(), LatCoord::from_deg(-90));
        assert_eq!(LatCoord::max(), LatCoord::from_deg(90));
        assert_eq!(None, LatCoord::try_from_deg(-90.000001));
        assert_eq!(None, LatCoord::try_from_deg(90.000001));
    }

    #[test]
    fn longitude() {
        assert!(!LngCoord::default().is_valid());
        assert!(LngCoord::min().is_valid());
        assert!(LngCoord::max().is_valid());
        assert_eq!(LngCoord::min(), LngCoord::from_deg(-180));
        assert_eq!(LngCoord::max(), LngCoord::from_deg(180));
        assert_eq!(None, LngCoord::try_from_deg(-180.000001));
        assert_eq!(None, LngCoord::try_from_deg(180.000001));
    }

    #[test]
    fn bbox_of_points() {
        assert_eq!(None, MapBbox::from_points(vec![]));
        assert_eq!(None, MapBbox::from_points(vec![MapPoint::default()]));

        let bbox = MapBbox::from_points(vec![
            MapPoint::from_lat_lng_deg(47.5, -122.2),
            MapPoint::from_lat_lng_deg(47.7, -122.0),
            MapPoint::from_lat_lng_deg(47.6, -122.3),
        ])
        .unwrap();
        assert_eq!(bbox.south_west(), MapPoint::from_lat_lng_deg(47.5, -122.3));
        assert_eq!(bbox.north_east(), MapPoint::from_lat_lng_deg(47.7, -122.0));
    }

    #[test]
    fn bbox_union() {
        let a = MapBbox::new(
            MapPoint::from_lat_lng_deg(0.0, 0.0),
            MapPoint::from_lat_lng_deg(10.0, 10.0),
        );
        let b = MapBbox::new(
            MapPoint::from_lat_lng_deg(-10.0, -20.0),
            MapPoint::from_lat_lng_deg(0.0, 0.0),
        );
        let u = a.union(b);
        assert_eq!(u.south_west(), MapPoint::from_lat_lng_deg(-10.0, -20.0));
        assert_eq!(u.north_east(), MapPoint::from_lat_lng_deg(10.0, 10.0));
    }
}
