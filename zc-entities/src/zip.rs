use std::{fmt, str::FromStr};
use thiserror::Error;

use crate::geo::{MapBbox, MapPoint};

const BASE_LEN: usize = 5;
const PLUS4_LEN: usize = 4;
const PLUS4_SEPARATOR: char = '+';

/// A US zip code, optionally with the ZIP+4 extension (`12345+6789`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ZipCode(String);

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Invalid zip code '{0}'")]
pub struct ZipCodeParseError(pub String);

impl ZipCode {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The 5 digit code that is used as lookup key.
    pub fn base(&self) -> &str {
        &self.0[..BASE_LEN]
    }

    pub fn plus4(&self) -> Option<&str> {
        self.0.get(BASE_LEN + 1..)
    }
}

fn all_digits(s: &str) -> bool {
    s.bytes().all(|b| b.is_ascii_digit())
}

impl FromStr for ZipCode {
    type Err = ZipCodeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let valid = match trimmed.split_once(PLUS4_SEPARATOR) {
            None => trimmed.len() == BASE_LEN && all_digits(trimmed),
            Some((base, plus4)) => {
                base.len() == BASE_LEN
                    && all_digits(base)
                    && plus4.len() == PLUS4_LEN
                    && all_digits(plus4)
            }
        };
        if !valid {
            return Err(ZipCodeParseError(s.to_string()));
        }
        Ok(Self(trimmed.to_string()))
    }
}

impl fmt::Display for ZipCode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ZipCode {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

/// Geometry and naming of a single zip code area.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ZipRecord {
    /// The 5 digit zip code
    pub code: String,
    pub name: Option<String>,
    pub center: Option<MapPoint>,
    /// Outline of the area, empty if unknown.
    pub poly: Vec<MapPoint>,
    /// Special zip codes (PO boxes, military, ...) without a delivery area.
    pub undeliverable: bool,
}

impl ZipRecord {
    pub fn has_polygon(&self) -> bool {
        !self.poly.is_empty()
    }

    pub fn bbox(&self) -> Option<MapBbox> {
        MapBbox::from_points(self.poly.iter().copied())
    }
}
