use std::{fmt, str::FromStr};
use thiserror::Error;

use crate::{group::GroupId, zip::ZipCode};

const KEY_SEPARATOR: char = '_';

/// Composite key of a zip code within a group.
///
/// The same zip code may be a member of several groups,
/// each membership has its own checkbox and map layer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LayerKey {
    pub group: GroupId,
    pub zip_code: ZipCode,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Invalid layer key '{0}'")]
pub struct LayerKeyParseError(pub String);

impl LayerKey {
    pub const fn new(group: GroupId, zip_code: ZipCode) -> Self {
        Self { group, zip_code }
    }
}

impl fmt::Display for LayerKey {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}{}{}", self.group, KEY_SEPARATOR, self.zip_code)
    }
}

impl FromStr for LayerKey {
    type Err = LayerKeyParseError;

    // Everything after the first separator belongs to the zip code.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || LayerKeyParseError(s.to_string());
        let (group, zip_code) = s.split_once(KEY_SEPARATOR).ok_or_else(err)?;
        let group = group.parse().map_err(|_| err())?;
        let zip_code = zip_code.parse().map_err(|_| err())?;
        Ok(Self { group, zip_code })
    }
}
