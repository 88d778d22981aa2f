use std::{fmt, num::NonZeroUsize, str::FromStr};
use thiserror::Error;

use crate::{color::Color, zip::ZipCode};

/// The 1-based number of a group.
///
/// The number is part of the URL parameters (`group<N>Name`)
/// and of the composite layer keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GroupId(NonZeroUsize);

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Invalid group number '{0}'")]
pub struct GroupIdParseError(pub String);

impl GroupId {
    pub fn new(number: usize) -> Option<Self> {
        NonZeroUsize::new(number).map(Self)
    }

    pub const fn number(self) -> usize {
        self.0.get()
    }

    pub fn color(self) -> Option<Color> {
        Color::of_group_number(self.number())
    }
}

impl fmt::Display for GroupId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for GroupId {
    type Err = GroupIdParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<usize>()
            .ok()
            .and_then(Self::new)
            .ok_or_else(|| GroupIdParseError(s.to_string()))
    }
}

/// A named, colored collection of zip codes that
/// are displayed together.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    pub id: GroupId,
    pub name: String,
    pub color: Color,
    pub zip_codes: Vec<ZipCode>,
}

impl Group {
    /// Creates a new group that is colored according to its number.
    ///
    /// Returns `None` if the palette has no color for this number.
    /// Repeated zip codes are dropped, the order of first occurrence is kept.
    pub fn new(id: GroupId, name: impl Into<String>, zip_codes: Vec<ZipCode>) -> Option<Self> {
        let color = id.color()?;
        let mut unique = Vec::with_capacity(zip_codes.len());
        for code in zip_codes {
            if !unique.contains(&code) {
                unique.push(code);
            }
        }
        Some(Self {
            id,
            name: name.into(),
            color,
            zip_codes: unique,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn codes(codes: &[&str]) -> Vec<ZipCode> {
        codes.iter().map(|c| c.parse().unwrap()).collect()
    }

    #[test]
    fn group_ids() {
        assert_eq!(None, GroupId::new(0));
        assert_eq!(3, GroupId::new(3).unwrap().number());
        assert_eq!(Ok(GroupId::new(2).unwrap()), "2".parse());
        assert!("0".parse::<GroupId>().is_err());
        assert!("-1".parse::<GroupId>().is_err());
        assert!("x".parse::<GroupId>().is_err());
    }

    #[test]
    fn new_group_is_colored_by_number() {
        let g = Group::new(GroupId::new(2).unwrap(), "East", codes(&["98006"])).unwrap();
        assert_eq!(Color::Blue, g.color);
        assert!(Group::new(GroupId::new(5).unwrap(), "Too many", vec![]).is_none());
    }

    #[test]
    fn new_group_drops_repeated_codes() {
        let g = Group::new(
            GroupId::new(1).unwrap(),
            "West",
            codes(&["98006", "98007", "98006", "98004"]),
        )
        .unwrap();
        assert_eq!(codes(&["98006", "98007", "98004"]), g.zip_codes);
    }
}
