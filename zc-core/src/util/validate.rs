use crate::entities::*;
use thiserror::Error;

pub const ZIP_CODE_LIST_SEPARATOR: char = ',';

/// Parses a comma separated list of zip codes.
///
/// Every entry must be a valid zip code, including empty ones.
/// On failure all invalid entries are returned in the order of
/// their occurrence.
pub fn parse_zip_code_list(list: &str) -> Result<Vec<ZipCode>, Vec<String>> {
    let mut codes = vec![];
    let mut invalid = vec![];
    for entry in list.split(ZIP_CODE_LIST_SEPARATOR).map(str::trim) {
        match entry.parse::<ZipCode>() {
            Ok(code) => codes.push(code),
            Err(_) => invalid.push(entry.to_string()),
        }
    }
    if invalid.is_empty() {
        Ok(codes)
    } else {
        Err(invalid)
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GroupNameInvalidation {
    #[error("Please enter a group name")]
    Empty,
    #[error("A group named '{0}' already exists")]
    Duplicate(String),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GroupCodesInvalidation {
    #[error("Please enter at least one zip code")]
    Empty,
    #[error("Invalid zip codes: {}", quoted(.0))]
    Invalid(Vec<String>),
}

fn quoted(entries: &[String]) -> String {
    entries
        .iter()
        .map(|e| format!("'{e}'"))
        .collect::<Vec<_>>()
        .join(", ")
}

/// All problems of a group that should be added,
/// both fields are always checked.
#[derive(Debug, Error, Clone, Default, PartialEq, Eq)]
#[error("Invalid group")]
pub struct NewGroupInvalidation {
    pub name: Option<GroupNameInvalidation>,
    pub codes: Option<GroupCodesInvalidation>,
}

impl NewGroupInvalidation {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.codes.is_none()
    }
}

/// A group that has been entered but not yet validated.
#[derive(Debug, Clone)]
pub struct NewGroup<'a> {
    pub name: &'a str,
    pub codes: &'a str,
    pub existing: &'a [Group],
}

impl NewGroup<'_> {
    pub fn validate_and_parse(&self) -> Result<Vec<ZipCode>, NewGroupInvalidation> {
        let mut invalidation = NewGroupInvalidation::default();
        let name = self.name;
        if name.is_empty() {
            invalidation.name = Some(GroupNameInvalidation::Empty);
        } else if self.existing.iter().any(|g| g.name == name) {
            invalidation.name = Some(GroupNameInvalidation::Duplicate(name.to_string()));
        }
        let codes = if self.codes.is_empty() {
            invalidation.codes = Some(GroupCodesInvalidation::Empty);
            vec![]
        } else {
            parse_zip_code_list(self.codes).unwrap_or_else(|invalid| {
                invalidation.codes = Some(GroupCodesInvalidation::Invalid(invalid));
                vec![]
            })
        };
        if invalidation.is_empty() {
            Ok(codes)
        } else {
            Err(invalidation)
        }
    }
}
