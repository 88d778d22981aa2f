//! Encoding of groups as URL query parameters.
//!
//! Each group `N` is represented by the two parameters
//! `group<N>Name` and `group<N>Codes`, the latter being
//! a comma separated list of zip codes.

use std::collections::HashMap;

use url::form_urlencoded;

use super::validate::ZIP_CODE_LIST_SEPARATOR;
use crate::entities::*;

pub type QueryParams = HashMap<String, String>;

pub fn name_param(id: GroupId) -> String {
    format!("group{id}Name")
}

pub fn codes_param(id: GroupId) -> String {
    format!("group{id}Codes")
}

/// Decodes an `application/x-www-form-urlencoded` string.
///
/// If a parameter occurs more than once the last value wins.
pub fn parse_query(query: &str) -> QueryParams {
    form_urlencoded::parse(query.trim_start_matches('?').as_bytes())
        .into_owned()
        .collect()
}

/// Restores the groups from decoded query parameters.
///
/// A group exists only if both of its parameters are present.
/// Numbers without parameters leave a gap, the color always
/// follows the number. Empty and invalid zip codes are dropped,
/// as well as groups whose name has already been taken.
pub fn decode_groups(params: &QueryParams) -> Vec<Group> {
    let mut groups: Vec<Group> = vec![];
    for id in (1..=Color::PALETTE_SIZE).filter_map(GroupId::new) {
        let (Some(name), Some(codes)) =
            (params.get(&name_param(id)), params.get(&codes_param(id)))
        else {
            continue;
        };
        if groups.iter().any(|g| &g.name == name) {
            log::warn!("Ignoring group {id} with the duplicate name '{name}'");
            continue;
        }
        let mut zip_codes = vec![];
        for entry in codes
            .split(ZIP_CODE_LIST_SEPARATOR)
            .map(str::trim)
            .filter(|s| !s.is_empty())
        {
            match entry.parse() {
                Ok(code) => zip_codes.push(code),
                Err(_) => log::warn!("Ignoring invalid zip code '{entry}' of group {id}"),
            }
        }
        groups.extend(Group::new(id, name.as_str(), zip_codes));
    }
    groups
}

pub fn encode_groups(groups: &[Group]) -> String {
    let separator = ZIP_CODE_LIST_SEPARATOR.to_string();
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    for g in groups {
        let codes = g
            .zip_codes
            .iter()
            .map(ZipCode::as_str)
            .collect::<Vec<_>>()
            .join(separator.as_str());
        serializer.append_pair(&name_param(g.id), &g.name);
        serializer.append_pair(&codes_param(g.id), &codes);
    }
    serializer.finish()
}

/// All distinct 5 digit zip codes of the groups in order of
/// their first occurrence.
pub fn fetch_codes(groups: &[Group]) -> Vec<String> {
    let mut codes: Vec<String> = vec![];
    for code in groups.iter().flat_map(|g| g.zip_codes.iter()) {
        if !codes.iter().any(|c| c == code.base()) {
            codes.push(code.base().to_string());
        }
    }
    codes
}
