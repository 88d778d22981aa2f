use super::prelude::*;
use crate::util::validate::ZIP_CODE_LIST_SEPARATOR;

/// Parses the comma separated zip code list of a lookup request.
///
/// Empty segments are ignored, every other segment must be a valid zip code.
pub fn parse_lookup_query(query: &str) -> Result<Vec<ZipCode>> {
    let codes = query
        .split(ZIP_CODE_LIST_SEPARATOR)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::parse::<ZipCode>)
        .collect::<std::result::Result<Vec<_>, _>>()?;
    if codes.is_empty() {
        return Err(Error::EmptyZipCodeList);
    }
    Ok(codes)
}

/// Loads the records of all given zip codes at once.
///
/// Codes are looked up by their 5 digit base, unknown codes are absent.
pub fn lookup_zip_codes<R: ZipCodeRepo>(repo: &R, codes: &[ZipCode]) -> Result<Vec<ZipRecord>> {
    if codes.is_empty() {
        return Err(Error::EmptyZipCodeList);
    }
    let mut keys: Vec<&str> = codes.iter().map(ZipCode::base).collect();
    keys.sort_unstable();
    keys.dedup();
    log::debug!("Looking up {} zip codes", keys.len());
    Ok(repo.get_zip_records(&keys)?)
}
