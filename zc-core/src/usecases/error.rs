use crate::{repositories, util::validate::NewGroupInvalidation};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid zip code '{0}'")]
    ZipCode(String),
    #[error(transparent)]
    NewGroup(#[from] NewGroupInvalidation),
    #[error("No more than {0} groups are supported")]
    GroupLimit(usize),
    #[error("Missing zip code list")]
    EmptyZipCodeList,
    #[error("Unknown zip code layer '{0}'")]
    UnknownLayerKey(String),
    #[error("No polygon available for '{0}'")]
    LayerDisabled(String),
    #[error(transparent)]
    Repo(#[from] repositories::Error),
}

impl From<zc_entities::zip::ZipCodeParseError> for Error {
    fn from(err: zc_entities::zip::ZipCodeParseError) -> Self {
        Self::ZipCode(err.0)
    }
}
