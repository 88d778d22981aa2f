// Low-level database access traits.

use crate::entities::*;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("The requested object could not be found")]
    NotFound,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

type Result<T> = std::result::Result<T, Error>;

pub trait ZipCodeRepo {
    /// Load the records of the given 5 digit zip codes.
    ///
    /// Unknown zip codes are silently skipped.
    fn get_zip_records(&self, codes: &[&str]) -> Result<Vec<ZipRecord>>;

    fn create_or_replace_zip_record(&self, record: &ZipRecord) -> Result<()>;

    fn count_zip_records(&self) -> Result<usize>;
}
