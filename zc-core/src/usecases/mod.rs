mod add_group;
mod error;
mod import_zip_records;
mod lookup_zip_codes;
mod prepare_map;

#[cfg(test)]
pub mod tests;

pub use self::{
    add_group::*, error::Error, import_zip_records::*, lookup_zip_codes::*, prepare_map::*,
};

mod prelude {
    pub use super::error::Error;
    pub type Result<T> = std::result::Result<T, Error>;
    pub use crate::{entities::*, repositories::*};
}
