pub mod registry;
pub mod repositories;
pub mod usecases;
pub mod util;

pub mod entities {
    pub use zc_entities::{color::*, geo::*, group::*, layer::*, zip::*};
}

pub use repositories::Error as RepoError;
