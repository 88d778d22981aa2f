pub use zc_core::{registry, repositories, util};

pub mod entities {
    pub use zc_core::entities::*;
    #[cfg(test)]
    pub use zc_entities::builders::*;
}

pub mod usecases {
    pub use zc_core::usecases::*;
}
