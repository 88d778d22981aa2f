use rocket::{config::Config as RocketCfg, local::blocking::Client, Route};

use crate::{
    core::{entities::*, usecases},
    web::{sqlite, Cfg, MapCfg},
};

pub mod prelude {

    pub const DUMMY_VERSION: &str = "3.2.1";

    pub use rocket::{
        http::ContentType,
        local::blocking::{Client, LocalResponse},
    };

    pub use super::{import_records, setup};

    pub use crate::core::entities::*;
}

pub fn setup(mounts: Vec<(&'static str, Vec<Route>)>) -> (Client, sqlite::Connections) {
    let connections = zc_db_sqlite::Connections::init(":memory:", 1).unwrap();
    zc_db_sqlite::run_embedded_database_migrations(connections.exclusive().unwrap()).unwrap();
    let db = sqlite::Connections::from(connections);
    let options = super::InstanceOptions {
        mounts,
        rocket_cfg: Some(RocketCfg::debug_default()),
        cfg: Cfg {
            map: MapCfg::default(),
        },
        version: prelude::DUMMY_VERSION,
    };
    let rocket = super::rocket_instance(options, db.clone());
    let client = Client::tracked(rocket).unwrap();
    (client, db)
}

pub fn import_records(db: &sqlite::Connections, records: Vec<ZipRecord>) {
    usecases::import_zip_records(&db.exclusive().unwrap(), records).unwrap();
}
