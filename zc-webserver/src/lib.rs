#![recursion_limit = "128"]

#[macro_use]
extern crate log;

use zc_db_sqlite::Connections;

mod adapters;
mod core;
mod web;

pub use web::{Cfg, MapCfg};

pub async fn run(connections: Connections, enable_cors: bool, cfg: Cfg, version: &'static str) {
    web::run(connections.into(), enable_cors, cfg, version).await;
}
