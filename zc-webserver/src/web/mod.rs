use rocket::{config::Config as RocketCfg, Rocket, Route};

use crate::core::entities::MapPoint;

pub mod api;
#[cfg(feature = "frontend")]
mod frontend;
mod guards;
mod sqlite;

#[cfg(test)]
pub mod tests;

#[derive(Debug, Clone)]
pub struct Cfg {
    pub map: MapCfg,
}

/// Initial view and tiles of the rendered map.
#[derive(Debug, Clone)]
pub struct MapCfg {
    pub center: MapPoint,
    pub zoom: u8,
    pub max_zoom: u8,
    pub tile_url: String,
    pub attribution: String,
}

impl Default for MapCfg {
    fn default() -> Self {
        Self {
            center: MapPoint::from_lat_lng_deg(47.5581, -122.1466),
            zoom: 13,
            max_zoom: 19,
            tile_url: "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png".to_string(),
            attribution:
                "&copy; <a href=https://www.openstreetmap.org/copyright>OpenStreetMap</a>"
                    .to_string(),
        }
    }
}

pub(crate) struct InstanceOptions {
    mounts: Vec<(&'static str, Vec<Route>)>,
    rocket_cfg: Option<RocketCfg>,
    cfg: Cfg,
    version: &'static str,
}

pub(crate) fn rocket_instance(
    options: InstanceOptions,
    db: sqlite::Connections,
) -> Rocket<rocket::Build> {
    let InstanceOptions {
        mounts,
        rocket_cfg,
        cfg,
        version,
    } = options;

    let record_count = db.shared().and_then(|db| {
        use crate::core::repositories::ZipCodeRepo as _;
        Ok(db.count_zip_records()?)
    });
    match record_count {
        Ok(count) => info!("{count} zip code records available"),
        Err(err) => warn!("Unable to count zip code records: {err}"),
    }

    let r = match rocket_cfg {
        Some(cfg) => rocket::custom(cfg),
        None => rocket::build(),
    };

    let version = guards::Version(version);

    let mut instance = r.manage(db).manage(cfg).manage(version);

    for (m, r) in mounts {
        instance = instance.mount(m, r);
    }
    instance
}

#[cfg(not(feature = "frontend"))]
fn mounts() -> Vec<(&'static str, Vec<Route>)> {
    vec![("/api", api::routes())]
}

#[cfg(feature = "frontend")]
fn mounts() -> Vec<(&'static str, Vec<Route>)> {
    vec![("/api", api::routes()), ("/", frontend::routes())]
}

pub async fn run(db: sqlite::Connections, enable_cors: bool, cfg: Cfg, version: &'static str) {
    let options = InstanceOptions {
        mounts: mounts(),
        rocket_cfg: None,
        cfg,
        version,
    };
    let instance = rocket_instance(options, db);
    let server_task = if enable_cors {
        match rocket_cors::CorsOptions::default().to_cors() {
            Ok(cors) => instance.attach(cors).launch(),
            Err(err) => {
                error!("Invalid CORS configuration: {err}");
                return;
            }
        }
    } else {
        instance.launch()
    };
    if let Err(err) = server_task.await {
        error!("Unable to run web server: {err}");
    }
}
