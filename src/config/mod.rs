use anyhow::{anyhow, Result};
use std::{env, fs, io::ErrorKind, path::Path};
use zc_core::entities::MapPoint;
use zc_webserver::MapCfg;

mod raw;

const DEFAULT_CONFIG_FILE_NAME: &str = "zipcrusher.toml";

const ENV_NAME_DB_URL: &str = "DATABASE_URL";

pub struct Config {
    pub db: Db,
    pub webserver: WebServer,
    pub map: MapCfg,
}

impl Config {
    pub fn try_load_from_file_or_default<P: AsRef<Path>>(file_path: Option<P>) -> Result<Self> {
        let file_path: &Path = file_path.as_ref().map(|p| p.as_ref()).unwrap_or_else(|| {
            log::info!("No configuration file specified. load {DEFAULT_CONFIG_FILE_NAME}");
            Path::new(DEFAULT_CONFIG_FILE_NAME)
        });

        let raw_config = match fs::read_to_string(file_path) {
            Ok(cfg_string) => toml::from_str(&cfg_string)?,
            Err(err) => match err.kind() {
                ErrorKind::NotFound => {
                    log::info!(
                        "{} not found => load default configuration.",
                        file_path.display()
                    );
                    raw::Config::try_default()?
                }
                _ => return Err(err.into()),
            },
        };
        let mut cfg = Self::try_from(raw_config)?;
        if let Ok(db_url) = env::var(ENV_NAME_DB_URL) {
            cfg.db.conn_sqlite = db_url;
        }
        Ok(cfg)
    }
}

pub struct Db {
    /// SQLite connection
    pub conn_sqlite: String,
    pub conn_pool_size: u8,
}

pub struct WebServer {
    pub enable_cors: bool,
}

impl TryFrom<raw::Config> for Config {
    type Error = anyhow::Error;
    fn try_from(from: raw::Config) -> Result<Self> {
        let raw::Config { db, webserver, map } = from;
        let default = raw::Config::try_default()?;

        let raw::Db {
            connection_sqlite,
            connection_pool_size,
        } = db
            .or(default.db)
            .ok_or_else(|| anyhow!("Missing database configuration"))?;
        if connection_pool_size == 0 {
            return Err(anyhow!("The connection pool must not be empty"));
        }
        let db = Db {
            conn_sqlite: connection_sqlite,
            conn_pool_size: connection_pool_size,
        };

        let raw::WebServer { cors } = webserver
            .or(default.webserver)
            .ok_or_else(|| anyhow!("Missing webserver configuration"))?;
        let webserver = WebServer { enable_cors: cors };

        let map = match map {
            Some(map) => map_cfg(map)?,
            None => MapCfg::default(),
        };

        Ok(Self { db, webserver, map })
    }
}

// Omitted map settings keep their defaults.
fn map_cfg(from: raw::Map) -> Result<MapCfg> {
    let raw::Map {
        center_lat,
        center_lng,
        zoom,
        max_zoom,
        tile_url,
        attribution,
    } = from;
    let mut cfg = MapCfg::default();
    let (default_lat, default_lng) = cfg.center.to_lat_lng_deg();
    let lat = center_lat.unwrap_or(default_lat);
    let lng = center_lng.unwrap_or(default_lng);
    cfg.center = MapPoint::try_from_lat_lng_deg(lat, lng)
        .ok_or_else(|| anyhow!("Invalid map center ({lat}, {lng})"))?;
    if let Some(zoom) = zoom {
        cfg.zoom = zoom;
    }
    if let Some(max_zoom) = max_zoom {
        cfg.max_zoom = max_zoom;
    }
    if cfg.zoom > cfg.max_zoom {
        return Err(anyhow!(
            "The initial zoom level {} exceeds the maximum zoom level {}",
            cfg.zoom,
            cfg.max_zoom
        ));
    }
    if let Some(tile_url) = tile_url {
        cfg.tile_url = tile_url;
    }
    if let Some(attribution) = attribution {
        cfg.attribution = attribution;
    }
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as _;

    fn load_str(toml: &str) -> Result<Config> {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(toml.as_bytes()).unwrap();
        Config::try_load_from_file_or_default(Some(file.path()))
    }

    #[test]
    fn load_default_config() {
        let file: Option<&Path> = None;
        let cfg = Config::try_load_from_file_or_default(file).unwrap();
        assert_eq!(10, cfg.db.conn_pool_size);
        assert!(!cfg.webserver.enable_cors);
        assert_eq!(13, cfg.map.zoom);
    }

    #[test]
    fn fall_back_to_default_sections() {
        let cfg = load_str(
            r#"
[webserver]
cors = true
"#,
        )
        .unwrap();
        assert!(cfg.webserver.enable_cors);
        assert_eq!(10, cfg.db.conn_pool_size);
        assert_eq!(19, cfg.map.max_zoom);
    }

    #[test]
    fn override_map_settings() {
        let cfg = load_str(
            r#"
[map]
center-lat = 40.7128
center-lng = -74.006
zoom = 11
"#,
        )
        .unwrap();
        let (lat, lng) = cfg.map.center.to_lat_lng_deg();
        assert!((lat - 40.7128).abs() < 1e-6);
        assert!((lng + 74.006).abs() < 1e-6);
        assert_eq!(11, cfg.map.zoom);
        assert_eq!(19, cfg.map.max_zoom);
        assert!(cfg.map.tile_url.contains("openstreetmap"));
    }

    #[test]
    fn reject_invalid_map_settings() {
        assert!(load_str("[map]\ncenter-lat = 91.0\n").is_err());
        assert!(load_str("[map]\nzoom = 20\nmax-zoom = 18\n").is_err());
    }

    #[test]
    fn reject_empty_connection_pool() {
        let toml = r#"
[db]
connection-sqlite = ":memory:"
connection-pool-size = 0
"#;
        assert!(load_str(toml).is_err());
    }

    #[test]
    fn reject_malformed_file() {
        assert!(load_str("[db\n").is_err());
    }
}
