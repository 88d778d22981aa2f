use serde::Deserialize;

const DEFAULT_CONFIG_FILE: &str = include_str!("zipcrusher.default.toml");

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    pub db: Option<Db>,
    pub webserver: Option<WebServer>,
    pub map: Option<Map>,
}

impl Config {
    pub fn try_default() -> Result<Self, toml::de::Error> {
        toml::from_str(DEFAULT_CONFIG_FILE)
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Db {
    pub connection_sqlite: String,
    pub connection_pool_size: u8,
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct WebServer {
    pub cors: bool,
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Map {
    pub center_lat: Option<f64>,
    pub center_lng: Option<f64>,
    pub zoom: Option<u8>,
    pub max_zoom: Option<u8>,
    pub tile_url: Option<String>,
    pub attribution: Option<String>,
}
