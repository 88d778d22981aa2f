use anyhow::{Context as _, Result};
use clap::{Parser, Subcommand};
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::config::Config;
use zc_core::{entities::ZipRecord, usecases as uc};
use zc_db_sqlite::{run_embedded_database_migrations, Connections};

#[derive(Debug, Parser)]
#[command(version, about = "Show groups of US zip codes on a map")]
struct Args {
    /// Configuration file
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// URL of the SQLite database
    #[arg(long, value_name = "DATABASE_URL")]
    db_url: Option<String>,

    /// Allow requests from any origin
    #[arg(long)]
    enable_cors: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Start the web server (default)
    Serve,
    /// Import zip code records from JSON
    Import {
        /// Either a JSON object that maps zip codes to their records
        /// or a directory with one `<zip>.json` record file per zip code
        #[arg(value_name = "PATH")]
        path: PathBuf,
    },
}

pub async fn run() -> Result<()> {
    let args = Args::parse();
    let Args {
        config,
        db_url,
        enable_cors,
        command,
    } = args;

    let mut cfg = Config::try_load_from_file_or_default(config)?;
    if let Some(db_url) = db_url {
        cfg.db.conn_sqlite = db_url;
    }
    if enable_cors {
        cfg.webserver.enable_cors = true;
    }

    log::info!(
        "Connecting to SQLite database '{}' (pool size = {})",
        cfg.db.conn_sqlite,
        cfg.db.conn_pool_size
    );
    let connections = Connections::init(&cfg.db.conn_sqlite, cfg.db.conn_pool_size.into())?;
    run_embedded_database_migrations(connections.exclusive()?)?;

    match command.unwrap_or(Command::Serve) {
        Command::Serve => {
            let web_cfg = zc_webserver::Cfg { map: cfg.map };
            zc_webserver::run(
                connections,
                cfg.webserver.enable_cors,
                web_cfg,
                env!("CARGO_PKG_VERSION"),
            )
            .await;
        }
        Command::Import { path } => {
            let records = read_zip_records(&path)
                .with_context(|| format!("Could not import from '{}'", path.display()))?;
            let mut db = connections.exclusive()?;
            let count = db.transaction(|conn| uc::import_zip_records(conn, records))?;
            println!("Imported {count} zip code records from '{}'", path.display());
        }
    }
    Ok(())
}

fn read_zip_records(path: &Path) -> Result<Vec<ZipRecord>> {
    let records = if path.is_dir() {
        read_zip_record_dir(path)?
    } else {
        let json = fs::read_to_string(path)?;
        serde_json::from_str(&json)?
    };
    records
        .into_iter()
        .map(|(code, record)| {
            record
                .try_into_entity(code.clone())
                .with_context(|| format!("Invalid record of zip code '{code}'"))
        })
        .collect()
}

// Files that are not named `<zip>.json` are ignored.
fn read_zip_record_dir(dir: &Path) -> Result<zc_boundary::ZipRecords> {
    let mut records = zc_boundary::ZipRecords::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.extension().and_then(|ext| ext.to_str()) != Some("json") {
            continue;
        }
        let Some(code) = path.file_stem().and_then(|stem| stem.to_str()) else {
            continue;
        };
        let json = fs::read_to_string(&path)?;
        let record = serde_json::from_str(&json)
            .with_context(|| format!("Invalid JSON in '{}'", path.display()))?;
        records.insert(code.to_string(), record);
    }
    log::debug!("Found {} record files in '{}'", records.len(), dir.display());
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as _;

    #[test]
    fn parse_subcommands() {
        let args = Args::try_parse_from(["zipcrusher"]).unwrap();
        assert!(args.command.is_none());
        assert!(!args.enable_cors);

        let args =
            Args::try_parse_from(["zipcrusher", "--db-url", "test.db", "import", "zips.json"])
                .unwrap();
        assert_eq!(Some("test.db"), args.db_url.as_deref());
        assert!(matches!(
            args.command,
            Some(Command::Import { ref path }) if path == Path::new("zips.json")
        ));
    }

    #[test]
    fn read_records_from_json_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(
            br#"{
                "98006": {
                    "poly": [{"lat": "47.55", "lng": "-122.2"}, {"lat": 47.58, "lng": -122.1}],
                    "center": {"lat": 47.56, "lng": -122.15},
                    "name": "BELLEVUE"
                },
                "96201": {"name": "FPO AP", "undeliverable": true}
            }"#,
        )
        .unwrap();
        let records = read_zip_records(file.path()).unwrap();
        assert_eq!(2, records.len());
        assert_eq!("96201", records[0].code);
        assert!(records[0].undeliverable);
        assert_eq!("98006", records[1].code);
        assert_eq!(2, records[1].poly.len());
    }

    #[test]
    fn read_records_from_json_directory() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("98006.json"),
            r#"{"poly": [{"lng": "-122.2", "lat": "47.55", "alt": "0"}], "name": "BELLEVUE", "center": {"lat": "47.56", "lng": "-122.15"}}"#,
        )
        .unwrap();
        fs::write(dir.path().join("96201.json"), r#"{"undeliverable": true, "name": "FPO AP"}"#)
            .unwrap();
        fs::write(dir.path().join("README.txt"), "not a record").unwrap();

        let records = read_zip_records(dir.path()).unwrap();
        assert_eq!(2, records.len());
        assert_eq!("96201", records[0].code);
        assert!(records[0].undeliverable);
        assert_eq!("98006", records[1].code);
        assert_eq!(Some("BELLEVUE"), records[1].name.as_deref());
        assert_eq!(1, records[1].poly.len());
    }

    #[test]
    fn reject_invalid_record_file_in_directory() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("98006.json"), "{").unwrap();
        assert!(read_zip_records(dir.path()).is_err());
    }

    #[test]
    fn reject_records_with_invalid_coordinates() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(br#"{"98006": {"center": {"lat": 123.0, "lng": 0.0}}}"#)
            .unwrap();
        assert!(read_zip_records(file.path()).is_err());
    }
}
