pub use zc_boundary::*;

pub mod to_json {
    //! Entity -> JSON

    use super::*;
    use crate::{
        core::{entities as e, registry::MapRegistry},
        web::MapCfg,
    };

    pub fn zip_records<I>(records: I) -> ZipRecords
    where
        I: IntoIterator<Item = e::ZipRecord>,
    {
        records
            .into_iter()
            .map(|r| (r.code.clone(), ZipRecord::from(r)))
            .collect()
    }

    pub const fn polygon_style() -> PolygonStyle {
        PolygonStyle {
            weight: 1,
            fill: true,
            fill_opacity: 0.2,
        }
    }

    pub fn map_setup<L>(
        cfg: &MapCfg,
        registry: &MapRegistry<L>,
        commands: Vec<MapCommand>,
    ) -> MapSetup {
        let MapCfg {
            center,
            zoom,
            max_zoom,
            tile_url,
            attribution,
        } = cfg;
        MapSetup {
            center: (*center).into(),
            zoom: *zoom,
            max_zoom: *max_zoom,
            tile_url: tile_url.clone(),
            attribution: attribution.clone(),
            style: polygon_style(),
            groups: registry.groups().iter().cloned().map(Into::into).collect(),
            zipcodes: zip_records(registry.records().cloned()),
            commands,
        }
    }
}
