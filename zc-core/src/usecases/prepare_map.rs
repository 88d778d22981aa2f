use super::prelude::*;
use crate::{
    registry::{MapRegistry, MapSurface},
    util::query::fetch_codes,
};

/// Loads the data of all groups and draws their polygons.
pub fn prepare_map<R, S>(
    repo: &R,
    groups: Vec<Group>,
    surface: &mut S,
) -> Result<MapRegistry<S::Layer>>
where
    R: ZipCodeRepo,
    S: MapSurface,
{
    let codes = fetch_codes(&groups);
    let records = if codes.is_empty() {
        vec![]
    } else {
        let keys: Vec<&str> = codes.iter().map(String::as_str).collect();
        repo.get_zip_records(&keys)?
    };
    log::debug!(
        "Preparing map with {} groups and {} of {} zip codes",
        groups.len(),
        records.len(),
        codes.len()
    );
    let mut registry = MapRegistry::new(groups, records);
    registry.populate(surface);
    Ok(registry)
}

#[cfg(test)]
mod tests {
    use super::{super::tests::MockDb, *};
    use zc_entities::builders::*;

    #[derive(Default)]
    struct CountingSurface {
        drawn: usize,
        fitted: usize,
    }

    impl MapSurface for CountingSurface {
        type Layer = ();
        fn draw_polygon(&mut self, _: &LayerKey, _: &Group, _: &ZipRecord) {
            self.drawn += 1;
        }
        fn remove_layer(&mut self, _: &LayerKey, _: ()) {}
        fn fit_bounds(&mut self, _: &MapBbox) {
            self.fitted += 1;
        }
        fn set_view(&mut self, _: MapPoint) {}
    }

    #[test]
    fn prepare_map_of_two_groups() {
        let db = MockDb::default();
        db.zip_records.borrow_mut().extend(vec![
            ZipRecord::build().code("98006").poly(&[(47.5, -122.2), (47.6, -122.1)]).finish(),
            ZipRecord::build().code("98007").finish(),
        ]);
        let groups = vec![
            Group::build(1).zip_codes(&["98006", "98007"]).finish(),
            Group::build(2).zip_codes(&["98006", "12345"]).finish(),
        ];
        let mut surface = CountingSurface::default();
        let reg = prepare_map(&db, groups, &mut surface).unwrap();
        assert_eq!(3, reg.selectors().len());
        assert_eq!(2, surface.drawn);
        assert_eq!(2, surface.fitted);
    }

    #[test]
    fn prepare_empty_map() {
        let db = MockDb::default();
        let mut surface = CountingSurface::default();
        let reg = prepare_map(&db, vec![], &mut surface).unwrap();
        assert!(reg.groups().is_empty());
        assert_eq!(0, surface.drawn);
    }
}
