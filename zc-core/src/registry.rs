//! State of the displayed groups and their zip code layers.
//!
//! Every zip code of a group gets a selector (checkbox) that is
//! identified by its [`LayerKey`]. A polygon layer is drawn on the
//! map surface if and only if the selector is checked and the zip
//! code has polygon data.

use std::collections::HashMap;

use crate::{entities::*, usecases::Error};

type Result<T> = std::result::Result<T, Error>;

/// Something polygons can be drawn onto.
pub trait MapSurface {
    /// Handle of a drawn polygon.
    type Layer;

    fn draw_polygon(&mut self, key: &LayerKey, group: &Group, record: &ZipRecord) -> Self::Layer;
    fn remove_layer(&mut self, key: &LayerKey, layer: Self::Layer);
    fn fit_bounds(&mut self, bbox: &MapBbox);
    fn set_view(&mut self, center: MapPoint);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZipSelector {
    pub key: LayerKey,
    /// Display name of the zip code area
    pub title: Option<String>,
    pub checked: bool,
    /// Only zip codes with a polygon can be selected.
    pub enabled: bool,
    /// Zip codes with a center can be focused.
    pub focusable: bool,
}

#[derive(Debug)]
pub struct MapRegistry<L> {
    groups: Vec<Group>,
    records: HashMap<String, ZipRecord>,
    selectors: Vec<ZipSelector>,
    layers: HashMap<LayerKey, L>,
}

impl<L> MapRegistry<L> {
    /// Creates selectors for all zip codes of the groups.
    ///
    /// Zip codes without a record are omitted.
    pub fn new<I>(groups: Vec<Group>, records: I) -> Self
    where
        I: IntoIterator<Item = ZipRecord>,
    {
        let records: HashMap<_, _> = records
            .into_iter()
            .map(|r| (r.code.clone(), r))
            .collect();
        let mut selectors = vec![];
        for group in &groups {
            for code in &group.zip_codes {
                let Some(record) = records.get(code.base()) else {
                    log::debug!("No data available for zip code {code}");
                    continue;
                };
                selectors.push(ZipSelector {
                    key: LayerKey::new(group.id, code.clone()),
                    title: record.name.clone(),
                    checked: false,
                    enabled: record.has_polygon(),
                    focusable: record.center.is_some(),
                });
            }
        }
        Self {
            groups,
            records,
            selectors,
            layers: HashMap::new(),
        }
    }

    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    pub fn group(&self, id: GroupId) -> Option<&Group> {
        self.groups.iter().find(|g| g.id == id)
    }

    pub fn records(&self) -> impl Iterator<Item = &ZipRecord> {
        self.records.values()
    }

    pub fn record(&self, key: &LayerKey) -> Option<&ZipRecord> {
        self.records.get(key.zip_code.base())
    }

    pub fn selectors(&self) -> &[ZipSelector] {
        &self.selectors
    }

    pub fn group_selectors(&self, id: GroupId) -> impl Iterator<Item = &ZipSelector> {
        self.selectors.iter().filter(move |s| s.key.group == id)
    }

    pub fn selector(&self, key: &LayerKey) -> Option<&ZipSelector> {
        self.selectors.iter().find(|s| &s.key == key)
    }

    pub fn is_checked(&self, key: &LayerKey) -> bool {
        self.selector(key).map(|s| s.checked).unwrap_or(false)
    }

    pub fn has_layer(&self, key: &LayerKey) -> bool {
        self.layers.contains_key(key)
    }

    pub fn layer_count(&self) -> usize {
        self.layers.len()
    }

    /// Bounds of all drawn polygons of a group.
    pub fn group_bounds(&self, id: GroupId) -> Option<MapBbox> {
        self.group_selectors(id)
            .filter(|s| self.has_layer(&s.key))
            .filter_map(|s| self.record(&s.key).and_then(ZipRecord::bbox))
            .reduce(MapBbox::union)
    }

    /// Draws all selectable zip codes and fits the map to each group.
    pub fn populate<S>(&mut self, surface: &mut S)
    where
        S: MapSurface<Layer = L>,
    {
        let ids: Vec<_> = self.groups.iter().map(|g| g.id).collect();
        for id in ids {
            let keys: Vec<_> = self
                .group_selectors(id)
                .filter(|s| s.enabled)
                .map(|s| s.key.clone())
                .collect();
            for key in keys {
                if let Err(err) = self.toggle(&key, true, surface) {
                    log::warn!("Failed to draw {key}: {err}");
                }
            }
            if let Some(bbox) = self.group_bounds(id) {
                surface.fit_bounds(&bbox);
            }
        }
    }

    /// Shows or hides the polygon of a zip code.
    ///
    /// Toggling into the current state has no effect.
    pub fn toggle<S>(&mut self, key: &LayerKey, checked: bool, surface: &mut S) -> Result<()>
    where
        S: MapSurface<Layer = L>,
    {
        let idx = self
            .selectors
            .iter()
            .position(|s| &s.key == key)
            .ok_or_else(|| Error::UnknownLayerKey(key.to_string()))?;
        if !self.selectors[idx].enabled {
            return Err(Error::LayerDisabled(key.to_string()));
        }
        if checked {
            if !self.layers.contains_key(key) {
                let group = self
                    .groups
                    .iter()
                    .find(|g| g.id == key.group)
                    .ok_or_else(|| Error::UnknownLayerKey(key.to_string()))?;
                let record = self
                    .records
                    .get(key.zip_code.base())
                    .ok_or_else(|| Error::UnknownLayerKey(key.to_string()))?;
                let layer = surface.draw_polygon(key, group, record);
                self.layers.insert(key.clone(), layer);
            }
        } else if let Some(layer) = self.layers.remove(key) {
            surface.remove_layer(key, layer);
        }
        self.selectors[idx].checked = checked;
        Ok(())
    }

    /// Moves the view to the center of a zip code.
    ///
    /// Returns `false` if the zip code has no center.
    pub fn focus<S>(&self, key: &LayerKey, surface: &mut S) -> Result<bool>
    where
        S: MapSurface<Layer = L>,
    {
        if self.selector(key).is_none() {
            return Err(Error::UnknownLayerKey(key.to_string()));
        }
        match self.record(key).and_then(|r| r.center) {
            Some(center) => {
                surface.set_view(center);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Removes a group together with all of its layers and selectors.
    pub fn remove_group<S>(&mut self, id: GroupId, surface: &mut S) -> Option<Group>
    where
        S: MapSurface<Layer = L>,
    {
        let idx = self.groups.iter().position(|g| g.id == id)?;
        for s in self.selectors.iter().filter(|s| s.key.group == id) {
            if let Some(layer) = self.layers.remove(&s.key) {
                surface.remove_layer(&s.key, layer);
            }
        }
        self.selectors.retain(|s| s.key.group != id);
        Some(self.groups.remove(idx))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use zc_entities::builders::*;

    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        Draw(String, Color),
        Remove(String),
        Fit(MapBbox),
        View(MapPoint),
    }

    #[derive(Default)]
    struct MockSurface {
        calls: Vec<Call>,
        next_layer: usize,
    }

    impl MapSurface for MockSurface {
        type Layer = usize;

        fn draw_polygon(&mut self, key: &LayerKey, group: &Group, _: &ZipRecord) -> usize {
            self.calls.push(Call::Draw(key.to_string(), group.color));
            self.next_layer += 1;
            self.next_layer
        }
        fn remove_layer(&mut self, key: &LayerKey, _: usize) {
            self.calls.push(Call::Remove(key.to_string()));
        }
        fn fit_bounds(&mut self, bbox: &MapBbox) {
            self.calls.push(Call::Fit(*bbox));
        }
        fn set_view(&mut self, center: MapPoint) {
            self.calls.push(Call::View(center));
        }
    }

    fn key(s: &str) -> LayerKey {
        s.parse().unwrap()
    }

    fn registry() -> MapRegistry<usize> {
        let groups = vec![
            Group::build(1)
                .name("West")
                .zip_codes(&["98006", "98007", "99999"])
                .finish(),
            Group::build(2)
                .name("East")
                .zip_codes(&["98006+1234", "96201"])
                .finish(),
        ];
        let records = vec![
            ZipRecord::build()
                .code("98006")
                .name("BELLEVUE")
                .center(47.56, -122.15)
                .poly(&[(47.5, -122.2), (47.6, -122.1), (47.55, -122.3)])
                .finish(),
            ZipRecord::build()
                .code("98007")
                .poly(&[(47.6, -122.15), (47.65, -122.1), (47.62, -122.12)])
                .finish(),
            ZipRecord::build()
                .code("96201")
                .name("FPO AP")
                .undeliverable()
                .finish(),
        ];
        MapRegistry::new(groups, records)
    }

    #[test]
    fn selectors_of_known_codes() {
        let reg = registry();
        let keys: Vec<_> = reg.selectors().iter().map(|s| s.key.to_string()).collect();
        assert_eq!(vec!["1_98006", "1_98007", "2_98006+1234", "2_96201"], keys);

        let s = reg.selector(&key("1_98006")).unwrap();
        assert_eq!(Some("BELLEVUE"), s.title.as_deref());
        assert!(s.enabled);
        assert!(s.focusable);
        assert!(!s.checked);

        let s = reg.selector(&key("2_96201")).unwrap();
        assert!(!s.enabled);
        assert!(!s.focusable);
    }

    #[test]
    fn populate_draws_and_fits_each_group() {
        let mut reg = registry();
        let mut surface = MockSurface::default();
        reg.populate(&mut surface);

        assert_eq!(
            &surface.calls[..2],
            &[
                Call::Draw("1_98006".into(), Color::Red),
                Call::Draw("1_98007".into(), Color::Red)
            ]
        );
        let Call::Fit(bbox) = surface.calls[2] else {
            panic!("expected fit bounds");
        };
        for pt in [
            MapPoint::from_lat_lng_deg(47.64, -122.11),
            MapPoint::from_lat_lng_deg(47.51, -122.29),
        ] {
            assert_eq!(bbox, bbox.extended_by(pt));
        }
        assert_eq!(Call::Draw("2_98006+1234".into(), Color::Blue), surface.calls[3]);
        assert!(matches!(surface.calls[4], Call::Fit(_)));
        assert_eq!(5, surface.calls.len());

        assert_eq!(3, reg.layer_count());
        for s in reg.selectors() {
            assert_eq!(s.enabled, s.checked);
            assert_eq!(s.checked, reg.has_layer(&s.key));
        }
    }

    #[test]
    fn skip_fit_bounds_without_layers() {
        let groups = vec![Group::build(1).zip_codes(&["96201"]).finish()];
        let records = vec![ZipRecord::build().code("96201").finish()];
        let mut reg = MapRegistry::new(groups, records);
        let mut surface = MockSurface::default();
        reg.populate(&mut surface);
        assert!(surface.calls.is_empty());
        assert_eq!(None, reg.group_bounds(GroupId::new(1).unwrap()));
    }

    #[test]
    fn toggle_layers() {
        let mut reg = registry();
        let mut surface = MockSurface::default();
        let k = key("1_98007");

        reg.toggle(&k, true, &mut surface).unwrap();
        reg.toggle(&k, true, &mut surface).unwrap();
        assert!(reg.is_checked(&k));
        assert!(reg.has_layer(&k));
        assert_eq!(1, surface.calls.len());

        reg.toggle(&k, false, &mut surface).unwrap();
        reg.toggle(&k, false, &mut surface).unwrap();
        assert!(!reg.is_checked(&k));
        assert!(!reg.has_layer(&k));
        assert_eq!(
            vec![
                Call::Draw("1_98007".into(), Color::Red),
                Call::Remove("1_98007".into())
            ],
            surface.calls
        );
    }

    #[test]
    fn toggle_unknown_or_disabled() {
        let mut reg = registry();
        let mut surface = MockSurface::default();
        assert!(matches!(
            reg.toggle(&key("1_99999"), true, &mut surface),
            Err(Error::UnknownLayerKey(_))
        ));
        assert!(matches!(
            reg.toggle(&key("3_98006"), true, &mut surface),
            Err(Error::UnknownLayerKey(_))
        ));
        assert!(matches!(
            reg.toggle(&key("2_96201"), true, &mut surface),
            Err(Error::LayerDisabled(_))
        ));
        assert!(surface.calls.is_empty());
        assert!(!reg.is_checked(&key("2_96201")));
    }

    #[test]
    fn same_code_in_different_groups() {
        let mut reg = registry();
        let mut surface = MockSurface::default();
        reg.toggle(&key("1_98006"), true, &mut surface).unwrap();
        reg.toggle(&key("2_98006+1234"), true, &mut surface).unwrap();
        reg.toggle(&key("1_98006"), false, &mut surface).unwrap();
        assert!(reg.has_layer(&key("2_98006+1234")));
        assert_eq!(1, reg.layer_count());
    }

    #[test]
    fn focus_center() {
        let reg = registry();
        let mut surface = MockSurface::default();
        assert!(reg.focus(&key("1_98006"), &mut surface).unwrap());
        assert!(!reg.focus(&key("1_98007"), &mut surface).unwrap());
        assert!(reg.focus(&key("4_98006"), &mut surface).is_err());
        assert_eq!(
            vec![Call::View(MapPoint::from_lat_lng_deg(47.56, -122.15))],
            surface.calls
        );
    }

    #[test]
    fn remove_group_with_layers() {
        let mut reg = registry();
        let mut surface = MockSurface::default();
        reg.populate(&mut surface);
        surface.calls.clear();

        let removed = reg.remove_group(GroupId::new(1).unwrap(), &mut surface).unwrap();
        assert_eq!("West", removed.name);
        assert_eq!(
            vec![Call::Remove("1_98006".into()), Call::Remove("1_98007".into())],
            surface.calls
        );
        assert_eq!(1, reg.groups().len());
        assert_eq!(1, reg.layer_count());
        assert_eq!(0, reg.group_selectors(GroupId::new(1).unwrap()).count());
        assert!(reg.remove_group(GroupId::new(1).unwrap(), &mut surface).is_none());
    }
}
