use zc_boundary::MapCommand;

use crate::core::{entities::*, registry::MapSurface};

/// Records all drawing operations as commands that
/// are replayed by the map script in the browser.
#[derive(Debug, Default)]
pub struct ScriptSurface {
    commands: Vec<MapCommand>,
}

impl ScriptSurface {
    pub fn into_commands(self) -> Vec<MapCommand> {
        self.commands
    }
}

impl MapSurface for ScriptSurface {
    type Layer = ();

    fn draw_polygon(&mut self, key: &LayerKey, group: &Group, record: &ZipRecord) {
        self.commands.push(MapCommand::DrawPolygon {
            key: key.to_string(),
            group: group.id.number(),
            color: group.color.to_string(),
            poly: record.poly.iter().copied().map(Into::into).collect(),
        });
    }

    fn remove_layer(&mut self, key: &LayerKey, _: ()) {
        self.commands.push(MapCommand::RemoveLayer {
            key: key.to_string(),
            group: key.group.number(),
        });
    }

    fn fit_bounds(&mut self, bbox: &MapBbox) {
        self.commands.push(MapCommand::fit_bounds(bbox));
    }

    fn set_view(&mut self, center: MapPoint) {
        self.commands.push(MapCommand::SetView {
            center: center.into(),
        });
    }
}
