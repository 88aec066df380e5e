use geom::Vec2;
use serde::{Deserialize, Serialize};
use slotmapd::HopSlotMap;

use crate::{Connector, ConnectorID, ConnectorSegment, Road, RoadID};

pub type Roads = HopSlotMap<RoadID, Road>;
pub type Connectors = HopSlotMap<ConnectorID, Connector>;

/// The full road graph consumed by the render passes. Stores are
/// slotmap-keyed so poles and connectors can cross-reference each other with
/// stable ids.
#[derive(Clone, Default, Serialize, Deserialize)]
pub struct RoadNetwork {
    pub roads: Roads,
    pub connectors: Connectors,
}

impl RoadNetwork {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn add_road(
        &mut self,
        center_start: Vec2,
        center_end: Vec2,
        boundary_half: f32,
    ) -> Option<RoadID> {
        Road::make(center_start, center_end, boundary_half, &mut self.roads)
    }

    pub fn add_connector(&mut self, ok: bool, segments: Vec<ConnectorSegment>) -> ConnectorID {
        self.connectors
            .insert_with_key(|id| Connector { id, ok, segments })
    }
}
