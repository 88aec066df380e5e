use geom::Vec2;
use serde::{Deserialize, Serialize};
use slotmapd::new_key_type;

use crate::{ConnectorID, Roads};

new_key_type! {
    pub struct RoadID;
}

/// Which side of a junction curve the sidewalk is authored to occupy,
/// relative to the arc center: `Internal` hugs the center, `External` faces
/// away from it. When absent, the side is resolved by sampling.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CurveSide {
    Internal,
    External,
}

/// A junction anchor. Referenced roads may have been deleted since the pole
/// was authored; consumers skip dangling ids.
#[derive(Copy, Clone, Debug, Serialize, Deserialize)]
pub struct Pole {
    pub pos: Vec2,
    pub road: RoadID,
    pub connector: Option<ConnectorID>,
    pub connector_target: Option<RoadID>,
    pub other_road: Option<RoadID>,
    pub collision_road: Option<RoadID>,
    pub curve_connection: bool,
    pub curve_side: Option<CurveSide>,
}

impl Pole {
    pub fn new(pos: Vec2, road: RoadID) -> Self {
        Self {
            pos,
            road,
            connector: None,
            connector_target: None,
            other_road: None,
            collision_road: None,
            curve_connection: false,
            curve_side: None,
        }
    }

    /// All roads meeting at this pole, own road included
    pub fn candidate_roads(&self) -> impl Iterator<Item = RoadID> + '_ {
        std::iter::once(self.road)
            .chain(self.connector_target)
            .chain(self.other_road)
            .chain(self.collision_road)
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct RoadPoles {
    pub end: Vec<Pole>,
    pub connection: Vec<Pole>,
}

/// One road's renderable span. Immutable once the generation pass has run.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Road {
    pub id: RoadID,

    pub center_start: Vec2,
    /// unit, direction of travel
    pub dir: Vec2,
    /// unit, counterclockwise perpendicular to dir
    pub normal: Vec2,
    pub length: f32,
    /// half-width from centerline to curb face
    pub boundary_half: f32,

    pub poles: RoadPoles,
}

impl Road {
    /// Builds the road; degenerate spans (coincident endpoints) are rejected
    pub fn make(
        center_start: Vec2,
        center_end: Vec2,
        boundary_half: f32,
        roads: &mut Roads,
    ) -> Option<RoadID> {
        let (dir, length) = (center_end - center_start).dir_dist()?;

        Some(roads.insert_with_key(|id| Self {
            id,
            center_start,
            dir,
            normal: -dir.perpendicular(),
            length,
            boundary_half,
            poles: RoadPoles::default(),
        }))
    }

    pub fn center_end(&self) -> Vec2 {
        self.center_start + self.dir * self.length
    }
}
