use geom::{Radians, Vec2};
use serde::{Deserialize, Serialize};
use slotmapd::new_key_type;

new_key_type! {
    pub struct ConnectorID;
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnDir {
    Left,
    Right,
}

/// One piece of the curb-following path around a junction.
/// Consecutive segments are assumed to be continuous; this is not checked.
#[derive(Copy, Clone, Debug, Serialize, Deserialize)]
pub enum ConnectorSegment {
    Arc {
        center: Vec2,
        radius: f32,
        /// world frame, counterclockwise-positive
        start_angle: Radians,
        /// always >= 0; `turn` carries the sweep direction
        delta_angle: Radians,
        turn: TurnDir,
    },
    Straight {
        start: Vec2,
        end: Vec2,
        /// unit, from start to end
        dir: Vec2,
        length: f32,
    },
}

impl ConnectorSegment {
    /// Straight piece with dir/length derived; None when endpoints coincide
    pub fn straight(start: Vec2, end: Vec2) -> Option<Self> {
        let (dir, length) = (end - start).dir_dist()?;
        Some(Self::Straight {
            start,
            end,
            dir,
            length,
        })
    }

    pub fn arc_center(&self) -> Option<Vec2> {
        match *self {
            Self::Arc { center, .. } => Some(center),
            Self::Straight { .. } => None,
        }
    }
}

/// The curb-following path bridging two road curb lines at a junction.
/// Built once per junction; a connector may be referenced from both of its
/// endpoint poles but is rendered once.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Connector {
    pub id: ConnectorID,
    /// false when the junction solver gave up; the connector is then ignored
    pub ok: bool,
    pub segments: Vec<ConnectorSegment>,
}
