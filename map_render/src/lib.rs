//! Road-network rendering layer: lane markings, curbs and sidewalks are
//! derived from the road graph and emitted as draw commands into
//! caller-owned output sinks. Meshing/texturing is the caller's business.

#[macro_use]
extern crate common;

mod objects {
    mod connector;
    mod road;

    pub use connector::*;
    pub use road::*;
}

pub use objects::*;

mod markings;
mod network;
mod params;
mod render_data;
mod sidewalk;
mod tess;

pub use markings::*;
pub use network::*;
pub use params::*;
pub use render_data::*;
pub use sidewalk::*;
pub use tess::*;

use geom::Radians;

/// Generic geometric tolerance, in meters
pub const EPS: f32 = 1e-5;
pub const HALF: f32 = 0.5;
/// Bias on the dashed-marking loop bound so the last dash isn't dropped to rounding
pub const DASH_END_EPS: f32 = 1e-4;

/// One full static-geometry pass over the network.
/// Each sub-pass appends to its own sink and never reads it back, so the
/// output is deterministic for a given network.
pub fn render_map(
    network: &RoadNetwork,
    markings: &mut impl MarkingsSink,
    curb: &mut impl CurbSink,
    sidewalk: &mut impl SidewalkSink,
    params: &RenderParams,
) {
    render_road_markings(network, markings, params);
    render_curbs(network, curb, params);
    render_sidewalks_from_curbs(network, sidewalk, params);
}

/// Yaw about world Y for a planar direction. Positions map planar y to
/// world z, but yaw is measured spinning the other way, hence atan2(-dy, dx)
#[inline]
pub fn world_yaw(dir: geom::Vec2) -> Radians {
    dir.flipy().angle_cossin()
}
