use geom::{Radians, Segment, Vec2};

use crate::{
    build_render_data, world_yaw, CurbSink, MarkingsSink, RenderParams, RoadNetwork, DASH_END_EPS,
    EPS, HALF,
};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MarkColor {
    Yellow,
    White,
}

/// Centroid and extent of one marking run along a road slice
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct MarkInfo {
    pub mid: Vec2,
    pub length: f32,
}

/// Emits exactly one marking box of mark.length x line_w at mark.mid
pub fn add_solid_mark(
    markings: &mut impl MarkingsSink,
    kind: MarkColor,
    mark: &MarkInfo,
    line_w: f32,
    heading: Radians,
    mark_y: f32,
) {
    match kind {
        MarkColor::Yellow => markings.add_yellow(
            mark.mid.x,
            mark_y,
            mark.mid.y,
            mark.length,
            line_w,
            heading,
        ),
        MarkColor::White => markings.add_white(
            mark.mid.x,
            mark_y,
            mark.mid.y,
            mark.length,
            line_w,
            heading,
        ),
    }
}

/// Emits equal dashes spaced dash_len + dash_gap apart, centered on
/// mark.mid and placed along dir. A run shorter than one dash is left
/// unmarked.
#[allow(clippy::too_many_arguments)]
pub fn add_dashed_mark(
    markings: &mut impl MarkingsSink,
    kind: MarkColor,
    mark: &MarkInfo,
    dir: Vec2,
    line_w: f32,
    heading: Radians,
    mark_y: f32,
    dash_len: f32,
    dash_gap: f32,
) {
    let step = dash_len + dash_gap;
    if !mark.length.is_finite() || dash_len <= EPS || step <= EPS {
        return;
    }

    let end = mark.length * HALF - dash_len * HALF + DASH_END_EPS;
    let mut t = -mark.length * HALF + dash_len * HALF;
    while t <= end {
        let pos = mark.mid + dir * t;
        match kind {
            MarkColor::Yellow => {
                markings.add_yellow(pos.x, mark_y, pos.y, dash_len, line_w, heading)
            }
            MarkColor::White => markings.add_white(pos.x, mark_y, pos.y, dash_len, line_w, heading),
        }
        t += step;
    }
}

/// Emits one oriented curb box from p0 to p1. Zero-length segments are
/// dropped rather than erroring, junction solvers produce them freely.
pub fn add_curb_segment(
    curb: &mut impl CurbSink,
    p0: Vec2,
    p1: Vec2,
    curb_y: f32,
    curb_h: f32,
    curb_t: f32,
    color: u32,
) {
    let seg = Segment::new(p0, p1);
    let len = seg.vec().mag();
    if len <= EPS {
        return;
    }

    let mid = seg.middle();
    curb.add_box(
        mid.x,
        curb_y,
        mid.y,
        len,
        curb_h,
        curb_t,
        world_yaw(seg.vec()),
        color,
    );
}

/// Center line (dashed yellow) and edge lines (solid white) for every
/// gap-surviving slice of every road
pub fn render_road_markings(
    network: &RoadNetwork,
    markings: &mut impl MarkingsSink,
    params: &RenderParams,
) {
    for (_, road) in network.roads.iter() {
        if !(road.length > 0.0) || !road.center_start.is_finite() {
            continue;
        }
        if !road.boundary_half.is_finite() {
            continue;
        }

        let rd = build_render_data(road, &network.roads);
        let heading = world_yaw(road.dir);
        let edge_off = road.boundary_half - params.edge_inset;

        for (t0, t1) in rd.slices() {
            let mid = road.center_start + road.dir * ((t0 + t1) * HALF);
            let center = MarkInfo {
                mid,
                length: t1 - t0,
            };
            add_dashed_mark(
                markings,
                MarkColor::Yellow,
                &center,
                road.dir,
                params.line_w,
                heading,
                params.mark_y,
                params.dash_len,
                params.dash_gap,
            );

            for side in [1.0f32, -1.0] {
                let edge = MarkInfo {
                    mid: mid + road.normal * (side * edge_off),
                    length: t1 - t0,
                };
                add_solid_mark(
                    markings,
                    MarkColor::White,
                    &edge,
                    params.line_w,
                    heading,
                    params.mark_y,
                );
            }
        }
    }
}

/// Curb boxes along both curb faces of every gap-surviving slice
pub fn render_curbs(network: &RoadNetwork, curb: &mut impl CurbSink, params: &RenderParams) {
    for (_, road) in network.roads.iter() {
        if !(road.length > 0.0) || !road.center_start.is_finite() {
            continue;
        }
        if !road.boundary_half.is_finite() {
            continue;
        }

        let rd = build_render_data(road, &network.roads);
        for (t0, t1) in rd.slices() {
            let a = road.center_start + road.dir * t0;
            let b = road.center_start + road.dir * t1;
            for side in [1.0f32, -1.0] {
                let face = Segment::new(a, b).offset(road.normal, side * road.boundary_half);
                add_curb_segment(
                    curb,
                    face.src,
                    face.dst,
                    params.curb_y,
                    params.curb_h,
                    params.curb_t,
                    params.curb_color,
                );
            }
        }
    }
}
