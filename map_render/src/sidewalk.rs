use common::FastSet;
use geom::{Line, Radians, Segment, Vec2};
use ordered_float::OrderedFloat;

use crate::{
    build_render_data, Connector, ConnectorID, ConnectorSegment, CurveSide, Pole, QuadXZ,
    RenderParams, RingSectorXZ, RoadNetwork, SidewalkSink, TurnDir, EPS, HALF,
};

/// Emits sidewalk geometry for the whole network: ribbons along straight
/// road shoulders, ring sectors and quads around junction connectors.
/// Best-effort by design, a malformed road or connector drops out silently
/// and the rest of the batch still renders.
pub fn render_sidewalks_from_curbs(
    network: &RoadNetwork,
    sidewalk: &mut impl SidewalkSink,
    params: &RenderParams,
) {
    if !(params.sidewalk_width.is_finite() && params.sidewalk_width > 0.0) {
        return;
    }
    if !(params.curb_t.is_finite() && params.curb_t > 0.0) {
        return;
    }
    if !params.sidewalk_y.is_finite() {
        return;
    }

    render_straight_sidewalks(network, sidewalk, params);

    // a connector is reachable from both of its endpoint poles but must be
    // rendered once
    let mut visited: FastSet<ConnectorID> = FastSet::default();
    for (_, road) in network.roads.iter() {
        for pole in road.poles.end.iter().chain(road.poles.connection.iter()) {
            let Some(cid) = pole.connector else {
                continue;
            };
            let conn = unwrap_contlog!(
                network.connectors.get(cid),
                "pole references a connector that does not exist anymore"
            );
            if !conn.ok || conn.segments.is_empty() {
                continue;
            }
            if !visited.insert(cid) {
                continue;
            }
            add_connector_sidewalks(network, conn, pole, sidewalk, params);
        }
    }
}

/// Two parallel ribbons per road, one per shoulder, spanning from the curb
/// face outward by the sidewalk width. Junction mouths are excluded by the
/// render-data gaps.
fn render_straight_sidewalks(
    network: &RoadNetwork,
    sidewalk: &mut impl SidewalkSink,
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
        let inner = road.boundary_half;
        let outer = inner + params.sidewalk_width;

        for (t0, t1) in rd.slices() {
            let a = road.center_start + road.dir * t0;
            let b = road.center_start + road.dir * t1;

            for side in [1.0f32, -1.0] {
                let lo = Segment::new(a, b).offset(road.normal, side * inner);
                let hi = Segment::new(a, b).offset(road.normal, side * outer);
                sidewalk.add_quad_xz(QuadXZ {
                    a: lo.src,
                    b: lo.dst,
                    c: hi.dst,
                    d: hi.src,
                    y: params.sidewalk_y,
                });
            }
        }
    }
}

/// Sidewalk patches along one connector: a ring sector per arc piece, a quad
/// per straight piece, each on the side of the curb away from the roadway.
fn add_connector_sidewalks(
    network: &RoadNetwork,
    conn: &Connector,
    pole: &Pole,
    sidewalk: &mut impl SidewalkSink,
    params: &RenderParams,
) {
    let curb_half = params.curb_t * HALF;

    for (i, seg) in conn.segments.iter().enumerate() {
        match *seg {
            ConnectorSegment::Arc {
                center,
                radius,
                start_angle,
                delta_angle,
                turn,
            } => {
                if radius <= EPS {
                    continue;
                }

                let road_on_outer = match pole.curve_side {
                    Some(CurveSide::Internal) => true,
                    Some(CurveSide::External) => false,
                    None => {
                        let mid_ang = match turn {
                            TurnDir::Left => start_angle + delta_angle * 0.5,
                            TurnDir::Right => start_angle - delta_angle * 0.5,
                        };
                        arc_road_on_outer_radius(network, pole, center, radius, mid_ang, curb_half)
                    }
                };

                // corner fillets have their center inside the sidewalk
                // block, so road-on-outer extends the ring inward
                let (inner_r, outer_r) = if road_on_outer {
                    let face = radius - curb_half;
                    (face - params.sidewalk_width, face)
                } else {
                    let face = radius + curb_half;
                    (face, face + params.sidewalk_width)
                };
                let inner_r = inner_r.max(0.01);
                let outer_r = outer_r.max(inner_r + 0.01);

                let (start_ang, span_ang) = curb_arc_span(start_angle, delta_angle, turn);

                sidewalk.add_ring_sector_xz(RingSectorXZ {
                    center_x: center.x,
                    center_z: center.y,
                    y: params.sidewalk_y,
                    inner_r,
                    outer_r,
                    start_ang,
                    span_ang,
                    segs: params.arc_segs,
                });
            }
            ConnectorSegment::Straight {
                start,
                end,
                dir,
                length,
            } => {
                if length <= EPS {
                    continue;
                }

                let left = -dir.perpendicular();
                let prev_arc_center = (i > 0)
                    .then(|| conn.segments[i - 1])
                    .and_then(|prev| prev.arc_center());

                let sign = match (pole.curve_side, prev_arc_center) {
                    (Some(side), Some(c)) => {
                        // which side of the radial ray does the segment
                        // start on
                        let d = (start - c).dot(left);
                        match side {
                            CurveSide::External => {
                                if d >= 0.0 {
                                    1.0
                                } else {
                                    -1.0
                                }
                            }
                            CurveSide::Internal => {
                                if d >= 0.0 {
                                    -1.0
                                } else {
                                    1.0
                                }
                            }
                        }
                    }
                    _ => connector_side_sign_for_straight(network, pole, start, end, left, curb_half),
                };

                let lo = Segment::new(start, end).offset(left, sign * curb_half);
                let hi =
                    Segment::new(start, end).offset(left, sign * (curb_half + params.sidewalk_width));
                sidewalk.add_quad_xz(QuadXZ {
                    a: lo.src,
                    b: lo.dst,
                    c: hi.dst,
                    d: hi.src,
                    y: params.sidewalk_y,
                });
            }
        }
    }
}

/// Does the roadway occupy the outer radius of this arc? Probes just outside
/// each curb face at the arc's angular midpoint and keeps the side whose
/// probe lies closest to a connected road's centerline. With nothing
/// measurable on either side, the common corner-fillet case (road outside,
/// sidewalk toward the center) wins.
fn arc_road_on_outer_radius(
    network: &RoadNetwork,
    pole: &Pole,
    center: Vec2,
    radius: f32,
    mid_ang: Radians,
    curb_half: f32,
) -> bool {
    let radial = mid_ang.vec2();
    let probe = curb_half + EPS;
    let d_out = min_distance_to_road_centerlines(network, pole, center + radial * (radius + probe));
    let d_in = min_distance_to_road_centerlines(network, pole, center + radial * (radius - probe));

    match (d_out, d_in) {
        (None, None) => true,
        (None, Some(_)) => false,
        (Some(_), None) => true,
        (Some(out), Some(inn)) => out <= inn,
    }
}

/// Which side of a straight connector piece gets the sidewalk: the one
/// farther from every connected road's centerline. Returns the sign applied
/// to the segment's left normal.
fn connector_side_sign_for_straight(
    network: &RoadNetwork,
    pole: &Pole,
    start: Vec2,
    end: Vec2,
    left: Vec2,
    curb_half: f32,
) -> f32 {
    let mid = Segment::new(start, end).middle();
    let probe = curb_half + EPS;
    let d_plus = min_distance_to_road_centerlines(network, pole, mid + left * probe);
    let d_minus = min_distance_to_road_centerlines(network, pole, mid - left * probe);

    match (d_plus, d_minus) {
        (None, _) => 1.0,
        (Some(_), None) => -1.0,
        (Some(p), Some(m)) => {
            if p >= m {
                1.0
            } else {
                -1.0
            }
        }
    }
}

/// Minimum perpendicular distance from p to the centerline of any road
/// meeting at the pole. None when every cross-reference dangles.
fn min_distance_to_road_centerlines(network: &RoadNetwork, pole: &Pole, p: Vec2) -> Option<f32> {
    pole.candidate_roads()
        .filter_map(|id| network.roads.get(id))
        .map(|road| Line::new_dir(road.center_start, road.dir).distance(p))
        .min_by_key(|&d| OrderedFloat(d))
}

/// World-frame arc span converted to the ring-sector drawing frame, which is
/// the world frame mirrored (planar y maps to world z). The sweep is always
/// positive in the local frame, so a left turn anchors on its (negated) end
/// angle and a right turn on its (negated) start angle.
fn curb_arc_span(start_angle: Radians, delta_angle: Radians, turn: TurnDir) -> (Radians, Radians) {
    match turn {
        TurnDir::Left => ((-(start_angle + delta_angle)).normalized(), delta_angle),
        TurnDir::Right => ((-start_angle).normalized(), delta_angle),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{RoadID, RoadNetwork, SidewalkBuffer, SidewalkCmd};
    use common::logger::MyLog;
    use geom::vec2;
    use std::f32::consts::{FRAC_PI_2, PI};

    fn params() -> RenderParams {
        RenderParams::default()
    }

    /// T junction: east-west main road, side road joining from the south,
    /// corner fillet at the southeast corner of the junction mouth.
    /// Main centerline y=0 (half 4), side centerline x=0 (half 4),
    /// fillet radius 2 centered at (6, -6), sweeping from the side road's
    /// east curb up to the main road's south curb.
    fn t_junction() -> (RoadNetwork, RoadID) {
        let mut network = RoadNetwork::empty();
        let main = network
            .add_road(vec2(-50.0, 0.0), vec2(50.0, 0.0), 4.0)
            .unwrap();
        let side = network
            .add_road(vec2(0.0, -50.0), vec2(0.0, 0.0), 4.0)
            .unwrap();

        let arc = ConnectorSegment::Arc {
            center: vec2(6.0, -6.0),
            radius: 2.0,
            start_angle: Radians(FRAC_PI_2),
            delta_angle: Radians(FRAC_PI_2),
            turn: TurnDir::Left,
        };
        let cid = network.add_connector(true, vec![arc]);

        let mut pole = Pole::new(vec2(4.0, -4.0), side);
        pole.connector = Some(cid);
        pole.other_road = Some(main);
        network.roads[side].poles.end.push(pole);

        (network, side)
    }

    #[test]
    fn test_straight_road_gets_two_ribbons() {
        MyLog::init();
        let mut network = RoadNetwork::empty();
        network
            .add_road(vec2(0.0, 0.0), vec2(40.0, 0.0), 4.0)
            .unwrap();

        let mut buf = SidewalkBuffer::default();
        render_sidewalks_from_curbs(&network, &mut buf, &params());

        let quads: Vec<_> = buf.quads().collect();
        assert_eq!(quads.len(), 2);

        // +normal shoulder spans y = 4 .. 7, -normal shoulder mirrors it
        assert!(quads[0].a.approx_eq(vec2(0.0, 4.0)));
        assert!(quads[0].b.approx_eq(vec2(40.0, 4.0)));
        assert!(quads[0].c.approx_eq(vec2(40.0, 7.0)));
        assert!(quads[0].d.approx_eq(vec2(0.0, 7.0)));
        assert!(quads[1].a.approx_eq(vec2(0.0, -4.0)));
        assert!(quads[1].d.approx_eq(vec2(0.0, -7.0)));
    }

    #[test]
    fn test_invalid_params_are_a_noop() {
        let (network, _) = t_junction();
        let mut buf = SidewalkBuffer::default();

        let mut p = params();
        p.sidewalk_width = f32::NAN;
        render_sidewalks_from_curbs(&network, &mut buf, &p);

        let mut p = params();
        p.curb_t = -1.0;
        render_sidewalks_from_curbs(&network, &mut buf, &p);

        let mut p = params();
        p.sidewalk_y = f32::INFINITY;
        render_sidewalks_from_curbs(&network, &mut buf, &p);

        assert!(buf.is_empty());
    }

    #[test]
    fn test_corner_fillet_resolves_road_on_outer() {
        let (network, _) = t_junction();
        let mut buf = SidewalkBuffer::default();
        render_sidewalks_from_curbs(&network, &mut buf, &params());

        let sectors: Vec<_> = buf.ring_sectors().collect();
        assert_eq!(sectors.len(), 1);
        let s = sectors[0];

        // asphalt beyond the fillet radius: ring hugs the center,
        // outer radius sits on the inner curb face
        let p = params();
        let expected_outer = 2.0 - p.curb_t * HALF;
        assert_delta!(s.outer_r, expected_outer, 1e-6);
        assert_delta!(s.inner_r, (expected_outer - p.sidewalk_width).max(0.01), 1e-6);

        // left turn: anchored on the negated world end angle, wrapped
        assert_delta!(s.start_ang.0, PI, 1e-6);
        assert_delta!(s.span_ang.0, FRAC_PI_2, 1e-6);
        assert_eq!((s.center_x, s.center_z), (6.0, -6.0));
    }

    #[test]
    fn test_curve_side_short_circuits_sampling() {
        let (mut network, side) = t_junction();

        // declare the opposite of what sampling would find: External puts
        // the road on the inner radius no matter the geometry
        network.roads[side].poles.end[0].curve_side = Some(CurveSide::External);

        let mut buf = SidewalkBuffer::default();
        render_sidewalks_from_curbs(&network, &mut buf, &params());

        let p = params();
        let s = *buf.ring_sectors().next().unwrap();
        let expected_inner = 2.0 + p.curb_t * HALF;
        assert_delta!(s.inner_r, expected_inner, 1e-6);
        assert_delta!(s.outer_r, expected_inner + p.sidewalk_width, 1e-6);
    }

    #[test]
    fn test_connector_rendered_once_per_identity() {
        let (mut network, side) = t_junction();
        let main = network.roads[side].poles.end[0].other_road.unwrap();
        let cid = network.roads[side].poles.end[0].connector.unwrap();

        // the main road references the same connector from its own pole
        let mut pole = Pole::new(vec2(4.0, -4.0), main);
        pole.connector = Some(cid);
        pole.other_road = Some(side);
        network.roads[main].poles.end.push(pole);

        let mut buf = SidewalkBuffer::default();
        render_sidewalks_from_curbs(&network, &mut buf, &params());
        assert_eq!(buf.ring_sectors().count(), 1);
    }

    #[test]
    fn test_skips_failed_and_dangling_connectors() {
        MyLog::init();
        let (mut network, side) = t_junction();
        let cid = network.roads[side].poles.end[0].connector.unwrap();
        network.connectors[cid].ok = false;

        let mut buf = SidewalkBuffer::default();
        render_sidewalks_from_curbs(&network, &mut buf, &params());
        assert_eq!(buf.ring_sectors().count(), 0);

        network.connectors.remove(cid);
        let mut buf = SidewalkBuffer::default();
        render_sidewalks_from_curbs(&network, &mut buf, &params());
        assert_eq!(buf.ring_sectors().count(), 0);
    }

    #[test]
    fn test_straight_connector_walks_away_from_road() {
        let mut network = RoadNetwork::empty();
        let main = network
            .add_road(vec2(-50.0, 0.0), vec2(50.0, 0.0), 4.0)
            .unwrap();

        // a straight curb piece along the south curb face; its left normal
        // points at the road, so the sidewalk must flip to the far side
        let seg = ConnectorSegment::straight(vec2(0.0, -4.0), vec2(10.0, -4.0)).unwrap();
        let cid = network.add_connector(true, vec![seg]);
        let mut pole = Pole::new(vec2(0.0, -4.0), main);
        pole.connector = Some(cid);
        network.roads[main].poles.end.push(pole);

        let mut buf = SidewalkBuffer::default();
        render_sidewalks_from_curbs(&network, &mut buf, &params());

        let p = params();
        let curb_half = p.curb_t * HALF;
        // connector quad is emitted after the straight ribbons
        let q = buf.quads().last().unwrap();
        assert!((q.a.y - (-4.0 - curb_half)).abs() < 1e-6);
        assert!((q.d.y - (-4.0 - curb_half - p.sidewalk_width)).abs() < 1e-6);
        assert!((q.a.x - 0.0).abs() < 1e-6 && (q.b.x - 10.0).abs() < 1e-6);
    }

    #[test]
    fn test_declared_side_with_preceding_arc() {
        let (mut network, side) = t_junction();

        // extend the fillet with a straight piece running east along the
        // main road's south curb; radially the piece starts below-right of
        // the arc center
        let cid = network.roads[side].poles.end[0].connector.unwrap();
        let tail = ConnectorSegment::straight(vec2(6.0, -4.0), vec2(16.0, -4.0)).unwrap();
        network.connectors[cid].segments.push(tail);
        network.roads[side].poles.end[0].curve_side = Some(CurveSide::External);

        let mut buf = SidewalkBuffer::default();
        render_sidewalks_from_curbs(&network, &mut buf, &params());

        // External: sidewalk on the side away from the arc center.
        // start - center = (0, 2), left = (0, 1) => d > 0 => +left (north)
        let p = params();
        let curb_half = p.curb_t * HALF;
        let q = buf.quads().last().unwrap();
        assert!((q.a.y - (-4.0 + curb_half)).abs() < 1e-6);
        assert!((q.d.y - (-4.0 + curb_half + p.sidewalk_width)).abs() < 1e-6);

        // Internal flips to the other side of the piece
        network.roads[side].poles.end[0].curve_side = Some(CurveSide::Internal);
        let mut buf = SidewalkBuffer::default();
        render_sidewalks_from_curbs(&network, &mut buf, &params());
        let q = buf.quads().last().unwrap();
        assert!((q.a.y - (-4.0 - curb_half)).abs() < 1e-6);
    }

    #[test]
    fn test_degenerate_connector_pieces_are_skipped() {
        let (mut network, side) = t_junction();
        let cid = network.roads[side].poles.end[0].connector.unwrap();
        network.connectors[cid].segments = vec![
            ConnectorSegment::Arc {
                center: vec2(6.0, -6.0),
                radius: 0.0,
                start_angle: Radians::ZERO,
                delta_angle: Radians(FRAC_PI_2),
                turn: TurnDir::Left,
            },
            ConnectorSegment::Straight {
                start: vec2(0.0, -4.0),
                end: vec2(0.0, -4.0),
                dir: Vec2::X,
                length: 0.0,
            },
        ];

        let mut buf = SidewalkBuffer::default();
        render_sidewalks_from_curbs(&network, &mut buf, &params());
        assert!(buf.cmds.iter().all(|c| matches!(c, SidewalkCmd::Quad(_))));
        // only the straight-shoulder ribbons remain
        assert_eq!(buf.quads().count(), 4);
    }

    #[test]
    fn test_render_is_idempotent() {
        let (network, _) = t_junction();

        let mut a = SidewalkBuffer::default();
        let mut b = SidewalkBuffer::default();
        render_sidewalks_from_curbs(&network, &mut a, &params());
        render_sidewalks_from_curbs(&network, &mut b, &params());

        assert!(!a.is_empty());
        assert_eq!(a, b);
    }
}
