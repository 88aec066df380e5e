use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::{Road, Roads, EPS};

#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Interval {
    pub start: f32,
    pub end: f32,
}

/// Where a road's paintable/walkable span is partitioned (cuts) and which
/// parts of it are excluded outright (gaps, e.g. junction mouths).
/// Invariants: cuts strictly ascending, every gap within [cuts[0], cuts[last]].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RenderData {
    pub cuts: Vec<f32>,
    pub gaps: Vec<Interval>,
}

impl RenderData {
    /// Adjacent cut pairs that survive gap exclusion. A gap overlapping a
    /// slice by more than EPS on both sides drops the whole slice, there is
    /// no partial trimming.
    pub fn slices(&self) -> impl Iterator<Item = (f32, f32)> + '_ {
        self.cuts
            .iter()
            .copied()
            .tuple_windows()
            .filter(move |&(t0, t1)| {
                t1 - t0 > EPS
                    && !self
                        .gaps
                        .iter()
                        .any(|g| t1 >= g.start + EPS && t0 <= g.end - EPS)
            })
    }
}

/// Derives cut points and gap intervals for one road. The span always breaks
/// at both road ends; every resolvable side-road connection punches a gap as
/// wide as the crossing road so nothing is painted through the junction
/// mouth.
pub fn build_render_data(road: &Road, roads: &Roads) -> RenderData {
    let mut cuts = vec![0.0, road.length];
    let mut gaps = Vec::with_capacity(road.poles.connection.len());

    for pole in &road.poles.connection {
        let other = unwrap_cont!(pole.other_road.and_then(|id| roads.get(id)));
        if !other.boundary_half.is_finite() {
            continue;
        }

        let t = (pole.pos - road.center_start).dot(road.dir);
        if t <= EPS || t >= road.length - EPS {
            continue;
        }

        let start = (t - other.boundary_half).max(0.0);
        let end = (t + other.boundary_half).min(road.length);
        cuts.push(start);
        cuts.push(end);
        gaps.push(Interval { start, end });
    }

    cuts.sort_unstable_by(f32::total_cmp);
    cuts.dedup_by(|a, b| (*a - *b).abs() <= EPS);

    RenderData { cuts, gaps }
}
