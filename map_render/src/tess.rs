use geom::{Radians, Vec2};

/// Lane-marking sink. Boxes lie flat at height y, sized length along the
/// heading by width across it.
pub trait MarkingsSink {
    fn add_yellow(&mut self, x: f32, y: f32, z: f32, length: f32, width: f32, heading: Radians);
    fn add_white(&mut self, x: f32, y: f32, z: f32, length: f32, width: f32, heading: Radians);
}

pub trait CurbSink {
    #[allow(clippy::too_many_arguments)]
    fn add_box(
        &mut self,
        x: f32,
        y: f32,
        z: f32,
        length: f32,
        height: f32,
        thickness: f32,
        rot_y: Radians,
        color: u32,
    );
}

/// Flat quad in the XZ plane; corners in order (a, b) along the inner edge
/// then (c, d) back along the outer edge. Planar y maps to world z.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct QuadXZ {
    pub a: Vec2,
    pub b: Vec2,
    pub c: Vec2,
    pub d: Vec2,
    pub y: f32,
}

/// Annular wedge in the XZ plane. Angles are in the drawing frame, the world
/// frame mirrored (`a_local = -a_world`, planar y maps to world z); the
/// sector sweeps span_ang in the positive local direction from start_ang.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RingSectorXZ {
    pub center_x: f32,
    pub center_z: f32,
    pub y: f32,
    pub inner_r: f32,
    pub outer_r: f32,
    pub start_ang: Radians,
    pub span_ang: Radians,
    pub segs: u32,
}

pub trait SidewalkSink {
    fn add_quad_xz(&mut self, quad: QuadXZ);
    fn add_ring_sector_xz(&mut self, sector: RingSectorXZ);
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct MarkBox {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub length: f32,
    pub width: f32,
    pub heading: Radians,
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum MarkingCmd {
    Yellow(MarkBox),
    White(MarkBox),
}

/// Records marking draw calls in emission order
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MarkingBuffer {
    pub cmds: Vec<MarkingCmd>,
}

impl MarkingBuffer {
    pub fn len(&self) -> usize {
        self.cmds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cmds.is_empty()
    }
}

impl MarkingsSink for MarkingBuffer {
    fn add_yellow(&mut self, x: f32, y: f32, z: f32, length: f32, width: f32, heading: Radians) {
        self.cmds.push(MarkingCmd::Yellow(MarkBox {
            x,
            y,
            z,
            length,
            width,
            heading,
        }));
    }

    fn add_white(&mut self, x: f32, y: f32, z: f32, length: f32, width: f32, heading: Radians) {
        self.cmds.push(MarkingCmd::White(MarkBox {
            x,
            y,
            z,
            length,
            width,
            heading,
        }));
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CurbBox {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub length: f32,
    pub height: f32,
    pub thickness: f32,
    pub rot_y: Radians,
    pub color: u32,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct CurbBuffer {
    pub boxes: Vec<CurbBox>,
}

impl CurbBuffer {
    pub fn len(&self) -> usize {
        self.boxes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.boxes.is_empty()
    }
}

impl CurbSink for CurbBuffer {
    fn add_box(
        &mut self,
        x: f32,
        y: f32,
        z: f32,
        length: f32,
        height: f32,
        thickness: f32,
        rot_y: Radians,
        color: u32,
    ) {
        self.boxes.push(CurbBox {
            x,
            y,
            z,
            length,
            height,
            thickness,
            rot_y,
            color,
        });
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum SidewalkCmd {
    Quad(QuadXZ),
    RingSector(RingSectorXZ),
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SidewalkBuffer {
    pub cmds: Vec<SidewalkCmd>,
}

impl SidewalkBuffer {
    pub fn len(&self) -> usize {
        self.cmds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cmds.is_empty()
    }

    pub fn quads(&self) -> impl Iterator<Item = &QuadXZ> {
        self.cmds.iter().filter_map(|c| match c {
            SidewalkCmd::Quad(q) => Some(q),
            SidewalkCmd::RingSector(_) => None,
        })
    }

    pub fn ring_sectors(&self) -> impl Iterator<Item = &RingSectorXZ> {
        self.cmds.iter().filter_map(|c| match c {
            SidewalkCmd::RingSector(s) => Some(s),
            SidewalkCmd::Quad(_) => None,
        })
    }
}

impl SidewalkSink for SidewalkBuffer {
    fn add_quad_xz(&mut self, quad: QuadXZ) {
        self.cmds.push(SidewalkCmd::Quad(quad));
    }

    fn add_ring_sector_xz(&mut self, sector: RingSectorXZ) {
        self.cmds.push(SidewalkCmd::RingSector(sector));
    }
}
